//! Reusable UI primitives.
//!
//! Widgets are immutable builders rendered with ratatui's `Widget` trait.
//! Interactive state (text, check marks, selection, modal focus) lives in
//! separate `*State` values owned by the caller. An [`ElementHandle`] bound
//! to a widget exposes where it was drawn and whether it has focus.

pub mod alert_dialog;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod dialog;
pub mod handle;
pub mod input;
pub mod select;

pub use alert_dialog::AlertDialog;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use checkbox::{CheckState, Checkbox, CheckboxState};
pub use dialog::{Dialog, DialogLayout, DismissReason, Modality, ModalState};
pub use handle::ElementHandle;
pub use input::{Input, InputState, INPUT_HEIGHT};
pub use select::{Select, SelectContent, SelectItem, SelectState};
