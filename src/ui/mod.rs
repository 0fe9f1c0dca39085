pub mod app;
pub mod components;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod options;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
