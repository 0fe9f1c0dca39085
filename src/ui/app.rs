use ratatui::layout::Position;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::omdb::LookupRequest;
use crate::ui::components::alert_dialog::ACTION_INDEX;
use crate::ui::components::{
    AlertDialog, DismissReason, ElementHandle, Input, InputState, ModalState,
};
use crate::ui::mvi::Reducer;
use crate::ui::options::{
    OptionsDialogState, OptionsField, OptionsHandles, OptionsIntent, OptionsReducer,
    SearchOptions,
};
use crate::ui::search::{LookupOutcome, SearchIntent, SearchReducer, SearchState};

/// Message shown when the lookup worker can no longer accept work.
pub const WORKER_UNAVAILABLE: &str = "Lookup service unavailable";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Input,
    Button,
}

#[derive(Debug)]
pub enum UiCommand {
    Lookup {
        lookup_id: Uuid,
        request: LookupRequest,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Handles of the search form elements.
#[derive(Debug, Clone, Default)]
pub struct SearchHandles {
    pub input: ElementHandle,
    pub button: ElementHandle,
}

/// Handles of the quit confirmation.
#[derive(Debug, Clone, Default)]
pub struct QuitPromptHandles {
    pub dialog: ElementHandle,
    pub cancel: ElementHandle,
    pub quit: ElementHandle,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Search screen state (MVI pattern).
    search: SearchState,
    /// Text field backing `search.query`.
    query_input: InputState,
    search_handles: SearchHandles,
    /// Options dialog state (MVI pattern).
    options_dialog: OptionsDialogState,
    options_handles: OptionsHandles,
    /// Options applied to every lookup.
    search_options: SearchOptions,
    quit_prompt: ModalState,
    quit_handles: QuitPromptHandles,
    animation_tick: u64,
    command_sender: Option<UiCommandSender>,
    /// Id of the most recently submitted lookup. Only used for logging:
    /// every resolution is applied.
    latest_lookup: Option<Uuid>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let search_handles = SearchHandles::default();
        search_handles.input.focus();
        Self {
            should_quit: false,
            focus: Focus::Input,
            search: SearchState::default(),
            query_input: InputState::default(),
            search_handles,
            options_dialog: OptionsDialogState::default(),
            options_handles: OptionsHandles::default(),
            search_options: SearchOptions::default(),
            quit_prompt: AlertDialog::modal_state(),
            quit_handles: QuitPromptHandles::default(),
            animation_tick: 0,
            command_sender: None,
            latest_lookup: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        let (focused, blurred) = match focus {
            Focus::Input => (&self.search_handles.input, &self.search_handles.button),
            Focus::Button => (&self.search_handles.button, &self.search_handles.input),
        };
        focused.focus();
        blurred.blur();
    }

    /// Tab order of the search form: Input, Button.
    pub fn toggle_focus(&mut self) {
        self.set_focus(match self.focus {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::Input,
        });
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn query_input(&self) -> &InputState {
        &self.query_input
    }

    pub fn search_handles(&self) -> &SearchHandles {
        &self.search_handles
    }

    pub fn search_options(&self) -> SearchOptions {
        self.search_options
    }

    pub fn animation_tick(&self) -> u64 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.search.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Where to place the terminal cursor, if the query field has focus
    /// and no dialog covers it.
    pub fn cursor_position(&self) -> Option<Position> {
        if self.focus != Focus::Input || self.has_modal() {
            return None;
        }
        let area = self.search_handles.input.area()?;
        Input::cursor_position(area, &self.query_input)
    }

    pub fn has_modal(&self) -> bool {
        self.options_dialog.is_visible() || self.quit_prompt.is_open()
    }

    // ========================================================================
    // Search (MVI pattern)
    // ========================================================================

    fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    /// Feed an editing key to the query field. Typing never starts a lookup.
    pub fn edit_query(&mut self, key: crossterm::event::KeyEvent) {
        if let Some(query) = self.query_input.handle_key(key) {
            self.update_query(query);
        }
    }

    /// Replace the query text.
    pub fn update_query(&mut self, query: String) {
        if self.query_input.value() != query {
            self.query_input = InputState::with_value(query.clone());
        }
        self.dispatch_search(SearchIntent::UpdateQuery(query));
    }

    /// Start exactly one lookup for the current query.
    ///
    /// Returns the id of the lookup, or `None` if no worker could take it;
    /// in that case the search resolves immediately with an error.
    pub fn submit_search(&mut self) -> Option<Uuid> {
        let lookup_id = Uuid::new_v4();
        if let Some(previous) = self.latest_lookup.filter(|_| self.search.is_loading()) {
            tracing::debug!(%previous, %lookup_id, "Submitting while a lookup is in flight");
        }
        self.dispatch_search(SearchIntent::Submit);

        let request = self.search_options.request_for(self.search.query());

        let sent = match &self.command_sender {
            Some(sender) => match sender.try_send(UiCommand::Lookup { lookup_id, request }) {
                Ok(()) => true,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to queue lookup");
                    false
                }
            },
            None => {
                tracing::error!("No lookup worker attached");
                false
            }
        };

        if !sent {
            self.dispatch_search(SearchIntent::Resolved(Err(WORKER_UNAVAILABLE.to_string())));
            return None;
        }
        self.latest_lookup = Some(lookup_id);
        Some(lookup_id)
    }

    /// Apply a finished lookup. The last one to resolve wins, even if a
    /// newer lookup was submitted after it.
    pub fn on_lookup_finished(&mut self, lookup_id: Uuid, outcome: LookupOutcome) {
        if self.latest_lookup != Some(lookup_id) {
            tracing::debug!(
                %lookup_id,
                latest = ?self.latest_lookup,
                "Applying result of an older lookup"
            );
        }
        self.dispatch_search(SearchIntent::Resolved(outcome));
    }

    // ========================================================================
    // Options dialog (MVI pattern)
    // ========================================================================

    pub fn options_dialog(&self) -> &OptionsDialogState {
        &self.options_dialog
    }

    pub fn options_handles(&self) -> &OptionsHandles {
        &self.options_handles
    }

    pub fn dispatch_options(&mut self, intent: OptionsIntent) {
        dispatch_mvi!(self, options_dialog, OptionsReducer, intent);
    }

    pub fn open_options(&mut self) {
        self.dispatch_options(OptionsIntent::Open {
            current: self.search_options,
        });
    }

    /// Enter/Space inside the options dialog.
    pub fn activate_options_field(&mut self) {
        if self.options_dialog.focused_field() == Some(OptionsField::Apply) {
            self.apply_options();
        } else {
            self.dispatch_options(OptionsIntent::Activate);
        }
    }

    /// Keep the edited options and close the dialog.
    pub fn apply_options(&mut self) {
        if let Some(options) = self.options_dialog.options() {
            tracing::info!(
                plot = options.plot.as_str(),
                movies_only = options.movies_only,
                "Search options applied"
            );
            self.search_options = options;
        }
        self.dispatch_options(OptionsIntent::Close);
    }

    // ========================================================================
    // Quit prompt
    // ========================================================================

    pub fn quit_prompt(&self) -> &ModalState {
        &self.quit_prompt
    }

    pub fn quit_handles(&self) -> &QuitPromptHandles {
        &self.quit_handles
    }

    pub fn open_quit_prompt(&mut self) {
        self.quit_prompt.open();
    }

    pub fn quit_prompt_mut(&mut self) -> &mut ModalState {
        &mut self.quit_prompt
    }

    pub fn dismiss_quit_prompt(&mut self, reason: DismissReason) {
        self.quit_prompt.dismiss(reason);
    }

    /// Enter/Space inside the quit prompt: run the focused button.
    pub fn activate_quit_prompt(&mut self) {
        if self.quit_prompt.focus() == ACTION_INDEX {
            self.request_quit();
        }
        self.quit_prompt.close();
    }
}
