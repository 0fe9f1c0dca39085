use crate::omdb::MovieDetails;
use crate::ui::mvi::Intent;

/// Result of one lookup as seen by the UI: details or a user-facing message.
pub type LookupOutcome = Result<MovieDetails, String>;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Query text changed (one keystroke). Stored verbatim.
    UpdateQuery(String),
    /// User triggered a search. The caller starts exactly one lookup.
    Submit,
    /// A lookup finished. Applied regardless of which submit started it.
    Resolved(LookupOutcome),
}

impl Intent for SearchIntent {}
