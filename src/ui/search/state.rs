use crate::omdb::MovieDetails;
use crate::ui::mvi::UiState;

/// Where the most recent lookup stands.
///
/// One tagged value instead of separate loading/error/movie fields, so a
/// movie and an error can never be present at the same time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success(MovieDetails),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub status: SearchStatus,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            status: SearchStatus::Idle,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, SearchStatus::Loading)
    }

    pub fn movie(&self) -> Option<&MovieDetails> {
        match &self.status {
            SearchStatus::Success(movie) => Some(movie),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SearchStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}
