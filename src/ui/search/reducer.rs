use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{SearchState, SearchStatus};

/// Reducer for the search screen.
///
/// Lookups are not tracked here: a `Resolved` intent always replaces the
/// status, so when several lookups overlap the one that finishes last is
/// what stays on screen.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::UpdateQuery(query) => SearchState { query, ..state },

            // Previous result is dropped before the new request resolves.
            SearchIntent::Submit => SearchState {
                query: state.query,
                status: SearchStatus::Loading,
            },

            SearchIntent::Resolved(outcome) => SearchState {
                query: state.query,
                status: match outcome {
                    Ok(movie) => SearchStatus::Success(movie),
                    Err(message) => SearchStatus::Error(message),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::omdb::MovieDetails;

    fn movie(title: &str) -> MovieDetails {
        MovieDetails {
            title: title.to_string(),
            ..MovieDetails::default()
        }
    }

    #[test]
    fn update_query_keeps_text_verbatim() {
        let state = SearchReducer::reduce(
            SearchState::default(),
            SearchIntent::UpdateQuery("  The Matrix ".into()),
        );
        assert_eq!(state.query, "  The Matrix ");
        assert_eq!(state.status, SearchStatus::Idle);
    }

    #[test]
    fn update_query_does_not_touch_status() {
        let state = SearchState {
            query: "heat".into(),
            status: SearchStatus::Success(movie("Heat")),
        };
        let state = SearchReducer::reduce(state, SearchIntent::UpdateQuery("hea".into()));
        assert_eq!(state.movie().map(|m| m.title.as_str()), Some("Heat"));
    }

    #[test]
    fn submit_clears_previous_result() {
        let state = SearchState {
            query: "heat".into(),
            status: SearchStatus::Error("Movie not found!".into()),
        };
        let state = SearchReducer::reduce(state, SearchIntent::Submit);
        assert_eq!(state.status, SearchStatus::Loading);
        assert_eq!(state.query, "heat");
    }

    #[test]
    fn resolved_ok_is_success() {
        let state = SearchReducer::reduce(
            SearchState::with_query("heat"),
            SearchIntent::Submit,
        );
        let state = SearchReducer::reduce(state, SearchIntent::Resolved(Ok(movie("Heat"))));
        assert_eq!(state.status, SearchStatus::Success(movie("Heat")));
    }

    #[test]
    fn resolved_err_is_error() {
        let state = SearchReducer::reduce(SearchState::default(), SearchIntent::Submit);
        let state = SearchReducer::reduce(
            state,
            SearchIntent::Resolved(Err("Internal Server Error".into())),
        );
        assert_eq!(state.error_message(), Some("Internal Server Error"));
    }
}
