use serde::{Deserialize, Serialize};

use crate::omdb::error::LookupError;

/// Provider sentinel for "field has no value".
pub const NOT_AVAILABLE: &str = "N/A";

/// Asset shown in place of a poster the provider does not have.
pub const PLACEHOLDER_POSTER: &str = "/placeholder.svg";

/// Movie record as returned by the provider.
///
/// Field names follow the provider's JSON. Fields the payload omits
/// deserialize to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieDetails {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "Runtime")]
    pub runtime: String,
    #[serde(rename = "Released")]
    pub released: String,
}

impl MovieDetails {
    /// Poster location to display, substituting the placeholder asset for
    /// the provider's "no image" sentinel.
    pub fn poster_source(&self) -> &str {
        let poster = self.poster.trim();
        if poster.is_empty() || poster == NOT_AVAILABLE {
            PLACEHOLDER_POSTER
        } else {
            &self.poster
        }
    }
}

/// Plot length requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotLength {
    #[default]
    Short,
    Full,
}

impl PlotLength {
    pub fn as_str(self) -> &'static str {
        match self {
            PlotLength::Short => "short",
            PlotLength::Full => "full",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "short" => Some(PlotLength::Short),
            "full" => Some(PlotLength::Full),
            _ => None,
        }
    }
}

/// The two fields every payload may carry to flag a logical failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponseFlag {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Decode a successful HTTP body into movie details.
///
/// A payload with `"Response": "False"` is a logical failure and is
/// reported with the provider's own `Error` text.
pub(crate) fn parse_payload(body: &[u8]) -> Result<MovieDetails, LookupError> {
    let flag: ResponseFlag =
        serde_json::from_slice(body).map_err(|source| LookupError::Decode { source })?;

    let failed = flag
        .response
        .as_deref()
        .is_some_and(|value| value.trim().eq_ignore_ascii_case("false"));
    if failed {
        let message = flag
            .error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(LookupError::Api { message });
    }

    serde_json::from_slice(body).map_err(|source| LookupError::Decode { source })
}
