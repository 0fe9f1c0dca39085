//! Client for the OMDb movie-metadata API.
//!
//! One lookup is one `GET` against the configured endpoint. The outcome is
//! either a [`MovieDetails`] payload or a [`LookupError`] describing which
//! layer (transport, HTTP status, provider payload) refused the request.

mod client;
mod error;
mod types;

pub use client::{LookupRequest, MovieClient};
pub use error::LookupError;
pub use types::{MovieDetails, PlotLength, NOT_AVAILABLE, PLACEHOLDER_POSTER};
