use std::time::Duration;

use reqwest::{Client, Url};

use crate::config::{ApiConfig, ApiKeySource, CredentialStatus};
use crate::omdb::error::LookupError;
use crate::omdb::types::{parse_payload, MovieDetails, PlotLength};

/// Parameters of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Title text, sent exactly as typed.
    pub title: String,
    pub plot: PlotLength,
    /// Restrict matches to movies (no series or episodes).
    pub movies_only: bool,
}

impl LookupRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            plot: PlotLength::default(),
            movies_only: false,
        }
    }

    pub fn with_plot(mut self, plot: PlotLength) -> Self {
        self.plot = plot;
        self
    }

    pub fn with_movies_only(mut self, movies_only: bool) -> Self {
        self.movies_only = movies_only;
        self
    }
}

/// HTTP client for the movie-metadata provider.
///
/// The client holds no per-lookup state; concurrent lookups share the
/// connection pool and never affect each other.
pub struct MovieClient {
    http: Client,
    base_url: Url,
    credentials: ApiKeySource,
}

impl MovieClient {
    pub fn new(api: &ApiConfig, credentials: ApiKeySource) -> Result<Self, LookupError> {
        let base_url = Url::parse(&api.base_url).map_err(|e| LookupError::InvalidUrl {
            url: api.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl {
                url: api.base_url.clone(),
                reason: "URL cannot carry query parameters".to_string(),
            });
        }

        // No timeout unless configured: an unresponsive endpoint keeps the
        // lookup pending.
        let mut builder = Client::builder();
        if let Some(secs) = api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(LookupError::transport)?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Build the request target for `request`.
    ///
    /// The API key is resolved here, on every call, so a key exported after
    /// startup is picked up by the next lookup. A missing key is sent empty
    /// and left for the provider to reject.
    pub fn request_url(&self, request: &LookupRequest) -> Url {
        let api_key = match self.credentials.resolve() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Missing { reason } => {
                tracing::warn!("Sending lookup without an API key: {}", reason);
                Default::default()
            }
        };

        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("t", &request.title);
            pairs.append_pair("apikey", api_key.expose());
            if request.plot != PlotLength::default() {
                pairs.append_pair("plot", request.plot.as_str());
            }
            if request.movies_only {
                pairs.append_pair("type", "movie");
            }
        }
        url
    }

    /// Perform one lookup.
    pub async fn lookup(&self, request: &LookupRequest) -> Result<MovieDetails, LookupError> {
        let url = self.request_url(request);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(LookupError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            return Err(LookupError::Status {
                code: status.as_u16(),
                reason,
            });
        }

        let body = response.bytes().await.map_err(LookupError::transport)?;
        parse_payload(&body)
    }
}
