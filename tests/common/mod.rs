//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use moviesearch::config::{ApiConfig, ApiKeySource};
use moviesearch::omdb::MovieClient;
use moviesearch::ui::events::AppEvent;
use moviesearch::ui::search::LookupOutcome;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tempfile::TempDir;
use uuid::Uuid;

pub const TEST_API_KEY: &str = "test-key";

/// Environment variable no test ever sets.
pub const UNSET_ENV: &str = "MOVIESEARCH_TEST_KEY_NEVER_SET";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// API settings pointing at `base_url`, with the key stored in the config.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
        api_key_env: UNSET_ENV.to_string(),
        timeout_seconds: None,
    }
}

pub fn client_for(api: &ApiConfig) -> MovieClient {
    MovieClient::new(api, ApiKeySource::from_config(api)).expect("client")
}

/// Provider payload for a found movie.
pub fn movie_json(title: &str, year: &str, poster: &str) -> String {
    serde_json::json!({
        "Title": title,
        "Year": year,
        "Rated": "PG-13",
        "Released": "16 Jul 2010",
        "Runtime": "148 min",
        "Genre": "Action, Adventure, Sci-Fi",
        "Director": "Christopher Nolan",
        "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt",
        "Plot": "A thief who steals corporate secrets through dream-sharing technology.",
        "Poster": poster,
        "imdbRating": "8.8",
        "Response": "True"
    })
    .to_string()
}

/// Create a temporary config file with `content`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Wait for the next lookup result posted to the UI event channel.
pub async fn next_lookup_result(
    events: &Receiver<AppEvent>,
    timeout: Duration,
) -> Option<(Uuid, LookupOutcome)> {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        match events.try_recv() {
            Ok(AppEvent::LookupFinished { lookup_id, outcome }) => {
                return Some((lookup_id, outcome));
            }
            Ok(_) => {}
            Err(_) => tokio::time::sleep(Duration::from_millis(10)).await,
        }
    }
    None
}
