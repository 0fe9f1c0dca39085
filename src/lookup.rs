//! Lookup worker: runs provider lookups off the UI thread.
//!
//! The UI sends [`UiCommand::Lookup`] over a tokio channel. Every command
//! is spawned as its own task, so lookups run concurrently and finish in
//! whatever order the provider answers. Each task posts exactly one
//! [`AppEvent::LookupFinished`] back to the UI loop.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use scopeguard::ScopeGuard;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::omdb::{LookupRequest, MovieClient};
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 16;

/// Reported when a lookup task ends without producing an outcome.
pub const ABORTED_MESSAGE: &str = "Lookup was interrupted";

pub struct LookupWorker {
    receiver: mpsc::Receiver<UiCommand>,
    client: Arc<MovieClient>,
    events: Sender<AppEvent>,
}

impl LookupWorker {
    pub fn new(client: Arc<MovieClient>, events: Sender<AppEvent>) -> (UiCommandSender, Self) {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        (
            sender,
            Self {
                receiver,
                client,
                events,
            },
        )
    }

    /// Serve commands until every sender is dropped.
    pub async fn run(mut self) {
        while let Some(command) = self.receiver.recv().await {
            match command {
                UiCommand::Lookup { lookup_id, request } => {
                    tokio::spawn(run_lookup(
                        Arc::clone(&self.client),
                        self.events.clone(),
                        lookup_id,
                        request,
                    ));
                }
            }
        }
        tracing::debug!("Lookup worker stopped");
    }
}

async fn run_lookup(
    client: Arc<MovieClient>,
    events: Sender<AppEvent>,
    lookup_id: Uuid,
    request: LookupRequest,
) {
    // Fires only if the task is dropped or panics before reporting.
    let guard = scopeguard::guard(events, move |events| {
        tracing::warn!(%lookup_id, "Lookup ended without a result");
        let _ = events.send(AppEvent::LookupFinished {
            lookup_id,
            outcome: Err(ABORTED_MESSAGE.to_string()),
        });
    });

    tracing::info!(%lookup_id, title = %request.title, "Lookup started");
    let outcome = match client.lookup(&request).await {
        Ok(movie) => {
            tracing::info!(%lookup_id, found = %movie.title, "Lookup succeeded");
            Ok(movie)
        }
        Err(err) => {
            tracing::warn!(
                %lookup_id,
                error_type = err.error_type(),
                error = %err,
                "Lookup failed"
            );
            Err(err.user_message())
        }
    };

    let events = ScopeGuard::into_inner(guard);
    if events
        .send(AppEvent::LookupFinished { lookup_id, outcome })
        .is_err()
    {
        tracing::debug!(%lookup_id, "UI loop gone, dropping lookup result");
    }
}
