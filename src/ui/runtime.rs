use crate::config::Config;
use crate::lookup::LookupWorker;
use crate::omdb::MovieClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

const RUNTIME_SHUTDOWN: Duration = Duration::from_millis(500);

/// Run the search UI until the user quits.
///
/// `initial_query` pre-fills the search field; it does not start a lookup.
pub fn run(config: &Config, client: MovieClient, initial_query: Option<String>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("moviesearch-lookup")
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let (sender, worker) = LookupWorker::new(Arc::new(client), events.sender());
    runtime.spawn(worker.run());

    let mut app = App::new();
    app.set_command_sender(sender);
    if let Some(query) = initial_query {
        app.update_query(query);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // In-flight lookups are abandoned; their results have nowhere to go.
    runtime.shutdown_timeout(RUNTIME_SHUTDOWN);
    tracing::info!("UI stopped");
    Ok(())
}

/// Apply one event from the UI channel.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Tick => app.on_tick(),
        // Next draw picks up the new size.
        AppEvent::Resize(_, _) => {}
        AppEvent::InputClosed => {
            tracing::error!("Terminal input closed, shutting down");
            app.request_quit();
        }
        AppEvent::LookupFinished { lookup_id, outcome } => {
            app.on_lookup_finished(lookup_id, outcome)
        }
    }
}
