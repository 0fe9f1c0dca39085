use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use uuid::Uuid;

use crate::ui::search::LookupOutcome;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// The input thread stopped after a terminal error; no further keys
    /// will arrive.
    InputClosed,
    /// A lookup task finished (or was torn down). Tagged with the id the App
    /// assigned when it submitted the lookup.
    LookupFinished {
        lookup_id: Uuid,
        outcome: LookupOutcome,
    },
}

/// Where the input thread reads terminal events from.
pub trait EventSource: Send + 'static {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, via crossterm.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(CrosstermEvents, tick_rate)
    }

    pub fn with_source<S: EventSource>(source: S, tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        thread::spawn(move || pump_events(source, &event_tx, tick_rate));
        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender for events produced outside the input thread (lookup results).
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn pump_events<S: EventSource>(mut source: S, event_tx: &Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        let forwarded = match source.poll(timeout) {
            Ok(true) => match source.read() {
                Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                Ok(Event::Mouse(mouse)) => event_tx.send(AppEvent::Mouse(mouse)),
                Ok(Event::Resize(cols, rows)) => event_tx.send(AppEvent::Resize(cols, rows)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!(error = %err, "Failed to read terminal event");
                    let _ = event_tx.send(AppEvent::InputClosed);
                    return;
                }
            },
            // Timeout, no event
            Ok(false) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "Failed to poll terminal events");
                let _ = event_tx.send(AppEvent::InputClosed);
                return;
            }
        };
        // Receiver gone: the UI loop has exited.
        if forwarded.is_err() {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            if event_tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use std::collections::VecDeque;

    /// Replays `events`, then fails.
    struct Scripted {
        events: VecDeque<Event>,
        fail_on_poll: bool,
    }

    impl EventSource for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            if self.events.is_empty() && self.fail_on_poll {
                return Err(io::Error::other("tty gone"));
            }
            Ok(true)
        }

        fn read(&mut self) -> io::Result<Event> {
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::other("read failed"))
        }
    }

    fn drain(handler: &EventHandler) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(event) = handler.next(Duration::from_secs(2)) {
            let closed = matches!(event, AppEvent::InputClosed);
            events.push(event);
            if closed {
                break;
            }
        }
        events
    }

    #[test]
    fn read_error_closes_input_after_pending_events() {
        let source = Scripted {
            events: VecDeque::from([Event::Key(KeyEvent::from(KeyCode::Char('a')))]),
            fail_on_poll: false,
        };
        let handler = EventHandler::with_source(source, Duration::from_secs(60));

        let events = drain(&handler);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], AppEvent::Key(_)));
        assert!(matches!(events[1], AppEvent::InputClosed));
    }

    #[test]
    fn poll_error_closes_input() {
        let source = Scripted {
            events: VecDeque::new(),
            fail_on_poll: true,
        };
        let handler = EventHandler::with_source(source, Duration::from_secs(60));

        let events = drain(&handler);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], AppEvent::InputClosed));
    }
}
