use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type SearchTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Leaves raw mode and the alternate screen exactly once: on drop, or from
/// the panic hook if the UI thread panics first.
pub struct TerminalGuard {
    active: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let active = Arc::new(AtomicBool::new(true));
        let hook_active = Arc::clone(&active);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&hook_active);
            default_hook(info);
        }));
        Self { active }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.active);
    }
}

fn restore_once(active: &AtomicBool) {
    if !active.swap(false, Ordering::SeqCst) {
        return;
    }
    if let Err(err) = restore_terminal() {
        tracing::warn!(error = %err, "Failed to restore terminal");
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(Show)?;
    Ok(())
}

/// Switch to the alternate screen with mouse reporting on.
///
/// The guard must outlive the returned terminal.
pub fn setup_terminal() -> io::Result<(SearchTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?
        .execute(TermClear(ClearType::All))?
        .execute(Hide)?;
    stdout.flush()?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
