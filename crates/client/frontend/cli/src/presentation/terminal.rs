//! Terminal setup/teardown helpers for the CLI UI.
use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restores the terminal exactly once: through [`TerminalGuard::finish`] on
/// the normal path, or on drop (including panic unwinding) otherwise.
pub struct TerminalGuard {
    restore: Option<fn() -> Result<()>>,
}

impl TerminalGuard {
    pub fn arm() -> Self {
        Self::with_restore(restore)
    }

    fn with_restore(restore: fn() -> Result<()>) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Restore now and surface the error; the drop is then a no-op.
    pub fn finish(mut self) -> Result<()> {
        match self.restore.take() {
            Some(restore) => restore(),
            None => Ok(()),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            let _ = restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static FINISHED: AtomicUsize = AtomicUsize::new(0);
    static DROPPED: AtomicUsize = AtomicUsize::new(0);

    #[test]
    fn finish_restores_once() {
        fn count() -> Result<()> {
            FINISHED.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        TerminalGuard::with_restore(count).finish().unwrap();
        assert_eq!(FINISHED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_restores_when_not_finished() {
        fn count() -> Result<()> {
            DROPPED.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        drop(TerminalGuard::with_restore(count));
        assert_eq!(DROPPED.load(Ordering::SeqCst), 1);
    }
}
