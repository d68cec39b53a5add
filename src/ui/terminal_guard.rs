use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Restores the terminal exactly once: on drop, or from the panic hook
/// if the UI thread panics first.
///
/// Panics on other threads (catalog requests on the tokio pool) leave the
/// screen alone; the worker reports those as interrupted requests.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
    restore: fn(),
}

impl TerminalGuard {
    fn install() -> Self {
        Self::install_with(restore_terminal)
    }

    fn install_with(restore: fn()) -> Self {
        let restored = Arc::new(AtomicBool::new(false));
        let hook_flag = Arc::clone(&restored);
        let ui_thread = thread::current().id();
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if thread::current().id() == ui_thread && !hook_flag.swap(true, Ordering::SeqCst) {
                restore();
            }
            default_hook(info);
        }));
        Self { restored, restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored.swap(true, Ordering::SeqCst) {
            (self.restore)();
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::install();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn count_restore() {
        RESTORES.fetch_add(1, Ordering::SeqCst);
    }

    // One test so no other test swaps the process-wide hook in between.
    #[test]
    fn only_ui_thread_panics_restore_the_terminal() {
        let guard = TerminalGuard::install_with(count_restore);

        let worker = thread::spawn(|| panic!("catalog request blew up"));
        assert!(worker.join().is_err());
        assert!(!guard.restored.load(Ordering::SeqCst));
        assert_eq!(RESTORES.load(Ordering::SeqCst), 0);

        let ui_panic = std::panic::catch_unwind(|| panic!("render blew up"));
        assert!(ui_panic.is_err());
        assert!(guard.restored.load(Ordering::SeqCst));
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);

        drop(guard);
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);
    }
}
