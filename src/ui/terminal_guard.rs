//! RAII restoration of the user's terminal.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Restores the terminal when dropped.
///
/// Covers every exit path: a normal return, an error bubbling up through `?`,
/// or a panic (together with [`install_panic_hook`]).
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Create an armed guard.
    ///
    /// Construct this only after raw mode is enabled and the alternate screen
    /// is entered, since Drop unconditionally undoes both.
    pub fn new() -> Self {
        Self { active: true }
    }

    /// Restore the terminal now and disarm the guard.
    ///
    /// Use this on the happy path so restoration errors can be reported.
    /// Drop becomes a no-op afterwards.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.do_cleanup()
    }

    fn do_cleanup(&self) -> anyhow::Result<()> {
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            // Drop cannot propagate errors, so log and move on
            if let Err(e) = self.do_cleanup() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

/// Install a panic hook that puts the terminal back into its normal state
/// before the panic message is printed.
///
/// Call this from main() before any terminal setup. Without it a panic inside
/// the alternate screen leaves the shell in raw mode with the message hidden.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = disable_raw_mode() {
            tracing::debug!(error = %e, "Failed to disable raw mode in panic hook");
        }
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
            tracing::debug!(error = %e, "Failed to leave alternate screen in panic hook");
        }
        if let Err(e) = stdout.flush() {
            tracing::debug!(error = %e, "Failed to flush stdout after panic cleanup");
        }

        // The default hook still prints the message and backtrace
        original_hook(panic_info);
    }));
}
