//! Global quiet mode state.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings and confirmations; passwords and errors still print.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty (interactive)
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// Check if stdout is a tty
pub fn stdout_is_terminal() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

/// Interactive confirmations are skipped in quiet mode or when stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
