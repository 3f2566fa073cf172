//! Exit handling: terminal restore on exit and on termination signals.

use crate::cli::quiet;

/// Put the tty back into cooked mode with echo, using termios directly.
pub fn reset_terminal() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; runs on every normal exit.
extern "C" fn cleanup_on_exit() {
    reset_terminal();
    // Escape codes only when stdout is a tty, never into a pipe
    if quiet::stdout_is_terminal() {
        const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";
        unsafe {
            libc::write(
                libc::STDOUT_FILENO,
                RESTORE.as_ptr() as *const libc::c_void,
                RESTORE.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit does the cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
