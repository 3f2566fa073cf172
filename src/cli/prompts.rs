//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Yellow warning on stderr, suppressed in quiet mode
pub fn warning(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, never suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** -COPIED {count} PASSWORD(S) TO CLIPBOARD- ***");
    }
}

/// Returns true to fall back to printing, false to abort.
/// Quiet or non-interactive runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    if answer_is_yes_default(&input) {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Warn when all classes were switched off, before generation reports the error.
pub fn all_classes_disabled() {
    warning("Warning: --no-upper, --no-lower, --no-digits and --no-symbols leave nothing to draw from");
}

fn answer_is_yes_default(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    input.is_empty() || input == "y" || input == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_answer_defaults_to_yes() {
        assert!(answer_is_yes_default("\n"));
        assert!(answer_is_yes_default("Y\n"));
        assert!(answer_is_yes_default("yes"));
        assert!(!answer_is_yes_default("n\n"));
        assert!(!answer_is_yes_default("nope"));
    }
}
