//! Terminal output utilities.
//!
//! Box drawing, entropy rating, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Box Drawing (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    println!("{}", top_line(title));
}

/// │ content                           │
pub fn box_line(content: &str) {
    println!("{}", content_line(content));
}

/// │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// └───────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    for line in opt_lines(flag, desc) {
        println!("{line}");
    }
}

fn top_line(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

fn content_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        format!("│ {}{} │", content, " ".repeat(inner_width - display_len))
    } else {
        format!("│ {} │", content)
    }
}

fn opt_lines(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        wrapped.push(current);
    }

    let indent = " ".repeat(flag_col);
    let mut lines = Vec::with_capacity(wrapped.len().max(1));
    match wrapped.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.len());
            lines.push(format!("│ {}{}{} │", flag_padded, first, " ".repeat(padding)));
        }
        None => lines.push(format!("│ {}{} │", flag_padded, " ".repeat(desc_col))),
    }
    for line in wrapped.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        lines.push(format!("│ {}{}{} │", indent, line, " ".repeat(padding)));
    }
    lines
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
