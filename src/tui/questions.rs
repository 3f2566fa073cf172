//! The interactive questionnaire and its answer rules.

use crate::error::PromptError;
use crate::pass::{DEFAULT_LENGTH, GenerationOptions};

use super::LineReader;

pub const LENGTH_PROMPT: &str = "Enter the length of the password (default is 12)";
pub const UPPER_PROMPT: &str = "Include uppercase letters? (y/N)";
pub const LOWER_PROMPT: &str = "Include lowercase letters? (y/N)";
pub const DIGITS_PROMPT: &str = "Include digits? (y/N)";
pub const SYMBOLS_PROMPT: &str = "Include symbols? (y/N)";
pub const AMBIGUOUS_PROMPT: &str = "Avoid ambiguous characters like 'I', 'l', '1', 'O', '0'? (y/N)";

/// Blank means "use the default" (`None`). Any integer, including 0, is taken as given.
pub fn parse_length(answer: &str) -> Result<Option<usize>, PromptError> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    answer
        .parse()
        .map(Some)
        .map_err(|_| PromptError::InvalidLength(answer.to_string()))
}

/// Only "y" (any case) is yes; blank and everything else is no.
pub fn parse_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Ask every question in order and assemble the generation options.
pub fn ask<L: LineReader + ?Sized>(reader: &mut L) -> Result<GenerationOptions, PromptError> {
    let length = parse_length(&reader.read_line(LENGTH_PROMPT)?)?;
    let mut yes = |prompt: &str| reader.read_line(prompt).map(|a| parse_yes(&a));

    Ok(GenerationOptions {
        length: length.unwrap_or(DEFAULT_LENGTH),
        include_upper: yes(UPPER_PROMPT)?,
        include_lower: yes(LOWER_PROMPT)?,
        include_digits: yes(DIGITS_PROMPT)?,
        include_symbols: yes(SYMBOLS_PROMPT)?,
        avoid_ambiguous: yes(AMBIGUOUS_PROMPT)?,
    })
}
