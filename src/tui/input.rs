use std::io::{BufRead, Write};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::error::PromptError;
use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Source of answers for the interactive prompts.
pub trait LineReader {
    /// Show `prompt` and return the entered line without its terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Plain line reader over any buffered input. End of input reads as a blank line.
pub struct StreamReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> LineReader for StreamReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// Editable prompt line for interactive terminals.
///
/// Esc or Ctrl+Q cancels, Ctrl+U clears, Ctrl+C exits. Falls back to a plain
/// stdin read when raw mode is unavailable.
pub struct TerminalReader;

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        let guard = match RawModeGuard::new() {
            Ok(g) => g,
            Err(_) => {
                let stdin = std::io::stdin();
                return StreamReader::new(stdin.lock(), std::io::stdout()).read_line(prompt);
            }
        };

        let edited = edit_line(prompt);

        // Cooked mode must be back before the newline
        drop(guard);
        println!();
        edited.ok_or(PromptError::Cancelled)
    }
}

fn edit_line(prompt: &str) -> Option<String> {
    let mut input: Vec<char> = Vec::new();
    let mut cursor = 0usize;
    let mut drawn = 0usize;

    print!("{}: ", prompt);
    flush();

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => return Some(input.into_iter().collect()),
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Char('q') if ctrl => return None,
            KeyCode::Esc => return None,
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Enter => return Some(input.into_iter().collect()),
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let line: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn + 1));
        print!("\r{}: {}", prompt, line);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn = input.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn stream_reader_strips_line_endings_and_echoes_prompt() {
        let mut out = Vec::new();
        {
            let mut reader = StreamReader::new(Cursor::new("16\r\n y \n"), &mut out);
            assert_eq!(reader.read_line("Length").unwrap(), "16");
            assert_eq!(reader.read_line("Upper").unwrap(), " y ");
        }
        assert_eq!(String::from_utf8(out).unwrap(), "Length: Upper: ");
    }

    #[test]
    fn stream_reader_end_of_input_is_blank() {
        let mut reader = StreamReader::new(Cursor::new(""), Vec::new());
        assert_eq!(reader.read_line("Length").unwrap(), "");
        assert_eq!(reader.read_line("Upper").unwrap(), "");
    }
}
