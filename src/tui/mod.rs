//! Interactive prompt mode.

mod input;
mod questions;
mod text;

use log::debug;
use rand::Rng;

pub use input::*;
pub use questions::*;
pub use text::*;

use crate::cli::quiet;
use crate::entropy;
use crate::error::{AppError, PromptError};
use crate::pass::{self, Alphabet, Password};

/// Ask the questions, then generate one password from the answers.
pub fn session<L, R>(reader: &mut L, rng: &mut R) -> Result<(Password, Alphabet), AppError>
where
    L: LineReader + ?Sized,
    R: Rng + ?Sized,
{
    let options = ask(reader)?;
    debug!("interactive options: {:?}", options);
    let password = pass::generate(&options, rng)?;
    Ok((password, Alphabet::build(&options)))
}

/// Run the interactive prompts. Errors are reported, never turned into a failing exit status.
pub fn run() {
    print_welcome();

    let mut rng = entropy::source(None);
    let result = if quiet::is_interactive() {
        session(&mut TerminalReader, rng.as_mut())
    } else {
        let stdin = std::io::stdin();
        session(
            &mut StreamReader::new(stdin.lock(), std::io::stdout()),
            rng.as_mut(),
        )
    };

    match result {
        Ok((password, alphabet)) => {
            print_password(&password);
            if !password.is_empty() {
                print_entropy(password.len(), alphabet.len(), entropy::source_name(None));
            }
        }
        Err(AppError::Prompt(PromptError::Cancelled)) => print_cancelled(),
        Err(e) => println!("{}", report(&e)),
    }
}

/// The line printed for a failed session.
pub fn report(err: &AppError) -> String {
    if err.is_configuration() {
        format!("Error: {err}")
    } else {
        format!("An unexpected error occurred: {err}")
    }
}
