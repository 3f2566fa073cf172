//! Error types shared by the generator and its adapters.

use thiserror::Error;

/// Password generation failures. `Configuration` is the only one a user can fix by changing options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("At least one character set (upper, lower, digits, symbols) must be selected.")]
    Configuration,

    #[error("password length {0} is too large to allocate")]
    TooLong(usize),

    #[error("cannot hold {0} passwords in memory")]
    TooMany(usize),
}

/// Failures while collecting answers from the interactive prompts.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("invalid password length: '{0}'")]
    InvalidLength(String),

    #[error("input cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while parsing command-line flags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for the domain error (empty alphabet), false for everything else.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AppError::Generate(GenerateError::Configuration))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_is_recognised_through_app_error() {
        let err: AppError = GenerateError::Configuration.into();
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "At least one character set (upper, lower, digits, symbols) must be selected."
        );
    }

    #[test]
    fn other_errors_are_not_configuration() {
        let err: AppError = PromptError::InvalidLength("abc".into()).into();
        assert!(!err.is_configuration());
        assert_eq!(err.to_string(), "invalid password length: 'abc'");

        let err: AppError = ParseError::UnknownArg("--nope".into()).into();
        assert!(!err.is_configuration());
        assert_eq!(err.to_string(), "Unknown argument: --nope");

        let err: AppError = GenerateError::TooLong(usize::MAX).into();
        assert!(!err.is_configuration());
    }
}
