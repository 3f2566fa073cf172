//! Resolved run configuration.

use crate::pass::GenerationOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: GenerationOptions,
    pub number_of_passwords: usize,
    pub seed: Option<u64>,
    pub to_clipboard: bool,
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            options: GenerationOptions::default(),
            number_of_passwords: 1,
            seed: None,
            to_clipboard: false,
            quiet: false,
        }
    }
}
