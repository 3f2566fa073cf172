//! Password generation.

pub mod charset;
mod generate;

use std::fmt;

use zeroize::Zeroize;

pub use charset::Alphabet;
pub use generate::{generate, generate_batch};

pub const DEFAULT_LENGTH: usize = 12;

/// Inputs to a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub avoid_ambiguous: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_symbols: true,
            avoid_ambiguous: true,
        }
    }
}

/// A generated password. The buffer is zeroed on drop.
#[derive(PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<char> for Password {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Password(iter.into_iter().collect())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.length, 12);
        assert!(options.include_upper);
        assert!(options.include_lower);
        assert!(options.include_digits);
        assert!(options.include_symbols);
        assert!(options.avoid_ambiguous);
    }

    #[test]
    fn debug_does_not_leak_contents() {
        let pass: Password = "hunter2".chars().collect();
        assert_eq!(format!("{:?}", pass), "Password(<7 chars>)");
        assert_eq!(pass.to_string(), "hunter2");
    }
}
