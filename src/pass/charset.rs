//! Character set building for password generation.

use super::GenerationOptions;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
/// The 32 printable ASCII punctuation characters.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters that are easily confused with one another.
pub const AMBIGUOUS: &[char] = &['I', 'l', '1', 'O', '0'];

/// Characters eligible for sampling, in class order upper, lower, digits, symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Build the alphabet for `options`. May be empty; validation is the caller's job.
    pub fn build(options: &GenerationOptions) -> Self {
        let classes = [
            (options.include_upper, UPPERCASE),
            (options.include_lower, LOWERCASE),
            (options.include_digits, DIGITS),
            (options.include_symbols, SYMBOLS),
        ];

        let chars = classes
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .flat_map(|(_, class)| class.chars())
            .filter(|c| !(options.avoid_ambiguous && AMBIGUOUS.contains(c)))
            .collect();

        Alphabet(chars)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}
