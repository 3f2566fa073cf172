#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub quiet: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub allow_ambiguous: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
}

impl CliFlags {
    /// True when every character class has been switched off.
    pub fn disables_all_classes(&self) -> bool {
        self.no_upper && self.no_lower && self.no_digits && self.no_symbols
    }
}
