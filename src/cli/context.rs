//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::warn;
use rand::RngCore;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::entropy;
use crate::error::{AppError, Result};
use crate::pass::{self, Password};
use crate::settings::Settings;
use crate::tui::print_help;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Parse command-line arguments into a context.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: settings_from(&flags),
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Info flags and a declined clipboard fallback end early with `Ok`.
    pub fn run(&mut self) -> Result<()> {
        if self.handle_info_flags() {
            return Ok(());
        }
        quiet::set(self.settings.quiet);
        if self.flags.disables_all_classes() {
            prompts::all_classes_disabled();
        }
        if !self.handle_clipboard() {
            return Ok(());
        }

        let mut rng = entropy::source(self.settings.seed);
        self.generate_output(rng.as_mut())
    }

    /// Returns true if an info flag was handled.
    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Open the clipboard if requested. Returns false when the user aborts.
    fn handle_clipboard(&mut self) -> bool {
        if !self.settings.to_clipboard {
            return true;
        }
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                true
            }
            Err(e) => {
                warn!("clipboard unavailable: {e}");
                self.settings.to_clipboard = false;
                prompts::clipboard_fallback_prompt()
            }
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self, rng: &mut dyn RngCore) -> Result<()> {
        let passwords = pass::generate_batch(
            &self.settings.options,
            self.settings.number_of_passwords,
            rng,
        )?;

        match self.clipboard.as_mut() {
            Some(ctx) if self.settings.to_clipboard => {
                let mut joined = join_lines(&passwords);
                let copied = ctx.set_contents(joined.clone());
                joined.zeroize();
                copied.map_err(|e| AppError::Clipboard(e.to_string()))?;
                prompts::clipboard_copied(passwords.len());
            }
            _ => {
                let stdout = std::io::stdout();
                write_lines(&mut stdout.lock(), &passwords)?;
            }
        }
        Ok(())
    }
}

/// Layer flags over the defaults.
pub fn settings_from(flags: &CliFlags) -> Settings {
    let mut settings = Settings::default();
    let options = &mut settings.options;

    if let Some(len) = flags.length {
        options.length = len;
    }
    options.include_upper = !flags.no_upper;
    options.include_lower = !flags.no_lower;
    options.include_digits = !flags.no_digits;
    options.include_symbols = !flags.no_symbols;
    options.avoid_ambiguous = !flags.allow_ambiguous;

    if let Some(num) = flags.number {
        settings.number_of_passwords = num;
    }
    settings.seed = flags.seed;
    settings.to_clipboard = flags.clipboard;
    settings.quiet = flags.quiet;
    settings
}

fn join_lines(passwords: &[Password]) -> String {
    let mut joined = String::new();
    for pass in passwords {
        joined.push_str(pass.as_str());
        joined.push('\n');
    }
    joined
}

fn write_lines<W: Write>(out: &mut W, passwords: &[Password]) -> std::io::Result<()> {
    for pass in passwords {
        out.write_all(pass.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
