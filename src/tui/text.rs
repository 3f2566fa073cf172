use crate::pass::Password;
use crate::terminal::{
    box_bottom, box_line, box_line_center, box_opt, box_top, calculate_entropy, entropy_strength,
};

pub fn print_welcome() {
    println!("Welcome to the Password Generation Tool!");
}

pub fn print_password(password: &Password) {
    println!();
    println!("Generated Password: {password}");
}

pub fn print_entropy(length: usize, charset: usize, source: &str) {
    let bits = calculate_entropy(length, charset);
    println!();
    box_top("Entropy");
    box_line(&format!("{:.1} bits ({})", bits, entropy_strength(bits)));
    box_line(&format!("Source: {} • Charset: {} chars", source, charset));
    box_bottom();
}

pub fn print_cancelled() {
    println!();
    box_top("Cancelled");
    box_line("No password generated");
    box_bottom();
}

pub fn print_help() {
    box_top("passgen");
    box_line_center("Password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments and answer the");
    box_line("     prompts. Blank length means 12; blank y/n means no.");
    box_line("  2) Flags: pass options directly (e.g. -l 20 -n 5).");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 12)");
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt("      --no-upper", "Leave out uppercase letters");
    box_opt("      --no-lower", "Leave out lowercase letters");
    box_opt("      --no-digits", "Leave out digits");
    box_opt("      --no-symbols", "Leave out punctuation symbols");
    box_opt("  -a, --allow-ambiguous", "Keep I, l, 1, O and 0 in the alphabet");
    box_opt("      --seed <N>", "Seed the random source for reproducible output");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgen                  Interactive prompts");
    box_line("  passgen -l 16            One password, 16 characters");
    box_line("  passgen -l 20 -n 3       Three passwords, 20 characters");
    box_line("  passgen --no-symbols     Letters and digits only");
    box_line("  passgen --seed 7         Same password on every run");
    box_line("");
    box_bottom();
    println!();
}
