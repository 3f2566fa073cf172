use std::str::FromStr;

use super::CliFlags;
use crate::error::ParseError;

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-a" | "--allow-ambiguous" => flags.allow_ambiguous = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(number(args, i, arg)?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(number(args, i, arg)?);
            }
            "--seed" => {
                i += 1;
                flags.seed = Some(number(args, i, arg)?);
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number<T: FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, ParseError> {
    let value = args
        .get(i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}
