use super::flags::{CliFlags, StoreTarget};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    UnknownArg(String),
    MissingValue(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

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
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => {
                flags.length = Some(parse_value(args, &mut i, arg)?);
            }
            "--level" => {
                flags.level = Some(parse_value(args, &mut i, arg)?);
            }
            "-n" | "--number" => {
                flags.number = Some(parse_value(args, &mut i, arg)?);
            }
            "--store" => {
                let server = take_value(args, &mut i, arg)?;
                let username = take_value(args, &mut i, arg)?;
                flags.store = Some(StoreTarget { server, username });
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Advance to the next token, reporting the flag that demanded it when the
/// argument list runs out (the cursor itself may already sit past the flag,
/// as with the second `--store` value).
fn take_value(args: &[String], i: &mut usize, flag: &str) -> Result<String, ParseError> {
    *i += 1;
    if *i >= args.len() {
        return Err(ParseError::MissingValue(flag.to_string()));
    }
    Ok(args[*i].clone())
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    flag: &str,
) -> Result<T, ParseError> {
    let raw = take_value(args, i, flag)?;
    raw.parse().map_err(|_| ParseError::InvalidNumber(raw))
}
