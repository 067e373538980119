//! Warning, prompt, and help output, plus the global quiet flag.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Global quiet mode flag - suppresses warnings and prompts
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when prompts should be skipped: quiet mode, or stdin is not a tty.
fn skip_prompt() -> bool {
    quiet() || unsafe { libc::isatty(0) != 1 }
}

/// Print a warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn stored(server: &str, username: &str) {
    if !quiet() {
        println!("Saved credential for {} @ {}", username, server);
    }
}

/// Prompt when the clipboard is unavailable. Returns true to fall back to
/// terminal output, false to abort. Falls back silently when quiet or
/// non-interactive.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn print_help() {
    println!(
        "passmint {} - policy-constrained password generator

Usage: passmint [OPTIONS]

Options:
  -l, --length <N>    Password length ({}-{}) [default: 20]
      --level <N>     Length as a 0-99 dial position, mapped onto {}-{}
  -n, --number <N>    How many passwords to generate [default: 1]
      --no-digits     Drop digits from the alphabet and the policy
      --no-symbols    Drop symbols from the alphabet and the policy
  -b, --board         Copy output to the clipboard instead of stdout
      --store <SERVER> <USERNAME>
                      Save the first password to the system secret store
  -q, --quiet         Suppress warnings and confirmations
  -h, --help          Show this help
  -v, --version       Show version

Every password contains upper and lower case letters; at least two
digits unless --no-digits; at least one symbol unless --no-symbols.",
        env!("CARGO_PKG_VERSION"),
        crate::pass::MIN_LEN,
        crate::pass::MAX_LEN,
        crate::pass::MIN_LEN,
        crate::pass::MAX_LEN,
    );
}
