//! CLI context - bundles the generation config, flags, and collaborators.

use std::io::Write;

use zeroize::Zeroize;

use super::flags::{CliFlags, StoreTarget};
use super::{parse, prompts};
use crate::clipboard::{ClipboardError, ClipboardWriter, SystemClipboard};
use crate::pass::{self, ConfigError, GenerationConfig};
use crate::store::{CredentialStore, SecretToolStore, StoreError};

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for a single CLI invocation.
pub struct Context {
    pub config: GenerationConfig,
    pub count: usize,
    pub clipboard: Option<SystemClipboard>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = parse::parse(&args).map_err(|e| e.to_string())?;

        Ok(Self {
            config: GenerationConfig::default(),
            count: 1,
            clipboard: None,
            flags,
        })
    }

    /// Run the CLI. Returns `Err(Done)` for early exits, `Ok(())` on
    /// completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);

        if let Err(e) = self.apply_flags() {
            prompts::error(&e.to_string());
            std::process::exit(2);
        }

        self.connect_clipboard()?;
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            prompts::print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passmint {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Fold parsed flags into the generation config. An explicit `--length`
    /// wins over `--level`; an out-of-range control value is rejected here,
    /// before any sampling.
    fn apply_flags(&mut self) -> Result<(), ConfigError> {
        if let Some(level) = self.flags.level {
            self.config.length = pass::map_length(level)?;
        }
        if let Some(len) = self.flags.length {
            self.config.length = len;
        }
        if let Some(num) = self.flags.number {
            self.count = num.max(1);
        }
        if self.flags.no_digits {
            self.config.include_digits = false;
        }
        if self.flags.no_symbols {
            self.config.include_symbols = false;
        }
        Ok(())
    }

    fn connect_clipboard(&mut self) -> Result<(), Done> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match SystemClipboard::connect() {
            Ok(c) => self.clipboard = Some(c),
            Err(_) => {
                // Fall back to terminal output, or abort on user refusal.
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Done);
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and route them to the chosen sinks.
    fn generate_output(&mut self) {
        let mut passwords = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            match pass::generate(&self.config) {
                Ok(pwd) => passwords.push(pwd),
                Err(e) => {
                    prompts::error(&e.to_string());
                    std::process::exit(2);
                }
            }
        }

        if let Some(clipboard) = self.clipboard.as_mut() {
            match deliver(clipboard, &passwords) {
                Ok(()) => prompts::clipboard_copied(),
                Err(e) => prompts::error(&e.to_string()),
            }
        } else {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for pwd in &passwords {
                let _ = writeln!(out, "{}", pwd);
            }
        }

        if let Some(ref target) = self.flags.store {
            if self.count > 1 {
                prompts::warn("--store saves only the first password");
            }
            match save_first(&mut SecretToolStore, target, &passwords[0]) {
                Ok(()) => prompts::stored(&target.server, &target.username),
                Err(e) => prompts::error(&e.to_string()),
            }
        }

        for mut pwd in passwords {
            pwd.zeroize();
        }
    }
}

/// Hand the batch to a clipboard sink, one password per line, scrubbing the
/// joined buffer afterwards.
fn deliver<W: ClipboardWriter>(writer: &mut W, passwords: &[String]) -> Result<(), ClipboardError> {
    let mut batch = passwords.join("\n");
    let result = writer.write(&batch);
    batch.zeroize();
    result
}

fn save_first<S: CredentialStore>(
    store: &mut S,
    target: &StoreTarget,
    password: &str,
) -> Result<(), StoreError> {
    store.save(&target.server, &target.username, password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::CaptureClipboard;
    use crate::store::testing::MemoryStore;

    fn context(args: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("passmint")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        Context::new(args).unwrap()
    }

    #[test]
    fn level_routes_through_the_length_mapper() {
        let mut ctx = context(&["--level", "99", "--no-symbols"]);
        ctx.apply_flags().unwrap();
        assert_eq!(ctx.config.length, pass::MAX_LEN);
        assert!(ctx.config.include_digits);
        assert!(!ctx.config.include_symbols);
    }

    #[test]
    fn explicit_length_wins_over_level() {
        let mut ctx = context(&["--level", "0", "-l", "12"]);
        ctx.apply_flags().unwrap();
        assert_eq!(ctx.config.length, 12);
    }

    #[test]
    fn out_of_range_level_is_a_config_error() {
        let mut ctx = context(&["--level", "120"]);
        assert_eq!(
            ctx.apply_flags(),
            Err(ConfigError::ControlOutOfRange(120))
        );
    }

    #[test]
    fn deliver_writes_one_password_per_line() {
        let mut clipboard = CaptureClipboard::default();
        let passwords = vec!["aB1!x".to_string(), "cD2@y".to_string()];
        deliver(&mut clipboard, &passwords).unwrap();
        assert_eq!(clipboard.written, vec!["aB1!x\ncD2@y".to_string()]);
    }

    #[test]
    fn save_first_hands_the_triple_to_the_store() {
        let mut store = MemoryStore::default();
        let target = StoreTarget {
            server: "example.com".into(),
            username: "alex".into(),
        };
        save_first(&mut store, &target, "aB1!x").unwrap();
        assert_eq!(
            store.saved,
            vec![("example.com".into(), "alex".into(), "aB1!x".into())]
        );
    }
}
