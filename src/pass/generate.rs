//! Policy-constrained password generation.

use rand::Rng;
use zeroize::Zeroize;

use super::alphabet::Alphabet;
use super::length::{MAX_LEN, MIN_LEN};
use super::policy::satisfies_policy;

/// One generation request: how long, and which optional character classes
/// the policy demands. Passed into [`generate`] by reference; the generator
/// keeps no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl GenerationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_LEN..=MAX_LEN).contains(&self.length) {
            return Err(ConfigError::LengthOutOfRange(self.length));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 20,
            include_digits: true,
            include_symbols: true,
        }
    }
}

/// Rejected configuration. Raised before any sampling begins, never
/// mid-loop.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    LengthOutOfRange(usize),
    ControlOutOfRange(i64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LengthOutOfRange(len) => {
                write!(f, "Length {} outside {}..={}", len, MIN_LEN, MAX_LEN)
            }
            ConfigError::ControlOutOfRange(val) => {
                write!(f, "Control value {} outside 0..=99", val)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Generate one password satisfying the config's composition policy.
///
/// Rejection sampling: draw `length` characters uniformly from the pool,
/// keep the first candidate the policy accepts. There is no iteration cap;
/// the loop terminates with probability one, but callers needing bounded
/// latency must wrap this in their own timeout. Uses the thread-local
/// CSPRNG, so concurrent callers never share RNG state.
pub fn generate(config: &GenerationConfig) -> Result<String, ConfigError> {
    generate_with(config, &mut rand::rng())
}

/// [`generate`] with an explicit RNG, for reproducible sampling in tests.
pub fn generate_with<R: Rng>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<String, ConfigError> {
    config.validate()?;

    let alphabet = Alphabet::build(config.include_digits, config.include_symbols);

    loop {
        // random_range rejects partial blocks internally, so each index is
        // uniform over the pool. Plain modulo would skew toward low indices.
        let mut candidate = String::with_capacity(config.length);
        for _ in 0..config.length {
            candidate.push(alphabet.byte(rng.random_range(0..alphabet.len())) as char);
        }

        if satisfies_policy(&candidate, config.include_digits, config.include_symbols) {
            return Ok(candidate);
        }
        candidate.zeroize();
    }
}
