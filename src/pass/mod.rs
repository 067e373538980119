//! Password generation core.

pub mod alphabet;
mod generate;
pub mod length;
pub mod policy;

pub use generate::{ConfigError, GenerationConfig, generate};
pub use length::{MAX_LEN, MIN_LEN, map_length};
