//! Luhn mod N check-symbol identifiers over arbitrary alphabets.

pub mod charset;
pub mod checksum;
pub mod codec;
pub mod config;
pub mod error;
pub mod generate;
pub mod key;
pub mod validate;

pub use charset::Charset;
pub use checksum::{checksum, control};
pub use codec::IdCodec;
pub use config::{Config, DEFAULT_LENGTH, LuhnConfig};
pub use error::{LuhnError, Result};
pub use generate::{generate, generate_with_config, generate_with_rng};
pub use key::{GroupConfig, KeyFormat, group_prefix};
pub use validate::{validate, validate_with_config, verify_with_config};
