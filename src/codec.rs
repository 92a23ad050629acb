use rand::Rng;

use crate::config::{Config, LuhnConfig};
use crate::error::Result;
use crate::{generate, validate};

/// Generator/validator pair bound to one config.
#[derive(Debug, Clone, Default)]
pub struct IdCodec<C: Config = LuhnConfig> {
    config: C,
}

impl<C: Config> IdCodec<C> {
    /// Create a new codec with the given config.
    #[must_use]
    pub const fn new(config: C) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Generate an identifier using the thread-local random generator.
    ///
    /// # Errors
    ///
    /// See [`generate::generate_with_rng`].
    pub fn generate(&self) -> Result<String> {
        generate::generate_with_config(&self.config)
    }

    /// Generate an identifier drawing the body from `rng`.
    ///
    /// # Errors
    ///
    /// See [`generate::generate_with_rng`].
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        generate::generate_with_rng(&self.config, rng)
    }

    #[must_use]
    pub fn validate(&self, identifier: &str) -> bool {
        validate::validate_with_config(identifier, &self.config)
    }

    /// # Errors
    ///
    /// See [`validate::verify_with_config`].
    pub fn verify(&self, identifier: &str) -> Result<()> {
        validate::verify_with_config(identifier, &self.config)
    }
}
