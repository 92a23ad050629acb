use crate::checksum::{VALIDATE_FACTOR, checksum};
use crate::config::{Config, LuhnConfig};
use crate::error::{LuhnError, Result};

/// Returns true if `identifier` carries a correct control symbol under the
/// default config.
#[must_use]
pub fn validate(identifier: &str) -> bool {
    validate_with_config(identifier, &LuhnConfig::default())
}

/// Returns true if `identifier` carries a correct control symbol.
///
/// Every failure reported by [`verify_with_config`] collapses to `false`.
#[must_use]
pub fn validate_with_config<C: Config + ?Sized>(identifier: &str, config: &C) -> bool {
    match verify_with_config(identifier, config) {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!(identifier, %error, "identifier rejected");
            false
        }
    }
}

/// Checks `identifier` and explains why it is invalid.
///
/// The configured prefix must match exactly and is removed before the
/// checksum; it never contributes to the sum. The rest (body plus control
/// symbol) must checksum to 0 mod N with an initial factor of 1.
///
/// # Errors
///
/// - `PrefixMismatch` if the identifier does not start with the prefix
/// - `MissingControl` if nothing follows the prefix
/// - `InvalidCharset` if the charset is empty
/// - `InvalidCodePoint` for a symbol outside the charset
/// - `ChecksumMismatch` if the sum is not congruent to 0
pub fn verify_with_config<C: Config + ?Sized>(identifier: &str, config: &C) -> Result<()> {
    let prefix = config.prefix(identifier);
    let rest = identifier
        .strip_prefix(prefix)
        .ok_or_else(|| LuhnError::PrefixMismatch {
            expected: prefix.to_string(),
            found: identifier.chars().take(prefix.chars().count()).collect(),
        })?;
    if rest.is_empty() {
        return Err(LuhnError::MissingControl);
    }

    let modulus = config.modulus();
    if modulus == 0 {
        return Err(LuhnError::InvalidCharset);
    }

    let remainder = checksum(rest, VALIDATE_FACTOR, config)? % modulus;
    if remainder != 0 {
        return Err(LuhnError::ChecksumMismatch { remainder });
    }

    Ok(())
}
