use crate::config::Config;
use crate::error::{LuhnError, Result};

/// Initial factor when checksumming a body that has no control symbol yet.
pub const GENERATE_FACTOR: usize = 2;

/// Initial factor when checksumming a complete identifier.
pub const VALIDATE_FACTOR: usize = 1;

/// Weighted Luhn mod N sum of `input`.
///
/// Symbols are weighted right to left, starting at `initial_factor` and
/// alternating between 2 and 1. Each product is folded back into the base as
/// `p / N + p % N`, the mod N form of Luhn's digit sum of a doubled digit.
///
/// # Errors
///
/// Returns `InvalidCharset` if the charset is empty and `InvalidCodePoint` for
/// the first symbol of `input` the config does not know.
pub fn checksum<C: Config + ?Sized>(input: &str, initial_factor: usize, config: &C) -> Result<usize> {
    let modulus = config.modulus();
    if modulus == 0 {
        return Err(LuhnError::InvalidCharset);
    }

    let tokens = config
        .charset()
        .tokenize(input, |symbol| config.code_point(symbol))?;

    let mut factor = initial_factor;
    let mut sum = 0;
    for &(_, code_point) in tokens.iter().rev() {
        let addend = factor * code_point;
        factor = if factor == 2 { 1 } else { 2 };
        sum += addend / modulus + addend % modulus;
    }

    tracing::trace!(input, initial_factor, sum, "computed checksum");
    Ok(sum)
}

/// Control symbol that makes `body` followed by it checksum to 0 mod N.
///
/// # Errors
///
/// Same as [`checksum`].
pub fn control<'c, C: Config + ?Sized>(body: &str, config: &'c C) -> Result<&'c str> {
    let modulus = config.modulus();
    if modulus == 0 {
        return Err(LuhnError::InvalidCharset);
    }

    let remainder = checksum(body, GENERATE_FACTOR, config)? % modulus;
    let index = (modulus - remainder) % modulus;

    config
        .charset()
        .symbol(index)
        .ok_or(LuhnError::InvalidCharset)
}
