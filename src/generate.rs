use rand::Rng;

use crate::charset::Charset;
use crate::checksum::control;
use crate::config::{Config, DEFAULT_LENGTH, LuhnConfig};
use crate::error::{LuhnError, Result};

/// Generate an identifier with the default config (hex, length 6, no prefix).
///
/// # Errors
///
/// Never fails with the default config; the signature matches
/// [`generate_with_config`].
pub fn generate() -> Result<String> {
    generate_with_config(&LuhnConfig::default())
}

/// Generate an identifier using the thread-local random generator.
///
/// # Errors
///
/// See [`generate_with_rng`].
pub fn generate_with_config<C: Config + ?Sized>(config: &C) -> Result<String> {
    generate_with_rng(config, &mut rand::rng())
}

/// Generate `prefix || body || control` with the body drawn from `rng`.
///
/// The body holds `length - 1 - prefix_chars` symbols, each chosen uniformly
/// from the charset. `length` counts symbols, not chars: with multi-char
/// symbols the returned string is longer than `length` chars. The control
/// symbol is solved, so the result always validates against the same config.
///
/// # Errors
///
/// Returns `InvalidCharset` for an empty charset and `LengthTooShort` when
/// the prefix and control symbol leave no room for a body.
pub fn generate_with_rng<C, R>(config: &C, rng: &mut R) -> Result<String>
where
    C: Config + ?Sized,
    R: Rng + ?Sized,
{
    let length = match config.length() {
        0 => DEFAULT_LENGTH,
        n => n,
    };

    let charset = config.charset();
    if charset.is_empty() {
        return Err(LuhnError::InvalidCharset);
    }

    let prefix = config.prefix("");
    let prefix_len = prefix.chars().count();
    let body_len = match length.checked_sub(prefix_len + 1) {
        Some(n) if n > 0 => n,
        _ => return Err(LuhnError::LengthTooShort { length, prefix_len }),
    };

    let body = random_body(charset, body_len, rng);
    let ctrl = control(&body, config)?;

    tracing::debug!(length, prefix, body_len, "generated identifier");
    Ok(format!("{prefix}{body}{ctrl}"))
}

/// `len` symbols drawn independently and uniformly from `charset`.
pub(crate) fn random_body<R: Rng + ?Sized>(charset: &Charset, len: usize, rng: &mut R) -> String {
    let symbols = charset.symbols();
    let mut body = String::with_capacity(len * charset.max_symbol_chars());
    for _ in 0..len {
        body.push_str(&symbols[rng.random_range(0..symbols.len())]);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_with_config;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_generate_default_length() {
        let id = generate().unwrap();
        assert_eq!(id.len(), 6);
        assert!(validate_with_config(&id, &LuhnConfig::new()));
    }

    #[test]
    fn test_generate_default_is_hex() {
        let id = generate().unwrap();
        assert!(id.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_generate_with_prefix() {
        let config = LuhnConfig::new().with_length(9).with_prefix("abc");
        let id = generate_with_config(&config).unwrap();
        assert_eq!(id.len(), 9);
        assert!(id.starts_with("abc"));
        assert!(validate_with_config(&id, &config));
    }

    #[test]
    fn test_generate_zero_length_uses_default() {
        let config = LuhnConfig::new().with_length(0);
        assert_eq!(generate_with_config(&config).unwrap().len(), DEFAULT_LENGTH);
    }

    #[test]
    fn test_generate_empty_charset() {
        let config = LuhnConfig::new().with_charset(Charset::from_chars("").unwrap());
        assert_eq!(generate_with_config(&config), Err(LuhnError::InvalidCharset));
    }

    #[test]
    fn test_generate_prefix_consumes_length() {
        let config = LuhnConfig::new().with_length(4).with_prefix("abc");
        assert_eq!(
            generate_with_config(&config),
            Err(LuhnError::LengthTooShort {
                length: 4,
                prefix_len: 3,
            })
        );
    }

    #[test]
    fn test_generate_prefix_longer_than_length() {
        let config = LuhnConfig::new().with_length(2).with_prefix("abcdef");
        assert!(matches!(
            generate_with_config(&config),
            Err(LuhnError::LengthTooShort { .. })
        ));
    }

    #[test]
    fn test_generate_length_one_without_prefix() {
        let config = LuhnConfig::new().with_length(1);
        assert!(matches!(
            generate_with_config(&config),
            Err(LuhnError::LengthTooShort { length: 1, prefix_len: 0 })
        ));
    }

    #[test]
    fn test_generate_with_rng_is_reproducible() {
        let config = LuhnConfig::new().with_length(12);
        let first = generate_with_rng(&config, &mut seeded()).unwrap();
        let second = generate_with_rng(&config, &mut seeded()).unwrap();
        assert_eq!(first, second);
        assert!(validate_with_config(&first, &config));
    }

    #[test]
    fn test_generate_prefix_length_counts_chars() {
        let config = LuhnConfig::new().with_length(5).with_prefix("é");
        let id = generate_with_rng(&config, &mut seeded()).unwrap();
        assert_eq!(id.chars().count(), 5);
        assert!(validate_with_config(&id, &config));
    }

    #[test]
    fn test_generate_multi_char_symbols() {
        let charset = Charset::new(["ab", "c", "d"]).unwrap();
        let config = LuhnConfig::new().with_charset(charset).with_length(8);
        let id = generate_with_rng(&config, &mut seeded()).unwrap();
        assert!(validate_with_config(&id, &config));
    }

    #[test]
    fn test_generate_mixed_width_symbols_always_validate() {
        let charset = Charset::new(["ab", "b", "ca", "d"]).unwrap();
        let config = LuhnConfig::new().with_charset(charset).with_length(6);
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let id = generate_with_rng(&config, &mut rng).unwrap();
            assert!(validate_with_config(&id, &config), "seed {seed}: {id}");
        }
    }

    #[test]
    fn test_generate_length_counts_symbols() {
        let charset = Charset::new(["ab", "cd", "ef"]).unwrap();
        let config = LuhnConfig::new().with_charset(charset).with_length(6);
        let id = generate_with_rng(&config, &mut seeded()).unwrap();
        assert_eq!(id.len(), 12);
    }

    #[test]
    fn test_random_body_uses_charset() {
        let charset = Charset::from_chars("XYZ").unwrap();
        let body = random_body(&charset, 200, &mut seeded());
        assert_eq!(body.len(), 200);
        assert!(body.chars().all(|c| "XYZ".contains(c)));
    }

    #[test]
    fn test_random_body_zero_length() {
        assert_eq!(random_body(&Charset::hex(), 0, &mut seeded()), "");
    }
}
