use std::collections::HashMap;

use crate::error::{LuhnError, Result};

/// Hexadecimal digits `0-9A-F`, the default alphabet.
pub const HEX: &str = "0123456789ABCDEF";

/// Decimal digits, for classic mod 10 Luhn.
pub const DECIMAL: &str = "0123456789";

/// RFC 4648 base32 alphabet.
pub const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Digits followed by uppercase letters.
pub const BASE36: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered alphabet of unique symbols.
///
/// A symbol's code point is its zero-based position. Symbols are usually single
/// characters but may be longer. No symbol may be a prefix of another, so any
/// string over the charset splits into symbols in exactly one way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<String>,
    index: HashMap<String, usize>,
    max_symbol_chars: usize,
}

impl Charset {
    /// Build a charset from an ordered list of symbols.
    ///
    /// An empty list is accepted here; operations that consume the charset
    /// reject it with [`LuhnError::InvalidCharset`].
    ///
    /// # Errors
    ///
    /// Returns `EmptySymbol` for a zero-length symbol, `DuplicateSymbol`
    /// when a symbol appears twice and `AmbiguousSymbol` when one symbol is a
    /// prefix of another.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut charset = Self {
            symbols: Vec::new(),
            index: HashMap::new(),
            max_symbol_chars: 0,
        };

        for symbol in symbols {
            let symbol = symbol.into();
            if symbol.is_empty() {
                return Err(LuhnError::EmptySymbol);
            }
            if charset.index.contains_key(&symbol) {
                return Err(LuhnError::DuplicateSymbol { symbol });
            }
            if let Some(error) = charset.prefix_clash(&symbol) {
                return Err(error);
            }
            charset.max_symbol_chars = charset.max_symbol_chars.max(symbol.chars().count());
            charset.index.insert(symbol.clone(), charset.symbols.len());
            charset.symbols.push(symbol);
        }

        Ok(charset)
    }

    fn prefix_clash(&self, symbol: &str) -> Option<LuhnError> {
        self.symbols.iter().find_map(|existing| {
            let (shorter, longer) = if existing.len() <= symbol.len() {
                (existing.as_str(), symbol)
            } else {
                (symbol, existing.as_str())
            };
            longer
                .starts_with(shorter)
                .then(|| LuhnError::AmbiguousSymbol {
                    symbol: shorter.to_string(),
                    other: longer.to_string(),
                })
        })
    }

    /// One symbol per character of `chars`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateSymbol` if a character repeats.
    pub fn from_chars(chars: &str) -> Result<Self> {
        Self::new(chars.chars().map(String::from))
    }

    /// Preset built from a constant that is known to be duplicate-free.
    pub(crate) fn preset(chars: &'static str) -> Self {
        let symbols: Vec<String> = chars.chars().map(String::from).collect();
        let index = symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();
        Self {
            symbols,
            index,
            max_symbol_chars: 1,
        }
    }

    #[must_use]
    pub fn hex() -> Self {
        Self::preset(HEX)
    }

    #[must_use]
    pub fn decimal() -> Self {
        Self::preset(DECIMAL)
    }

    #[must_use]
    pub fn base32() -> Self {
        Self::preset(BASE32)
    }

    #[must_use]
    pub fn base36() -> Self {
        Self::preset(BASE36)
    }

    /// Number of symbols; the arithmetic base of the checksum.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Symbol at `code_point`, if in range.
    #[must_use]
    pub fn symbol(&self, code_point: usize) -> Option<&str> {
        self.symbols.get(code_point).map(String::as_str)
    }

    /// Position of `symbol` in the charset.
    #[must_use]
    pub fn code_point(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Length in chars of the longest symbol.
    #[must_use]
    pub const fn max_symbol_chars(&self) -> usize {
        self.max_symbol_chars
    }

    /// Split `input` into symbols, left to right. The charset is prefix-free,
    /// so at most one symbol matches at each position.
    ///
    /// Returns the matched slices; `lookup` decides membership so callers can
    /// route it through their own code point function.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCodePoint` at the first position where no symbol
    /// matches. `position` is the char offset into `input`.
    pub(crate) fn tokenize<'a, F>(&self, input: &'a str, lookup: F) -> Result<Vec<(&'a str, usize)>>
    where
        F: Fn(&str) -> Option<usize>,
    {
        let boundaries: Vec<usize> = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .collect();
        let char_count = boundaries.len() - 1;
        let widest = self.max_symbol_chars.max(1);

        let mut tokens = Vec::with_capacity(char_count);
        let mut pos = 0;
        while pos < char_count {
            let start = boundaries[pos];
            let matched = (1..=widest.min(char_count - pos)).rev().find_map(|width| {
                let candidate = &input[start..boundaries[pos + width]];
                lookup(candidate).map(|code_point| (candidate, code_point, width))
            });

            match matched {
                Some((symbol, code_point, width)) => {
                    tokens.push((symbol, code_point));
                    pos += width;
                }
                None => {
                    let symbol = input[start..boundaries[pos + 1]].to_string();
                    return Err(LuhnError::InvalidCodePoint {
                        symbol,
                        position: pos,
                    });
                }
            }
        }

        Ok(tokens)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::hex()
    }
}
