use crate::charset::Charset;

/// Total identifier length used when none is configured.
pub const DEFAULT_LENGTH: usize = 6;

/// Parameters of the Luhn mod N scheme.
///
/// `length` counts the prefix chars, the body symbols and the control symbol.
/// With single-char symbols that is the identifier's char count; a charset of
/// two-char symbols and length 6 with no prefix yields a 12-char identifier.
/// A length of `0` means unset; consumers substitute [`DEFAULT_LENGTH`].
pub trait Config {
    fn length(&self) -> usize;

    fn charset(&self) -> &Charset;

    /// Arithmetic base: the charset cardinality.
    fn modulus(&self) -> usize {
        self.charset().len()
    }

    fn code_point(&self, symbol: &str) -> Option<usize> {
        self.charset().code_point(symbol)
    }

    /// Prefix for the identifier being processed.
    ///
    /// `input` is the identifier under validation, or `""` when generating.
    /// Implementations needing per-call context (a key group index, say) carry
    /// it as a field of a config value built for that call.
    fn prefix(&self, input: &str) -> &str;
}

impl<C: Config + ?Sized> Config for &C {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn charset(&self) -> &Charset {
        (**self).charset()
    }

    fn modulus(&self) -> usize {
        (**self).modulus()
    }

    fn code_point(&self, symbol: &str) -> Option<usize> {
        (**self).code_point(symbol)
    }

    fn prefix(&self, input: &str) -> &str {
        (**self).prefix(input)
    }
}

/// Default [`Config`]: a fixed charset, length and prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuhnConfig {
    pub charset: Charset,
    pub length: usize,
    pub prefix: String,
}

impl LuhnConfig {
    /// Hex charset, length 6, no prefix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            charset: Charset::hex(),
            length: DEFAULT_LENGTH,
            prefix: String::new(),
        }
    }

    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl Default for LuhnConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for LuhnConfig {
    fn length(&self) -> usize {
        if self.length < 1 {
            DEFAULT_LENGTH
        } else {
            self.length
        }
    }

    fn charset(&self) -> &Charset {
        &self.charset
    }

    fn prefix(&self, _input: &str) -> &str {
        &self.prefix
    }
}
