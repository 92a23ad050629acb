#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LuhnError {
    #[error("invalid charset: alphabet is empty")]
    InvalidCharset,

    #[error("invalid code point '{symbol}' at position {position}")]
    InvalidCodePoint { symbol: String, position: usize },

    #[error("duplicate symbol '{symbol}' in charset")]
    DuplicateSymbol { symbol: String },

    #[error("symbol '{symbol}' is a prefix of '{other}'")]
    AmbiguousSymbol { symbol: String, other: String },

    #[error("charset symbols must not be empty")]
    EmptySymbol,

    #[error("length {length} leaves no room for a body after a {prefix_len}-char prefix and the control symbol")]
    LengthTooShort { length: usize, prefix_len: usize },

    #[error("prefix mismatch: expected '{expected}', found '{found}'")]
    PrefixMismatch { expected: String, found: String },

    #[error("identifier has no control symbol")]
    MissingControl,

    #[error("checksum mismatch: remainder {remainder}")]
    ChecksumMismatch { remainder: usize },

    #[error("separator '{separator}' collides with the charset or a group prefix")]
    SeparatorConflict { separator: String },

    #[error("expected {expected} groups, found {found}")]
    GroupCountMismatch { expected: usize, found: usize },

    #[error("group {index}: {source}")]
    InvalidGroup {
        index: usize,
        source: Box<LuhnError>,
    },

    #[error("invalid key format: {reason}")]
    InvalidKeyFormat { reason: String },
}

pub type Result<T> = std::result::Result<T, LuhnError>;
