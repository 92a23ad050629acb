use rand::Rng;

use crate::charset::Charset;
use crate::config::Config;
use crate::error::{LuhnError, Result};
use crate::generate::generate_with_rng;
use crate::validate::verify_with_config;

/// Default key alphabet: digits plus letters that are hard to confuse.
pub const KEY_CHARSET: &str = "0123456798EFHIPXZL";

const GROUP_PREFIXES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// Prefix used by groups past the end of [`GROUP_PREFIXES`].
const OVERFLOW_PREFIX: &str = "X";

/// Prefix of the group at `index`: `A` through `J`, then `X`.
#[must_use]
pub fn group_prefix(index: usize) -> &'static str {
    GROUP_PREFIXES.get(index).copied().unwrap_or(OVERFLOW_PREFIX)
}

/// Layout of a product key such as `A3F9-BE07-C1PL`.
///
/// A key is `groups` Luhn mod N identifiers joined by `separator`. Group `i`
/// starts with [`group_prefix(i)`](group_prefix), so groups cannot be
/// reordered without failing validation. `group_len` includes that prefix and
/// the group's control symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFormat {
    pub groups: usize,
    pub group_len: usize,
    pub separator: String,
    pub charset: Charset,
}

impl KeyFormat {
    /// Three groups of four, separated by `-`, over [`KEY_CHARSET`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: 3,
            group_len: 4,
            separator: "-".to_string(),
            charset: Charset::preset(KEY_CHARSET),
        }
    }

    #[must_use]
    pub const fn with_groups(mut self, groups: usize) -> Self {
        self.groups = groups;
        self
    }

    #[must_use]
    pub const fn with_group_len(mut self, group_len: usize) -> Self {
        self.group_len = group_len;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Config for the group at `index`.
    #[must_use]
    pub const fn group(&self, index: usize) -> GroupConfig<'_> {
        GroupConfig {
            format: self,
            index,
        }
    }

    /// Rejects formats that cannot produce keys which split back into their
    /// groups.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyFormat` for zero groups or an empty separator
    /// - `InvalidCharset` for an empty charset
    /// - `LengthTooShort` if a group has no room for a body
    /// - `SeparatorConflict` if a separator char can appear inside a group
    pub fn check(&self) -> Result<()> {
        if self.groups == 0 {
            return Err(LuhnError::InvalidKeyFormat {
                reason: "at least one group is required".to_string(),
            });
        }
        if self.separator.is_empty() {
            return Err(LuhnError::InvalidKeyFormat {
                reason: "separator must not be empty".to_string(),
            });
        }
        if self.charset.is_empty() {
            return Err(LuhnError::InvalidCharset);
        }

        let used_prefixes = (0..self.groups.min(GROUP_PREFIXES.len() + 1)).map(group_prefix);
        for prefix in used_prefixes {
            let prefix_len = prefix.chars().count();
            if self.group_len < prefix_len + 2 {
                return Err(LuhnError::LengthTooShort {
                    length: self.group_len,
                    prefix_len,
                });
            }
            if prefix.chars().any(|c| self.separator.contains(c)) {
                return Err(self.separator_conflict());
            }
        }

        let clashes = self
            .charset
            .symbols()
            .iter()
            .any(|symbol| symbol.chars().any(|c| self.separator.contains(c)));
        if clashes {
            return Err(self.separator_conflict());
        }

        Ok(())
    }

    fn separator_conflict(&self) -> LuhnError {
        LuhnError::SeparatorConflict {
            separator: self.separator.clone(),
        }
    }

    /// Generate a key using the thread-local random generator.
    ///
    /// # Errors
    ///
    /// See [`KeyFormat::generate_with_rng`].
    pub fn generate(&self) -> Result<String> {
        self.generate_with_rng(&mut rand::rng())
    }

    /// Generate a key, drawing every group body from `rng`.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`KeyFormat::check`] or from generating a
    /// group.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        self.check()?;

        let parts = (0..self.groups)
            .map(|index| generate_with_rng(&self.group(index), &mut *rng))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(groups = self.groups, group_len = self.group_len, "generated key");
        Ok(parts.join(&self.separator))
    }

    /// Check every group of `key` against its own prefix and control symbol.
    ///
    /// # Errors
    ///
    /// Returns format errors from [`KeyFormat::check`], `GroupCountMismatch`
    /// when the key splits into the wrong number of groups, and `InvalidGroup`
    /// wrapping the first group failure.
    pub fn verify(&self, key: &str) -> Result<()> {
        self.check()?;

        let parts: Vec<&str> = key.split(self.separator.as_str()).collect();
        if parts.len() != self.groups {
            return Err(LuhnError::GroupCountMismatch {
                expected: self.groups,
                found: parts.len(),
            });
        }

        for (index, part) in parts.into_iter().enumerate() {
            verify_with_config(part, &self.group(index)).map_err(|source| {
                LuhnError::InvalidGroup {
                    index,
                    source: Box::new(source),
                }
            })?;
        }

        Ok(())
    }

    #[must_use]
    pub fn validate(&self, key: &str) -> bool {
        match self.verify(key) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(key, %error, "key rejected");
                false
            }
        }
    }
}

impl Default for KeyFormat {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Config`] for one group of a key; the group index selects the prefix.
#[derive(Debug, Clone, Copy)]
pub struct GroupConfig<'a> {
    format: &'a KeyFormat,
    index: usize,
}

impl GroupConfig<'_> {
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl Config for GroupConfig<'_> {
    fn length(&self) -> usize {
        self.format.group_len
    }

    fn charset(&self) -> &Charset {
        &self.format.charset
    }

    fn prefix(&self, _input: &str) -> &str {
        group_prefix(self.index)
    }
}
