//! The fixed phrase a run evolves toward.

use super::genome::{ALPHABET_MAX, ALPHABET_MIN};
use crate::error::ConfigError;

/// A validated, immutable target phrase.
///
/// Every character must lie in the printable ASCII range the genomes are
/// drawn from (space through `~`), otherwise the target could never be
/// reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    phrase: String,
}

impl Target {
    /// Validates and wraps a target phrase.
    ///
    /// # Errors
    /// [`ConfigError::EmptyTarget`] for an empty phrase and
    /// [`ConfigError::NonPrintableTarget`] for the first character outside
    /// the alphabet.
    pub fn new(phrase: impl Into<String>) -> Result<Self, ConfigError> {
        let phrase = phrase.into();
        if phrase.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        if let Some((position, character)) = phrase
            .chars()
            .enumerate()
            .find(|&(_, c)| !is_printable(c))
        {
            return Err(ConfigError::NonPrintableTarget {
                position,
                character,
            });
        }
        Ok(Self { phrase })
    }

    /// Number of characters (and genes per genome).
    pub fn len(&self) -> usize {
        self.phrase.len()
    }

    /// Always `false`; a `Target` cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.phrase.as_bytes()
    }
}

fn is_printable(c: char) -> bool {
    u8::try_from(c).is_ok_and(|b| (ALPHABET_MIN..=ALPHABET_MAX).contains(&b))
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.phrase)
    }
}
