//! Chunking configuration.
//!
//! ## The Budget
//!
//! Voiceover and TTS tools accept a bounded number of characters per
//! request. `max_characters` is that bound, counted in Unicode scalar values
//! (what a person would count), not bytes.
//!
//! ## Sentence Integrity vs Hard Ceiling
//!
//! The two goals conflict when a single unit is longer than the budget:
//!
//! ```text
//! max_characters = 40
//!
//! "A properly punctuated sentence that simply runs on far too long."
//!
//! fallback_split = false:  ["A properly punctuated ... too long."]   (oversized, intact)
//! fallback_split = true:   ["A properly punctuated sentence that",
//!                           "simply runs on far too long."]          (within budget)
//! ```
//!
//! Without fallback, a long unit that has no terminator at all is an error
//! rather than a silent truncation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Settings for [`chunk_text`](crate::chunk_text).
///
/// Serializes with the field names used by the host application's records
/// (`maxCharacters`, `fallbackSplit`).
///
/// # Examples
///
/// ```rust
/// use cleave::ChunkSettings;
///
/// let settings = ChunkSettings::new(490).with_fallback_split(true);
/// assert_eq!(settings.max_characters(), 490);
/// assert!(settings.fallback_split());
///
/// // The application default
/// let settings = ChunkSettings::default();
/// assert_eq!(settings.max_characters(), 500);
/// assert!(!settings.fallback_split());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkSettings {
    max_characters: usize,
    #[serde(default)]
    fallback_split: bool,
}

impl ChunkSettings {
    /// Create settings with the given budget and fallback splitting off.
    ///
    /// The budget is not checked here; see [`ChunkSettings::validate`].
    #[must_use]
    pub const fn new(max_characters: usize) -> Self {
        Self {
            max_characters,
            fallback_split: false,
        }
    }

    /// Enable or disable fallback splitting.
    ///
    /// When enabled, no chunk ever exceeds the budget: boundary-less runs and
    /// over-long sentences are split at word (or, as a last resort,
    /// character) boundaries.
    #[must_use]
    pub const fn with_fallback_split(self, fallback_split: bool) -> Self {
        Self {
            fallback_split,
            ..self
        }
    }

    /// The character budget per chunk.
    #[must_use]
    pub const fn max_characters(&self) -> usize {
        self.max_characters
    }

    /// Whether oversized units are force-split instead of rejected or kept whole.
    #[must_use]
    pub const fn fallback_split(&self) -> bool {
        self.fallback_split
    }

    /// Check that these settings can be used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `max_characters == 0`.
    pub fn validate(&self) -> Result<()> {
        if self.max_characters == 0 {
            return Err(Error::InvalidConfiguration(
                "max_characters must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Whether `current` characters plus a separator and `additional`
    /// characters would exceed the budget.
    pub(crate) fn would_overflow(&self, current: usize, additional: usize) -> bool {
        let separator = usize::from(current > 0);
        current
            .saturating_add(separator)
            .saturating_add(additional)
            > self.max_characters
    }
}

impl Default for ChunkSettings {
    fn default() -> Self {
        Self::new(500)
    }
}

impl From<usize> for ChunkSettings {
    fn from(max_characters: usize) -> Self {
        Self::new(max_characters)
    }
}
