//! Error types for cleave.

/// Errors that can occur during chunking.
///
/// Chunking is all-or-nothing: when an error is returned, no chunks are.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The settings cannot be used (e.g. a zero character budget).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A run of text with no sentence terminator is longer than the budget,
    /// and fallback splitting is disabled.
    #[error(
        "text contains continuous content ({length} characters) without sentence boundaries \
         that exceeds the limit of {limit} characters: \"{preview}\". Add punctuation, \
         increase the character limit, or enable fallback splitting"
    )]
    OversizedUnboundedContent {
        /// Length of the offending run, in characters.
        length: usize,
        /// The configured `max_characters`.
        limit: usize,
        /// Head/tail excerpt of the offending run.
        preview: String,
    },
}

/// Result type for cleave operations.
pub type Result<T> = std::result::Result<T, Error>;

const PREVIEW_EDGE: usize = 50;

/// Build the excerpt carried by [`Error::OversizedUnboundedContent`].
///
/// Short runs are shown whole; longer ones as `head...tail`.
pub(crate) fn preview(text: &str) -> String {
    let len = text.chars().count();
    if len <= PREVIEW_EDGE * 2 {
        return text.to_string();
    }
    let head: String = text.chars().take(PREVIEW_EDGE).collect();
    let tail: String = text.chars().skip(len - PREVIEW_EDGE).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_preview_is_verbatim() {
        assert_eq!(preview("no punctuation here"), "no punctuation here");
    }

    #[test]
    fn test_long_preview_keeps_head_and_tail() {
        let text = format!("{}{}{}", "a".repeat(50), "b".repeat(100), "c".repeat(50));
        let p = preview(&text);
        assert_eq!(p, format!("{}...{}", "a".repeat(50), "c".repeat(50)));
    }

    #[test]
    fn test_oversized_message_names_length_and_limit() {
        let err = Error::OversizedUnboundedContent {
            length: 600,
            limit: 500,
            preview: "aaa".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("600 characters"));
        assert!(msg.contains("limit of 500 characters"));
        assert!(msg.contains("without sentence boundaries"));
    }
}
