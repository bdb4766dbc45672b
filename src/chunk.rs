//! The Chunk type: a budget-sized run of whole sentences.

use serde::{Deserialize, Serialize};

use crate::sentence::split_sentences;

/// A chunk of text ready to be sent to a voiceover or TTS request.
///
/// Chunks are numbered from 1 in output order, with no gaps. The content is
/// trimmed and never empty.
///
/// ## Character Counts
///
/// `character_count` counts Unicode scalar values, the same unit as
/// [`ChunkSettings::max_characters`](crate::ChunkSettings::max_characters):
///
/// ```rust
/// use cleave::Chunk;
///
/// let chunk = Chunk::new(1, "  Héllo wörld. Bye.  ");
///
/// assert_eq!(chunk.content, "Héllo wörld. Bye.");
/// assert_eq!(chunk.character_count, 17);
/// assert_eq!(chunk.sentence_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// One-based position of this chunk in the sequence.
    pub id: usize,
    /// The chunk text, trimmed.
    pub content: String,
    /// Number of characters in `content`.
    pub character_count: usize,
    /// Number of sentences detected in `content`.
    pub sentence_count: usize,
}

impl Chunk {
    /// Create a chunk, trimming the content and deriving its counts.
    #[must_use]
    pub fn new(id: usize, content: impl AsRef<str>) -> Self {
        let content = content.as_ref().trim();
        Self {
            id,
            content: content.to_string(),
            character_count: content.chars().count(),
            sentence_count: split_sentences(content).len(),
        }
    }

    /// The length of this chunk in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.character_count
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ id: {}, chars: {}, sentences: {} }}",
            self.id, self.character_count, self.sentence_count
        )
    }
}

/// Number pieces of text as chunks `1..=N`.
pub(crate) fn number_chunks<I>(contents: I) -> Vec<Chunk>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    contents
        .into_iter()
        .enumerate()
        .map(|(index, content)| Chunk::new(index + 1, content))
        .collect()
}
