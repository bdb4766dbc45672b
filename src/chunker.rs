//! The chunking entry point: segment, pack, summarize.

use serde::{Deserialize, Serialize};

use crate::pack::pack;
use crate::sentence::split_sentences;
use crate::{Chunk, ChunkSettings, ChunkStats, Result};

/// Chunks and their statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkResult {
    /// The chunks, in input order, numbered from 1.
    pub chunks: Vec<Chunk>,
    /// Statistics over `chunks`.
    pub stats: ChunkStats,
}

impl ChunkResult {
    fn from_chunks(chunks: Vec<Chunk>) -> Self {
        let stats = ChunkStats::from_chunks(&chunks);
        Self { chunks, stats }
    }
}

/// Sentence-aware chunker with a fixed, validated configuration.
///
/// ## Example
///
/// ```rust
/// use cleave::{ChunkSettings, SentenceChunker};
///
/// let chunker = SentenceChunker::new(ChunkSettings::new(30))?;
/// let text = "This is sentence one. This is sentence two. This is sentence three.";
/// let result = chunker.chunk(text)?;
///
/// assert_eq!(result.chunks.len(), 3);
/// assert!(result.chunks.iter().all(|c| c.character_count <= 30));
/// # Ok::<(), cleave::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SentenceChunker {
    settings: ChunkSettings,
}

impl SentenceChunker {
    /// Create a chunker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// if the settings are invalid.
    pub fn new(settings: ChunkSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// The settings this chunker was built with.
    #[must_use]
    pub const fn settings(&self) -> &ChunkSettings {
        &self.settings
    }

    /// Split text into chunks.
    ///
    /// Empty or whitespace-only text gives no chunks and zero stats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OversizedUnboundedContent`](crate::Error::OversizedUnboundedContent)
    /// when text without sentence terminators exceeds the budget and fallback
    /// splitting is off. No chunks are returned in that case.
    pub fn chunk(&self, text: &str) -> Result<ChunkResult> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Ok(ChunkResult::default());
        }

        let chunks = pack(sentences.iter().copied(), &self.settings)?;
        tracing::debug!(
            sentences = sentences.len(),
            chunks = chunks.len(),
            limit = self.settings.max_characters(),
            fallback_split = self.settings.fallback_split(),
            "chunked text"
        );

        Ok(ChunkResult::from_chunks(chunks))
    }
}

/// Split text into sentence-respecting chunks of at most
/// `settings.max_characters()` characters.
///
/// Shorthand for `SentenceChunker::new(*settings)?.chunk(text)`. Settings are
/// validated before the text is looked at.
///
/// ```rust
/// use cleave::{chunk_text, ChunkSettings};
///
/// let result = chunk_text("Short text.", &ChunkSettings::new(500))?;
/// assert_eq!(result.chunks.len(), 1);
/// assert_eq!(result.chunks[0].content, "Short text.");
/// # Ok::<(), cleave::Error>(())
/// ```
///
/// # Errors
///
/// - [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration) if
///   `max_characters` is 0.
/// - [`Error::OversizedUnboundedContent`](crate::Error::OversizedUnboundedContent)
///   if text without sentence terminators exceeds the budget and fallback
///   splitting is off.
pub fn chunk_text(text: &str, settings: &ChunkSettings) -> Result<ChunkResult> {
    SentenceChunker::new(*settings)?.chunk(text)
}
