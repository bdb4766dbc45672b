//! Export helpers for chunk sequences.
//!
//! Two shapes: one text with every chunk, or one file descriptor per chunk.
//! Writing the files (or zipping them) is left to the caller.

use serde::{Deserialize, Serialize};

use crate::Chunk;

const CHUNK_SEPARATOR: &str = "\n\n";

/// A file to be written for one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkFile {
    /// File name, `chunk-<id>.txt`.
    pub filename: String,
    /// The chunk content, verbatim.
    pub content: String,
}

/// Join chunk contents into one text, separated by a blank line.
///
/// ```rust
/// use cleave::{export_as_single_file, Chunk};
///
/// let chunks = [Chunk::new(1, "First."), Chunk::new(2, "Second.")];
/// assert_eq!(export_as_single_file(&chunks), "First.\n\nSecond.");
/// ```
pub fn export_as_single_file(chunks: &[Chunk]) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.content.as_str())
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}

/// Like [`export_as_single_file`], with a `Chunk <id>` header line above
/// each chunk.
///
/// ```rust
/// use cleave::{export_with_headers, Chunk};
///
/// let chunks = [Chunk::new(1, "First."), Chunk::new(2, "Second.")];
/// assert_eq!(
///     export_with_headers(&chunks),
///     "Chunk 1\nFirst.\n\nChunk 2\nSecond."
/// );
/// ```
pub fn export_with_headers(chunks: &[Chunk]) -> String {
    chunks
        .iter()
        .map(|chunk| format!("Chunk {}\n{}", chunk.id, chunk.content))
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}

/// One [`ChunkFile`] per chunk, in order.
pub fn prepare_multiple_files(chunks: &[Chunk]) -> Vec<ChunkFile> {
    chunks
        .iter()
        .map(|chunk| ChunkFile {
            filename: format!("chunk-{}.txt", chunk.id),
            content: chunk.content.clone(),
        })
        .collect()
}
