//! Aggregate statistics over a chunk sequence.

use serde::{Deserialize, Serialize};

use crate::Chunk;

/// Summary of a chunk sequence. All zero for an empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkStats {
    /// Number of chunks.
    pub total_chunks: usize,
    /// Sum of all chunk character counts.
    pub total_characters: usize,
    /// Mean chunk size, rounded half up.
    pub average_chunk_size: usize,
    /// Character count of the largest chunk.
    pub largest_chunk: usize,
    /// Character count of the smallest chunk.
    pub smallest_chunk: usize,
}

impl ChunkStats {
    /// Compute statistics for `chunks`.
    ///
    /// ```rust
    /// use cleave::{Chunk, ChunkStats};
    ///
    /// let chunks = [Chunk::new(1, "abc"), Chunk::new(2, "abcdef")];
    /// let stats = ChunkStats::from_chunks(&chunks);
    ///
    /// assert_eq!(stats.total_characters, 9);
    /// assert_eq!(stats.average_chunk_size, 5); // 4.5 rounds up
    /// assert_eq!(stats.largest_chunk, 6);
    /// assert_eq!(stats.smallest_chunk, 3);
    /// ```
    #[must_use]
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        let sizes = chunks.iter().map(|c| c.character_count);
        let (Some(largest_chunk), Some(smallest_chunk)) = (sizes.clone().max(), sizes.clone().min())
        else {
            return Self::default();
        };

        let total_chunks = chunks.len();
        let total_characters: usize = sizes.sum();

        Self {
            total_chunks,
            total_characters,
            average_chunk_size: (2 * total_characters + total_chunks) / (2 * total_chunks),
            largest_chunk,
            smallest_chunk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_all_zero() {
        assert_eq!(ChunkStats::from_chunks(&[]), ChunkStats::default());
    }

    #[test]
    fn test_single_chunk() {
        let stats = ChunkStats::from_chunks(&[Chunk::new(1, "Short text.")]);
        assert_eq!(stats.total_chunks, 1);
        assert_eq!(stats.total_characters, 11);
        assert_eq!(stats.average_chunk_size, 11);
        assert_eq!(stats.largest_chunk, 11);
        assert_eq!(stats.smallest_chunk, 11);
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        // 1 + 2 + 2 = 5, 5 / 3 = 1.67
        let chunks = [Chunk::new(1, "a"), Chunk::new(2, "bb"), Chunk::new(3, "cc")];
        assert_eq!(ChunkStats::from_chunks(&chunks).average_chunk_size, 2);

        // 1 + 1 + 2 = 4, 4 / 3 = 1.33
        let chunks = [Chunk::new(1, "a"), Chunk::new(2, "b"), Chunk::new(3, "cc")];
        assert_eq!(ChunkStats::from_chunks(&chunks).average_chunk_size, 1);
    }
}
