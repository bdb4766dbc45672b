//! # cleave
//!
//! Sentence-aware text chunking under a character budget.
//!
//! ## The Problem
//!
//! Voiceover and TTS services accept a limited number of characters per
//! request. A long script has to be cut into pieces, and where the cuts fall
//! is audible: a sentence split in half is read with the wrong intonation,
//! twice.
//!
//! So the cuts have to fall between sentences, and finding sentences is the
//! hard part:
//!
//! - "Dr. Smith met Mrs. Jones." is one sentence, not three
//! - `She said, "Wait. Not yet!"` has no boundary inside the quotes
//! - "Well... maybe." keeps its ellipsis
//! - "I don't know" contains an apostrophe, not a quote
//!
//! ## The Pipeline
//!
//! ```text
//! text ──► split_sentences ──► pack ──► ChunkStats ──► ChunkResult
//!                                │
//!                                └─► force_split (oversized units only)
//! ```
//!
//! 1. **Segment**: [`split_sentences`] returns the sentences as slices of the
//!    input, each keeping its terminal punctuation.
//! 2. **Pack**: sentences are appended greedily, in order, to the current
//!    chunk until the next one would exceed `max_characters`.
//! 3. **Fallback**: a single unit longer than the budget is either kept
//!    whole (a real sentence), rejected (a run with no terminator at all), or,
//!    when [`ChunkSettings::with_fallback_split`] is on, cut by
//!    [`force_split`] at word boundaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use cleave::{chunk_text, ChunkSettings};
//!
//! let text = "This is sentence one. This is sentence two. This is sentence three.";
//! let result = chunk_text(text, &ChunkSettings::new(50))?;
//!
//! assert_eq!(result.chunks.len(), 2);
//! assert_eq!(result.chunks[0].content, "This is sentence one. This is sentence two.");
//! assert_eq!(result.chunks[1].id, 2);
//! assert_eq!(result.stats.largest_chunk, 43);
//! # Ok::<(), cleave::Error>(())
//! ```
//!
//! ## Boundary-less Text
//!
//! ```rust
//! use cleave::{chunk_text, ChunkSettings, Error};
//!
//! let text = "a".repeat(600);
//!
//! let err = chunk_text(&text, &ChunkSettings::new(500)).unwrap_err();
//! assert!(matches!(err, Error::OversizedUnboundedContent { length: 600, .. }));
//!
//! let settings = ChunkSettings::new(500).with_fallback_split(true);
//! let result = chunk_text(&text, &settings)?;
//! assert_eq!(result.chunks.len(), 2);
//! # Ok::<(), cleave::Error>(())
//! ```
//!
//! ## Export
//!
//! [`export_as_single_file`], [`export_with_headers`] and
//! [`prepare_multiple_files`] turn a chunk sequence into text or per-chunk
//! file descriptors.
//!
//! ## Logging
//!
//! Decisions (forced splits, oversized sentences kept whole) are reported
//! as `tracing` debug events. No subscriber is installed.

mod chunk;
mod chunker;
mod error;
mod export;
mod fallback;
mod pack;
mod sentence;
mod settings;
mod stats;

pub use chunk::Chunk;
pub use chunker::{chunk_text, ChunkResult, SentenceChunker};
pub use error::{Error, Result};
pub use export::{export_as_single_file, export_with_headers, prepare_multiple_files, ChunkFile};
pub use fallback::force_split;
pub use pack::pack;
pub use sentence::{is_terminated, split_sentences};
pub use settings::ChunkSettings;
pub use stats::ChunkStats;
