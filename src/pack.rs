//! Greedy packing of sentences into chunks.
//!
//! ## The Algorithm
//!
//! One left-to-right pass. Sentences are appended to the current chunk
//! (joined by a single space) until the next one would not fit; then the
//! chunk is closed and a new one starts.
//!
//! ```text
//! max_characters = 30
//!
//! Sentences: ["This is sentence one.", "This is sentence two.", "Short."]
//!
//! acc = "This is sentence one."                     (21)
//! + " This is sentence two." -> 43 > 30, close      -> chunk 1
//! acc = "This is sentence two."                     (21)
//! + " Short." -> 28 <= 30, append
//! end                                               -> chunk 2
//! ```
//!
//! This is bin packing by arrival, not optimal bin packing. It never
//! reorders sentences, which matters when the chunks are read aloud.
//!
//! ## Sentences Longer Than the Budget
//!
//! | Sentence | `fallback_split = false` | `fallback_split = true` |
//! |----------|--------------------------|-------------------------|
//! | Terminated | Own chunk, oversized | Force-split |
//! | Unterminated | Error | Force-split |
//!
//! With fallback splitting on, a final pass re-checks every chunk against
//! the budget, so none can exceed it.

use crate::error::preview;
use crate::fallback::force_split;
use crate::sentence::is_terminated;
use crate::{Chunk, ChunkSettings, Error, Result};

/// Accumulates sentences into chunk contents.
struct Packer<'a> {
    settings: &'a ChunkSettings,
    current: String,
    current_len: usize,
    contents: Vec<String>,
}

impl<'a> Packer<'a> {
    fn new(settings: &'a ChunkSettings) -> Self {
        Self {
            settings,
            current: String::new(),
            current_len: 0,
            contents: Vec::new(),
        }
    }

    fn push(&mut self, sentence: &str) -> Result<()> {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            return Ok(());
        }

        let len = sentence.chars().count();
        let max = self.settings.max_characters();

        if len > max {
            return self.push_oversized(sentence, len);
        }

        if self.settings.would_overflow(self.current_len, len) {
            self.flush();
        }
        if self.current_len > 0 {
            self.current.push(' ');
            self.current_len += 1;
        }
        self.current.push_str(sentence);
        self.current_len += len;
        Ok(())
    }

    fn push_oversized(&mut self, sentence: &str, len: usize) -> Result<()> {
        let max = self.settings.max_characters();

        if self.settings.fallback_split() {
            self.flush();
            let pieces = force_split(sentence, max);
            tracing::debug!(
                length = len,
                limit = max,
                pieces = pieces.len(),
                "force-split oversized sentence"
            );
            self.contents.extend(pieces);
            return Ok(());
        }

        if !is_terminated(sentence) {
            return Err(Error::OversizedUnboundedContent {
                length: len,
                limit: max,
                preview: preview(sentence),
            });
        }

        tracing::debug!(
            length = len,
            limit = max,
            "sentence exceeds limit, keeping it whole"
        );
        self.flush();
        self.contents.push(sentence.to_string());
        Ok(())
    }

    fn flush(&mut self) {
        if self.current_len > 0 {
            self.contents.push(std::mem::take(&mut self.current));
            self.current_len = 0;
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.contents
    }
}

/// Pack sentences, in order, into chunks of at most `max_characters`.
///
/// Chunk ids run `1..=N`.
///
/// # Errors
///
/// - [`Error::InvalidConfiguration`] if the settings fail
///   [`ChunkSettings::validate`].
/// - [`Error::OversizedUnboundedContent`] when an unterminated sentence
///   exceeds the budget and fallback splitting is off.
pub fn pack<'s, I>(sentences: I, settings: &ChunkSettings) -> Result<Vec<Chunk>>
where
    I: IntoIterator<Item = &'s str>,
{
    settings.validate()?;

    let mut packer = Packer::new(settings);
    for sentence in sentences {
        packer.push(sentence)?;
    }

    let mut contents = packer.finish();
    if settings.fallback_split() {
        contents = enforce_ceiling(contents, settings.max_characters());
    }

    Ok(crate::chunk::number_chunks(contents))
}

/// Force-split any content still over the budget.
fn enforce_ceiling(contents: Vec<String>, max_characters: usize) -> Vec<String> {
    if contents
        .iter()
        .all(|content| content.chars().count() <= max_characters)
    {
        return contents;
    }

    tracing::debug!(limit = max_characters, "re-splitting chunks over the limit");
    contents
        .into_iter()
        .flat_map(|content| {
            if content.chars().count() > max_characters {
                force_split(&content, max_characters)
            } else {
                vec![content]
            }
        })
        .collect()
}
