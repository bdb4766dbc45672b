//! Forced splitting for text that cannot be split on sentences.
//!
//! The last resort: cut every `max_characters`, preferring a nearby word
//! boundary.
//!
//! ## How It Works
//!
//! ```text
//! max_characters = 20, word-boundary window = last 20% (index > 16)
//!
//! Text: "The quick brown fox jumps over the lazy dog"
//!
//! Window 0: "The quick brown fox "    last space at 19 > 16 -> cut there
//!   Piece:  "The quick brown fox"
//! Window 1: "jumps over the lazy "    last space at 19 > 16 -> cut there
//!   Piece:  "jumps over the lazy"
//! Rest:     "dog"                     fits -> final piece
//! ```
//!
//! When the window has no whitespace near its end (one enormous word, a URL,
//! text in a script without spaces) the cut falls exactly at the window end,
//! backed off to the nearest grapheme cluster boundary so that combining
//! marks and emoji sequences stay whole.
//!
//! ## Trade-offs
//!
//! | Cut | Keeps | Costs |
//! |-----|-------|-------|
//! | Word boundary | Whole words | Up to 20% of the budget unused |
//! | Hard cut | The hard ceiling | A word split in two |

use unicode_segmentation::UnicodeSegmentation;

/// Whitespace is only used as a cut point in the final fifth of the window.
const WORD_BOUNDARY_NUMERATOR: usize = 4;
const WORD_BOUNDARY_DENOMINATOR: usize = 5;

/// Split text into pieces of at most `max_characters` characters.
///
/// Pieces are trimmed and non-empty. Joined with single spaces they give back
/// the trimmed input, except that whitespace runs at cut points collapse.
/// A `max_characters` of zero yields no pieces.
///
/// ```rust
/// use cleave::force_split;
///
/// let pieces = force_split("The quick brown fox jumps over the lazy dog", 20);
/// assert_eq!(pieces, vec!["The quick brown fox", "jumps over the lazy", "dog"]);
///
/// let pieces = force_split(&"a".repeat(600), 500);
/// assert_eq!(pieces.len(), 2);
/// assert_eq!(pieces[0].len(), 500);
/// ```
pub fn force_split(text: &str, max_characters: usize) -> Vec<String> {
    let mut remaining = text.trim();
    if max_characters == 0 || remaining.is_empty() {
        return vec![];
    }

    let mut pieces = Vec::with_capacity(estimate_pieces(remaining, max_characters));

    while remaining.chars().count() > max_characters {
        let cut = word_boundary(remaining, max_characters)
            .unwrap_or_else(|| hard_boundary(remaining, max_characters));

        let piece = remaining[..cut].trim_end();
        if !piece.is_empty() {
            pieces.push(piece.to_string());
        }
        remaining = remaining[cut..].trim_start();
    }

    if !remaining.is_empty() {
        pieces.push(remaining.to_string());
    }

    pieces
}

fn estimate_pieces(text: &str, max_characters: usize) -> usize {
    text.len().div_ceil(max_characters).max(1)
}

/// Byte offset of the last whitespace within the first `max_characters`
/// chars, if it sits in the final fifth of that window.
fn word_boundary(text: &str, max_characters: usize) -> Option<usize> {
    text.char_indices()
        .take(max_characters)
        .enumerate()
        .filter(|&(index, (_, c))| {
            c.is_whitespace()
                && index * WORD_BOUNDARY_DENOMINATOR > max_characters * WORD_BOUNDARY_NUMERATOR
        })
        .map(|(_, (offset, _))| offset)
        .last()
}

/// Byte offset at which to cut when there is no usable whitespace.
///
/// The last grapheme boundary within the window, or the window end itself
/// when a single grapheme is wider than the window.
fn hard_boundary(text: &str, max_characters: usize) -> usize {
    let window_end = text
        .char_indices()
        .nth(max_characters)
        .map_or(text.len(), |(offset, _)| offset);

    let mut cut = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let end = offset + grapheme.len();
        if end > window_end {
            break;
        }
        cut = end;
    }

    if cut == 0 {
        window_end
    } else {
        cut
    }
}
