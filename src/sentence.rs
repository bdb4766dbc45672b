//! Sentence segmentation.
//!
//! Splits text into sentences ending in `.`, `!` or `?`, without splitting
//! inside abbreviations or quoted dialogue.
//!
//! ## The Hard Part: Finding Sentences
//!
//! A period is not always a sentence end:
//!
//! ```text
//! Dr. Smith said, "Wait. Not yet!" and left... Then e.g. 3.14 happened.
//!    ^               ^                   ^          ^   ^
//!    abbreviation    inside dialogue     ellipsis   abbreviation, decimal
//! ```
//!
//! ## Two Passes
//!
//! 1. **Protect**: find the byte ranges in which a terminator never ends a
//!    sentence: known abbreviations (`Dr.`, `Mrs.`, `e.g.`, ...) and quoted
//!    spans (`"..."`, `“...”`, and single-quoted dialogue such as
//!    `'Go home.'` but not contractions such as `don't`).
//! 2. **Scan**: walk the text; an unprotected run of terminators (plus any
//!    closing quotes or brackets) followed by whitespace or end-of-text ends
//!    a sentence. Dialogue that itself ends in a terminator ends the
//!    sentence too, unless the next word starts lowercase
//!    (`"Stop!" she said.` stays one sentence).
//!
//! The dialogue rule goes beyond plain span protection on purpose:
//! `She said, "Hello world." He replied.` is two sentences here, not one, so
//! dialogue-heavy paragraphs still break into sentences the packer can fit.
//!
//! Sentences are slices of the input, so nothing is ever substituted in or
//! out of the text.
//!
//! ## Trailing Text
//!
//! Text after the last terminator is returned as a final, unterminated
//! sentence. [`is_terminated`] tells the two apart; the packer treats an
//! oversized unterminated sentence as boundary-less content.
//!
//! ## Limitations
//!
//! Single-quote dialogue detection is a heuristic. Nested quotes or unusual
//! apostrophe use may be misread.

use std::ops::Range;

/// Abbreviations whose trailing period never ends a sentence.
///
/// Matched case-insensitively at the start of a word.
const ABBREVIATIONS: &[&str] = &[
    "Dr", "Mr", "Mrs", "Ms", "Prof", "Sr", "Jr", "etc", "vs", "e.g", "i.e",
];

const OPEN_DOUBLE: char = '\u{201C}';
const CLOSE_DOUBLE: char = '\u{201D}';

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Characters allowed between a terminator and the whitespace that follows it.
fn is_closing(c: char) -> bool {
    matches!(c, '"' | CLOSE_DOUBLE | '\'' | '\u{2019}' | ')' | ']')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether a sentence ends with terminal punctuation.
///
/// Closing quotes and brackets after the terminator are ignored, so
/// `He said "stop."` counts as terminated.
///
/// ```rust
/// use cleave::is_terminated;
///
/// assert!(is_terminated("Done."));
/// assert!(is_terminated("Really?!"));
/// assert!(is_terminated("She said, \"Go home.\""));
/// assert!(!is_terminated("no punctuation here"));
/// ```
pub fn is_terminated(sentence: &str) -> bool {
    sentence
        .trim_end()
        .trim_end_matches(is_closing)
        .ends_with(is_terminator)
}

/// Split text into sentences.
///
/// Each sentence is a trimmed slice of `text` and keeps its terminal
/// punctuation. Whitespace-only input yields no sentences; input without
/// any terminator yields one.
///
/// ```rust
/// use cleave::split_sentences;
///
/// let sentences = split_sentences("Dr. Smith arrived. Wait... Who? \"Me.\" Yes");
/// assert_eq!(
///     sentences,
///     vec!["Dr. Smith arrived.", "Wait...", "Who?", "\"Me.\"", "Yes"]
/// );
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    let spans = protected_spans(text);
    let mut sentences: Vec<Range<usize>> = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    let mut next_span = 0;

    while pos < text.len() {
        if let Some(span) = spans.get(next_span).filter(|s| s.start == pos) {
            next_span += 1;
            pos = span.end;
            if ends_in_dialogue_terminator(&text[span.clone()])
                && dialogue_ends_sentence(&text[pos..])
            {
                push_sentence(text, &mut sentences, &mut start, pos);
            }
            continue;
        }

        let Some(c) = text[pos..].chars().next() else {
            break;
        };
        if !is_terminator(c) {
            pos += c.len_utf8();
            continue;
        }

        let limit = spans.get(next_span).map_or(text.len(), |s| s.start);
        let end = skip_while(text, pos, limit, is_terminator);
        let end = skip_while(text, end, limit, is_closing);
        pos = end;

        let at_boundary = text[end..].chars().next().map_or(true, char::is_whitespace);
        if at_boundary {
            push_sentence(text, &mut sentences, &mut start, end);
        }
    }

    let rest = trim_range(text, start..text.len());
    if !rest.is_empty() {
        match sentences.last_mut() {
            // a bare "..." or "!" left at the end belongs to the last sentence
            Some(last) if !has_content(&text[rest.clone()]) => last.end = rest.end,
            _ => sentences.push(rest),
        }
    }

    sentences.into_iter().map(|r| &text[r]).collect()
}

/// Close the sentence running from `start` to `end`, unless it is nothing
/// but punctuation, in which case it is carried into the next one.
fn push_sentence(text: &str, sentences: &mut Vec<Range<usize>>, start: &mut usize, end: usize) {
    let range = trim_range(text, *start..end);
    if has_content(&text[range.clone()]) {
        sentences.push(range);
        *start = end;
    }
}

fn has_content(s: &str) -> bool {
    s.chars()
        .any(|c| !c.is_whitespace() && !is_terminator(c) && !is_closing(c))
}

fn trim_range(text: &str, range: Range<usize>) -> Range<usize> {
    let s = &text[range.clone()];
    let leading = s.len() - s.trim_start().len();
    let trailing = s.len() - s.trim_end().len();
    if leading == s.len() {
        return range.start..range.start;
    }
    range.start + leading..range.end - trailing
}

/// Advance from `pos` over chars matching `pred`, stopping at `limit`.
fn skip_while(text: &str, mut pos: usize, limit: usize, pred: fn(char) -> bool) -> usize {
    for c in text[pos..limit].chars() {
        if !pred(c) {
            break;
        }
        pos += c.len_utf8();
    }
    pos
}

/// Whether a quoted span ends with a terminator just inside its closing quote.
fn ends_in_dialogue_terminator(span: &str) -> bool {
    let mut chars = span.chars().rev();
    chars.next().is_some_and(is_quote) && chars.next().is_some_and(is_terminator)
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | CLOSE_DOUBLE)
}

/// After terminated dialogue, the sentence ends unless narration continues
/// in lowercase (`"Stop!" she said.`).
fn dialogue_ends_sentence(rest: &str) -> bool {
    let after = rest.trim_start();
    if after.is_empty() {
        return true;
    }
    after.len() < rest.len() && after.chars().next().is_some_and(|c| !c.is_lowercase())
}

/// First pass: byte ranges whose terminators must not end a sentence.
///
/// Ranges are sorted and disjoint.
fn protected_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut prev: Option<char> = None;
    let mut pos = 0;
    // set once a closer search runs off the end of the text; later searches
    // would scan the same tail
    let mut single_quotes_exhausted = false;

    while let Some(c) = text[pos..].chars().next() {
        let rest = &text[pos..];
        let at_word_start = prev.map_or(true, |p| !is_word_char(p));

        let len = match c {
            '"' => closing_len(rest, '"', '"'),
            OPEN_DOUBLE => closing_len(rest, OPEN_DOUBLE, CLOSE_DOUBLE),
            '\'' if at_word_start && !single_quotes_exhausted && opens_single_quote(rest) => {
                let len = single_quote_len(rest);
                single_quotes_exhausted = len.is_none();
                len
            }
            _ if at_word_start => abbreviation_len(rest),
            _ => None,
        };

        match len {
            Some(len) => {
                spans.push(pos..pos + len);
                prev = text[..pos + len].chars().next_back();
                pos += len;
            }
            None => {
                prev = Some(c);
                pos += c.len_utf8();
            }
        }
    }

    spans
}

/// Length of `open ... close` at the start of `rest`, if it closes.
fn closing_len(rest: &str, open: char, close: char) -> Option<usize> {
    let body = &rest[open.len_utf8()..];
    body.find(close)
        .map(|i| open.len_utf8() + i + close.len_utf8())
}

/// A `'` opens dialogue only when text follows it directly.
fn opens_single_quote(rest: &str) -> bool {
    rest[1..].chars().next().is_some_and(|c| !c.is_whitespace())
}

/// Length of a dialogue span opened by the `'` at the start of `rest`.
///
/// The closing `'` must follow a non-space char, must not be followed by a
/// letter or digit, and must leave at least 2 interior chars. Apostrophes
/// inside words are skipped. `None` means the search reached end of text.
fn single_quote_len(rest: &str) -> Option<usize> {
    let body = &rest[1..];
    let mut interior = 0usize;
    let mut prev = '\'';
    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\'' && interior >= 2 && !prev.is_whitespace() {
            let next = chars.peek().map(|&(_, n)| n);
            if next.map_or(true, |n| !n.is_alphanumeric()) {
                return Some(1 + i + 1);
            }
        }
        interior += 1;
        prev = c;
    }
    None
}

/// Length of a known abbreviation plus its period at the start of `rest`.
fn abbreviation_len(rest: &str) -> Option<usize> {
    ABBREVIATIONS.iter().find_map(|abbr| {
        let n = abbr.len();
        let head = rest.get(..n)?;
        (head.eq_ignore_ascii_case(abbr) && rest[n..].starts_with('.')).then_some(n + 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let sentences = split_sentences("Hello world. How are you? I am fine!");
        assert_eq!(sentences, vec!["Hello world.", "How are you?", "I am fine!"]);
    }

    #[test]
    fn test_abbreviations() {
        let sentences = split_sentences("Dr. Smith went to Mrs. Jones. She was out.");
        assert_eq!(sentences, vec!["Dr. Smith went to Mrs. Jones.", "She was out."]);
    }

    #[test]
    fn test_abbreviations_case_insensitive() {
        let sentences = split_sentences("Apples, pears, ETC. were sold vs. bought. Done.");
        assert_eq!(sentences, vec!["Apples, pears, ETC. were sold vs. bought.", "Done."]);
    }

    #[test]
    fn test_latin_abbreviations() {
        let sentences = split_sentences("Use a fruit, e.g. an apple, i.e. a pome. Fine.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].ends_with("a pome."));
    }

    #[test]
    fn test_abbreviation_needs_word_start() {
        // "Dr" inside "Madr." is not the abbreviation
        let sentences = split_sentences("We went to Madr. Then home.");
        assert_eq!(sentences, vec!["We went to Madr.", "Then home."]);
    }

    #[test]
    fn test_ellipsis_stays_attached() {
        let sentences = split_sentences("This is sentence one... This is sentence two.");
        assert_eq!(
            sentences,
            vec!["This is sentence one...", "This is sentence two."]
        );
    }

    #[test]
    fn test_repeated_punctuation() {
        let sentences = split_sentences("What?! No way!!! Really???");
        assert_eq!(sentences, vec!["What?!", "No way!!!", "Really???"]);
    }

    #[test]
    fn test_decimal_is_not_a_boundary() {
        let sentences = split_sentences("Pi is roughly 3.14 today. Yes.");
        assert_eq!(sentences, vec!["Pi is roughly 3.14 today.", "Yes."]);
    }

    #[test]
    fn test_double_quoted_dialogue() {
        let sentences = split_sentences(r#"She said, "Hello world." He replied, "Hi there!""#);
        assert_eq!(
            sentences,
            vec![r#"She said, "Hello world.""#, r#"He replied, "Hi there!""#]
        );
    }

    #[test]
    fn test_dialogue_followed_by_lowercase_narration() {
        let sentences = split_sentences(r#""Stop. Right there!" she said. Then she left."#);
        assert_eq!(
            sentences,
            vec![r#""Stop. Right there!" she said."#, "Then she left."]
        );
    }

    #[test]
    fn test_typographic_quotes() {
        let sentences = split_sentences("He whispered, \u{201C}Not now. Later.\u{201D} Okay.");
        assert_eq!(
            sentences,
            vec!["He whispered, \u{201C}Not now. Later.\u{201D}", "Okay."]
        );
    }

    #[test]
    fn test_single_quoted_dialogue() {
        let sentences = split_sentences("'Wait. Come back,' he called. 'Go home.'");
        assert_eq!(
            sentences,
            vec!["'Wait. Come back,' he called.", "'Go home.'"]
        );
    }

    #[test]
    fn test_contractions_are_not_quotes() {
        let sentences = split_sentences("I don't know. It's fine. The dogs' bowls are empty.");
        assert_eq!(
            sentences,
            vec!["I don't know.", "It's fine.", "The dogs' bowls are empty."]
        );
    }

    #[test]
    fn test_contraction_inside_dialogue() {
        let sentences = split_sentences("'I don't know. Maybe.' Then silence.");
        assert_eq!(sentences, vec!["'I don't know. Maybe.'", "Then silence."]);
    }

    #[test]
    fn test_stray_quote_keeps_later_dialogue_protected() {
        let sentences = split_sentences("He shrugged ' and left. Then 'Go home. Now.' she said.");
        assert_eq!(
            sentences,
            vec!["He shrugged ' and left.", "Then 'Go home. Now.' she said."]
        );
    }

    #[test]
    fn test_unmatched_quote_protects_nothing() {
        let sentences = split_sentences(r#"He said "wait. Then nothing."#);
        assert_eq!(sentences, vec![r#"He said "wait."#, "Then nothing."]);
    }

    #[test]
    fn test_trailing_remainder() {
        let sentences = split_sentences("First sentence. Then some trailing words");
        assert_eq!(sentences, vec!["First sentence.", "Then some trailing words"]);
        assert!(is_terminated(sentences[0]));
        assert!(!is_terminated(sentences[1]));
    }

    #[test]
    fn test_no_punctuation_is_one_sentence() {
        let sentences = split_sentences("  just some words without an ending  ");
        assert_eq!(sentences, vec!["just some words without an ending"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  \n\t ").is_empty());
    }

    #[test]
    fn test_punctuation_only_runs_are_not_dropped() {
        let sentences = split_sentences("Hello. ... World.");
        assert_eq!(sentences, vec!["Hello.", "... World."]);

        let sentences = split_sentences("Hello. !!");
        assert_eq!(sentences, vec!["Hello. !!"]);
    }

    #[test]
    fn test_newlines_separate_sentences() {
        let sentences = split_sentences("Line one.\nLine two.\n\nLine three.");
        assert_eq!(sentences, vec!["Line one.", "Line two.", "Line three."]);
    }

    #[test]
    fn test_closing_bracket_after_terminator() {
        let sentences = split_sentences("It worked (mostly.) Next one.");
        assert_eq!(sentences, vec!["It worked (mostly.)", "Next one."]);
    }

    #[test]
    fn test_multibyte_text() {
        let sentences = split_sentences("Привет мир. Héllo wörld! 日本語");
        assert_eq!(sentences, vec!["Привет мир.", "Héllo wörld!", "日本語"]);
    }

    #[test]
    fn test_is_terminated() {
        assert!(is_terminated("Done."));
        assert!(is_terminated("Done...  "));
        assert!(is_terminated("'Go home.'"));
        assert!(!is_terminated("Done"));
        assert!(!is_terminated(""));
    }
}
