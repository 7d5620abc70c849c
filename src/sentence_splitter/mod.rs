// WHY: Sentence splitting for both spaced text and word-segmented text that lost its spaces
// Abbreviation dots are located first, then skipped while scanning for boundaries

use anyhow::Result;
use tracing::debug;

pub mod abbreviations;

pub use abbreviations::{AbbreviationChecker, ProtectedDots};

/// Punctuation that can terminate a sentence
pub const END_PUNCTUATION: [char; 3] = ['.', '!', '?'];

fn is_end_punctuation(c: char) -> bool {
    END_PUNCTUATION.contains(&c)
}

/// Whitespace as matched by `\s`, which also covers the information separators U+001C..=U+001F
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Abbreviation-aware sentence splitter
#[derive(Debug)]
pub struct SentenceSplitter {
    abbreviations: AbbreviationChecker,
}

impl SentenceSplitter {
    /// Create splitter with the default abbreviation list
    pub fn new() -> Result<Self> {
        Ok(Self {
            abbreviations: AbbreviationChecker::new()?,
        })
    }

    /// Create splitter with a custom abbreviation checker
    pub fn with_abbreviations(abbreviations: AbbreviationChecker) -> Self {
        Self { abbreviations }
    }

    /// Split text on end punctuation followed by whitespace
    ///
    /// The whitespace run after a boundary is consumed; sentences are otherwise
    /// returned as they appear in the input.
    pub fn split_spaced(&self, text: &str) -> Vec<String> {
        let text = text.trim_matches(is_space);
        if text.is_empty() {
            return Vec::new();
        }

        let protected = self.abbreviations.protected_dots_spaced(text);
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut prev: Option<(usize, char)> = None;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if is_space(ch) && prev.is_some_and(|p| is_boundary(p, &protected)) {
                sentences.push(text[start..idx].to_string());

                // WHY: input is trimmed, so a whitespace run is always followed by content
                start = text.len();
                while let Some(&(next_idx, next)) = chars.peek() {
                    if !is_space(next) {
                        start = next_idx;
                        break;
                    }
                    chars.next();
                }
                prev = None;
                continue;
            }
            prev = Some((idx, ch));
        }

        if start < text.len() {
            sentences.push(text[start..].to_string());
        }

        debug!("Split spaced text into {} sentences", sentences.len());
        sentences
    }

    /// Split text without spaces on end punctuation followed by an upper-case
    /// ASCII letter or the end of the text
    ///
    /// Fragments are trimmed and empty fragments dropped.
    pub fn split_unspaced(&self, text: &str) -> Vec<String> {
        let text = text.trim_matches(is_space);
        let protected = self.abbreviations.protected_dots_unspaced(text);
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if !is_boundary((idx, ch), &protected) {
                continue;
            }
            let end = idx + ch.len_utf8();
            let splits = match chars.peek() {
                Some(&(_, next)) => next.is_ascii_uppercase(),
                None => true,
            };
            if splits {
                push_fragment(&mut sentences, &text[start..end]);
                start = end;
            }
        }
        push_fragment(&mut sentences, &text[start..]);

        debug!("Split unspaced text into {} fragments", sentences.len());
        sentences
    }
}

fn is_boundary((idx, ch): (usize, char), protected: &ProtectedDots) -> bool {
    is_end_punctuation(ch) && !protected.contains(&idx)
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim_matches(is_space);
    if !fragment.is_empty() {
        sentences.push(fragment.to_string());
    }
}
