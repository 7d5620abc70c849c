// WHY: Rebuilds word boundaries in text whose spaces were removed
// Greedy longest-match without backtracking; unmatched characters are dropped

use tracing::debug;

use crate::lexicon::Dictionary;

/// Separator emitted between consecutive fragments
pub const FRAGMENT_SEPARATOR: &str = ".";

/// Segment each fragment into dictionary words
///
/// Fragments are processed independently, each lower-cased first, and a `.`
/// token is emitted before every fragment after the first.
pub fn word_break<S: AsRef<str>>(fragments: &[S], dictionary: &Dictionary) -> Vec<String> {
    let mut words = Vec::new();

    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            words.push(FRAGMENT_SEPARATOR.to_string());
        }
        segment_into(&fragment.as_ref().to_lowercase(), dictionary, &mut words);
    }

    words
}

/// Greedy longest-match segmentation of one space-free string
///
/// At each position the longest dictionary word starting there is taken. When
/// no word matches, the character is skipped and nothing is emitted for it.
fn segment_into(text: &str, dictionary: &Dictionary, words: &mut Vec<String>) {
    // WHY: byte offset of every char boundary, so candidates are sliced by char count
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = boundaries.len() - 1;
    let max_len = dictionary.max_word_len();

    let mut pos = 0;
    let mut dropped = 0usize;
    while pos < char_count {
        let longest = (1..=max_len.min(char_count - pos))
            .rev()
            .find(|&len| dictionary.contains(&text[boundaries[pos]..boundaries[pos + len]]));

        match longest {
            Some(len) => {
                words.push(text[boundaries[pos]..boundaries[pos + len]].to_string());
                pos += len;
            }
            None => {
                dropped += 1;
                pos += 1;
            }
        }
    }

    if dropped > 0 {
        debug!("Word segmentation dropped {} unmatched characters", dropped);
    }
}
