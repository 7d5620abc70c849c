// WHY: Lexicon scoring with single-token negation flipping
// Free functions over explicit resources keep scoring independent of any host state

use serde::Serialize;

use crate::lexicon::{Lexicon, NegationSet};
use crate::sentence_splitter::abbreviations::is_word_char;

/// A sentence with its summed sentiment score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    pub score: i64,
}

impl ScoredSentence {
    pub fn new(text: impl Into<String>, score: i64) -> Self {
        Self { text: text.into(), score }
    }
}

/// Split text into word-character runs
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c)).filter(|token| !token.is_empty())
}

/// Score one sentence
///
/// Each token contributes its lexicon score. A non-zero contribution is negated
/// when the token directly before it is a negation word; negation never reaches
/// further than one token.
pub fn score_sentence(sentence: &str, lexicon: &Lexicon, negations: &NegationSet) -> i64 {
    let lowered = sentence.to_lowercase();
    let mut total = 0;
    let mut previous: Option<&str> = None;

    for token in tokenize(&lowered) {
        let mut score = i64::from(lexicon.score(token));
        if score != 0 && previous.is_some_and(|p| negations.contains(p)) {
            score = -score;
        }
        total += score;
        previous = Some(token);
    }

    total
}

/// Score every sentence in order, skipping sentences that are a lone `.`
pub fn score_sentences<S: AsRef<str>>(
    sentences: &[S],
    lexicon: &Lexicon,
    negations: &NegationSet,
) -> Vec<ScoredSentence> {
    let mut scored = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        let sentence: &str = sentence.as_ref();
        if sentence == "." {
            continue;
        }
        scored.push(ScoredSentence::new(sentence, score_sentence(sentence, lexicon, negations)));
    }
    scored
}
