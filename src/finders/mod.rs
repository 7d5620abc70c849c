// WHY: Searches for the most positive and most negative regions of a scored document
// Each finder returns an Extremes pair; an absent side means no candidate existed

use serde::Serialize;

use crate::scoring::ScoredSentence;

pub mod extreme;
pub mod segment;
pub mod window;

pub use extreme::find_extreme_sentences;
pub use segment::find_extreme_segments;
pub use window::find_extreme_windows;

/// Anything that carries an aggregate sentiment score
pub trait Scored {
    fn score(&self) -> i64;
}

impl Scored for ScoredSentence {
    fn score(&self) -> i64 {
        self.score
    }
}

/// Contiguous run of scored sentences with its summed score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Index of the first sentence in the source sequence
    pub start: usize,
    /// Index of the last sentence, inclusive
    pub end: usize,
    pub score: i64,
    pub sentences: Vec<ScoredSentence>,
}

impl Segment {
    /// Copy `scored[start..=end]` out of the source sequence
    pub(crate) fn from_range(scored: &[ScoredSentence], start: usize, end: usize, score: i64) -> Self {
        debug_assert!(start <= end && end < scored.len());
        let sentences = scored[start..=end].to_vec();
        debug_assert_eq!(sentences.iter().map(|s| s.score).sum::<i64>(), score);

        Self { start, end, score, sentences }
    }

    /// Number of sentences in the segment, never zero
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

impl Scored for Segment {
    fn score(&self) -> i64 {
        self.score
    }
}

/// Most positive and most negative candidate found by a finder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extremes<T> {
    pub most_positive: Option<T>,
    pub most_negative: Option<T>,
}

impl<T> Extremes<T> {
    /// Pair with both sides absent
    pub fn absent() -> Self {
        Self {
            most_positive: None,
            most_negative: None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.most_positive.is_none() && self.most_negative.is_none()
    }
}

impl<T: Scored> Extremes<T> {
    /// Score of the most positive candidate, 0 when absent
    pub fn positive_score(&self) -> i64 {
        self.most_positive.as_ref().map_or(0, Scored::score)
    }

    /// Score of the most negative candidate, 0 when absent
    pub fn negative_score(&self) -> i64 {
        self.most_negative.as_ref().map_or(0, Scored::score)
    }
}

impl<T> Default for Extremes<T> {
    fn default() -> Self {
        Self::absent()
    }
}
