use super::Extremes;
use crate::scoring::ScoredSentence;

/// Single most positive and most negative sentence
///
/// Ties keep the earliest sentence. An empty sequence yields an absent pair.
pub fn find_extreme_sentences(scored: &[ScoredSentence]) -> Extremes<ScoredSentence> {
    let Some(first) = scored.first() else {
        return Extremes::absent();
    };

    let mut max = first;
    let mut min = first;
    for sentence in &scored[1..] {
        if sentence.score > max.score {
            max = sentence;
        }
        if sentence.score < min.score {
            min = sentence;
        }
    }

    Extremes {
        most_positive: Some(max.clone()),
        most_negative: Some(min.clone()),
    }
}
