use super::{Extremes, Segment};
use crate::scoring::ScoredSentence;

/// Best run found by a subarray scan, `end` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: usize,
    end: usize,
    sum: i64,
}

/// Most positive and most negative run of consecutive sentences of any length
///
/// Two independent O(n) scans, one per direction. An empty sequence yields an
/// absent pair.
pub fn find_extreme_segments(scored: &[ScoredSentence]) -> Extremes<Segment> {
    if scored.is_empty() {
        return Extremes::absent();
    }

    let scores: Vec<i64> = scored.iter().map(|s| s.score).collect();
    let max = max_subarray(&scores);
    let min = min_subarray(&scores);

    Extremes {
        most_positive: Some(Segment::from_range(scored, max.start, max.end, max.sum)),
        most_negative: Some(Segment::from_range(scored, min.start, min.end, min.sum)),
    }
}

/// Maximum-sum run; `scores` must be non-empty
///
/// The running sum only extends when that is strictly better than restarting,
/// and the best only moves on a strict improvement, so the first optimal run found is kept.
fn max_subarray(scores: &[i64]) -> Run {
    let mut best = Run { start: 0, end: 0, sum: scores[0] };
    let mut running = scores[0];
    let mut current_start = 0;

    for (i, &score) in scores.iter().enumerate().skip(1) {
        if running + score > score {
            running += score;
        } else {
            running = score;
            current_start = i;
        }

        if running > best.sum {
            best = Run { start: current_start, end: i, sum: running };
        }
    }

    best
}

/// Minimum-sum run; mirror image of [`max_subarray`]
fn min_subarray(scores: &[i64]) -> Run {
    let mut best = Run { start: 0, end: 0, sum: scores[0] };
    let mut running = scores[0];
    let mut current_start = 0;

    for (i, &score) in scores.iter().enumerate().skip(1) {
        if running + score < score {
            running += score;
        } else {
            running = score;
            current_start = i;
        }

        if running < best.sum {
            best = Run { start: current_start, end: i, sum: running };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finders::test_support::scored;
    use crate::finders::window::find_extreme_windows;
    use proptest::prelude::*;

    fn bounds(segment: &Option<Segment>) -> (usize, usize, i64) {
        let segment = segment.as_ref().unwrap();
        (segment.start, segment.end, segment.score)
    }

    #[test]
    fn test_classic_maximum_subarray() {
        let segments = find_extreme_segments(&scored(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]));

        assert_eq!(bounds(&segments.most_positive), (3, 6, 6));
        assert_eq!(bounds(&segments.most_negative), (7, 7, -5));
    }

    #[test]
    fn test_interrupted_runs_stay_separate() {
        let segments = find_extreme_segments(&scored(&[3, -3, 3]));

        assert_eq!(bounds(&segments.most_positive), (0, 0, 3));
        assert_eq!(bounds(&segments.most_negative), (1, 1, -3));
    }

    #[test]
    fn test_all_negative_picks_single_best() {
        let segments = find_extreme_segments(&scored(&[-4, -1, -3]));

        assert_eq!(bounds(&segments.most_positive), (1, 1, -1));
        assert_eq!(bounds(&segments.most_negative), (0, 2, -8));
    }

    #[test]
    fn test_ties_keep_earliest_run() {
        let segments = find_extreme_segments(&scored(&[2, 0, 0, 2]));

        assert_eq!(bounds(&segments.most_positive), (0, 3, 4));
        let neutral = find_extreme_segments(&scored(&[0, 0, 0]));
        assert_eq!(bounds(&neutral.most_positive), (0, 0, 0));
        assert_eq!(bounds(&neutral.most_negative), (0, 0, 0));
    }

    #[test]
    fn test_large_scores_sum_beyond_i32() {
        let big = i64::from(i32::MAX);
        let segments = find_extreme_segments(&scored(&[big, big, -1, -big, -big]));

        assert_eq!(bounds(&segments.most_positive), (0, 1, 2 * big));
        assert_eq!(bounds(&segments.most_negative), (2, 4, -2 * big - 1));
    }

    #[test]
    fn test_empty_sequence_is_absent() {
        let segments = find_extreme_segments(&[]);
        assert!(segments.is_absent());
        assert_eq!(segments.positive_score(), 0);
    }

    proptest! {
        #[test]
        fn prop_segment_dominates_every_window(
            scores in prop::collection::vec(-5i64..=5, 1..40),
            k in 1usize..8,
        ) {
            let sentences = scored(&scores);
            let segments = find_extreme_segments(&sentences);
            let windows = find_extreme_windows(&sentences, k);

            if !windows.is_absent() {
                prop_assert!(segments.positive_score() >= windows.positive_score());
                prop_assert!(segments.negative_score() <= windows.negative_score());
            }
        }

        #[test]
        fn prop_segment_matches_exhaustive_search(
            scores in prop::collection::vec(-5i64..=5, 1..25),
        ) {
            let segments = find_extreme_segments(&scored(&scores));

            let mut best_max = i64::MIN;
            let mut best_min = i64::MAX;
            for start in 0..scores.len() {
                for end in start..scores.len() {
                    let sum: i64 = scores[start..=end].iter().sum();
                    best_max = best_max.max(sum);
                    best_min = best_min.min(sum);
                }
            }

            let positive = segments.most_positive.unwrap();
            let negative = segments.most_negative.unwrap();
            prop_assert_eq!(positive.score, best_max);
            prop_assert_eq!(negative.score, best_min);
            prop_assert_eq!(scores[positive.start..=positive.end].iter().sum::<i64>(), best_max);
        }
    }
}
