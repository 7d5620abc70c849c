use super::{Extremes, Segment};
use crate::scoring::ScoredSentence;

/// Most positive and most negative run of exactly `k` consecutive sentences
///
/// Window sums are maintained incrementally, adding the entering score and
/// subtracting the leaving one, so the scan is O(n) regardless of `k`. Ties keep
/// the window with the lowest start index. Absent when fewer than `k` sentences
/// exist or `k` is 0.
pub fn find_extreme_windows(scored: &[ScoredSentence], k: usize) -> Extremes<Segment> {
    let n = scored.len();
    if k == 0 || n < k {
        return Extremes::absent();
    }

    let mut window_sum: i64 = scored[..k].iter().map(|s| s.score).sum();
    let (mut max_sum, mut max_start) = (window_sum, 0);
    let (mut min_sum, mut min_start) = (window_sum, 0);

    for start in 1..=n - k {
        window_sum += scored[start + k - 1].score - scored[start - 1].score;

        if window_sum > max_sum {
            max_sum = window_sum;
            max_start = start;
        }
        if window_sum < min_sum {
            min_sum = window_sum;
            min_start = start;
        }
    }

    Extremes {
        most_positive: Some(Segment::from_range(scored, max_start, max_start + k - 1, max_sum)),
        most_negative: Some(Segment::from_range(scored, min_start, min_start + k - 1, min_sum)),
    }
}
