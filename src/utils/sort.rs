use core::cmp::Ordering;

use num::Float;

/// Descending comparison for floats
/// NaN sorts after every number so it never wins a ranking.
#[inline(always)]
pub fn desc_cmp<N: Float>(a: N, b: N) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Stable sort of (key, weight) pairs by weight descending
/// Equal weights keep their input order.
#[inline]
pub fn sort_by_weight_desc<K, N: Float>(pairs: &mut [(K, N)]) {
    pairs.sort_by(|a, b| desc_cmp(a.1, b.1));
}

/// Indices of `scores` ordered by score descending, ties by ascending index
pub fn ranked_indices<N: Float>(scores: &[N]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..scores.len()).collect();
    idx.sort_by(|&a, &b| desc_cmp(scores[a], scores[b]).then_with(|| a.cmp(&b)));
    idx
}

/// The `n`-th largest value (1-based), `None` if `n` is 0 or exceeds the length
pub fn nth_largest<N: Float>(scores: &[N], n: usize) -> Option<N> {
    if n == 0 || n > scores.len() {
        return None;
    }
    let mut sorted: Vec<N> = scores.to_vec();
    sorted.sort_by(|a, b| desc_cmp(*a, *b));
    Some(sorted[n - 1])
}
