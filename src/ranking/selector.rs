use log::debug;
use serde::Serialize;

use crate::{
    error::{Error, Result},
    preprocess::Token,
    utils::sort::{nth_largest, ranked_indices},
};

use super::RankingScores;

/// Rounding slack per sentence, a few ulps of `1 - ratio`
const ROUNDING_ULPS: f64 = 4.0 * f64::EPSILON;

/// One extracted sentence
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RankedSentence {
    /// Position in the corpus
    pub index: usize,
    pub score: f64,
    /// Original (uncleaned) words
    pub words: Vec<String>,
}

/// Top-N sentence selection
///
/// `n = max(1, ceil(N * (1 - ratio)))` sentences are retained.
///
/// - `preserve_order = false`: score descending, equal scores by ascending
///   sentence index, exactly `n` results.
/// - `preserve_order = true`: every sentence scoring at least the `n`-th
///   largest score, in corpus order. Ties at the threshold are all kept, so
///   more than `n` sentences can come back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector;

impl Selector {
    /// Number of sentences kept out of `sentence_num`
    ///
    /// `ceil(N * (1 - ratio))`, except that a product exceeding an integer by
    /// no more than `N * 4 * f64::EPSILON` rounds down to that integer: this
    /// absorbs the error of computing `1 - ratio` in floating point.
    ///
    /// # Errors
    /// `InvalidParameter` if `ratio` is NaN or outside `[0, 1]`
    pub fn retained_count(sentence_num: usize, ratio: f64) -> Result<usize> {
        if ratio.is_nan() || !(0.0..=1.0).contains(&ratio) {
            return Err(Error::InvalidParameter(format!("reduction ratio must be in [0, 1], got {ratio}")));
        }
        // 10 * (1 - 0.7) is 3.0000000000000004, must not round up to 4
        let kept = sentence_num as f64 * (1.0 - ratio);
        let n = (kept - sentence_num as f64 * ROUNDING_ULPS).ceil() as usize;
        Ok(n.clamp(1, sentence_num.max(1)))
    }

    /// Select sentences from `original` using `scores`
    ///
    /// # Errors
    /// * `InvalidParameter` - bad ratio
    /// * `InvalidIndex` - score count differs from the sentence count
    pub fn select(
        scores: &RankingScores,
        original: &Token,
        ratio: f64,
        preserve_order: bool,
    ) -> Result<Vec<RankedSentence>> {
        let sentence_num = original.len();
        if scores.len() != sentence_num {
            return Err(Error::InvalidIndex {
                index: scores.len().min(sentence_num),
                len: scores.len().max(sentence_num),
            });
        }
        let n = Self::retained_count(sentence_num, ratio)?;
        let scores = scores.scores();

        let indices: Vec<usize> = if preserve_order {
            let threshold = nth_largest(scores, n).ok_or(Error::InvalidIndex { index: n, len: sentence_num })?;
            (0..sentence_num).filter(|&i| scores[i] >= threshold).collect()
        } else {
            let mut ranked = ranked_indices(scores);
            ranked.truncate(n);
            ranked
        };
        debug!("selected {} of {sentence_num} sentences (target {n})", indices.len());

        indices
            .into_iter()
            .map(|index| {
                Ok(RankedSentence {
                    index,
                    score: scores[index],
                    words: original.sentence(index)?.to_vec(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(n: usize) -> Token {
        let sentences = (0..n).map(|i| vec![format!("s{i}"), ".".to_string()]).collect();
        Token::new(sentences).unwrap()
    }

    fn scores(values: &[f64]) -> RankingScores {
        RankingScores::new(values.to_vec(), 1, 0.0, true)
    }

    fn indices(selected: &[RankedSentence]) -> Vec<usize> {
        selected.iter().map(|s| s.index).collect()
    }

    #[test]
    fn retained_count_rounds_up_and_clamps() {
        assert_eq!(Selector::retained_count(4, 1.0).unwrap(), 1);
        assert_eq!(Selector::retained_count(4, 0.99).unwrap(), 1);
        assert_eq!(Selector::retained_count(4, 0.0).unwrap(), 4);
        assert_eq!(Selector::retained_count(10, 0.7).unwrap(), 3);
        assert_eq!(Selector::retained_count(3, 0.5).unwrap(), 2);
        assert_eq!(Selector::retained_count(100, 0.99).unwrap(), 1);
    }

    #[test]
    fn retained_count_only_absorbs_rounding_error() {
        // 3 * (1 - 0.6666666666) is 1.0000000002, a real excess
        assert_eq!(Selector::retained_count(3, 0.6666666666).unwrap(), 2);
        assert_eq!(Selector::retained_count(1000, 0.9999999).unwrap(), 1);
        assert_eq!(Selector::retained_count(1000, 0.9989999).unwrap(), 2);
    }

    #[test]
    fn retained_count_rejects_bad_ratio() {
        for ratio in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(Selector::retained_count(4, ratio), Err(Error::InvalidParameter(_))));
        }
    }

    #[test]
    fn full_reduction_still_returns_one_sentence() {
        let selected = Selector::select(&scores(&[0.1, 0.4, 0.3, 0.2]), &corpus(4), 1.0, false).unwrap();
        assert_eq!(indices(&selected), vec![1]);
        assert_eq!(selected[0].words, vec!["s1", "."]);
    }

    #[test]
    fn ranked_mode_orders_by_score_then_index() {
        let selected = Selector::select(&scores(&[0.2, 0.3, 0.2, 0.3]), &corpus(4), 0.25, false).unwrap();
        assert_eq!(indices(&selected), vec![1, 3, 0]);
    }

    #[test]
    fn preserve_order_keeps_corpus_order() {
        let selected = Selector::select(&scores(&[0.1, 0.4, 0.2, 0.3]), &corpus(4), 0.5, true).unwrap();
        assert_eq!(indices(&selected), vec![1, 3]);
    }

    #[test]
    fn preserve_order_keeps_threshold_ties() {
        // n = 1 but three sentences share the top score
        let selected = Selector::select(&scores(&[0.3, 0.1, 0.3, 0.3]), &corpus(4), 0.75, true).unwrap();
        assert_eq!(indices(&selected), vec![0, 2, 3]);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = Selector::select(&scores(&[0.5, 0.5]), &corpus(3), 0.5, true).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { .. }));
    }
}
