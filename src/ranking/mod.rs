pub mod selector;
pub mod textrank;

use serde::Serialize;

use crate::{error::{Error, Result}, similarity::SimilarityMatrix};

pub use selector::{RankedSentence, Selector};
pub use textrank::TextRank;

/// Sentence graph ranker
/// Turns a similarity matrix into one importance score per sentence.
pub trait Ranker {
    /// # Errors
    /// * `DegenerateCorpus` - the matrix has no sentences
    fn rank(&self, matrix: &SimilarityMatrix) -> Result<RankingScores>;
}

/// Ranking result
/// Scores are non-negative and sum to 1.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RankingScores {
    scores: Vec<f64>,
    iterations: usize,
    delta: f64,
    converged: bool,
}

impl RankingScores {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self { scores, iterations, delta, converged }
    }

    #[inline]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Score of sentence `idx`
    ///
    /// # Errors
    /// `InvalidIndex` when `idx` is out of range
    #[inline]
    pub fn score(&self, idx: usize) -> Result<f64> {
        self.scores
            .get(idx)
            .copied()
            .ok_or(Error::InvalidIndex { index: idx, len: self.scores.len() })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterations actually run
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// L1 change of the last iteration
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[inline]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Strict mode: reject a run that hit the iteration cap
    ///
    /// # Errors
    /// `ConvergenceExceeded` when the ranker stopped before reaching its tolerance
    pub fn ensure_converged(&self) -> Result<&Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(Error::ConvergenceExceeded { iterations: self.iterations, delta: self.delta })
        }
    }

    pub fn into_scores(self) -> Vec<f64> {
        self.scores
    }
}
