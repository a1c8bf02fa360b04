//! Weighted PageRank over the sentence similarity graph
//!
//! Power iteration with dangling-node handling. Each iteration is a pull
//! update: node `j` sums what its in-neighbours send it, so nodes update in
//! parallel without shared writes.

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{error::{Error, Result}, similarity::SimilarityMatrix};

use super::{Ranker, RankingScores};

/// TextRank ranker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub tolerance: f64,
}

impl Default for TextRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl TextRank {
    /// Create a new TextRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// A zero tolerance is allowed and runs until the iteration cap.
    ///
    /// # Errors
    /// `InvalidParameter` unless `damping` is in `[0, 1)` and `tolerance >= 0`
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.damping) {
            return Err(Error::InvalidParameter(format!("damping must be in [0, 1), got {}", self.damping)));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(Error::InvalidParameter(format!("tolerance must be >= 0, got {}", self.tolerance)));
        }
        Ok(())
    }
}

impl Ranker for TextRank {
    /// Returns the result even if convergence wasn't achieved, with `converged = false`.
    fn rank(&self, matrix: &SimilarityMatrix) -> Result<RankingScores> {
        self.validate()?;
        let n = matrix.len();
        if n == 0 {
            return Err(Error::DegenerateCorpus("cannot rank an empty sentence graph".into()));
        }
        let uniform = 1.0 / n as f64;
        if matrix.is_all_zero() {
            debug!("similarity graph has no edges, using uniform scores");
            return Ok(RankingScores::new(vec![uniform; n], 0, 0.0, true));
        }

        let out_weight: Vec<f64> = matrix.rows().map(|row| row.iter().sum()).collect();
        let dangling: Vec<usize> = (0..n).filter(|&i| out_weight[i] <= 0.0).collect();
        let teleport = (1.0 - self.damping) / n as f64;

        let mut scores = vec![uniform; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.tolerance {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d]).sum();
            let base = teleport + self.damping * dangling_mass / n as f64;

            let new_scores: Vec<f64> = (0..n)
                .into_par_iter()
                .map(|j| {
                    let incoming: f64 = matrix
                        .rows()
                        .enumerate()
                        .filter(|&(i, row)| row[j] > 0.0 && out_weight[i] > 0.0)
                        .map(|(i, row)| scores[i] * row[j] / out_weight[i])
                        .sum();
                    base + self.damping * incoming
                })
                .collect();

            // L1 norm
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();
            scores = new_scores;
        }

        // should already sum to ~1
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        let converged = delta <= self.tolerance;
        if converged {
            debug!("textrank converged after {iterations} iterations (delta {delta:e})");
        } else {
            warn!(
                "textrank stopped at the {} iteration cap before converging (delta {delta:e} > tolerance {:e})",
                self.max_iterations, self.tolerance
            );
        }
        Ok(RankingScores::new(scores, iterations, delta, converged))
    }
}
