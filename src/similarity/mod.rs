pub mod bm25;

use serde::Serialize;

use crate::{error::{Error, Result}, ir::InverseDocumentFrequency, preprocess::Token};

pub use bm25::Bm25Plus;

/// Sentence-to-sentence similarity
/// Implementations fill an `N×N` matrix with non-negative scores and a zero
/// diagonal. The matrix need not be symmetric.
pub trait SimilarityAlgorithm {
    /// # Arguments
    /// * `tokens` - cleaned corpus
    /// * `idf` - IDF table computed over the same corpus
    ///
    /// # Errors
    /// * `DegenerateCorpus` - nothing to compare
    fn similarity_matrix(&self, tokens: &Token, idf: &InverseDocumentFrequency<f64>) -> Result<SimilarityMatrix>;
}

/// Dense row-major `N×N` similarity matrix
/// `get(i, j)` is how well sentence `i` explains sentence `j`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// All-zero matrix of size `n`
    pub fn zeros(n: usize) -> Self {
        Self { n, data: vec![0.0; n * n] }
    }

    /// Build from rows
    ///
    /// # Errors
    /// `InvalidParameter` if the rows do not form a square matrix
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidParameter(format!(
                    "row {i} has {} columns, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self { n, data })
    }

    /// # Errors
    /// `InvalidIndex` when either index is out of range
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Result<f64> {
        self.check(i)?;
        self.check(j)?;
        Ok(self.data[i * self.n + j])
    }

    /// Outgoing edge weights of node `i`
    #[inline]
    pub fn row(&self, i: usize) -> Result<&[f64]> {
        self.check(i)?;
        Ok(&self.data[i * self.n..(i + 1) * self.n])
    }

    /// Number of sentences
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// True when no pair of sentences shares any weight
    pub fn is_all_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics
        self.data.chunks(self.n.max(1))
    }

    #[inline]
    fn check(&self, idx: usize) -> Result<()> {
        if idx < self.n {
            Ok(())
        } else {
            Err(Error::InvalidIndex { index: idx, len: self.n })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_requires_square() {
        assert!(SimilarityMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0]]).is_err());
        let m = SimilarityMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.get(0, 1).unwrap(), 1.0);
        assert_eq!(m.get(1, 0).unwrap(), 2.0);
        assert_eq!(m.row(1).unwrap(), &[2.0, 0.0]);
        assert!(!m.is_all_zero());
    }

    #[test]
    fn out_of_range_lookup() {
        let m = SimilarityMatrix::zeros(3);
        assert!(m.is_all_zero());
        assert!(matches!(m.get(3, 0), Err(Error::InvalidIndex { index: 3, len: 3 })));
        assert!(m.row(5).is_err());
        assert_eq!(m.rows().count(), 3);
        assert_eq!(SimilarityMatrix::zeros(0).rows().count(), 0);
    }
}
