use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{error::{Error, Result}, ir::InverseDocumentFrequency, preprocess::Token};

use super::{SimilarityAlgorithm, SimilarityMatrix};

/// BM25+ sentence similarity
/// Sentence `i` is the document, sentence `j` the query:
///
/// `score(i,j) = Σ_{w in j} idf(w) * f * (k1+1) / (f + k1 * (1 - b + b * |i| / avg_len))`
///
/// with `f` the count of `w` in sentence `i`. Repeated query words each
/// contribute; words absent from `i` contribute nothing.
///
/// param k1: Controls term frequency saturation
/// param b: Controls document length normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Plus {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Plus {
    fn default() -> Self {
        Self { k1: 1.2, b: 0.75 }
    }
}

impl Bm25Plus {
    pub fn new(k1: f64, b: f64) -> Self {
        Self { k1, b }
    }

    pub fn with_k1(mut self, k1: f64) -> Self {
        self.k1 = k1;
        self
    }

    pub fn with_b(mut self, b: f64) -> Self {
        self.b = b;
        self
    }

    /// # Errors
    /// `InvalidParameter` unless `k1 >= 0` and `b` is in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.k1.is_nan() || self.k1 < 0.0 {
            return Err(Error::InvalidParameter(format!("bm25 k1 must be >= 0, got {}", self.k1)));
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(Error::InvalidParameter(format!("bm25 b must be in [0, 1], got {}", self.b)));
        }
        Ok(())
    }

    /// Score one (document, query) pair
    ///
    /// # Arguments
    /// * `doc_counts` - word counts of the document sentence
    /// * `doc_len` - document sentence length
    /// * `query` - query sentence words
    /// * `rev_avg_l` - `1 / avg_len`
    #[inline]
    fn score(
        &self,
        doc_counts: &FxHashMap<&str, usize>,
        doc_len: usize,
        query: &[String],
        rev_avg_l: f64,
        idf: &InverseDocumentFrequency<f64>,
    ) -> Result<f64> {
        let k1_p = self.k1 + 1.0;
        let len_p = doc_len as f64 * rev_avg_l;
        let norm = self.k1 * (1.0 - self.b + self.b * len_p);
        let mut score = 0.0;
        for word in query {
            let f = doc_counts.get(word.as_str()).copied().unwrap_or(0) as f64;
            if f == 0.0 {
                continue;
            }
            score += idf.require(word)? * ((f * k1_p) / (f + norm));
        }
        Ok(score)
    }
}

impl SimilarityAlgorithm for Bm25Plus {
    fn similarity_matrix(&self, tokens: &Token, idf: &InverseDocumentFrequency<f64>) -> Result<SimilarityMatrix> {
        self.validate()?;
        let sentences = tokens.sentences();
        let n = sentences.len();
        let avg_l = tokens.average_sentence_len();
        if n == 0 || avg_l == 0.0 {
            return Err(Error::DegenerateCorpus("every sentence is empty, average length is 0".into()));
        }
        let rev_avg_l = 1.0 / avg_l;
        debug!("bm25+ similarity over {n} sentences (avg len {avg_l:.2}, k1 {}, b {})", self.k1, self.b);

        let counts: Vec<FxHashMap<&str, usize>> = sentences
            .par_iter()
            .map(|sentence| {
                let mut counts = FxHashMap::default();
                for word in sentence {
                    *counts.entry(word.as_str()).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        // rows are independent: row i only reads shared immutable input
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| -> Result<Vec<f64>> {
                let mut row = vec![0.0; n];
                for (j, query) in sentences.iter().enumerate() {
                    if i != j {
                        row[j] = self.score(&counts[i], sentences[i].len(), query, rev_avg_l, idf)?;
                    }
                }
                Ok(row)
            })
            .collect::<Result<Vec<_>>>()?;

        SimilarityMatrix::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{DefaultTermStatsEngine, TermStatsEngine};

    fn matrix_for(token: &Token) -> Result<SimilarityMatrix> {
        let idf: InverseDocumentFrequency<f64> = DefaultTermStatsEngine::idf(token)?;
        Bm25Plus::default().similarity_matrix(token, &idf)
    }

    #[test]
    fn two_sentence_scores() {
        let token = Token::from_words(&[&["cat", "dog"], &["dog", "dog", "bird"]]).unwrap();
        let m = matrix_for(&token).unwrap();

        // query "dog dog bird" against "cat dog": 2 * 2.2 / (1 + 1.2 * 0.85)
        assert!((m.get(0, 1).unwrap() - 2.178).abs() < 1e-3);
        // query "cat dog" against "dog dog bird": 2 * 2.2 / (2 + 1.2 * 1.15)
        assert!((m.get(1, 0).unwrap() - 1.3018).abs() < 1e-3);
        assert_eq!(m.get(0, 0).unwrap(), 0.0);
        assert_eq!(m.get(1, 1).unwrap(), 0.0);
    }

    #[test]
    fn disjoint_vocabulary_is_all_zero() {
        let token = Token::from_words(&[&["a", "b"], &["c"], &["d", "e", "f"]]).unwrap();
        assert!(matrix_for(&token).unwrap().is_all_zero());
    }

    #[test]
    fn empty_sentences_are_allowed_when_some_words_exist() {
        let token = Token::from_words(&[&["rain", "today"], &[], &["rain"]]).unwrap();
        let m = matrix_for(&token).unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.get(1, 0).unwrap(), 0.0);
        assert_eq!(m.get(0, 1).unwrap(), 0.0);
        assert!(m.get(0, 2).unwrap() > 0.0);
    }

    #[test]
    fn all_empty_corpus_is_degenerate() {
        let token = Token::from_words::<&str>(&[&[], &[]]).unwrap();
        let idf = InverseDocumentFrequency::from_map(Default::default(), 2);
        let err = Bm25Plus::default().similarity_matrix(&token, &idf).unwrap_err();
        assert!(matches!(err, Error::DegenerateCorpus(_)));
    }

    #[test]
    fn b_zero_disables_length_normalization() {
        let token = Token::from_words(&[&["x"], &["x", "y", "z", "w"]]).unwrap();
        let idf: InverseDocumentFrequency<f64> = DefaultTermStatsEngine::idf(&token).unwrap();
        let m = Bm25Plus::default().with_b(0.0).similarity_matrix(&token, &idf).unwrap();
        // f = 1 in both directions, idf(x) = 1
        let expected = 2.2 / (1.0 + 1.2);
        assert!((m.get(0, 1).unwrap() - expected).abs() < 1e-12);
        assert!((m.get(1, 0).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_parameters_are_rejected() {
        let token = Token::from_words(&[&["x"], &["x", "y"]]).unwrap();
        let idf: InverseDocumentFrequency<f64> = DefaultTermStatsEngine::idf(&token).unwrap();
        for bm25 in [Bm25Plus::new(-0.5, 0.75), Bm25Plus::default().with_b(1.5), Bm25Plus::new(f64::NAN, 0.5)] {
            let err = bm25.similarity_matrix(&token, &idf).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter(_)), "accepted {bm25:?}");
        }
        assert!(Bm25Plus::new(0.0, 1.0).similarity_matrix(&token, &idf).is_ok());
    }
}
