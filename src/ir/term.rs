use indexmap::IndexMap;
use num::Float;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::utils::sort::sort_by_weight_desc;

/// TF table
/// One entry per sentence (document id = sentence index), each mapping a
/// word to `occurrences / sentence length`. Empty sentences hold an empty map.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TermFrequencyTable<N>
where
    N: Float,
{
    docs: Vec<IndexMap<String, N>>,
}

impl<N> TermFrequencyTable<N>
where
    N: Float,
{
    pub(crate) fn from_docs(docs: Vec<IndexMap<String, N>>) -> Self {
        Self { docs }
    }

    /// Get the TF map of one document
    ///
    /// # Errors
    /// `InvalidIndex` when `doc` is out of range
    #[inline]
    pub fn doc(&self, doc: usize) -> Result<&IndexMap<String, N>> {
        self.docs
            .get(doc)
            .ok_or(Error::InvalidIndex { index: doc, len: self.docs.len() })
    }

    /// TF of `word` in `doc`, `None` if the word does not occur there
    #[inline]
    pub fn get(&self, doc: usize, word: &str) -> Option<N> {
        self.docs.get(doc).and_then(|m| m.get(word).copied())
    }

    /// Number of documents
    #[inline]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// (document id, TF map) in document order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &IndexMap<String, N>)> {
        self.docs.iter().enumerate()
    }
}

/// IDF table
/// `idf(w) = 1 + ln(N / df(w))`, in first-encounter order of the words.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InverseDocumentFrequency<N>
where
    N: Float,
{
    idf: IndexMap<String, N>,
    doc_num: usize,
}

impl<N> InverseDocumentFrequency<N>
where
    N: Float,
{
    pub(crate) fn from_map(idf: IndexMap<String, N>, doc_num: usize) -> Self {
        Self { idf, doc_num }
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<N> {
        self.idf.get(word).copied()
    }

    /// Get the IDF of a word that must be in the vocabulary
    ///
    /// # Errors
    /// `MissingIdf` if the word was never seen
    #[inline]
    pub fn require(&self, word: &str) -> Result<N> {
        self.get(word).ok_or_else(|| Error::MissingIdf(word.to_string()))
    }

    /// Vocabulary size
    #[inline]
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// Number of documents the table was computed over
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.doc_num
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> {
        self.idf.iter().map(|(w, &v)| (w.as_str(), v))
    }
}

/// Weight table: `weight[doc][word] = tf[doc][word] * idf[word]`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeightTable<N>
where
    N: Float,
{
    docs: Vec<IndexMap<String, N>>,
}

impl<N> WeightTable<N>
where
    N: Float,
{
    pub(crate) fn from_docs(docs: Vec<IndexMap<String, N>>) -> Self {
        Self { docs }
    }

    #[inline]
    pub fn get(&self, doc: usize, word: &str) -> Option<N> {
        self.docs.get(doc).and_then(|m| m.get(word).copied())
    }

    #[inline]
    pub fn doc(&self, doc: usize) -> Result<&IndexMap<String, N>> {
        self.docs
            .get(doc)
            .ok_or(Error::InvalidIndex { index: doc, len: self.docs.len() })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Cumulative word weight: `Σ_doc weight[doc][word]`
/// Kept in first-encounter order; `ordered()` gives the keyword ranking.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CumulativeWeight<N>
where
    N: Float,
{
    weights: IndexMap<String, N>,
}

impl<N> CumulativeWeight<N>
where
    N: Float,
{
    pub(crate) fn from_map(weights: IndexMap<String, N>) -> Self {
        Self { weights }
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<N> {
        self.weights.get(word).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Unordered view (first-encounter order)
    pub fn as_map(&self) -> &IndexMap<String, N> {
        &self.weights
    }

    pub fn into_map(self) -> IndexMap<String, N> {
        self.weights
    }

    /// (word, weight) sorted by weight descending
    /// Ties keep first-encounter order.
    pub fn ordered(&self) -> Vec<(String, N)> {
        let mut list: Vec<(String, N)> = self
            .weights
            .iter()
            .map(|(w, &v)| (w.clone(), v))
            .collect();
        sort_by_weight_desc(&mut list);
        list
    }
}
