use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Token container
/// An ordered sequence of sentences, each an ordered sequence of words.
///
/// Sentence count and sentence index are stable across cleaning: a cleaned
/// `Token` always holds exactly one (possibly shorter, possibly empty)
/// sentence per original sentence, at the same index.
///
/// # Examples
/// ```
/// use textrank_summarizer::Token;
/// let token = Token::from_words(&[&["cat", "dog"], &["dog", "dog", "bird"]]).unwrap();
///
/// assert_eq!(token.len(), 2);
/// assert_eq!(token.sentence(1).unwrap(), &["dog", "dog", "bird"]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Token {
    sentences: Vec<Vec<String>>,
}

/// Construction
impl Token {
    /// Create a new Token
    ///
    /// # Arguments
    /// * `sentences` - sentences in corpus order
    ///
    /// # Errors
    /// `DegenerateCorpus` if there is no sentence at all
    pub fn new(sentences: Vec<Vec<String>>) -> Result<Self> {
        if sentences.is_empty() {
            return Err(Error::DegenerateCorpus("a token container needs at least one sentence".into()));
        }
        Ok(Self { sentences })
    }

    /// Create a Token from borrowed words
    pub fn from_words<S>(sentences: &[&[S]]) -> Result<Self>
    where
        S: AsRef<str>,
    {
        Self::new(
            sentences
                .iter()
                .map(|sen| sen.iter().map(|w| w.as_ref().to_string()).collect())
                .collect(),
        )
    }

    /// A Token holding a single empty sentence
    /// What tokenizers return for empty input
    pub fn empty() -> Self {
        Self { sentences: vec![Vec::new()] }
    }

    /// Transform every word, keeping one output sentence per input sentence
    ///
    /// # Arguments
    /// * `f` - returns `None` to drop the word
    ///
    /// # Returns
    /// * `Token` - aligned with `self` index by index
    pub fn map_words<F>(&self, mut f: F) -> Token
    where
        F: FnMut(&str) -> Option<String>,
    {
        Token {
            sentences: self
                .sentences
                .iter()
                .map(|sen| sen.iter().filter_map(|w| f(w)).collect())
                .collect(),
        }
    }
}

/// Accessors
impl Token {
    #[inline]
    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    /// Get a sentence by index
    ///
    /// # Errors
    /// `InvalidIndex` when `idx >= self.len()`
    #[inline]
    pub fn sentence(&self, idx: usize) -> Result<&[String]> {
        self.sentences
            .get(idx)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidIndex { index: idx, len: self.sentences.len() })
    }

    /// Number of sentences
    #[inline]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Always false for a constructed Token; kept for API symmetry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of words across all sentences
    #[inline]
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    /// Mean sentence length in words
    #[inline]
    pub fn average_sentence_len(&self) -> f64 {
        self.word_count() as f64 / self.sentences.len() as f64
    }

    /// True when every sentence is empty
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.sentences.iter().all(Vec::is_empty)
    }

    pub fn into_sentences(self) -> Vec<Vec<String>> {
        self.sentences
    }
}
