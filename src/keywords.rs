use std::marker::PhantomData;

use indexmap::IndexMap;
use log::debug;
use num::Float;
use serde::Serialize;

use crate::{
    config::Config,
    error::Result,
    ir::{CumulativeWeight, DefaultTermStatsEngine, TermStatsEngine},
    preprocess::{Cleaner, PreProcessor, TextCleaner, Tokenizer, UnicodeTokenizer},
};

/// Keyword extraction result
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Keywords<N>
where
    N: Float,
{
    /// The top words, heaviest first
    Ranked(Vec<String>),
    /// Every word with its cumulative weight, heaviest first
    Raw(IndexMap<String, N>),
}

impl<N> Keywords<N>
where
    N: Float,
{
    /// Words in rank order, for either variant
    pub fn words(&self) -> Vec<&str> {
        match self {
            Keywords::Ranked(words) => words.iter().map(String::as_str).collect(),
            Keywords::Raw(map) => map.keys().map(String::as_str).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Keywords::Ranked(words) => words.len(),
            Keywords::Raw(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keyword extractor
///
/// Words are ranked by cumulative TF-IDF weight over all sentences. The
/// cleaner normally keeps surface forms (no stemming) so keywords stay
/// readable.
///
/// `N` is the weight type and `E` the term statistics engine.
#[derive(Debug, Clone)]
pub struct KeywordExtractor<T = UnicodeTokenizer, C = TextCleaner, N = f64, E = DefaultTermStatsEngine>
where
    T: Tokenizer,
    C: Cleaner,
    N: Float,
    E: TermStatsEngine<N>,
{
    preprocessor: PreProcessor<T, C>,
    _marker: PhantomData<(N, E)>,
}

impl KeywordExtractor {
    /// Default stack configured from `config`
    /// `keywords.skip_stemming` decides stemming, not `cleaner.skip_stemming`.
    pub fn from_config(config: &Config) -> Self {
        let cleaner = TextCleaner::new(config.cleaner.clone()).skip_stemming(config.keywords.skip_stemming);
        Self::new(PreProcessor::new(UnicodeTokenizer::new(), cleaner))
    }
}

impl<T, C, N, E> KeywordExtractor<T, C, N, E>
where
    T: Tokenizer,
    C: Cleaner,
    N: Float,
    E: TermStatsEngine<N>,
{
    pub fn new(preprocessor: PreProcessor<T, C>) -> Self {
        Self { preprocessor, _marker: PhantomData }
    }

    /// Cumulative weight of every word in `corpus`
    ///
    /// # Errors
    /// `DegenerateCorpus` if no word survives cleaning
    pub fn cumulative_weight(&self, corpus: &str) -> Result<CumulativeWeight<N>> {
        let pre = self.preprocessor.preprocess(corpus)?;
        let tf = E::tf(&pre.cleaned);
        let idf = E::idf(&pre.cleaned)?;
        debug!("keyword vocabulary of {} words over {} sentences", idf.len(), idf.doc_num());
        E::cumulative_weight(&tf, &idf)
    }

    /// Extract keywords
    ///
    /// # Arguments
    /// * `count` - number of words for the ranked list, ignored when `raw`
    /// * `raw` - return every word with its weight instead
    ///
    /// # Errors
    /// `DegenerateCorpus` if no word survives cleaning
    pub fn extract_keywords(&self, corpus: &str, count: usize, raw: bool) -> Result<Keywords<N>> {
        let ordered = self.cumulative_weight(corpus)?.ordered();
        if raw {
            Ok(Keywords::Raw(ordered.into_iter().collect()))
        } else {
            Ok(Keywords::Ranked(ordered.into_iter().take(count).map(|(word, _)| word).collect()))
        }
    }
}
