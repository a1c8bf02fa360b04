use std::marker::PhantomData;

use log::{debug, warn};
use serde::Serialize;

use crate::{
    config::Config,
    error::Result,
    ir::{DefaultTermStatsEngine, InverseDocumentFrequency, TermStatsEngine},
    preprocess::{Cleaner, PreProcessor, TextCleaner, Tokenizer, UnicodeTokenizer},
    ranking::{RankedSentence, Ranker, Selector, TextRank},
    similarity::{Bm25Plus, SimilarityAlgorithm},
    utils::text::join_sentences,
};

/// Extractive summary
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Summary {
    /// Selected sentences, in corpus order or by score depending on the request
    pub sentences: Vec<RankedSentence>,
    /// `false` when the ranker stopped at its iteration cap
    pub converged: bool,
    pub iterations: usize,
}

impl Summary {
    /// One reconstructed sentence per line
    pub fn to_text(&self) -> String {
        join_sentences::<_, String>(self.sentences.iter().map(|s| &s.words))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Corpus indices of the selected sentences
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }
}

/// Extractive summarizer
///
/// Pipeline: tokenize, clean, IDF over the cleaned sentences, sentence
/// similarity matrix, graph ranking, then top-N selection over the
/// **original** sentences so the summary reads like the input.
///
/// Every stage is a type parameter so tokenizer, cleaner, similarity,
/// ranker and the term statistics engine `E` can be swapped independently.
#[derive(Debug, Clone, Default)]
pub struct Summarizer<T = UnicodeTokenizer, C = TextCleaner, S = Bm25Plus, R = TextRank, E = DefaultTermStatsEngine>
where
    T: Tokenizer,
    C: Cleaner,
    S: SimilarityAlgorithm,
    R: Ranker,
    E: TermStatsEngine<f64>,
{
    preprocessor: PreProcessor<T, C>,
    similarity: S,
    ranker: R,
    _marker: PhantomData<E>,
}

impl Summarizer {
    /// Default stack configured from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            PreProcessor::new(UnicodeTokenizer::new(), TextCleaner::new(config.cleaner.clone())),
            config.similarity,
            config.ranking,
        )
    }
}

impl<T, C, S, R> Summarizer<T, C, S, R>
where
    T: Tokenizer,
    C: Cleaner,
    S: SimilarityAlgorithm,
    R: Ranker,
{
    /// Summarizer using `DefaultTermStatsEngine`, see `with_engine`
    pub fn new(preprocessor: PreProcessor<T, C>, similarity: S, ranker: R) -> Self {
        Self { preprocessor, similarity, ranker, _marker: PhantomData }
    }
}

impl<T, C, S, R, E> Summarizer<T, C, S, R, E>
where
    T: Tokenizer,
    C: Cleaner,
    S: SimilarityAlgorithm,
    R: Ranker,
    E: TermStatsEngine<f64>,
{
    /// Same stages, IDF computed by `E2`
    pub fn with_engine<E2>(self) -> Summarizer<T, C, S, R, E2>
    where
        E2: TermStatsEngine<f64>,
    {
        Summarizer {
            preprocessor: self.preprocessor,
            similarity: self.similarity,
            ranker: self.ranker,
            _marker: PhantomData,
        }
    }

    /// Summarise `corpus`
    ///
    /// # Arguments
    /// * `reduction_ratio` - fraction of sentences to drop, in `[0, 1]`
    /// * `preserve_order` - return sentences in corpus order (threshold ties included)
    ///
    /// # Errors
    /// * `DegenerateCorpus` - nothing left to score after cleaning
    /// * `InvalidParameter` - bad ratio
    pub fn summarise(&self, corpus: &str, reduction_ratio: f64, preserve_order: bool) -> Result<Summary> {
        let pre = self.preprocessor.preprocess(corpus)?;

        let blank = pre.cleaned.sentences().iter().filter(|s| s.is_empty()).count();
        if blank > 0 && !pre.cleaned.is_blank() {
            warn!("{blank} of {} sentences are empty after cleaning and can only rank by teleport", pre.cleaned.len());
        }

        let idf: InverseDocumentFrequency<f64> = E::idf(&pre.cleaned)?;
        debug!("vocabulary of {} words over {} sentences", idf.len(), idf.doc_num());

        let matrix = self.similarity.similarity_matrix(&pre.cleaned, &idf)?;
        let scores = self.ranker.rank(&matrix)?;
        let sentences = Selector::select(&scores, &pre.original, reduction_ratio, preserve_order)?;

        Ok(Summary {
            sentences,
            converged: scores.converged(),
            iterations: scores.iterations(),
        })
    }
}
