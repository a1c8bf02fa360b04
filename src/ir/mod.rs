pub mod term;

use indexmap::{IndexMap, IndexSet};
use num::Float;

use crate::{error::{Error, Result}, preprocess::Token, utils::cast};

pub use term::{CumulativeWeight, InverseDocumentFrequency, TermFrequencyTable, WeightTable};

/// Term statistics engine
/// Computes TF, IDF and word weights over a tokenized corpus where every
/// sentence is a document.
///
/// By implementing this trait, alternative weighting schemes can be plugged
/// into `KeywordExtractor` and `Summarizer` without touching the pipeline.
pub trait TermStatsEngine<N>
where
    N: Float,
{
    /// TF table
    /// # Arguments
    /// * `tokens` - tokenized corpus
    /// # Returns
    /// * `TermFrequencyTable<N>` - one map per sentence, empty for empty sentences
    fn tf(tokens: &Token) -> TermFrequencyTable<N>;

    /// IDF table
    /// # Errors
    /// * `DegenerateCorpus` - no words in the whole corpus
    fn idf(tokens: &Token) -> Result<InverseDocumentFrequency<N>>;

    /// Per-document weight `tf * idf`
    /// # Errors
    /// * `MissingIdf` - a TF word is absent from the IDF table
    fn weight(tf: &TermFrequencyTable<N>, idf: &InverseDocumentFrequency<N>) -> Result<WeightTable<N>> {
        let mut docs = Vec::with_capacity(tf.len());
        for (_, doc) in tf.iter() {
            let mut weights = IndexMap::with_capacity(doc.len());
            for (word, &tf_val) in doc {
                weights.insert(word.clone(), tf_val * idf.require(word)?);
            }
            docs.push(weights);
        }
        Ok(WeightTable::from_docs(docs))
    }

    /// Weight of each word summed over all documents
    /// # Errors
    /// * `MissingIdf` - a TF word is absent from the IDF table
    fn cumulative_weight(tf: &TermFrequencyTable<N>, idf: &InverseDocumentFrequency<N>) -> Result<CumulativeWeight<N>> {
        let mut weights: IndexMap<String, N> = IndexMap::new();
        for (_, doc) in tf.iter() {
            for (word, &tf_val) in doc {
                let w = tf_val * idf.require(word)?;
                let entry = weights.entry(word.clone()).or_insert_with(N::zero);
                *entry = *entry + w;
            }
        }
        Ok(CumulativeWeight::from_map(weights))
    }
}

/// Default term statistics engine
/// Textbook TF (`count / sentence length`) and smoothed-floor IDF
/// (`1 + ln(N / df)`), for any float type.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTermStatsEngine;

impl DefaultTermStatsEngine {
    pub fn new() -> Self {
        DefaultTermStatsEngine
    }
}

impl<N> TermStatsEngine<N> for DefaultTermStatsEngine
where
    N: Float,
{
    fn tf(tokens: &Token) -> TermFrequencyTable<N> {
        let docs: Vec<IndexMap<String, N>> = tokens
            .sentences()
            .iter()
            .map(|sentence| {
                let mut counts: IndexMap<&str, usize> = IndexMap::new();
                for word in sentence {
                    *counts.entry(word.as_str()).or_insert(0) += 1;
                }
                let len = sentence.len() as f64;
                counts
                    .into_iter()
                    .map(|(word, count)| (word.to_string(), cast::<N>(count as f64 / len)))
                    .collect::<IndexMap<String, N>>()
            })
            .collect();
        TermFrequencyTable::from_docs(docs)
    }

    fn idf(tokens: &Token) -> Result<InverseDocumentFrequency<N>> {
        let doc_num = tokens.len();
        if doc_num == 0 || tokens.is_blank() {
            return Err(Error::DegenerateCorpus("no words to compute idf over".into()));
        }
        // document frequency: containment, counted once per sentence
        let mut doc_freq: IndexMap<&str, usize> = IndexMap::new();
        for sentence in tokens.sentences() {
            let mut seen: IndexSet<&str> = IndexSet::with_capacity(sentence.len());
            for word in sentence {
                if seen.insert(word.as_str()) {
                    *doc_freq.entry(word.as_str()).or_insert(0) += 1;
                }
            }
        }
        let idf: IndexMap<String, N> = doc_freq
            .into_iter()
            .map(|(word, df)| (word.to_string(), cast::<N>(1.0 + (doc_num as f64 / df as f64).ln())))
            .collect();
        Ok(InverseDocumentFrequency::from_map(idf, doc_num))
    }
}
