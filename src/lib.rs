/// This crate is an extractive text summarizer and keyword extractor built on
/// TF-IDF term statistics, BM25+ sentence similarity and TextRank.
pub mod config;
pub mod error;
pub mod ir;
pub mod keywords;
pub mod preprocess;
pub mod ranking;
pub mod similarity;
pub mod summarizer;
pub mod utils;

/// Summarizer
/// The top-level struct for summarisation.
/// It tokenizes and cleans a corpus, scores every pair of sentences with a
/// similarity algorithm, ranks sentences on the resulting graph, and returns
/// the highest ranked **original** sentences.
///
/// `Summarizer<T, C, S, R>` has the following generic parameters:
/// - `T`: Tokenizer (e.g., UnicodeTokenizer)
/// - `C`: Cleaner (e.g., TextCleaner)
/// - `S`: Similarity algorithm (e.g., Bm25Plus)
/// - `R`: Ranker (e.g., TextRank)
///
/// Configuration is passed at construction; `Summarizer::from_config` builds
/// the default stack.
///
/// # Examples
/// ```
/// use textrank_summarizer::{Config, Summarizer};
///
/// let summarizer = Summarizer::from_config(&Config::default());
/// let summary = summarizer
///     .summarise("Rust is fast. Rust is safe. Bread is tasty.", 0.5, true)
///     .unwrap();
/// assert!(summary.len() >= 2);
/// ```
pub use summarizer::{Summarizer, Summary};

/// Keyword Extractor
/// Ranks words by their TF-IDF weight summed over every sentence.
///
/// `KeywordExtractor<T, C, N, E>` has the following generic parameters:
/// - `T`: Tokenizer
/// - `C`: Cleaner (stemming is usually skipped to keep surface forms)
/// - `N`: Weight type (e.g., f32, f64)
/// - `E`: Term statistics engine (e.g., DefaultTermStatsEngine)
pub use keywords::{KeywordExtractor, Keywords};

/// Configuration
/// Loaded from TOML or built from defaults, validated before use.
pub use config::Config;

/// Error and Result
pub use error::{Error, Result};

/// Token container
/// Sentences of words. Cleaning never changes the sentence count or order,
/// so indices of cleaned and original sentences always match.
pub use preprocess::Token;

/// Preprocessing collaborators
/// - `Tokenizer`: raw text to `Token`
/// - `Cleaner`: `Token` to cleaned `Token`, one sentence out per sentence in
///
/// `UnicodeTokenizer` and `TextCleaner` are the provided implementations.
pub use preprocess::{Cleaner, CleanerConfig, Language, PreProcessor, TextCleaner, Tokenizer, UnicodeTokenizer};

/// Term Statistics Engine Trait
/// Defines how TF, IDF and weights are computed.
///
/// By implementing this trait, you can plug different weighting strategies
/// into `KeywordExtractor<E>`.
/// A default implementation, `DefaultTermStatsEngine`, performs textbook
/// TF (`count / length`) and IDF (`1 + ln(N / df)`) for any float type.
pub use ir::{DefaultTermStatsEngine, TermStatsEngine};

/// Similarity Algorithm
/// Builds the `SimilarityMatrix` between sentences.
/// - Bm25Plus: asymmetric BM25+ relevance of sentence `j` as a query against sentence `i`
pub use similarity::{Bm25Plus, SimilarityAlgorithm, SimilarityMatrix};

/// Ranking
/// - `Ranker` / `TextRank`: importance score per sentence from the similarity graph
/// - `Selector`: top-N extraction by reduction ratio
pub use ranking::{RankedSentence, Ranker, RankingScores, Selector, TextRank};
