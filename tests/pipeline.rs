use std::io::Write;

use textrank_summarizer::{
    ir::{InverseDocumentFrequency, TermFrequencyTable},
    utils::text::load_corpus,
    Bm25Plus, CleanerConfig, Config, DefaultTermStatsEngine, Error, KeywordExtractor, Keywords, Language, PreProcessor,
    Ranker, Selector, SimilarityAlgorithm, SimilarityMatrix, Summarizer, TermStatsEngine, TextCleaner, TextRank, Token,
    UnicodeTokenizer,
};

const NEWS: &str = "The city council approved the new park budget on Monday. \
    Residents welcomed the park budget after months of debate. \
    A local bakery won a national bread award. \
    The council said construction of the park starts in spring. \
    Park construction will create new jobs for residents.";

fn two_sentences() -> Token {
    Token::from_words(&[&["cat", "dog"], &["dog", "dog", "bird"]]).unwrap()
}

#[test]
fn term_statistics_scenario() {
    let token = two_sentences();
    let tf: TermFrequencyTable<f64> = DefaultTermStatsEngine::tf(&token);
    let idf: InverseDocumentFrequency<f64> = DefaultTermStatsEngine::idf(&token).unwrap();
    assert!((idf.get("cat").unwrap() - 1.6931).abs() < 1e-4);
    assert!((idf.get("bird").unwrap() - 1.6931).abs() < 1e-4);
    assert_eq!(idf.get("dog"), Some(1.0));

    let words: Vec<String> = DefaultTermStatsEngine::cumulative_weight(&tf, &idf)
        .unwrap()
        .ordered()
        .into_iter()
        .map(|(w, _)| w)
        .collect();
    assert_eq!(words, vec!["dog", "cat", "bird"]);
}

#[test]
fn similarity_scenario() {
    let token = two_sentences();
    let idf: InverseDocumentFrequency<f64> = DefaultTermStatsEngine::idf(&token).unwrap();
    let matrix = Bm25Plus::new(1.2, 0.75).similarity_matrix(&token, &idf).unwrap();
    assert!((matrix.get(0, 1).unwrap() - 2.178).abs() < 1e-3);
    assert!((matrix.get(1, 0).unwrap() - 1.302).abs() < 1e-3);
    assert_eq!(matrix.get(0, 0).unwrap(), 0.0);
    assert_eq!(matrix.get(1, 1).unwrap(), 0.0);
    assert!(matches!(matrix.get(2, 0), Err(Error::InvalidIndex { index: 2, len: 2 })));
}

#[test]
fn ranker_fallback_scenario() {
    let scores = TextRank::new().rank(&SimilarityMatrix::zeros(5)).unwrap();
    assert!(scores.scores().iter().all(|&s| (s - 0.2).abs() < 1e-12));
}

#[test]
fn selector_clamp_scenario() {
    assert_eq!(Selector::retained_count(4, 1.0).unwrap(), 1);
    let summary = Summarizer::from_config(&Config::default()).summarise(NEWS, 1.0, true).unwrap();
    assert!(!summary.is_empty());
}

#[test]
fn summary_of_news_skips_the_unrelated_sentence() {
    let summary = Summarizer::from_config(&Config::default()).summarise(NEWS, 0.4, true).unwrap();
    assert!(summary.converged);
    assert!(summary.len() >= 3);
    assert!(!summary.indices().contains(&2));
    assert!(summary.indices().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn keywords_of_news() {
    let keywords = KeywordExtractor::from_config(&Config::default()).extract_keywords(NEWS, 3, false).unwrap();
    assert_eq!(keywords.len(), 3);
    assert_eq!(keywords.words()[0], "park");
}

#[test]
fn keyword_scenario_through_the_extractor() {
    let keywords = KeywordExtractor::from_config(&Config::default())
        .extract_keywords("Cat dog. Dog dog bird.", 2, false)
        .unwrap();
    assert_eq!(keywords, Keywords::Ranked(vec!["dog".to_string(), "cat".to_string()]));
}

#[test]
fn configured_pipeline_from_files() {
    let mut corpus_file = tempfile::NamedTempFile::new().unwrap();
    write!(corpus_file, "{NEWS}").unwrap();
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(config_file, "[summary]\nreduction_ratio = 0.8\npreserve_order = false\n\n[keywords]\ncount = 2").unwrap();

    let config = Config::from_path(config_file.path()).unwrap();
    let corpus = load_corpus(corpus_file.path()).unwrap();

    let summary = Summarizer::from_config(&config)
        .summarise(&corpus, config.summary.reduction_ratio, config.summary.preserve_order)
        .unwrap();
    assert_eq!(summary.len(), 1);

    let keywords = KeywordExtractor::from_config(&config)
        .extract_keywords(&corpus, config.keywords.count, false)
        .unwrap();
    assert_eq!(keywords.len(), 2);
}

#[test]
fn custom_stack() {
    let cleaner = TextCleaner::new(CleanerConfig {
        language: Language::English,
        remove_stopwords: false,
        ..CleanerConfig::default()
    });
    let summarizer = Summarizer::new(
        PreProcessor::new(UnicodeTokenizer::new(), cleaner),
        Bm25Plus::default().with_b(0.0),
        TextRank::new().with_damping(0.5),
    );
    let summary = summarizer.summarise(NEWS, 0.0, false).unwrap();
    assert_eq!(summary.len(), 5);
    assert!(summary.sentences.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn summary_serializes_to_json() {
    let summary = Summarizer::from_config(&Config::default()).summarise(NEWS, 0.6, true).unwrap();
    let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["sentences"].as_array().map(Vec::len), Some(summary.len()));
    assert!(json["converged"].as_bool().unwrap());
}

#[test]
fn blank_corpus_errors() {
    let summarizer = Summarizer::from_config(&Config::default());
    assert!(matches!(summarizer.summarise("   ", 0.5, true), Err(Error::DegenerateCorpus(_))));
    let extractor = KeywordExtractor::from_config(&Config::default());
    assert!(matches!(extractor.extract_keywords("", 5, false), Err(Error::DegenerateCorpus(_))));
}
