use textrank_summarizer::{
    Bm25Plus, Config, DefaultTermStatsEngine, KeywordExtractor, Keywords, PreProcessor, Ranker, SimilarityAlgorithm,
    Summarizer, TermStatsEngine, TextCleaner, TextRank, UnicodeTokenizer,
};

const TEXT: &str = "Rust is a systems programming language focused on safety. \
    The borrow checker enforces memory safety without a garbage collector. \
    Many teams adopt Rust for fast and safe systems software. \
    Cooking pasta requires salted boiling water. \
    Rust tooling such as cargo makes building software pleasant.";

fn main() {
    let config = Config::default();

    // summary, corpus order
    let summarizer = Summarizer::from_config(&config);
    let summary = summarizer.summarise(TEXT, 0.6, true).unwrap();
    println!("Summary ({} iterations, converged: {}):\n{}", summary.iterations, summary.converged, summary.to_text());

    // keywords
    let extractor = KeywordExtractor::from_config(&config);
    if let Keywords::Ranked(words) = extractor.extract_keywords(TEXT, 5, false).unwrap() {
        println!("Keywords: {}", words.join(", "));
    }

    // the individual stages
    let pre = PreProcessor::new(UnicodeTokenizer::new(), TextCleaner::default()).preprocess(TEXT).unwrap();
    let idf = <DefaultTermStatsEngine as TermStatsEngine<f64>>::idf(&pre.cleaned).unwrap();
    let matrix = Bm25Plus::default().similarity_matrix(&pre.cleaned, &idf).unwrap();
    let scores = TextRank::new().rank(&matrix).unwrap();
    for (i, score) in scores.scores().iter().enumerate() {
        println!("sentence {i}: {score:.4}");
    }
}
