/// Crate-wide error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A sentence index outside `[0, len)` was requested
    #[error("sentence index {index} is out of range for {len} sentences")]
    InvalidIndex { index: usize, len: usize },

    /// Zero sentences, or nothing left to score after cleaning
    #[error("degenerate corpus: {0}")]
    DegenerateCorpus(String),

    /// The ranker hit its iteration cap before reaching the tolerance
    #[error("ranking did not converge after {iterations} iterations (delta {delta:e})")]
    ConvergenceExceeded { iterations: usize, delta: f64 },

    /// A term frequency table names a word the IDF table has never seen
    #[error("no idf entry for word {0:?}")]
    MissingIdf(String),

    /// A cleaner produced a different number of sentences than it received
    #[error("cleaner broke sentence alignment: {original} original vs {cleaned} cleaned sentences")]
    AlignmentMismatch { original: usize, cleaned: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
