//! Configuration
//!
//! Every section is optional in TOML; missing keys take their defaults.
//!
//! ```toml
//! [similarity]
//! k1 = 1.2
//! b = 0.75
//!
//! [ranking]
//! damping = 0.85
//! tolerance = 1e-6
//! max_iterations = 100
//!
//! [summary]
//! reduction_ratio = 0.7
//! preserve_order = true
//!
//! [keywords]
//! count = 10
//! skip_stemming = true
//!
//! [cleaner]
//! language = "english"
//! extra_stopwords = ["etc"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    preprocess::CleanerConfig,
    ranking::TextRank,
    similarity::Bm25Plus,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Fraction of sentences to drop
    pub reduction_ratio: f64,
    pub preserve_order: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { reduction_ratio: 0.7, preserve_order: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub count: usize,
    /// overrides `cleaner.skip_stemming` for keyword extraction
    pub skip_stemming: bool,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self { count: 10, skip_stemming: true }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub similarity: Bm25Plus,
    pub ranking: TextRank,
    pub summary: SummaryConfig,
    pub keywords: KeywordConfig,
    pub cleaner: CleanerConfig,
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Check parameter ranges
    ///
    /// # Errors
    /// `InvalidParameter` naming the first offending key
    pub fn validate(&self) -> Result<()> {
        let Bm25Plus { k1, b } = self.similarity;
        if k1.is_nan() || k1 < 0.0 {
            return Err(invalid("similarity.k1", "must be >= 0", k1));
        }
        if !(0.0..=1.0).contains(&b) {
            return Err(invalid("similarity.b", "must be in [0, 1]", b));
        }
        let TextRank { damping, max_iterations, tolerance } = self.ranking;
        if !(0.0..1.0).contains(&damping) {
            return Err(invalid("ranking.damping", "must be in [0, 1)", damping));
        }
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(invalid("ranking.tolerance", "must be > 0", tolerance));
        }
        if max_iterations == 0 {
            return Err(invalid("ranking.max_iterations", "must be > 0", max_iterations));
        }
        let ratio = self.summary.reduction_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(invalid("summary.reduction_ratio", "must be in [0, 1]", ratio));
        }
        Ok(())
    }
}

fn invalid(key: &str, rule: &str, value: impl std::fmt::Display) -> Error {
    Error::InvalidParameter(format!("{key} {rule}, got {value}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::preprocess::Language;

    #[test]
    fn empty_document_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.similarity.k1, 1.2);
        assert_eq!(config.ranking.max_iterations, 100);
        assert_eq!(config.summary.reduction_ratio, 0.7);
        assert!(config.keywords.skip_stemming);
        assert!(!config.cleaner.skip_stemming);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = Config::from_toml_str(
            r#"
            [ranking]
            damping = 0.9

            [cleaner]
            language = "german"
            extra_stopwords = ["usw"]
            "#,
        )
        .unwrap();
        assert_eq!(config.ranking.damping, 0.9);
        assert_eq!(config.ranking.tolerance, 1e-6);
        assert_eq!(config.cleaner.language, Language::German);
        assert!(config.cleaner.remove_stopwords);
        assert_eq!(config.cleaner.extra_stopwords, vec!["usw"]);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for doc in [
            "[similarity]\nk1 = -1.0",
            "[similarity]\nb = 1.5",
            "[ranking]\ndamping = 1.0",
            "[ranking]\ntolerance = 0.0",
            "[ranking]\nmax_iterations = 0",
            "[summary]\nreduction_ratio = 2.0",
        ] {
            assert!(
                matches!(Config::from_toml_str(doc), Err(Error::InvalidParameter(_))),
                "accepted {doc:?}"
            );
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(Config::from_toml_str("[ranking\n"), Err(Error::Toml(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[summary]\npreserve_order = false").unwrap();
        let config = Config::from_path(file.path()).unwrap();
        assert!(!config.summary.preserve_order);

        let missing = file.path().with_extension("missing");
        assert!(matches!(Config::from_path(missing), Err(Error::Config(_))));
    }

    #[test]
    fn toml_output_parses_back() {
        let text = Config::default().to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), Config::default());
    }
}
