use std::{fmt, str::FromStr};

use rust_stemmers::{Algorithm, Stemmer};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

use crate::error::{Error, Result};

use super::token::Token;

/// Normalizes a Token
/// Implementations must return exactly one sentence per input sentence,
/// at the same index, never merging or dropping sentences.
pub trait Cleaner {
    fn clean(&self, tokens: &Token) -> Token;
}

/// Languages with both a stopword list and a Snowball stemmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
}

impl Language {
    fn stopword_list(self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::German => LANGUAGE::German,
            Language::French => LANGUAGE::French,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
            Language::Russian => LANGUAGE::Russian,
        }
    }

    fn stemmer_algorithm(self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::German => Algorithm::German,
            Language::French => Algorithm::French,
            Language::Spanish => Algorithm::Spanish,
            Language::Italian => Algorithm::Italian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Dutch => Algorithm::Dutch,
            Language::Russian => Algorithm::Russian,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "de" | "german" => Ok(Language::German),
            "fr" | "french" => Ok(Language::French),
            "es" | "spanish" => Ok(Language::Spanish),
            "it" | "italian" => Ok(Language::Italian),
            "pt" | "portuguese" => Ok(Language::Portuguese),
            "nl" | "dutch" => Ok(Language::Dutch),
            "ru" | "russian" => Ok(Language::Russian),
            other => Err(Error::InvalidParameter(format!("unsupported language {other:?}"))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "english",
            Language::German => "german",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Dutch => "dutch",
            Language::Russian => "russian",
        };
        f.write_str(name)
    }
}

/// Stopword set for one language, matched case-insensitively
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    pub fn new(language: Language) -> Self {
        Self {
            stopwords: get(language.stopword_list()).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Filter that lets everything through
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn add_stopwords<T>(&mut self, words: &[T])
    where
        T: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Cleaner options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    pub language: Language,
    pub remove_stopwords: bool,
    pub case_fold: bool,
    pub strip_punctuation: bool,
    /// keep surface forms (keyword display) instead of Snowball stems
    pub skip_stemming: bool,
    pub extra_stopwords: Vec<String>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            remove_stopwords: true,
            case_fold: true,
            strip_punctuation: true,
            skip_stemming: false,
            extra_stopwords: Vec::new(),
        }
    }
}

/// Default cleaner
/// Applies, per word: case folding, punctuation stripping, stopword removal,
/// then stemming. A word emptied by any step is dropped; its sentence is kept.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    config: CleanerConfig,
    stopwords: StopwordFilter,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new(CleanerConfig::default())
    }
}

impl TextCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        let mut stopwords = if config.remove_stopwords {
            StopwordFilter::new(config.language)
        } else {
            StopwordFilter::empty()
        };
        if config.remove_stopwords {
            stopwords.add_stopwords(&config.extra_stopwords);
        }
        Self { config, stopwords }
    }

    /// Same options, stemming disabled
    pub fn skip_stemming(mut self, skip: bool) -> Self {
        self.config.skip_stemming = skip;
        self
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    fn clean_word(&self, word: &str, stemmer: Option<&Stemmer>) -> Option<String> {
        let mut word = if self.config.case_fold {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        if self.config.strip_punctuation {
            word.retain(char::is_alphanumeric);
        }
        if word.is_empty() || self.stopwords.is_stopword(&word) {
            return None;
        }
        match stemmer {
            Some(stemmer) => Some(stemmer.stem(&word).into_owned()),
            None => Some(word),
        }
    }
}

impl Cleaner for TextCleaner {
    fn clean(&self, tokens: &Token) -> Token {
        let stemmer = (!self.config.skip_stemming)
            .then(|| Stemmer::create(self.config.language.stemmer_algorithm()));
        tokens.map_words(|word| self.clean_word(word, stemmer.as_ref()))
    }
}
