pub mod cleaner;
pub mod token;
pub mod tokenizer;

use log::debug;

use crate::error::{Error, Result};

pub use cleaner::{Cleaner, CleanerConfig, Language, StopwordFilter, TextCleaner};
pub use token::Token;
pub use tokenizer::{Tokenizer, UnicodeTokenizer};

/// Output of one preprocessing pass
/// `original` and `cleaned` always have the same sentence count.
#[derive(Debug, Clone)]
pub struct PreProcessed {
    pub original: Token,
    pub cleaned: Token,
}

/// Tokenizer + Cleaner pair
#[derive(Debug, Clone, Default)]
pub struct PreProcessor<T = UnicodeTokenizer, C = TextCleaner>
where
    T: Tokenizer,
    C: Cleaner,
{
    tokenizer: T,
    cleaner: C,
}

impl<T, C> PreProcessor<T, C>
where
    T: Tokenizer,
    C: Cleaner,
{
    pub fn new(tokenizer: T, cleaner: C) -> Self {
        Self { tokenizer, cleaner }
    }

    pub fn cleaner(&self) -> &C {
        &self.cleaner
    }

    /// Tokenize then clean
    ///
    /// # Errors
    /// `AlignmentMismatch` if the cleaner changed the sentence count
    pub fn preprocess(&self, text: &str) -> Result<PreProcessed> {
        let original = self.tokenizer.tokenize(text);
        let cleaned = self.cleaner.clean(&original);
        if original.len() != cleaned.len() {
            return Err(Error::AlignmentMismatch {
                original: original.len(),
                cleaned: cleaned.len(),
            });
        }
        debug!(
            "preprocessed {} sentences: {} words, {} after cleaning",
            original.len(),
            original.word_count(),
            cleaned.word_count()
        );
        Ok(PreProcessed { original, cleaned })
    }
}
