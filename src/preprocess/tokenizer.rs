use unicode_segmentation::UnicodeSegmentation;

use super::token::Token;

/// Splits raw text into sentences of words
pub trait Tokenizer {
    /// Tokenize a raw corpus
    ///
    /// Never fails: empty or whitespace-only input yields a Token holding
    /// exactly one empty sentence.
    fn tokenize(&self, text: &str) -> Token;
}

/// UAX #29 tokenizer
/// Sentences follow Unicode sentence boundaries, words follow Unicode word
/// bounds with whitespace dropped. Punctuation stays as standalone tokens so
/// the original sentence can be reconstructed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    pub fn new() -> Self {
        UnicodeTokenizer
    }

    /// Split a single sentence into word tokens
    #[inline]
    pub fn words(sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Token {
        let sentences: Vec<Vec<String>> = text
            .unicode_sentences()
            .map(Self::words)
            .filter(|words| !words.is_empty())
            .collect();
        if sentences.is_empty() {
            return Token::empty();
        }
        // non-empty by the check above
        Token::new(sentences).unwrap_or_else(|_| Token::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sentences_and_words() {
        let token = UnicodeTokenizer::new().tokenize("Hello there good man! It is quite windy in London.");
        assert_eq!(token.len(), 2);
        assert_eq!(token.sentence(0).unwrap(), &["Hello", "there", "good", "man", "!"]);
        assert_eq!(token.sentence(1).unwrap().last().map(String::as_str), Some("."));
    }

    #[test]
    fn empty_input_is_one_empty_sentence() {
        for text in ["", "   \n\t "] {
            let token = UnicodeTokenizer::new().tokenize(text);
            assert_eq!(token.len(), 1);
            assert!(token.is_blank());
        }
    }

    #[test]
    fn keeps_contractions_together() {
        let words = UnicodeTokenizer::words("Don't stop");
        assert_eq!(words, vec!["Don't", "stop"]);
    }
}
