use std::{fs, path::Path};

use crate::error::Result;

/// Read a whole corpus file into memory
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Rebuild a sentence from its word tokens
/// Tokens made only of punctuation attach to the preceding word.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();
    for word in words {
        let word = word.as_ref();
        let attach = !out.is_empty() && word.chars().all(is_closing_punctuation);
        if !out.is_empty() && !attach {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Rebuild several sentences, one per line
pub fn join_sentences<I, S>(sentences: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<[S]>,
    S: AsRef<str>,
{
    sentences
        .into_iter()
        .map(|s| join_words(s.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[inline]
fn is_closing_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | ')' | ']' | '}' | '%' | '…')
}
