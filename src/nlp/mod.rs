//! Text analysis for extracted articles
//!
//! This module contains:
//! - The extractive summary heuristic
//! - Lexicon-based sentiment scoring
//! - Keyword extraction (the non-fatal enrichment pass)
//! - Local caching and loading of the sentiment lexicon

mod keywords;
mod lexicon;
mod sentiment;
mod summary;

pub use keywords::{extract_keywords, MAX_KEYWORDS};
pub use lexicon::{ensure_lexicon, prepare_lexicon, Lexicon, LEXICON_FILE};
pub use sentiment::{Sentiment, SentimentAnalyzer};
pub use summary::{summarize, FALLBACK_SUMMARY_CHARS, MAX_SUMMARY_SENTENCES};

/// Splits text into lowercase word tokens
///
/// A token is a run of letters and apostrophes; typographic apostrophes are
/// normalised and leading/trailing apostrophes stripped.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphabetic() || c == '\'' || c == '\u{2019}'))
        .map(|word| word.replace('\u{2019}', "'"))
        .map(|word| word.trim_matches('\'').to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words() {
        assert_eq!(
            tokenize("Hello, World! 42 times."),
            vec!["hello", "world", "times"]
        );
    }

    #[test]
    fn test_tokenize_keeps_contractions() {
        assert_eq!(tokenize("It wasn’t 'quoted'"), vec!["it", "wasn't", "quoted"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("... 123 !!!").is_empty());
    }
}
