//! Keyword extraction used as the enrichment pass over a parsed article

use crate::nlp::tokenize;
use crate::EnrichError;
use std::collections::HashMap;

/// Maximum number of keywords returned
pub const MAX_KEYWORDS: usize = 10;

/// Shortest token considered a keyword
const MIN_KEYWORD_LEN: usize = 3;

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "could", "did", "didn't", "do", "does", "doesn't", "doing", "don't",
    "down", "during", "each", "few", "for", "from", "further", "had", "has", "have", "having", "he",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "isn't", "it", "it's", "its", "itself", "just", "like", "more", "most", "much", "must", "my",
    "myself", "new", "no", "nor", "not", "now", "of", "off", "on", "once", "one", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "said", "same", "says", "she",
    "should", "so", "some", "such", "than", "that", "that's", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "wasn't", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "year", "years", "you", "your",
    "yours", "yourself",
];

/// Extracts the most frequent meaningful words from an article
///
/// Title and body are tokenised together; stopwords and tokens shorter than
/// three characters are ignored. Ties keep first-appearance order.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Up to [`MAX_KEYWORDS`] keywords, most frequent first
/// * `Err(EnrichError::NoKeywords)` - Nothing in the text qualifies
pub fn extract_keywords(title: &str, text: &str) -> Result<Vec<String>, EnrichError> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    let tokens = tokenize(title).into_iter().chain(tokenize(text));
    for (position, token) in tokens.enumerate() {
        if token.chars().count() < MIN_KEYWORD_LEN || STOPWORDS.contains(&token.as_str()) {
            continue;
        }

        let entry = counts.entry(token).or_insert((0, position));
        entry.0 += 1;
    }

    if counts.is_empty() {
        return Err(EnrichError::NoKeywords);
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first_seen))| (token, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    Ok(ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(token, _, _)| token)
        .collect())
}
