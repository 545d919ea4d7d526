//! Extractive summary of article text

/// Number of leading sentences kept in a summary
pub const MAX_SUMMARY_SENTENCES: usize = 5;

/// Characters kept when the text has no sentence to summarise
pub const FALLBACK_SUMMARY_CHARS: usize = 800;

/// Builds a short extractive summary from the article text
///
/// The text is split on every `.`, fragments are trimmed, empty ones
/// dropped, and the first [`MAX_SUMMARY_SENTENCES`] are joined with `". "`.
/// Periods inside abbreviations or numbers split too; output depends on it.
///
/// Text without any `.` has no sentences. In that case, or when no
/// fragment survives, the first [`FALLBACK_SUMMARY_CHARS`] characters of
/// the text are returned, followed by `"..."` if anything was cut.
///
/// # Examples
///
/// ```
/// use newsbrief::nlp::summarize;
///
/// assert_eq!(summarize("A. B. C. D. E. F."), "A. B. C. D. E");
/// assert_eq!(summarize("no periods here"), "no periods here");
/// ```
pub fn summarize(text: &str) -> String {
    if !text.contains('.') {
        return truncate_chars(text, FALLBACK_SUMMARY_CHARS);
    }

    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_SUMMARY_SENTENCES)
        .collect();

    let summary = sentences.join(". ");
    if !summary.is_empty() {
        return summary;
    }

    truncate_chars(text, FALLBACK_SUMMARY_CHARS)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_five_fragments() {
        assert_eq!(summarize("A. B. C. D. E. F."), "A. B. C. D. E");
    }

    #[test]
    fn test_fewer_than_five_sentences() {
        assert_eq!(
            summarize("The mayor spoke today. Residents listened."),
            "The mayor spoke today. Residents listened"
        );
    }

    #[test]
    fn test_empty_fragments_skipped() {
        assert_eq!(summarize("One... Two.  . Three"), "One. Two. Three");
    }

    #[test]
    fn test_abbreviations_split_as_is() {
        assert_eq!(
            summarize("Dr. Smith paid 3.50 dollars. Then left."),
            "Dr. Smith paid 3. 50 dollars. Then left"
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "Markets rose. Bonds fell. Oil was flat. Gold gained. Crypto slid. Rates held.";
        assert_eq!(summarize(text), summarize(text));
    }

    #[test]
    fn test_no_periods_long_text_truncated() {
        let text = "x".repeat(1000);
        let summary = summarize(&text);
        assert_eq!(summary, format!("{}...", "x".repeat(800)));
    }

    #[test]
    fn test_no_periods_exactly_limit_not_truncated() {
        let text = "y".repeat(800);
        assert_eq!(summarize(&text), text);
    }

    #[test]
    fn test_only_periods_falls_back_to_text() {
        assert_eq!(summarize(". . ."), ". . .");
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "é".repeat(801);
        let summary = summarize(&text);
        assert_eq!(summary.chars().count(), 803);
        assert!(summary.ends_with("..."));
    }
}
