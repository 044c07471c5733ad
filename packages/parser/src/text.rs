//! Text normalization and slicing utilities.

use regex::Regex;

/// Normalize a raw response section for pattern matching.
///
/// - Non-breaking spaces (U+00A0) become regular spaces. The upstream
///   model emits them unpredictably around label colons.
/// - All line-ending variants collapse to `\n`.
pub fn normalize(text: &str) -> String {
    text.replace('\u{a0}', " ").replace("\r\n", "\n").replace('\r', "\n")
}

/// Truncate to at most `max` characters, appending `...` when truncated.
///
/// Counts characters rather than bytes so German umlauts never get split
/// mid-codepoint.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max).collect();
    format!("{truncated}...")
}

/// Split `text` at the start of every match of `delimiter`, keeping each
/// match attached to the chunk that follows it.
///
/// This is the offset-based equivalent of a zero-width lookahead split;
/// the `regex` crate has no lookaround. The chunk before the first match
/// (possibly empty) is always the first element.
pub fn split_before<'a>(text: &'a str, delimiter: &Regex) -> Vec<&'a str> {
    let starts: Vec<usize> = delimiter.find_iter(text).map(|m| m.start()).collect();
    if starts.is_empty() {
        return vec![text];
    }

    let mut chunks = Vec::with_capacity(starts.len() + 1);
    let mut prev = 0;
    for start in starts {
        chunks.push(&text[prev..start]);
        prev = start;
    }
    chunks.push(&text[prev..]);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    #[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
    static HEADING: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"###").expect("valid regex"));

    #[test]
    fn test_normalize_nbsp() {
        assert_eq!(normalize("Analyse\u{a0}:"), "Analyse :");
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_truncate_chars_short_text_unchanged() {
        assert_eq!(truncate_chars("kurz", 10), "kurz");
    }

    #[test]
    fn test_truncate_chars_exact_length_unchanged() {
        assert_eq!(truncate_chars("abcde", 5), "abcde");
    }

    #[test]
    fn test_truncate_chars_appends_ellipsis() {
        assert_eq!(truncate_chars("abcdef", 5), "abcde...");
    }

    #[test]
    fn test_truncate_chars_counts_umlauts_as_one() {
        // "Kündigungsfrist" is 15 characters but 16 bytes
        assert_eq!(truncate_chars("Kündigungsfrist", 15), "Kündigungsfrist");
        assert_eq!(truncate_chars("Kündigungsfrist", 4), "Künd...");
    }

    #[test]
    fn test_split_before_no_match_returns_whole() {
        assert_eq!(split_before("no headings here", &HEADING), vec!["no headings here"]);
    }

    #[test]
    fn test_split_before_keeps_delimiter_attached() {
        let chunks = split_before("intro ### one ### two", &HEADING);
        assert_eq!(chunks, vec!["intro ", "### one ", "### two"]);
    }

    #[test]
    fn test_split_before_leading_match_gives_empty_first_chunk() {
        let chunks = split_before("### one", &HEADING);
        assert_eq!(chunks, vec!["", "### one"]);
    }
}
