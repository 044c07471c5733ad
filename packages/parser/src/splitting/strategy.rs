//! Splitting strategies for clause sections.
//!
//! Each strategy is a pure function over the full response text. The
//! cascade in [`super::SectionSplitter`] decides which result to use.
//! Strategies assume line endings have been normalized to `\n`.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::split_before;

/// A line consisting solely of `---` (optionally padded with spaces).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*---[ \t]*$").expect("valid regex"));

/// Two or more newlines directly followed by a clause heading.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BLANK_THEN_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}###").expect("valid regex"));

/// A clause heading marker anywhere in the text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"###").expect("valid regex"));

/// Trait for response splitting strategies.
///
/// Implementations determine candidate section boundaries; validity
/// filtering happens in the engine.
pub trait SplitStrategy {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Split the response into candidate sections, trimmed, empties removed.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Split on horizontal-rule lines (`---`).
pub struct HorizontalRuleSplit;

impl SplitStrategy for HorizontalRuleSplit {
    fn name(&self) -> &'static str {
        "horizontal-rule"
    }

    fn split(&self, text: &str) -> Vec<String> {
        HORIZONTAL_RULE
            .split(text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Split on blank lines immediately preceding a `###` heading.
///
/// The blank lines are consumed as the delimiter; the heading marker
/// stays attached to the following section.
pub struct BlankLineHeadingSplit;

impl SplitStrategy for BlankLineHeadingSplit {
    fn name(&self) -> &'static str {
        "blank-line-heading"
    }

    fn split(&self, text: &str) -> Vec<String> {
        let mut sections = Vec::new();
        let mut prev = 0;
        for m in BLANK_THEN_HEADING.find_iter(text) {
            sections.push(text[prev..m.start()].to_string());
            // keep the "###" with the section it opens
            prev = m.end() - 3;
        }
        sections.push(text[prev..].to_string());

        sections
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Split directly before every `###` heading marker.
pub struct HeadingSplit;

impl SplitStrategy for HeadingSplit {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn split(&self, text: &str) -> Vec<String> {
        split_before(text, &HEADING)
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
