//! Section splitter cascade.

use super::strategy::{BlankLineHeadingSplit, HeadingSplit, HorizontalRuleSplit, SplitStrategy};
use crate::config::MIN_SECTION_CHARS;
use crate::text::normalize;

/// Splits a raw response into per-clause sections.
///
/// Strategies run in a fixed order; the first one producing more than one
/// valid section wins. If no strategy finds more than one section but the
/// last one found a single valid section, that section is used. If nothing
/// valid is found but the text contains a heading marker at all, the whole
/// text becomes one section. Otherwise the result is empty and the caller
/// falls back to clause synthesis.
pub struct SectionSplitter {
    strategies: Vec<Box<dyn SplitStrategy>>,
}

impl SectionSplitter {
    /// Create a splitter with the standard strategy cascade.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(HorizontalRuleSplit),
                Box::new(BlankLineHeadingSplit),
                Box::new(HeadingSplit),
            ],
        }
    }

    /// Split the raw response text into candidate clause sections.
    pub fn split(&self, raw_text: &str) -> Vec<String> {
        let text = normalize(raw_text);

        let mut sections: Vec<String> = Vec::new();
        for strategy in &self.strategies {
            sections = strategy
                .split(&text)
                .into_iter()
                .filter(|s| is_valid_section(s))
                .collect();

            if sections.len() > 1 {
                tracing::debug!(
                    strategy = strategy.name(),
                    count = sections.len(),
                    "Split response into sections"
                );
                return sections;
            }
        }

        // The last strategy found exactly one valid section
        if !sections.is_empty() {
            tracing::debug!("Single valid section found");
            return sections;
        }

        if text.contains("###") {
            tracing::debug!("No valid sections, treating whole response as one section");
            return vec![text.trim().to_string()];
        }

        tracing::debug!("No clause headings found in response");
        Vec::new()
    }
}

impl Default for SectionSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// A valid section is long enough to hold content and opens a clause.
fn is_valid_section(section: &str) -> bool {
    section.chars().count() > MIN_SECTION_CHARS && section.contains("###")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str) -> String {
        format!("### {title}\n**Klauseltext:**\nEin ausreichend langer Klauseltext für die Prüfung.")
    }

    #[test]
    fn test_split_on_horizontal_rule() {
        let text = format!("{}\n---\n{}", section("Eins"), section("Zwei"));
        let sections = SectionSplitter::new().split(&text);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].contains("Eins"));
        assert!(sections[1].contains("Zwei"));
    }

    #[test]
    fn test_split_on_blank_line_heading() {
        let text = format!("{}\n\n{}", section("Eins"), section("Zwei"));
        let sections = SectionSplitter::new().split(&text);
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_split_on_bare_headings() {
        // Single newlines between sections: only the heading split works
        let one = section("Eins");
        let two = section("Zwei");
        let text = format!("{one}\n{two}");
        let sections = SectionSplitter::new().split(&text);
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_short_sections_are_filtered() {
        let text = "### A\nkurz\n---\n### B\nkurz";
        let sections = SectionSplitter::new().split(text);
        // Both sections fail the length check; whole text has markers
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0], text);
    }

    #[test]
    fn test_whole_text_when_single_heading() {
        let text = section("Einzig");
        let sections = SectionSplitter::new().split(&text);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].contains("Einzig"));
    }

    #[test]
    fn test_empty_when_no_headings() {
        let text = "Völlig unstrukturierter Text ohne jegliche Überschriften, \
                    nur freies Geschwafel über Vertragsrecht.";
        let sections = SectionSplitter::new().split(text);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_crlf_input_splits() {
        let text = format!("{}\r\n\r\n{}", section("Eins"), section("Zwei"));
        let sections = SectionSplitter::new().split(&text);
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_preamble_before_first_heading_is_dropped() {
        let preamble = "Hier ist die Analyse Ihres Vertrags mit allen wichtigen Punkten:";
        let text = format!("{preamble}\n\n{}\n\n{}", section("Eins"), section("Zwei"));
        let sections = SectionSplitter::new().split(&text);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with("###"));
    }
}
