//! Field extraction from a single clause section.
//!
//! Each field sits between a bold German label marker and the next
//! expected marker. The upstream model varies its formatting: colons may
//! appear inside or after the bold marker, non-breaking spaces show up
//! around them, and "Risiko-Einstufung" sometimes loses its hyphen. The
//! marker patterns tolerate all of these.
//!
//! Extraction never fails for a missing field; every field defaults
//! independently. Whether a section yields a usable clause is decided by
//! the orchestrator via the minimum-content check on [`crate::Clause`].

use std::sync::LazyLock;

use regex::Regex;

use crate::text::normalize;

/// Heading text after a `###` marker, up to end of line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"###\s*([^\n]+)").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_KLAUSELTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\s*Klauseltext\s*:?\s*\*\*\s*:?").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_ANALYSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\s*Analyse\s*:?\s*\*\*\s*:?").expect("valid regex"));

/// Accepts both "Risiko-Einstufung" and "Risiko Einstufung".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_RISIKO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\s*Risiko[-\s]Einstufung\s*:?\s*\*\*\s*:?").expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_GESETZ: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\s*Gesetzliche\s+Referenz\s*:?\s*\*\*\s*:?").expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_EMPFEHLUNG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\s*Empfehlung\s*:?\s*\*\*\s*:?").expect("valid regex"));

/// Raw field values extracted from one section, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Heading text, defaulting to "Klausel <n>".
    pub title: String,

    /// Original clause wording. Empty when the marker is absent.
    pub text: String,

    /// Free-text evaluation. Empty when the marker is absent.
    pub analysis: String,

    /// Raw risk phrase for the classifier. Defaults to "Rechtskonform"
    /// when the marker is absent (safe default, per classifier policy).
    pub risk_label: String,

    /// Statutory reference text. Empty when the marker is absent.
    pub law_reference_text: String,

    /// Recommendation text. Empty when the marker is absent.
    pub recommendation: String,
}

/// Extract labeled fields from one clause section.
///
/// `index` is the zero-based section position, used for the title
/// default. Returns `None` only for structurally unusable sections;
/// today every section yields a result, possibly with blank fields.
pub fn extract(section: &str, index: usize) -> Option<ExtractedFields> {
    let section = normalize(section);

    let title = TITLE
        .captures(&section)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| format!("Klausel {}", index + 1));

    let text = field_between(&section, &MARKER_KLAUSELTEXT, &MARKER_ANALYSE);
    let analysis = field_between(&section, &MARKER_ANALYSE, &MARKER_RISIKO);
    let risk_label = field_between(&section, &MARKER_RISIKO, &MARKER_GESETZ);
    let law_reference_text = field_between(&section, &MARKER_GESETZ, &MARKER_EMPFEHLUNG);
    let recommendation = until_next_heading(&section, &MARKER_EMPFEHLUNG);

    Some(ExtractedFields {
        title,
        text: text.unwrap_or_default(),
        analysis: analysis.unwrap_or_default(),
        risk_label: risk_label.unwrap_or_else(|| "Rechtskonform".to_string()),
        law_reference_text: law_reference_text.unwrap_or_default(),
        recommendation: recommendation.unwrap_or_default(),
    })
}

/// Slice the content between `marker` and the first following match of
/// `next`, or to the end of the section if `next` never matches.
fn field_between(section: &str, marker: &Regex, next: &Regex) -> Option<String> {
    let start = marker.find(section)?.end();
    let rest = &section[start..];
    let end = next.find(rest).map_or(rest.len(), |m| m.start());
    Some(rest[..end].trim().to_string())
}

/// Slice the content between `marker` and the next `###` heading or end.
fn until_next_heading(section: &str, marker: &Regex) -> Option<String> {
    let start = marker.find(section)?.end();
    let rest = &section[start..];
    let end = rest.find("###").unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}
