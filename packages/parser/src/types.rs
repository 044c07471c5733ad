//! Core data types for the parser.
//!
//! These are pure value objects created fresh on every parse call and
//! never mutated after return. Field names serialize in camelCase to
//! match the wire contract consumed by the UI renderer and PDF export.

use serde::{Deserialize, Serialize};

use crate::config::MIN_FIELD_CHARS;
use crate::risk::{RiskLevel, SeverityCounts};

/// A reference to the statutory basis of a clause assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawReference {
    /// Free-text reference (e.g., "OR Art. 266a").
    pub text: String,

    /// URL to the referenced provision. Always empty in parsed results;
    /// no URL extraction is performed from response text.
    pub link: String,
}

impl LawReference {
    /// Create a text-only reference with an empty link.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: String::new(),
        }
    }
}

/// One analyzed contract provision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    /// Unique within one result (e.g., "clause-1", "fallback-2").
    pub id: String,

    /// Display title, defaulting to "Klausel <n>" when the section has
    /// no heading text.
    pub title: String,

    /// Original clause wording as extracted. May be empty.
    pub text: String,

    /// Free-text evaluation of the clause. May be empty.
    pub analysis: String,

    /// Risk level, always populated.
    pub risk: RiskLevel,

    /// Statutory reference for the assessment.
    pub law_reference: LawReference,

    /// Recommended action. May be empty.
    pub recommendation: String,
}

impl Clause {
    /// Whether this clause carries enough content to be included in a
    /// result: a non-empty title plus more than [`MIN_FIELD_CHARS`]
    /// characters of text or analysis. Rejects near-empty noise sections.
    #[must_use]
    pub fn has_substance(&self) -> bool {
        !self.title.trim().is_empty()
            && (self.text.chars().count() > MIN_FIELD_CHARS
                || self.analysis.chars().count() > MIN_FIELD_CHARS)
    }
}

/// Structured result of parsing one analysis response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Clauses in document order. Never empty: the fallback handler
    /// guarantees at least one entry or the parse fails entirely.
    pub clauses: Vec<Clause>,

    /// Severity-dominant aggregate over all clauses.
    pub overall_risk: RiskLevel,

    /// Human-readable German summary derived from clause counts.
    pub summary: String,
}

impl AnalysisResult {
    /// Count clauses per severity bucket, for the risk-overview widget.
    #[must_use]
    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts::tally(self.clauses.iter().map(|c| c.risk))
    }
}
