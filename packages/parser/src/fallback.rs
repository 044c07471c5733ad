//! Fallback clause synthesis for unstructured responses.
//!
//! Invoked only when the splitter/extractor pipeline produced zero
//! clauses. The goal is degraded success: the caller always gets at
//! least one clause, visibly flagged as low-confidence through the
//! `Rechtlich fraglich` risk level and fixed notice texts.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    FALLBACK_FULL_ANALYSIS, FALLBACK_FULL_LAW_REF, FALLBACK_FULL_PREVIEW_CHARS,
    FALLBACK_FULL_RECOMMENDATION, FALLBACK_FULL_TITLE, FALLBACK_SECTION_ANALYSIS,
    FALLBACK_SECTION_LAW_REF, FALLBACK_SECTION_PREVIEW_CHARS, FALLBACK_SECTION_RECOMMENDATION,
    MIN_SECTION_CHARS,
};
use crate::error::{ParseError, Result};
use crate::risk::RiskLevel;
use crate::text::{normalize, split_before, truncate_chars};
use crate::types::{Clause, LawReference};

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"###").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADING_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"###\s*([^\n]+)").expect("valid regex"));

/// Synthesize best-effort clauses from a response the main pipeline
/// could not structure.
///
/// First tier: re-split at heading markers and build one flagged clause
/// per titled chunk of reasonable length. Second tier: a single clause
/// carrying a preview of the entire response. Fails only when handed
/// effectively empty text, which the orchestrator already rejects -
/// that case indicates an internal inconsistency.
pub fn synthesize_clauses(raw_text: &str) -> Result<Vec<Clause>> {
    let text = normalize(raw_text);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::UnrecognizedFormat);
    }

    let mut clauses = section_clauses(&text);

    if clauses.is_empty() {
        tracing::warn!("No sections recoverable, synthesizing whole-response clause");
        clauses.push(Clause {
            id: "fallback-full".to_string(),
            title: FALLBACK_FULL_TITLE.to_string(),
            text: truncate_chars(trimmed, FALLBACK_FULL_PREVIEW_CHARS),
            analysis: FALLBACK_FULL_ANALYSIS.to_string(),
            risk: RiskLevel::RechtlichFraglich,
            law_reference: LawReference::from_text(FALLBACK_FULL_LAW_REF),
            recommendation: FALLBACK_FULL_RECOMMENDATION.to_string(),
        });
    }

    Ok(clauses)
}

/// First-tier synthesis: one clause per titled heading chunk.
fn section_clauses(text: &str) -> Vec<Clause> {
    let chunks = split_before(text, &HEADING);
    if chunks.len() <= 1 {
        return Vec::new();
    }

    let mut clauses = Vec::new();
    // chunks[0] is whatever precedes the first heading
    for chunk in chunks.into_iter().skip(1) {
        let Some(title) = HEADING_TITLE
            .captures(chunk)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
        else {
            continue;
        };

        if chunk.chars().count() <= MIN_SECTION_CHARS {
            continue;
        }

        clauses.push(Clause {
            id: format!("fallback-{}", clauses.len() + 1),
            title,
            text: truncate_chars(chunk.trim(), FALLBACK_SECTION_PREVIEW_CHARS),
            analysis: FALLBACK_SECTION_ANALYSIS.to_string(),
            risk: RiskLevel::RechtlichFraglich,
            law_reference: LawReference::from_text(FALLBACK_SECTION_LAW_REF),
            recommendation: FALLBACK_SECTION_RECOMMENDATION.to_string(),
        });
    }

    clauses
}
