//! Parser orchestrator: raw response text in, structured result out.

use crate::error::{ParseError, Result};
use crate::extract::extract;
use crate::fallback::synthesize_clauses;
use crate::risk::{aggregate_risk, RiskLevel, SeverityCounts};
use crate::splitting::SectionSplitter;
use crate::summary::summarize;
use crate::types::{AnalysisResult, Clause, LawReference};

/// Parse a raw AI analysis response into an [`AnalysisResult`].
///
/// Clauses appear in document order; no sorting is applied. The result
/// always contains at least one clause: when structured extraction
/// yields nothing, the fallback handler synthesizes flagged clauses
/// instead.
///
/// # Errors
///
/// - [`ParseError::EmptyInput`] when `response_text` is empty or
///   whitespace-only.
/// - [`ParseError::UnrecognizedFormat`] when not even the fallback
///   handler could identify content (internal inconsistency; should not
///   occur for non-empty input).
pub fn parse_analysis(response_text: &str) -> Result<AnalysisResult> {
    if response_text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let sections = SectionSplitter::new().split(response_text);
    tracing::debug!(sections = sections.len(), "Split response");

    let mut clauses: Vec<Clause> = Vec::new();
    for (index, section) in sections.iter().enumerate() {
        let Some(fields) = extract(section, index) else {
            continue;
        };

        let clause = Clause {
            id: format!("clause-{}", clauses.len() + 1),
            title: fields.title,
            text: fields.text,
            analysis: fields.analysis,
            risk: RiskLevel::classify(&fields.risk_label),
            law_reference: LawReference::from_text(fields.law_reference_text),
            recommendation: fields.recommendation,
        };

        if clause.has_substance() {
            clauses.push(clause);
        } else {
            tracing::debug!(title = %clause.title, "Skipping near-empty section");
        }
    }

    if clauses.is_empty() {
        tracing::warn!("Structured extraction yielded no clauses, using fallback");
        clauses = synthesize_clauses(response_text)?;
    }

    let overall_risk = aggregate_risk(clauses.iter().map(|c| c.risk));
    let counts = SeverityCounts::tally(clauses.iter().map(|c| c.risk));
    let summary = summarize(clauses.len(), counts.critical, counts.questionable);

    Ok(AnalysisResult {
        clauses,
        overall_risk,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_formed_section(title: &str, risk: &str) -> String {
        format!(
            "### {title}\n\
             **Klauseltext:**\n\
             Der Vertrag kann mit 3 Monaten Frist gekündigt werden, was länger ist als üblich.\n\
             **Analyse:**\n\
             Dies ist in Ordnung nach Schweizer Recht und weit verbreitet in der Praxis.\n\
             **Risiko-Einstufung:**\n\
             {risk}\n\
             **Gesetzliche Referenz:**\n\
             OR Art. 266a\n\
             **Empfehlung:**\n\
             Keine Änderung nötig."
        )
    }

    #[test]
    fn test_parse_single_compliant_clause() {
        let result = parse_analysis(&well_formed_section("Kündigung", "Rechtskonform")).unwrap();
        assert_eq!(result.clauses.len(), 1);
        assert_eq!(result.clauses[0].id, "clause-1");
        assert_eq!(result.clauses[0].title, "Kündigung");
        assert_eq!(result.clauses[0].risk, RiskLevel::Rechtskonform);
        assert_eq!(result.overall_risk, RiskLevel::Rechtskonform);
        assert!(result.summary.contains("1 Klausel analysiert."));
        assert!(result.summary.contains("Alle Klauseln sind rechtskonform."));
    }

    #[test]
    fn test_parse_single_inadmissible_clause() {
        let result =
            parse_analysis(&well_formed_section("Kündigung", "Rechtlich unzulässig")).unwrap();
        assert_eq!(result.overall_risk, RiskLevel::RechtlichUnzulaessig);
        assert!(result.summary.contains("1 unzulässige Klausel gefunden."));
    }

    #[test]
    fn test_parse_empty_input_fails() {
        assert!(matches!(parse_analysis(""), Err(ParseError::EmptyInput)));
        assert!(matches!(parse_analysis("   \n\t "), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_parse_unstructured_text_uses_fallback() {
        let text = "some text with no heading markers at all, totally unstructured \
                    rambling that goes on long enough to pass the length threshold";
        let result = parse_analysis(text).unwrap();
        assert_eq!(result.clauses.len(), 1);
        assert_eq!(result.clauses[0].id, "fallback-full");
        assert_eq!(result.clauses[0].risk, RiskLevel::RechtlichFraglich);
        assert_eq!(result.overall_risk, RiskLevel::RechtlichFraglich);
    }

    #[test]
    fn test_parse_two_sections_preserves_order() {
        let text = format!(
            "{}\n---\n{}",
            well_formed_section("Kündigung", "Rechtskonform"),
            well_formed_section("Haftung", "hoch")
        );
        let result = parse_analysis(&text).unwrap();
        assert_eq!(result.clauses.len(), 2);
        assert_eq!(result.clauses[0].title, "Kündigung");
        assert_eq!(result.clauses[1].title, "Haftung");
        assert_eq!(result.clauses[1].id, "clause-2");
        // one "hoch" clause dominates the aggregate
        assert_eq!(result.overall_risk, RiskLevel::RechtlichUnzulaessig);
    }

    #[test]
    fn test_parse_excludes_near_empty_sections() {
        // Second section has a title but text and analysis of <= 10 chars.
        // It survives the splitter (> 50 chars) but fails the content check.
        let text = format!(
            "{}\n---\n### Leere Klausel mit sehr langem Titel zur Längenprüfung\n\
             **Klauseltext:**\nkurz\n**Analyse:**\nknapp",
            well_formed_section("Kündigung", "Rechtskonform")
        );
        let result = parse_analysis(&text).unwrap();
        assert_eq!(result.clauses.len(), 1);
        assert_eq!(result.clauses[0].title, "Kündigung");
    }

    #[test]
    fn test_parse_default_risk_when_marker_missing() {
        let text = "### Kündigung\n\
                    **Klauseltext:**\n\
                    Der Vertrag kann mit 3 Monaten Frist gekündigt werden.\n\
                    **Analyse:**\n\
                    Unauffällig und marktüblich formuliert.";
        let result = parse_analysis(text).unwrap();
        assert_eq!(result.clauses[0].risk, RiskLevel::Rechtskonform);
    }

    #[test]
    fn test_parse_summary_counts_both_vocabularies() {
        let text = format!(
            "{}\n---\n{}\n---\n{}",
            well_formed_section("Eins", "hoch"),
            well_formed_section("Zwei", "mittel"),
            well_formed_section("Drei", "niedrig")
        );
        let result = parse_analysis(&text).unwrap();
        assert!(result.summary.contains("3 Klauseln analysiert."));
        assert!(result.summary.contains("1 unzulässige Klausel gefunden."));
        assert!(result.summary.contains("1 rechtlich fragliche Klausel identifiziert."));
    }
}
