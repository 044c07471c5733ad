//! Aggregate summary text generation.

/// Compose the human-readable German summary from clause counts.
///
/// Deterministic template: total count, then a sentence per non-zero
/// severity bucket (or the all-compliant sentence when both are zero),
/// then a closing pointer to the per-clause recommendations.
#[must_use]
pub fn summarize(clause_count: usize, critical_count: usize, questionable_count: usize) -> String {
    let mut summary = format!(
        "{clause_count} {} analysiert.",
        plural(clause_count, "Klausel", "Klauseln")
    );

    if critical_count > 0 {
        summary.push_str(&format!(
            " {critical_count} unzulässige {} gefunden.",
            plural(critical_count, "Klausel", "Klauseln")
        ));
    }
    if questionable_count > 0 {
        summary.push_str(&format!(
            " {questionable_count} rechtlich fragliche {} identifiziert.",
            plural(questionable_count, "Klausel", "Klauseln")
        ));
    }
    if critical_count == 0 && questionable_count == 0 {
        summary.push_str(" Alle Klauseln sind rechtskonform.");
    }

    summary.push_str(" Detaillierte Empfehlungen finden Sie bei den einzelnen Klauseln.");
    summary
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
