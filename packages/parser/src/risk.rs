//! Risk levels, classification, and aggregation.
//!
//! Two parallel vocabularies appear in upstream responses and are treated
//! as equivalent severity pairs: `niedrig`/`mittel`/`hoch` and
//! `Rechtskonform`/`Rechtlich fraglich`/`Rechtlich unzulässig`.

use serde::{Deserialize, Serialize};

/// Canonical risk level assigned to a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk.
    #[serde(rename = "niedrig")]
    Niedrig,

    /// Medium risk.
    #[serde(rename = "mittel")]
    Mittel,

    /// High risk.
    #[serde(rename = "hoch")]
    Hoch,

    /// Legally compliant.
    #[serde(rename = "Rechtskonform")]
    Rechtskonform,

    /// Legally questionable.
    #[serde(rename = "Rechtlich fraglich")]
    RechtlichFraglich,

    /// Legally inadmissible.
    #[serde(rename = "Rechtlich unzulässig")]
    RechtlichUnzulaessig,
}

/// Two-bucket severity grouping used for aggregation and summary counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// `Rechtlich unzulässig` or `hoch`.
    Critical,
    /// `Rechtlich fraglich` or `mittel`.
    Questionable,
    /// Everything else.
    Compliant,
}

impl RiskLevel {
    /// Get the canonical display string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Niedrig => "niedrig",
            Self::Mittel => "mittel",
            Self::Hoch => "hoch",
            Self::Rechtskonform => "Rechtskonform",
            Self::RechtlichFraglich => "Rechtlich fraglich",
            Self::RechtlichUnzulaessig => "Rechtlich unzulässig",
        }
    }

    /// Classify a free-text risk phrase from the model response.
    ///
    /// Keyword priority is fixed (not first-occurrence order): a phrase
    /// containing both "unzulässig" and "konform" is inadmissible. When
    /// no keyword matches, the safe default is `Rechtskonform` - never
    /// a high-severity label on ambiguous input.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();

        if lower.contains("unzulässig") {
            Self::RechtlichUnzulaessig
        } else if lower.contains("fraglich") {
            Self::RechtlichFraglich
        } else if lower.contains("konform") {
            Self::Rechtskonform
        } else if lower.contains("hoch") {
            Self::Hoch
        } else if lower.contains("mittel") {
            Self::Mittel
        } else if lower.contains("niedrig") {
            Self::Niedrig
        } else {
            Self::Rechtskonform
        }
    }

    /// Map this level into its severity bucket.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::RechtlichUnzulaessig | Self::Hoch => Severity::Critical,
            Self::RechtlichFraglich | Self::Mittel => Severity::Questionable,
            Self::Rechtskonform | Self::Niedrig => Severity::Compliant,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of clauses per severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeverityCounts {
    pub critical: usize,
    pub questionable: usize,
    pub compliant: usize,
}

impl SeverityCounts {
    /// Tally severity buckets over a set of risk levels.
    #[must_use]
    pub fn tally(risks: impl IntoIterator<Item = RiskLevel>) -> Self {
        let mut counts = Self::default();
        for risk in risks {
            match risk.severity() {
                Severity::Critical => counts.critical += 1,
                Severity::Questionable => counts.questionable += 1,
                Severity::Compliant => counts.compliant += 1,
            }
        }
        counts
    }
}

/// Aggregate per-clause risks into one overall verdict.
///
/// Strict severity dominance: a single critical clause makes the whole
/// contract `Rechtlich unzulässig` regardless of how many clauses are
/// compliant. An empty input aggregates to `Rechtskonform`.
#[must_use]
pub fn aggregate_risk(risks: impl IntoIterator<Item = RiskLevel>) -> RiskLevel {
    let counts = SeverityCounts::tally(risks);
    if counts.critical > 0 {
        RiskLevel::RechtlichUnzulaessig
    } else if counts.questionable > 0 {
        RiskLevel::RechtlichFraglich
    } else {
        RiskLevel::Rechtskonform
    }
}
