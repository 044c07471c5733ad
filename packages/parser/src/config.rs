//! Configuration constants for the parser.
//!
//! The thresholds match the upstream analysis pipeline: sections shorter
//! than [`MIN_SECTION_CHARS`] are noise, and clauses whose text and
//! analysis are both at most [`MIN_FIELD_CHARS`] long carry no usable
//! content.

/// Minimum character count for a split section to be considered valid.
///
/// Anything at or below this is a stray delimiter artifact or a heading
/// with no body.
pub const MIN_SECTION_CHARS: usize = 50;

/// Minimum character count for the clause text or analysis field.
///
/// A clause is only included in the result if its title is present and
/// at least one of text/analysis exceeds this length.
pub const MIN_FIELD_CHARS: usize = 10;

/// Maximum preview length (characters) for per-section fallback clauses.
pub const FALLBACK_SECTION_PREVIEW_CHARS: usize = 500;

/// Maximum preview length (characters) for the whole-response fallback clause.
pub const FALLBACK_FULL_PREVIEW_CHARS: usize = 1000;

/// Title of the single whole-response fallback clause.
pub const FALLBACK_FULL_TITLE: &str = "Vollständige Analyse";

/// Analysis notice for per-section fallback clauses.
pub const FALLBACK_SECTION_ANALYSIS: &str =
    "Die automatische Strukturierung dieser Klausel war nur teilweise möglich. \
     Eine manuelle Prüfung wird empfohlen.";

/// Law reference notice for per-section fallback clauses.
pub const FALLBACK_SECTION_LAW_REF: &str =
    "Die automatische Extraktion der Gesetzesreferenz war unvollständig.";

/// Recommendation notice for per-section fallback clauses.
pub const FALLBACK_SECTION_RECOMMENDATION: &str =
    "Lassen Sie diese Klausel von einer Fachperson prüfen.";

/// Analysis notice for the whole-response fallback clause.
pub const FALLBACK_FULL_ANALYSIS: &str =
    "Die automatische Strukturierung der Antwort ist fehlgeschlagen. \
     Der vollständige Analysetext ist als Klauseltext verfügbar.";

/// Law reference notice for the whole-response fallback clause.
pub const FALLBACK_FULL_LAW_REF: &str =
    "Es konnten keine Gesetzesreferenzen automatisch extrahiert werden.";

/// Recommendation notice for the whole-response fallback clause.
pub const FALLBACK_FULL_RECOMMENDATION: &str =
    "Eine gründliche manuelle Prüfung der gesamten Analyse wird dringend empfohlen.";
