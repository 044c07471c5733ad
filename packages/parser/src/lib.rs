//! Klauselcheck Parser - Convert AI contract analysis responses to
//! structured clause records.
//!
//! The upstream automation workflow returns a single block of
//! markdown-like German text describing analyzed contract clauses. This
//! crate splits that text into per-clause sections, extracts labeled
//! fields, classifies risk phrases into a closed six-value enumeration,
//! and aggregates an overall verdict - falling back to synthesized,
//! visibly-flagged clauses when the expected structure is missing.
//!
//! # Example
//!
//! ```
//! use klauselcheck_parser::{parse_analysis, RiskLevel};
//!
//! let response = "### Kündigung\n\
//!     **Klauseltext:**\n\
//!     Der Vertrag kann mit 3 Monaten Frist gekündigt werden.\n\
//!     **Analyse:**\n\
//!     Dies ist in Ordnung nach Schweizer Recht.\n\
//!     **Risiko-Einstufung:**\n\
//!     Rechtskonform";
//!
//! let result = parse_analysis(response).unwrap();
//! assert_eq!(result.clauses.len(), 1);
//! assert_eq!(result.overall_risk, RiskLevel::Rechtskonform);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Thresholds and fixed notice strings
//! - [`error`]: Error types and Result alias
//! - [`risk`]: Risk levels, classification, aggregation
//! - [`types`]: Core data types (Clause, AnalysisResult)
//! - [`text`]: Normalization and slicing utilities
//! - [`splitting`]: Section splitter cascade
//! - [`extract`]: Labeled field extraction
//! - [`fallback`]: Clause synthesis for unstructured responses
//! - [`summary`]: Aggregate summary text
//! - [`parser`]: Orchestrator entry point
//! - [`output`]: YAML/JSON result output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod output;
pub mod parser;
pub mod risk;
pub mod splitting;
pub mod summary;
pub mod text;
pub mod types;

// Re-export main entry point
pub use parser::parse_analysis;

// Re-export commonly used items
pub use error::{ParseError, Result};
pub use risk::{aggregate_risk, RiskLevel, Severity, SeverityCounts};
pub use types::{AnalysisResult, Clause, LawReference};
