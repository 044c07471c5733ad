//! Structured output for downstream consumers.
//!
//! The UI renderer, PDF export, and risk-overview widget all consume the
//! same `AnalysisResult` record; this module writes it to disk as YAML
//! (default) or JSON.

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;
use crate::types::AnalysisResult;

/// Serialization format for saved results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML output (default).
    Yaml,
    /// JSON output.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        })
    }
}

/// Serialize a result in the given format.
pub fn to_output_string(result: &AnalysisResult, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(result)?,
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    };
    Ok(output)
}

/// Serialize a result and write it to `path`.
pub fn save_result(result: &AnalysisResult, format: OutputFormat, path: &Path) -> Result<()> {
    let output = to_output_string(result, format)?;
    fs::write(path, output)?;
    Ok(())
}
