//! Error types for the parser.
//!
//! Only two conditions are fatal to a parse: empty input and a response
//! in which not even the fallback handler can identify content. Everything
//! else is absorbed internally through field defaults and clause synthesis.

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The response text was empty or whitespace-only.
    #[error("Response text is empty - no analysis available")]
    EmptyInput,

    /// Not even the fallback handler could identify any clause content.
    #[error("No clauses could be identified in the response - unknown format")]
    UnrecognizedFormat,

    /// IO error (reading input files, writing output files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        let err = ParseError::EmptyInput;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_unrecognized_format_display() {
        let err = ParseError::UnrecognizedFormat;
        assert!(err.to_string().contains("unknown format"));
    }
}
