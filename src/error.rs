//! Error types crossing the pipeline boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Post-assembly invariant violation: a null (or non-finite numeric) cell
/// survived normalization. Indicates a record builder defect, not bad user
/// input; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tabular frame cell '{column}' is null after normalization")]
pub struct MalformedRecordError {
    /// Column whose cell failed the null scan.
    pub column: &'static str,
}

/// The sole error type crossing the predict pipeline boundary. Every
/// underlying failure is wrapped with enough context to diagnose it.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to load artifact '{name}' from {path}: {source}")]
    Artifact {
        name: String,
        path: PathBuf,
        #[source]
        source: ort::Error,
    },

    #[error("failed to read preprocessor schema from {path}: {message}")]
    Schema { path: PathBuf, message: String },

    #[error("vocabulary does not match preprocessor schema for '{field}': {detail}")]
    SchemaMismatch { field: String, detail: String },

    #[error("malformed record: {0}")]
    MalformedRecord(#[from] MalformedRecordError),

    #[error("inference failed on artifact '{name}': {source}")]
    Inference {
        name: String,
        #[source]
        source: ort::Error,
    },

    #[error("artifact '{name}' returned no usable output")]
    EmptyOutput { name: String },

    #[error("onnx runtime error: {0}")]
    Runtime(#[from] ort::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_display() {
        let err = MalformedRecordError {
            column: "reading_score",
        };
        assert_eq!(
            err.to_string(),
            "tabular frame cell 'reading_score' is null after normalization"
        );
    }

    #[test]
    fn test_schema_mismatch_display() {
        let err = PipelineError::SchemaMismatch {
            field: "lunch".to_string(),
            detail: "missing from schema".to_string(),
        };
        assert!(err.to_string().contains("lunch"));
        assert!(err.to_string().contains("missing from schema"));
    }
}
