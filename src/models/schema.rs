//! Preprocessor schema sidecar.
//!
//! The fitted preprocessor is exported together with a `schema.json`
//! describing the category order of its encoder and its numeric columns.
//! The pipeline verifies the static vocabulary against this schema at load
//! time and fails fast on mismatch, rather than letting defaulting produce a
//! value the preprocessor would reject. The category order also supplies the
//! ordinal codes used to encode a frame for the preprocessor graph.

use crate::error::PipelineError;
use crate::frame::{Cell, TabularFrame, COLUMN_ORDER};
use crate::vocabulary::Vocabulary;
use serde::Deserialize;
use std::path::Path;

/// Ordered category list for one encoded column.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoricalColumn {
    pub column: String,
    /// Categories in encoder order; the index is the ordinal code.
    pub categories: Vec<String>,
}

/// Schema of the fitted preprocessor.
#[derive(Debug, Clone, Deserialize)]
pub struct PreprocessorSchema {
    pub categorical: Vec<CategoricalColumn>,
    pub numeric: Vec<String>,
}

impl PreprocessorSchema {
    /// Load the schema sidecar from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| PipelineError::Schema {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| PipelineError::Schema {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Verify that the static vocabulary agrees with this schema.
    ///
    /// Every vocabulary field must appear with exactly the same value set
    /// (order may differ; the schema's order wins for encoding), and the
    /// numeric columns must match the frame's numeric columns.
    pub fn verify(&self, vocabulary: &Vocabulary) -> Result<(), PipelineError> {
        for field in vocabulary.fields() {
            let column = self
                .categorical
                .iter()
                .find(|c| c.column == field.name)
                .ok_or_else(|| PipelineError::SchemaMismatch {
                    field: field.name.to_string(),
                    detail: "missing from schema".to_string(),
                })?;

            let mut schema_values: Vec<&str> = column.categories.iter().map(String::as_str).collect();
            let mut vocab_values: Vec<&str> = field.values.to_vec();
            schema_values.sort_unstable();
            vocab_values.sort_unstable();

            if schema_values != vocab_values {
                return Err(PipelineError::SchemaMismatch {
                    field: field.name.to_string(),
                    detail: format!(
                        "vocabulary {:?} vs schema {:?}",
                        field.values, column.categories
                    ),
                });
            }
        }

        if self.categorical.len() != vocabulary.fields().len() {
            return Err(PipelineError::SchemaMismatch {
                field: "categorical".to_string(),
                detail: format!(
                    "schema has {} categorical columns, vocabulary has {}",
                    self.categorical.len(),
                    vocabulary.fields().len()
                ),
            });
        }

        let expected_numeric = &COLUMN_ORDER[vocabulary.fields().len()..];
        if self.numeric != expected_numeric {
            return Err(PipelineError::SchemaMismatch {
                field: "numeric".to_string(),
                detail: format!("schema {:?} vs expected {:?}", self.numeric, expected_numeric),
            });
        }

        Ok(())
    }

    /// Encode a frame into the `[1, 7]` feature vector the preprocessor
    /// graph expects: ordinal codes for text cells, raw values for numeric
    /// cells, in frame column order.
    pub fn encode(&self, frame: &TabularFrame) -> Result<Vec<f32>, PipelineError> {
        let mut encoded = Vec::with_capacity(frame.column_count());

        for (column, cell) in frame.columns().iter().zip(frame.cells()) {
            match cell {
                Cell::Text(value) => {
                    let code = self
                        .categorical
                        .iter()
                        .find(|c| c.column == *column)
                        .and_then(|c| c.categories.iter().position(|m| m == value))
                        .ok_or_else(|| PipelineError::SchemaMismatch {
                            field: column.to_string(),
                            detail: format!("value '{}' has no ordinal code in schema", value),
                        })?;
                    encoded.push(code as f32);
                }
                Cell::Number(value) => encoded.push(*value as f32),
            }
        }

        Ok(encoded)
    }
}
