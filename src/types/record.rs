//! Validated record types produced by normalization.

use serde::Serialize;

/// A fully validated student record.
///
/// Every categorical field is a member of its vocabulary and both scores are
/// present. Derived once from raw input and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub gender: String,
    pub race_ethnicity: String,
    pub parental_level_of_education: String,
    pub lunch: String,
    pub test_preparation_course: String,
    pub reading_score: f64,
    pub writing_score: f64,
}

/// One defaulting decision made during normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substitution {
    /// Field the substitution was applied to.
    pub field: &'static str,
    /// Value supplied by the caller, if any.
    pub supplied: Option<String>,
    /// Value that was applied instead.
    pub applied: String,
}
