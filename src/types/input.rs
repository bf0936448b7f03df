//! Raw, untrusted input for one student record.

use serde::{Deserialize, Serialize};

/// One student record as supplied by the caller.
///
/// Every field is optional: absence or an out-of-vocabulary value triggers
/// defaulting in the record builder rather than failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentInput {
    pub gender: Option<String>,
    pub race_ethnicity: Option<String>,
    pub parental_level_of_education: Option<String>,
    pub lunch: Option<String>,
    pub test_preparation_course: Option<String>,
    pub reading_score: Option<f64>,
    pub writing_score: Option<f64>,
}
