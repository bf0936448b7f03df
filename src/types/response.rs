//! Prediction report returned to the caller.

use crate::types::record::Substitution;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of one prediction request.
///
/// Carries the predicted score, the raw model outputs, and every defaulting
/// decision made while normalizing the input, so silent substitutions are
/// visible to the caller rather than print-only.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    /// Predicted math score (first model output).
    pub predicted_score: f32,

    /// Raw model outputs, unmodified.
    pub raw_outputs: Vec<f32>,

    /// Defaulting decisions applied during normalization.
    pub substitutions: Vec<Substitution>,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,
}

impl PredictionReport {
    pub fn new(predicted_score: f32, raw_outputs: Vec<f32>, substitutions: Vec<Substitution>) -> Self {
        Self {
            predicted_score,
            raw_outputs,
            substitutions,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialization() {
        let report = PredictionReport::new(
            67.5,
            vec![67.5],
            vec![Substitution {
                field: "gender",
                supplied: None,
                applied: "female".to_string(),
            }],
        );

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"predicted_score\":67.5"));
        assert!(json.contains("\"field\":\"gender\""));
    }
}
