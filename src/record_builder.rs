//! Normalization of raw student input against the category vocabulary.
//!
//! Mirrors the validation done when the preprocessor was fitted: every
//! categorical value outside the vocabulary and every absent score is
//! replaced by a fixed default, so downstream code never observes a missing
//! or out-of-vocabulary value.

use crate::types::input::StudentInput;
use crate::types::record::{NormalizedRecord, Substitution};
use crate::vocabulary::{Vocabulary, NUMERIC_DEFAULT};
use tracing::debug;

/// Outcome of normalizing one raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    /// The validated record.
    pub record: NormalizedRecord,
    /// Every defaulting decision that was applied, in field order.
    pub substitutions: Vec<Substitution>,
}

/// Builds validated records from raw input. Never fails: every input,
/// however malformed, maps to a valid record via defaulting.
pub struct RecordBuilder {
    vocabulary: Vocabulary,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::new(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Normalize a raw input into a validated record.
    ///
    /// Categorical fields resolve to the supplied value on an exact
    /// vocabulary match, otherwise to the field default. Scores pass through
    /// unchanged when present and fall back to 50 when absent. Each applied
    /// default is recorded in the returned substitution list.
    pub fn build(&self, raw: &StudentInput) -> Normalization {
        let mut substitutions = Vec::new();

        let raw_categoricals = [
            raw.gender.as_deref(),
            raw.race_ethnicity.as_deref(),
            raw.parental_level_of_education.as_deref(),
            raw.lunch.as_deref(),
            raw.test_preparation_course.as_deref(),
        ];

        let mut resolved = [""; 5];
        for (i, field) in self.vocabulary.fields().iter().enumerate() {
            let (value, substituted) = field.resolve(raw_categoricals[i]);
            if substituted {
                substitutions.push(Substitution {
                    field: field.name,
                    supplied: raw_categoricals[i].map(str::to_string),
                    applied: value.to_string(),
                });
            }
            debug!(field = field.name, value, substituted, "Resolved categorical field");
            resolved[i] = value;
        }

        let reading_score = self.resolve_score("reading_score", raw.reading_score, &mut substitutions);
        let writing_score = self.resolve_score("writing_score", raw.writing_score, &mut substitutions);

        Normalization {
            record: NormalizedRecord {
                gender: resolved[0].to_string(),
                race_ethnicity: resolved[1].to_string(),
                parental_level_of_education: resolved[2].to_string(),
                lunch: resolved[3].to_string(),
                test_preparation_course: resolved[4].to_string(),
                reading_score,
                writing_score,
            },
            substitutions,
        }
    }

    fn resolve_score(
        &self,
        field: &'static str,
        raw: Option<f64>,
        substitutions: &mut Vec<Substitution>,
    ) -> f64 {
        match raw {
            Some(value) => {
                debug!(field, value, substituted = false, "Resolved score");
                value
            }
            None => {
                substitutions.push(Substitution {
                    field,
                    supplied: None,
                    applied: NUMERIC_DEFAULT.to_string(),
                });
                debug!(field, value = NUMERIC_DEFAULT, substituted = true, "Resolved score");
                NUMERIC_DEFAULT
            }
        }
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(
        gender: Option<&str>,
        race: Option<&str>,
        education: Option<&str>,
        lunch: Option<&str>,
        prep: Option<&str>,
        reading: Option<f64>,
        writing: Option<f64>,
    ) -> StudentInput {
        StudentInput {
            gender: gender.map(str::to_string),
            race_ethnicity: race.map(str::to_string),
            parental_level_of_education: education.map(str::to_string),
            lunch: lunch.map(str::to_string),
            test_preparation_course: prep.map(str::to_string),
            reading_score: reading,
            writing_score: writing,
        }
    }

    #[test]
    fn test_invalid_and_missing_fields_get_defaults() {
        let builder = RecordBuilder::new();
        let input = raw(
            None,
            Some("group Z"),
            Some("phd"),
            Some("standard"),
            Some("completed"),
            Some(80.0),
            None,
        );

        let normalization = builder.build(&input);
        let record = normalization.record;

        assert_eq!(record.gender, "female");
        assert_eq!(record.race_ethnicity, "group C");
        assert_eq!(record.parental_level_of_education, "some college");
        assert_eq!(record.lunch, "standard");
        assert_eq!(record.test_preparation_course, "completed");
        assert_eq!(record.reading_score, 80.0);
        assert_eq!(record.writing_score, 50.0);
    }

    #[test]
    fn test_valid_input_passes_through_unchanged() {
        let builder = RecordBuilder::new();
        let input = raw(
            Some("male"),
            Some("group D"),
            Some("bachelor's degree"),
            Some("free/reduced"),
            Some("none"),
            Some(91.0),
            Some(85.0),
        );

        let normalization = builder.build(&input);
        let record = normalization.record;

        assert_eq!(record.gender, "male");
        assert_eq!(record.race_ethnicity, "group D");
        assert_eq!(record.parental_level_of_education, "bachelor's degree");
        assert_eq!(record.lunch, "free/reduced");
        assert_eq!(record.test_preparation_course, "none");
        assert_eq!(record.reading_score, 91.0);
        assert_eq!(record.writing_score, 85.0);
        assert!(normalization.substitutions.is_empty());
    }

    #[test]
    fn test_substitutions_record_supplied_and_applied_values() {
        let builder = RecordBuilder::new();
        let input = raw(
            Some("Male"),
            None,
            Some("some college"),
            Some("standard"),
            Some("none"),
            None,
            Some(60.0),
        );

        let normalization = builder.build(&input);
        let subs = normalization.substitutions;

        assert_eq!(subs.len(), 3);
        assert_eq!(subs[0].field, "gender");
        assert_eq!(subs[0].supplied.as_deref(), Some("Male"));
        assert_eq!(subs[0].applied, "female");
        assert_eq!(subs[1].field, "race_ethnicity");
        assert_eq!(subs[1].supplied, None);
        assert_eq!(subs[2].field, "reading_score");
        assert_eq!(subs[2].applied, "50");
    }

    #[test]
    fn test_defaults_come_from_vocabulary() {
        let builder = RecordBuilder::new();
        let record = builder.build(&StudentInput::default()).record;
        let vocab = builder.vocabulary();

        assert_eq!(record.gender, vocab.field("gender").unwrap().default);
        assert_eq!(record.race_ethnicity, vocab.field("race_ethnicity").unwrap().default);
        assert_eq!(
            record.parental_level_of_education,
            vocab.field("parental_level_of_education").unwrap().default
        );
        assert_eq!(record.lunch, vocab.field("lunch").unwrap().default);
        assert_eq!(
            record.test_preparation_course,
            vocab.field("test_preparation_course").unwrap().default
        );
    }

    #[test]
    fn test_empty_string_is_out_of_vocabulary() {
        let builder = RecordBuilder::new();
        let input = raw(Some(""), Some(""), Some(""), Some(""), Some(""), None, None);

        let record = builder.build(&input).record;

        assert_eq!(record.gender, "female");
        assert_eq!(record.race_ethnicity, "group C");
        assert_eq!(record.parental_level_of_education, "some college");
        assert_eq!(record.lunch, "standard");
        assert_eq!(record.test_preparation_course, "none");
    }

    #[test]
    fn test_present_score_passes_through_even_when_out_of_range() {
        let builder = RecordBuilder::new();
        let input = raw(None, None, None, None, None, Some(-3.0), Some(250.0));

        let record = builder.build(&input).record;

        assert_eq!(record.reading_score, -3.0);
        assert_eq!(record.writing_score, 250.0);
    }
}
