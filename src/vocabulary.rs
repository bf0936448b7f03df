//! Fixed category vocabulary for the five categorical input fields.
//!
//! Each field has a closed set of accepted values and a designated default
//! used when the supplied value is absent or not a member. Matching is an
//! exact, case-sensitive string comparison.

/// One categorical field: its accepted values and its fallback default.
#[derive(Debug, Clone, Copy)]
pub struct CategoricalField {
    /// Column name, matching the frame column order.
    pub name: &'static str,
    /// Closed set of accepted values.
    pub values: &'static [&'static str],
    /// Default substituted for absent or out-of-vocabulary input.
    pub default: &'static str,
}

impl CategoricalField {
    /// Resolve a raw value against this field's vocabulary.
    ///
    /// Returns the matching vocabulary member when the value is present and
    /// a member, otherwise the field default. The flag is true when a
    /// substitution was applied.
    pub fn resolve(&self, raw: Option<&str>) -> (&'static str, bool) {
        match raw.and_then(|v| self.values.iter().find(|m| **m == v)) {
            Some(member) => (member, false),
            None => (self.default, true),
        }
    }

    /// Whether the value is a member of this field's vocabulary.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

const GENDER: CategoricalField = CategoricalField {
    name: "gender",
    values: &["male", "female"],
    default: "female",
};

const RACE_ETHNICITY: CategoricalField = CategoricalField {
    name: "race_ethnicity",
    values: &["group A", "group B", "group C", "group D", "group E"],
    default: "group C",
};

const PARENTAL_LEVEL_OF_EDUCATION: CategoricalField = CategoricalField {
    name: "parental_level_of_education",
    values: &[
        "some high school",
        "high school",
        "some college",
        "associate's degree",
        "bachelor's degree",
        "master's degree",
    ],
    default: "some college",
};

const LUNCH: CategoricalField = CategoricalField {
    name: "lunch",
    values: &["standard", "free/reduced"],
    default: "standard",
};

const TEST_PREPARATION_COURSE: CategoricalField = CategoricalField {
    name: "test_preparation_course",
    values: &["none", "completed"],
    default: "none",
};

/// Default substituted for an absent numeric score.
pub const NUMERIC_DEFAULT: f64 = 50.0;

/// The full vocabulary: the five categorical fields in frame column order.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    fields: [CategoricalField; 5],
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            fields: [
                GENDER,
                RACE_ETHNICITY,
                PARENTAL_LEVEL_OF_EDUCATION,
                LUNCH,
                TEST_PREPARATION_COURSE,
            ],
        }
    }

    /// Fields in frame column order.
    pub fn fields(&self) -> &[CategoricalField; 5] {
        &self.fields
    }

    /// Look up a field by column name.
    pub fn field(&self, name: &str) -> Option<&CategoricalField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_passes_through() {
        let vocab = Vocabulary::new();
        let field = vocab.field("lunch").unwrap();
        assert_eq!(field.resolve(Some("free/reduced")), ("free/reduced", false));
    }

    #[test]
    fn test_non_member_falls_back_to_default() {
        let vocab = Vocabulary::new();
        let field = vocab.field("race_ethnicity").unwrap();
        assert_eq!(field.resolve(Some("group Z")), ("group C", true));
        assert_eq!(field.resolve(Some("")), ("group C", true));
        assert_eq!(field.resolve(None), ("group C", true));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let vocab = Vocabulary::new();
        let field = vocab.field("gender").unwrap();
        assert_eq!(field.resolve(Some("Male")), ("female", true));
        assert_eq!(field.resolve(Some("male")), ("male", false));
    }

    #[test]
    fn test_field_order_matches_frame_columns() {
        let vocab = Vocabulary::new();
        let names: Vec<&str> = vocab.fields().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "gender",
                "race_ethnicity",
                "parental_level_of_education",
                "lunch",
                "test_preparation_course"
            ]
        );
    }

    #[test]
    fn test_every_default_is_a_member() {
        let vocab = Vocabulary::new();
        for field in vocab.fields() {
            assert!(field.contains(field.default), "{}", field.name);
        }
    }
}
