//! Generic record: one YAML mapping read from a data file.
//!
//! Field access is the only place presence rules are enforced. Required
//! accessors fail with `MissingField`; optional accessors treat an absent key,
//! an explicit `null` and an empty string alike as "not provided".

use std::path::PathBuf;

use serde_yaml_ng::{Mapping, Value};

use crate::errors::CvError;
use crate::records::category::Category;

/// Field every collection record may carry for ordering.
pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    category: Category,
    path: PathBuf,
    fields: Mapping,
}

impl Record {
    pub fn new(category: Category, path: impl Into<PathBuf>, fields: Mapping) -> Self {
        Self {
            category,
            path: path.into(),
            fields,
        }
    }

    /// Sort key. Non-integer ids are ignored like missing ones.
    pub fn id(&self) -> Option<i64> {
        self.value(ID_FIELD).and_then(Value::as_i64)
    }

    pub fn require_text(&self, field: &'static str) -> Result<String, CvError> {
        self.optional_text(field)?
            .ok_or_else(|| self.missing(field))
    }

    /// Empty strings count as absent.
    pub fn optional_text(&self, field: &'static str) -> Result<Option<String>, CvError> {
        match self.value(field) {
            None => Ok(None),
            Some(value) => scalar_text(value)
                .map(|text| Some(text).filter(|t| !t.is_empty()))
                .ok_or_else(|| self.invalid(field, "text")),
        }
    }

    pub fn require_list(&self, field: &'static str) -> Result<Vec<String>, CvError> {
        match self.value(field) {
            None => Err(self.missing(field)),
            Some(value) => self.text_list(field, value),
        }
    }

    /// Absent lists are empty.
    pub fn optional_list(&self, field: &'static str) -> Result<Vec<String>, CvError> {
        match self.value(field) {
            None => Ok(Vec::new()),
            Some(value) => self.text_list(field, value),
        }
    }

    pub fn require_integer(&self, field: &'static str) -> Result<i64, CvError> {
        match self.value(field) {
            None => Err(self.missing(field)),
            Some(value) => value.as_i64().ok_or_else(|| self.invalid(field, "an integer")),
        }
    }

    pub fn optional_integer(&self, field: &'static str) -> Result<Option<i64>, CvError> {
        match self.value(field) {
            None => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| self.invalid(field, "an integer")),
        }
    }

    /// Looks up a field, folding explicit `null` into absence.
    fn value(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    fn text_list(&self, field: &'static str, value: &Value) -> Result<Vec<String>, CvError> {
        let items = value
            .as_sequence()
            .ok_or_else(|| self.invalid(field, "a list of text"))?;
        items
            .iter()
            .map(|item| scalar_text(item).ok_or_else(|| self.invalid(field, "a list of text")))
            .collect()
    }

    fn missing(&self, field: &'static str) -> CvError {
        CvError::MissingField {
            category: self.category,
            field,
            path: self.path.clone(),
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> CvError {
        CvError::InvalidField {
            category: self.category,
            field,
            expected,
            path: self.path.clone(),
        }
    }
}

/// Textual form of a YAML scalar. Date tokens such as `year: 2021` arrive as numbers.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(yaml: &str) -> Record {
        let fields: Mapping = serde_yaml_ng::from_str(yaml).unwrap();
        Record::new(Category::Experience, "data/experience/jobs.yaml", fields)
    }

    #[test]
    fn test_require_text_present() {
        let r = record("company: Bodil Energi");
        assert_eq!(r.require_text("company").unwrap(), "Bodil Energi");
    }

    #[test]
    fn test_require_text_missing_names_field() {
        let r = record("title: Engineer");
        match r.require_text("company") {
            Err(CvError::MissingField {
                category, field, ..
            }) => {
                assert_eq!(category, Category::Experience);
                assert_eq!(field, "company");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_numeric_scalar_renders_as_text() {
        let r = record("start: 2022\nend: Present");
        assert_eq!(r.require_text("start").unwrap(), "2022");
        assert_eq!(r.require_text("end").unwrap(), "Present");
    }

    #[test]
    fn test_optional_text_treats_empty_and_null_as_absent() {
        let r = record("a: ''\nb: ~\nc: Senior Engineer");
        assert_eq!(r.optional_text("a").unwrap(), None);
        assert_eq!(r.optional_text("b").unwrap(), None);
        assert_eq!(r.optional_text("missing").unwrap(), None);
        assert_eq!(
            r.optional_text("c").unwrap().as_deref(),
            Some("Senior Engineer")
        );
    }

    #[test]
    fn test_required_empty_string_is_missing() {
        let r = record("company: ''");
        assert!(matches!(
            r.require_text("company"),
            Err(CvError::MissingField { .. })
        ));
    }

    #[test]
    fn test_text_rejects_mapping() {
        let r = record("company:\n  name: Acme");
        assert!(matches!(
            r.require_text("company"),
            Err(CvError::InvalidField { field: "company", .. })
        ));
    }

    #[test]
    fn test_list_preserves_source_order() {
        let r = record("skills: [Forecasting, Control, 42]");
        assert_eq!(
            r.require_list("skills").unwrap(),
            vec!["Forecasting", "Control", "42"]
        );
    }

    #[test]
    fn test_list_rejects_plain_string() {
        let r = record("skills: Forecasting");
        assert!(matches!(
            r.require_list("skills"),
            Err(CvError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_optional_list_defaults_to_empty() {
        let r = record("skills: []");
        assert!(r.optional_list("tools").unwrap().is_empty());
        assert!(r.require_list("skills").unwrap().is_empty());
    }

    #[test]
    fn test_id_ignores_non_integers() {
        assert_eq!(record("id: 7").id(), Some(7));
        assert_eq!(record("id: seven").id(), None);
        assert_eq!(record("company: Acme").id(), None);
    }

    #[test]
    fn test_optional_integer_rejects_text() {
        let r = record("education_id: first");
        assert!(matches!(
            r.optional_integer("education_id"),
            Err(CvError::InvalidField { expected: "an integer", .. })
        ));
    }
}
