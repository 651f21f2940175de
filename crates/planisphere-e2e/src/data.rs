//! Fixture data access.
//!
//! Test cases live in YAML files, one per feature area, each holding named
//! top-level groups of case records. Lookups of missing keys return
//! defaults; only an unreadable or malformed file is an error, so suites
//! can probe for optional groups without failing.

use std::path::Path;

use serde_yaml_ng::Value;

use crate::error::{E2eError, E2eResult};

/// One test-case record: a mapping from field name to literal value,
/// identified by its `id` field.
#[derive(Debug, Clone)]
pub struct CaseRecord {
    value: Value,
}

impl CaseRecord {
    /// Wrap a YAML value (expected to be a mapping)
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The record's display name
    #[must_use]
    pub fn id(&self) -> String {
        self.str("id")
    }

    /// Human description of the case
    #[must_use]
    pub fn description(&self) -> String {
        self.str("description")
    }

    /// String field, empty when missing or null
    #[must_use]
    pub fn str(&self, key: &str) -> String {
        self.opt_str(key).unwrap_or_default()
    }

    /// String field, `None` when missing or null. Scalars that YAML parsed
    /// as numbers or booleans are rendered back to their literal form.
    #[must_use]
    pub fn opt_str(&self, key: &str) -> Option<String> {
        match self.value.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Boolean field with a default for missing keys
    #[must_use]
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.value.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Integer field, `None` when missing or not a number
    #[must_use]
    pub fn u32(&self, key: &str) -> Option<u32> {
        self.value
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    }

    /// Whether the key is present and non-null
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        !matches!(self.value.get(key), None | Some(Value::Null))
    }

    /// Nested mapping field, an empty record when missing
    #[must_use]
    pub fn map(&self, key: &str) -> Self {
        let value = self
            .value
            .get(key)
            .cloned()
            .unwrap_or(Value::Mapping(serde_yaml_ng::Mapping::new()));
        Self::new(value)
    }

    /// Sequence-of-strings field, empty when missing
    #[must_use]
    pub fn str_list(&self, key: &str) -> Vec<String> {
        self.value
            .get(key)
            .and_then(Value::as_sequence)
            .map(|seq| {
                seq.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All entries of this mapping in file order, values rendered as
    /// optional strings. Used to walk `expected_messages` blocks.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Option<String>)> {
        let Some(mapping) = self.value.as_mapping() else {
            return Vec::new();
        };
        mapping
            .iter()
            .filter_map(|(k, v)| {
                let key = k.as_str()?.to_string();
                let rendered = match v {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    Value::Bool(b) => Some(b.to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                };
                Some((key, rendered))
            })
            .collect()
    }
}

/// Load and parse one fixture file
pub fn load(path: &Path) -> E2eResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| E2eError::DataFormat {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_yaml_ng::from_str(&text).map_err(|e| E2eError::DataFormat {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Ordered case records of the named group, empty when the group is absent
pub fn cases(path: &Path, key: &str) -> E2eResult<Vec<CaseRecord>> {
    let document = load(path)?;
    let Some(group) = document.get(key) else {
        return Ok(Vec::new());
    };
    let records = group
        .as_sequence()
        .map(|seq| seq.iter().cloned().map(CaseRecord::new).collect())
        .unwrap_or_default();
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r"
login_success_cases:
  - id: premium_user
    description: preset premium member can log in
    email: clark@example.com
    password: password
    expected_header: MyPage
  - id: normal_user
    description: preset normal member can log in
    email: diana@example.com
    password: pass1234
    expected_header: MyPage
login_failure_cases:
  - id: blank_fields
    description: blank credentials are rejected
    email: ''
    password: ''
    expected_messages:
      email: Please fill out this field.
      password: Please fill out this field.
    notification: false
    zoom: 80
    birthday: null
";

    fn write_sample(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn cases_returns_records_in_file_order() {
        let file = write_sample(SAMPLE);
        let records = cases(file.path(), "login_success_cases").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "premium_user");
        assert_eq!(records[1].id(), "normal_user");
        assert_eq!(records[0].str("email"), "clark@example.com");
    }

    #[test]
    fn absent_group_is_an_empty_sequence_not_an_error() {
        let file = write_sample(SAMPLE);
        let records = cases(file.path(), "signup_success_cases").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_file_is_a_parse_failure() {
        let file = write_sample("cases: [unterminated\n  - broken: {");
        let err = cases(file.path(), "cases").unwrap_err();
        assert!(matches!(err, E2eError::DataFormat { .. }));
    }

    #[test]
    fn missing_file_is_a_data_error() {
        let err = load(Path::new("/nonexistent/cases.yaml")).unwrap_err();
        assert!(matches!(err, E2eError::DataFormat { .. }));
    }

    #[test]
    fn typed_lookups_default_on_missing_keys() {
        let file = write_sample(SAMPLE);
        let record = &cases(file.path(), "login_failure_cases").unwrap()[0];
        assert_eq!(record.str("email"), "");
        assert_eq!(record.opt_str("nonexistent"), None);
        assert_eq!(record.opt_str("birthday"), None);
        assert!(!record.bool_or("notification", true));
        assert!(record.bool_or("nonexistent", true));
        assert_eq!(record.u32("zoom"), Some(80));
        assert_eq!(record.u32("email"), None);
        assert!(!record.has("birthday"));
        assert!(record.has("zoom"));
    }

    #[test]
    fn nested_maps_and_entries_preserve_order() {
        let file = write_sample(SAMPLE);
        let record = &cases(file.path(), "login_failure_cases").unwrap()[0];
        let messages = record.map("expected_messages");
        assert_eq!(messages.str("email"), "Please fill out this field.");
        let entries = messages.entries();
        assert_eq!(entries[0].0, "email");
        assert_eq!(entries[1].0, "password");

        // Missing nested map behaves as empty.
        assert!(record.map("expected_data").entries().is_empty());
    }
}
