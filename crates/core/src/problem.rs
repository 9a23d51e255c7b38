//! Problem records, status values, and creation-request validation.
//!
//! A [`ProblemRecord`] is one documented development issue with its
//! resolution. New records are built from an untyped JSON body through
//! [`validate_new_problem`], which checks required fields in a fixed order
//! so the first missing field reported is deterministic.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::{iso_date, ProblemId, Timestamp};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Status string for an issue that has been fixed.
pub const STATUS_RESOLVED: &str = "resolved";
/// Status string for an issue still being worked on.
pub const STATUS_ONGOING: &str = "ongoing";

/// Resolution status of a problem.
///
/// Unknown strings are kept verbatim in [`ProblemStatus::Other`] so a record
/// survives a round trip unchanged; consumers treat them as not resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProblemStatus {
    Resolved,
    Ongoing,
    Other(String),
}

impl ProblemStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProblemStatus::Resolved => STATUS_RESOLVED,
            ProblemStatus::Ongoing => STATUS_ONGOING,
            ProblemStatus::Other(s) => s,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ProblemStatus::Resolved)
    }
}

impl From<String> for ProblemStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            STATUS_RESOLVED => ProblemStatus::Resolved,
            STATUS_ONGOING => ProblemStatus::Ongoing,
            _ => ProblemStatus::Other(s),
        }
    }
}

impl From<ProblemStatus> for String {
    fn from(status: ProblemStatus) -> Self {
        match status {
            ProblemStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One documented issue and its solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub id: ProblemId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub solution: String,
    pub status: ProblemStatus,
    /// `YYYY-MM-DD`.
    pub date: String,
}

impl ProblemRecord {
    /// Check that every required text field is populated.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("title", self.title.as_str()),
            ("category", self.category.as_str()),
            ("description", self.description.as_str()),
            ("solution", self.solution.as_str()),
            ("status", self.status.as_str()),
        ];
        for (name, value) in fields {
            if is_blank(value) {
                return Err(CoreError::MissingField(name));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Required fields of a creation request, in validation order.
pub const REQUIRED_FIELDS: [&str; 5] = ["title", "category", "description", "solution", "status"];

/// A validated creation request.
///
/// Carries the required fields typed, plus the whole submitted object so
/// that fields outside the required set are echoed back on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProblem {
    pub title: String,
    pub category: String,
    pub description: String,
    pub solution: String,
    pub status: ProblemStatus,
    body: Map<String, Value>,
}

impl NewProblem {
    /// Build the created record as of `at`, shaped `{ id, ...body, date }`.
    ///
    /// The generated id is `at` in Unix milliseconds, so two requests in the
    /// same millisecond get the same id; a client-sent `id` replaces it. The
    /// server `date` always wins. Nothing is persisted.
    pub fn into_created(self, at: Timestamp) -> Map<String, Value> {
        let mut record = Map::with_capacity(self.body.len() + 2);
        record.insert("id".to_string(), Value::from(at.timestamp_millis()));
        record.extend(self.body);
        record.insert("date".to_string(), Value::from(iso_date(at)));
        record
    }
}

/// Whether a JSON value counts as present under JavaScript truthiness rules.
///
/// `null`, `false`, `0`, and `""` are treated as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whitespace-only text counts as empty for every required field, both in
/// creation bodies and in dataset records.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate a creation body against [`REQUIRED_FIELDS`].
///
/// A body that is not a JSON object has every field missing, so the error
/// names `title`. Fields are checked one at a time in order: a missing or
/// blank field stops validation before later fields are type-checked.
pub fn validate_new_problem(body: &Value) -> Result<NewProblem, CoreError> {
    let Some(object) = body.as_object() else {
        return Err(CoreError::MissingField(REQUIRED_FIELDS[0]));
    };

    let mut values: Vec<String> = Vec::with_capacity(REQUIRED_FIELDS.len());

    for field in REQUIRED_FIELDS {
        let value = object.get(field).filter(|v| is_truthy(v));
        match value {
            None => return Err(CoreError::MissingField(field)),
            Some(Value::String(s)) if is_blank(s) => return Err(CoreError::MissingField(field)),
            Some(Value::String(s)) => values.push(s.clone()),
            Some(_) => return Err(CoreError::InvalidField(field)),
        }
    }

    let mut values = values.into_iter();
    let mut next = || values.next().unwrap_or_default();

    Ok(NewProblem {
        title: next(),
        category: next(),
        description: next(),
        solution: next(),
        status: ProblemStatus::from(next()),
        body: object.clone(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "title": "X",
            "category": "Y",
            "description": "Z",
            "solution": "W",
            "status": "resolved",
        })
    }

    #[test]
    fn known_statuses_parse_to_variants() {
        assert_eq!(ProblemStatus::from("resolved".to_string()), ProblemStatus::Resolved);
        assert_eq!(ProblemStatus::from("ongoing".to_string()), ProblemStatus::Ongoing);
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status: ProblemStatus = serde_json::from_value(json!("blocked")).unwrap();
        assert_eq!(status, ProblemStatus::Other("blocked".into()));
        assert!(!status.is_resolved());
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("blocked"));
    }

    #[test]
    fn status_matching_is_case_sensitive() {
        assert_matches!(ProblemStatus::from("Resolved".to_string()), ProblemStatus::Other(_));
    }

    #[test]
    fn truthiness_follows_javascript() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("a")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn full_body_validates() {
        let problem = validate_new_problem(&full_body()).unwrap();
        assert_eq!(problem.title, "X");
        assert_eq!(problem.solution, "W");
        assert_eq!(problem.status, ProblemStatus::Resolved);
    }

    #[test]
    fn each_missing_field_is_named() {
        for field in REQUIRED_FIELDS {
            let mut body = full_body();
            body.as_object_mut().unwrap().remove(field);
            assert_matches!(
                validate_new_problem(&body),
                Err(CoreError::MissingField(name)) if name == field
            );
        }
    }

    #[test]
    fn first_missing_field_wins() {
        let body = json!({ "title": "X", "status": "ongoing" });
        let err = validate_new_problem(&body).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: category");
    }

    #[test]
    fn missing_status_is_reported() {
        let body = json!({ "title": "X", "category": "Y", "description": "Z", "solution": "W" });
        let err = validate_new_problem(&body).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: status");
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let mut body = full_body();
        body["description"] = json!("");
        assert_matches!(
            validate_new_problem(&body),
            Err(CoreError::MissingField("description"))
        );
    }

    #[test]
    fn non_object_body_reports_title() {
        assert_matches!(
            validate_new_problem(&json!([1, 2, 3])),
            Err(CoreError::MissingField("title"))
        );
        assert_matches!(
            validate_new_problem(&json!("text")),
            Err(CoreError::MissingField("title"))
        );
    }

    #[test]
    fn non_string_field_is_invalid() {
        let mut body = full_body();
        body["category"] = json!(42);
        assert_matches!(
            validate_new_problem(&body),
            Err(CoreError::InvalidField("category"))
        );
    }

    #[test]
    fn blank_string_counts_as_missing() {
        let mut body = full_body();
        body["title"] = json!("   ");
        assert_matches!(
            validate_new_problem(&body),
            Err(CoreError::MissingField("title"))
        );
    }

    #[test]
    fn created_record_has_generated_id_and_date() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap();
        let record = validate_new_problem(&full_body()).unwrap().into_created(at);
        assert_eq!(record["id"], at.timestamp_millis());
        assert_eq!(record["date"], "2024-03-09");
        assert_eq!(record["title"], "X");
    }

    #[test]
    fn created_record_echoes_extra_fields_and_client_id() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap();
        let mut body = full_body();
        body["id"] = json!(42);
        body["tags"] = json!(["ci"]);
        body["date"] = json!("1999-01-01");

        let record = validate_new_problem(&body).unwrap().into_created(at);
        assert_eq!(record["id"], 42);
        assert_eq!(record["tags"], json!(["ci"]));
        assert_eq!(record["date"], "2024-03-09");

        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys.first(), Some(&"id"));
    }

    #[test]
    fn blank_dataset_title_fails_validation() {
        let record = ProblemRecord {
            id: 1,
            title: "  ".into(),
            category: "c".into(),
            description: "d".into(),
            solution: "s".into(),
            status: ProblemStatus::Ongoing,
            date: "2024-03-09".into(),
        };
        assert_matches!(record.validate(), Err(CoreError::MissingField("title")));
    }
}
