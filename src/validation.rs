use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::NewComment;

const USERNAME: &str = "username";
const COMMENT: &str = "comment";

/// Per-field validation messages, serialized as `{field: [messages]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

/// Checks a parsed request body against the submission schema.
///
/// Both `username` and `comment` must be present as strings of at least one
/// character. Whitespace is not trimmed and unknown fields are ignored.
pub fn validate_submission(body: &Value) -> Result<NewComment, FieldErrors> {
    let mut errors = FieldErrors::default();

    let Some(object) = body.as_object() else {
        errors.add(USERNAME, "Required");
        errors.add(COMMENT, "Required");
        return Err(errors);
    };

    let username = required_string(object, USERNAME, &mut errors);
    let comment = required_string(object, COMMENT, &mut errors);

    match (username, comment) {
        (Some(username), Some(comment)) => Ok(NewComment { username, comment }),
        _ => Err(errors),
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match object.get(field) {
        None => {
            errors.add(field, "Required");
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.add(field, format!("{} is required", field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.add(
                field,
                format!("Expected string, received {}", json_type_name(other)),
            );
            None
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_non_empty_strings() {
        let parsed = validate_submission(&json!({
            "username": "alice",
            "comment": "hello"
        }))
        .unwrap();
        assert_eq!(parsed.username(), "alice");
        assert_eq!(parsed.comment(), "hello");
    }

    #[test]
    fn ignores_unknown_fields() {
        let parsed = validate_submission(&json!({
            "username": "alice",
            "comment": "hello",
            "extra": 42
        }));
        assert!(parsed.is_ok());
    }

    #[test]
    fn whitespace_counts_as_content() {
        let parsed = validate_submission(&json!({"username": " ", "comment": "\n"}));
        assert!(parsed.is_ok());
    }

    #[test]
    fn reports_empty_strings() {
        let errors = validate_submission(&json!({"username": "", "comment": ""})).unwrap_err();
        assert_eq!(
            errors.get("username").unwrap(),
            &["username is required".to_string()]
        );
        assert_eq!(
            errors.get("comment").unwrap(),
            &["comment is required".to_string()]
        );
    }

    #[test]
    fn reports_missing_field_only() {
        let errors = validate_submission(&json!({"username": "alice"})).unwrap_err();
        assert!(errors.get("username").is_none());
        assert_eq!(errors.get("comment").unwrap(), &["Required".to_string()]);
    }

    #[test]
    fn null_is_a_wrong_type() {
        let errors =
            validate_submission(&json!({"username": null, "comment": "hi"})).unwrap_err();
        assert_eq!(
            errors.get("username").unwrap(),
            &["Expected string, received null".to_string()]
        );
    }

    #[test]
    fn reports_wrong_type() {
        let errors =
            validate_submission(&json!({"username": 7, "comment": ["a"]})).unwrap_err();
        assert_eq!(
            errors.get("username").unwrap(),
            &["Expected string, received number".to_string()]
        );
        assert_eq!(
            errors.get("comment").unwrap(),
            &["Expected string, received array".to_string()]
        );
    }

    #[test]
    fn plural_comments_field_is_not_accepted() {
        let errors =
            validate_submission(&json!({"username": "alice", "comments": "hi"})).unwrap_err();
        assert_eq!(errors.get("comment").unwrap(), &["Required".to_string()]);
    }

    #[test]
    fn non_object_body_reports_every_field() {
        for body in [json!([]), json!("text"), json!(null), json!(3)] {
            let errors = validate_submission(&body).unwrap_err();
            assert!(errors.get("username").is_some());
            assert!(errors.get("comment").is_some());
        }
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let errors = validate_submission(&json!({})).unwrap_err();
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({"comment": ["Required"], "username": ["Required"]})
        );
    }
}
