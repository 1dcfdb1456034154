//! Prompt records: one page of the book and its status flags.

use serde_json::{Map, Value};

/// A single prompt from the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Page number the prompt belongs to.
    pub page: i64,
    /// The prompt text.
    pub prompt: String,
    /// Work on the page has begun.
    pub started: bool,
    /// Work on the page is finished. Takes precedence over `started`.
    pub completed: bool,
}

/// Why a JSON value could not become a [`Prompt`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}`: expected {expected}, found {found}")]
    TypeCoercion {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl Prompt {
    /// Parse a prompt from a JSON object.
    ///
    /// All four keys are required. Values are coerced rather than matched
    /// exactly: `page` accepts integers, floats (truncated), booleans and
    /// integer strings; `prompt` accepts strings, numbers and booleans; the
    /// two flags follow JSON truthiness and never fail.
    pub fn from_json(object: &Map<String, Value>) -> Result<Self, RecordError> {
        let page = coerce_page(require(object, "page")?)?;
        let prompt = coerce_text("prompt", require(object, "prompt")?)?;
        let started = truthy(require(object, "started")?);
        let completed = truthy(require(object, "completed")?);

        Ok(Self {
            page,
            prompt,
            started,
            completed,
        })
    }

    /// Parse a prompt from any JSON value, rejecting non-objects.
    pub fn from_value(value: &Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(object) => Self::from_json(object),
            other => Err(mismatch("record", "object", other)),
        }
    }
}

fn require<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, RecordError> {
    object.get(field).ok_or(RecordError::MissingField(field))
}

/// Bounds of `i64` as floats; the upper bound is exclusive.
const I64_FLOAT_RANGE: (f64, f64) = (-9_223_372_036_854_775_808.0, 9_223_372_036_854_775_808.0);

#[allow(clippy::cast_possible_truncation)] // Range is checked before the cast.
fn coerce_page(value: &Value) -> Result<i64, RecordError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            let (min, max) = I64_FLOAT_RANGE;
            match n.as_f64().map(f64::trunc) {
                Some(f) if f >= min && f < max => Ok(f as i64),
                _ => Err(mismatch("page", "integer", value)),
            }
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| mismatch("page", "integer", value)),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(mismatch("page", "integer", value))
        }
    }
}

fn coerce_text(field: &'static str, value: &Value) -> Result<String, RecordError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(mismatch(field, "text", value)),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn mismatch(field: &'static str, expected: &'static str, found: &Value) -> RecordError {
    let found = match found {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    };
    RecordError::TypeCoercion {
        field,
        expected,
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn parse(value: Value) -> Result<Prompt, RecordError> {
        Prompt::from_value(&value)
    }

    #[test]
    fn parses_well_formed_record() {
        let prompt = parse(json!({
            "page": 12,
            "prompt": "Draw a line",
            "started": true,
            "completed": false,
        }))
        .unwrap();

        assert_eq!(
            prompt,
            Prompt {
                page: 12,
                prompt: "Draw a line".into(),
                started: true,
                completed: false,
            }
        );
    }

    #[test]
    fn missing_completed_is_reported() {
        let err = parse(json!({ "page": 1, "prompt": "A", "started": false })).unwrap_err();
        assert_eq!(err, RecordError::MissingField("completed"));
    }

    #[test]
    fn missing_fields_are_checked_in_declaration_order() {
        let err = parse(json!({})).unwrap_err();
        assert_eq!(err, RecordError::MissingField("page"));
    }

    #[test]
    fn non_numeric_page_fails_coercion() {
        let err = parse(json!({
            "page": "twelve",
            "prompt": "A",
            "started": false,
            "completed": false,
        }))
        .unwrap_err();

        assert!(matches!(err, RecordError::TypeCoercion { field: "page", .. }));
    }

    #[test]
    fn page_coercions() {
        let cases = [
            (json!("  7 "), 7),
            (json!(3.9), 3),
            (json!(-2.5), -2),
            (json!(true), 1),
        ];
        for (page, expected) in cases {
            let prompt = parse(json!({
                "page": page,
                "prompt": "A",
                "started": false,
                "completed": false,
            }))
            .unwrap();
            assert_eq!(prompt.page, expected);
        }
    }

    #[test]
    fn null_page_fails_coercion() {
        let err = parse(json!({
            "page": null,
            "prompt": "A",
            "started": false,
            "completed": false,
        }))
        .unwrap_err();

        assert_eq!(err.to_string(), "field `page`: expected integer, found null");
    }

    #[test]
    fn prompt_text_accepts_scalars() {
        let prompt = parse(json!({
            "page": 1,
            "prompt": 42,
            "started": false,
            "completed": false,
        }))
        .unwrap();
        assert_eq!(prompt.prompt, "42");

        let err = parse(json!({
            "page": 1,
            "prompt": ["a"],
            "started": false,
            "completed": false,
        }))
        .unwrap_err();
        assert!(matches!(err, RecordError::TypeCoercion { field: "prompt", .. }));
    }

    #[test]
    fn flags_follow_truthiness() {
        let prompt = parse(json!({
            "page": 1,
            "prompt": "A",
            "started": "yes",
            "completed": 0,
        }))
        .unwrap();
        assert!(prompt.started);
        assert!(!prompt.completed);

        let prompt = parse(json!({
            "page": 1,
            "prompt": "A",
            "started": null,
            "completed": [1],
        }))
        .unwrap();
        assert!(!prompt.started);
        assert!(prompt.completed);
    }

    #[test]
    fn non_object_record_is_rejected() {
        let err = parse(json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            RecordError::TypeCoercion {
                field: "record",
                expected: "object",
                found: "array".into(),
            }
        );
    }
}
