//! Explicit validation of create-bookmark request bodies.
//!
//! Each field is checked independently so one request reports every problem
//! at once, keyed by field name.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::model::CreateBookmark;

pub const REQUIRED: &str = "Required";
pub const INVALID_URL: &str = "Must be a valid URL";

/// Field name to the messages describing what is wrong with it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        FieldErrors(BTreeMap::new())
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(|v| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(kind: &str, got: &Value) -> String {
    format!("Expected {}, received {}", kind, json_type_name(got))
}

pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

pub fn validate_create(body: &Value) -> Result<CreateBookmark, FieldErrors> {
    let Value::Object(fields) = body else {
        return Err(FieldErrors::single("body", expected("object", body)));
    };

    let mut errors = FieldErrors::new();

    let url = match fields.get("url") {
        None | Some(Value::Null) => {
            errors.add("url", REQUIRED);
            None
        }
        Some(Value::String(s)) if is_valid_url(s) => Some(s.clone()),
        Some(Value::String(_)) => {
            errors.add("url", INVALID_URL);
            None
        }
        Some(other) => {
            errors.add("url", expected("string", other));
            None
        }
    };

    let title = match fields.get("title") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.add("title", expected("string", other));
            None
        }
    };

    let tags = match fields.get("tags") {
        None => Vec::new(),
        Some(Value::Array(items)) => {
            let mut tags = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => tags.push(s.clone()),
                    other => errors.add("tags", expected("string", other)),
                }
            }
            tags
        }
        Some(other) => {
            errors.add("tags", expected("array", other));
            Vec::new()
        }
    };

    match url {
        Some(url) if errors.is_empty() => Ok(CreateBookmark { url, title, tags }),
        _ => Err(errors),
    }
}
