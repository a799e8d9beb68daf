//! Normalization of list responses at the API boundary.
//!
//! The portal endpoints disagree on where the list lives: some wrap it as
//! `{ success, data: [...] }`, some nest it one level deeper under a named
//! key, and the class list comes back as a bare array with no envelope at
//! all. Each endpoint declares its [`ListShape`] once and everything past
//! this module only sees a [`ListPage`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::FetchError;

/// Where an endpoint keeps its list of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// The body itself, or its `data` key, is the array
    Bare,
    /// The array sits at `data.<name>`
    Field(&'static str),
}

/// A normalized list response: records in server order plus the optional
/// aggregates that came with them.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<R, S> {
    pub records: Vec<R>,
    pub summary: Option<S>,
}

impl<R, S> Default for ListPage<R, S> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            summary: None,
        }
    }
}

/// Turn a decoded JSON body into a [`ListPage`].
///
/// A missing or `null` list is an empty page, never an error. The summary is
/// only taken from a top-level `summary` object.
pub fn normalize_list<R, S>(body: Value, shape: ListShape) -> Result<ListPage<R, S>, FetchError>
where
    R: DeserializeOwned,
    S: DeserializeOwned,
{
    match body {
        Value::Array(items) => Ok(ListPage {
            records: decode_records(items)?,
            summary: None,
        }),
        Value::Object(mut envelope) => {
            if envelope.get("success").and_then(Value::as_bool) == Some(false) {
                return Err(FetchError::Rejected(rejection_reason(&envelope)));
            }

            let items = take_list(envelope.remove("data"), shape)?;
            let summary = match envelope.remove("summary") {
                Some(summary @ Value::Object(_)) => Some(
                    serde_json::from_value(summary)
                        .map_err(|e| FetchError::Decode(format!("summary: {}", e)))?,
                ),
                _ => None,
            };

            Ok(ListPage {
                records: decode_records(items)?,
                summary,
            })
        }
        other => Err(FetchError::Decode(format!(
            "expected an object or an array, got {}",
            json_kind(&other)
        ))),
    }
}

fn take_list(data: Option<Value>, shape: ListShape) -> Result<Vec<Value>, FetchError> {
    match data {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(Value::Object(mut inner)) => match shape {
            ListShape::Bare => Ok(Vec::new()),
            ListShape::Field(field) => match inner.remove(field) {
                None | Some(Value::Null) => Ok(Vec::new()),
                Some(Value::Array(items)) => Ok(items),
                Some(other) => Err(FetchError::Decode(format!(
                    "`data.{}` should be an array, got {}",
                    field,
                    json_kind(&other)
                ))),
            },
        },
        Some(other) => Err(FetchError::Decode(format!(
            "`data` should be an array or an object, got {}",
            json_kind(&other)
        ))),
    }
}

fn decode_records<R: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<R>, FetchError> {
    items
        .into_iter()
        .enumerate()
        .filter(|(index, item)| {
            if item.is_null() {
                log::debug!("Skipping null record at index {}", index);
            }
            !item.is_null()
        })
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| FetchError::Decode(format!("record {}: {}", index, e)))
        })
        .collect()
}

fn rejection_reason(envelope: &Map<String, Value>) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| envelope.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
