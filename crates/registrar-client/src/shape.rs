//! Response envelopes.
//!
//! Most resources answer with bare JSON (an array for lists, the record
//! or a short object for mutations). Faculty endpoints wrap every answer
//! in `{success, message?, faculty?}`, and `success: false` is a failure
//! even on a 2xx status.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Extracts the human-readable failure text from a body: `error` first,
/// then `message`.
pub fn message_of(body: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// How a resource's responses are wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Plain JSON
    Bare,
    /// `{success, message?, <list_key>?}`
    Envelope {
        /// Key holding the collection in list responses
        list_key: &'static str,
    },
}

impl ResponseShape {
    /// Fails with [`Error::Rejected`] if an envelope reports `success: false`.
    ///
    /// An envelope without a `success` field is accepted.
    pub fn check_outcome(&self, body: &Value) -> Result<()> {
        match self {
            ResponseShape::Bare => Ok(()),
            ResponseShape::Envelope { .. } => {
                if body.get("success").and_then(Value::as_bool) == Some(false) {
                    Err(Error::Rejected {
                        message: message_of(body),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// The raw records of a list response.
    pub fn unwrap_list(&self, body: Value) -> Result<Vec<Value>> {
        self.check_outcome(&body)?;
        let list = match self {
            ResponseShape::Bare => body,
            ResponseShape::Envelope { list_key } => match body {
                Value::Object(mut map) => map.remove(*list_key).unwrap_or(Value::Null),
                other => {
                    return Err(Error::UnexpectedShape(format!(
                        "expected an envelope object, got {}",
                        kind_of(&other)
                    )));
                }
            },
        };
        match list {
            Value::Array(items) => Ok(items),
            Value::Null => Ok(Vec::new()),
            other => Err(Error::UnexpectedShape(format!(
                "expected a list, got {}",
                kind_of(&other)
            ))),
        }
    }

    /// Decodes a list response into typed records.
    pub fn decode_list<T: DeserializeOwned>(&self, body: Value) -> Result<Vec<T>> {
        self.unwrap_list(body)?
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(Error::from))
            .collect()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
