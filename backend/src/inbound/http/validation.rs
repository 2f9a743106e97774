//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies are read as raw bytes and decoded here so that malformed
//! JSON and missing fields surface as domain errors under each handler's own
//! status policy, instead of actix's default extractor responses.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{Amount, Error, OrderId};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::validation(format!("O '{}' é obrigatório.", field.as_str()))
}

pub(crate) fn invalid_field_error(field: FieldName, reason: impl std::fmt::Display) -> Error {
    Error::validation(format!("O campo '{}' é inválido: {reason}", field.as_str()))
}

/// Decode a JSON request body into `T`.
pub(crate) fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body)
        .map_err(|err| Error::malformed_request(format!("Corpo da requisição inválido: {err}")))
}

/// Require a field to be present.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Accept an order identifier given as a JSON string or number.
///
/// Numbers are rendered the way a JavaScript template literal would render
/// them, so `42` and `42.0` both become `"42"`. Missing, `null` and blank
/// values are reported as missing.
pub(crate) fn parse_order_id(value: Option<Value>, field: FieldName) -> Result<OrderId, Error> {
    let raw = match value {
        None | Some(Value::Null) => return Err(missing_field_error(field)),
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => Amount::from_number(number).to_string(),
        Some(other) => {
            return Err(invalid_field_error(
                field,
                format_args!("esperado texto ou número, recebido {}", json_type_name(&other)),
            ));
        }
    };
    OrderId::new(raw).map_err(|_| missing_field_error(field))
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
