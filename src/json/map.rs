//! Purpose: Convert between untyped JSON objects and JSON text/bytes.
//! Exports: `JsonMap`, `is_valid_json_object`, `try_value_to_map`, `try_map_to_json_text`,
//!   `try_object_to_json_text`, `try_json_text_to_map`, `try_json_data_to_map`.
//! Role: Untyped half of the conversion facade; `codec` wraps these with absent-on-error.
//! Invariants: Only top-level JSON objects are accepted or produced as maps.
//! Invariants: Map output is key-sorted since `serde_json::Map` is ordered by key.

use crate::core::error::{Error, ErrorKind};
use crate::core::finite::check_finite;
use crate::core::format::{Format, KeyOrder, write_vec};
use crate::json::parse;
use serde::Serialize;
use serde_json::{Map, Value};

pub type JsonMap = Map<String, Value>;

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Tag check on the parsed variant: objects pass, everything else is a shape mismatch.
pub fn try_value_to_map(value: Value) -> Result<JsonMap, Error> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::new(ErrorKind::ShapeMismatch).with_message(format!(
            "expected a top-level JSON object, found {}",
            kind_name(&other)
        ))),
    }
}

/// True when `value` serializes without error to a top-level JSON object.
pub fn is_valid_json_object<T: Serialize + ?Sized>(value: &T) -> bool {
    object_value(value).is_ok()
}

fn object_value<T: Serialize + ?Sized>(value: &T) -> Result<JsonMap, Error> {
    check_finite(value).map_err(|err| {
        Error::new(ErrorKind::InvalidInput)
            .with_message(err.to_string())
            .with_context("not a JSON-representable value")
            .with_source(err)
    })?;
    let value = serde_json::to_value(value).map_err(|err| {
        Error::from_json(err, ErrorKind::InvalidInput).with_context("not a JSON-representable value")
    })?;
    try_value_to_map(value).map_err(|err| {
        Error::new(ErrorKind::InvalidInput)
            .with_message("value is not a JSON object")
            .with_source(err)
    })
}

fn missing_input() -> Error {
    Error::new(ErrorKind::InvalidInput).with_message("no input object supplied")
}

pub fn try_map_to_json_text(map: Option<&JsonMap>, format: Format) -> Result<String, Error> {
    let map = map.ok_or_else(missing_input)?;
    let bytes = write_vec(map, format, KeyOrder::Sorted)?;
    crate::json::text::try_data_to_json_text(&bytes)
}

/// Dynamic-object entry: validates that `object` is a JSON object before emitting it.
pub fn try_object_to_json_text<T: Serialize + ?Sized>(
    object: Option<&T>,
    format: Format,
) -> Result<String, Error> {
    let object = object.ok_or_else(missing_input)?;
    let map = object_value(object)?;
    try_map_to_json_text(Some(&map), format)
}

pub fn try_json_text_to_map(text: &str) -> Result<JsonMap, Error> {
    try_json_data_to_map(text.as_bytes())
}

pub fn try_json_data_to_map(bytes: &[u8]) -> Result<JsonMap, Error> {
    let value: Value = parse::from_slice(bytes).map_err(|err| {
        let message = format!("{err} ({})", parse::hint_for_error(&err, "json map"));
        Error::from_json(err, ErrorKind::Parse).with_message(message)
    })?;
    try_value_to_map(value)
}
