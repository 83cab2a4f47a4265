//! Purpose: Schema-driven conversions for serde `Serialize`/`Deserialize` types.
//! Exports: `try_encode_to_json_data`, `try_encode_to_json_text`,
//!   `try_decode_from_json_data`, `try_decode_from_json_text`.
//! Role: Typed half of the conversion facade; the target shape is the type parameter.
//! Invariants: Text variants route through the byte variants so both share one code path.
//! Invariants: Field naming is whatever the caller's serde attributes declare.

use crate::core::error::{Error, ErrorKind};
use crate::core::format::{Format, KeyOrder, write_vec};
use crate::json::parse;
use crate::json::text::try_data_to_json_text;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub fn try_encode_to_json_data<T: Serialize + ?Sized>(
    object: &T,
    format: Format,
    key_order: KeyOrder,
) -> Result<Vec<u8>, Error> {
    write_vec(object, format, key_order)
}

pub fn try_encode_to_json_text<T: Serialize + ?Sized>(
    object: &T,
    format: Format,
    key_order: KeyOrder,
) -> Result<String, Error> {
    let bytes = try_encode_to_json_data(object, format, key_order)?;
    try_data_to_json_text(&bytes)
}

pub fn try_decode_from_json_data<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    parse::from_slice(bytes).map_err(|err| {
        let message = format!(
            "{err} ({})",
            parse::hint_for_error(&err, std::any::type_name::<T>())
        );
        Error::from_json(err, ErrorKind::ShapeMismatch).with_message(message)
    })
}

pub fn try_decode_from_json_text<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    try_decode_from_json_data(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
        age: u32,
    }

    #[test]
    fn pretty_text_in_declared_order() {
        let person = Person {
            name: "Ann".to_string(),
            age: 30,
        };
        let text = try_encode_to_json_text(&person, Format::Pretty, KeyOrder::Declared).unwrap();
        assert_eq!(text, "{\n  \"name\": \"Ann\",\n  \"age\": 30\n}");
    }

    #[test]
    fn missing_field_is_shape_mismatch() {
        let err = try_decode_from_json_text::<Person>(r#"{"name":"Ann"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert!(err.message().unwrap().contains("missing field `age`"));
    }

    #[test]
    fn wrong_type_is_shape_mismatch() {
        let err = try_decode_from_json_text::<Person>(r#"{"name":"Ann","age":"30"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn malformed_text_is_parse_failure() {
        let err = try_decode_from_json_data::<Person>(b"{\"name\":").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn non_string_keys_fail_to_encode() {
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");
        let err = try_encode_to_json_data(&map, Format::Compact, KeyOrder::Declared).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encode);
    }
}
