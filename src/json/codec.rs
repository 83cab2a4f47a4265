//! Purpose: Absent-on-error conversion facade with configurable output formatting.
//! Exports: `JsonCodec` plus the free functions re-exported from the crate root.
//! Role: Public surface; each call delegates to a `try_*` helper and logs failures.
//! Invariants: Methods are stateless apart from the codec's copyable settings.
//! Invariants: Every `None` return is preceded by exactly one diagnostic event.

use crate::core::diagnostic::absent_on_error;
use crate::core::format::{Format, KeyOrder};
use crate::json::map::{self, JsonMap};
use crate::json::{text, typed};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct JsonCodec {
    pub format: Format,
    pub key_order: KeyOrder,
}

impl JsonCodec {
    /// Pretty-printed output, typed fields in declaration order.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    pub fn map_to_json_text(&self, map: Option<&JsonMap>) -> Option<String> {
        absent_on_error(
            "map_to_json_text",
            map::try_map_to_json_text(map, self.format),
        )
    }

    pub fn object_to_json_text<T: Serialize + ?Sized>(&self, object: Option<&T>) -> Option<String> {
        absent_on_error(
            "object_to_json_text",
            map::try_object_to_json_text(object, self.format),
        )
    }

    pub fn encode_to_json_text<T: Serialize + ?Sized>(&self, object: &T) -> Option<String> {
        absent_on_error(
            "encode_to_json_text",
            typed::try_encode_to_json_text(object, self.format, self.key_order),
        )
    }

    pub fn encode_to_json_data<T: Serialize + ?Sized>(&self, object: &T) -> Option<Vec<u8>> {
        absent_on_error(
            "encode_to_json_data",
            typed::try_encode_to_json_data(object, self.format, self.key_order),
        )
    }
}

pub fn map_to_json_text(map: Option<&JsonMap>) -> Option<String> {
    JsonCodec::new().map_to_json_text(map)
}

pub fn object_to_json_text<T: Serialize + ?Sized>(object: Option<&T>) -> Option<String> {
    JsonCodec::new().object_to_json_text(object)
}

pub fn json_text_to_map(text: &str) -> Option<JsonMap> {
    absent_on_error("json_text_to_map", map::try_json_text_to_map(text))
}

pub fn json_data_to_map(bytes: &[u8]) -> Option<JsonMap> {
    absent_on_error("json_data_to_map", map::try_json_data_to_map(bytes))
}

pub fn data_to_json_text(bytes: &[u8]) -> Option<String> {
    absent_on_error("data_to_json_text", text::try_data_to_json_text(bytes))
}

pub fn json_text_to_data(text: &str) -> Vec<u8> {
    text::json_text_to_data(text)
}

pub fn encode_to_json_text<T: Serialize + ?Sized>(object: &T) -> Option<String> {
    JsonCodec::new().encode_to_json_text(object)
}

pub fn encode_to_json_data<T: Serialize + ?Sized>(object: &T) -> Option<Vec<u8>> {
    JsonCodec::new().encode_to_json_data(object)
}

pub fn decode_from_json_text<T: DeserializeOwned>(text: &str) -> Option<T> {
    absent_on_error("decode_from_json_text", typed::try_decode_from_json_text(text))
}

pub fn decode_from_json_data<T: DeserializeOwned>(bytes: &[u8]) -> Option<T> {
    absent_on_error("decode_from_json_data", typed::try_decode_from_json_data(bytes))
}
