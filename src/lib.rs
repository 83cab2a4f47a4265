//! Purpose: Convenience conversions between JSON text, JSON bytes, untyped maps, and serde types.
//! Exports: Absent-on-error functions at the crate root, `JsonCodec`, and the `try_*` variants.
//! Role: Thin facade over serde_json for callers that want `Option` results plus diagnostics.
//! Invariants: All functions are pure apart from `tracing` events; no global state.
//! Invariants: Failures surface as `None` (root API) or a classified `Error` (`try_*` API).
pub mod core;
pub mod json;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::format::{Format, KeyOrder};
pub use crate::json::codec::{
    JsonCodec, data_to_json_text, decode_from_json_data, decode_from_json_text,
    encode_to_json_data, encode_to_json_text, json_data_to_map, json_text_to_data,
    json_text_to_map, map_to_json_text, object_to_json_text,
};
pub use crate::json::map::{
    JsonMap, is_valid_json_object, try_json_data_to_map, try_json_text_to_map,
    try_map_to_json_text, try_object_to_json_text, try_value_to_map,
};
pub use crate::json::text::try_data_to_json_text;
pub use crate::json::typed::{
    try_decode_from_json_data, try_decode_from_json_text, try_encode_to_json_data,
    try_encode_to_json_text,
};
