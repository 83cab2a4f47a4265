//! Purpose: Centralize output formatting choices for JSON emission.
//! Exports: `Format`, `KeyOrder`, `write_vec`.
//! Role: Single place that talks to serde_json's serializer front-ends.
//! Invariants: `Format::Pretty` output equals `serde_json::to_vec_pretty` (two-space indent).
//! Invariants: `KeyOrder::Sorted` sorts object keys at every nesting level.
//! Invariants: Non-finite floats fail with `ErrorKind::Encode` instead of becoming `null`.

use crate::core::error::{Error, ErrorKind};
use crate::core::finite::check_finite;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Format {
    #[default]
    Pretty,
    Compact,
}

/// Object key order for typed values. Untyped maps are always sorted
/// because `serde_json::Map` is ordered by key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum KeyOrder {
    #[default]
    Declared,
    Sorted,
}

pub fn write_vec<T: Serialize + ?Sized>(
    value: &T,
    format: Format,
    key_order: KeyOrder,
) -> Result<Vec<u8>, Error> {
    check_finite(value).map_err(|err| {
        Error::new(ErrorKind::Encode)
            .with_message(err.to_string())
            .with_source(err)
    })?;
    match key_order {
        KeyOrder::Declared => serialize(value, format),
        KeyOrder::Sorted => {
            let mut value = serde_json::to_value(value)
                .map_err(|err| Error::from_json(err, ErrorKind::Encode))?;
            // No-op unless serde_json's `preserve_order` is enabled somewhere in the build.
            value.sort_all_objects();
            serialize(&value, format)
        }
    }
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: Format) -> Result<Vec<u8>, Error> {
    let result = match format {
        Format::Pretty => serde_json::to_vec_pretty(value),
        Format::Compact => serde_json::to_vec(value),
    };
    result.map_err(|err| Error::from_json(err, ErrorKind::Encode))
}
