//! Purpose: Convert between JSON text and its UTF-8 byte encoding.
//! Exports: `try_data_to_json_text`, `json_text_to_data`.
//! Role: Text/bytes leg of the conversion facade.
//! Invariants: Only UTF-8 validity is checked here; JSON well-formedness is not.

use crate::core::diagnostic::byte_preview;
use crate::core::error::{Error, ErrorKind};

pub fn try_data_to_json_text(bytes: &[u8]) -> Result<String, Error> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_owned()),
        Err(err) => Err(Error::new(ErrorKind::Utf8)
            .with_message(format!(
                "invalid UTF-8 after {} valid bytes: {}",
                err.valid_up_to(),
                byte_preview(bytes)
            ))
            .with_source(err)),
    }
}

pub fn json_text_to_data(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}
