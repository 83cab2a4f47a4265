//! Purpose: Translate structured failures into absent results plus one log event.
//! Exports: `absent_on_error`, `byte_preview`.
//! Role: The only place where an `Error` is dropped; everything else propagates.
//! Invariants: Each absent result emits exactly one `warn` event on target `jsonutils`.
//! Invariants: Log text is diagnostic only; callers must not parse it.

use crate::core::error::Error;
use bstr::ByteSlice;

const PREVIEW_LIMIT: usize = 64;

pub fn absent_on_error<T>(op: &'static str, result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(value) => {
            tracing::trace!(target: "jsonutils", op, "conversion succeeded");
            Some(value)
        }
        Err(err) => {
            tracing::warn!(
                target: "jsonutils",
                op,
                kind = err.kind().label(),
                "conversion failed: {err}"
            );
            None
        }
    }
}

/// Escaped, length-capped rendering of raw input for log messages.
pub fn byte_preview(bytes: &[u8]) -> String {
    let end = bytes.len().min(PREVIEW_LIMIT);
    let mut preview = format!("{:?}", bytes[..end].as_bstr());
    if bytes.len() > PREVIEW_LIMIT {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::{absent_on_error, byte_preview};
    use crate::core::error::{Error, ErrorKind};

    #[test]
    fn ok_passes_through_and_err_becomes_none() {
        assert_eq!(absent_on_error("test", Ok::<_, Error>(3)), Some(3));
        assert_eq!(
            absent_on_error::<u8>("test", Err(Error::new(ErrorKind::Parse))),
            None
        );
    }

    #[test]
    fn preview_escapes_invalid_bytes() {
        let preview = byte_preview(&[b'o', b'k', 0xff]);
        assert!(preview.starts_with("\"ok"));
        assert!(preview.to_ascii_lowercase().contains("\\xff"));
    }

    #[test]
    fn preview_is_capped() {
        let preview = byte_preview(&[b'a'; 100]);
        assert!(preview.ends_with("\"..."));
        assert_eq!(preview.len(), 64 + 2 + 3);
    }
}
