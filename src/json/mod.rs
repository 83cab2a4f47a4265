//! Purpose: JSON conversion facade between text, bytes, untyped maps, and serde types.
//! Exports: `codec` (absent-on-error API), `map`, `text`, `typed` (structured `try_*` API), `parse`.
//! Role: Single seam for serde_json so callsites avoid ad hoc encode/decode logic.
//! Invariants: Every decode goes through `parse::from_slice`; every encode through `core::format`.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod codec;
pub mod map;
pub mod parse;
pub mod text;
pub mod typed;
