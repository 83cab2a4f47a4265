// Core modules implementing error modeling, output formatting, and diagnostics.
pub mod diagnostic;
pub mod error;
pub mod finite;
pub mod format;
