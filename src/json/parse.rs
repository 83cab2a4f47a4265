//! Purpose: Provide the JSON decode entrypoints and parse-failure labels.
//! Exports: `from_slice`, `ParseFailureCategory`, `categorize_error`, `categorize_message`, `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Decoding always goes through `serde_json::from_slice`.
//! Invariants: Category labels are stable; hints never echo payload content.
//! Notes: Error kind mapping is done by callsites so operation context stays explicit.

use serde::de::DeserializeOwned;

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(input)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Eof,
    Data,
    Io,
    Utf8,
    DepthLimit,
    NumericRange,
    Unknown,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
            ParseFailureCategory::Utf8 => "utf8",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    use serde_json::error::Category;

    // Message checks first: serde_json files these under Syntax.
    match categorize_message(&err.to_string()) {
        ParseFailureCategory::Unknown => {}
        specific => return specific,
    }
    match err.classify() {
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Eof => ParseFailureCategory::Eof,
        Category::Data => ParseFailureCategory::Data,
        Category::Io => ParseFailureCategory::Io,
    }
}

pub fn categorize_message(message: &str) -> ParseFailureCategory {
    let lower = message.to_ascii_lowercase();
    if lower.contains("recursion limit") {
        ParseFailureCategory::DepthLimit
    } else if lower.contains("utf-8") || lower.contains("utf8") || lower.contains("unicode") {
        ParseFailureCategory::Utf8
    } else if lower.contains("number out of range") {
        ParseFailureCategory::NumericRange
    } else {
        ParseFailureCategory::Unknown
    }
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    let category = categorize_error(err);
    let mut hint = format!("parse category: {}; context: {context}", category.label());
    if err.line() > 0 {
        hint.push_str(&format!("; at line {} column {}", err.line(), err.column()));
    }
    hint
}
