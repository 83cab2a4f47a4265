use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    InvalidInput,
    Utf8,
    Parse,
    ShapeMismatch,
    Encode,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Internal => "internal",
            ErrorKind::InvalidInput => "invalid-input",
            ErrorKind::Utf8 => "utf8",
            ErrorKind::Parse => "parse",
            ErrorKind::ShapeMismatch => "shape-mismatch",
            ErrorKind::Encode => "encode",
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    context: Option<&'static str>,
    line: Option<usize>,
    column: Option<usize>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            context: None,
            line: None,
            column: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn context(&self) -> Option<&'static str> {
        self.context
    }

    /// 1-based line/column of a parse failure, when the parser reported one.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.line.zip(self.column)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_context(mut self, context: &'static str) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Classifies a serde_json failure into this crate's taxonomy.
    pub fn from_json(err: serde_json::Error, fallback: ErrorKind) -> Self {
        use serde_json::error::Category;

        let kind = match err.classify() {
            Category::Syntax | Category::Eof => ErrorKind::Parse,
            Category::Data => fallback,
            Category::Io => ErrorKind::Internal,
        };
        let mut error = Error::new(kind).with_message(err.to_string());
        // serde_json reports line 0 for errors raised outside the parser.
        if err.line() > 0 {
            error = error.with_position(err.line(), err.column());
        }
        error.with_source(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(context) = self.context {
            write!(f, " (context: {context})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use serde_json::Value;
    use std::error::Error as _;

    #[test]
    fn label_mapping_is_stable() {
        let cases = [
            (ErrorKind::Internal, "internal"),
            (ErrorKind::InvalidInput, "invalid-input"),
            (ErrorKind::Utf8, "utf8"),
            (ErrorKind::Parse, "parse"),
            (ErrorKind::ShapeMismatch, "shape-mismatch"),
            (ErrorKind::Encode, "encode"),
        ];

        for (kind, label) in cases {
            assert_eq!(kind.label(), label);
        }
    }

    #[test]
    fn syntax_errors_carry_position_and_source() {
        let err = serde_json::from_str::<Value>("{\n  \"a\": }").unwrap_err();
        let error = Error::from_json(err, ErrorKind::ShapeMismatch).with_context("test");
        assert_eq!(error.kind(), ErrorKind::Parse);
        assert_eq!(error.context(), Some("test"));
        assert_eq!(error.position().map(|(line, _)| line), Some(2));
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("Parse: "));
        assert!(error.to_string().ends_with("(context: test)"));
    }

    #[test]
    fn data_errors_use_fallback_kind() {
        let err = serde_json::from_str::<u8>("300").unwrap_err();
        let error = Error::from_json(err, ErrorKind::ShapeMismatch);
        assert_eq!(error.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn display_without_message_is_kind_only() {
        assert_eq!(Error::new(ErrorKind::Utf8).to_string(), "Utf8");
    }
}
