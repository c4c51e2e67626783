//! Source locations for diagnostics.

use std::fmt;

/// A location in a stylesheet, supplied by the parser when available.
///
/// Lines and columns are 1-based, matching what editors display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    /// The stylesheet the span points into, if it has one.
    pub url: Option<String>,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl SourceSpan {
    /// Create a span in an anonymous stylesheet.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self {
            url: None,
            line,
            column,
        }
    }

    /// Attach the stylesheet URL this span belongs to.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "{url}:{}:{}", self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_url() {
        assert_eq!(SourceSpan::new(3, 7).to_string(), "3:7");
    }

    #[test]
    fn test_display_with_url() {
        let span = SourceSpan::new(12, 1).with_url("styles/main.sbl");
        assert_eq!(span.to_string(), "styles/main.sbl:12:1");
    }
}
