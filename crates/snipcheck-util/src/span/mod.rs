//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range in the scanned source with the
//! human-readable line and column of its first character.
//!
//! # Examples
//!
//! ```
//! use snipcheck_util::span::Span;
//!
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.len(), 1);
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

use serde::Serialize;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of `start` (for human-readable output)
///
/// # Examples
///
/// ```
/// use snipcheck_util::span::Span;
///
/// // Create a span with byte offsets and line/column info
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.to_string(), "1:5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// ```
    /// use snipcheck_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// ```
    /// use snipcheck_util::span::Span;
    ///
    /// assert!(Span::new(10, 10, 1, 5).is_empty());
    /// assert!(!Span::new(10, 20, 1, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the source text covered by this span.
    ///
    /// Returns `None` if the span is out of bounds or does not fall on
    /// character boundaries of `source`.
    pub fn snippet<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_empty() {
        let span = Span::new(3, 7, 1, 4);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::new(5, 5, 2, 1).is_empty());
    }

    #[test]
    fn test_span_snippet() {
        let source = "var x = 1;";
        assert_eq!(Span::new(4, 5, 1, 5).snippet(source), Some("x"));
        assert_eq!(Span::new(8, 40, 1, 9).snippet(source), None);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 3, 7).to_string(), "3:7");
    }
}
