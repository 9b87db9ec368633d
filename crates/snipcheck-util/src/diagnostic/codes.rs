//! Diagnostic codes for categorizing scanner errors.
//!
//! # Examples
//!
//! ```
//! use snipcheck_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.as_str(), "E1001");
//! ```

use serde::{Serialize, Serializer};

/// A unique code identifying a diagnostic message
///
/// Codes print as a prefix followed by a zero-padded 4-digit number,
/// e.g. `E1001`. Scanner errors live in the `E1xxx` range.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    prefix: &'static str,
    number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// ```
    /// use snipcheck_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 12);
    /// assert_eq!(code.as_str(), "E0012");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Lexer - Unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Shorthand for [`DiagnosticCode::E_LEXER_UNEXPECTED_CHAR`].
pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
/// Shorthand for [`DiagnosticCode::E_LEXER_UNTERMINATED_STRING`].
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode =
    DiagnosticCode::E_LEXER_UNTERMINATED_STRING;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_formatting() {
        assert_eq!(E_LEXER_UNEXPECTED_CHAR.to_string(), "E1001");
        assert_eq!(E_LEXER_UNTERMINATED_STRING.to_string(), "E1002");
        assert_eq!(
            format!("{:?}", E_LEXER_UNTERMINATED_STRING),
            "DiagnosticCode(E1002)"
        );
    }
}
