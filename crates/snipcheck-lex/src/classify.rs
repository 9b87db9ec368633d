//! Character classes recognized by the scanner.
//!
//! Everything here is ASCII-only. Non-ASCII characters fall through every
//! predicate and are reported as unexpected characters.

/// Checks if a character is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use snipcheck_lex::classify::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(!is_digit('x'));
/// assert!(!is_digit('٣')); // Arabic-Indic digit three
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can start or continue an identifier.
///
/// Identifiers are runs of ASCII letters and underscores. Digits are not
/// identifier characters, so `x1` scans as an identifier followed by a
/// number.
///
/// # Example
///
/// ```
/// use snipcheck_lex::classify::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('Z'));
/// assert!(is_alpha('_'));
/// assert!(!is_alpha('1'));
/// assert!(!is_alpha('α'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character is skipped without affecting the line count.
///
/// `'\n'` is not included: it is skipped too, but it advances the line.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\t')
}
