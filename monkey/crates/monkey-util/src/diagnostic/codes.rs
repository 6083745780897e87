//! Stable identifiers for diagnostics, e.g. `E1001`.
//!
//! # Examples
//!
//! ```
//! use monkey_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.number, 1001);
//! assert_eq!(code.to_string(), "E1001");
//! ```

use std::fmt;

/// Severity letter plus a number, rendered zero-padded to four digits.
///
/// Lexer codes live in `1000..2000`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// `"E"` for errors
    pub prefix: &'static str,
    /// Number within the prefix
    pub number: u32,
}

impl DiagnosticCode {
    /// Creates a code from its parts.
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    // Lexer

    /// A character that starts no token.
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// A byte sequence that is not valid UTF-8.
    pub const E_LEXER_INVALID_UTF8: Self = Self::new("E", 1005);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DiagnosticCode").field(&format_args!("{}", self)).finish()
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
