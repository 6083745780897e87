//! monkey-lex - Lexical Scanner for the Monkey Programming Language
//!
//! This crate turns Monkey source text into a stream of classified,
//! positioned tokens for a parser to consume.
//!
//! # Example Usage
//!
//! ```
//! use monkey_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("repl", "let add = fn(x, y) { x + y; };");
//!
//! // Get tokens one at a time
//! let token = scanner.next_token();
//! assert_eq!(token.kind, TokenKind::Let);
//! assert_eq!(token.text, "let");
//!
//! // Or iterate through the rest; iteration stops before `End`
//! let rest: Vec<_> = scanner.map(|t| t.kind).collect();
//! assert_eq!(rest.len(), 15);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens and the reserved-word table
//! - [`scanner`] - The scanner itself
//! - [`cursor`] - Decoded character cursor with line/column tracking
//! - [`unicode`] - Character classes for identifiers, digits and whitespace
//! - [`config`] - Scanner settings, loadable from TOML
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//!
//! ## Identifiers
//!
//! A letter, `_`, or non-ASCII symbol (emoji included), followed by any of
//! those or decimal digits. Reserved words are matched on the whole run, so
//! `fn1` is an identifier.
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Float**: `3.14` (a digit must follow the `.`)
//!
//! ## Operators and Delimiters
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Other**: `=`, `!`
//! - **Delimiters**: `(`, `)`, `{`, `}`, `,`, `;`
//!
//! ## Special
//!
//! - **End**: end of input, repeated on every later call
//! - **Error**: malformed UTF-8; scanning stops
//! - **Illegal**: a character that starts no token; scanning continues

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod scanner;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{ConfigError, LexConfig, CONFIG_FILE_NAME};
pub use cursor::{Cursor, Rune};
pub use scanner::Scanner;
pub use token::{keyword_from_ident, lookup_ident, Token, TokenKind};
pub use unicode::{is_digit, is_ident_continue, is_ident_start, is_whitespace};

/// Scans all of `text`, returning every token including the final `End` or
/// `Error`.
///
/// # Example
///
/// ```
/// use monkey_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("repl", "5 == 5");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Integer, TokenKind::Eq, TokenKind::Integer, TokenKind::End]
/// );
/// ```
pub fn tokenize(source_name: &str, text: &str) -> Vec<Token> {
    collect_all(Scanner::new(source_name, text))
}

/// Like [`tokenize`], over raw bytes that may not be valid UTF-8.
pub fn tokenize_bytes(source_name: &str, bytes: &[u8]) -> Vec<Token> {
    collect_all(Scanner::from_bytes(source_name, bytes))
}

fn collect_all(mut scanner: Scanner) -> Vec<Token> {
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.is_terminal();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
