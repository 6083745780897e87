//! Operator and punctuation scanning.

use super::Scanner;
use crate::token::{Token, TokenKind};

impl Scanner {
    /// Consumes a single-character token.
    pub(super) fn scan_single(&mut self, kind: TokenKind, c: char) -> Token {
        self.cursor.advance();
        self.make_token(kind, c.to_string())
    }

    /// Consumes `first`, or `first` followed by `=` when that is next.
    ///
    /// Handles `=`/`==`, `!`/`!=`, `<`/`<=` and `>`/`>=`. The token is placed
    /// at `first`, never at the `=`.
    pub(super) fn scan_one_or_two(&mut self, first: char, single: TokenKind, double: TokenKind) -> Token {
        if self.cursor.peek().is('=') {
            self.cursor.advance();
            self.cursor.advance();
            let mut text = String::with_capacity(2);
            text.push(first);
            text.push('=');
            self.make_token(double, text)
        } else {
            self.scan_single(single, first)
        }
    }
}
