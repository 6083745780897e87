//! Number literal scanning.
//!
//! A literal is a run of decimal digits, optionally followed by a `.` and a
//! second digit run. The `.` only belongs to the literal when a digit follows
//! it, so `5.` scans as the integer `5` and an illegal `.`.

use super::Scanner;
use crate::token::{Token, TokenKind};
use crate::unicode::is_digit;

impl Scanner {
    /// Scans an integer or float literal.
    pub(super) fn scan_number(&mut self) -> Token {
        self.eat_digits();

        let kind = if self.cursor.current().is('.') && self.cursor.peek().is_char_and(is_digit) {
            self.cursor.advance();
            self.eat_digits();
            TokenKind::Float
        } else {
            TokenKind::Integer
        };

        let text = self.cursor.slice_from(self.token_start);
        self.make_token(kind, text)
    }

    fn eat_digits(&mut self) {
        while self.cursor.current().is_char_and(is_digit) {
            self.cursor.advance();
        }
    }
}
