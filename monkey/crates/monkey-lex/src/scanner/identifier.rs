//! Identifier and keyword scanning.

use super::Scanner;
use crate::token::{lookup_ident, Token};
use crate::unicode::is_ident_continue;

impl Scanner {
    /// Scans an identifier or reserved word.
    ///
    /// The dispatcher has already checked that the current character can
    /// start an identifier.
    pub(super) fn scan_identifier(&mut self) -> Token {
        while self.cursor.current().is_char_and(is_ident_continue) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = lookup_ident(&text);
        self.make_token(kind, text)
    }
}
