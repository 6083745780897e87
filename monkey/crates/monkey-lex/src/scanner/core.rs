//! Core scanner implementation.
//!
//! This module contains the Scanner struct, its constructors, and the
//! `next_token` dispatch.

use std::iter::FusedIterator;
use std::sync::Arc;

use monkey_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::config::LexConfig;
use crate::cursor::{Cursor, Rune};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_digit, is_ident_start, is_whitespace};

/// Scanner for the Monkey programming language.
///
/// Turns source text into a stream of [`Token`]s, one per call to
/// [`next_token`](Scanner::next_token). A scanner is built for exactly one
/// input and only ever moves forward.
///
/// # Example
///
/// ```
/// use monkey_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("repl", "let five = 5;");
/// let token = scanner.next_token();
/// assert_eq!(token.kind, TokenKind::Let);
/// assert_eq!((token.line, token.column), (1, 0));
/// ```
pub struct Scanner {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor,

    /// Logical input name copied onto every token.
    source_name: Arc<str>,

    config: LexConfig,

    /// Collects illegal-character and decode-error diagnostics.
    handler: Handler,

    /// Character index where the current token starts.
    pub(super) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts.
    token_start_column: u32,

    /// The decode-error diagnostic is recorded only once.
    decode_error_reported: bool,

    /// Set once the iterator has handed out its last token.
    exhausted: bool,
}

impl Scanner {
    /// Creates a scanner with the default configuration.
    pub fn new(source_name: &str, text: &str) -> Self {
        Self::with_config(source_name, text, LexConfig::default())
    }

    /// Creates a scanner with an explicit configuration.
    ///
    /// Out-of-range values are clamped (see [`LexConfig::clamped`]).
    pub fn with_config(source_name: &str, text: &str, config: LexConfig) -> Self {
        let config = checked_config(source_name, config);
        Self::from_cursor(source_name, Cursor::new(text, config.column_base), config)
    }

    /// Creates a scanner over raw bytes.
    ///
    /// The valid UTF-8 prefix scans normally. At the first malformed sequence
    /// the scanner produces an [`TokenKind::Error`] token and nothing else.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::{Scanner, TokenKind};
    ///
    /// let mut scanner = Scanner::from_bytes("stdin", b"x \xFF");
    /// assert_eq!(scanner.next_token().kind, TokenKind::Identifier);
    /// assert_eq!(scanner.next_token().kind, TokenKind::Error);
    /// assert_eq!(scanner.next_token().kind, TokenKind::Error);
    /// ```
    pub fn from_bytes(source_name: &str, bytes: &[u8]) -> Self {
        Self::from_bytes_with_config(source_name, bytes, LexConfig::default())
    }

    /// Creates a scanner over raw bytes with an explicit configuration.
    pub fn from_bytes_with_config(source_name: &str, bytes: &[u8], config: LexConfig) -> Self {
        let config = checked_config(source_name, config);
        Self::from_cursor(
            source_name,
            Cursor::from_bytes(bytes, config.column_base),
            config,
        )
    }

    fn from_cursor(source_name: &str, cursor: Cursor, config: LexConfig) -> Self {
        log::debug!(
            "scanning {}: {} chars{}",
            source_name,
            cursor.len(),
            if cursor.has_decode_error() {
                ", malformed UTF-8 after the last one"
            } else {
                ""
            }
        );
        Self {
            token_start_line: cursor.line(),
            token_start_column: cursor.column(),
            cursor,
            source_name: Arc::from(source_name),
            config,
            handler: Handler::new(),
            token_start: 0,
            decode_error_reported: false,
            exhausted: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the current character. Once the
    /// input is exhausted every call returns an `End` token at the same
    /// position; after a malformed byte sequence every call returns `Error`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let token = match self.cursor.current() {
            Rune::End => self.make_token(TokenKind::End, String::new()),
            Rune::DecodeError => self.decode_error(),
            Rune::Char(c) => match c {
                '+' => self.scan_single(TokenKind::Plus, c),
                '-' => self.scan_single(TokenKind::Minus, c),
                '/' => self.scan_single(TokenKind::Slash, c),
                '*' => self.scan_single(TokenKind::Asterisk, c),
                ';' => self.scan_single(TokenKind::Terminator, c),
                ',' => self.scan_single(TokenKind::Comma, c),
                '{' => self.scan_single(TokenKind::LBrace, c),
                '}' => self.scan_single(TokenKind::RBrace, c),
                '(' => self.scan_single(TokenKind::LParen, c),
                ')' => self.scan_single(TokenKind::RParen, c),
                '=' => self.scan_one_or_two(c, TokenKind::Assign, TokenKind::Eq),
                '!' => self.scan_one_or_two(c, TokenKind::Bang, TokenKind::NotEq),
                '<' => self.scan_one_or_two(c, TokenKind::Lt, TokenKind::Lte),
                '>' => self.scan_one_or_two(c, TokenKind::Gt, TokenKind::Gte),
                c if is_ident_start(c) => self.scan_identifier(),
                c if is_digit(c) => self.scan_number(),
                c => self.illegal(c),
            },
        };

        log::trace!("{}", token);
        token
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.current().is_char_and(is_whitespace) {
            self.cursor.advance();
        }
    }

    /// Builds a token positioned at the start of the current token.
    pub(super) fn make_token(&self, kind: TokenKind, text: String) -> Token {
        Token {
            kind,
            text,
            source_name: Arc::clone(&self.source_name),
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }

    fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn illegal(&mut self, c: char) -> Token {
        self.cursor.advance();
        if self.config.report_illegal {
            DiagnosticBuilder::error(format!("unexpected character '{}'", c.escape_debug()))
                .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
                .source(&*self.source_name)
                .span(self.current_span())
                .emit(&self.handler);
        }
        self.make_token(TokenKind::Illegal, c.to_string())
    }

    fn decode_error(&mut self) -> Token {
        if !self.decode_error_reported {
            self.decode_error_reported = true;
            log::warn!(
                "{}:{}:{}: invalid UTF-8 sequence, scanning stops",
                self.source_name,
                self.token_start_line,
                self.token_start_column
            );
            DiagnosticBuilder::error("invalid UTF-8 sequence")
                .code(DiagnosticCode::E_LEXER_INVALID_UTF8)
                .source(&*self.source_name)
                .span(self.current_span())
                .with_note("no tokens are produced past this point")
                .emit(&self.handler);
        }
        self.make_token(TokenKind::Error, String::new())
    }

    /// Logical name of the input.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Current line number (1-based).
    ///
    /// This is the line of the next character to be scanned.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Column of the next character to be scanned.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Character index of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The configuration this scanner was built with.
    pub fn config(&self) -> &LexConfig {
        &self.config
    }

    /// Diagnostics recorded so far.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Returns true if an illegal character or malformed input was seen.
    pub fn has_errors(&self) -> bool {
        self.handler.has_errors()
    }

    /// Consumes the scanner, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.handler.into_diagnostics()
    }
}

fn checked_config(source_name: &str, config: LexConfig) -> LexConfig {
    if let Err(err) = config.validate() {
        log::warn!("{}: {}, clamping", source_name, err);
    }
    config.clamped()
}

/// Yields every token before `End`; an `Error` token is yielded and then
/// iteration stops.
impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        match token.kind {
            TokenKind::End => {
                self.exhausted = true;
                None
            },
            TokenKind::Error => {
                self.exhausted = true;
                Some(token)
            },
            _ => Some(token),
        }
    }
}

impl FusedIterator for Scanner {}
