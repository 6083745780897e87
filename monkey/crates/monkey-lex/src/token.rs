//! Token type definitions.
//!
//! A [`Token`] is a classified, positioned piece of source text. Its
//! [`TokenKind`] is drawn from a closed set: the two terminal signals
//! (`End`, `Error`), `Illegal` characters, identifiers, number literals,
//! one kind per reserved word, and the operators and delimiters.

use std::fmt;
use std::sync::Arc;

use monkey_util::Span;

/// Lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Repeated calls keep producing it.
    End,
    /// The input contained a malformed UTF-8 sequence; scanning stops here.
    Error,
    /// A character that starts no token.
    Illegal,

    /// Identifier, e.g. `five`, `add`, `😀`
    Identifier,
    /// Integer literal, e.g. `42`
    Integer,
    /// Float literal, e.g. `3.14`
    Float,

    // Keywords
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,

    // Operators
    /// `=`
    Assign,
    /// `==`
    Eq,
    /// `!`
    Bang,
    /// `!=`
    NotEq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `*`
    Asterisk,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,

    // Delimiters
    /// `;`
    Terminator,
    /// `,`
    Comma,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// Canonical upper-case name of the kind, as shown in token dumps.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::End => "END",
            TokenKind::Error => "ERROR",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::Bang => "BANG",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Slash => "SLASH",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Lt => "LT",
            TokenKind::Lte => "LTE",
            TokenKind::Gt => "GT",
            TokenKind::Gte => "GTE",
            TokenKind::Terminator => "TERMINATOR",
            TokenKind::Comma => "COMMA",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
        }
    }

    /// Returns true for the reserved-word kinds.
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Returns true for arithmetic, comparison and assignment operators.
    pub const fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Eq
                | TokenKind::Bang
                | TokenKind::NotEq
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Slash
                | TokenKind::Asterisk
                | TokenKind::Lt
                | TokenKind::Lte
                | TokenKind::Gt
                | TokenKind::Gte
        )
    }

    /// Returns true for the kinds after which the scanner produces nothing new.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::End | TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a reserved word to its keyword kind.
///
/// Lookup is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use monkey_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("fn"), Some(TokenKind::Function));
/// assert_eq!(keyword_from_ident("Fn"), None);
/// assert_eq!(keyword_from_ident("fn1"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    match ident {
        "fn" => Some(TokenKind::Function),
        "let" => Some(TokenKind::Let),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}

/// Kind for a scanned identifier run: its keyword kind, or `Identifier`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    keyword_from_ident(ident).unwrap_or(TokenKind::Identifier)
}

/// A scanned token.
///
/// `line` and `column` are the position of the token's first character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Lexical category
    pub kind: TokenKind,
    /// Exact source text matched; empty for `End` and `Error`
    pub text: String,
    /// Logical name of the input, shared by every token of one scan
    pub source_name: Arc<str>,
    /// Line number (1-based)
    pub line: u32,
    /// Column of the first character
    pub column: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        source_name: Arc<str>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            source_name,
            line,
            column,
        }
    }

    /// Returns true if this token ends the stream.
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Position of the token as a [`Span`] without character offsets.
    pub fn span(&self) -> Span {
        Span::point(self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' at {}:{}:{}",
            self.kind, self.text, self.source_name, self.line, self.column
        )
    }
}
