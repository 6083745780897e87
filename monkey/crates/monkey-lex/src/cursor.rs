//! Character cursor for traversing source code.
//!
//! The source is decoded once, up front, into a vector of characters. The
//! cursor is an index into that vector plus the line/column of the character
//! under it, which makes one-rune lookahead a bounds-checked index.
//!
//! Reading never returns a sentinel character: [`Cursor::current`] and
//! [`Cursor::peek`] return a [`Rune`], which separates real characters from
//! the end of input and from a malformed byte sequence.

/// What the cursor sees at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rune {
    /// A decoded character.
    Char(char),
    /// No more input.
    End,
    /// The bytes at this position are not valid UTF-8.
    DecodeError,
}

impl Rune {
    /// The character, if this is one.
    #[inline]
    pub fn char(self) -> Option<char> {
        match self {
            Rune::Char(c) => Some(c),
            Rune::End | Rune::DecodeError => None,
        }
    }

    /// Returns true if this rune is the character `expected`.
    #[inline]
    pub fn is(self, expected: char) -> bool {
        self == Rune::Char(expected)
    }

    /// Returns true if this rune is a character satisfying `pred`.
    #[inline]
    pub fn is_char_and(self, pred: impl FnOnce(char) -> bool) -> bool {
        self.char().map_or(false, pred)
    }
}

/// A cursor over decoded source characters.
///
/// # Example
///
/// ```
/// use monkey_lex::cursor::{Cursor, Rune};
///
/// let mut cursor = Cursor::new("a\nb", 0);
/// assert_eq!(cursor.current(), Rune::Char('a'));
/// assert_eq!(cursor.peek(), Rune::Char('\n'));
/// cursor.advance();
/// cursor.advance();
/// assert_eq!((cursor.line(), cursor.column()), (2, 0));
/// cursor.advance();
/// assert_eq!(cursor.current(), Rune::End);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// Decoded characters of the valid prefix of the input.
    chars: Vec<char>,

    /// Whether a malformed sequence follows the last decoded character.
    decode_error: bool,

    /// Index of the current character.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Column of the current character.
    column: u32,

    /// Column given to the first character of every line.
    column_base: u32,
}

impl Cursor {
    /// Creates a cursor over already-valid text.
    pub fn new(source: &str, column_base: u32) -> Self {
        Self::from_parts(source.chars().collect(), false, column_base)
    }

    /// Creates a cursor over raw bytes.
    ///
    /// The longest valid UTF-8 prefix is decoded; if anything follows it, the
    /// cursor reports [`Rune::DecodeError`] once it reaches that point.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::{Cursor, Rune};
    ///
    /// let mut cursor = Cursor::from_bytes(b"x\xFFy", 0);
    /// assert_eq!(cursor.current(), Rune::Char('x'));
    /// cursor.advance();
    /// assert_eq!(cursor.current(), Rune::DecodeError);
    /// cursor.advance();
    /// assert_eq!(cursor.current(), Rune::DecodeError);
    /// ```
    pub fn from_bytes(bytes: &[u8], column_base: u32) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => Self::new(text, column_base),
            Err(err) => {
                let valid = std::str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default();
                Self::from_parts(valid.chars().collect(), true, column_base)
            },
        }
    }

    fn from_parts(chars: Vec<char>, decode_error: bool, column_base: u32) -> Self {
        Self {
            chars,
            decode_error,
            position: 0,
            line: 1,
            column: column_base,
            column_base,
        }
    }

    #[inline]
    fn rune_at(&self, index: usize) -> Rune {
        match self.chars.get(index) {
            Some(&c) => Rune::Char(c),
            None if self.decode_error => Rune::DecodeError,
            None => Rune::End,
        }
    }

    /// The rune under the cursor.
    #[inline]
    pub fn current(&self) -> Rune {
        self.rune_at(self.position)
    }

    /// The rune after the current one, without consuming anything.
    #[inline]
    pub fn peek(&self) -> Rune {
        self.rune_at(self.position + 1)
    }

    /// Moves to the next character, updating line and column.
    ///
    /// Does nothing at the end of input or at a decode error: the cursor
    /// never moves past a malformed sequence.
    #[inline]
    pub fn advance(&mut self) {
        let Some(&c) = self.chars.get(self.position) else {
            return;
        };
        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = self.column_base;
        } else {
            self.column = self.column.saturating_add(1);
        }
    }

    /// Returns true once no further character can be read.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Returns true if the input contains a malformed sequence.
    pub fn has_decode_error(&self) -> bool {
        self.decode_error
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the current character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Index of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of decoded characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Text of the characters in `start..end`, clamped to the decoded input.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Text from character index `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> String {
        self.slice(start, self.position)
    }
}
