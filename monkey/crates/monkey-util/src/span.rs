//! Source locations.
//!
//! A [`Span`] records where a piece of source text lives: character offsets
//! into the decoded input plus the human-readable line and column of its
//! first character.
//!
//! # Examples
//!
//! ```
//! use monkey_util::span::Span;
//!
//! let span = Span::new(4, 8, 1, 4);
//! assert_eq!(span.len(), 4);
//! assert_eq!(span.to_string(), "1:4");
//! ```

use std::fmt;

/// Source location span
///
/// Offsets count decoded characters, not bytes, so a multi-byte character
/// occupies exactly one offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start character offset in source
    pub start: usize,
    /// End character offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number of the first character
    pub column: u32,
}

impl Span {
    /// Placeholder for diagnostics that have no location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Span over characters `start..end` whose first character is at
    /// `line`:`column`.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a zero-width span at a line/column position
    ///
    /// # Examples
    ///
    /// ```
    /// use monkey_util::span::Span;
    ///
    /// let point = Span::point(2, 5);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self::new(0, 0, line, column)
    }

    /// Number of characters covered by the span
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no characters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
