//! Diagnostics recorded while processing Monkey source.
//!
//! A [`Diagnostic`] is plain data: a message, where it happened and an
//! optional code. Producers build them with [`DiagnosticBuilder`] and push
//! them into a [`Handler`], which keeps them in order until the caller asks
//! for them.
//!
//! # Examples
//!
//! ```
//! use monkey_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use monkey_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .source("main.mk")
//!     .span(Span::point(1, 8))
//!     .emit(&handler);
//!
//! assert_eq!(handler.len(), 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// One recorded error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Where in the input
    pub span: Span,
    /// Logical name of the input, when known
    pub source_name: Option<String>,
    /// Stable code such as `E1001`
    pub code: Option<DiagnosticCode>,
    /// Extra context lines
    pub notes: Vec<String>,
}

/// Renders as
///
/// ```text
/// error[E1005]: invalid UTF-8 sequence
///  --> main.mk:3:7
///   = note: no tokens are produced past this point
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}\n --> ", self.message)?;
        if let Some(name) = &self.source_name {
            write!(f, "{}:", name)?;
        }
        write!(f, "{}", self.span)?;
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        Ok(())
    }
}

/// Ordered collection of diagnostics.
///
/// Recording goes through `&self` so a producer can report while holding
/// other borrows of itself.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if anything was recorded.
    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Copy of everything recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consumes the handler, returning what it recorded.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("recorded", &self.len())
            .finish()
    }
}
