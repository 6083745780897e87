//! Fluent construction of [`Diagnostic`]s.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Span;

/// Collects the parts of a diagnostic before it is recorded.
///
/// # Examples
///
/// ```
/// use monkey_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use monkey_util::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected character '$'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::point(1, 4))
///     .build();
/// assert_eq!(diag.to_string(), "error[E1001]: unexpected character '$'\n --> 1:4");
/// ```
#[derive(Clone, Debug)]
#[must_use = "a DiagnosticBuilder records nothing until `emit` is called"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Starts an error with no location.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic {
                message: message.into(),
                span: Span::DUMMY,
                source_name: None,
                code: None,
                notes: Vec::new(),
            },
        }
    }

    /// Attaches a stable code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Sets the location.
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Names the input the span points into.
    pub fn source(mut self, source_name: impl Into<String>) -> Self {
        self.diagnostic.source_name = Some(source_name.into());
        self
    }

    /// Appends a note line.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Finishes without recording.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Builds the diagnostic and records it in `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
