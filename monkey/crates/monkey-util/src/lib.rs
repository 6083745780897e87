//! monkey-util - Core Utilities and Foundation Types
//!
//! This crate holds the types every Monkey compiler phase shares:
//!
//! - [`span`] - source positions (line, column, character offsets)
//! - [`diagnostic`] - errors, their codes, and the [`Handler`] that
//!   collects them
//!
//! # Example
//!
//! ```
//! use monkey_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::point(3, 7))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use span::Span;
