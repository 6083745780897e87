//! Scanner module.
//!
//! The scanner implementation is split into focused components:
//! - `core` - Scanner struct, whitespace skipping and dispatch
//! - `operator` - one- and two-character operators and punctuation
//! - `identifier` - identifier and keyword scanning
//! - `number` - integer and float literals

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Scanner;
