//! Scanner configuration.
//!
//! Settings can be built in code or loaded from a TOML file such as
//! `monkey.toml`:
//!
//! ```toml
//! [lexer]
//! column_base = 1
//! report_illegal = false
//! ```
//!
//! A bare table without the `[lexer]` header is accepted as well.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "monkey.toml";

/// Error type for loading a [`LexConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has fields of the wrong type.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parsed but are out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Scanner settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LexConfig {
    /// Column of the first character on each line: 0 or 1.
    #[serde(default)]
    pub column_base: u32,

    /// Record a diagnostic for every illegal character.
    #[serde(default = "default_true")]
    pub report_illegal: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            column_base: 0,
            report_illegal: true,
        }
    }
}

/// Table holding the scanner settings in a shared configuration file.
const SECTION: &str = "lexer";

/// Largest accepted `column_base`.
const MAX_COLUMN_BASE: u32 = 1;

impl LexConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::LexConfig;
    ///
    /// let config = LexConfig::from_toml_str("[lexer]\ncolumn_base = 1\n").unwrap();
    /// assert_eq!(config.column_base, 1);
    /// assert!(config.report_illegal);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = text.parse()?;
        let config = match table.get(SECTION) {
            Some(section) => section.clone().try_into::<LexConfig>()?,
            None => toml::from_str::<LexConfig>(text)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded lexer config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.column_base > MAX_COLUMN_BASE {
            return Err(ConfigError::Invalid(format!(
                "column_base must be 0 or 1, got {}",
                self.column_base
            )));
        }
        Ok(())
    }

    /// Returns a copy whose values are all in range.
    ///
    /// An out-of-range `column_base` is clamped to the largest accepted value.
    ///
    /// ```
    /// use monkey_lex::LexConfig;
    ///
    /// let config = LexConfig::default().with_column_base(u32::MAX).clamped();
    /// assert_eq!(config.column_base, 1);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn clamped(mut self) -> Self {
        self.column_base = self.column_base.min(MAX_COLUMN_BASE);
        self
    }

    /// Sets the column base.
    ///
    /// The value is not checked here; [`validate`](Self::validate) reports it
    /// and a [`Scanner`](crate::Scanner) clamps it.
    pub fn with_column_base(mut self, column_base: u32) -> Self {
        self.column_base = column_base;
        self
    }

    /// Turns illegal-character diagnostics on or off.
    pub fn with_report_illegal(mut self, report_illegal: bool) -> Self {
        self.report_illegal = report_illegal;
        self
    }
}
