// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::ast::Mapping;
use crate::emit::{self, RenderOutcome};
use crate::error::{Diagnostic, SigilError};
use crate::export;
use crate::parser;

mod access;
mod conversion;
mod helpers;

/// Main configuration struct: the parsed mapping plus the raw source text
/// kept around for error reporting.
#[derive(Debug)]
pub struct SigilConfig {
    mapping: Mapping,
    diagnostics: Vec<Diagnostic>,
    raw_content: String, // Store for error reporting
}

impl SigilConfig {
    /// Parse a SIGIL config from a string (no file I/O).
    ///
    /// Parsing never fails: malformed lines surface through
    /// [`diagnostics`](Self::diagnostics) and everything parseable still
    /// lands in the mapping.
    ///
    /// # Example
    /// ```
    /// use sigil_cfg::SigilConfig;
    ///
    /// let config = SigilConfig::from_str("port := 8080;");
    /// let port: i64 = config.get("port")?;
    /// assert_eq!(port, 8080);
    /// # Ok::<(), sigil_cfg::SigilError>(())
    /// ```
    pub fn from_str(content: &str) -> Self {
        let outcome = parser::parse_str(content);
        Self {
            mapping: outcome.mapping,
            diagnostics: outcome.diagnostics,
            raw_content: content.to_string(),
        }
    }

    /// Load a SIGIL config file.
    ///
    /// # Example
    /// ```ignore
    /// let config = SigilConfig::from_file("config.sigil")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SigilError> {
        let content = fs::read_to_string(&path).map_err(|e| SigilError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.as_ref().to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        Ok(Self::from_str(&content))
    }

    /// Load a SIGIL config file with fallback support.
    ///
    /// Tries to load from the primary path first. If that fails (file not
    /// found), attempts to load from the fallback path.
    pub fn from_file_with_fallback<P: AsRef<Path>>(
        primary: P,
        fallback: P,
    ) -> Result<Self, SigilError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(SigilError::FileError { .. }) => {
                // Primary file not found, try fallback
                Self::from_file(&fallback).map_err(|e| match e {
                    SigilError::FileError { message, .. } => SigilError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other), // Pass through non-file errors
        }
    }

    /// The parsed key/value mapping, in source order.
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Problems found while parsing, in source order. Empty for clean input.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Render the mapping as TOML-subset text.
    ///
    /// Rendering problems (float values) come back on the outcome, next to
    /// the text, never as an error.
    pub fn to_toml(&self) -> RenderOutcome {
        emit::render(&self.mapping)
    }

    /// Export the mapping as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SigilError> {
        export::to_json(&self.mapping)
    }
}
