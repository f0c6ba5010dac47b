//! Rendering configuration

use serde::{Deserialize, Serialize};

use crate::Result;

/// Controls how identifiers and literals are written into the SQL string.
///
/// The default produces backtick-quoted identifiers and single-quoted string
/// literals. [`RenderOptions::plain`] turns both off, which yields the bare
/// `SELECT id, userName FROM users WHERE 1 = 1 AND userName = admin` form.
/// Identifiers are sanitized in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Wrap every sanitized identifier in backticks
    pub quote_identifiers: bool,
    /// Quote and escape string-like literal values
    pub quote_strings: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            quote_identifiers: true,
            quote_strings: true,
        }
    }
}

impl RenderOptions {
    /// Sanitized but unquoted identifiers, literals interpolated verbatim
    pub fn plain() -> Self {
        Self {
            quote_identifiers: false,
            quote_strings: false,
        }
    }

    /// Load options from a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
