#![forbid(unsafe_code)]

//! Theme loading errors.

use std::fmt;
use std::io;

/// Failure loading a theme from JSON.
#[derive(Debug)]
pub enum ThemeError {
    /// The theme file could not be read.
    Io(io::Error),
    /// The JSON was malformed or had the wrong shape.
    Parse(serde_json::Error),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Io(e) => write!(f, "theme file: {e}"),
            ThemeError::Parse(e) => write!(f, "theme json: {e}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::Io(e) => Some(e),
            ThemeError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ThemeError {
    fn from(e: io::Error) -> Self {
        ThemeError::Io(e)
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(e: serde_json::Error) -> Self {
        ThemeError::Parse(e)
    }
}
