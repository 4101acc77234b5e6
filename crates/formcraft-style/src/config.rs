#![forbid(unsafe_code)]

//! Environment-driven theme configuration.
//!
//! | Variable | Values |
//! |---|---|
//! | `FORMCRAFT_THEME` | `bootstrap5` (default), `tailwind` |
//! | `FORMCRAFT_THEME_FILE` | path to a JSON theme; takes precedence over the preset |
//! | `FORMCRAFT_REQUIRED_MARKER` | replaces the required-indicator text |
//! | `FORMCRAFT_ERROR_CLASSES` | `1`/`0`: keep or blank the error class slots |

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::ThemeError;
use crate::theme::{Theme, ThemePreset, set_default_theme};

const ENV_THEME: &str = "FORMCRAFT_THEME";
const ENV_THEME_FILE: &str = "FORMCRAFT_THEME_FILE";
const ENV_REQUIRED_MARKER: &str = "FORMCRAFT_REQUIRED_MARKER";
const ENV_ERROR_CLASSES: &str = "FORMCRAFT_ERROR_CLASSES";

/// Theme configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub preset: ThemePreset,
    pub theme_file: Option<PathBuf>,
    pub required_marker: Option<String>,
    pub error_classes: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            preset: ThemePreset::Bootstrap5,
            theme_file: None,
            required_marker: None,
            error_classes: true,
        }
    }
}

/// Parsed config plus any rejected values.
#[derive(Debug, Clone)]
pub struct StyleConfigParse {
    pub config: StyleConfig,
    pub errors: Vec<StyleConfigError>,
}

/// A rejected environment value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl StyleConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for StyleConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for StyleConfigError {}

impl StyleConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> StyleConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> StyleConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse config from an arbitrary key lookup.
    pub fn from_env_with<F>(mut get: F) -> StyleConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = StyleConfig::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_THEME) {
            match ThemePreset::parse(&value) {
                Some(preset) => config.preset = preset,
                None => errors.push(StyleConfigError::new(
                    "theme",
                    value,
                    "expected bootstrap5 or tailwind",
                )),
            }
        }

        if let Some(value) = get(ENV_THEME_FILE) {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                errors.push(StyleConfigError::new("theme_file", value, "expected a path"));
            } else {
                config.theme_file = Some(PathBuf::from(trimmed));
            }
        }

        if let Some(value) = get(ENV_REQUIRED_MARKER) {
            config.required_marker = Some(value);
        }

        if let Some(value) = get(ENV_ERROR_CLASSES) {
            match parse_bool(&value) {
                Some(parsed) => config.error_classes = parsed,
                None => errors.push(StyleConfigError::new(
                    "error_classes",
                    value,
                    "expected 1/0/true/false",
                )),
            }
        }

        for error in &errors {
            tracing::warn!(%error, "ignoring style config value");
        }

        StyleConfigParse { config, errors }
    }

    /// Build the theme this config describes.
    pub fn load_theme(&self) -> Result<Theme, ThemeError> {
        let mut theme = match &self.theme_file {
            Some(path) => Theme::from_json_file(path)?,
            None => self.preset.theme(),
        };
        if let Some(marker) = &self.required_marker {
            theme.required_marker.clone_from(marker);
        }
        if !self.error_classes {
            theme.error_class.clear();
            theme.error_input_class.clear();
        }
        Ok(theme)
    }

    /// Build the theme and install it as the process default.
    pub fn apply(&self) -> Result<Arc<Theme>, ThemeError> {
        let theme = self.load_theme()?;
        set_default_theme(theme);
        Ok(crate::theme::default_theme())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
