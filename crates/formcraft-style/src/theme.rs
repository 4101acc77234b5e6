#![forbid(unsafe_code)]

//! Style-class themes and the process-wide default.
//!
//! A [`Theme`] is a plain record of CSS class strings, one per visual slot
//! a form renderer emits. Two presets ship built in; any other set can be
//! constructed directly or loaded from JSON. Unset slots are empty strings
//! and contribute no class tokens.

use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Named CSS class slots used by form renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub form_group_class: String,
    pub label_class: String,
    pub input_class: String,
    pub select_class: String,
    pub textarea_class: String,
    pub checkbox_wrap_class: String,
    pub checkbox_input_class: String,
    pub radio_wrap_class: String,
    pub radio_input_class: String,
    pub radio_label_class: String,
    pub file_input_class: String,
    pub help_class: String,
    pub required_class: String,
    /// Text shown inside the required indicator, usually `*`.
    pub required_marker: String,
    pub table_class: String,
    pub error_class: String,
    /// Added to an input's class list when its field has an error.
    pub error_input_class: String,
}

impl Theme {
    /// Bootstrap 5 class set.
    #[must_use]
    pub fn bootstrap5() -> Self {
        Self {
            form_group_class: "form-group mb-3".into(),
            label_class: "form-label".into(),
            input_class: "form-control".into(),
            select_class: "form-select".into(),
            textarea_class: "form-control".into(),
            checkbox_wrap_class: "form-check".into(),
            checkbox_input_class: "form-check-input".into(),
            radio_wrap_class: "form-check".into(),
            radio_input_class: "form-check-input".into(),
            radio_label_class: "form-check-label".into(),
            file_input_class: "form-control".into(),
            help_class: "text-info".into(),
            required_class: "text-danger ms-1".into(),
            required_marker: "*".into(),
            table_class: "table table-striped table-hover mb-0".into(),
            error_class: "invalid-feedback".into(),
            error_input_class: "is-invalid".into(),
        }
    }

    /// Tailwind CSS class set.
    #[must_use]
    pub fn tailwind() -> Self {
        const CONTROL: &str = "block w-full rounded-md border-gray-300 shadow-sm \
                               focus:border-indigo-500 focus:ring-indigo-500 sm:text-sm";
        Self {
            form_group_class: "mb-4".into(),
            label_class: "block text-sm font-medium text-gray-700 mb-1".into(),
            input_class: CONTROL.into(),
            select_class: CONTROL.into(),
            textarea_class: CONTROL.into(),
            checkbox_wrap_class: "flex items-center".into(),
            checkbox_input_class:
                "h-4 w-4 rounded border-gray-300 text-indigo-600 focus:ring-indigo-500".into(),
            radio_wrap_class: "flex items-center".into(),
            radio_input_class: "h-4 w-4 border-gray-300 text-indigo-600 focus:ring-indigo-500"
                .into(),
            radio_label_class: "ml-2 block text-sm text-gray-900".into(),
            file_input_class: "block w-full text-sm text-gray-500 file:mr-4 file:py-2 file:px-4 \
                               file:rounded-md file:border-0 file:text-sm file:font-semibold \
                               file:bg-indigo-50 file:text-indigo-700 hover:file:bg-indigo-100"
                .into(),
            help_class: "mt-1 text-sm text-gray-500".into(),
            required_class: "text-red-500 ml-1".into(),
            required_marker: "*".into(),
            table_class: "min-w-full divide-y divide-gray-200".into(),
            error_class: "mt-1 text-sm text-red-600".into(),
            error_input_class: "border-red-500".into(),
        }
    }

    /// Parse a theme from JSON. Missing keys stay empty.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a theme from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let theme = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded theme file");
        Ok(theme)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreset {
    /// Bootstrap 5 (default).
    #[default]
    Bootstrap5,
    /// Tailwind CSS.
    Tailwind,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 2] = [ThemePreset::Bootstrap5, ThemePreset::Tailwind];

    pub const fn index(self) -> usize {
        match self {
            ThemePreset::Bootstrap5 => 0,
            ThemePreset::Tailwind => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ThemePreset::Bootstrap5 => "bootstrap5",
            ThemePreset::Tailwind => "tailwind",
        }
    }

    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Parse a preset name, case-insensitively. `bootstrap` is accepted as
    /// an alias for `bootstrap5`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bootstrap5" | "bootstrap" | "bs5" => Some(Self::Bootstrap5),
            "tailwind" | "tw" => Some(Self::Tailwind),
            _ => None,
        }
    }

    /// The class set for this preset.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            ThemePreset::Bootstrap5 => Theme::bootstrap5(),
            ThemePreset::Tailwind => Theme::tailwind(),
        }
    }
}

// ---------------------------------------------------------------------------
// Process-wide default
// ---------------------------------------------------------------------------

static DEFAULT_THEME: OnceLock<RwLock<Arc<Theme>>> = OnceLock::new();

fn default_slot() -> &'static RwLock<Arc<Theme>> {
    DEFAULT_THEME.get_or_init(|| RwLock::new(Arc::new(Theme::bootstrap5())))
}

// A writer can only panic after the value is fully replaced, so a poisoned
// slot still holds a complete theme.
fn read_slot(slot: &RwLock<Arc<Theme>>) -> Arc<Theme> {
    slot.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn write_slot(slot: &RwLock<Arc<Theme>>, theme: Theme) {
    *slot.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(theme);
}

/// The theme used when neither a form nor a field supplies one.
///
/// Starts as [`Theme::bootstrap5`].
#[must_use]
pub fn default_theme() -> Arc<Theme> {
    read_slot(default_slot())
}

/// Replace the process-wide default theme.
pub fn set_default_theme(theme: Theme) {
    write_slot(default_slot(), theme);
}

/// Replace the process-wide default theme with a preset.
pub fn set_default_preset(preset: ThemePreset) {
    tracing::debug!(preset = preset.name(), "default theme preset changed");
    set_default_theme(preset.theme());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_classes() {
        let t = Theme::bootstrap5();
        assert_eq!(t.form_group_class, "form-group mb-3");
        assert_eq!(t.select_class, "form-select");
        assert_eq!(t.required_marker, "*");
        assert_eq!(t.error_input_class, "is-invalid");
    }

    #[test]
    fn tailwind_controls_share_classes() {
        let t = Theme::tailwind();
        assert_eq!(t.input_class, t.select_class);
        assert_eq!(t.input_class, t.textarea_class);
        assert!(t.input_class.contains("focus:ring-indigo-500"));
        assert!(!t.input_class.contains("  "));
        assert!(!t.file_input_class.contains("  "));
    }

    #[test]
    fn presets_share_no_group_class() {
        let bs = Theme::bootstrap5();
        let tw = Theme::tailwind();
        assert_ne!(bs.form_group_class, tw.form_group_class);
        assert_ne!(bs.input_class, tw.input_class);
    }

    #[test]
    fn empty_theme_has_empty_slots() {
        let t = Theme::default();
        assert!(t.input_class.is_empty());
        assert!(t.required_marker.is_empty());
    }

    #[test]
    fn json_partial_keeps_defaults_empty() {
        let t = Theme::from_json(r#"{"input_class":"fancy","required_marker":"!"}"#)
            .expect("parse");
        assert_eq!(t.input_class, "fancy");
        assert_eq!(t.required_marker, "!");
        assert!(t.label_class.is_empty());
    }

    #[test]
    fn json_roundtrip_preserves_preset() {
        let json = Theme::tailwind().to_json().expect("serialize");
        assert_eq!(Theme::from_json(&json).expect("parse"), Theme::tailwind());
    }

    #[test]
    fn json_rejects_malformed() {
        let err = Theme::from_json("{not json").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn json_file_missing_is_io_error() {
        let err = Theme::from_json_file("/nonexistent/formcraft-theme.json").unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }

    #[test]
    fn json_file_loads() {
        let mut path = std::env::temp_dir();
        path.push(format!("formcraft-theme-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"form_group_class":"grp"}"#).expect("write");
        let t = Theme::from_json_file(&path).expect("load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(t.form_group_class, "grp");
    }

    #[test]
    fn preset_parse_and_names() {
        assert_eq!(ThemePreset::parse("Tailwind"), Some(ThemePreset::Tailwind));
        assert_eq!(ThemePreset::parse(" bootstrap "), Some(ThemePreset::Bootstrap5));
        assert_eq!(ThemePreset::parse("bulma"), None);
        for preset in ThemePreset::ALL {
            assert_eq!(ThemePreset::parse(preset.name()), Some(preset));
        }
    }

    #[test]
    fn preset_next_cycles() {
        assert_eq!(ThemePreset::Bootstrap5.next(), ThemePreset::Tailwind);
        assert_eq!(ThemePreset::Tailwind.next(), ThemePreset::Bootstrap5);
    }

    // The default theme is process-global, so every mutation lives in this
    // one test.
    #[test]
    fn poisoned_slot_still_serves_theme() {
        let slot = Arc::new(RwLock::new(Arc::new(Theme::bootstrap5())));
        let writer = Arc::clone(&slot);
        let result = std::thread::spawn(move || {
            let _guard = writer.write().unwrap();
            panic!("poison the slot");
        })
        .join();
        assert!(result.is_err());
        assert!(slot.is_poisoned());

        assert_eq!(read_slot(&slot).form_group_class, "form-group mb-3");
        write_slot(&slot, Theme::tailwind());
        assert_eq!(read_slot(&slot).form_group_class, "mb-4");
    }

    #[test]
    fn default_theme_set_and_restore() {
        assert_eq!(*default_theme(), Theme::bootstrap5());
        set_default_preset(ThemePreset::Tailwind);
        assert_eq!(*default_theme(), Theme::tailwind());
        let custom = Theme {
            input_class: "x".into(),
            ..Theme::default()
        };
        set_default_theme(custom.clone());
        assert_eq!(*default_theme(), custom);
        set_default_preset(ThemePreset::Bootstrap5);
        assert_eq!(*default_theme(), Theme::bootstrap5());
    }
}
