#![forbid(unsafe_code)]

//! formcraft public facade crate.
//!
//! Re-exports the form, theme, and markup types from the internal crates and
//! offers a prelude for day-to-day usage.
//!
//! ```
//! use formcraft::prelude::*;
//!
//! let mut form = Form::new()
//!     .with_theme(Theme::tailwind())
//!     .with_fields([Field::string("name", "Name").with_required(true)]);
//! assert!(form.to_html().contains(r#"<div class="mb-4">"#));
//! ```

use std::fmt;

// --- Markup re-exports -----------------------------------------------------

pub use formcraft_markup::{Element, Node, escape_str};

// --- Style re-exports ------------------------------------------------------

pub use formcraft_style::{
    StyleConfig, StyleConfigError, Theme, ThemeError, ThemePreset, ThemeResolver, default_theme,
    set_default_preset, set_default_theme,
};

// --- Form re-exports -------------------------------------------------------

pub use formcraft_forms::validation::validators;
pub use formcraft_forms::{
    CustomInput, ErrorSnapshot, Field, FieldKind, FieldOption, FieldRow, FieldRowColumn, Form,
    FormEntry, FormInfo, HtmxConfig, IdGenerator, OptionsProvider, RenderContext, SequentialIds,
    TableColumn, TableOptions, UuidIds, ValidationError, ValidationResult, Validator,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for formcraft apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while reading input or writing output.
    Io(std::io::Error),
    /// A theme could not be loaded.
    Theme(ThemeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Theme(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Theme(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ThemeError> for Error {
    fn from(err: ThemeError) -> Self {
        Self::Theme(err)
    }
}

/// Standard result type for formcraft APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Field, FieldKind, FieldOption, FieldRow, Form, HtmxConfig, Result, Theme,
        ThemePreset, ValidationError,
    };

    pub use crate::validators::{
        alpha_numeric, custom, email, ip, max, max_length, min, min_length, one_of, pattern,
        required, url, uuid,
    };

    pub use crate::{forms, markup, style};
}

pub use formcraft_forms as forms;
pub use formcraft_markup as markup;
pub use formcraft_style as style;
