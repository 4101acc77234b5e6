#![forbid(unsafe_code)]

//! Style-class themes for form rendering.
//!
//! # Example
//! ```
//! use formcraft_style::{Theme, ThemePreset, ThemeResolver};
//!
//! let tailwind = ThemePreset::Tailwind.theme();
//! let resolver = ThemeResolver::new(Some(&tailwind));
//! assert_eq!(resolver.resolve(None).form_group_class, "mb-4");
//! assert_eq!(Theme::bootstrap5().select_class, "form-select");
//! ```

pub mod config;
pub mod error;
pub mod resolve;
pub mod theme;

pub use config::{StyleConfig, StyleConfigError, StyleConfigParse};
pub use error::ThemeError;
pub use resolve::ThemeResolver;
pub use theme::{Theme, ThemePreset, default_theme, set_default_preset, set_default_theme};
