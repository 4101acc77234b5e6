#![forbid(unsafe_code)]

//! Theme selection for a render pass.

use std::sync::Arc;

use crate::theme::{Theme, default_theme};

/// Picks the active theme for each field in a render pass.
///
/// A form-level theme wins over a field's own theme, which wins over the
/// process default captured when the resolver was built.
#[derive(Debug, Clone)]
pub struct ThemeResolver<'a> {
    form: Option<&'a Theme>,
    fallback: Arc<Theme>,
}

impl<'a> ThemeResolver<'a> {
    /// Resolver over `form`, falling back to the process default.
    #[must_use]
    pub fn new(form: Option<&'a Theme>) -> Self {
        Self::with_fallback(form, default_theme())
    }

    /// Resolver with an explicit fallback instead of the process default.
    #[must_use]
    pub fn with_fallback(form: Option<&'a Theme>, fallback: Arc<Theme>) -> Self {
        Self { form, fallback }
    }

    /// The form-level theme, if one was injected.
    #[must_use]
    pub fn form_theme(&self) -> Option<&'a Theme> {
        self.form
    }

    /// Active theme for a field carrying `field` as its own theme.
    #[must_use]
    pub fn resolve<'s>(&'s self, field: Option<&'s Theme>) -> &'s Theme {
        self.form.or(field).unwrap_or(self.fallback.as_ref())
    }
}
