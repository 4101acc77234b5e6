#![forbid(unsafe_code)]

//! Render pass state.
//!
//! A [`RenderContext`] carries what every field needs from its surroundings
//! during one render pass: the theme resolver, the inline error snapshot,
//! the resource-browser URL, the enclosing form, and the ID source. It is
//! threaded through the call chain by reference; fields never store it.

mod group;
mod input;

use std::sync::{Arc, LazyLock};

use formcraft_style::{Theme, ThemeResolver};

use crate::ids::{IdGenerator, UuidIds};
use crate::validation::ErrorSnapshot;

pub use input::NO_IMAGE_URL;

/// The form a field is being rendered inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormInfo<'a> {
    pub id: &'a str,
    pub method: &'a str,
    pub action: &'a str,
}

/// Per-pass render state.
pub struct RenderContext<'a> {
    themes: ThemeResolver<'a>,
    errors: Option<&'a ErrorSnapshot>,
    file_manager_url: &'a str,
    form: Option<FormInfo<'a>>,
    ids: &'a dyn IdGenerator,
}

static FALLBACK_IDS: LazyLock<UuidIds> = LazyLock::new(UuidIds::default);

impl<'a> RenderContext<'a> {
    /// Context using the process default theme, random IDs, and no errors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            themes: ThemeResolver::new(None),
            errors: None,
            file_manager_url: "",
            form: None,
            ids: &*FALLBACK_IDS,
        }
    }

    /// Force `theme` onto every field rendered with this context.
    #[must_use]
    pub fn with_theme(mut self, theme: &'a Theme) -> Self {
        self.themes = ThemeResolver::new(Some(theme));
        self
    }

    /// Use `theme` only when a field supplies none of its own.
    #[must_use]
    pub fn with_fallback_theme(mut self, theme: Arc<Theme>) -> Self {
        self.themes = ThemeResolver::with_fallback(self.themes.form_theme(), theme);
        self
    }

    #[must_use]
    pub fn with_errors(mut self, errors: &'a ErrorSnapshot) -> Self {
        self.errors = Some(errors);
        self
    }

    #[must_use]
    pub fn with_file_manager_url(mut self, url: &'a str) -> Self {
        self.file_manager_url = url;
        self
    }

    #[must_use]
    pub fn with_form(mut self, form: FormInfo<'a>) -> Self {
        self.form = Some(form);
        self
    }

    #[must_use]
    pub fn with_ids(mut self, ids: &'a dyn IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Theme for a field carrying `own` as its own theme.
    #[must_use]
    pub fn theme_for<'s>(&'s self, own: Option<&'s Theme>) -> &'s Theme {
        self.themes.resolve(own)
    }

    /// Inline error recorded under `name`.
    #[must_use]
    pub fn error_for(&self, name: &str) -> Option<&'a str> {
        self.errors.and_then(|errors| errors.get(name))
    }

    #[must_use]
    pub fn errors(&self) -> Option<&'a ErrorSnapshot> {
        self.errors
    }

    #[must_use]
    pub fn file_manager_url(&self) -> &'a str {
        self.file_manager_url
    }

    /// The enclosing form, when rendering inside one.
    #[must_use]
    pub fn form(&self) -> Option<FormInfo<'a>> {
        self.form
    }

    /// A fresh element ID.
    #[must_use]
    pub fn next_id(&self) -> String {
        self.ids.next_id()
    }
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}
