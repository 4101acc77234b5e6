#![forbid(unsafe_code)]

//! The form composer.
//!
//! A [`Form`] holds entries in order plus form-level settings. [`Form::build`]
//! walks the entries once, renders each with a shared [`RenderContext`], and
//! wraps the result in a `<form>` element. [`Form::validate`] checks
//! submitted values and records the errors the next build shows inline.

use std::collections::HashMap;
use std::sync::Arc;

use formcraft_markup::Element;
use formcraft_style::{Theme, default_theme};

use crate::entry::FormEntry;
use crate::htmx::HtmxConfig;
use crate::ids::{IdGenerator, UuidIds};
use crate::render::{FormInfo, RenderContext};
use crate::validation::{ErrorSnapshot, ValidationError, validate_fields};

/// Method used when none is set.
pub const DEFAULT_METHOD: &str = "POST";

/// An HTML form under construction.
#[derive(Clone)]
pub struct Form {
    id: String,
    class: String,
    method: String,
    action: String,
    file_manager_url: String,
    entries: Vec<FormEntry>,
    theme: Option<Arc<Theme>>,
    errors: ErrorSnapshot,
    hx_post: String,
    hx_target: String,
    hx_swap: String,
    htmx: Option<HtmxConfig>,
    ids: Arc<dyn IdGenerator>,
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("id", &self.id)
            .field("method", &self.method)
            .field("action", &self.action)
            .field("entries", &self.entries)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Empty `POST` form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: String::new(),
            class: String::new(),
            method: DEFAULT_METHOD.to_owned(),
            action: String::new(),
            file_manager_url: String::new(),
            entries: Vec::new(),
            theme: None,
            errors: ErrorSnapshot::new(),
            hx_post: String::new(),
            hx_target: String::new(),
            hx_swap: String::new(),
            htmx: None,
            ids: Arc::new(UuidIds::default()),
        }
    }

    // -- configuration --

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// URL linked from image fields for browsing stored files.
    #[must_use]
    pub fn with_file_manager(mut self, url: impl Into<String>) -> Self {
        self.file_manager_url = url.into();
        self
    }

    /// Append entries in order.
    #[must_use]
    pub fn with_fields<E: Into<FormEntry>>(mut self, entries: impl IntoIterator<Item = E>) -> Self {
        self.entries.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Append one entry.
    #[must_use]
    pub fn with_field(mut self, entry: impl Into<FormEntry>) -> Self {
        self.add_field(entry);
        self
    }

    /// Theme forced onto every field, overriding field themes.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(Arc::new(theme));
        self
    }

    #[must_use]
    pub fn with_errors<K, V>(mut self, errors: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.errors = errors.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_hx_post(mut self, url: impl Into<String>) -> Self {
        self.hx_post = url.into();
        self
    }

    #[must_use]
    pub fn with_hx_target(mut self, selector: impl Into<String>) -> Self {
        self.hx_target = selector.into();
        self
    }

    #[must_use]
    pub fn with_hx_swap(mut self, swap: impl Into<String>) -> Self {
        self.hx_swap = swap.into();
        self
    }

    /// Structured HTMX settings; non-empty values win over the single
    /// `with_hx_*` setters.
    #[must_use]
    pub fn with_htmx(mut self, config: HtmxConfig) -> Self {
        self.htmx = Some(config);
        self
    }

    /// ID source for fields without an explicit ID.
    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub fn add_field(&mut self, entry: impl Into<FormEntry>) {
        self.entries.push(entry.into());
    }

    pub fn set_fields(&mut self, entries: Vec<FormEntry>) {
        self.entries = entries;
    }

    pub fn set_file_manager_url(&mut self, url: impl Into<String>) {
        self.file_manager_url = url.into();
    }

    pub fn set_errors(&mut self, errors: ErrorSnapshot) {
        self.errors = errors;
    }

    // -- accessors --

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    #[must_use]
    pub fn file_manager_url(&self) -> &str {
        &self.file_manager_url
    }

    #[must_use]
    pub fn fields(&self) -> &[FormEntry] {
        &self.entries
    }

    pub fn fields_mut(&mut self) -> &mut [FormEntry] {
        &mut self.entries
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorSnapshot {
        &self.errors
    }

    #[must_use]
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_deref()
    }

    // -- validation --

    /// Validate submitted values against the form's direct fields.
    ///
    /// Rows and raw entries are skipped. The returned errors are in field
    /// order and replace the form's inline error snapshot.
    pub fn validate(&mut self, values: &HashMap<String, String>) -> Vec<ValidationError> {
        let errors = validate_fields(self.entries.iter().filter_map(FormEntry::as_field), values);
        self.errors = ErrorSnapshot::from_errors(&errors);
        errors
    }

    // -- rendering --

    /// Render the whole form.
    ///
    /// Fields without an ID are assigned one and keep it, so repeated builds
    /// produce identical markup.
    pub fn build(&mut self) -> Element {
        let _span = tracing::debug_span!(
            "form_build",
            id = %self.id,
            entries = self.entries.len(),
            errors = self.errors.len()
        )
        .entered();

        let Form {
            id,
            class,
            method,
            action,
            file_manager_url,
            entries,
            theme,
            errors,
            hx_post,
            hx_target,
            hx_swap,
            htmx,
            ids,
        } = self;

        let info = FormInfo {
            id: id.as_str(),
            method: method.as_str(),
            action: action.as_str(),
        };
        let ctx = RenderContext::new()
            .with_fallback_theme(default_theme())
            .with_errors(errors)
            .with_file_manager_url(file_manager_url.as_str())
            .with_form(info)
            .with_ids(&**ids);
        let ctx = match theme.as_deref() {
            Some(theme) => ctx.with_theme(theme),
            None => ctx,
        };

        let mut form = Element::new("form").attr("method", method.as_str());
        for entry in entries.iter_mut() {
            form.push_child(entry.form_group(&ctx));
        }

        if !action.is_empty() {
            form.set_attr("action", action.as_str());
        }
        if !id.is_empty() {
            form.set_attr("id", id.as_str());
        }
        if !class.is_empty() {
            form.push_class(class);
        }
        for (name, value) in [
            ("hx-post", hx_post),
            ("hx-target", hx_target),
            ("hx-swap", hx_swap),
        ] {
            if !value.is_empty() {
                form.set_attr(name, value.as_str());
            }
        }
        if let Some(config) = htmx {
            config.apply_to(&mut form);
        }
        form
    }

    /// Render and serialize.
    pub fn to_html(&mut self) -> String {
        self.build().to_html()
    }
}
