#![forbid(unsafe_code)]

//! HTMX request attributes for the form element.
//!
//! Values pass through untouched; this crate does not interpret them.

use formcraft_markup::Element;

/// Structured HTMX settings. Empty strings are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmxConfig {
    /// `hx-post`
    pub post: String,
    /// `hx-get`
    pub get: String,
    /// `hx-target`
    pub target: String,
    /// `hx-swap`
    pub swap: String,
    /// `hx-trigger`
    pub trigger: String,
    /// `hx-indicator`
    pub indicator: String,
    /// `hx-confirm`
    pub confirm: String,
    /// `hx-sync`
    pub sync: String,
    /// `hx-validate="true"` when set.
    pub validate: bool,
    /// `hx-disabled-elt`
    pub disabled_elt: String,
    /// `hx-encoding`, e.g. `multipart/form-data`
    pub encoding: String,
    /// `hx-push-url`
    pub push_url: String,
}

impl HtmxConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post(mut self, url: impl Into<String>) -> Self {
        self.post = url.into();
        self
    }

    #[must_use]
    pub fn get(mut self, url: impl Into<String>) -> Self {
        self.get = url.into();
        self
    }

    #[must_use]
    pub fn target(mut self, selector: impl Into<String>) -> Self {
        self.target = selector.into();
        self
    }

    #[must_use]
    pub fn swap(mut self, swap: impl Into<String>) -> Self {
        self.swap = swap.into();
        self
    }

    #[must_use]
    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    #[must_use]
    pub fn indicator(mut self, selector: impl Into<String>) -> Self {
        self.indicator = selector.into();
        self
    }

    #[must_use]
    pub fn confirm(mut self, message: impl Into<String>) -> Self {
        self.confirm = message.into();
        self
    }

    #[must_use]
    pub fn sync(mut self, strategy: impl Into<String>) -> Self {
        self.sync = strategy.into();
        self
    }

    #[must_use]
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    #[must_use]
    pub fn disabled_elt(mut self, selector: impl Into<String>) -> Self {
        self.disabled_elt = selector.into();
        self
    }

    #[must_use]
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    #[must_use]
    pub fn push_url(mut self, url: impl Into<String>) -> Self {
        self.push_url = url.into();
        self
    }

    /// Attribute pairs this config sets, in a fixed order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("hx-post", self.post.as_str()),
            ("hx-get", self.get.as_str()),
            ("hx-target", self.target.as_str()),
            ("hx-swap", self.swap.as_str()),
            ("hx-trigger", self.trigger.as_str()),
            ("hx-indicator", self.indicator.as_str()),
            ("hx-confirm", self.confirm.as_str()),
            ("hx-sync", self.sync.as_str()),
            ("hx-validate", if self.validate { "true" } else { "" }),
            ("hx-disabled-elt", self.disabled_elt.as_str()),
            ("hx-encoding", self.encoding.as_str()),
            ("hx-push-url", self.push_url.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
    }

    /// Set every non-empty attribute on `el`, overwriting existing values.
    pub fn apply_to(&self, el: &mut Element) {
        for (name, value) in self.attributes() {
            el.set_attr(name, value);
        }
    }
}
