#![forbid(unsafe_code)]

//! Choice options for select and radio fields.

use std::fmt;
use std::sync::Arc;

/// One choice: the submitted key and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldOption {
    pub key: String,
    pub value: String,
}

impl FieldOption {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for FieldOption {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Supplies options lazily at render time.
#[derive(Clone)]
pub struct OptionsProvider(Arc<dyn Fn() -> Vec<FieldOption> + Send + Sync>);

impl OptionsProvider {
    pub fn new(f: impl Fn() -> Vec<FieldOption> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the provider.
    #[must_use]
    pub fn options(&self) -> Vec<FieldOption> {
        (self.0)()
    }
}

impl fmt::Debug for OptionsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OptionsProvider(..)")
    }
}
