#![forbid(unsafe_code)]

//! Field kinds.

use std::fmt;

/// What kind of control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldKind {
    #[default]
    String,
    Email,
    Number,
    Password,
    Hidden,
    Date,
    DateTime,
    Select,
    TextArea,
    Checkbox,
    Radio,
    File,
    Image,
    Color,
    Tel,
    Url,
    /// Rich text editor bootstrapped by an inline script.
    HtmlArea,
    /// Delegates to an injected custom renderer.
    BlockEditor,
    /// Editable grid of nested fields.
    Table,
    /// Pre-rendered markup passed through untouched.
    Raw,
}

impl FieldKind {
    pub const ALL: [FieldKind; 20] = [
        FieldKind::String,
        FieldKind::Email,
        FieldKind::Number,
        FieldKind::Password,
        FieldKind::Hidden,
        FieldKind::Date,
        FieldKind::DateTime,
        FieldKind::Select,
        FieldKind::TextArea,
        FieldKind::Checkbox,
        FieldKind::Radio,
        FieldKind::File,
        FieldKind::Image,
        FieldKind::Color,
        FieldKind::Tel,
        FieldKind::Url,
        FieldKind::HtmlArea,
        FieldKind::BlockEditor,
        FieldKind::Table,
        FieldKind::Raw,
    ];

    /// Stable lowercase tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Password => "password",
            FieldKind::Hidden => "hidden",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime",
            FieldKind::Select => "select",
            FieldKind::TextArea => "textarea",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::File => "file",
            FieldKind::Image => "image",
            FieldKind::Color => "color",
            FieldKind::Tel => "tel",
            FieldKind::Url => "url",
            FieldKind::HtmlArea => "htmlarea",
            FieldKind::BlockEditor => "blockeditor",
            FieldKind::Table => "table",
            FieldKind::Raw => "raw",
        }
    }

    /// Parse a tag produced by [`FieldKind::as_str`].
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }

    /// The `type` attribute for kinds rendered as a plain `<input>`.
    ///
    /// `DateTime` maps to the local date-time input type.
    pub const fn input_type(self) -> Option<&'static str> {
        match self {
            FieldKind::String => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Number => Some("number"),
            FieldKind::Password => Some("password"),
            FieldKind::Hidden => Some("hidden"),
            FieldKind::Date => Some("date"),
            FieldKind::DateTime => Some("datetime-local"),
            FieldKind::Color => Some("color"),
            FieldKind::Tel => Some("tel"),
            FieldKind::Url => Some("url"),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_roundtrip() {
        for kind in FieldKind::ALL {
            assert_eq!(FieldKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(FieldKind::parse("row"), None);
    }

    #[test]
    fn scalar_input_types() {
        assert_eq!(FieldKind::DateTime.input_type(), Some("datetime-local"));
        assert_eq!(FieldKind::String.input_type(), Some("text"));
        assert_eq!(FieldKind::Select.input_type(), None);
        assert_eq!(FieldKind::Raw.input_type(), None);
    }

    #[test]
    fn default_is_string() {
        assert_eq!(FieldKind::default(), FieldKind::String);
        assert_eq!(FieldKind::HtmlArea.to_string(), "htmlarea");
    }
}
