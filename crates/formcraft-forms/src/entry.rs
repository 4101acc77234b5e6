#![forbid(unsafe_code)]

//! Form entries: the things a form lays out in order.

use formcraft_markup::Node;

use crate::field::Field;
use crate::kind::FieldKind;
use crate::render::RenderContext;
use crate::row::FieldRow;

/// Type tag reported by rows.
pub const ROW_TYPE_TAG: &str = "row";

/// One slot in a form.
#[derive(Debug, Clone)]
pub enum FormEntry {
    Field(Field),
    Row(FieldRow),
    /// Pre-rendered markup, emitted verbatim.
    Raw(String),
}

impl FormEntry {
    #[must_use]
    pub fn raw(markup: impl Into<String>) -> Self {
        FormEntry::Raw(markup.into())
    }

    /// Name used for validation and error lookup. Rows have none.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            FormEntry::Field(field) => field.name(),
            FormEntry::Row(_) | FormEntry::Raw(_) => "",
        }
    }

    /// The field kind tag, or `"row"`.
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        match self {
            FormEntry::Field(field) => field.kind().as_str(),
            FormEntry::Row(_) => ROW_TYPE_TAG,
            FormEntry::Raw(_) => FieldKind::Raw.as_str(),
        }
    }

    /// The field, when this entry is one.
    #[must_use]
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            FormEntry::Field(field) => Some(field),
            FormEntry::Row(_) | FormEntry::Raw(_) => None,
        }
    }

    pub fn as_field_mut(&mut self) -> Option<&mut Field> {
        match self {
            FormEntry::Field(field) => Some(field),
            FormEntry::Row(_) | FormEntry::Raw(_) => None,
        }
    }

    #[must_use]
    pub fn as_row(&self) -> Option<&FieldRow> {
        match self {
            FormEntry::Row(row) => Some(row),
            FormEntry::Field(_) | FormEntry::Raw(_) => None,
        }
    }

    /// Whether this entry is pre-rendered markup.
    #[must_use]
    pub fn is_raw(&self) -> bool {
        match self {
            FormEntry::Field(field) => field.kind() == FieldKind::Raw,
            FormEntry::Row(_) => false,
            FormEntry::Raw(_) => true,
        }
    }

    /// Render this entry's form group.
    pub fn form_group(&mut self, ctx: &RenderContext<'_>) -> Node {
        match self {
            FormEntry::Field(field) => field.form_group(ctx),
            FormEntry::Row(row) => row.form_group(ctx),
            FormEntry::Raw(markup) => Node::raw(markup.clone()),
        }
    }
}

impl From<Field> for FormEntry {
    fn from(field: Field) -> Self {
        FormEntry::Field(field)
    }
}

impl From<FieldRow> for FormEntry {
    fn from(row: FieldRow) -> Self {
        FormEntry::Row(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_accessors_are_empty() {
        let entry = FormEntry::from(FieldRow::new([Field::string("a", "")]));
        assert_eq!(entry.name(), "");
        assert_eq!(entry.type_tag(), "row");
        assert!(entry.as_field().is_none());
        assert!(entry.as_row().is_some());
        assert!(!entry.is_raw());
    }

    #[test]
    fn field_accessors() {
        let entry = FormEntry::from(Field::email("email", ""));
        assert_eq!(entry.name(), "email");
        assert_eq!(entry.type_tag(), "email");
        assert!(FormEntry::from(Field::raw("<hr />")).is_raw());
        assert_eq!(FormEntry::from(Field::raw("x")).type_tag(), "raw");
    }

    #[test]
    fn raw_entry_renders_verbatim() {
        let mut entry = FormEntry::raw("<hr />");
        assert!(entry.is_raw());
        assert_eq!(entry.type_tag(), "raw");
        assert_eq!(entry.name(), "");
        assert_eq!(entry.form_group(&RenderContext::new()).to_html(), "<hr />");
    }
}
