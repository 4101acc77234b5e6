#![forbid(unsafe_code)]

//! Multi-column layout rows.

use formcraft_markup::{Element, Node};

use crate::field::Field;
use crate::render::RenderContext;

/// Column class used when none is given.
pub const DEFAULT_COLUMN_CLASS: &str = "col";
/// Row container class used when none is given.
pub const DEFAULT_ROW_CLASS: &str = "row";

/// One column of a row: a field and its column class.
#[derive(Debug, Clone)]
pub struct FieldRowColumn {
    pub field: Field,
    /// Empty means [`DEFAULT_COLUMN_CLASS`].
    pub column_class: String,
}

impl FieldRowColumn {
    #[must_use]
    pub fn new(field: Field) -> Self {
        Self {
            field,
            column_class: String::new(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, column_class: impl Into<String>) -> Self {
        self.column_class = column_class.into();
        self
    }
}

impl From<Field> for FieldRowColumn {
    fn from(field: Field) -> Self {
        Self::new(field)
    }
}

/// Fields laid out side by side.
///
/// A row has no name, value, or label of its own and is not validated;
/// its fields render with the row's theme and pick up their inline errors
/// by name.
#[derive(Debug, Clone, Default)]
pub struct FieldRow {
    columns: Vec<FieldRowColumn>,
    row_class: String,
}

impl FieldRow {
    /// Row with one auto-width column per field.
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self::with_columns(fields.into_iter().map(FieldRowColumn::new))
    }

    /// Row with explicit columns.
    #[must_use]
    pub fn with_columns(columns: impl IntoIterator<Item = FieldRowColumn>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            row_class: String::new(),
        }
    }

    /// Override the container class.
    #[must_use]
    pub fn with_row_class(mut self, row_class: impl Into<String>) -> Self {
        self.row_class = row_class.into();
        self
    }

    #[must_use]
    pub fn columns(&self) -> &[FieldRowColumn] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [FieldRowColumn] {
        &mut self.columns
    }

    /// Fields in column order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.columns.iter().map(|c| &c.field)
    }

    /// Render the row and every column's form group.
    pub fn form_group(&mut self, ctx: &RenderContext<'_>) -> Node {
        let row_class = if self.row_class.is_empty() {
            DEFAULT_ROW_CLASS
        } else {
            &self.row_class
        };
        let mut row = Element::new("div").class(row_class);
        for column in &mut self.columns {
            let class = if column.column_class.is_empty() {
                DEFAULT_COLUMN_CLASS
            } else {
                &column.column_class
            };
            let mut cell = Element::new("div").class(class);
            cell.push_child(column.field.form_group(ctx));
            row.push_child(cell);
        }
        row.into()
    }
}
