#![forbid(unsafe_code)]

//! The field model.
//!
//! A [`Field`] is the full declaration of one input: its kind, name, label,
//! current value, flags, options, free-form attributes, and validators.
//! Flags that mean nothing for a kind are ignored at render time, never
//! rejected.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use formcraft_markup::{Element, Node};
use formcraft_style::Theme;

use crate::kind::FieldKind;
use crate::option::{FieldOption, OptionsProvider};
use crate::render::RenderContext;
use crate::validation::{SharedValidator, Validator};

// ---------------------------------------------------------------------------
// Table options
// ---------------------------------------------------------------------------

/// Header cell of a table field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableColumn {
    pub label: String,
    /// Pixel width; `0` leaves the column unsized.
    pub width: u32,
}

impl TableColumn {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width: 0,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

/// Layout of a table field: header columns, rows of nested fields, and
/// optional add/delete row controls.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<Field>>,
    /// Rendered once, after the table.
    pub add_button: Option<Element>,
    /// Cloned into a leading cell of every row.
    pub delete_button: Option<Element>,
}

impl TableOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = TableColumn>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_row(mut self, row: impl IntoIterator<Item = Field>) -> Self {
        self.rows.push(row.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_add_button(mut self, button: Element) -> Self {
        self.add_button = Some(button);
        self
    }

    #[must_use]
    pub fn with_delete_button(mut self, button: Element) -> Self {
        self.delete_button = Some(button);
        self
    }
}

// ---------------------------------------------------------------------------
// Custom input
// ---------------------------------------------------------------------------

/// Renders a custom input for a field.
pub type CustomRenderer = Arc<dyn Fn(&Field, &RenderContext<'_>) -> Node + Send + Sync>;

/// Override for the block-editor input.
#[derive(Clone)]
pub enum CustomInput {
    /// Fixed markup.
    Markup(Node),
    /// Markup computed per render from the field and context.
    Renderer(CustomRenderer),
}

impl fmt::Debug for CustomInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomInput::Markup(node) => f.debug_tuple("Markup").field(node).finish(),
            CustomInput::Renderer(_) => f.write_str("Renderer(..)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// One input's declaration.
#[derive(Clone, Default)]
pub struct Field {
    pub(crate) id: String,
    pub(crate) kind: FieldKind,
    pub(crate) name: String,
    pub(crate) label: String,
    pub(crate) help: String,
    pub(crate) placeholder: String,
    pub(crate) value: String,
    pub(crate) options: Vec<FieldOption>,
    pub(crate) options_provider: Option<OptionsProvider>,
    pub(crate) required: bool,
    pub(crate) readonly: bool,
    pub(crate) disabled: bool,
    pub(crate) invisible: bool,
    pub(crate) multiple: bool,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) validators: Vec<SharedValidator>,
    pub(crate) table: Option<Box<TableOptions>>,
    pub(crate) custom_input: Option<CustomInput>,
    pub(crate) theme: Option<Arc<Theme>>,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("label", &self.label)
            .field("value", &self.value)
            .field("required", &self.required)
            .field("readonly", &self.readonly)
            .field("disabled", &self.disabled)
            .field("options", &self.options.len())
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

impl Field {
    /// Field of the given kind with everything else empty.
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    fn labeled(kind: FieldKind, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    // -- constructors --

    #[must_use]
    pub fn string(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::String, name, label)
    }

    #[must_use]
    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::Email, name, label)
    }

    #[must_use]
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::Number, name, label)
    }

    #[must_use]
    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::Password, name, label)
    }

    /// Hidden fields take a value rather than a label.
    #[must_use]
    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Hidden,
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::Date, name, label)
    }

    #[must_use]
    pub fn datetime(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::DateTime, name, label)
    }

    #[must_use]
    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = FieldOption>,
    ) -> Self {
        Self::labeled(FieldKind::Select, name, label).with_options(options)
    }

    #[must_use]
    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::TextArea, name, label)
    }

    #[must_use]
    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::Checkbox, name, label)
    }

    #[must_use]
    pub fn radio(
        name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = FieldOption>,
    ) -> Self {
        Self::labeled(FieldKind::Radio, name, label).with_options(options)
    }

    #[must_use]
    pub fn file(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::File, name, label)
    }

    #[must_use]
    pub fn image(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::Image, name, label)
    }

    #[must_use]
    pub fn color(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::Color, name, label)
    }

    #[must_use]
    pub fn tel(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::Tel, name, label)
    }

    #[must_use]
    pub fn url(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::Url, name, label)
    }

    #[must_use]
    pub fn html_area(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::HtmlArea, name, label)
    }

    #[must_use]
    pub fn block_editor(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::labeled(FieldKind::BlockEditor, name, label)
    }

    #[must_use]
    pub fn table(name: impl Into<String>, label: impl Into<String>, options: TableOptions) -> Self {
        Self::labeled(FieldKind::Table, name, label).with_table_options(options)
    }

    /// Pre-rendered markup emitted verbatim.
    #[must_use]
    pub fn raw(markup: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Raw,
            value: markup.into(),
            ..Self::default()
        }
    }

    // -- fluent configuration --

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_invisible(mut self, invisible: bool) -> Self {
        self.invisible = invisible;
        self
    }

    #[must_use]
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Replace the static options.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = FieldOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Options supplied at render time, listed after the static ones.
    #[must_use]
    pub fn with_options_fn(
        mut self,
        provider: impl Fn() -> Vec<FieldOption> + Send + Sync + 'static,
    ) -> Self {
        self.options_provider = Some(OptionsProvider::new(provider));
        self
    }

    /// Fixed markup for a block editor.
    #[must_use]
    pub fn with_custom_input(mut self, markup: impl Into<Node>) -> Self {
        self.custom_input = Some(CustomInput::Markup(markup.into()));
        self
    }

    /// Per-render markup for a block editor.
    #[must_use]
    pub fn with_custom_renderer(
        mut self,
        render: impl Fn(&Field, &RenderContext<'_>) -> Node + Send + Sync + 'static,
    ) -> Self {
        self.custom_input = Some(CustomInput::Renderer(Arc::new(render)));
        self
    }

    /// Set a free-form attribute on the input, applied after everything
    /// else.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attrs
            .extend(attrs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Append validators, keeping declaration order.
    #[must_use]
    pub fn with_validators(mut self, validators: impl IntoIterator<Item = SharedValidator>) -> Self {
        self.validators.extend(validators);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    #[must_use]
    pub fn with_table_options(mut self, options: TableOptions) -> Self {
        self.table = Some(Box::new(options));
        self
    }

    /// Theme used when the enclosing form supplies none.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(Arc::new(theme));
        self
    }

    // -- accessors --

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: FieldKind) {
        self.kind = kind;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Label text as rendered: the label, or the name when unlabeled.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn set_help(&mut self, help: impl Into<String>) {
        self.help = help.into();
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[must_use]
    pub fn options(&self) -> &[FieldOption] {
        &self.options
    }

    pub fn set_options(&mut self, options: Vec<FieldOption>) {
        self.options = options;
    }

    #[must_use]
    pub fn options_provider(&self) -> Option<&OptionsProvider> {
        self.options_provider.as_ref()
    }

    /// Static options followed by provider options.
    #[must_use]
    pub fn all_options(&self) -> Vec<FieldOption> {
        let mut all = self.options.clone();
        if let Some(provider) = &self.options_provider {
            all.extend(provider.options());
        }
        all
    }

    /// Value of the static option keyed `key`.
    #[must_use]
    pub fn option_value(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.value.as_str())
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_invisible(&self) -> bool {
        self.invisible
    }

    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    #[must_use]
    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    #[must_use]
    pub fn validators(&self) -> &[SharedValidator] {
        &self.validators
    }

    #[must_use]
    pub fn table_options(&self) -> Option<&TableOptions> {
        self.table.as_deref()
    }

    pub fn table_options_mut(&mut self) -> Option<&mut TableOptions> {
        self.table.as_deref_mut()
    }

    #[must_use]
    pub fn custom_input(&self) -> Option<&CustomInput> {
        self.custom_input.as_ref()
    }

    #[must_use]
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_deref()
    }

    /// Whether a checkbox with this value renders checked.
    ///
    /// Only the exact strings `1`, `true`, `on`, and `yes` count.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        matches!(self.value.as_str(), "1" | "true" | "on" | "yes")
    }

    // -- kind predicates --

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.kind == FieldKind::Hidden
    }

    #[must_use]
    pub fn is_raw(&self) -> bool {
        self.kind == FieldKind::Raw
    }

    #[must_use]
    pub fn is_select(&self) -> bool {
        self.kind == FieldKind::Select
    }

    #[must_use]
    pub fn is_table(&self) -> bool {
        self.kind == FieldKind::Table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- constructors --

    #[test]
    fn labeled_constructors_set_kind() {
        let cases = [
            (Field::string("n", "L"), FieldKind::String),
            (Field::email("n", "L"), FieldKind::Email),
            (Field::number("n", "L"), FieldKind::Number),
            (Field::password("n", "L"), FieldKind::Password),
            (Field::date("n", "L"), FieldKind::Date),
            (Field::datetime("n", "L"), FieldKind::DateTime),
            (Field::textarea("n", "L"), FieldKind::TextArea),
            (Field::checkbox("n", "L"), FieldKind::Checkbox),
            (Field::file("n", "L"), FieldKind::File),
            (Field::image("n", "L"), FieldKind::Image),
            (Field::color("n", "L"), FieldKind::Color),
            (Field::tel("n", "L"), FieldKind::Tel),
            (Field::url("n", "L"), FieldKind::Url),
            (Field::html_area("n", "L"), FieldKind::HtmlArea),
            (Field::block_editor("n", "L"), FieldKind::BlockEditor),
        ];
        for (field, kind) in cases {
            assert_eq!(field.kind(), kind);
            assert_eq!(field.name(), "n");
            assert_eq!(field.label(), "L");
            assert!(field.id().is_empty());
        }
    }

    #[test]
    fn hidden_takes_value() {
        let f = Field::hidden("token", "abc");
        assert!(f.is_hidden());
        assert_eq!(f.value(), "abc");
        assert!(f.label().is_empty());
    }

    #[test]
    fn raw_holds_markup() {
        let f = Field::raw("<hr />");
        assert!(f.is_raw());
        assert_eq!(f.value(), "<hr />");
    }

    #[test]
    fn select_and_radio_keep_options() {
        let opts = [FieldOption::new("a", "A"), FieldOption::new("b", "B")];
        assert_eq!(Field::select("s", "S", opts.clone()).options().len(), 2);
        assert_eq!(Field::radio("r", "R", opts).options()[1].key, "b");
    }

    // -- fluent --

    #[test]
    fn fluent_flags() {
        let f = Field::string("n", "")
            .with_required(true)
            .with_readonly(true)
            .with_disabled(true)
            .with_invisible(true)
            .with_multiple(true);
        assert!(f.is_required() && f.is_readonly() && f.is_disabled());
        assert!(f.is_invisible() && f.is_multiple());
    }

    #[test]
    fn with_attr_overwrites_key() {
        let f = Field::string("n", "")
            .with_attr("data-x", "1")
            .with_attrs([("data-x", "2"), ("data-y", "3")]);
        assert_eq!(f.attrs().get("data-x").map(String::as_str), Some("2"));
        assert_eq!(f.attrs().len(), 2);
    }

    #[test]
    fn display_label_falls_back_to_name() {
        assert_eq!(Field::string("email", "").display_label(), "email");
        assert_eq!(Field::string("email", "E-mail").display_label(), "E-mail");
    }

    #[test]
    fn all_options_static_then_provider() {
        let f = Field::select("s", "", [FieldOption::new("a", "A")])
            .with_options_fn(|| vec![FieldOption::new("b", "B")]);
        let keys: Vec<_> = f.all_options().into_iter().map(|o| o.key).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn option_value_lookup() {
        let f = Field::html_area("body", "")
            .with_options([FieldOption::new("config", "{toolbar: false}")]);
        assert_eq!(f.option_value("config"), Some("{toolbar: false}"));
        assert_eq!(f.option_value("missing"), None);
    }

    #[test]
    fn checkbox_truth_table() {
        for v in ["1", "true", "on", "yes"] {
            assert!(Field::checkbox("c", "").with_value(v).is_checked(), "{v}");
        }
        for v in ["0", "false", "", "off", "no", "TRUE", "Yes", " 1"] {
            assert!(!Field::checkbox("c", "").with_value(v).is_checked(), "{v:?}");
        }
    }

    #[test]
    fn table_options_builder() {
        let opts = TableOptions::new()
            .with_columns([TableColumn::new("Item").with_width(120), TableColumn::new("Qty")])
            .with_row([Field::string("item_0", ""), Field::number("qty_0", "")])
            .with_add_button(Element::new("button").text("Add"));
        let f = Field::table("lines", "Lines", opts);
        let t = f.table_options().expect("table");
        assert_eq!(t.columns[0].width, 120);
        assert_eq!(t.rows[0].len(), 2);
        assert!(t.add_button.is_some());
        assert!(t.delete_button.is_none());
    }

    #[test]
    fn debug_is_compact() {
        let f = Field::string("n", "").with_validators([crate::validation::validators::required()]);
        let dbg = format!("{f:?}");
        assert!(dbg.contains("validators: 1"));
    }
}
