#![forbid(unsafe_code)]

//! Per-kind input rendering.

use formcraft_markup::{Element, Node};
use formcraft_style::Theme;

use crate::field::{CustomInput, Field, TableOptions};
use crate::kind::FieldKind;
use crate::render::RenderContext;

/// Preview shown by image fields with no value.
pub const NO_IMAGE_URL: &str = "https://www.freeiconspng.com/uploads/no-image-icon-11.PNG";

/// Style added to readonly and disabled inputs.
const DIMMED_STYLE: &str = "background: #efefef;";

/// Suffix for the visible name of a readonly select.
const READONLY_SELECT_SUFFIX: &str = "_Readonly";

/// Tags that submit a value.
const CONTROL_TAGS: [&str; 3] = ["input", "select", "textarea"];

const EDITOR_DEFAULT_CONFIG: &str = "{btns:[['formatting'],['strong','em','del'],\
['superscript','subscript'],['link','justifyLeft','justifyRight','justifyCenter','justifyFull'],\
['unorderedList','orderedList'],['removeformat'],['undo','redo'],['horizontalRule'],['fullscreen']],\
autogrow:true,autogrowOnEnter:true,removeformatPasted:true,\
tagsToRemove:['script','link','embed','iframe','input'],tagsToKeep:['hr','img','i'],\
linkTargets:['_blank']}";

impl Field {
    /// Assign an ID from `ctx` if the field has none. The ID sticks.
    pub fn ensure_id(&mut self, ctx: &RenderContext<'_>) -> &str {
        if self.id.is_empty() {
            self.id = ctx.next_id();
        }
        &self.id
    }

    /// Render only the input control, without label or group wrapper.
    pub fn input(&mut self, ctx: &RenderContext<'_>) -> Node {
        let own = self.theme.clone();
        let theme = ctx.theme_for(own.as_deref());
        self.render_input(theme, ctx)
    }

    pub(crate) fn render_input(&mut self, theme: &Theme, ctx: &RenderContext<'_>) -> Node {
        if self.kind == FieldKind::Raw {
            return Node::raw(self.value.clone());
        }
        self.ensure_id(ctx);

        let mut node: Node = match self.kind {
            FieldKind::Select => self.render_select(theme).into(),
            FieldKind::Checkbox => self.render_checkbox(theme).into(),
            FieldKind::Radio => self.render_radio(theme).into(),
            FieldKind::File => self.render_file(theme).into(),
            FieldKind::TextArea => self.render_textarea(&theme.textarea_class).into(),
            FieldKind::Image => self.render_image(theme, ctx.file_manager_url()).into(),
            FieldKind::HtmlArea => self.render_html_area(theme),
            FieldKind::BlockEditor => self.render_block_editor(theme, ctx),
            FieldKind::Table => self.render_table(theme, ctx),
            kind => {
                let input_type = kind.input_type().unwrap_or("text");
                self.render_scalar(theme, input_type).into()
            }
        };
        self.post_process(&mut node);
        node
    }

    fn render_scalar(&self, theme: &Theme, input_type: &str) -> Element {
        Element::new("input")
            .class(&theme.input_class)
            .attr("id", &self.id)
            .attr("name", &self.name)
            .attr("type", input_type)
            .attr("value", &self.value)
            .attr_non_empty("placeholder", &self.placeholder)
    }

    fn render_select(&self, theme: &Theme) -> Element {
        let options = self.all_options().into_iter().map(|opt| {
            Element::new("option")
                .attr_if(opt.key == self.value, "selected", "selected")
                .attr("value", opt.key)
                .text(opt.value)
        });
        Element::new("select")
            .class(&theme.select_class)
            .attr("id", &self.id)
            .attr("name", &self.name)
            .attr_if(self.multiple, "multiple", "multiple")
            .children(options.map(Node::from))
    }

    fn render_checkbox(&self, theme: &Theme) -> Element {
        let value = if self.value.is_empty() { "1" } else { &self.value };
        let input = Element::new("input")
            .class(&theme.checkbox_input_class)
            .attr("id", &self.id)
            .attr("name", &self.name)
            .attr("type", "checkbox")
            .attr("value", value)
            .attr_if(self.is_checked(), "checked", "checked");
        Element::new("div")
            .class(&theme.checkbox_wrap_class)
            .child(input)
    }

    fn render_radio(&self, theme: &Theme) -> Element {
        let choices = self.all_options().into_iter().enumerate().map(|(index, opt)| {
            // The first choice takes the field ID so the group label targets it.
            let id = if index == 0 {
                self.id.clone()
            } else {
                format!("{}_{index}", self.id)
            };
            let input = Element::new("input")
                .class(&theme.radio_input_class)
                .attr("id", &id)
                .attr("name", &self.name)
                .attr("type", "radio")
                .attr_if(opt.key == self.value, "checked", "checked")
                .attr("value", opt.key);
            let label = Element::new("label")
                .class(&theme.radio_label_class)
                .attr("for", id)
                .text(opt.value);
            Element::new("div")
                .class(&theme.radio_wrap_class)
                .child(input)
                .child(label)
        });
        Element::new("div").children(choices.map(Node::from))
    }

    fn render_file(&self, theme: &Theme) -> Element {
        Element::new("input")
            .class(&theme.file_input_class)
            .attr("id", &self.id)
            .attr("name", &self.name)
            .attr("type", "file")
    }

    fn render_textarea(&self, class: &str) -> Element {
        Element::new("textarea")
            .class(class)
            .attr("id", &self.id)
            .attr("name", &self.name)
            .attr_non_empty("placeholder", &self.placeholder)
            .text(self.value.clone())
    }

    fn render_image(&self, theme: &Theme, file_manager_url: &str) -> Element {
        let src = if self.value.is_empty() {
            NO_IMAGE_URL
        } else {
            &self.value
        };
        let preview = Element::new("img")
            .class("img-fluid rounded-start")
            .style("margin-bottom: 15px;")
            .attr("src", src)
            .style("width:100%;max-height:100px;");
        let text = Element::new("textarea")
            .class(&theme.input_class)
            .attr("id", &self.id)
            .attr("name", &self.name)
            .attr("type", "text")
            .style("height:70px;")
            .attr_non_empty("placeholder", &self.placeholder)
            .text(self.value.clone());
        let hint = if file_manager_url.is_empty() {
            Element::new("span").text("The URL can be base64 encoded image URL")
        } else {
            Element::new("a")
                .attr("href", file_manager_url)
                .attr("target", "_blank")
                .text("Browse")
        };
        Element::new("div")
            .class("row g-3")
            .style(
                "border: 1px solid silver;border-radius: 10px; margin-top: 0px; \
                 margin-left: 0px;margin-right: 0px;",
            )
            .child(Element::new("div").class("col-md-2").child(preview))
            .child(
                Element::new("div")
                    .class("col-md-10")
                    .child(text)
                    .child(hint),
            )
    }

    fn render_html_area(&self, theme: &Theme) -> Node {
        let config = self.option_value("config").unwrap_or("null");
        // JS string literal that cannot close the script element.
        let id = serde_json::to_string(&self.id)
            .unwrap_or_else(|_| "\"\"".to_owned())
            .replace('<', "\\u003c");
        let script = format!(
            "window.formcraftEditorConfig=window.formcraftEditorConfig||{EDITOR_DEFAULT_CONFIG};\
             setTimeout(function(){{$('#'+{id}).trumbowyg({config}||window.formcraftEditorConfig);}},100);"
        );
        Node::fragment([
            Node::from(self.render_textarea(&theme.textarea_class)),
            Node::from(Element::new("script").raw(script)),
        ])
    }

    fn render_block_editor(&self, theme: &Theme, ctx: &RenderContext<'_>) -> Node {
        match &self.custom_input {
            Some(CustomInput::Markup(node)) => node.clone(),
            Some(CustomInput::Renderer(render)) => render(self, ctx),
            None => {
                tracing::warn!(
                    field = %self.name,
                    "block editor has no custom input; rendering fallback textarea"
                );
                let notice = Element::new("div")
                    .class("alert alert-danger")
                    .text("Custom input is not configured");
                Node::fragment([
                    Node::from(notice),
                    Node::from(self.render_textarea(&theme.input_class)),
                ])
            }
        }
    }

    fn render_table(&mut self, theme: &Theme, ctx: &RenderContext<'_>) -> Node {
        let id = self.id.clone();
        let Some(options) = self.table.as_deref_mut() else {
            return Element::new("table")
                .attr("id", id)
                .class(&theme.table_class)
                .into();
        };
        let TableOptions {
            columns,
            rows,
            add_button,
            delete_button,
        } = options;

        let mut header = Element::new("tr");
        if delete_button.is_some() {
            header.push_child(Element::new("th").style("width:1px;").text("#"));
        }
        for column in columns.iter() {
            let mut th = Element::new("th").text(column.label.clone());
            if column.width > 0 {
                th.push_style(&format!("width:{}px;", column.width));
            }
            header.push_child(th);
        }

        let mut body = Element::new("tbody");
        for (index, cells) in rows.iter_mut().enumerate() {
            let index = index.to_string();
            let mut tr = Element::new("tr").attr("data-row-index", &index);
            if let Some(button) = delete_button.as_ref() {
                let button = button
                    .clone()
                    .attr("type", "button")
                    .attr("data-row-index", &index);
                tr.push_child(Element::new("th").child(button));
            }
            for cell in cells.iter_mut() {
                tr.push_child(Element::new("td").child(cell.render_input(theme, ctx)));
            }
            body.push_child(tr);
        }

        let table = Element::new("table")
            .attr("id", id)
            .class(&theme.table_class)
            .child(Element::new("thead").child(header))
            .child(body);
        let add = add_button
            .as_ref()
            .map(|button| Element::new("div").child(button.clone().attr("type", "button")));
        Node::fragment(std::iter::once(Node::from(table)).chain(add.map(Node::from)))
    }

    /// Apply `f` to every control submitting under this field's name.
    ///
    /// Tables and custom markup without such controls fall back to the
    /// first element of the rendered input.
    pub(crate) fn for_each_control(&self, node: &mut Node, mut f: impl FnMut(&mut Element)) {
        let mut found = false;
        if self.kind != FieldKind::Table {
            let name = self.name.as_str();
            node.for_each_element_mut(&mut |el: &mut Element| {
                if CONTROL_TAGS.contains(&el.tag_name()) && el.attribute("name") == Some(name) {
                    f(el);
                    found = true;
                }
            });
        }
        if !found && let Some(el) = node.primary_element_mut() {
            f(el);
        }
    }

    /// Readonly/disabled handling, then free-form attributes.
    fn post_process(&self, node: &mut Node) {
        self.for_each_control(node, |el| self.post_process_control(el));
    }

    fn post_process_control(&self, el: &mut Element) {
        if self.readonly {
            if self.kind == FieldKind::Select {
                el.set_attr("disabled", "disabled");
                el.set_attr("name", format!("{}{READONLY_SELECT_SUFFIX}", self.name));
            } else {
                el.set_attr("readonly", "readonly");
            }
        }
        if self.disabled {
            el.set_attr("disabled", "disabled");
        }
        if self.readonly || self.disabled {
            el.push_style(DIMMED_STYLE);
        }
        for (name, value) in &self.attrs {
            el.set_attr(name.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::FieldOption;
    use formcraft_markup::Element;

    fn bs() -> Theme {
        Theme::bootstrap5()
    }

    fn render(field: &mut Field) -> String {
        let theme = bs();
        let ctx = RenderContext::new();
        field.render_input(&theme, &ctx).to_html()
    }

    // -- scalar kinds --

    #[test]
    fn scalar_input_types() {
        for (kind, ty) in [
            (FieldKind::String, "text"),
            (FieldKind::Email, "email"),
            (FieldKind::Number, "number"),
            (FieldKind::Password, "password"),
            (FieldKind::Hidden, "hidden"),
            (FieldKind::Date, "date"),
            (FieldKind::Color, "color"),
            (FieldKind::Tel, "tel"),
            (FieldKind::Url, "url"),
        ] {
            let mut f = Field::new(kind).with_id("ID").with_name("NAME").with_value("VALUE");
            assert_eq!(
                render(&mut f),
                format!(
                    r#"<input class="form-control" id="ID" name="NAME" type="{ty}" value="VALUE" />"#
                )
            );
        }
    }

    #[test]
    fn datetime_is_local() {
        let mut f = Field::datetime("when", "").with_id("ID");
        assert!(render(&mut f).contains(r#"type="datetime-local""#));
    }

    #[test]
    fn placeholder_only_when_set() {
        let mut f = Field::string("q", "").with_id("ID");
        assert!(!render(&mut f).contains("placeholder"));
        let mut f = f.with_placeholder("Search");
        assert!(render(&mut f).contains(r#"placeholder="Search""#));
    }

    #[test]
    fn value_is_escaped() {
        let mut f = Field::string("q", "").with_id("ID").with_value(r#""><script>"#);
        let html = render(&mut f);
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }

    // -- select --

    #[test]
    fn select_marks_selected_and_appends_provider() {
        let mut f = Field::select("c", "", [FieldOption::new("a", "Alpha")])
            .with_id("ID")
            .with_value("b")
            .with_options_fn(|| vec![FieldOption::new("b", "Beta")]);
        assert_eq!(
            render(&mut f),
            r#"<select class="form-select" id="ID" name="c"><option value="a">Alpha</option><option selected="selected" value="b">Beta</option></select>"#
        );
    }

    #[test]
    fn select_multiple() {
        let mut f = Field::select("c", "", []).with_id("ID").with_multiple(true);
        assert!(render(&mut f).contains(r#"multiple="multiple""#));
    }

    #[test]
    fn readonly_select_is_disabled_and_renamed() {
        let mut f = Field::select("NAME", "", [FieldOption::new("VALUE", "v")])
            .with_id("ID")
            .with_value("VALUE")
            .with_readonly(true);
        let html = render(&mut f);
        assert!(html.starts_with(
            r#"<select class="form-select" disabled="disabled" id="ID" name="NAME_Readonly" style="background: #efefef;">"#
        ));
        assert!(!html.contains("readonly="));
    }

    // -- checkbox / radio --

    #[test]
    fn checkbox_defaults_value_to_one() {
        let mut f = Field::checkbox("agree", "").with_id("ID");
        assert_eq!(
            render(&mut f),
            r#"<div class="form-check"><input class="form-check-input" id="ID" name="agree" type="checkbox" value="1" /></div>"#
        );
    }

    #[test]
    fn checkbox_checked_values() {
        for v in ["1", "true", "on", "yes"] {
            let mut f = Field::checkbox("c", "").with_id("ID").with_value(v);
            assert!(render(&mut f).contains(r#"checked="checked""#), "{v}");
        }
        for v in ["0", "false", "no"] {
            let mut f = Field::checkbox("c", "").with_id("ID").with_value(v);
            assert!(!render(&mut f).contains("checked="), "{v}");
        }
    }

    #[test]
    fn radio_one_pair_per_option() {
        let mut f = Field::radio(
            "size",
            "",
            [FieldOption::new("s", "Small"), FieldOption::new("m", "Medium")],
        )
        .with_id("ID")
        .with_value("m");
        assert_eq!(
            render(&mut f),
            concat!(
                "<div>",
                r#"<div class="form-check"><input class="form-check-input" id="ID" name="size" type="radio" value="s" /><label class="form-check-label" for="ID">Small</label></div>"#,
                r#"<div class="form-check"><input checked="checked" class="form-check-input" id="ID_1" name="size" type="radio" value="m" /><label class="form-check-label" for="ID_1">Medium</label></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn disabled_checkbox_disables_the_input() {
        let mut f = Field::checkbox("agree", "").with_id("ID").with_disabled(true);
        assert_eq!(
            render(&mut f),
            r#"<div class="form-check"><input class="form-check-input" disabled="disabled" id="ID" name="agree" style="background: #efefef;" type="checkbox" value="1" /></div>"#
        );
    }

    #[test]
    fn readonly_radio_marks_every_choice() {
        let mut f = Field::radio(
            "size",
            "",
            [FieldOption::new("s", "Small"), FieldOption::new("m", "Medium")],
        )
        .with_id("ID")
        .with_readonly(true)
        .with_attr("required", "required");
        let html = render(&mut f);
        assert!(html.starts_with("<div><div class=\"form-check\"><input"));
        assert_eq!(html.matches(r#"readonly="readonly""#).count(), 2);
        assert_eq!(html.matches(r#"required="required""#).count(), 2);
        assert!(!html.contains(r#"<div readonly"#));
        assert!(!html.contains(r#"<div class="form-check" readonly"#));
    }

    // -- file / textarea --

    #[test]
    fn file_has_no_value() {
        let mut f = Field::file("doc", "").with_id("ID").with_value("ignored.pdf");
        assert_eq!(
            render(&mut f),
            r#"<input class="form-control" id="ID" name="doc" type="file" />"#
        );
    }

    #[test]
    fn textarea_holds_value() {
        let mut f = Field::textarea("bio", "").with_id("ID").with_value("a < b");
        assert_eq!(
            render(&mut f),
            r#"<textarea class="form-control" id="ID" name="bio">a &lt; b</textarea>"#
        );
    }

    // -- image --

    #[test]
    fn image_placeholder_and_hint() {
        let mut f = Field::image("pic", "").with_id("ID");
        let html = render(&mut f);
        assert!(html.contains(NO_IMAGE_URL));
        assert!(html.contains("<span>The URL can be base64 encoded image URL</span>"));
        assert!(!html.contains("Browse"));
    }

    #[test]
    fn readonly_image_locks_the_textarea() {
        let mut f = Field::image("pic", "").with_id("ID").with_readonly(true);
        let html = render(&mut f);
        assert!(html.starts_with(r#"<div class="row g-3" style="border:"#));
        assert!(html.contains(r#"<textarea class="form-control" id="ID" name="pic" readonly="readonly" style="height:70px;background: #efefef;" type="text">"#));
    }

    #[test]
    fn image_browse_link_with_file_manager() {
        let theme = bs();
        let ctx = RenderContext::new().with_file_manager_url("/files");
        let mut f = Field::image("pic", "").with_id("ID").with_value("/a.png");
        let html = f.render_input(&theme, &ctx).to_html();
        assert!(html.contains(r#"<a href="/files" target="_blank">Browse</a>"#));
        assert!(html.contains(r#"src="/a.png""#));
        assert!(!html.contains(NO_IMAGE_URL));
    }

    // -- html area / block editor --

    #[test]
    fn html_area_script_uses_config_option() {
        let mut f = Field::html_area("body", "")
            .with_id("ID")
            .with_options([FieldOption::new("config", "{autogrow:false}")]);
        let html = render(&mut f);
        assert!(html.starts_with(r#"<textarea class="form-control" id="ID" name="body"></textarea><script>"#));
        assert!(html.contains(r#"$('#'+"ID").trumbowyg({autogrow:false}||"#));
    }

    #[test]
    fn html_area_default_config_is_null() {
        let mut f = Field::html_area("body", "").with_id("ID");
        assert!(render(&mut f).contains("trumbowyg(null||window.formcraftEditorConfig)"));
    }

    #[test]
    fn block_editor_without_custom_input_degrades() {
        let mut f = Field::block_editor("content", "").with_id("ID").with_value("keep me");
        let html = render(&mut f);
        assert!(html.contains(r#"<div class="alert alert-danger">"#));
        assert!(html.contains(
            r#"<textarea class="form-control" id="ID" name="content">keep me</textarea>"#
        ));
    }

    #[test]
    fn degraded_block_editor_locks_the_fallback_textarea() {
        let mut f = Field::block_editor("content", "")
            .with_id("ID")
            .with_value("keep")
            .with_readonly(true)
            .with_attr("rows", "8");
        assert_eq!(
            render(&mut f),
            concat!(
                r#"<div class="alert alert-danger">Custom input is not configured</div>"#,
                r#"<textarea class="form-control" id="ID" name="content" readonly="readonly" rows="8" style="background: #efefef;">keep</textarea>"#
            )
        );
    }

    #[test]
    fn html_area_script_cannot_close_itself() {
        let mut f = Field::html_area("body", "").with_id("</script><b>");
        let html = render(&mut f);
        assert!(html.contains(r#"$('#'+"\u003c/script>\u003cb>")"#));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn block_editor_custom_markup() {
        let mut f = Field::block_editor("content", "")
            .with_id("ID")
            .with_custom_input(Element::new("div").class("editor"));
        assert_eq!(render(&mut f), r#"<div class="editor"></div>"#);
    }

    #[test]
    fn block_editor_custom_renderer_sees_field() {
        let mut f = Field::block_editor("content", "")
            .with_id("ID")
            .with_value("v")
            .with_custom_renderer(|field, _ctx| {
                Element::new("div")
                    .attr("data-for", field.id())
                    .text(field.value().to_owned())
                    .into()
            });
        assert_eq!(render(&mut f), r#"<div data-for="ID">v</div>"#);
    }

    // -- table --

    #[test]
    fn table_layout() {
        let opts = TableOptions::new()
            .with_columns([
                crate::field::TableColumn::new("Item").with_width(200),
                crate::field::TableColumn::new("Qty"),
            ])
            .with_row([
                Field::string("item_0", "").with_id("i0").with_value("Bolt"),
                Field::number("qty_0", "").with_id("q0").with_value("3"),
            ])
            .with_delete_button(Element::new("button").class("del").text("x"))
            .with_add_button(Element::new("button").class("add").text("+"));
        let mut f = Field::table("lines", "", opts).with_id("T");
        let html = render(&mut f);
        assert!(html.starts_with(
            r#"<table class="table table-striped table-hover mb-0" id="T"><thead><tr><th style="width:1px;">#</th><th style="width:200px;">Item</th><th>Qty</th></tr></thead>"#
        ));
        assert!(html.contains(
            r#"<tr data-row-index="0"><th><button class="del" data-row-index="0" type="button">x</button></th><td><input class="form-control" id="i0" name="item_0" type="text" value="Bolt" /></td>"#
        ));
        assert!(html.ends_with(
            r#"</table><div><button class="add" type="button">+</button></div>"#
        ));
    }

    #[test]
    fn table_cells_use_parent_theme() {
        let opts = TableOptions::new().with_row([Field::string("a", "").with_theme(bs())]);
        let mut f = Field::table("t", "", opts).with_id("T");
        let theme = Theme::tailwind();
        let html = f.render_input(&theme, &RenderContext::new()).to_html();
        assert!(!html.contains("form-control"));
        assert!(html.contains("rounded-md"));
    }

    #[test]
    fn table_cells_get_ids() {
        let opts = TableOptions::new().with_row([Field::string("a", "")]);
        let mut f = Field::table("t", "", opts).with_id("T");
        render(&mut f);
        let cell = &f.table_options().expect("table").rows[0][0];
        assert!(!cell.id().is_empty());
    }

    // -- post-processing --

    #[test]
    fn readonly_and_disabled_dim_once() {
        let mut f = Field::string("n", "")
            .with_id("ID")
            .with_readonly(true)
            .with_disabled(true);
        let html = render(&mut f);
        assert!(html.contains(r#"readonly="readonly""#));
        assert!(html.contains(r#"disabled="disabled""#));
        assert_eq!(html.matches("background: #efefef;").count(), 1);
    }

    #[test]
    fn attrs_applied_last() {
        let mut f = Field::string("n", "")
            .with_id("ID")
            .with_readonly(true)
            .with_attr("readonly", "false")
            .with_attr("data-x", "1");
        let html = render(&mut f);
        assert!(html.contains(r#"readonly="false""#));
        assert!(html.contains(r#"data-x="1""#));
    }

    #[test]
    fn attrs_target_first_element_of_fragment() {
        let mut f = Field::html_area("body", "").with_id("ID").with_attr("rows", "8");
        assert!(render(&mut f).starts_with(r#"<textarea class="form-control" id="ID" name="body" rows="8">"#));
    }

    #[test]
    fn raw_passes_through() {
        let mut f = Field::raw("A<br />B").with_attr("class", "ignored");
        assert_eq!(render(&mut f), "A<br />B");
        assert!(f.id().is_empty());
    }

    #[test]
    fn id_assigned_lazily_and_kept() {
        let mut f = Field::string("n", "");
        let first = render(&mut f);
        let id = f.id().to_owned();
        assert!(id.starts_with("id_"));
        assert_eq!(render(&mut f), first);
    }
}
