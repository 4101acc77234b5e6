#![forbid(unsafe_code)]

//! Form-group assembly: label, input, inline error, help.

use formcraft_markup::{Element, Node};

use crate::field::Field;
use crate::kind::FieldKind;
use crate::render::RenderContext;

impl Field {
    /// Render the complete form group for this field.
    ///
    /// Raw fields return their markup unwrapped. Everything else yields a
    /// themed wrapper holding the label (omitted for hidden fields), the
    /// input, the inline error from `ctx` if one is recorded under this
    /// field's name, and the help text.
    pub fn form_group(&mut self, ctx: &RenderContext<'_>) -> Node {
        if self.kind == FieldKind::Raw {
            return Node::raw(self.value.clone());
        }
        let _span = tracing::debug_span!(
            "form_group",
            name = %self.name,
            kind = self.kind.as_str()
        )
        .entered();

        let own = self.theme.clone();
        let theme = ctx.theme_for(own.as_deref());
        let error = ctx.error_for(&self.name);

        let mut input = self.render_input(theme, ctx);
        if error.is_some() {
            self.for_each_control(&mut input, |el| el.push_class(&theme.error_input_class));
        }

        let mut group = Element::new("div").class(&theme.form_group_class);

        if self.kind != FieldKind::Hidden {
            let marker = self.required.then(|| {
                Element::new("sup")
                    .class(&theme.required_class)
                    .text(theme.required_marker.clone())
            });
            let label = Element::new("label")
                .class(&theme.label_class)
                .attr("for", &self.id)
                .text(self.display_label().to_owned())
                .child_opt(marker);
            group.push_child(label);
        }

        group.push_child(input);

        if self.readonly && self.kind == FieldKind::Select {
            group.push_child(
                Element::new("input")
                    .class(&theme.input_class)
                    .attr("name", &self.name)
                    .attr("type", "hidden")
                    .attr("value", &self.value),
            );
        }

        if self.invisible {
            group.push_style("display:none;");
        }

        if let Some(message) = error {
            group.push_child(
                Element::new("div")
                    .class(&theme.error_class)
                    .text(message),
            );
        }

        if !self.help.is_empty() {
            group.push_child(
                Element::new("p")
                    .class(&theme.help_class)
                    .text(self.help.clone()),
            );
        }

        group.into()
    }
}
