#![forbid(unsafe_code)]

//! Sample forms rendered by the demo.

use formcraft::prelude::*;
use formcraft::{Element, FieldRowColumn, FormEntry, TableColumn, TableOptions};

/// The built-in sample forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleForm {
    Signup,
    Contact,
    KitchenSink,
}

impl SampleForm {
    pub const ALL: [SampleForm; 3] = [
        SampleForm::Signup,
        SampleForm::Contact,
        SampleForm::KitchenSink,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SampleForm::Signup => "signup",
            SampleForm::Contact => "contact",
            SampleForm::KitchenSink => "kitchen-sink",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|form| form.name().eq_ignore_ascii_case(value))
    }

    /// Build the form.
    #[must_use]
    pub fn build(self) -> Form {
        match self {
            SampleForm::Signup => signup(),
            SampleForm::Contact => contact(),
            SampleForm::KitchenSink => kitchen_sink(),
        }
    }
}

fn plans() -> Vec<FieldOption> {
    vec![
        FieldOption::new("free", "Free"),
        FieldOption::new("team", "Team"),
        FieldOption::new("enterprise", "Enterprise"),
    ]
}

fn signup() -> Form {
    Form::new()
        .with_id("signup")
        .with_action("/signup")
        .with_hx_post("/signup")
        .with_hx_target("#signup")
        .with_hx_swap("outerHTML")
        .with_field(FieldRow::new([
            Field::string("first_name", "First name").with_required(true),
            Field::string("last_name", "Last name").with_required(true),
        ]))
        .with_fields([
            Field::email("email", "Email")
                .with_required(true)
                .with_validators([email()])
                .with_help("We never share it."),
            Field::password("password", "Password")
                .with_required(true)
                .with_validators([min_length(8), max_length(64)]),
            Field::string("username", "Username")
                .with_validators([alpha_numeric(), max_length(32)]),
            Field::select("plan", "Plan", plans()).with_value("free"),
            Field::checkbox("terms", "I accept the terms")
                .with_required(true)
                .with_validators([one_of(["1", "true", "on", "yes"])]),
            Field::hidden("source", "demo"),
        ])
}

fn contact() -> Form {
    Form::new()
        .with_id("contact")
        .with_action("/contact")
        .with_htmx(
            HtmxConfig::new()
                .post("/contact")
                .target("#contact")
                .swap("outerHTML")
                .indicator("#sending")
                .disabled_elt("find button"),
        )
        .with_fields([
            Field::string("name", "Name").with_required(true),
            Field::email("email", "Email")
                .with_required(true)
                .with_validators([email()]),
            Field::tel("phone", "Phone").with_validators([pattern(
                r"^\+?[0-9 ()-]{6,20}$",
                "phone is not a phone number",
            )]),
            Field::radio(
                "topic",
                "Topic",
                [
                    FieldOption::new("sales", "Sales"),
                    FieldOption::new("support", "Support"),
                    FieldOption::new("other", "Other"),
                ],
            )
            .with_value("support"),
            Field::textarea("message", "Message")
                .with_required(true)
                .with_validators([min_length(10), max_length(2000)])
                .with_placeholder("How can we help?"),
        ])
}

fn kitchen_sink() -> Form {
    let items = TableOptions::new()
        .with_columns([
            TableColumn::new("Item"),
            TableColumn::new("Qty").with_width(80),
        ])
        .with_row([
            Field::string("items[0][name]", "").with_value("Widget"),
            Field::number("items[0][qty]", "").with_value("2"),
        ])
        .with_row([
            Field::string("items[1][name]", "").with_value("Gadget"),
            Field::number("items[1][qty]", "").with_value("1"),
        ])
        .with_add_button(Element::new("button").class("btn btn-secondary").text("Add row"))
        .with_delete_button(Element::new("button").class("btn btn-link").text("Remove"));

    Form::new()
        .with_id("kitchen-sink")
        .with_action("/everything")
        .with_file_manager("/files")
        .with_fields([
            Field::string("title", "Title")
                .with_required(true)
                .with_validators([max_length(80)]),
            Field::number("age", "Age").with_validators([min(0.0), max(150.0)]),
            Field::date("born", "Born"),
            Field::datetime("meeting", "Meeting"),
            Field::color("accent", "Accent").with_value("#336699"),
            Field::url("homepage", "Homepage").with_validators([url()]),
            Field::string("server", "Server IP").with_validators([ip()]),
            Field::string("token", "Token").with_validators([uuid()]),
            Field::string("locked", "Locked")
                .with_value("read only")
                .with_readonly(true),
            Field::select("plan", "Plan", plans())
                .with_value("team")
                .with_readonly(true),
            Field::select("tags", "Tags", plans()).with_multiple(true),
            Field::file("attachment", "Attachment").with_attr("accept", ".pdf"),
            Field::image("avatar", "Avatar"),
            Field::html_area("body", "Body").with_value("<p>Hello</p>"),
            Field::block_editor("blocks", "Blocks"),
            Field::table("items", "Items", items),
            Field::string("secret", "Secret").with_invisible(true),
            Field::string("nickname", "Nickname").with_validators([custom(|value| {
                value
                    .eq_ignore_ascii_case("admin")
                    .then(|| "nickname is reserved".to_owned())
            })]),
        ])
        .with_field(FieldRow::with_columns([
            FieldRowColumn::new(Field::string("city", "City")).with_class("col-md-8"),
            FieldRowColumn::new(Field::string("zip", "Zip")).with_class("col-md-4"),
        ]))
        .with_field(FormEntry::raw("<hr />"))
}
