#![forbid(unsafe_code)]

//! Declarative HTML form construction.
//!
//! This crate turns typed field descriptions into themed form markup:
//!
//! - [`Field`] - one input of any [`FieldKind`], built fluently
//! - [`FieldRow`] - fields laid out side by side in columns
//! - [`Form`] - ordered entries plus method, action, theme and HTMX wiring
//! - [`validation`] - rule-based checking of submitted values
//! - [`HtmxConfig`] - structured `hx-*` attributes for the form element
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use formcraft_forms::{Field, Form, SequentialIds};
//! use formcraft_forms::validation::validators::min_length;
//!
//! let mut form = Form::new()
//!     .with_action("/signup")
//!     .with_id_generator(SequentialIds::default())
//!     .with_fields([
//!         Field::email("email", "Email").with_required(true),
//!         Field::password("password", "Password").with_validators([min_length(8)]),
//!     ]);
//!
//! let errors = form.validate(&HashMap::new());
//! assert_eq!(errors.len(), 2);
//!
//! let html = form.to_html();
//! assert!(html.starts_with(r#"<form action="/signup" method="POST">"#));
//! assert!(html.contains("email is required"));
//! ```

pub mod entry;
pub mod field;
pub mod form;
pub mod htmx;
pub mod ids;
pub mod kind;
pub mod option;
pub mod render;
pub mod row;
pub mod validation;

pub use entry::FormEntry;
pub use field::{CustomInput, CustomRenderer, Field, TableColumn, TableOptions};
pub use form::Form;
pub use htmx::HtmxConfig;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use kind::FieldKind;
pub use option::{FieldOption, OptionsProvider};
pub use render::{FormInfo, RenderContext};
pub use row::{FieldRow, FieldRowColumn};
pub use validation::{ErrorSnapshot, ValidationError, ValidationResult, Validator};
