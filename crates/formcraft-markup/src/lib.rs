#![forbid(unsafe_code)]

//! Markup tree for formcraft.
//!
//! Renderers build a [`Node`] tree of [`Element`]s, text, and pre-rendered
//! fragments, then serialize it with [`Node::to_html`]. Attributes are kept
//! in name order so the output is deterministic, text and attribute values
//! are escaped, and void elements close themselves (`<input ... />`).

pub mod html;
pub mod node;

pub use html::{escape_into, escape_str, is_void_element};
pub use node::{Element, Node};
