//! # formgen-markup
//!
//! Pure, stateless builders for HTML fragments. Text passed in is escaped
//! unless it is already [`Markup`]; attribute values are always escaped.
//!
//! ## Modules
//!
//! - [`markup`] - The [`Markup`] safe-string type and escaping
//! - [`attrs`] - Ordered HTML attribute maps
//! - [`elements`] - Tags and elements
//! - [`buttons`] - Bootstrap buttons, link buttons, and one-button forms
//! - [`grid`] - Grid column wrappers

pub mod attrs;
pub mod buttons;
pub mod elements;
pub mod grid;
pub mod markup;

pub use attrs::Attrs;
pub use buttons::{button, form_button, link_button, ButtonStyle};
pub use elements::{element, is_attr_name, void_element, xmlattrs, xmltag};
pub use grid::GridColumn;
pub use markup::{escape, IntoHtml, Markup};
