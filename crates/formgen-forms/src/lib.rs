//! # formgen-forms
//!
//! Form model and Bootstrap-style form rendering.
//!
//! ## Modules
//!
//! - [`fields`] - Fields and field kinds
//! - [`form`] - Forms and field-order resolution
//! - [`widgets`] - Input widgets
//! - [`renderers`] - Field renderers and the renderer registry
//! - [`layout`] - Layout presets
//! - [`buttons`] - Button bar entries
//! - [`view`] - Form views
//! - [`parts`] - Forms split into titled parts
//!
//! ## Example
//!
//! ```
//! use formgen_forms::{Field, Form, FormView};
//!
//! let form = Form::named("login")
//!     .field(Field::string("username").required(true))
//!     .field(Field::boolean("remember"));
//! let html = FormView::vertical().render(&form, None);
//! assert!(html.as_str().starts_with(r#"<form method="POST">"#));
//! ```

pub mod buttons;
pub mod fields;
pub mod form;
pub mod layout;
pub mod parts;
pub mod renderers;
pub mod view;
pub mod widgets;

pub use buttons::{ButtonGroup, FormButton, SubmitButton};
pub use fields::{Field, FieldKind};
pub use form::{resolve_order, Form, WILDCARD};
pub use layout::{GroupClasses, LayoutConfig};
pub use parts::{FormPart, HierarchicalFormView};
pub use renderers::{FieldRenderer, RenderContext, RendererRegistry};
pub use view::{BoundForm, FormInfo, FormView};
pub use widgets::{create_widget, Widget, WidgetType};
