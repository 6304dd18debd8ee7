//! # formgen
//!
//! Render form descriptors as Bootstrap-styled HTML fragments.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `formgen` to get everything, or on the individual
//! crates for finer-grained control.
//!
//! ```
//! use formgen::prelude::*;
//!
//! let form = Form::named("signup")
//!     .field(Field::string("email").required(true))
//!     .field(Field::hidden("csrf_token").data("abc"));
//! let html = FormView::horizontal().render(&form, None);
//! assert!(html.as_str().starts_with(r#"<form class="form-horizontal" method="POST">"#));
//! ```

/// Settings, errors and logging.
pub use formgen_core as core;

/// HTML-safe markup and element builders.
#[cfg(feature = "markup")]
pub use formgen_markup as markup;

/// Form model, widgets, renderers and views.
#[cfg(feature = "forms")]
pub use formgen_forms as forms;

// Re-export third-party crates for user convenience
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;

/// Commonly used types.
pub mod prelude {
    pub use formgen_core::logging::setup_logging;
    pub use formgen_core::settings_loader;
    pub use formgen_core::{FormgenError, FormgenResult, LayoutSettings, LayoutStyle, Settings};

    #[cfg(feature = "markup")]
    pub use formgen_markup::{button, element, form_button, link_button, Attrs, ButtonStyle, GridColumn, Markup};

    #[cfg(feature = "forms")]
    pub use formgen_forms::{
        ButtonGroup, Field, FieldKind, FieldRenderer, Form, FormButton, FormInfo, FormPart, FormView,
        HierarchicalFormView, LayoutConfig, RendererRegistry, SubmitButton, Widget, WidgetType,
    };
}
