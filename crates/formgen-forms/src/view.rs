//! Form views: render a whole form with a layout.
//!
//! A [`FormView`] renders, in order: the form's hidden inputs, the errors of
//! hidden fields, every visible field (each through its renderer and wrapped
//! in the layout's group `<div>`), and the button bar. The result is wrapped
//! in a `<form>` element.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use tracing::debug;

use formgen_core::logging::render_span;
use formgen_core::{FormgenResult, LayoutStyle, Settings};
use formgen_markup::{element, Attrs, Markup};

use crate::buttons::{FormButton, SubmitButton};
use crate::fields::Field;
use crate::form::{resolve_order, Form};
use crate::layout::LayoutConfig;
use crate::renderers::{RenderContext, RendererRegistry};

/// Per-render information that becomes attributes of the `<form>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormInfo {
    /// The `action` URL.
    pub action: Option<String>,
    /// The form's `id`.
    pub id: Option<String>,
}

impl FormInfo {
    /// Empty info.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `action` URL.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the form `id`.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Renders forms with a layout, a button bar and a renderer registry.
#[derive(Debug, Clone)]
pub struct FormView {
    layout: LayoutConfig,
    buttons: Vec<FormButton>,
    method: String,
    field_order: Option<Vec<String>>,
    formfield_view: Option<Box<FormView>>,
    registry: Arc<RendererRegistry>,
}

impl Default for FormView {
    fn default() -> Self {
        Self::vertical()
    }
}

impl FormView {
    /// A view with the given layout, an "OK" submit button and the
    /// built-in renderers.
    pub fn with_layout(layout: LayoutConfig) -> Self {
        Self {
            layout,
            buttons: vec![SubmitButton::new("OK").into()],
            method: "POST".to_string(),
            field_order: None,
            formfield_view: None,
            registry: RendererRegistry::shared(),
        }
    }

    /// A view without layout classes.
    pub fn plain() -> Self {
        Self::with_layout(LayoutConfig::plain())
    }

    /// Labels above inputs.
    pub fn vertical() -> Self {
        Self::with_layout(LayoutConfig::vertical())
    }

    /// Labels beside inputs on a `[2, 10]` grid.
    pub fn horizontal() -> Self {
        Self::with_layout(LayoutConfig::horizontal())
    }

    /// Labels beside inputs with explicit widths and breakpoint.
    pub fn horizontal_with(widths: [u8; 2], size: &str) -> Self {
        Self::with_layout(LayoutConfig::horizontal_with(widths, size))
    }

    /// Builds a view from loaded settings, including the nested form view
    /// when `nested_layout` is set.
    pub fn from_settings(settings: &Settings) -> FormgenResult<Self> {
        let mut view = Self::with_layout(LayoutConfig::from_settings(&settings.layout)?)
            .with_method(settings.layout.method.clone());
        if let Some(nested) = &settings.nested_layout {
            let nested_view = Self::with_layout(LayoutConfig::from_settings(nested)?)
                .with_method(nested.method.clone());
            view = view.with_formfield_view(nested_view);
        }
        Ok(view)
    }

    // ── Builders ────────────────────────────────────────────────────

    /// Replaces the button bar.
    #[must_use]
    pub fn with_buttons(mut self, buttons: impl IntoIterator<Item = impl Into<FormButton>>) -> Self {
        self.buttons = buttons.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a button to the button bar.
    #[must_use]
    pub fn with_button(mut self, button: impl Into<FormButton>) -> Self {
        self.buttons.push(button.into());
        self
    }

    /// Sets the `method` attribute of the `<form>`.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Overrides the field order of forms rendered by this view.
    #[must_use]
    pub fn with_field_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the view used for nested forms.
    #[must_use]
    pub fn with_formfield_view(mut self, view: Self) -> Self {
        self.formfield_view = Some(Box::new(view));
        self
    }

    /// Replaces the renderer registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<RendererRegistry>) -> Self {
        self.registry = registry;
        self
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// The layout applied around fields.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// The button bar entries.
    pub fn buttons(&self) -> &[FormButton] {
        &self.buttons
    }

    /// The `method` attribute of the `<form>`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The view's field order, if any.
    pub fn field_order(&self) -> Option<&[String]> {
        self.field_order.as_deref()
    }

    /// The renderer registry used for dispatch.
    pub fn registry(&self) -> &Arc<RendererRegistry> {
        &self.registry
    }

    /// The view used for nested forms.
    ///
    /// Defaults to the view itself (minus its field order) for the plain
    /// layout and to a fresh horizontal view sharing this view's registry
    /// otherwise.
    pub fn formfield_view(&self) -> Cow<'_, Self> {
        match (&self.formfield_view, self.layout.style) {
            (Some(view), _) => Cow::Borrowed(view),
            (None, LayoutStyle::Plain) if self.field_order.is_none() => Cow::Borrowed(self),
            (None, LayoutStyle::Plain) => Cow::Owned(Self {
                field_order: None,
                ..self.clone()
            }),
            (None, _) => {
                Cow::Owned(Self::horizontal().with_registry(Arc::clone(&self.registry)))
            }
        }
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Renders one field with its decoration and group wrapper.
    ///
    /// Fields whose widget suppresses decoration render as the bare widget.
    pub fn render_field(&self, field: &Field, form_info: Option<&FormInfo>, extra_attrs: &Attrs) -> Markup {
        let widget = field.widget();
        if widget.suppresses_decoration() {
            debug!(field = %field.name, widget = %widget.widget_type(), "rendering bare widget");
            return field.render_widget(extra_attrs);
        }

        let renderer = self.registry.resolve(field);
        debug!(field = %field.name, type_tag = field.type_tag(), renderer = ?renderer, "rendering field");
        let ctx = RenderContext {
            view: self,
            field,
            form_info,
            extra_attrs,
        };
        let html = renderer.render(&ctx);

        match &self.layout.group {
            Some(group) => element(
                "div",
                &Attrs::from([("class", group.class_for(field.has_errors(), field.required))]),
                html,
            ),
            None => html,
        }
    }

    /// The visible fields of `form`, in this view's order when it has one
    /// and in the form's own order otherwise.
    pub fn visible_fields<'a>(&self, form: &'a Form) -> Vec<&'a Field> {
        let ordered = match &self.field_order {
            Some(order) => resolve_order(form.fields(), order),
            None => form.ordered_fields(),
        };
        ordered.into_iter().filter(|f| !f.is_hidden()).collect()
    }

    /// Renders every visible field of `form`.
    pub fn render_fields(&self, form: &Form, form_info: Option<&FormInfo>) -> Markup {
        self.render_field_list(&self.visible_fields(form), form_info)
    }

    /// Renders the given fields in order.
    pub fn render_field_list(&self, fields: &[&Field], form_info: Option<&FormInfo>) -> Markup {
        let no_attrs = Attrs::new();
        fields
            .iter()
            .map(|f| self.render_field(f, form_info, &no_attrs))
            .collect()
    }

    /// Errors of hidden fields, which have no place of their own.
    pub fn hidden_errors(&self, form: &Form) -> Markup {
        let attrs = Attrs::from([("class", "invalid-feedback")]);
        form.hidden_fields()
            .flat_map(|f| f.errors.iter())
            .map(|e| element("p", &attrs, e))
            .collect()
    }

    fn button_bar_attrs(&self) -> Attrs {
        let mut attrs = self.layout.button_bar_attrs.clone();
        if attrs.is_empty()
            && self.layout.style != LayoutStyle::Plain
            && self.buttons.iter().any(FormButton::is_group)
        {
            attrs.insert("class", "btn-toolbar");
        }
        attrs
    }

    /// Renders the button bar; nothing when there are no buttons.
    pub fn render_footer(&self) -> Markup {
        if self.buttons.is_empty() {
            return Markup::new();
        }
        let content: Markup = self.buttons.iter().map(FormButton::render).collect();
        let bar = element("div", &self.button_bar_attrs(), content);
        if self.layout.offset_footer {
            element(
                "div",
                &Attrs::from([("class", "form-group")]),
                element("div", &self.layout.field_div_attrs_no_label, bar),
            )
        } else {
            bar
        }
    }

    /// Renders the complete `<form>`.
    pub fn render(&self, form: &Form, form_info: Option<&FormInfo>) -> Markup {
        self.render_with_body(form, self.render_fields(form, form_info), form_info)
    }

    /// Wraps pre-rendered visible fields with the hidden inputs, hidden
    /// errors and footer of `form` in the `<form>` element.
    pub fn render_with_body(&self, form: &Form, body: Markup, form_info: Option<&FormInfo>) -> Markup {
        let span = render_span(form.name());
        let _guard = span.enter();

        let mut contents = form.hidden_tag();
        contents += self.hidden_errors(form);
        contents += body;
        contents += self.render_footer();

        let mut attrs = self.layout.form_attrs.clone();
        if form.has_file_field() {
            attrs.insert("enctype", "multipart/form-data");
        }
        attrs.insert("method", self.method.as_str());
        if let Some(info) = form_info {
            attrs.insert_opt("action", info.action.as_deref());
            attrs.insert_opt("id", info.id.as_deref());
        }
        element("form", &attrs, contents)
    }

    /// Checks that this view's field order (and the form's declared order)
    /// names only existing fields, recursing into nested forms with the
    /// nested form view.
    pub fn check(&self, form: &Form) -> FormgenResult<()> {
        form.check_field_order(self.field_order.as_deref())?;
        let nested = self.formfield_view();
        for sub in form.fields().iter().filter_map(Field::sub_form) {
            nested.check(sub)?;
        }
        Ok(())
    }

    /// Pairs this view with a form for display or serialization.
    pub fn bind<'a>(&'a self, form: &'a Form) -> BoundForm<'a> {
        BoundForm {
            view: self,
            form,
            info: None,
        }
    }
}

/// A view bound to a form. Renders on [`Display`](fmt::Display) and
/// serializes as its markup string.
#[derive(Debug, Clone)]
pub struct BoundForm<'a> {
    view: &'a FormView,
    form: &'a Form,
    info: Option<FormInfo>,
}

impl BoundForm<'_> {
    /// Attaches per-render form information.
    #[must_use]
    pub fn with_info(mut self, info: FormInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Renders the form.
    pub fn render(&self) -> Markup {
        self.view.render(self.form, self.info.as_ref())
    }
}

impl fmt::Display for BoundForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render().as_str())
    }
}

impl Serialize for BoundForm<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.render().as_str())
    }
}
