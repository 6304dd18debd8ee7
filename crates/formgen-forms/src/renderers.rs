//! Field renderers and the renderer registry.
//!
//! A [`FieldRenderer`] turns one field into its decorated block: label,
//! input, description and errors, wrapped according to the view's layout.
//! The default methods implement the generic strategy; the built-in
//! renderers override the parts that differ for their field type.
//!
//! Dispatch order for a field:
//!
//! 1. the registry entry for the field's exact type tag,
//! 2. the renderer attached to the field itself,
//! 3. [`GenericRenderer`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use formgen_markup::{element, Attrs, Markup};

use crate::fields::Field;
use crate::view::{FormInfo, FormView};
use crate::widgets::choice_options;

/// Everything a renderer may look at while rendering one field.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The view doing the rendering.
    pub view: &'a FormView,
    /// The field being rendered.
    pub field: &'a Field,
    /// Per-render information passed through from the caller.
    pub form_info: Option<&'a FormInfo>,
    /// Extra attributes for the input element.
    pub extra_attrs: &'a Attrs,
}

/// A strategy for rendering one kind of field.
pub trait FieldRenderer: Send + Sync + fmt::Debug {
    /// Renders the input element(s).
    fn render_input(&self, ctx: &RenderContext<'_>) -> Markup {
        generic::input(ctx)
    }

    /// Renders the label, or `None` when the field has no label.
    fn render_label(&self, ctx: &RenderContext<'_>) -> Option<Markup> {
        generic::label(ctx)
    }

    /// Renders the description paragraph.
    fn render_description(&self, ctx: &RenderContext<'_>) -> Markup {
        generic::description(ctx)
    }

    /// Renders the error paragraphs.
    fn render_errors(&self, ctx: &RenderContext<'_>) -> Markup {
        generic::errors(ctx)
    }

    /// Renders the complete field block (without the layout's group wrapper).
    fn render(&self, ctx: &RenderContext<'_>) -> Markup {
        generic::decorate(self, ctx)
    }
}

/// Building blocks of the generic strategy, usable from custom renderers.
pub mod generic {
    use super::{element, FieldRenderer, Markup, RenderContext};

    /// The input with the layout's input attributes, the caller's extra
    /// attributes and an `is-invalid` class when the field has errors.
    pub fn input(ctx: &RenderContext<'_>) -> Markup {
        let mut attrs = ctx.view.layout().input_attrs.clone();
        attrs.merge(ctx.extra_attrs);
        if ctx.field.has_errors() {
            attrs.append_class("is-invalid");
        }
        ctx.field.render_widget(&attrs)
    }

    /// The `<label>` with the layout's label attributes.
    pub fn label(ctx: &RenderContext<'_>) -> Option<Markup> {
        Some(ctx.field.label_tag(&ctx.view.layout().label_attrs))
    }

    /// The description paragraph, or nothing.
    pub fn description(ctx: &RenderContext<'_>) -> Markup {
        if ctx.field.description.is_empty() {
            return Markup::new();
        }
        element(
            "p",
            &ctx.view.layout().description_attrs,
            &ctx.field.description,
        )
    }

    /// One paragraph per error.
    pub fn errors(ctx: &RenderContext<'_>) -> Markup {
        let attrs = &ctx.view.layout().error_attrs;
        ctx.field
            .errors
            .iter()
            .map(|e| element("p", attrs, e))
            .collect()
    }

    /// Label followed by input, description and errors; the latter three are
    /// wrapped in the layout's field `<div>` when it has attributes.
    pub fn decorate<R: FieldRenderer + ?Sized>(renderer: &R, ctx: &RenderContext<'_>) -> Markup {
        let layout = ctx.view.layout();
        let (label, div_attrs) = if layout.want_labels {
            match renderer.render_label(ctx) {
                Some(label) => (label, &layout.field_div_attrs),
                None => (Markup::new(), &layout.field_div_attrs_no_label),
            }
        } else {
            (Markup::new(), &layout.field_div_attrs)
        };

        let mut inner = renderer.render_input(ctx);
        inner += renderer.render_description(ctx);
        inner += renderer.render_errors(ctx);
        if !div_attrs.is_empty() {
            inner = element("div", div_attrs, inner);
        }
        label + inner
    }
}

// ---------------------------------------------------------------------------
// Built-in renderers
// ---------------------------------------------------------------------------

/// The fallback renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericRenderer;

impl FieldRenderer for GenericRenderer {}

/// Checkbox and its label text in one `checkbox` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanRenderer;

impl FieldRenderer for BooleanRenderer {
    fn render_input(&self, ctx: &RenderContext<'_>) -> Markup {
        ctx.field.render_widget(ctx.extra_attrs)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Markup {
        let layout = ctx.view.layout();
        let spacer = if layout.label_attrs.is_empty() {
            Markup::new()
        } else {
            element("div", &layout.label_attrs, "")
        };

        let label = element(
            "label",
            &Attrs::new(),
            self.render_input(ctx) + " " + ctx.field.label.as_str(),
        );
        let block = element(
            "div",
            &Attrs::from([("class", "checkbox")]),
            label + self.render_description(ctx) + self.render_errors(ctx),
        );

        if layout.field_div_attrs.is_empty() {
            spacer + block
        } else {
            spacer + element("div", &layout.field_div_attrs, block)
        }
    }
}

/// One labelled radio button per choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioRenderer;

impl FieldRenderer for RadioRenderer {
    fn render_input(&self, ctx: &RenderContext<'_>) -> Markup {
        choice_options(ctx.field, "radio")
            .into_iter()
            .map(|opt| {
                element(
                    "div",
                    &Attrs::from([("class", "radio")]),
                    element("label", &Attrs::new(), opt.input + " " + opt.label),
                )
            })
            .collect()
    }
}

/// One labelled checkbox per choice, in an unstyled list.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiCheckboxRenderer;

impl FieldRenderer for MultiCheckboxRenderer {
    fn render_input(&self, ctx: &RenderContext<'_>) -> Markup {
        let items: Markup = choice_options(ctx.field, "checkbox")
            .into_iter()
            .map(|opt| {
                element(
                    "li",
                    &Attrs::from([("class", "checkbox")]),
                    element("label", &Attrs::new(), opt.input + " " + opt.label),
                )
            })
            .collect();
        element("ul", &Attrs::from([("class", "unstyled")]), items)
    }
}

/// Submit inputs carry their text as value and get no label.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitRenderer;

impl FieldRenderer for SubmitRenderer {
    fn render_label(&self, _ctx: &RenderContext<'_>) -> Option<Markup> {
        None
    }
}

/// A nested form rendered through the view's nested form view.
///
/// Sub-fields follow the nested view's field order (or the sub-form's own),
/// never the parent view's. Errors belong to the sub-fields, so the nested
/// field itself renders none.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubFormRenderer;

impl FieldRenderer for SubFormRenderer {
    fn render_input(&self, ctx: &RenderContext<'_>) -> Markup {
        let Some(form) = ctx.field.sub_form() else {
            return generic::input(ctx);
        };
        let nested = ctx.view.formfield_view();
        let contents = form.hidden_tag() + nested.render_fields(form, ctx.form_info);
        element("div", &nested.layout().form_attrs, contents)
    }

    fn render_errors(&self, _ctx: &RenderContext<'_>) -> Markup {
        Markup::new()
    }

    fn render_label(&self, ctx: &RenderContext<'_>) -> Option<Markup> {
        if ctx.field.label.is_empty() {
            None
        } else {
            generic::label(ctx)
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static GENERIC: GenericRenderer = GenericRenderer;

static BUILTINS: Lazy<Arc<RendererRegistry>> =
    Lazy::new(|| Arc::new(RendererRegistry::with_builtins()));

/// Renderers keyed by field type tag.
#[derive(Debug, Clone, Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, Arc<dyn FieldRenderer>>,
}

impl RendererRegistry {
    /// An empty registry: every field falls through to its own renderer or
    /// the generic one.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in renderers for `BooleanField`,
    /// `RadioField`, `MultiCheckboxField`, `SubmitField` and `FormField`.
    pub fn with_builtins() -> Self {
        Self::new()
            .register("BooleanField", Arc::new(BooleanRenderer))
            .register("RadioField", Arc::new(RadioRenderer))
            .register("MultiCheckboxField", Arc::new(MultiCheckboxRenderer))
            .register("SubmitField", Arc::new(SubmitRenderer))
            .register("FormField", Arc::new(SubFormRenderer))
    }

    /// The process-wide built-in registry, created on first use.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&BUILTINS)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn register(mut self, type_tag: impl Into<String>, renderer: Arc<dyn FieldRenderer>) -> Self {
        self.insert(type_tag, renderer);
        self
    }

    /// Sets the renderer for a type tag, replacing any previous one.
    pub fn insert(&mut self, type_tag: impl Into<String>, renderer: Arc<dyn FieldRenderer>) {
        self.renderers.insert(type_tag.into(), renderer);
    }

    /// The renderer registered for an exact type tag.
    pub fn get(&self, type_tag: &str) -> Option<&dyn FieldRenderer> {
        self.renderers.get(type_tag).map(Arc::as_ref)
    }

    /// Returns `true` if a renderer is registered for `type_tag`.
    pub fn contains(&self, type_tag: &str) -> bool {
        self.renderers.contains_key(type_tag)
    }

    /// Picks the renderer for `field`.
    pub fn resolve<'a>(&'a self, field: &'a Field) -> &'a dyn FieldRenderer {
        self.get(field.type_tag())
            .or_else(|| field.renderer())
            .unwrap_or(&GENERIC)
    }
}
