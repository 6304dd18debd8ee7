//! Layout presets.
//!
//! A [`LayoutConfig`] is the immutable set of classes and attributes a
//! [`FormView`](crate::view::FormView) applies around fields. Three presets
//! exist: plain (no classes), vertical (labels above inputs) and horizontal
//! (labels beside inputs on a column grid).

use formgen_core::{FormgenError, FormgenResult, LayoutSettings, LayoutStyle};
use formgen_markup::Attrs;

/// Classes of the `<div>` wrapping each field group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupClasses {
    /// Always present.
    pub base: String,
    /// Appended when the field has errors.
    pub error: Option<String>,
    /// Appended when the field is required.
    pub required: String,
}

impl GroupClasses {
    /// The class list for a field.
    pub fn class_for(&self, has_errors: bool, required: bool) -> String {
        let mut cls = self.base.clone();
        if has_errors {
            if let Some(error) = &self.error {
                cls.push(' ');
                cls.push_str(error);
            }
        }
        if required {
            cls.push(' ');
            cls.push_str(&self.required);
        }
        cls
    }
}

/// Classes and attributes controlling how a form is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// The preset this configuration was built from.
    pub style: LayoutStyle,
    /// Whether labels are rendered.
    pub want_labels: bool,
    /// Attributes of `<label>` elements.
    pub label_attrs: Attrs,
    /// Wrapper around input, description and errors of a labelled field.
    pub field_div_attrs: Attrs,
    /// Wrapper around input, description and errors of an unlabelled field.
    pub field_div_attrs_no_label: Attrs,
    /// Attributes of the `<form>` element (and of nested form groups).
    pub form_attrs: Attrs,
    /// Attributes of the button bar.
    pub button_bar_attrs: Attrs,
    /// Attributes of each error paragraph.
    pub error_attrs: Attrs,
    /// Attributes of the description paragraph.
    pub description_attrs: Attrs,
    /// Attributes added to every generic input.
    pub input_attrs: Attrs,
    /// Field group wrapper; `None` renders fields without a group.
    pub group: Option<GroupClasses>,
    /// Whether the button bar is wrapped in a grid-offset group.
    pub offset_footer: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::vertical()
    }
}

impl LayoutConfig {
    /// No classes at all.
    pub fn plain() -> Self {
        Self {
            style: LayoutStyle::Plain,
            want_labels: true,
            label_attrs: Attrs::new(),
            field_div_attrs: Attrs::new(),
            field_div_attrs_no_label: Attrs::new(),
            form_attrs: Attrs::new(),
            button_bar_attrs: Attrs::new(),
            error_attrs: Attrs::new(),
            description_attrs: Attrs::new(),
            input_attrs: Attrs::new(),
            group: None,
            offset_footer: false,
        }
    }

    /// Labels stacked above full-width inputs.
    pub fn vertical() -> Self {
        Self {
            style: LayoutStyle::Vertical,
            error_attrs: Attrs::from([("class", "form-text invalid-feedback")]),
            description_attrs: Attrs::from([("class", "form-text")]),
            input_attrs: Attrs::from([("class", "form-control")]),
            group: Some(GroupClasses {
                base: "form-group".to_string(),
                error: None,
                required: "required".to_string(),
            }),
            ..Self::plain()
        }
    }

    /// Labels beside inputs, `[2, 10]` columns at the `md` breakpoint.
    pub fn horizontal() -> Self {
        Self::horizontal_with([2, 10], "md")
    }

    /// Labels beside inputs with explicit column widths and breakpoint.
    pub fn horizontal_with(widths: [u8; 2], size: &str) -> Self {
        let [label_w, field_w] = widths;
        Self {
            style: LayoutStyle::Horizontal,
            label_attrs: Attrs::from([(
                "class",
                format!("col-form-label col-{size}-{label_w}"),
            )]),
            field_div_attrs: Attrs::from([("class", format!("col-{size}-{field_w}"))]),
            field_div_attrs_no_label: Attrs::from([(
                "class",
                format!("col-{size}-{field_w} col-{size}-offset-{label_w}"),
            )]),
            form_attrs: Attrs::from([("class", "form-horizontal")]),
            group: Some(GroupClasses {
                base: "form-group row".to_string(),
                error: Some("has-error".to_string()),
                required: "required".to_string(),
            }),
            offset_footer: true,
            ..Self::vertical()
        }
    }

    /// Builds a preset from settings.
    ///
    /// Horizontal widths must each be within 1..=12 and sum to at most 12;
    /// the breakpoint must be a non-empty alphanumeric token.
    pub fn from_settings(settings: &LayoutSettings) -> FormgenResult<Self> {
        let mut layout = match settings.style {
            LayoutStyle::Plain => Self::plain(),
            LayoutStyle::Vertical => Self::vertical(),
            LayoutStyle::Horizontal => {
                validate_grid(settings.widths, &settings.size)?;
                Self::horizontal_with(settings.widths, &settings.size)
            }
        };
        layout.want_labels = settings.want_labels;
        Ok(layout)
    }

    /// Builder: turns labels on or off.
    #[must_use]
    pub fn want_labels(mut self, want_labels: bool) -> Self {
        self.want_labels = want_labels;
        self
    }
}

fn validate_grid(widths: [u8; 2], size: &str) -> FormgenResult<()> {
    if widths.iter().any(|w| !(1..=12).contains(w)) {
        return Err(FormgenError::ImproperlyConfigured(format!(
            "grid widths must be between 1 and 12, got {widths:?}"
        )));
    }
    if u16::from(widths[0]) + u16::from(widths[1]) > 12 {
        return Err(FormgenError::ImproperlyConfigured(format!(
            "grid widths must sum to at most 12, got {widths:?}"
        )));
    }
    if size.is_empty() || !size.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FormgenError::ImproperlyConfigured(format!(
            "invalid grid breakpoint '{size}'"
        )));
    }
    Ok(())
}
