//! Form field descriptors.
//!
//! A [`Field`] carries everything the renderer reads about one input: its
//! kind (and so its type tag), current value, validation errors, label,
//! description and required flag. Fields are plain data; nothing here
//! validates input.

use std::fmt;
use std::sync::Arc;

use formgen_markup::{element, Attrs, Markup};

use crate::form::Form;
use crate::renderers::FieldRenderer;
use crate::widgets::{self, Widget, WidgetType};

/// The kind of a field. Each kind has a type tag used for renderer dispatch.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Single-line text.
    String,
    /// Multi-line text.
    TextArea,
    /// A password; the value is never rendered.
    Password,
    /// An integer.
    Integer,
    /// A floating-point number.
    Float,
    /// A fixed-precision decimal.
    Decimal,
    /// An email address.
    Email,
    /// A URL.
    Url,
    /// A date (YYYY-MM-DD).
    Date,
    /// A date-time (YYYY-MM-DDTHH:MM).
    DateTime,
    /// A hidden input. Rendered by [`Form::hidden_tag`], never as a visible block.
    Hidden,
    /// A single file upload.
    File,
    /// A multiple file upload.
    MultipleFile,
    /// A checkbox.
    Boolean,
    /// A drop-down with one selection.
    Select {
        /// Available choices as `(value, display_label)` pairs.
        choices: Vec<(String, String)>,
    },
    /// A list box with multiple selection.
    SelectMultiple {
        /// Available choices as `(value, display_label)` pairs.
        choices: Vec<(String, String)>,
    },
    /// A set of radio buttons.
    Radio {
        /// Available choices as `(value, display_label)` pairs.
        choices: Vec<(String, String)>,
    },
    /// A set of checkboxes with multiple selection.
    MultiCheckbox {
        /// Available choices as `(value, display_label)` pairs.
        choices: Vec<(String, String)>,
    },
    /// A submit input.
    Submit,
    /// A nested form whose fields render as a group.
    Form(Box<Form>),
    /// A field type defined outside this crate.
    Custom {
        /// The tag used for renderer dispatch.
        type_tag: String,
        /// The widget used when no custom widget is attached.
        widget: WidgetType,
    },
}

impl FieldKind {
    /// Returns the type tag used for renderer dispatch.
    pub fn type_tag(&self) -> &str {
        match self {
            Self::String => "StringField",
            Self::TextArea => "TextAreaField",
            Self::Password => "PasswordField",
            Self::Integer => "IntegerField",
            Self::Float => "FloatField",
            Self::Decimal => "DecimalField",
            Self::Email => "EmailField",
            Self::Url => "URLField",
            Self::Date => "DateField",
            Self::DateTime => "DateTimeField",
            Self::Hidden => "HiddenField",
            Self::File => "FileField",
            Self::MultipleFile => "MultipleFileField",
            Self::Boolean => "BooleanField",
            Self::Select { .. } => "SelectField",
            Self::SelectMultiple { .. } => "SelectMultipleField",
            Self::Radio { .. } => "RadioField",
            Self::MultiCheckbox { .. } => "MultiCheckboxField",
            Self::Submit => "SubmitField",
            Self::Form(_) => "FormField",
            Self::Custom { type_tag, .. } => type_tag.as_str(),
        }
    }

    /// Returns the default widget for this kind.
    pub fn widget_type(&self) -> WidgetType {
        match self {
            Self::String => WidgetType::TextInput,
            Self::TextArea => WidgetType::Textarea,
            Self::Password => WidgetType::PasswordInput,
            Self::Integer | Self::Float | Self::Decimal => WidgetType::NumberInput,
            Self::Email => WidgetType::EmailInput,
            Self::Url => WidgetType::UrlInput,
            Self::Date => WidgetType::DateInput,
            Self::DateTime => WidgetType::DateTimeInput,
            Self::Hidden => WidgetType::HiddenInput,
            Self::File => WidgetType::FileInput,
            Self::MultipleFile => WidgetType::MultipleFileInput,
            Self::Boolean => WidgetType::CheckboxInput,
            Self::Select { .. } => WidgetType::Select,
            Self::SelectMultiple { .. } => WidgetType::SelectMultiple,
            Self::Radio { .. } => WidgetType::RadioSelect,
            Self::MultiCheckbox { .. } => WidgetType::CheckboxSelectMultiple,
            Self::Submit => WidgetType::SubmitInput,
            Self::Form(_) => WidgetType::SubForm,
            Self::Custom { widget, .. } => widget.clone(),
        }
    }
}

/// A single form input with its data and presentation metadata.
#[derive(Clone)]
pub struct Field {
    /// The field name, unique within its form.
    pub name: String,
    /// The field kind.
    pub kind: FieldKind,
    /// Label text. An empty label on a nested form suppresses the label.
    pub label: String,
    /// Help text rendered under the input.
    pub description: String,
    /// The current raw value of a single-valued field.
    pub data: Option<String>,
    /// The current values of a multi-valued field, in submission order.
    pub data_list: Vec<String>,
    /// Validation error messages.
    pub errors: Vec<String>,
    /// Whether the field is required.
    pub required: bool,
    /// Name prefix of the enclosing (sub-)form, if any.
    pub prefix: Option<String>,
    /// Extra attributes for the input element.
    pub attrs: Attrs,
    widget: Option<Arc<dyn Widget>>,
    renderer: Option<Arc<dyn FieldRenderer>>,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type_tag", &self.type_tag())
            .field("data", &self.data)
            .field("data_list", &self.data_list)
            .field("errors", &self.errors)
            .field("required", &self.required)
            .field("prefix", &self.prefix)
            .field("custom_widget", &self.widget.is_some())
            .field("custom_renderer", &self.renderer.is_some())
            .finish_non_exhaustive()
    }
}

impl Field {
    /// Creates a field with a label derived from its name.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        let label = default_label(&name);
        Self {
            name,
            kind,
            label,
            description: String::new(),
            data: None,
            data_list: Vec::new(),
            errors: Vec::new(),
            required: false,
            prefix: None,
            attrs: Attrs::new(),
            widget: None,
            renderer: None,
        }
    }

    // ── Constructors per kind ────────────────────────────────────────

    /// A single-line text field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// A multi-line text field.
    pub fn text_area(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::TextArea)
    }

    /// A checkbox.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// A hidden input.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Hidden)
    }

    /// A file upload.
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::File)
    }

    /// A submit input.
    pub fn submit(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Submit)
    }

    /// A drop-down.
    pub fn select<V, L>(name: impl Into<String>, choices: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(
            name,
            FieldKind::Select {
                choices: collect_choices(choices),
            },
        )
    }

    /// A set of radio buttons.
    pub fn radio<V, L>(name: impl Into<String>, choices: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(
            name,
            FieldKind::Radio {
                choices: collect_choices(choices),
            },
        )
    }

    /// A set of checkboxes.
    pub fn multi_checkbox<V, L>(
        name: impl Into<String>,
        choices: impl IntoIterator<Item = (V, L)>,
    ) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(
            name,
            FieldKind::MultiCheckbox {
                choices: collect_choices(choices),
            },
        )
    }

    /// A nested form. The sub-form's fields are prefixed with `name`.
    pub fn form(name: impl Into<String>, mut form: Form) -> Self {
        let name = name.into();
        form.set_prefix(Some(name.clone()));
        Self::new(name, FieldKind::Form(Box::new(form)))
    }

    // ── Builders ─────────────────────────────────────────────────────

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the description (help text).
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the current value.
    #[must_use]
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Sets the current values of a multi-valued field.
    #[must_use]
    pub fn data_list<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_list = values.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a validation error.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    /// Sets whether the field is required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Adds an attribute to the input element.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    /// Replaces the default widget.
    #[must_use]
    pub fn with_widget(mut self, widget: Arc<dyn Widget>) -> Self {
        self.widget = Some(widget);
        self
    }

    /// Attaches a renderer used when the view's registry has none for this type tag.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn FieldRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The type tag used for renderer dispatch.
    pub fn type_tag(&self) -> &str {
        self.kind.type_tag()
    }

    /// The HTML `name` attribute, including any sub-form prefix.
    pub fn html_name(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{p}-{}", self.name),
            None => self.name.clone(),
        }
    }

    /// The HTML `id` attribute.
    pub fn id(&self) -> String {
        format!("id_{}", self.html_name())
    }

    /// Returns `true` for hidden inputs.
    pub const fn is_hidden(&self) -> bool {
        matches!(self.kind, FieldKind::Hidden)
    }

    /// Returns `true` for file uploads: file kinds, and any field whose
    /// widget is a file input.
    pub fn is_file(&self) -> bool {
        matches!(self.kind, FieldKind::File | FieldKind::MultipleFile)
            || matches!(
                self.widget().widget_type(),
                WidgetType::FileInput | WidgetType::MultipleFileInput
            )
    }

    /// Returns `true` for kinds that submit several values.
    pub const fn is_multi_valued(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::SelectMultiple { .. } | FieldKind::MultiCheckbox { .. } | FieldKind::MultipleFile
        )
    }

    /// Returns `true` if the field has validation errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The choices of a choice field; empty for other kinds.
    pub fn choices(&self) -> &[(String, String)] {
        match &self.kind {
            FieldKind::Select { choices }
            | FieldKind::SelectMultiple { choices }
            | FieldKind::Radio { choices }
            | FieldKind::MultiCheckbox { choices } => choices,
            _ => &[],
        }
    }

    /// The current values compared against choices.
    ///
    /// Multi-valued fields use [`data_list`](Self::data_list), falling back to
    /// `data` as one whole value; other fields use `data` unchanged.
    pub fn values(&self) -> Vec<&str> {
        if self.is_multi_valued() && !self.data_list.is_empty() {
            return self.data_list.iter().map(String::as_str).collect();
        }
        self.data.as_deref().into_iter().collect()
    }

    /// The nested form of a [`FieldKind::Form`] field.
    pub fn sub_form(&self) -> Option<&Form> {
        match &self.kind {
            FieldKind::Form(form) => Some(form),
            _ => None,
        }
    }

    /// Mutable access to the nested form of a [`FieldKind::Form`] field.
    pub fn sub_form_mut(&mut self) -> Option<&mut Form> {
        match &mut self.kind {
            FieldKind::Form(form) => Some(form),
            _ => None,
        }
    }

    /// The widget used to render the input.
    pub fn widget(&self) -> &dyn Widget {
        self.widget
            .as_deref()
            .unwrap_or_else(|| widgets::create_widget(&self.kind.widget_type()))
    }

    /// The renderer attached to this field, if any.
    pub fn renderer(&self) -> Option<&dyn FieldRenderer> {
        self.renderer.as_deref()
    }

    /// Renders the input element.
    pub fn render_widget(&self, attrs: &Attrs) -> Markup {
        self.widget().render(self, attrs)
    }

    /// Renders a `<label>` targeting the input.
    pub fn label_tag(&self, attrs: &Attrs) -> Markup {
        let mut a = Attrs::new().with("for", self.widget().id_for_label(&self.id()));
        a.merge(attrs);
        element("label", &a, &self.label)
    }

    pub(crate) fn set_prefix(&mut self, prefix: Option<String>) {
        self.prefix = prefix;
        let own = self.html_name();
        if let Some(form) = self.sub_form_mut() {
            form.set_prefix(Some(own));
        }
    }
}

fn collect_choices<V, L>(choices: impl IntoIterator<Item = (V, L)>) -> Vec<(String, String)>
where
    V: Into<String>,
    L: Into<String>,
{
    choices
        .into_iter()
        .map(|(v, l)| (v.into(), l.into()))
        .collect()
}

/// Derives a label from a field name: `first_name` becomes `First Name`.
pub fn default_label(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |c| {
                let mut out = c.to_uppercase().to_string();
                out.push_str(&chars.as_str().to_lowercase());
                out
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
