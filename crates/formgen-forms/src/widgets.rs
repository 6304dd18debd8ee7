//! Widget system for rendering input elements.
//!
//! A widget turns a [`Field`] into the HTML of its input element only; the
//! label, description, errors and wrappers around it are the renderer's job.
//! Every widget stamps `type`, `id`, `name` and `value` (where meaningful)
//! first, then the field's own attributes, then the caller's attributes.

use std::fmt;

use formgen_markup::{element, void_element, Attrs, Markup};

use crate::fields::Field;

/// Enumerates all built-in widget types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetType {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="number">`.
    NumberInput,
    /// `<input type="email">`.
    EmailInput,
    /// `<input type="url">`.
    UrlInput,
    /// `<input type="password">`.
    PasswordInput,
    /// `<input type="hidden">`.
    HiddenInput,
    /// `<textarea>`.
    Textarea,
    /// `<input type="checkbox">`.
    CheckboxInput,
    /// `<select>`.
    Select,
    /// `<select multiple>`.
    SelectMultiple,
    /// A set of `<input type="radio">` elements.
    RadioSelect,
    /// A set of `<input type="checkbox">` elements.
    CheckboxSelectMultiple,
    /// `<input type="date">`.
    DateInput,
    /// `<input type="datetime-local">`.
    DateTimeInput,
    /// `<input type="file">`.
    FileInput,
    /// `<input type="file" multiple>`.
    MultipleFileInput,
    /// `<input type="submit">`.
    SubmitInput,
    /// The undecorated fields of a nested form.
    SubForm,
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::NumberInput => "NumberInput",
            Self::EmailInput => "EmailInput",
            Self::UrlInput => "UrlInput",
            Self::PasswordInput => "PasswordInput",
            Self::HiddenInput => "HiddenInput",
            Self::Textarea => "Textarea",
            Self::CheckboxInput => "CheckboxInput",
            Self::Select => "Select",
            Self::SelectMultiple => "SelectMultiple",
            Self::RadioSelect => "RadioSelect",
            Self::CheckboxSelectMultiple => "CheckboxSelectMultiple",
            Self::DateInput => "DateInput",
            Self::DateTimeInput => "DateTimeInput",
            Self::FileInput => "FileInput",
            Self::MultipleFileInput => "MultipleFileInput",
            Self::SubmitInput => "SubmitInput",
            Self::SubForm => "SubForm",
        };
        write!(f, "{name}")
    }
}

/// A trait for input widgets.
///
/// All widgets must be `Send + Sync` so fields can be shared across threads.
pub trait Widget: Send + Sync + fmt::Debug {
    /// Returns the widget type.
    fn widget_type(&self) -> WidgetType;

    /// Renders the input element for `field`.
    fn render(&self, field: &Field, attrs: &Attrs) -> Markup;

    /// Returns the `id` a `<label>` should point at.
    fn id_for_label(&self, id: &str) -> String {
        id.to_string()
    }

    /// Widgets that draw their own complete block return `true`; the form
    /// renderer then emits the bare widget with no label, wrapper, errors or
    /// description.
    fn suppresses_decoration(&self) -> bool {
        false
    }
}

/// Returns the shared instance of a built-in widget.
pub fn create_widget(widget_type: &WidgetType) -> &'static dyn Widget {
    match widget_type {
        WidgetType::TextInput => &TextInput,
        WidgetType::NumberInput => &NumberInput,
        WidgetType::EmailInput => &EmailInput,
        WidgetType::UrlInput => &UrlInput,
        WidgetType::PasswordInput => &PasswordInput,
        WidgetType::HiddenInput => &HiddenInput,
        WidgetType::Textarea => &Textarea,
        WidgetType::CheckboxInput => &CheckboxInput,
        WidgetType::Select => &Select,
        WidgetType::SelectMultiple => &SelectMultiple,
        WidgetType::RadioSelect => &RadioSelect,
        WidgetType::CheckboxSelectMultiple => &CheckboxSelectMultiple,
        WidgetType::DateInput => &DateInput,
        WidgetType::DateTimeInput => &DateTimeInput,
        WidgetType::FileInput => &FileInput,
        WidgetType::MultipleFileInput => &MultipleFileInput,
        WidgetType::SubmitInput => &SubmitInput,
        WidgetType::SubForm => &SubFormWidget,
    }
}

/// Builds the attributes of an `<input>` element.
fn input_attrs(input_type: &str, field: &Field, value: Option<&str>, attrs: &Attrs) -> Attrs {
    let mut a = Attrs::new()
        .with("type", input_type)
        .with("id", field.id())
        .with("name", field.html_name())
        .with_opt("value", value);
    a.merge(&field.attrs);
    a.merge(attrs);
    a
}

/// One option of a radio or checkbox list.
#[derive(Debug, Clone)]
pub struct ChoiceOption {
    /// The `<input>` element of this option.
    pub input: Markup,
    /// The option's display label.
    pub label: String,
    /// The option input's `id`.
    pub id: String,
}

/// Renders one `<input type="{input_type}">` per choice of `field`.
///
/// Options are checked when their value is among [`Field::values`].
pub fn choice_options(field: &Field, input_type: &str) -> Vec<ChoiceOption> {
    let selected = field.values();
    let base_id = field.id();
    field
        .choices()
        .iter()
        .enumerate()
        .map(|(i, (value, label))| {
            let id = format!("{base_id}_{i}");
            let mut a = Attrs::new()
                .with("type", input_type)
                .with("id", id.clone())
                .with("name", field.html_name())
                .with("value", value.clone());
            if selected.contains(&value.as_str()) {
                a.insert("checked", "checked");
            }
            ChoiceOption {
                input: void_element("input", &a),
                label: label.clone(),
                id,
            }
        })
        .collect()
}

fn select_options(field: &Field) -> Markup {
    let selected = field.values();
    field
        .choices()
        .iter()
        .map(|(value, label)| {
            let mut a = Attrs::new().with("value", value.clone());
            if selected.contains(&value.as_str()) {
                a.insert("selected", "selected");
            }
            element("option", &a, label)
        })
        .collect()
}

fn option_list(field: &Field, input_type: &str) -> Markup {
    let items: Markup = choice_options(field, input_type)
        .into_iter()
        .map(|opt| {
            let label = element("label", &Attrs::from([("for", opt.id.as_str())]), &opt.label);
            element("div", &Attrs::new(), opt.input + " " + label)
        })
        .collect();
    element("div", &Attrs::from([("id", field.id())]), items)
}

// ---------------------------------------------------------------------------
// Built-in widgets
// ---------------------------------------------------------------------------

macro_rules! simple_input {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $input_type:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Widget for $name {
            fn widget_type(&self) -> WidgetType {
                WidgetType::$variant
            }

            fn render(&self, field: &Field, attrs: &Attrs) -> Markup {
                void_element(
                    "input",
                    &input_attrs($input_type, field, field.data.as_deref(), attrs),
                )
            }
        }
    };
}

simple_input!(
    /// A basic `<input type="text">` widget.
    TextInput, TextInput, "text"
);
simple_input!(
    /// A `<input type="number">` widget.
    NumberInput, NumberInput, "number"
);
simple_input!(
    /// A `<input type="email">` widget.
    EmailInput, EmailInput, "email"
);
simple_input!(
    /// A `<input type="url">` widget.
    UrlInput, UrlInput, "url"
);
simple_input!(
    /// A `<input type="hidden">` widget.
    HiddenInput, HiddenInput, "hidden"
);
simple_input!(
    /// A `<input type="date">` widget.
    DateInput, DateInput, "date"
);
simple_input!(
    /// A `<input type="datetime-local">` widget.
    DateTimeInput, DateTimeInput, "datetime-local"
);

/// A `<input type="password">` widget. Never renders the current value.
#[derive(Debug, Clone, Copy)]
pub struct PasswordInput;

impl Widget for PasswordInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::PasswordInput
    }

    fn render(&self, field: &Field, attrs: &Attrs) -> Markup {
        void_element("input", &input_attrs("password", field, None, attrs))
    }
}

/// A `<textarea>` widget.
#[derive(Debug, Clone, Copy)]
pub struct Textarea;

impl Widget for Textarea {
    fn widget_type(&self) -> WidgetType {
        WidgetType::Textarea
    }

    fn render(&self, field: &Field, attrs: &Attrs) -> Markup {
        let mut a = Attrs::new()
            .with("id", field.id())
            .with("name", field.html_name());
        a.merge(&field.attrs);
        a.merge(attrs);
        element("textarea", &a, field.data.as_deref().unwrap_or(""))
    }
}

/// A `<input type="checkbox">` widget for a boolean field.
///
/// Checked when the value is "y", "on", "true" or "1".
#[derive(Debug, Clone, Copy)]
pub struct CheckboxInput;

impl Widget for CheckboxInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::CheckboxInput
    }

    fn render(&self, field: &Field, attrs: &Attrs) -> Markup {
        let checked = field
            .data
            .as_deref()
            .is_some_and(|v| matches!(v, "y" | "on" | "true" | "1"));
        let mut a = input_attrs("checkbox", field, Some("y"), &Attrs::new());
        if checked {
            a.insert("checked", "checked");
        }
        a.merge(attrs);
        void_element("input", &a)
    }
}

/// A `<select>` widget.
#[derive(Debug, Clone, Copy)]
pub struct Select;

impl Widget for Select {
    fn widget_type(&self) -> WidgetType {
        WidgetType::Select
    }

    fn render(&self, field: &Field, attrs: &Attrs) -> Markup {
        let mut a = Attrs::new()
            .with("id", field.id())
            .with("name", field.html_name());
        a.merge(&field.attrs);
        a.merge(attrs);
        element("select", &a, select_options(field))
    }
}

/// A `<select multiple>` widget.
#[derive(Debug, Clone, Copy)]
pub struct SelectMultiple;

impl Widget for SelectMultiple {
    fn widget_type(&self) -> WidgetType {
        WidgetType::SelectMultiple
    }

    fn render(&self, field: &Field, attrs: &Attrs) -> Markup {
        let mut a = Attrs::new()
            .with("id", field.id())
            .with("name", field.html_name())
            .with("multiple", "multiple");
        a.merge(&field.attrs);
        a.merge(attrs);
        element("select", &a, select_options(field))
    }
}

/// A set of `<input type="radio">` elements.
#[derive(Debug, Clone, Copy)]
pub struct RadioSelect;

impl Widget for RadioSelect {
    fn widget_type(&self) -> WidgetType {
        WidgetType::RadioSelect
    }

    fn render(&self, field: &Field, _attrs: &Attrs) -> Markup {
        option_list(field, "radio")
    }

    fn id_for_label(&self, id: &str) -> String {
        format!("{id}_0")
    }
}

/// A set of `<input type="checkbox">` elements for multiple selection.
#[derive(Debug, Clone, Copy)]
pub struct CheckboxSelectMultiple;

impl Widget for CheckboxSelectMultiple {
    fn widget_type(&self) -> WidgetType {
        WidgetType::CheckboxSelectMultiple
    }

    fn render(&self, field: &Field, _attrs: &Attrs) -> Markup {
        option_list(field, "checkbox")
    }

    fn id_for_label(&self, id: &str) -> String {
        format!("{id}_0")
    }
}

/// A `<input type="file">` widget. File inputs never carry a value.
#[derive(Debug, Clone, Copy)]
pub struct FileInput;

impl Widget for FileInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::FileInput
    }

    fn render(&self, field: &Field, attrs: &Attrs) -> Markup {
        void_element("input", &input_attrs("file", field, None, attrs))
    }
}

/// A `<input type="file" multiple>` widget.
#[derive(Debug, Clone, Copy)]
pub struct MultipleFileInput;

impl Widget for MultipleFileInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::MultipleFileInput
    }

    fn render(&self, field: &Field, attrs: &Attrs) -> Markup {
        let mut a = input_attrs("file", field, None, &Attrs::new());
        a.insert("multiple", "multiple");
        a.merge(attrs);
        void_element("input", &a)
    }
}

/// A `<input type="submit">` widget whose value is the field label.
#[derive(Debug, Clone, Copy)]
pub struct SubmitInput;

impl Widget for SubmitInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::SubmitInput
    }

    fn render(&self, field: &Field, attrs: &Attrs) -> Markup {
        void_element("input", &input_attrs("submit", field, Some(&field.label), attrs))
    }
}

/// Renders a nested form as its hidden inputs followed by each visible
/// field's label and input, without any layout classes.
#[derive(Debug, Clone, Copy)]
pub struct SubFormWidget;

impl Widget for SubFormWidget {
    fn widget_type(&self) -> WidgetType {
        WidgetType::SubForm
    }

    fn render(&self, field: &Field, _attrs: &Attrs) -> Markup {
        let Some(form) = field.sub_form() else {
            return Markup::new();
        };
        let mut out = form.hidden_tag();
        for sub in form.ordered_fields().into_iter().filter(|f| !f.is_hidden()) {
            out += sub.label_tag(&Attrs::new());
            out += sub.render_widget(&Attrs::new());
        }
        element("div", &Attrs::from([("id", field.id())]), out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldKind;
    use crate::form::Form;

    #[test]
    fn test_text_input() {
        let f = Field::string("title").data("Hello");
        let html = f.render_widget(&Attrs::new());
        assert_eq!(
            html.as_str(),
            r#"<input type="text" id="id_title" name="title" value="Hello" />"#
        );
    }

    #[test]
    fn test_text_input_escapes_value() {
        let f = Field::string("q").data(r#""><script>"#);
        let html = f.render_widget(&Attrs::new());
        assert!(html.as_str().contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }

    #[test]
    fn test_input_attr_precedence() {
        let f = Field::string("q").attr("class", "from-field").attr("placeholder", "Search");
        let html = f.render_widget(&Attrs::from([("class", "form-control")]));
        assert_eq!(
            html.as_str(),
            r#"<input type="text" id="id_q" name="q" class="form-control" placeholder="Search" />"#
        );
    }

    #[test]
    fn test_password_hides_value() {
        let f = Field::new("pw", FieldKind::Password).data("secret");
        assert!(!f.render_widget(&Attrs::new()).as_str().contains("secret"));
    }

    #[test]
    fn test_textarea() {
        let f = Field::text_area("summary").data("a < b");
        assert_eq!(
            f.render_widget(&Attrs::new()).as_str(),
            r#"<textarea id="id_summary" name="summary">a &lt; b</textarea>"#
        );
    }

    #[test]
    fn test_checkbox_checked() {
        let on = Field::boolean("agree").data("y");
        assert!(on.render_widget(&Attrs::new()).as_str().contains(r#"checked="checked""#));
        let off = Field::boolean("agree");
        assert!(!off.render_widget(&Attrs::new()).as_str().contains("checked"));
    }

    #[test]
    fn test_select_marks_selected() {
        let f = Field::select("aff", [("0", "None"), ("1", "Academic")]).data("1");
        let html = f.render_widget(&Attrs::new());
        assert_eq!(
            html.as_str(),
            r#"<select id="id_aff" name="aff"><option value="0">None</option><option value="1" selected="selected">Academic</option></select>"#
        );
    }

    #[test]
    fn test_select_multiple() {
        let f = Field::new(
            "langs",
            FieldKind::SelectMultiple {
                choices: vec![("rs".into(), "Rust".into()), ("py".into(), "Python".into())],
            },
        )
        .data_list(["rs", "py"]);
        let html = f.render_widget(&Attrs::new());
        assert!(html.as_str().contains(r#"multiple="multiple""#));
        assert_eq!(html.as_str().matches("selected=").count(), 2);
    }

    #[test]
    fn test_select_value_with_comma() {
        let f = Field::select("city", [("New York, NY", "NYC"), ("Boston", "BOS")]).data("New York, NY");
        let html = f.render_widget(&Attrs::new());
        assert!(html
            .as_str()
            .contains(r#"<option value="New York, NY" selected="selected">NYC</option>"#));
        assert_eq!(html.as_str().matches("selected=").count(), 1);
    }

    #[test]
    fn test_radio_value_with_comma() {
        let f = Field::radio("r", [("a,b", "AB"), ("c", "C")]).data("a,b");
        let opts = choice_options(&f, "radio");
        assert!(opts[0].input.as_str().contains(r#"checked="checked""#));
        assert!(!opts[1].input.as_str().contains("checked"));
    }

    #[test]
    fn test_choice_options() {
        let f = Field::radio("bar", [("A", "A"), ("B", "B")]).data("B");
        let opts = choice_options(&f, "radio");
        assert_eq!(opts.len(), 2);
        assert_eq!(opts[0].id, "id_bar_0");
        assert!(!opts[0].input.as_str().contains("checked"));
        assert!(opts[1].input.as_str().contains(r#"checked="checked""#));
    }

    #[test]
    fn test_radio_widget_label_id() {
        let f = Field::radio("bar", [("A", "A")]);
        assert_eq!(f.widget().id_for_label("id_bar"), "id_bar_0");
        assert!(f.label_tag(&Attrs::new()).as_str().contains(r#"for="id_bar_0""#));
    }

    #[test]
    fn test_file_inputs() {
        let single = Field::file("doc").data("ignored");
        assert_eq!(
            single.render_widget(&Attrs::new()).as_str(),
            r#"<input type="file" id="id_doc" name="doc" />"#
        );
        let many = Field::new("docs", FieldKind::MultipleFile);
        assert!(many.render_widget(&Attrs::new()).as_str().contains(r#"multiple="multiple""#));
    }

    #[test]
    fn test_submit_uses_label() {
        let f = Field::submit("ok").label("Send");
        assert_eq!(
            f.render_widget(&Attrs::new()).as_str(),
            r#"<input type="submit" id="id_ok" name="ok" value="Send" />"#
        );
    }

    #[test]
    fn test_sub_form_widget() {
        let author = Form::new()
            .field(Field::hidden("uid").data("7"))
            .field(Field::string("name"));
        let f = Field::form("author", author);
        let html = SubFormWidget.render(&f, &Attrs::new());
        assert!(html.as_str().starts_with(r#"<div id="id_author"><input type="hidden""#));
        assert!(html.as_str().contains(r#"name="author-name""#));
    }

    #[test]
    fn test_widget_type_display() {
        assert_eq!(WidgetType::DateTimeInput.to_string(), "DateTimeInput");
        assert_eq!(create_widget(&WidgetType::Textarea).widget_type(), WidgetType::Textarea);
    }

    #[test]
    fn test_default_does_not_suppress_decoration() {
        assert!(!create_widget(&WidgetType::TextInput).suppresses_decoration());
    }
}
