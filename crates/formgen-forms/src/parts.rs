//! Forms split into titled parts.
//!
//! A [`HierarchicalFormView`] renders selected fields in `<fieldset>` blocks,
//! each with its own view, and everything left over through a rest view.

use sha2::{Digest, Sha256};

use formgen_markup::{element, Attrs, Markup};

use crate::fields::Field;
use crate::form::Form;
use crate::view::{FormInfo, FormView};

/// A titled group of fields rendered with its own view.
///
/// Field patterns are exact names, or a prefix followed by `*` matching every
/// field whose name starts with the prefix.
#[derive(Debug, Clone)]
pub struct FormPart {
    title: String,
    name: String,
    view: FormView,
    fields: Vec<String>,
}

impl FormPart {
    /// Creates a part owning the fields named by the view's field order.
    ///
    /// The part name defaults to `form-part-` followed by the hex SHA-256
    /// of the title.
    pub fn new(title: impl Into<String>, view: FormView) -> Self {
        let title = title.into();
        let fields = view.field_order().map(<[String]>::to_vec).unwrap_or_default();
        Self {
            name: default_part_name(&title),
            title,
            view,
            fields,
        }
    }

    /// Sets the owned field patterns.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the part name (the fieldset `id`).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The legend text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The fieldset `id`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view rendering the owned fields.
    pub fn view(&self) -> &FormView {
        &self.view
    }

    /// The owned field patterns.
    pub fn owned_fields(&self) -> &[String] {
        &self.fields
    }

    /// Splits `fields` into the ones this part owns, in pattern order, and
    /// the rest, in their original order.
    pub fn filter_own_fields<'a>(&self, fields: &[&'a Field]) -> (Vec<&'a Field>, Vec<&'a Field>) {
        let mut own: Vec<&'a Field> = Vec::new();
        for pattern in &self.fields {
            for &field in fields {
                let hit = match pattern.strip_suffix('*') {
                    Some(prefix) => field.name.starts_with(prefix),
                    None => field.name == *pattern,
                };
                if hit && !own.iter().any(|o| std::ptr::eq(*o, field)) {
                    own.push(field);
                }
            }
        }
        let rest = fields
            .iter()
            .copied()
            .filter(|f| !own.iter().any(|o| std::ptr::eq(*o, *f)))
            .collect();
        (own, rest)
    }

    /// Renders the owned fields in a `<fieldset>` with a `<legend>`.
    pub fn render(&self, fields: &[&Field], form_info: Option<&FormInfo>) -> Markup {
        let legend = element("legend", &Attrs::new(), self.title.as_str());
        element(
            "fieldset",
            &Attrs::from([("id", self.name.as_str())]),
            legend + self.view.render_field_list(fields, form_info),
        )
    }
}

fn default_part_name(title: &str) -> String {
    let digest = Sha256::digest(title.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("form-part-{hex}")
}

/// A view rendering some fields in parts and the remaining ones after them.
#[derive(Debug, Clone, Default)]
pub struct HierarchicalFormView {
    base: FormView,
    rest_view: Option<FormView>,
    parts: Vec<FormPart>,
}

impl HierarchicalFormView {
    /// Uses `base` for the form element, ordering, the button bar and, unless
    /// a rest view is set, the remaining fields.
    pub fn new(base: FormView) -> Self {
        Self {
            base,
            rest_view: None,
            parts: Vec::new(),
        }
    }

    /// Renders the fields no part claims with `view`.
    #[must_use]
    pub fn with_rest_view(mut self, view: FormView) -> Self {
        self.rest_view = Some(view);
        self
    }

    /// Builder form of [`add_part`](Self::add_part).
    #[must_use]
    pub fn with_part(mut self, part: FormPart) -> Self {
        self.add_part(part);
        self
    }

    /// Appends a part. Parts claim fields in the order they were added.
    pub fn add_part(&mut self, part: FormPart) {
        self.parts.push(part);
    }

    /// The parts, in the order they claim fields.
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    fn rest_view(&self) -> &FormView {
        self.rest_view.as_ref().unwrap_or(&self.base)
    }

    /// Renders the complete `<form>`.
    pub fn render(&self, form: &Form, form_info: Option<&FormInfo>) -> Markup {
        let mut remaining = self.base.visible_fields(form);
        let mut body = Markup::new();
        for part in &self.parts {
            let (own, rest) = part.filter_own_fields(&remaining);
            tracing::debug!(part = %part.name, fields = own.len(), "rendering form part");
            body += part.render(&own, form_info);
            remaining = rest;
        }
        body += self.rest_view().render_field_list(&remaining, form_info);
        self.base.render_with_body(form, body, form_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_form() -> Form {
        Form::named("profile")
            .field(Field::hidden("csrf"))
            .field(Field::string("name"))
            .field(Field::string("addr_street"))
            .field(Field::string("addr_city"))
            .field(Field::string("email"))
    }

    #[test]
    fn test_default_name_is_title_hash() {
        let part = FormPart::new("Address", FormView::plain());
        assert_eq!(part.name().len(), "form-part-".len() + 64);
        assert!(part.name().starts_with("form-part-"));
        assert_eq!(part.name(), FormPart::new("Address", FormView::vertical()).name());
        assert_ne!(part.name(), FormPart::new("Contact", FormView::plain()).name());
    }

    #[test]
    fn test_fields_default_to_view_order() {
        let part = FormPart::new("A", FormView::plain().with_field_order(["x", "y"]));
        assert_eq!(part.owned_fields(), ["x", "y"]);
    }

    #[test]
    fn test_filter_own_fields() {
        let form = profile_form();
        let all = form.ordered_fields();
        let part = FormPart::new("Contact", FormView::plain()).with_fields(["email", "addr_*"]);
        let (own, rest) = part.filter_own_fields(&all);
        let own: Vec<_> = own.iter().map(|f| f.name.as_str()).collect();
        let rest: Vec<_> = rest.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(own, ["email", "addr_street", "addr_city"]);
        assert_eq!(rest, ["csrf", "name"]);
    }

    #[test]
    fn test_render_parts_then_rest() {
        let view = HierarchicalFormView::new(FormView::plain())
            .with_part(
                FormPart::new("Address", FormView::plain())
                    .with_fields(["addr_*"])
                    .with_name("address"),
            )
            .with_part(FormPart::new("Again", FormView::plain()).with_fields(["addr_city", "email"]).with_name("again"));
        let html = view.render(&profile_form(), None).into_string();

        assert!(html.contains(r#"<fieldset id="address"><legend>Address</legend><label for="id_addr_street">"#));
        assert!(html.contains(r#"<fieldset id="again"><legend>Again</legend><label for="id_email">"#));
        assert_eq!(html.matches(r#"name="addr_city""#).count(), 1);
        let fieldset_end = html.rfind("</fieldset>").unwrap();
        assert!(html.find(r#"name="name""#).unwrap() > fieldset_end);
        assert_eq!(html.matches(r#"name="csrf""#).count(), 1);
    }
}
