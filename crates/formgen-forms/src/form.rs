//! Forms: ordered collections of fields.
//!
//! A [`Form`] keeps its fields in declaration order and may carry a declared
//! field order. The declared order lists field names; the wildcard entry
//! `*` stands for every field the list does not name, in declaration order.

use formgen_core::{FormgenError, FormgenResult};
use formgen_markup::{Attrs, Markup};

use crate::fields::Field;

/// The wildcard entry of a field order.
pub const WILDCARD: &str = "*";

/// An ordered collection of fields.
#[derive(Debug, Clone, Default)]
pub struct Form {
    name: String,
    prefix: Option<String>,
    fields: Vec<Field>,
    field_order: Option<Vec<String>>,
}

impl Form {
    /// Creates an empty, unnamed form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty form with a name used in log output.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.push(field);
        self
    }

    /// Appends a field, applying this form's prefix to it.
    pub fn push(&mut self, mut field: Field) {
        field.set_prefix(self.prefix.clone());
        self.fields.push(field);
    }

    /// Sets the name prefix applied to every field.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.set_prefix(Some(prefix.into()));
        self
    }

    /// Sets the declared field order.
    #[must_use]
    pub fn with_field_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn set_prefix(&mut self, prefix: Option<String>) {
        for field in &mut self.fields {
            field.set_prefix(prefix.clone());
        }
        self.prefix = prefix;
    }

    /// The form name (may be empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field name prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The declared field order, if any.
    pub fn field_order(&self) -> Option<&[String]> {
        self.field_order.as_deref()
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a field by name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Replaces the value of a field. Unknown names are ignored.
    pub fn set_data(&mut self, name: &str, data: impl Into<String>) {
        if let Some(field) = self.get_mut(name) {
            field.data = Some(data.into());
        }
    }

    /// Replaces the values of a multi-valued field. Unknown names are ignored.
    pub fn set_data_list<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(field) = self.get_mut(name) {
            field.data_list = values.into_iter().map(Into::into).collect();
        }
    }

    /// Appends validation errors to a field. Unknown names are ignored.
    pub fn add_errors<I, S>(&mut self, name: &str, errors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(field) = self.get_mut(name) {
            field.errors.extend(errors.into_iter().map(Into::into));
        }
    }

    /// Fields in declared order, or declaration order when none is declared.
    pub fn ordered_fields(&self) -> Vec<&Field> {
        match &self.field_order {
            Some(order) => resolve_order(&self.fields, order),
            None => self.fields.iter().collect(),
        }
    }

    /// Hidden fields in declaration order.
    pub fn hidden_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_hidden())
    }

    /// Renders every hidden field's input.
    pub fn hidden_tag(&self) -> Markup {
        self.hidden_fields()
            .map(|f| f.render_widget(&Attrs::new()))
            .collect()
    }

    /// Returns `true` if this form or any nested form has a file upload.
    pub fn has_file_field(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.is_file() || f.sub_form().is_some_and(Self::has_file_field))
    }

    /// Checks that every name in `order` (and in the form's own declared
    /// order) refers to a field of this form.
    pub fn check_field_order(&self, order: Option<&[String]>) -> FormgenResult<()> {
        let declared = self.field_order.as_deref().unwrap_or(&[]);
        let extra = order.unwrap_or(&[]);
        for name in declared.iter().chain(extra) {
            if name != WILDCARD && self.get(name).is_none() {
                return Err(FormgenError::UnknownField(name.clone()));
            }
        }
        Ok(())
    }
}

/// Arranges `fields` according to `order`.
///
/// Each field appears at most once. `*` expands to the fields `order` does
/// not name, in their original order. Names matching no field are skipped
/// with a warning.
pub fn resolve_order<'a>(fields: &'a [Field], order: &[String]) -> Vec<&'a Field> {
    let mut out: Vec<&'a Field> = Vec::with_capacity(fields.len());
    let mut taken = vec![false; fields.len()];

    for entry in order {
        if entry == WILDCARD {
            for (i, field) in fields.iter().enumerate() {
                if !taken[i] && !order.iter().any(|n| *n == field.name) {
                    taken[i] = true;
                    out.push(field);
                }
            }
            continue;
        }

        match fields.iter().position(|f| f.name == *entry) {
            Some(i) if !taken[i] => {
                taken[i] = true;
                out.push(&fields[i]);
            }
            Some(_) => {}
            None => tracing::warn!(field = %entry, "field order names an unknown field"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &[&Field]) -> Vec<String> {
        fields.iter().map(|f| f.name.clone()).collect()
    }

    fn abc_form() -> Form {
        Form::new()
            .field(Field::string("a"))
            .field(Field::string("b"))
            .field(Field::string("c"))
            .field(Field::submit("ok"))
    }

    #[test]
    fn test_ordered_fields_declaration_order() {
        assert_eq!(names(&abc_form().ordered_fields()), ["a", "b", "c", "ok"]);
    }

    #[test]
    fn test_iter_declared_order() {
        let form = abc_form().with_field_order(["c", "a", "b", "ok"]);
        assert_eq!(names(&form.ordered_fields()), ["c", "a", "b", "ok"]);
    }

    #[test]
    fn test_wildcard_then_named() {
        let form = abc_form().with_field_order(["*", "ok"]);
        assert_eq!(names(&form.ordered_fields()), ["a", "b", "c", "ok"]);

        let form = abc_form().with_field_order(["ok", "*"]);
        assert_eq!(names(&form.ordered_fields()), ["ok", "a", "b", "c"]);
    }

    #[test]
    fn test_wildcard_in_middle() {
        let form = abc_form().with_field_order(["b", "*", "a"]);
        assert_eq!(names(&form.ordered_fields()), ["b", "c", "ok", "a"]);
    }

    #[test]
    fn test_partial_order_without_wildcard_drops_rest() {
        let form = abc_form().with_field_order(["c"]);
        assert_eq!(names(&form.ordered_fields()), ["c"]);
    }

    #[test]
    fn test_no_field_twice() {
        let form = abc_form().with_field_order(["a", "a", "*", "*"]);
        assert_eq!(names(&form.ordered_fields()), ["a", "b", "c", "ok"]);
    }

    #[test]
    fn test_unknown_names_skipped() {
        let form = abc_form().with_field_order(["zzz", "b"]);
        assert_eq!(names(&form.ordered_fields()), ["b"]);
    }

    #[test]
    fn test_check_field_order() {
        let form = abc_form().with_field_order(["*", "ok"]);
        assert!(form.check_field_order(None).is_ok());

        let view_order = vec!["a".to_string(), "nope".to_string()];
        let err = form.check_field_order(Some(&view_order)).unwrap_err();
        assert!(matches!(err, FormgenError::UnknownField(ref n) if n == "nope"));
    }

    #[test]
    fn test_hidden_tag() {
        let form = Form::new()
            .field(Field::hidden("csrf_token").data("t0k"))
            .field(Field::string("name"))
            .field(Field::hidden("next").data("/home"));
        assert_eq!(
            form.hidden_tag().as_str(),
            concat!(
                r#"<input type="hidden" id="id_csrf_token" name="csrf_token" value="t0k" />"#,
                r#"<input type="hidden" id="id_next" name="next" value="/home" />"#,
            )
        );
    }

    #[test]
    fn test_has_file_field_recurses() {
        assert!(!abc_form().has_file_field());
        let nested = Form::new().field(Field::form("attachment", Form::new().field(Field::file("doc"))));
        assert!(nested.has_file_field());
    }

    #[test]
    fn test_prefix_applies_to_existing_and_later_fields() {
        let mut form = Form::new().field(Field::string("a")).with_prefix("p");
        form.push(Field::string("b"));
        assert_eq!(form.fields()[0].html_name(), "p-a");
        assert_eq!(form.fields()[1].html_name(), "p-b");
        assert_eq!(form.prefix(), Some("p"));
    }

    #[test]
    fn test_set_data_and_errors() {
        let mut form = abc_form();
        form.set_data("a", "1");
        form.add_errors("b", ["bad"]);
        form.add_errors("missing", ["ignored"]);
        assert_eq!(form.get("a").unwrap().data.as_deref(), Some("1"));
        assert_eq!(form.get("b").unwrap().errors, vec!["bad".to_string()]);
    }
}
