//! Bootstrap buttons.
//!
//! Buttons get `btn btn-{context}` classes, an optional `btn-{size}` and any
//! extra classes, in that order.

use crate::attrs::Attrs;
use crate::elements::element;
use crate::markup::{IntoHtml, Markup};

/// Visual options shared by [`button`], [`link_button`] and [`form_button`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Bootstrap context, e.g. `primary`, `danger`.
    pub context_class: String,
    /// Size suffix, e.g. `sm`, `lg`.
    pub size: Option<String>,
    /// Extra classes appended after the generated ones.
    pub classes: String,
    /// The `type` attribute of a `<button>`.
    pub button_type: String,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            context_class: "default".to_string(),
            size: None,
            classes: String::new(),
            button_type: "button".to_string(),
        }
    }
}

impl ButtonStyle {
    /// A default-sized button with the given context class.
    pub fn context(context_class: impl Into<String>) -> Self {
        Self {
            context_class: context_class.into(),
            ..Self::default()
        }
    }

    /// Sets the size suffix.
    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets the extra classes.
    #[must_use]
    pub fn classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = classes.into();
        self
    }

    /// Sets the `<button>` type.
    #[must_use]
    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = button_type.into();
        self
    }

    fn base_class(&self) -> String {
        let mut cls = format!("btn btn-{}", self.context_class);
        if let Some(size) = self.size.as_deref().filter(|s| !s.is_empty()) {
            cls.push_str(" btn-");
            cls.push_str(size);
        }
        cls
    }

    fn full_class(&self) -> String {
        let mut cls = self.base_class();
        if !self.classes.is_empty() {
            cls.push(' ');
            cls.push_str(&self.classes);
        }
        cls
    }
}

/// Builds a `<button>`.
///
/// `attrs` are applied last and override the generated `class` and `type`.
///
/// ```
/// use formgen_markup::{button, Attrs, ButtonStyle};
///
/// let b = button("Save", &ButtonStyle::context("primary"), &Attrs::new());
/// assert_eq!(b.as_str(), r#"<button class="btn btn-primary" type="button">Save</button>"#);
/// ```
pub fn button(text: impl IntoHtml, style: &ButtonStyle, attrs: &Attrs) -> Markup {
    let mut a = Attrs::new()
        .with("class", style.full_class())
        .with("type", style.button_type.clone());
    a.merge(attrs);
    element("button", &a, text)
}

/// Builds an `<a>` styled as a button.
///
/// `hint` becomes the `title` attribute and `target` the link target.
pub fn link_button(
    url: &str,
    text: impl IntoHtml,
    style: &ButtonStyle,
    hint: Option<&str>,
    target: Option<&str>,
) -> Markup {
    let attrs = Attrs::new()
        .with("class", style.base_class())
        .with("role", "button")
        .with("href", url)
        .with_opt("title", hint)
        .with_opt("target", target);
    element("a", &attrs, text)
}

/// Builds a single-button form that POSTs to `url`.
pub fn form_button(url: &str, text: impl IntoHtml, style: &ButtonStyle, attrs: &Attrs) -> Markup {
    let submit = ButtonStyle {
        button_type: "submit".to_string(),
        ..style.clone()
    };
    element(
        "form",
        &Attrs::from([("method", "POST"), ("action", url)]),
        button(text, &submit, attrs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_default_style() {
        let b = button("Go", &ButtonStyle::default(), &Attrs::new());
        assert_eq!(
            b.as_str(),
            r#"<button class="btn btn-default" type="button">Go</button>"#
        );
    }

    #[test]
    fn test_button_size_and_classes() {
        let style = ButtonStyle::context("danger").size("sm").classes("pull-right");
        let b = button("Delete", &style, &Attrs::new());
        assert!(b.as_str().contains(r#"class="btn btn-danger btn-sm pull-right""#));
    }

    #[test]
    fn test_button_attrs_override() {
        let b = button(
            "OK",
            &ButtonStyle::context("primary"),
            &Attrs::from([("type", "submit"), ("name", "action")]),
        );
        assert_eq!(
            b.as_str(),
            r#"<button class="btn btn-primary" type="submit" name="action">OK</button>"#
        );
    }

    #[test]
    fn test_button_text_escaped() {
        let b = button("<x>", &ButtonStyle::default(), &Attrs::new());
        assert!(b.as_str().contains("&lt;x&gt;"));
    }

    #[test]
    fn test_link_button() {
        let l = link_button("/edit?id=1&x=2", "Edit", &ButtonStyle::context("info"), Some("Edit it"), None);
        assert_eq!(
            l.as_str(),
            r#"<a class="btn btn-info" role="button" href="/edit?id=1&amp;x=2" title="Edit it">Edit</a>"#
        );
    }

    #[test]
    fn test_link_button_ignores_extra_classes() {
        let l = link_button("/", "Home", &ButtonStyle::default().classes("ignored"), None, Some("_blank"));
        assert!(l.as_str().starts_with(r#"<a class="btn btn-default" role="button""#));
        assert!(l.as_str().contains(r#"target="_blank""#));
    }

    #[test]
    fn test_form_button() {
        let f = form_button("/logout", "Log out", &ButtonStyle::default(), &Attrs::new());
        assert_eq!(
            f.as_str(),
            r#"<form method="POST" action="/logout"><button class="btn btn-default" type="submit">Log out</button></form>"#
        );
    }
}
