//! Buttons of a form's button bar.

use std::fmt;

use formgen_markup::{button, element, Attrs, ButtonStyle, Markup};

/// A submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    text: String,
    name: Option<String>,
    value: Option<String>,
    action: Option<String>,
    context_class: String,
}

impl SubmitButton {
    /// A primary submit button.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: None,
            value: None,
            action: None,
            context_class: "primary".to_string(),
        }
    }

    /// Sets the submitted `name`.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the submitted `value`.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Submits to a different URL (`formaction`).
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the Bootstrap context class.
    #[must_use]
    pub fn context_class(mut self, context_class: impl Into<String>) -> Self {
        self.context_class = context_class.into();
        self
    }

    /// Renders the `<button>`.
    pub fn render(&self) -> Markup {
        let attrs = Attrs::new()
            .with("type", "submit")
            .with_opt("name", self.name.as_deref())
            .with_opt("value", self.value.as_deref())
            .with_opt("formaction", self.action.as_deref());
        button(
            self.text.as_str(),
            &ButtonStyle::context(self.context_class.as_str()),
            &attrs,
        )
    }
}

/// Buttons rendered together in a `btn-group`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonGroup {
    content: Vec<FormButton>,
}

impl ButtonGroup {
    /// Creates a group.
    pub fn new(content: impl IntoIterator<Item = impl Into<FormButton>>) -> Self {
        Self {
            content: content.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders the group; an empty group renders nothing.
    pub fn render(&self) -> Markup {
        if self.content.is_empty() {
            return Markup::new();
        }
        let inner: Markup = self.content.iter().map(FormButton::render).collect();
        element("div", &Attrs::from([("class", "btn-group")]), inner)
    }
}

/// One entry of a button bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormButton {
    /// A submit button.
    Submit(SubmitButton),
    /// A group of buttons.
    Group(ButtonGroup),
    /// Pre-rendered markup, emitted as is.
    Raw(Markup),
}

impl FormButton {
    /// Renders the entry.
    pub fn render(&self) -> Markup {
        match self {
            Self::Submit(b) => b.render(),
            Self::Group(g) => g.render(),
            Self::Raw(m) => m.clone(),
        }
    }

    /// Returns `true` for groups.
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

impl fmt::Display for FormButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<SubmitButton> for FormButton {
    fn from(b: SubmitButton) -> Self {
        Self::Submit(b)
    }
}

impl From<ButtonGroup> for FormButton {
    fn from(g: ButtonGroup) -> Self {
        Self::Group(g)
    }
}

impl From<Markup> for FormButton {
    fn from(m: Markup) -> Self {
        Self::Raw(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_button_minimal() {
        assert_eq!(
            SubmitButton::new("OK").render().as_str(),
            r#"<button class="btn btn-primary" type="submit">OK</button>"#
        );
    }

    #[test]
    fn test_submit_button_full() {
        let b = SubmitButton::new("Delete")
            .name("op")
            .value("delete")
            .action("/delete")
            .context_class("danger");
        assert_eq!(
            b.render().as_str(),
            r#"<button class="btn btn-danger" type="submit" name="op" value="delete" formaction="/delete">Delete</button>"#
        );
    }

    #[test]
    fn test_group() {
        let g = ButtonGroup::new([SubmitButton::new("A"), SubmitButton::new("B")]);
        let html = g.render();
        assert!(html.as_str().starts_with(r#"<div class="btn-group"><button"#));
        assert_eq!(html.as_str().matches("<button").count(), 2);
    }

    #[test]
    fn test_empty_group_renders_nothing() {
        assert!(ButtonGroup::default().render().is_empty());
    }

    #[test]
    fn test_raw_and_display() {
        let raw = FormButton::from(Markup::raw(r#"<a href="/">Cancel</a>"#));
        assert_eq!(raw.to_string(), r#"<a href="/">Cancel</a>"#);
        assert!(!raw.is_group());
        assert!(FormButton::from(ButtonGroup::default()).is_group());
    }
}
