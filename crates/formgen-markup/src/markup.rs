//! The [`Markup`] type: a string known to be safe HTML.
//!
//! Everything the renderers produce is `Markup`. Plain text enters through
//! [`IntoHtml`], which escapes it; already-safe fragments pass through
//! untouched, so nothing is escaped twice.

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Serialize, Serializer};

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their HTML entity equivalents.
///
/// # Examples
///
/// ```
/// use formgen_markup::escape;
///
/// assert_eq!(escape(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// ```
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// A fragment of HTML that is safe to embed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Creates an empty fragment.
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Marks a string as safe without escaping it.
    ///
    /// Only use this for HTML produced by trusted code.
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escapes `text` and wraps the result.
    pub fn escape(text: &str) -> Self {
        Self(escape(text))
    }

    /// Returns the HTML as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the fragment, returning the HTML string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the fragment contains no HTML.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends content, escaping it if it is not already markup.
    pub fn push(&mut self, content: impl IntoHtml) {
        self.0.push_str(content.into_html().as_str());
    }

    /// Joins fragments with a separator.
    pub fn join<I>(parts: I, separator: &str) -> Self
    where
        I: IntoIterator,
        I::Item: IntoHtml,
    {
        let mut out = String::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push_str(&escape(separator));
            }
            out.push_str(part.into_html().as_str());
        }
        Self(out)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

impl Serialize for Markup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<T: IntoHtml> Add<T> for Markup {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self {
        self.push(rhs);
        self
    }
}

impl<T: IntoHtml> AddAssign<T> for Markup {
    fn add_assign(&mut self, rhs: T) {
        self.push(rhs);
    }
}

impl<T: IntoHtml> FromIterator<T> for Markup {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T: IntoHtml> Extend<T> for Markup {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for part in iter {
            self.push(part);
        }
    }
}

/// Conversion into [`Markup`].
///
/// Text types are escaped; markup types are passed through.
pub trait IntoHtml {
    /// Converts `self` into a safe fragment.
    fn into_html(self) -> Markup;
}

impl IntoHtml for Markup {
    fn into_html(self) -> Markup {
        self
    }
}

impl IntoHtml for &Markup {
    fn into_html(self) -> Markup {
        self.clone()
    }
}

impl IntoHtml for &str {
    fn into_html(self) -> Markup {
        Markup::escape(self)
    }
}

impl IntoHtml for String {
    fn into_html(self) -> Markup {
        Markup::escape(&self)
    }
}

impl IntoHtml for &String {
    fn into_html(self) -> Markup {
        Markup::escape(self)
    }
}

impl<T: IntoHtml> IntoHtml for Option<T> {
    fn into_html(self) -> Markup {
        self.map_or_else(Markup::new, IntoHtml::into_html)
    }
}
