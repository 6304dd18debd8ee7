//! Tags and elements.

use crate::attrs::Attrs;
use crate::markup::{escape, IntoHtml, Markup};

/// Formats attributes as ` key="value" key2="value2"`.
///
/// Values are escaped. Entries whose name is not a valid HTML attribute
/// name are dropped. Returns an empty fragment when there is nothing to
/// render.
pub fn xmlattrs(attrs: &Attrs) -> Markup {
    let mut out = String::new();
    for (k, v) in attrs.iter().filter(|(k, _)| is_attr_name(k)) {
        out.push_str(&format!(r#" {k}="{}""#, escape(v)));
    }
    Markup::raw(out)
}

/// Returns `true` if `name` can appear as an attribute name: non-empty, with
/// no whitespace, control characters, quotes, `<`, `>`, `/`, `=` or `&`.
pub fn is_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '&')
        })
}

/// Builds an opening tag.
///
/// ```
/// use formgen_markup::{xmltag, Attrs};
///
/// let tag = xmltag("div", &Attrs::from([("class", "row")]));
/// assert_eq!(tag.as_str(), r#"<div class="row">"#);
/// ```
pub fn xmltag(name: &str, attrs: &Attrs) -> Markup {
    Markup::raw(format!("<{name}{}>", xmlattrs(attrs)))
}

/// Builds a full element with contents and closing tag.
///
/// ```
/// use formgen_markup::{element, Attrs};
///
/// let p = element("p", &Attrs::new(), "1 < 2");
/// assert_eq!(p.as_str(), "<p>1 &lt; 2</p>");
/// ```
pub fn element(name: &str, attrs: &Attrs, contents: impl IntoHtml) -> Markup {
    Markup::raw(format!(
        "{}{}</{name}>",
        xmltag(name, attrs),
        contents.into_html()
    ))
}

/// Builds a self-closing element such as `<input ... />`.
pub fn void_element(name: &str, attrs: &Attrs) -> Markup {
    Markup::raw(format!("<{name}{} />", xmlattrs(attrs)))
}
