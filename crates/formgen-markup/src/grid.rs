//! Grid column wrappers.

use crate::attrs::Attrs;
use crate::elements::element;
use crate::markup::{IntoHtml, Markup};

/// A grid column with a width per breakpoint.
///
/// ```
/// use formgen_markup::GridColumn;
///
/// assert_eq!(GridColumn::new(4).class(), "col-md-4");
/// let col = GridColumn::with_widths([("sm", 12), ("lg", 6)]);
/// assert_eq!(col.class(), "col-sm-12 col-lg-6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    widths: Vec<(String, u8)>,
}

impl Default for GridColumn {
    fn default() -> Self {
        Self::new(3)
    }
}

impl GridColumn {
    /// A column `width` units wide at the `md` breakpoint.
    pub fn new(width: u8) -> Self {
        Self {
            widths: vec![("md".to_string(), width)],
        }
    }

    /// A column with explicit breakpoint widths; falls back to the default
    /// `md` column when `widths` is empty.
    pub fn with_widths<I, S>(widths: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        let widths: Vec<(String, u8)> = widths.into_iter().map(|(k, v)| (k.into(), v)).collect();
        if widths.is_empty() {
            Self::default()
        } else {
            Self { widths }
        }
    }

    /// The class list, e.g. `col-md-3`.
    pub fn class(&self) -> String {
        self.widths
            .iter()
            .map(|(bp, w)| format!("col-{bp}-{w}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Wraps `content` in a column `<div>`.
    pub fn render(&self, content: impl IntoHtml) -> Markup {
        element("div", &Attrs::from([("class", self.class())]), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_width() {
        assert_eq!(GridColumn::default().class(), "col-md-3");
    }

    #[test]
    fn test_empty_widths_fall_back() {
        let col = GridColumn::with_widths(Vec::<(String, u8)>::new());
        assert_eq!(col.class(), "col-md-3");
    }

    #[test]
    fn test_render() {
        let html = GridColumn::new(6).render(Markup::raw("<p>x</p>"));
        assert_eq!(html.as_str(), r#"<div class="col-md-6"><p>x</p></div>"#);
    }
}
