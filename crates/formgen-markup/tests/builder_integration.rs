//! Integration tests composing the markup builders.

use formgen_markup::{
    button, element, form_button, link_button, Attrs, ButtonStyle, GridColumn, Markup,
};

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_toolbar_in_grid_column() {
    let edit = link_button(
        "/posts/1/edit",
        "Edit",
        &ButtonStyle::context("info").size("sm"),
        Some("Edit post"),
        None,
    );
    let delete = form_button(
        "/posts/1/delete",
        "Delete",
        &ButtonStyle::context("danger").size("sm"),
        &Attrs::new(),
    );
    let html = GridColumn::with_widths([("sm", 12), ("md", 4)]).render(edit + delete);

    assert_eq!(
        html.as_str(),
        concat!(
            r#"<div class="col-sm-12 col-md-4">"#,
            r#"<a class="btn btn-info btn-sm" role="button" href="/posts/1/edit" title="Edit post">Edit</a>"#,
            r#"<form method="POST" action="/posts/1/delete">"#,
            r#"<button class="btn btn-danger btn-sm" type="submit">Delete</button>"#,
            r#"</form></div>"#,
        )
    );
}

#[test]
fn test_nested_markup_is_not_escaped_twice() {
    let inner = element("strong", &Attrs::new(), "a & b");
    let outer = element("p", &Attrs::from([("title", "x < y")]), inner);
    assert_eq!(
        outer.as_str(),
        r#"<p title="x &lt; y"><strong>a &amp; b</strong></p>"#
    );
}

#[test]
fn test_button_attrs_override_style() {
    let b = button(
        Markup::raw("<i class=\"icon\"></i> Go"),
        &ButtonStyle::context("primary").classes("pull-right"),
        &Attrs::new().with("type", "submit").with("disabled", "disabled"),
    );
    assert_eq!(
        b.as_str(),
        r#"<button class="btn btn-primary pull-right" type="submit" disabled="disabled"><i class="icon"></i> Go</button>"#
    );
}

#[test]
fn test_markup_serializes_as_string() {
    let m = element("em", &Attrs::new(), "hi");
    assert_eq!(
        serde_json::to_string(&m).unwrap(),
        r#""<em>hi</em>""#
    );
}
