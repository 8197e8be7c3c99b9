//! Block-level containers.

container!(
    /// A `<div>`: block-level container without semantic meaning.
    Division,
    "div"
);

container!(
    /// A `<p>` text paragraph.
    Paragraph,
    "p"
);

container!(
    /// A `<pre>` block whose whitespace is kept as is.
    Preformatted,
    "pre"
);

#[cfg(test)]
mod tests {
    use htmlgen::{GeneratorExt, HtmlElement};

    use super::*;

    #[test]
    fn test_division() {
        let mut div = Division::with_content(["Initial", "-content"]);
        div.append("<appended>");
        assert_eq!(div.render(), "<div>Initial-content&lt;appended&gt;</div>");
    }

    #[test]
    fn test_paragraph_attributes() {
        let mut p = Paragraph::with_content(["text"]);
        p.add_css_class("lead");
        assert_eq!(p.to_string(), r#"<p class="lead">text</p>"#);
    }

    #[test]
    fn test_preformatted() {
        let mut pre = Preformatted::new();
        pre.append_raw("  a\n  b");
        assert_eq!(pre.render(), "<pre>  a\n  b</pre>");
    }
}
