//! Phrasing content.

container!(
    /// A `<span>`: inline container without semantic meaning.
    Span,
    "span"
);

container!(
    /// A `<b>`: text drawn attention to, without extra importance.
    Highlight,
    "b"
);

container!(
    /// A `<strong>`: text of strong importance.
    Strong,
    "strong"
);

container!(
    /// An `<i>`: text in an alternate voice, such as a term or a thought.
    Alternate,
    "i"
);

container!(
    /// An `<em>`: stress emphasis.
    Emphasis,
    "em"
);

container!(
    /// A `<small>`: side comments and fine print.
    Small,
    "small"
);

void_container!(
    /// A `<br/>` line break.
    LineBreak,
    "br"
);

#[cfg(test)]
mod tests {
    use htmlgen::GeneratorExt;

    use super::*;

    #[test]
    fn test_inline_tags() {
        assert_eq!(Span::with_content(["x"]).render(), "<span>x</span>");
        assert_eq!(Highlight::with_content(["x"]).render(), "<b>x</b>");
        assert_eq!(Strong::with_content(["x"]).render(), "<strong>x</strong>");
        assert_eq!(Alternate::with_content(["x"]).render(), "<i>x</i>");
        assert_eq!(Emphasis::with_content(["x"]).render(), "<em>x</em>");
        assert_eq!(Small::with_content(["x"]).render(), "<small>x</small>");
    }

    #[test]
    fn test_line_break() {
        assert_eq!(LineBreak::new().render(), "<br/>");
    }

    #[test]
    fn test_nesting() {
        let mut strong = Strong::with_content(["very "]);
        strong.append(Emphasis::with_content(["important"]));
        assert_eq!(strong.render(), "<strong>very <em>important</em></strong>");
    }
}
