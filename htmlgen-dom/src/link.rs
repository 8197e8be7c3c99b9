//! Hyperlinks.

use htmlgen::{Element, HtmlElement, Item, TextAttribute};

/// An `<a>` hyperlink.
///
/// Links open in the same browsing context unless a target is set:
///
/// ```
/// use htmlgen::GeneratorExt;
/// use htmlgen_dom::Link;
///
/// let mut link = Link::with_content("/foo", ["caption"]);
/// assert_eq!(link.target(), "_self");
/// link.set_blank_target();
/// assert_eq!(link.render(), r#"<a href="/foo" target="_blank">caption</a>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    element: Element,
}

impl Link {
    const URL: TextAttribute = TextAttribute::new("href");
    const TARGET: TextAttribute = TextAttribute::with_default("target", "_self");
    const TITLE: TextAttribute = TextAttribute::new("title");

    /// Creates an empty link to `url`.
    pub fn new(url: &str) -> Self {
        let mut link = Self {
            element: Element::new("a"),
        };
        link.set_url(Some(url));
        link
    }

    /// Creates a link to `url` with initial children.
    pub fn with_content<I>(url: &str, content: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut link = Self::new(url);
        link.extend(content);
        link
    }

    /// The `href`.
    pub fn url(&self) -> Option<String> {
        self.get(&Self::URL)
    }

    /// Sets or removes the `href`.
    pub fn set_url(&mut self, url: Option<&str>) {
        self.set(&Self::URL, url.map(str::to_owned));
    }

    /// The browsing context to open the link in.
    pub fn target(&self) -> String {
        self.get(&Self::TARGET).unwrap_or_default()
    }

    /// Sets the browsing context; `_self` removes the attribute.
    pub fn set_target(&mut self, target: &str) {
        self.set(&Self::TARGET, Some(target.to_owned()));
    }

    /// Opens the link in a new window or tab.
    pub fn set_blank_target(&mut self) {
        self.set_target("_blank");
    }

    /// The advisory title.
    pub fn title(&self) -> Option<String> {
        self.get(&Self::TITLE)
    }

    /// Sets or removes the advisory title.
    pub fn set_title(&mut self, title: Option<&str>) {
        self.set(&Self::TITLE, title.map(str::to_owned));
    }
}

element_type!(Link);
