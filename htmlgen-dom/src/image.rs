//! Images.

use htmlgen::{HtmlElement, TextAttribute, VoidElement};

/// An `<img/>`.
///
/// The alternate text describes the image when it cannot be shown. It may be
/// empty for purely decorative images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    element: VoidElement,
}

impl Image {
    const URL: TextAttribute = TextAttribute::new("src");
    const ALTERNATE_TEXT: TextAttribute = TextAttribute::new("alt");
    const TITLE: TextAttribute = TextAttribute::new("title");

    /// Creates an image of `url` described by `alternate_text`.
    pub fn new(url: &str, alternate_text: &str) -> Self {
        let mut image = Self {
            element: VoidElement::new("img"),
        };
        image.set_url(Some(url));
        image.set_alternate_text(Some(alternate_text));
        image
    }

    /// The `src`.
    pub fn url(&self) -> Option<String> {
        self.get(&Self::URL)
    }

    /// Sets or removes the `src`.
    pub fn set_url(&mut self, url: Option<&str>) {
        self.set(&Self::URL, url.map(str::to_owned));
    }

    /// The `alt` text.
    pub fn alternate_text(&self) -> Option<String> {
        self.get(&Self::ALTERNATE_TEXT)
    }

    /// Sets or removes the `alt` text.
    pub fn set_alternate_text(&mut self, text: Option<&str>) {
        self.set(&Self::ALTERNATE_TEXT, text.map(str::to_owned));
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

void_element_type!(Image);
