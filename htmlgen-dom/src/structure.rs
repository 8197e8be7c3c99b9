//! Sectioning content and headings.

use htmlgen::{Element, Error, Item};

container!(
    /// A `<section>`: a logical unit such as a chapter.
    Section,
    "section"
);

container!(
    /// An `<article>`: self-contained content, like a blog entry.
    Article,
    "article"
);

container!(
    /// A `<nav>` block of navigation links.
    Navigation,
    "nav"
);

container!(
    /// An `<aside>`: content tangential to its surroundings.
    Aside,
    "aside"
);

container!(
    /// A `<header>`: introductory content, usually headings.
    Header,
    "header"
);

container!(
    /// A `<footer>` of a section or page.
    Footer,
    "footer"
);

/// An `<h1>` to `<h6>` heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    element: Element,
    level: u8,
}

impl Heading {
    /// Creates an empty heading of `level`, which must be between 1 and 6.
    pub fn new(level: u8) -> Result<Self, Error> {
        if !(1..=6).contains(&level) {
            return Err(Error::OutOfRange {
                name: "heading level",
                reason: format!("{level} is not between 1 and 6"),
            });
        }
        Ok(Self {
            element: Element::new(format!("h{level}")),
            level,
        })
    }

    /// Creates a heading of `level` with initial children.
    pub fn with_content<I>(level: u8, content: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut heading = Self::new(level)?;
        heading.extend(content);
        Ok(heading)
    }

    /// The heading level, 1 to 6.
    pub fn level(&self) -> u8 {
        self.level
    }
}

element_type!(Heading);
