//! Mutable child lists.

use std::rc::Rc;

use crate::error::Error;
use crate::escape::escape;
use crate::generator::{Generator, Item, Items, Node};
use crate::tracing_macros::debug;

/// An ordered list of text and node children, produced in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildGenerator {
    children: Vec<Item>,
}

impl ChildGenerator {
    /// Creates an empty child list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored children. A nested node counts as one.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether no children are stored.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends one child.
    pub fn append(&mut self, child: impl Into<Item>) {
        self.children.push(child.into());
    }

    /// Appends several children, in order.
    pub fn extend<I>(&mut self, children: I)
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.children.extend(children.into_iter().map(Into::into));
    }

    /// Removes the first child equal to `child`.
    ///
    /// Text matches by value, nodes by identity.
    pub fn remove(&mut self, child: impl Into<Item>) -> Result<(), Error> {
        let child = child.into();
        match self.children.iter().position(|c| *c == child) {
            Some(index) => {
                self.children.remove(index);
                Ok(())
            }
            None => {
                debug!(?child, "child to remove not found");
                Err(Error::ChildNotFound)
            }
        }
    }

    /// Removes all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// A snapshot of the current children.
    pub fn children(&self) -> Vec<Item> {
        self.children.clone()
    }

    /// Iterates over the stored children.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.children.iter()
    }
}

impl Generator for ChildGenerator {
    fn generate(&self) -> Items {
        Box::new(self.children.clone().into_iter())
    }
}

impl<'a> IntoIterator for &'a ChildGenerator {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

pub(crate) fn escape_item(item: Item) -> Item {
    match item {
        Item::Text(text) => match escape(&text) {
            std::borrow::Cow::Borrowed(_) => Item::Text(text),
            std::borrow::Cow::Owned(escaped) => Item::Text(escaped.into()),
        },
        node @ Item::Node(_) => node,
    }
}

/// A child list that escapes text on the way in.
///
/// Text passed to [`append`](Self::append) and [`extend`](Self::extend) is
/// stored HTML-escaped. The `_raw` variants store text as given, which is only
/// safe with trusted input. Nodes are never escaped.
///
/// ```
/// use htmlgen::{GeneratorExt, HtmlChildGenerator};
///
/// let mut children = HtmlChildGenerator::new();
/// children.append("<foo>");
/// children.append_raw("<bar>");
/// assert_eq!(children.render(), "&lt;foo&gt;<bar>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlChildGenerator {
    inner: ChildGenerator,
}

impl HtmlChildGenerator {
    /// Creates an empty child list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored children.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no children are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Appends one child, escaping text.
    pub fn append(&mut self, child: impl Into<Item>) {
        self.inner.append(escape_item(child.into()));
    }

    /// Appends one child without escaping.
    pub fn append_raw(&mut self, child: impl Into<Item>) {
        self.inner.append(child);
    }

    /// Appends several children, escaping text.
    pub fn extend<I>(&mut self, children: I)
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.inner
            .extend(children.into_iter().map(|c| escape_item(c.into())));
    }

    /// Appends several children without escaping.
    pub fn extend_raw<I>(&mut self, children: I)
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.inner.extend(children);
    }

    /// Removes the first child equal to `child`, escaping text before matching.
    pub fn remove(&mut self, child: impl Into<Item>) -> Result<(), Error> {
        self.inner.remove(escape_item(child.into()))
    }

    /// Removes the first child equal to `child`, matching text as given.
    pub fn remove_raw(&mut self, child: impl Into<Item>) -> Result<(), Error> {
        self.inner.remove(child)
    }

    /// Removes all children.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// A snapshot of the current children, in stored (escaped) form.
    pub fn children(&self) -> Vec<Item> {
        self.inner.children()
    }

    /// Iterates over the stored children.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.inner.iter()
    }
}

impl Generator for HtmlChildGenerator {
    fn generate(&self) -> Items {
        self.inner.generate()
    }
}

/// Turns text into an escaping node and returns nodes unchanged.
pub fn html_string(item: impl Into<Item>) -> Node {
    match item.into() {
        Item::Node(node) => node,
        text @ Item::Text(_) => {
            let mut children = HtmlChildGenerator::new();
            children.append(text);
            Rc::new(children)
        }
    }
}
