//! Elements: tag name, attributes, CSS classes, inline styles and children.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter;

use indexmap::IndexMap;

use crate::attribute::Accessor;
use crate::children::HtmlChildGenerator;
use crate::data::{DATA_PREFIX, Data, DataMut};
use crate::error::Error;
use crate::escape::escape_into;
use crate::generator::{Generator, GeneratorExt, Item, Items};
use crate::tracing_macros::{debug, trace};

/// The bookkeeping every element carries.
///
/// Attributes render in ascending name order, followed by a synthesized
/// `class` attribute (classes sorted, space-joined) and a synthesized `style`
/// attribute (declarations in insertion order, `"; "`-joined). Each is only
/// present when non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementBase {
    tag_name: Cow<'static, str>,
    attributes: BTreeMap<String, String>,
    css_classes: BTreeSet<String>,
    styles: IndexMap<String, String>,
}

impl ElementBase {
    /// Creates the bookkeeping for a `tag_name` element with no attributes.
    pub fn new(tag_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: BTreeMap::new(),
            css_classes: BTreeSet::new(),
            styles: IndexMap::new(),
        }
    }

    /// Renders `<tag attrs`, without the closing `>` or `/>`.
    pub fn start_tag(&self) -> String {
        let mut tag = String::with_capacity(self.tag_name.len() + 1 + 16 * self.attributes.len());
        tag.push('<');
        tag.push_str(&self.tag_name);
        for (name, value) in &self.attributes {
            push_attribute(&mut tag, name, value);
        }
        if !self.css_classes.is_empty() {
            let classes = self
                .css_classes
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            push_attribute(&mut tag, "class", &classes);
        }
        if !self.styles.is_empty() {
            let styles = self
                .styles
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect::<Vec<_>>()
                .join("; ");
            push_attribute(&mut tag, "style", &styles);
        }
        tag
    }

    /// Items of a self-closing element: `<tag attrs/>`.
    pub fn generate_void(&self) -> Items {
        let mut tag = self.start_tag();
        tag.push_str("/>");
        Box::new(iter::once(Item::from(tag)))
    }

    /// Items of a non-void element wrapped around `children`.
    pub fn generate_with(&self, children: Items) -> Items {
        let mut open = self.start_tag();
        open.push('>');
        let close = format!("</{}>", self.tag_name);
        Box::new(
            iter::once(Item::from(open))
                .chain(children)
                .chain(iter::once(Item::from(close))),
        )
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}

/// Attribute, class, style and data access shared by every element type.
///
/// Implementors only provide [`base`](Self::base) and
/// [`base_mut`](Self::base_mut).
pub trait HtmlElement {
    /// The element's bookkeeping.
    fn base(&self) -> &ElementBase;

    /// The element's bookkeeping, mutably.
    fn base_mut(&mut self) -> &mut ElementBase;

    /// The tag name.
    fn tag_name(&self) -> &str {
        &self.base().tag_name
    }

    /// Stores `value` under `name`, replacing any previous value.
    fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        trace!(tag = %self.tag_name(), %name, %value, "set attribute");
        self.base_mut().attributes.insert(name, value);
    }

    /// The stored value of `name`.
    fn attribute(&self, name: &str) -> Option<&str> {
        self.base().attributes.get(name).map(String::as_str)
    }

    /// The stored value of `name`, or `default` when absent.
    fn attribute_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attribute(name).unwrap_or(default)
    }

    /// Whether `name` is stored.
    fn has_attribute(&self, name: &str) -> bool {
        self.base().attributes.contains_key(name)
    }

    /// Removes `name`, returning its value. Absent names are ignored.
    fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.base_mut().attributes.remove(name)
    }

    /// Stored attribute names, sorted. Excludes the synthesized `class` and
    /// `style`.
    fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.base().attributes.keys().map(String::as_str)
    }

    /// Adds a CSS class.
    fn add_css_class(&mut self, class: impl Into<String>) {
        self.base_mut().css_classes.insert(class.into());
    }

    /// Adds several CSS classes.
    fn add_css_classes<I>(&mut self, classes: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.base_mut()
            .css_classes
            .extend(classes.into_iter().map(Into::into));
    }

    /// Removes a CSS class. Absent classes are ignored.
    fn remove_css_class(&mut self, class: &str) {
        self.base_mut().css_classes.remove(class);
    }

    /// Removes several CSS classes.
    fn remove_css_classes<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) {
        let css_classes = &mut self.base_mut().css_classes;
        for class in classes {
            css_classes.remove(class);
        }
    }

    /// Whether `class` is set.
    fn has_css_class(&self, class: &str) -> bool {
        self.base().css_classes.contains(class)
    }

    /// The CSS classes, sorted.
    fn css_classes(&self) -> impl Iterator<Item = &str> {
        self.base().css_classes.iter().map(String::as_str)
    }

    /// Sets or overrides one inline style property.
    fn set_style(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.base_mut().styles.insert(name.into(), value.into());
    }

    /// The value of one inline style property.
    fn style(&self, name: &str) -> Option<&str> {
        self.base().styles.get(name).map(String::as_str)
    }

    /// Removes one inline style property, keeping the order of the others.
    fn remove_style(&mut self, name: &str) -> Option<String> {
        self.base_mut().styles.shift_remove(name)
    }

    /// The `id` attribute.
    fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Sets the `id` attribute; `None` or an empty id removes it.
    ///
    /// Ids containing a space are rejected and leave the element unchanged.
    fn set_id(&mut self, id: Option<&str>) -> Result<(), Error> {
        match id {
            None | Some("") => {
                self.remove_attribute("id");
                Ok(())
            }
            Some(id) if id.contains(' ') => {
                debug!(id, "rejected id containing a space");
                Err(Error::InvalidValue {
                    name: "id",
                    value: id.to_owned(),
                    reason: "must not contain spaces",
                })
            }
            Some(id) => {
                self.set_attribute("id", id);
                Ok(())
            }
        }
    }

    /// A read-only view of the `data-` attributes.
    fn data(&self) -> Data<'_> {
        Data::new(self.base())
    }

    /// A mutable view of the `data-` attributes.
    fn data_mut(&mut self) -> DataMut<'_> {
        DataMut::new(self.base_mut())
    }

    /// Replaces all `data-` attributes with `pairs`.
    fn set_data<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let attributes = &mut self.base_mut().attributes;
        attributes.retain(|name, _| !name.starts_with(DATA_PREFIX));
        for (key, value) in pairs {
            attributes.insert(format!("{DATA_PREFIX}{}", key.as_ref()), value.into());
        }
    }

    /// Reads a typed property.
    fn get<A: Accessor>(&self, accessor: &A) -> A::Value {
        accessor.read(self.base())
    }

    /// Writes a typed property.
    fn set<A: Accessor>(&mut self, accessor: &A, value: A::Value) {
        accessor.write(self.base_mut(), value);
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`add_css_class`](Self::add_css_class).
    fn with_css_class(mut self, class: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.add_css_class(class);
        self
    }
}

impl HtmlElement for ElementBase {
    fn base(&self) -> &ElementBase {
        self
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        self
    }
}

/// A non-void element: `<tag attrs>children</tag>`.
///
/// Text appended through [`append`](Self::append) and [`extend`](Self::extend)
/// is escaped; the `_raw` variants insert it verbatim.
///
/// ```
/// use htmlgen::{Element, GeneratorExt, HtmlElement};
///
/// let mut div = Element::new("div");
/// div.set_attribute("title", "a \"quote\"");
/// div.add_css_classes(["b", "a"]);
/// div.append("1 < 2");
/// assert_eq!(
///     div.render(),
///     r#"<div title="a &quot;quote&quot;" class="a b">1 &lt; 2</div>"#,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    base: ElementBase,
    children: HtmlChildGenerator,
}

impl Element {
    /// Creates an empty `tag_name` element.
    pub fn new(tag_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            base: ElementBase::new(tag_name),
            children: HtmlChildGenerator::new(),
        }
    }

    /// Appends a child, escaping text.
    pub fn append(&mut self, child: impl Into<Item>) {
        self.children.append(child);
    }

    /// Appends a child without escaping text. Unsafe with untrusted input.
    pub fn append_raw(&mut self, child: impl Into<Item>) {
        self.children.append_raw(child);
    }

    /// Appends several children, escaping text.
    pub fn extend<I>(&mut self, children: I)
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.children.extend(children);
    }

    /// Appends several children without escaping text.
    pub fn extend_raw<I>(&mut self, children: I)
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.children.extend_raw(children);
    }

    /// Removes a child; text is escaped before matching.
    pub fn remove(&mut self, child: impl Into<Item>) -> Result<(), Error> {
        self.children.remove(child)
    }

    /// Removes a child; text is matched as given.
    pub fn remove_raw(&mut self, child: impl Into<Item>) -> Result<(), Error> {
        self.children.remove_raw(child)
    }

    /// Removes all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// A snapshot of the children.
    pub fn children(&self) -> Vec<Item> {
        self.children.children()
    }

    /// Builder form of [`append`](Self::append).
    pub fn with_child(mut self, child: impl Into<Item>) -> Self {
        self.append(child);
        self
    }

    /// The items between the start and end tag.
    pub fn generate_children(&self) -> Items {
        self.children.generate()
    }
}

impl HtmlElement for Element {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Generator for Element {
    fn generate(&self) -> Items {
        self.base.generate_with(self.generate_children())
    }
}

/// A void element: `<tag attrs/>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoidElement {
    base: ElementBase,
}

impl VoidElement {
    /// Creates a `tag_name` element without attributes.
    pub fn new(tag_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            base: ElementBase::new(tag_name),
        }
    }
}

impl HtmlElement for VoidElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Generator for VoidElement {
    fn generate(&self) -> Items {
        self.base.generate_void()
    }
}

impl From<Element> for Item {
    fn from(element: Element) -> Self {
        Item::node(element)
    }
}

impl From<VoidElement> for Item {
    fn from(element: VoidElement) -> Self {
        Item::node(element)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chunks().try_for_each(|chunk| f.write_str(chunk.as_str()))
    }
}

impl fmt::Display for VoidElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chunks().try_for_each(|chunk| f.write_str(chunk.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Chunk;

    #[test]
    fn test_empty_elements() {
        assert_eq!(Element::new("div").render(), "<div></div>");
        assert_eq!(VoidElement::new("br").render(), "<br/>");
    }

    #[test]
    fn test_element_chunks() {
        let mut element = Element::new("p");
        element.append("one");
        element.append("two");
        let chunks: Vec<Chunk> = element.chunks().collect();
        assert_eq!(chunks, ["<p>", "one", "two", "</p>"]);
    }

    #[test]
    fn test_attributes_sorted() {
        let mut element = VoidElement::new("input");
        element.set_attribute("zoo", "1");
        element.set_attribute("abc", "2");
        element.set_attribute("mid", "3");
        assert_eq!(element.render(), r#"<input abc="2" mid="3" zoo="1"/>"#);
        assert_eq!(element.attribute_names().collect::<Vec<_>>(), ["abc", "mid", "zoo"]);
    }

    #[test]
    fn test_attribute_value_escaped() {
        let mut element = VoidElement::new("br");
        element.set_attribute("title", "<\"&'>");
        assert_eq!(
            element.render(),
            r#"<br title="&lt;&quot;&amp;&#x27;&gt;"/>"#
        );
    }

    #[test]
    fn test_attribute_access() {
        let mut element = Element::new("div");
        assert_eq!(element.attribute("foo"), None);
        assert_eq!(element.attribute_or("foo", "fallback"), "fallback");
        element.set_attribute("foo", "bar");
        assert_eq!(element.attribute("foo"), Some("bar"));
        assert_eq!(element.remove_attribute("foo"), Some("bar".to_owned()));
        assert_eq!(element.remove_attribute("foo"), None);
        assert!(!element.has_attribute("foo"));
    }

    #[test]
    fn test_css_classes_sorted_and_deduplicated() {
        let mut element = Element::new("div");
        element.add_css_classes(["zeta", "alpha"]);
        element.add_css_class("alpha");
        element.add_css_class("mid");
        assert_eq!(element.render(), r#"<div class="alpha mid zeta"></div>"#);
        element.remove_css_classes(["mid", "missing"]);
        element.remove_css_class("zeta");
        assert!(element.has_css_class("alpha"));
        assert!(!element.has_css_class("zeta"));
        assert_eq!(element.render(), r#"<div class="alpha"></div>"#);
    }

    #[test]
    fn test_styles_in_insertion_order() {
        let mut element = Element::new("div");
        element.set_style("width", "100px");
        element.set_style("color", "red");
        element.set_style("width", "50%");
        assert_eq!(
            element.render(),
            r#"<div style="width: 50%; color: red"></div>"#
        );
        assert_eq!(element.remove_style("width"), Some("50%".to_owned()));
        assert_eq!(element.style("color"), Some("red"));
        assert_eq!(element.render(), r#"<div style="color: red"></div>"#);
    }

    #[test]
    fn test_class_and_style_follow_attributes() {
        let mut element = VoidElement::new("img");
        element.set_style("border", "0");
        element.add_css_class("photo");
        element.set_attribute("src", "a.png");
        assert_eq!(
            element.render(),
            r#"<img src="a.png" class="photo" style="border: 0"/>"#
        );
    }

    #[test]
    fn test_id() {
        let mut element = Element::new("div");
        assert_eq!(element.id(), None);
        element.set_id(Some("main")).unwrap();
        assert_eq!(element.render(), r#"<div id="main"></div>"#);
        assert!(matches!(
            element.set_id(Some("two words")),
            Err(Error::InvalidValue { name: "id", .. })
        ));
        assert_eq!(element.id(), Some("main"));
        element.set_id(Some("")).unwrap();
        assert_eq!(element.id(), None);
        element.set_id(Some("x")).unwrap();
        element.set_id(None).unwrap();
        assert_eq!(element.id(), None);
    }

    #[test]
    fn test_children_escaping() {
        let mut element = Element::new("div");
        element.append("<foo>");
        element.append_raw("<bar/>");
        element.extend(["&", "b"]);
        element.extend_raw(["<i>"]);
        assert_eq!(element.len(), 5);
        assert_eq!(element.render(), "<div>&lt;foo&gt;<bar/>&amp;b<i></div>");
        element.remove("<foo>").unwrap();
        element.remove_raw("<i>").unwrap();
        assert_eq!(element.remove("<bar/>"), Err(Error::ChildNotFound));
        assert_eq!(element.render(), "<div><bar/>&amp;b</div>");
        element.clear();
        assert!(element.is_empty());
    }

    #[test]
    fn test_nested_elements() {
        let inner = Element::new("span").with_child("x").with_css_class("c");
        let outer = Element::new("p").with_child(inner).with_child(VoidElement::new("br"));
        assert_eq!(outer.render(), r#"<p><span class="c">x</span><br/></p>"#);
        assert_eq!(outer.to_string(), outer.render());
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut element = Element::new("ul");
        element.append("item");
        let before = element.clone();
        assert_eq!(element.render(), element.render());
        assert_eq!(element, before);
    }
}
