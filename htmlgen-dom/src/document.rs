//! Whole documents and the elements of their `<head>`.

use std::iter;

use htmlgen::{
    ElementBase, Generator, HtmlElement, Item, Items, TextAttribute, VoidElement, escape,
};

use crate::macros::append_shared;

/// MIME type of JavaScript, the default `<script>` type.
pub const MIME_JAVASCRIPT: &str = "text/javascript";

/// MIME type of JSON payloads, see [`json_script`].
pub const MIME_JSON: &str = "application/json";

const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// A complete HTML document: the doctype followed by the root element.
///
/// ```
/// use htmlgen::GeneratorExt;
/// use htmlgen_dom::Document;
///
/// let doc = Document::new("My Page");
/// assert_eq!(
///     doc.render(),
///     concat!(
///         "<!DOCTYPE html>",
///         r#"<html lang="en" xml:lang="en" xmlns="http://www.w3.org/1999/xhtml">"#,
///         r#"<head><title>My Page</title><meta charset="utf-8"/></head>"#,
///         "<body></body></html>",
///     ),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The `<html>` element. It can be replaced wholesale.
    pub root: HtmlRoot,
}

impl Document {
    /// Creates an English document titled `title`.
    pub fn new(title: &str) -> Self {
        Self::with_language(title, "en")
    }

    /// Creates a document titled `title` in `language`.
    pub fn with_language(title: &str, language: &str) -> Self {
        Self {
            root: HtmlRoot::new(title, language),
        }
    }

    /// The page title.
    pub fn title(&self) -> &str {
        self.root.head.title().text()
    }

    /// Replaces the page title.
    pub fn set_title(&mut self, title: &str) {
        self.root.head.title_mut().set_text(title);
    }

    /// Links a stylesheet from the head.
    pub fn add_stylesheet(&mut self, url: &str) {
        self.root.head.add_stylesheet(url);
    }

    /// Links several stylesheets from the head.
    pub fn add_stylesheets<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        self.root.head.add_stylesheets(urls);
    }

    /// Loads an external script from the head.
    pub fn add_script(&mut self, url: &str) {
        self.root.head.add_script(url);
    }

    /// Loads several external scripts from the head.
    pub fn add_scripts<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        self.root.head.add_scripts(urls);
    }

    /// Appends a child to the head.
    pub fn append_head(&mut self, child: impl Into<Item>) {
        self.root.head.append(child);
    }

    /// Appends a child to the body.
    pub fn append_body(&mut self, child: impl Into<Item>) {
        self.root.body.append(child);
    }
}

impl Generator for Document {
    fn generate(&self) -> Items {
        Box::new(
            [
                Item::from("<!DOCTYPE html>"),
                Item::from(self.root.clone()),
            ]
            .into_iter(),
        )
    }
}

impl_node!(Document);

/// The `<html>` root, holding exactly one head and one body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRoot {
    base: ElementBase,
    /// The `<head>`.
    pub head: Head,
    /// The `<body>`.
    pub body: Body,
}

impl HtmlRoot {
    /// Creates a root in `language` with a head titled `title`.
    pub fn new(title: &str, language: &str) -> Self {
        let mut base = ElementBase::new("html");
        base.set_attribute("xmlns", XHTML_NAMESPACE);
        base.set_attribute("lang", language);
        base.set_attribute("xml:lang", language);
        Self {
            base,
            head: Head::new(title),
            body: Body::new(),
        }
    }
}

impl HtmlElement for HtmlRoot {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Generator for HtmlRoot {
    fn generate(&self) -> Items {
        let children = [Item::from(self.head.clone()), Item::from(self.body.clone())];
        self.base.generate_with(Box::new(children.into_iter()))
    }
}

impl_node!(HtmlRoot);

/// The document `<head>`.
///
/// The title always renders first, followed by a `<meta charset="utf-8"/>`
/// and whatever was appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    element: htmlgen::Element,
    title: Title,
}

impl Head {
    /// Creates a head titled `title`.
    pub fn new(title: &str) -> Self {
        let mut element = htmlgen::Element::new("head");
        element.append(Meta::charset("utf-8"));
        Self {
            element,
            title: Title::new(title),
        }
    }

    /// The `<title>` element.
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Mutable access to the `<title>` element.
    pub fn title_mut(&mut self) -> &mut Title {
        &mut self.title
    }

    /// Replaces the `<title>` element.
    pub fn set_title(&mut self, title: Title) {
        self.title = title;
    }

    /// Appends a stylesheet link and returns it.
    pub fn add_stylesheet(&mut self, url: &str) -> htmlgen::Shared<HeadLink> {
        append_shared(&mut self.element, HeadLink::stylesheet(url))
    }

    /// Appends one stylesheet link per URL.
    pub fn add_stylesheets<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        for url in urls {
            self.add_stylesheet(url);
        }
    }

    /// Appends an external script and returns it.
    pub fn add_script(&mut self, url: &str) -> htmlgen::Shared<Script> {
        append_shared(&mut self.element, Script::external(url))
    }

    /// Appends one external script per URL.
    pub fn add_scripts<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        for url in urls {
            self.add_script(url);
        }
    }

    fn generate_children(&self) -> Items {
        Box::new(iter::once(Item::from(self.title.clone())).chain(self.element.generate_children()))
    }
}

element_type!(Head, generate = generate_children);

container!(
    /// The document `<body>`.
    Body,
    "body"
);

container!(
    /// The `<main>` content of a document.
    Main,
    "main"
);

/// The page `<title>`. Its text is escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    base: ElementBase,
    text: String,
}

impl Title {
    /// Creates a title showing `text`.
    pub fn new(text: &str) -> Self {
        Self {
            base: ElementBase::new("title"),
            text: text.to_owned(),
        }
    }

    /// The unescaped title text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the title text.
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }
}

impl HtmlElement for Title {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Generator for Title {
    fn generate(&self) -> Items {
        if self.text.is_empty() {
            return self.base.generate_with(Box::new(iter::empty()));
        }
        let text = Item::from(escape(&self.text).into_owned());
        self.base.generate_with(Box::new(iter::once(text)))
    }
}

impl_node!(Title);

/// A `<meta/>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    element: VoidElement,
}

impl Meta {
    /// Creates a `<meta/>` without attributes.
    pub fn new() -> Self {
        Self {
            element: VoidElement::new("meta"),
        }
    }

    /// Creates `<meta charset="..."/>`.
    pub fn charset(charset: &str) -> Self {
        let mut meta = Self::new();
        meta.set_attribute("charset", charset);
        meta
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::new()
    }
}

void_element_type!(Meta);

/// A `<script>`, either loading an external URL or carrying its source
/// inline.
///
/// Inline source is emitted verbatim, without escaping:
///
/// ```
/// use htmlgen::GeneratorExt;
/// use htmlgen_dom::Script;
///
/// let script = Script::inline("if (a < b) alert('hi');");
/// assert_eq!(script.script_type(), "text/javascript");
/// assert_eq!(script.render(), "<script>if (a < b) alert('hi');</script>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    base: ElementBase,
    script: Option<String>,
}

impl Script {
    const TYPE: TextAttribute = TextAttribute::with_default("type", MIME_JAVASCRIPT);
    const URL: TextAttribute = TextAttribute::new("src");

    /// Creates an empty script.
    pub fn new() -> Self {
        Self {
            base: ElementBase::new("script"),
            script: None,
        }
    }

    /// Creates a script loaded from `url`.
    pub fn external(url: &str) -> Self {
        let mut script = Self::new();
        script.set_url(Some(url));
        script
    }

    /// Creates a script with inline `source`.
    pub fn inline(source: &str) -> Self {
        let mut script = Self::new();
        script.set_script(Some(source));
        script
    }

    /// The MIME type, JavaScript unless set.
    pub fn script_type(&self) -> String {
        self.get(&Self::TYPE).unwrap_or_default()
    }

    /// Sets the MIME type; JavaScript removes the attribute.
    pub fn set_script_type(&mut self, script_type: &str) {
        self.set(&Self::TYPE, Some(script_type.to_owned()));
    }

    /// The external URL (`src`).
    pub fn url(&self) -> Option<String> {
        self.get(&Self::URL)
    }

    /// Sets or removes the external URL.
    pub fn set_url(&mut self, url: Option<&str>) {
        self.set(&Self::URL, url.map(str::to_owned));
    }

    /// The inline source.
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Sets or removes the inline source.
    pub fn set_script(&mut self, script: Option<&str>) {
        self.script = script.map(str::to_owned);
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlElement for Script {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Generator for Script {
    fn generate(&self) -> Items {
        let source = self
            .script
            .clone()
            .filter(|source| !source.is_empty())
            .map(Item::from);
        self.base.generate_with(Box::new(source.into_iter()))
    }
}

impl_node!(Script);

/// A `<script>` carrying `value` as JSON.
///
/// `</` is written as `<\/` so the payload cannot close the element early.
///
/// ```
/// use htmlgen::GeneratorExt;
/// use serde_json::json;
///
/// let script = htmlgen_dom::json_script(&json!({"s": "</script>", "a": [1, 2]}));
/// assert_eq!(script.script_type(), "application/json");
/// assert_eq!(
///     script.render(),
///     r#"<script type="application/json">{"s":"<\/script>","a":[1,2]}</script>"#,
/// );
/// ```
pub fn json_script(value: &serde_json::Value) -> Script {
    let escaped = value.to_string().replace("</", r"<\/");
    let mut script = Script::inline(&escaped);
    script.set_script_type(MIME_JSON);
    script
}

/// A `<link/>` in the head, such as a stylesheet reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadLink {
    element: VoidElement,
}

impl HeadLink {
    const RELATION: TextAttribute = TextAttribute::new("rel");
    const URL: TextAttribute = TextAttribute::new("href");

    /// Creates a link of kind `relation` to `url`.
    pub fn new(relation: &str, url: &str) -> Self {
        let mut link = Self {
            element: VoidElement::new("link"),
        };
        link.set_relation(Some(relation));
        link.set_url(Some(url));
        link
    }

    /// Creates a stylesheet link.
    pub fn stylesheet(url: &str) -> Self {
        Self::new("stylesheet", url)
    }

    /// The link relation (`rel`).
    pub fn relation(&self) -> Option<String> {
        self.get(&Self::RELATION)
    }

    /// Sets or removes the link relation.
    pub fn set_relation(&mut self, relation: Option<&str>) {
        self.set(&Self::RELATION, relation.map(str::to_owned));
    }

    /// The target URL (`href`).
    pub fn url(&self) -> Option<String> {
        self.get(&Self::URL)
    }

    /// Sets or removes the target URL.
    pub fn set_url(&mut self, url: Option<&str>) {
        self.set(&Self::URL, url.map(str::to_owned));
    }
}

void_element_type!(HeadLink);
