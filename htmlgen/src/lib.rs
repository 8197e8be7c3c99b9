#![deny(unsafe_code)]
#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

//! Build HTML as a tree of typed values and stream it out lazily.
//!
//! # Generators
//!
//! Everything that renders implements [`Generator`]. A generator produces
//! [`Item`]s, and each item is either text, emitted byte for byte, or a nested
//! generator ([`Node`]), expanded where it appears. [`Flatten`] walks the tree
//! depth-first with an explicit stack, so nothing is rendered before the
//! consumer asks for it:
//!
//! ```rust
//! use htmlgen::{Element, GeneratorExt, HtmlElement};
//!
//! let mut list = Element::new("ol");
//! for label in ["A", "B"] {
//!     list.append(Element::new("li").with_child(label));
//! }
//! assert_eq!(list.render(), "<ol><li>A</li><li>B</li></ol>");
//!
//! let chunks: Vec<String> = list.chunks().map(|c| c.to_string()).collect();
//! assert_eq!(chunks, ["<ol>", "<li>", "A", "</li>", "<li>", "B", "</li>", "</ol>"]);
//! ```
//!
//! # Escaping
//!
//! The flattener never escapes. Escaping happens once, when text enters an
//! element through [`Element::append`] or an attribute value is rendered.
//! The `_raw` methods store text as given and must not be fed untrusted
//! input:
//!
//! ```rust
//! use htmlgen::{Element, GeneratorExt};
//!
//! let mut p = Element::new("p");
//! p.append("<script>");
//! p.append_raw("<br/>");
//! assert_eq!(p.render(), "<p>&lt;script&gt;<br/></p>");
//! ```
//!
//! # Attributes
//!
//! [`HtmlElement`] gives every element attribute, class, style and `data-*`
//! access. Attributes render sorted by name, then `class` (sorted classes),
//! then `style` (declarations in insertion order), so output is
//! deterministic. Typed properties are declared with the accessors in
//! [`Attribute`], [`TextAttribute`], [`BooleanAttribute`], [`ListAttribute`]
//! and [`CssClassAttribute`].
//!
//! # Sharing
//!
//! Children are reference counted and not `Send`. A [`Shared`] handle keeps an
//! appended element editable after it has been placed in its parent.

mod tracing_macros;

mod attribute;
mod children;
mod data;
mod element;
mod error;
mod escape;
mod generator;
mod join;
pub mod timeutil;

use std::io;

pub use attribute::{
    Accessor, Attribute, AttributeValue, BooleanAttribute, CssClassAttribute, ListAttribute,
    TextAttribute,
};
pub use children::{ChildGenerator, HtmlChildGenerator, html_string};
pub use data::{DATA_PREFIX, Data, DataMut};
pub use element::{Element, ElementBase, HtmlElement, VoidElement};
pub use error::Error;
pub use escape::{escape, escape_into};
pub use generator::{
    Chunk, Flatten, FnGenerator, Generator, GeneratorExt, Item, Items, IteratorGenerator, Node,
    NullGenerator, Shared, Text, shared,
};
pub use join::{HtmlJoinGenerator, JoinGenerator};

/// Common imports for building documents.
pub mod prelude {
    pub use crate::{Element, Generator, GeneratorExt, HtmlElement, Item, VoidElement};
}

/// Renders `generator` to a `String`.
///
/// # Example
///
/// ```rust
/// let br = htmlgen::VoidElement::new("br");
/// assert_eq!(htmlgen::to_string(&br), "<br/>");
/// ```
pub fn to_string<G: Generator + ?Sized>(generator: &G) -> String {
    generator.render()
}

/// Renders `generator` to bytes.
pub fn to_vec<G: Generator + ?Sized>(generator: &G) -> Vec<u8> {
    generator.chunks().fold(Vec::new(), |mut out, chunk| {
        out.extend_from_slice(chunk.as_bytes());
        out
    })
}

/// Streams `generator` into `writer`, chunk by chunk.
///
/// # Example
///
/// ```rust
/// let mut out = Vec::new();
/// htmlgen::to_writer(&mut out, &htmlgen::Element::new("p")).unwrap();
/// assert_eq!(out, b"<p></p>");
/// ```
pub fn to_writer<W: io::Write, G: Generator + ?Sized>(writer: W, generator: &G) -> io::Result<()> {
    generator.write_to(writer)
}
