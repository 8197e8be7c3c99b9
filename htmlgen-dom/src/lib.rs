#![deny(unsafe_code)]
#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

//! Typed HTML elements on top of [`htmlgen`].
//!
//! Each type wraps an [`htmlgen::Element`] (or [`htmlgen::VoidElement`]) and
//! adds the attributes that element is known for as plain methods. All of
//! them implement [`htmlgen::HtmlElement`] and [`htmlgen::Generator`], and
//! the non-void ones deref to their element for child access:
//!
//! ```
//! use htmlgen::{GeneratorExt, HtmlElement};
//! use htmlgen_dom::{Document, Link, Paragraph};
//!
//! let mut doc = Document::new("Welcome");
//! doc.add_stylesheet("site.css");
//!
//! let mut p = Paragraph::with_content(["Read the "]);
//! p.append(Link::with_content("/docs", ["docs"]));
//! p.add_css_class("intro");
//! doc.append_body(p);
//!
//! assert!(doc.render().ends_with(
//!     r#"<body><p class="intro">Read the <a href="/docs">docs</a></p></body></html>"#
//! ));
//! ```
//!
//! Builders such as [`Table::create_row`] or [`Select::create_option`]
//! return [`htmlgen::Shared`] handles, so a child stays editable after it
//! has been placed.

#[macro_use]
mod macros;
mod tracing_macros;

mod block;
mod datetime;
mod document;
mod form;
mod image;
mod inline;
mod link;
mod list;
mod structure;
mod table;
mod video;

pub use block::{Division, Paragraph, Preformatted};
pub use datetime::Time;
pub use document::{
    Body, Document, Head, HeadLink, HtmlRoot, MIME_JAVASCRIPT, MIME_JSON, Main, Meta, Script,
    Title, json_script,
};
pub use form::{
    Autocomplete, Button, Checkbox, DateInput, ENC_TYPE_MULTIPART, ENC_TYPE_URL_ENCODED,
    FileInput, Form, HiddenInput, Input, Label, NumberInput, OptionGroup, PasswordInput,
    RadioButton, SearchInput, Select, SelectOption, SubmitButton, TextArea, TextInput, TimeInput,
};
pub use image::Image;
pub use inline::{Alternate, Emphasis, Highlight, LineBreak, Small, Span, Strong};
pub use link::Link;
pub use list::{
    DescriptionDefinition, DescriptionList, DescriptionTerm, ListItem, OrderedList,
    UnorderedList,
};
pub use structure::{Article, Aside, Footer, Header, Heading, Navigation, Section};
pub use table::{
    Column, ColumnGroup, Table, TableBody, TableCell, TableHead, TableHeaderCell, TableRow,
};
pub use video::{Preload, Video};

pub use htmlgen;
