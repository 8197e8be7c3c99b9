//! Typed attribute accessors.
//!
//! An accessor binds one attribute name to a type conversion. Element types
//! keep them as associated constants and read or write them through
//! [`HtmlElement::get`] and [`HtmlElement::set`]:
//!
//! ```
//! use htmlgen::{Attribute, BooleanAttribute, GeneratorExt, HtmlElement, VoidElement};
//!
//! const SIZE: Attribute<u32> = Attribute::new("size");
//! const DISABLED: BooleanAttribute = BooleanAttribute::new("disabled");
//!
//! let mut input = VoidElement::new("input");
//! input.set(&SIZE, Some(20));
//! input.set(&DISABLED, true);
//! assert_eq!(input.render(), r#"<input disabled="disabled" size="20"/>"#);
//! assert_eq!(input.get(&SIZE), Some(20));
//! ```
//!
//! Values that cannot be parsed back, such as `size="big"` set through
//! [`HtmlElement::set_attribute`], read as `None` rather than failing.
//! Writing the accessor's default (or `None`) removes the attribute, so
//! defaults never show up in the output.

use std::borrow::Cow;

use time::{Date, Time};

use crate::data::DATA_PREFIX;
use crate::element::{ElementBase, HtmlElement};
use crate::timeutil;

/// A typed view of one attribute.
pub trait Accessor {
    /// The type read and written.
    type Value;

    /// Reads the value from `element`.
    fn read(&self, element: &ElementBase) -> Self::Value;

    /// Writes `value` to `element`.
    fn write(&self, element: &mut ElementBase, value: Self::Value);
}

/// Conversion between a Rust value and its attribute text.
pub trait AttributeValue: Sized {
    /// The attribute text for `self`.
    fn to_attribute(&self) -> String;

    /// Parses attribute text, `None` if it is malformed.
    fn from_attribute(raw: &str) -> Option<Self>;
}

macro_rules! impl_attribute_value_via_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AttributeValue for $ty {
                fn to_attribute(&self) -> String {
                    self.to_string()
                }

                fn from_attribute(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )*
    };
}

impl_attribute_value_via_str!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl AttributeValue for Time {
    fn to_attribute(&self) -> String {
        timeutil::format_time(*self)
    }

    fn from_attribute(raw: &str) -> Option<Self> {
        timeutil::parse_time(raw)
    }
}

impl AttributeValue for Date {
    fn to_attribute(&self) -> String {
        timeutil::format_date(*self)
    }

    fn from_attribute(raw: &str) -> Option<Self> {
        timeutil::parse_date(raw)
    }
}

fn data_attribute_name(key: &str) -> Cow<'static, str> {
    Cow::Owned(format!("{DATA_PREFIX}{key}"))
}

/// Plain text attribute, with an optional default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAttribute {
    name: Cow<'static, str>,
    default: Option<&'static str>,
}

impl TextAttribute {
    /// An attribute without a default.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            default: None,
        }
    }

    /// An attribute that reads as `default` when absent.
    pub const fn with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            default: Some(default),
        }
    }

    /// The `data-<key>` attribute.
    pub fn data(key: &str) -> Self {
        Self {
            name: data_attribute_name(key),
            default: None,
        }
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Accessor for TextAttribute {
    type Value = Option<String>;

    fn read(&self, element: &ElementBase) -> Option<String> {
        element
            .attribute(&self.name)
            .or(self.default)
            .map(str::to_owned)
    }

    fn write(&self, element: &mut ElementBase, value: Option<String>) {
        match value {
            Some(value) if Some(value.as_str()) != self.default => {
                element.set_attribute(self.name.clone(), value);
            }
            _ => {
                element.remove_attribute(&self.name);
            }
        }
    }
}

/// Typed attribute with an optional default.
///
/// Absent attributes read as the default, malformed ones as `None`. Writing
/// `None` or the default removes the attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute<T> {
    name: Cow<'static, str>,
    default: Option<T>,
}

impl<T> Attribute<T> {
    /// An attribute without a default.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            default: None,
        }
    }

    /// An attribute that reads as `default` when absent.
    pub const fn with_default(name: &'static str, default: T) -> Self {
        Self {
            name: Cow::Borrowed(name),
            default: Some(default),
        }
    }

    /// The `data-<key>` attribute.
    pub fn data(key: &str) -> Self {
        Self {
            name: data_attribute_name(key),
            default: None,
        }
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default, if any.
    pub fn default(&self) -> Option<&T> {
        self.default.as_ref()
    }
}

impl<T: AttributeValue + PartialEq + Clone> Accessor for Attribute<T> {
    type Value = Option<T>;

    fn read(&self, element: &ElementBase) -> Option<T> {
        match element.attribute(&self.name) {
            Some(raw) => T::from_attribute(raw),
            None => self.default.clone(),
        }
    }

    fn write(&self, element: &mut ElementBase, value: Option<T>) {
        match value {
            Some(value) if self.default.as_ref() != Some(&value) => {
                element.set_attribute(self.name.clone(), value.to_attribute());
            }
            _ => {
                element.remove_attribute(&self.name);
            }
        }
    }
}

/// Presence flag rendered as `name="name"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanAttribute {
    name: &'static str,
}

impl BooleanAttribute {
    /// A flag for `name`.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Accessor for BooleanAttribute {
    type Value = bool;

    fn read(&self, element: &ElementBase) -> bool {
        element.has_attribute(self.name)
    }

    fn write(&self, element: &mut ElementBase, value: bool) {
        if value {
            element.set_attribute(self.name, self.name);
        } else {
            element.remove_attribute(self.name);
        }
    }
}

/// Comma-separated list of strings. An empty list removes the attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAttribute {
    name: &'static str,
}

impl ListAttribute {
    /// A list stored in `name`.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Accessor for ListAttribute {
    type Value = Vec<String>;

    fn read(&self, element: &ElementBase) -> Vec<String> {
        match element.attribute(self.name) {
            Some(raw) => raw.split(',').map(str::to_owned).collect(),
            None => Vec::new(),
        }
    }

    fn write(&self, element: &mut ElementBase, value: Vec<String>) {
        if value.is_empty() {
            element.remove_attribute(self.name);
        } else {
            element.set_attribute(self.name, value.join(","));
        }
    }
}

/// Flag backed by the presence of a CSS class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssClassAttribute {
    class: &'static str,
}

impl CssClassAttribute {
    /// A flag for `class`.
    pub const fn new(class: &'static str) -> Self {
        Self { class }
    }
}

impl Accessor for CssClassAttribute {
    type Value = bool;

    fn read(&self, element: &ElementBase) -> bool {
        element.has_css_class(self.class)
    }

    fn write(&self, element: &mut ElementBase, value: bool) {
        if value {
            element.add_css_class(self.class);
        } else {
            element.remove_css_class(self.class);
        }
    }
}

/// Declares a closed set of attribute values.
///
/// The generated enum implements [`AttributeValue`], so it can back an
/// [`Attribute`]. Unknown stored values read as `None`.
///
/// ```
/// htmlgen::attribute_enum! {
///     /// How a video preloads.
///     pub enum Preload {
///         None = "none",
///         Metadata = "metadata",
///         Auto = "auto",
///     }
/// }
///
/// use htmlgen::AttributeValue;
/// assert_eq!(Preload::Metadata.as_str(), "metadata");
/// assert_eq!(Preload::from_attribute("auto"), Some(Preload::Auto));
/// assert_eq!(Preload::from_attribute("eager"), None);
/// ```
#[macro_export]
macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// The attribute text of this variant.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl $crate::AttributeValue for $name {
            fn to_attribute(&self) -> ::std::string::String {
                ::std::string::String::from(self.as_str())
            }

            fn from_attribute(raw: &str) -> ::std::option::Option<Self> {
                match raw {
                    $($value => ::std::option::Option::Some(Self::$variant),)+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
