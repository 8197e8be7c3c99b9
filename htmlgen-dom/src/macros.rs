//! Plumbing shared by the element types.

use htmlgen::{Element, Generator, Shared, shared};

/// Appends `child` to `parent` and returns a handle that keeps it editable.
pub(crate) fn append_shared<T: Generator + 'static>(parent: &mut Element, child: T) -> Shared<T> {
    let child = shared(child);
    parent.append(child.clone());
    child
}

/// The children of `parent` that are shared `T` nodes, in order.
pub(crate) fn shared_children<T: 'static>(parent: &Element) -> Vec<Shared<T>> {
    parent
        .children()
        .iter()
        .filter_map(|child| child.as_shared::<T>())
        .collect()
}

/// `Into<Item>` and `Display` for a generator type.
///
/// The node is stored behind a [`Shared`] handle, so a parent can find it
/// again with [`htmlgen::Item::as_shared`].
macro_rules! impl_node {
    ($name:ident) => {
        impl From<$name> for htmlgen::Item {
            fn from(node: $name) -> Self {
                htmlgen::Item::from(htmlgen::shared(node))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                htmlgen::GeneratorExt::chunks(self).try_for_each(|chunk| f.write_str(chunk.as_str()))
            }
        }
    };
}

/// Element plumbing for a struct with an `element: Element` field.
///
/// Children are reached through `Deref<Target = Element>`. By default the
/// type renders like its inner element. With `generate = method`, the
/// children come from `self.method()` instead.
macro_rules! element_type {
    ($name:ident) => {
        element_type!(@access $name);

        impl htmlgen::Generator for $name {
            fn generate(&self) -> htmlgen::Items {
                htmlgen::Generator::generate(&self.element)
            }
        }
    };
    ($name:ident, generate = $method:ident) => {
        element_type!(@access $name);

        impl htmlgen::Generator for $name {
            fn generate(&self) -> htmlgen::Items {
                htmlgen::HtmlElement::base(self).generate_with(self.$method())
            }
        }
    };
    (@access $name:ident) => {
        impl ::std::ops::Deref for $name {
            type Target = htmlgen::Element;

            fn deref(&self) -> &htmlgen::Element {
                &self.element
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut htmlgen::Element {
                &mut self.element
            }
        }

        impl htmlgen::HtmlElement for $name {
            fn base(&self) -> &htmlgen::ElementBase {
                self.element.base()
            }

            fn base_mut(&mut self) -> &mut htmlgen::ElementBase {
                self.element.base_mut()
            }
        }

        impl_node!($name);
    };
}

/// Element plumbing for a struct with an `element: VoidElement` field.
macro_rules! void_element_type {
    ($name:ident) => {
        impl htmlgen::HtmlElement for $name {
            fn base(&self) -> &htmlgen::ElementBase {
                self.element.base()
            }

            fn base_mut(&mut self) -> &mut htmlgen::ElementBase {
                self.element.base_mut()
            }
        }

        impl htmlgen::Generator for $name {
            fn generate(&self) -> htmlgen::Items {
                htmlgen::Generator::generate(&self.element)
            }
        }

        impl_node!($name);
    };
}

/// A plain container element built from its initial children.
macro_rules! container {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            element: htmlgen::Element,
        }

        impl $name {
            #[doc = concat!("Creates an empty `<", $tag, ">` element.")]
            pub fn new() -> Self {
                Self {
                    element: htmlgen::Element::new($tag),
                }
            }

            /// Creates the element with initial children, escaping text.
            pub fn with_content<I>(content: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<htmlgen::Item>,
            {
                let mut element = Self::new();
                element.extend(content);
                element
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        element_type!($name);
    };
}

/// A void element without attributes of its own.
macro_rules! void_container {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            element: htmlgen::VoidElement,
        }

        impl $name {
            #[doc = concat!("Creates a `<", $tag, "/>` element.")]
            pub fn new() -> Self {
                Self {
                    element: htmlgen::VoidElement::new($tag),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        void_element_type!($name);
    };
}
