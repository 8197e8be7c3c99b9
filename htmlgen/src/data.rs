//! Views over an element's `data-*` attributes.
//!
//! Keys are given and reported without the `data-` prefix. The views store
//! nothing themselves, they read and write the element's attribute map.

use crate::element::{ElementBase, HtmlElement};
use crate::error::Error;
use crate::tracing_macros::debug;

/// Prefix shared by all data attributes.
pub const DATA_PREFIX: &str = "data-";

fn data_name(key: &str) -> String {
    format!("{DATA_PREFIX}{key}")
}

fn data_keys(base: &ElementBase) -> impl Iterator<Item = &str> {
    base.attribute_names()
        .filter_map(|name| name.strip_prefix(DATA_PREFIX))
}

fn data_get<'a>(base: &'a ElementBase, key: &str) -> Result<&'a str, Error> {
    base.attribute(&data_name(key)).ok_or_else(|| {
        debug!(key, "data key not found");
        Error::KeyNotFound {
            key: key.to_owned(),
        }
    })
}

/// Read-only `data-*` view, see [`HtmlElement::data`].
#[derive(Debug, Clone, Copy)]
pub struct Data<'a> {
    base: &'a ElementBase,
}

impl<'a> Data<'a> {
    pub(crate) fn new(base: &'a ElementBase) -> Self {
        Self { base }
    }

    /// The value of `data-<key>`.
    pub fn get(&self, key: &str) -> Result<&'a str, Error> {
        data_get(self.base, key)
    }

    /// Whether `data-<key>` is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.base.has_attribute(&data_name(key))
    }

    /// Keys without the prefix, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        data_keys(self.base)
    }

    /// `(key, value)` pairs, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        let base = self.base;
        data_keys(base).filter_map(move |key| Some((key, base.attribute(&data_name(key))?)))
    }

    /// Number of data attributes.
    pub fn len(&self) -> usize {
        data_keys(self.base).count()
    }

    /// Whether there are no data attributes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutable `data-*` view, see [`HtmlElement::data_mut`].
#[derive(Debug)]
pub struct DataMut<'a> {
    base: &'a mut ElementBase,
}

impl<'a> DataMut<'a> {
    pub(crate) fn new(base: &'a mut ElementBase) -> Self {
        Self { base }
    }

    /// The value of `data-<key>`.
    pub fn get(&self, key: &str) -> Result<&str, Error> {
        data_get(self.base, key)
    }

    /// Whether `data-<key>` is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.base.has_attribute(&data_name(key))
    }

    /// Sets `data-<key>`.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.base.set_attribute(data_name(key), value);
    }

    /// Removes `data-<key>`, returning its value.
    pub fn remove(&mut self, key: &str) -> Result<String, Error> {
        self.base.remove_attribute(&data_name(key)).ok_or_else(|| {
            debug!(key, "data key not found");
            Error::KeyNotFound {
                key: key.to_owned(),
            }
        })
    }

    /// Removes every data attribute, leaving other attributes alone.
    pub fn clear(&mut self) {
        let names: Vec<String> = self
            .base
            .attribute_names()
            .filter(|name| name.starts_with(DATA_PREFIX))
            .map(str::to_owned)
            .collect();
        for name in names {
            self.base.remove_attribute(&name);
        }
    }

    /// Keys without the prefix, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        data_keys(self.base)
    }

    /// Number of data attributes.
    pub fn len(&self) -> usize {
        data_keys(self.base).count()
    }

    /// Whether there are no data attributes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
