//! Separator-joined sequences.

use std::iter;

use crate::children::{ChildGenerator, HtmlChildGenerator, escape_item};
use crate::generator::{Generator, Item, Items};

fn interleave(glue: Item, pieces: Vec<Item>) -> Items {
    let mut first = true;
    Box::new(pieces.into_iter().flat_map(move |piece| {
        let separator = if first {
            first = false;
            None
        } else {
            Some(glue.clone())
        };
        separator.into_iter().chain(iter::once(piece))
    }))
}

/// Yields its pieces with `glue` between each adjacent pair.
///
/// There is no leading or trailing separator. Zero pieces yield nothing.
///
/// ```
/// use htmlgen::{GeneratorExt, JoinGenerator};
///
/// let join = JoinGenerator::new(", ", ["Hello", "World"]);
/// assert_eq!(join.render(), "Hello, World");
/// ```
#[derive(Debug, Clone)]
pub struct JoinGenerator {
    glue: Item,
    pieces: ChildGenerator,
}

impl JoinGenerator {
    /// Creates a join of `pieces` separated by `glue`.
    pub fn new<I>(glue: impl Into<Item>, pieces: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut generator = Self {
            glue: glue.into(),
            pieces: ChildGenerator::new(),
        };
        generator.pieces.extend(pieces);
        generator
    }

    /// Appends one piece.
    pub fn append(&mut self, piece: impl Into<Item>) {
        self.pieces.append(piece);
    }

    /// Appends several pieces.
    pub fn extend<I>(&mut self, pieces: I)
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.pieces.extend(pieces);
    }

    /// Number of pieces, not counting separators.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether there are no pieces.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl Generator for JoinGenerator {
    fn generate(&self) -> Items {
        interleave(self.glue.clone(), self.pieces.children())
    }
}

/// A [`JoinGenerator`] that escapes the glue and text pieces.
#[derive(Debug, Clone)]
pub struct HtmlJoinGenerator {
    glue: Item,
    pieces: HtmlChildGenerator,
}

impl HtmlJoinGenerator {
    /// Creates a join of `pieces` separated by `glue`, escaping text.
    pub fn new<I>(glue: impl Into<Item>, pieces: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut generator = Self {
            glue: escape_item(glue.into()),
            pieces: HtmlChildGenerator::new(),
        };
        generator.pieces.extend(pieces);
        generator
    }

    /// Appends one piece, escaping text.
    pub fn append(&mut self, piece: impl Into<Item>) {
        self.pieces.append(piece);
    }

    /// Appends one piece without escaping.
    pub fn append_raw(&mut self, piece: impl Into<Item>) {
        self.pieces.append_raw(piece);
    }

    /// Appends several pieces, escaping text.
    pub fn extend<I>(&mut self, pieces: I)
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.pieces.extend(pieces);
    }

    /// Appends several pieces without escaping.
    pub fn extend_raw<I>(&mut self, pieces: I)
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.pieces.extend_raw(pieces);
    }

    /// Number of pieces, not counting separators.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether there are no pieces.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl Generator for HtmlJoinGenerator {
    fn generate(&self) -> Items {
        interleave(self.glue.clone(), self.pieces.children())
    }
}
