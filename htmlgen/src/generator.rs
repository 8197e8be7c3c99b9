//! The generator contract and the lazy, stack-based flattener.
//!
//! A [`Generator`] produces a sequence of [`Item`]s. Each item is either a text
//! chunk, emitted as is, or another generator, expanded in place. [`Flatten`]
//! walks such a tree depth-first with an explicit stack of iterators, so deep
//! nesting never recurses and infinite child sequences stream without being
//! materialized.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::io;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::tracing_macros::trace;

/// Shared, immutable text chunk.
pub type Text = Rc<str>;

/// Shared handle to a generator that appears as a child.
pub type Node = Rc<dyn Generator>;

/// The sequence a generator produces on each call to [`Generator::generate`].
pub type Items = Box<dyn Iterator<Item = Item>>;

/// A handle that keeps an appended element editable.
///
/// `create_*` helpers hand these out: the same allocation sits in the parent's
/// children and in the caller's hands.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps `value` into a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Anything that can lazily produce HTML.
///
/// Implementations return a fresh iterator on every call, which makes every
/// generator re-renderable. Returned items own their data, so the iterator
/// does not borrow from `self`.
pub trait Generator {
    /// Produces this node's items, in output order.
    fn generate(&self) -> Items;

    /// The [`Shared`] handle behind this node, type-erased.
    ///
    /// Only nodes made from a [`Shared`] handle return one. Containers use it,
    /// through [`Item::as_shared`], to find their children of a known type.
    fn into_shared(self: Rc<Self>) -> Option<Rc<dyn Any>> {
        None
    }
}

impl<T: Generator + ?Sized> Generator for &T {
    fn generate(&self) -> Items {
        (**self).generate()
    }
}

impl<T: Generator + ?Sized> Generator for Box<T> {
    fn generate(&self) -> Items {
        (**self).generate()
    }
}

impl<T: Generator + ?Sized> Generator for Rc<T> {
    fn generate(&self) -> Items {
        (**self).generate()
    }
}

impl<T: Generator + 'static> Generator for RefCell<T> {
    fn generate(&self) -> Items {
        self.borrow().generate()
    }

    fn into_shared(self: Rc<Self>) -> Option<Rc<dyn Any>> {
        Some(self)
    }
}

/// One unit produced by a generator.
#[derive(Clone)]
pub enum Item {
    /// Text, emitted byte for byte.
    Text(Text),
    /// A nested generator, expanded where it appears.
    Node(Node),
}

impl Item {
    /// A text item.
    pub fn text(text: impl Into<Text>) -> Self {
        Self::Text(text.into())
    }

    /// A node item owning `generator`.
    pub fn node(generator: impl Generator + 'static) -> Self {
        Self::Node(Rc::new(generator))
    }

    /// The text, if this is a text item.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node(_) => None,
        }
    }

    /// The node, if this is a node item.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Text(_) => None,
            Self::Node(node) => Some(node),
        }
    }

    /// The [`Shared`] handle behind this item, if it is a shared `T` node.
    ///
    /// ```
    /// use htmlgen::{Item, NullGenerator, shared};
    ///
    /// let handle = shared(NullGenerator);
    /// let item = Item::from(handle.clone());
    /// assert!(std::rc::Rc::ptr_eq(&item.as_shared::<NullGenerator>().unwrap(), &handle));
    /// assert!(Item::node(NullGenerator).as_shared::<NullGenerator>().is_none());
    /// ```
    pub fn as_shared<T: 'static>(&self) -> Option<Shared<T>> {
        let node = self.as_node()?.clone();
        node.into_shared()?.downcast::<RefCell<T>>().ok()
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Node(node) => f
                .debug_tuple("Node")
                .field(&Rc::as_ptr(node).cast::<()>())
                .finish(),
        }
    }
}

/// Text compares by value, nodes by identity.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Node(a), Self::Node(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }
}

impl Eq for Item {}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}

impl From<&String> for Item {
    fn from(text: &String) -> Self {
        Self::Text(text.as_str().into())
    }
}

impl From<Text> for Item {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Item {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl<T: Generator + 'static> From<Shared<T>> for Item {
    fn from(node: Shared<T>) -> Self {
        Self::Node(node)
    }
}

/// One flattened output chunk.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Chunk(Text);

impl Chunk {
    /// The chunk's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The chunk as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Chunk {
    fn eq(&self, other: &str) -> bool {
        *self.0 == *other
    }
}

impl PartialEq<&str> for Chunk {
    fn eq(&self, other: &&str) -> bool {
        *self.0 == **other
    }
}

impl PartialEq<[u8]> for Chunk {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Chunk {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

/// Depth-first flattening of a generator tree into [`Chunk`]s.
///
/// Every node's [`Generator::generate`] runs exactly once per appearance, at
/// the moment the traversal reaches it.
pub struct Flatten {
    stack: Vec<Items>,
}

impl Flatten {
    /// Starts a traversal at `root`.
    pub fn new<G: Generator + ?Sized>(root: &G) -> Self {
        Self {
            stack: vec![root.generate()],
        }
    }

    /// Number of generators currently being expanded.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Iterator for Flatten {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Item::Text(text)) => return Some(Chunk(text)),
                Some(Item::Node(node)) => {
                    trace!(depth = self.stack.len(), "expanding node");
                    let items = node.generate();
                    self.stack.push(items);
                }
                None => {
                    self.stack.pop();
                    trace!(depth = self.stack.len(), "node exhausted");
                }
            }
        }
    }
}

impl FusedIterator for Flatten {}

impl fmt::Debug for Flatten {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten")
            .field("depth", &self.stack.len())
            .finish()
    }
}

/// Rendering helpers available on every [`Generator`].
pub trait GeneratorExt: Generator {
    /// Lazily flattens this generator into output chunks.
    fn chunks(&self) -> Flatten {
        Flatten::new(self)
    }

    /// Concatenates all chunks into a `String`.
    ///
    /// Never terminates for infinite generators.
    fn render(&self) -> String {
        self.chunks().fold(String::new(), |mut out, chunk| {
            out.push_str(chunk.as_str());
            out
        })
    }

    /// Streams all chunks into `writer`.
    fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for chunk in self.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }
}

impl<G: Generator + ?Sized> GeneratorExt for G {}

/// Generator that produces nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerator;

impl Generator for NullGenerator {
    fn generate(&self) -> Items {
        Box::new(std::iter::empty())
    }
}

/// Yields the items of a cloneable iterable, verbatim.
///
/// The iterable is cloned on each render, so rendering restarts from the
/// beginning. Infinite iterables are fine as long as the consumer stops.
///
/// ```
/// use htmlgen::{GeneratorExt, IteratorGenerator};
///
/// let dots = IteratorGenerator::new(std::iter::repeat("."));
/// let prefix: String = dots.chunks().take(3).map(|c| c.to_string()).collect();
/// assert_eq!(prefix, "...");
/// ```
#[derive(Debug, Clone)]
pub struct IteratorGenerator<I> {
    items: I,
}

impl<I> IteratorGenerator<I> {
    /// Wraps `items`.
    pub fn new(items: I) -> Self {
        Self { items }
    }
}

impl<I> Generator for IteratorGenerator<I>
where
    I: IntoIterator + Clone,
    I::IntoIter: 'static,
    I::Item: Into<Item> + 'static,
{
    fn generate(&self) -> Items {
        Box::new(self.items.clone().into_iter().map(Into::into))
    }
}

/// Calls a closure for a fresh item sequence on each render.
///
/// Useful for children that must be recomputed every time, such as rows
/// pulled from a data source.
pub struct FnGenerator<F> {
    f: F,
}

impl<F> FnGenerator<F> {
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, I> Generator for FnGenerator<F>
where
    F: Fn() -> I,
    I: IntoIterator,
    I::IntoIter: 'static,
    I::Item: Into<Item> + 'static,
{
    fn generate(&self) -> Items {
        Box::new((self.f)().into_iter().map(Into::into))
    }
}

impl<F> fmt::Debug for FnGenerator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Fixed(Vec<Item>);

    impl Generator for Fixed {
        fn generate(&self) -> Items {
            Box::new(self.0.clone().into_iter())
        }
    }

    struct Counting {
        calls: Rc<Cell<usize>>,
    }

    impl Generator for Counting {
        fn generate(&self) -> Items {
            self.calls.set(self.calls.get() + 1);
            Box::new(std::iter::once(Item::from("x")))
        }
    }

    #[test]
    fn test_flatten_depth_first() {
        let inner = Item::node(Fixed(vec!["b".into(), "c".into()]));
        let outer = Fixed(vec!["a".into(), inner, "d".into()]);
        let chunks: Vec<Chunk> = outer.chunks().collect();
        assert_eq!(chunks, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_flatten_deep_nesting_without_recursion() {
        let mut node = Fixed(vec!["leaf".into()]);
        for _ in 0..1_000 {
            node = Fixed(vec![Item::node(node)]);
        }
        assert_eq!(node.render(), "leaf");
    }

    #[test]
    fn test_flatten_passes_chunks_through() {
        let raw = Fixed(vec!["<b>&amp;</b>".into()]);
        assert_eq!(raw.render(), "<b>&amp;</b>");
    }

    #[test]
    fn test_node_generated_once_per_appearance() {
        let calls = Rc::new(Cell::new(0));
        let counted: Node = Rc::new(Counting {
            calls: calls.clone(),
        });
        let tree = Fixed(vec![counted.clone().into(), counted.into()]);
        assert_eq!(tree.render(), "xx");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_flatten_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let tree = Fixed(vec![
            "first".into(),
            Item::node(Counting {
                calls: calls.clone(),
            }),
        ]);
        let mut chunks = tree.chunks();
        assert_eq!(chunks.next().unwrap(), "first");
        assert_eq!(calls.get(), 0);
        assert_eq!(chunks.next().unwrap(), "x");
        assert_eq!(calls.get(), 1);
        assert!(chunks.next().is_none());
    }

    #[test]
    fn test_render_restarts() {
        let g = IteratorGenerator::new(["a", "b"]);
        assert_eq!(g.render(), "ab");
        assert_eq!(g.render(), "ab");
    }

    #[test]
    fn test_infinite_iterator_generator() {
        let g = IteratorGenerator::new(std::iter::repeat("x"));
        let chunks: Vec<Chunk> = g.chunks().take(4).collect();
        assert_eq!(chunks, ["x", "x", "x", "x"]);
    }

    #[test]
    fn test_owned_item_generators_nest_as_nodes() {
        let words = IteratorGenerator::new(vec![String::from("a"), String::from("b")]);
        let numbers = FnGenerator::new(|| (1..=2).map(|n| n.to_string()));
        let outer = IteratorGenerator::new(vec![Item::node(words), Item::node(numbers)]);
        assert_eq!(outer.render(), "ab12");
    }

    #[test]
    fn test_as_shared_finds_typed_handles() {
        let handle = shared(Fixed(vec![Item::from("x")]));
        let item = Item::from(handle.clone());
        let found = item.as_shared::<Fixed>().unwrap();
        assert!(Rc::ptr_eq(&found, &handle));
        found.borrow_mut().0.push(Item::from("y"));
        assert_eq!(item.as_node().unwrap().render(), "xy");

        assert!(item.as_shared::<NullGenerator>().is_none());
        assert!(Item::node(NullGenerator).as_shared::<NullGenerator>().is_none());
        assert!(Item::from("text").as_shared::<NullGenerator>().is_none());
    }

    #[test]
    fn test_null_generator() {
        assert_eq!(NullGenerator.chunks().count(), 0);
    }

    #[test]
    fn test_fn_generator_recomputes() {
        let counter = Rc::new(Cell::new(0));
        let c = counter.clone();
        let g = FnGenerator::new(move || {
            c.set(c.get() + 1);
            vec![c.get().to_string()]
        });
        assert_eq!(g.render(), "1");
        assert_eq!(g.render(), "2");
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_item_equality() {
        let a: Node = Rc::new(NullGenerator);
        let b: Node = Rc::new(Fixed(Vec::new()));
        assert_eq!(Item::from("x"), Item::from(String::from("x")));
        assert_eq!(Item::from(a.clone()), Item::from(a.clone()));
        assert_ne!(Item::from(a), Item::from(b));
        assert_ne!(Item::from("x"), Item::node(NullGenerator));
    }

    #[test]
    fn test_write_to() {
        let g = IteratorGenerator::new(["<", "p", ">"]);
        let mut out = Vec::new();
        g.write_to(&mut out).unwrap();
        assert_eq!(out, b"<p>");
    }

    #[test]
    fn test_chunk_bytes() {
        let g = IteratorGenerator::new(["abc"]);
        let chunk = g.chunks().next().unwrap();
        assert_eq!(chunk.as_bytes(), b"abc");
        assert_eq!(chunk, &b"abc"[..]);
    }
}
