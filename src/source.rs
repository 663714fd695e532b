//! Source normalization.
//!
//! Every [`Sequence`] is built from a [`Source`], a closed classification of the
//! inputs the crate accepts:
//!
//! - [`Source::Repeatable`]: can produce a fresh cursor on demand, safe to re-traverse.
//! - [`Source::Indexed`]: a fixed length plus per-index reads. Normalized into a
//!   cursor that walks `0..len` and reads each element when it is reached.
//! - [`Source::OneShot`]: a cursor factory stored as-is. Nothing guarantees that
//!   two cursors from it are independent; see [`Source::once`] for a source that
//!   is exhausted by its first traversal.
//!
//! The [`IntoSource`] trait classifies ordinary Rust values statically. Inputs
//! whose shape is only known at runtime go through fallible constructors such as
//! [`Source::array_like`], which report [`InvalidSourceError`].

use std::{
    cell::RefCell,
    fmt,
    ops::{Range, RangeInclusive},
    rc::Rc,
};

use crate::{
    BoxCursor, Cursor, InvalidSourceError, Sequence, Step,
    cursor::iter_cursor,
};

/// Shared, re-invocable cursor factory.
pub type CursorFactory<'a, T> = Rc<dyn Fn() -> BoxCursor<'a, T> + 'a>;

/// Inputs that can hand out a fresh, independent cursor any number of times.
pub trait Repeatable<'a, T> {
    fn cursor(&self) -> BoxCursor<'a, T>;
}

/// Fixed-length inputs with random access by position.
pub trait Indexed<T> {
    fn len(&self) -> usize;

    /// Read the element at `index`. Only called with `index < self.len()`.
    fn at(&self, index: usize) -> T;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A classified sequence source.
pub enum Source<'a, T> {
    Repeatable(Rc<dyn Repeatable<'a, T> + 'a>),
    Indexed(Rc<dyn Indexed<T> + 'a>),
    OneShot(CursorFactory<'a, T>),
}

/// Which of the three source shapes a [`Source`] has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Repeatable,
    Indexed,
    OneShot,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Repeatable => write!(f, "repeatable"),
            Shape::Indexed => write!(f, "indexed"),
            Shape::OneShot => write!(f, "one-shot"),
        }
    }
}

impl<'a, T: 'a> Source<'a, T> {
    pub fn shape(&self) -> Shape {
        match self {
            Source::Repeatable(_) => Shape::Repeatable,
            Source::Indexed(_) => Shape::Indexed,
            Source::OneShot(_) => Shape::OneShot,
        }
    }

    /// Wrap a repeatable input.
    pub fn repeatable<R>(repeatable: R) -> Self
    where
        R: Repeatable<'a, T> + 'a,
    {
        Source::Repeatable(Rc::new(repeatable))
    }

    /// Wrap an indexed input.
    pub fn indexed<I>(indexed: I) -> Self
    where
        I: Indexed<T> + 'a,
    {
        Source::Indexed(Rc::new(indexed))
    }

    /// Treat a cloneable iterable as repeatable: every traversal iterates a fresh clone.
    pub fn iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'a,
        I::IntoIter: 'a,
    {
        Source::repeatable(Iterable(iterable))
    }

    /// Store a cursor factory as-is.
    ///
    /// Each traversal calls `f` once. If `f` returns independent iterators the
    /// resulting sequence is re-iterable; if it hands out shared state, so does
    /// the sequence.
    pub fn from_fn<F, I>(f: F) -> Self
    where
        F: Fn() -> I + 'a,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Source::OneShot(Rc::new(move || iter_cursor(f()).boxed()))
    }

    /// A single, already-created iterator.
    ///
    /// Every cursor pulls from the same underlying iterator, so the first full
    /// traversal exhausts the source and later traversals see only what is left.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let seq = Sequence::new(Source::once(vec![1, 2, 3]));
    /// assert_eq!(seq.collect(), vec![1, 2, 3]);
    /// assert_eq!(seq.collect(), Vec::<i32>::new());
    /// ```
    pub fn once<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let shared = Rc::new(RefCell::new(iter.into_iter()));
        Source::OneShot(Rc::new(move || Shared(Rc::clone(&shared)).boxed()))
    }

    /// An indexed source described by a loosely typed length and a reader.
    ///
    /// The length must be a non-negative integer; `read` is called lazily with
    /// each index in `0..length` as traversal reaches it.
    pub fn array_like<F>(length: i64, read: F) -> Result<Self, InvalidSourceError>
    where
        F: Fn(usize) -> T + 'a,
    {
        let length = usize::try_from(length)
            .map_err(|_| InvalidSourceError::InvalidLength(length.to_string()))?;
        Ok(Source::indexed(ArrayLike { length, read }))
    }

    /// Resolve the shape into a uniform cursor factory.
    pub fn into_factory(self) -> CursorFactory<'a, T> {
        match self {
            Source::Repeatable(repeatable) => Rc::new(move || repeatable.cursor()),
            Source::Indexed(indexed) => Rc::new(move || {
                IndexCursor {
                    source: Rc::clone(&indexed),
                    index: 0,
                }
                .boxed()
            }),
            Source::OneShot(factory) => factory,
        }
    }
}

/// Conversion into a [`Source`], classifying the input's shape.
pub trait IntoSource<'a, T> {
    fn into_source(self) -> Source<'a, T>;

    /// Normalize straight into a [`Sequence`].
    ///
    /// Sequences return themselves, so chained operators share one factory
    /// instead of nesting a new one per call.
    fn into_sequence(self) -> Sequence<'a, T>
    where
        Self: Sized,
        T: 'a,
    {
        Sequence::from_source(self.into_source())
    }
}

impl<'a, T> IntoSource<'a, T> for Source<'a, T> {
    fn into_source(self) -> Source<'a, T> {
        self
    }
}

impl<'a, T: 'a> IntoSource<'a, T> for Sequence<'a, T> {
    fn into_source(self) -> Source<'a, T> {
        Source::repeatable(self)
    }

    fn into_sequence(self) -> Sequence<'a, T> {
        self
    }
}

impl<'a, T: 'a> IntoSource<'a, T> for &'_ Sequence<'a, T> {
    fn into_source(self) -> Source<'a, T> {
        Source::repeatable(self.clone())
    }

    fn into_sequence(self) -> Sequence<'a, T> {
        self.clone()
    }
}

impl<'a, T: Clone + 'a> IntoSource<'a, T> for Vec<T> {
    fn into_source(self) -> Source<'a, T> {
        Source::indexed(self)
    }
}

impl<'a, T: Clone + 'a, const N: usize> IntoSource<'a, T> for [T; N] {
    fn into_source(self) -> Source<'a, T> {
        Source::indexed(self)
    }
}

impl<'a, T: Clone + 'a> IntoSource<'a, T> for &'a [T] {
    fn into_source(self) -> Source<'a, T> {
        Source::indexed(self)
    }
}

impl<'a, T: Clone + 'a> IntoSource<'a, T> for &'a Vec<T> {
    fn into_source(self) -> Source<'a, T> {
        Source::indexed(self.as_slice())
    }
}

impl<'a> IntoSource<'a, char> for &'a str {
    fn into_source(self) -> Source<'a, char> {
        Source::iterable(self.chars())
    }
}

impl<'a> IntoSource<'a, char> for String {
    fn into_source(self) -> Source<'a, char> {
        Source::repeatable(Text(Rc::from(self)))
    }
}

impl<'a, T: 'a> IntoSource<'a, T> for Range<T>
where
    Range<T>: Iterator<Item = T> + Clone,
{
    fn into_source(self) -> Source<'a, T> {
        Source::iterable(self)
    }
}

impl<'a, T: 'a> IntoSource<'a, T> for RangeInclusive<T>
where
    RangeInclusive<T>: Iterator<Item = T> + Clone,
{
    fn into_source(self) -> Source<'a, T> {
        Source::iterable(self)
    }
}

impl<'a, T: 'a, I> IntoSource<'a, T> for Iterable<I>
where
    I: IntoIterator<Item = T> + Clone + 'a,
    I::IntoIter: 'a,
{
    fn into_source(self) -> Source<'a, T> {
        Source::repeatable(self)
    }
}

/// Marks a cloneable iterable as a repeatable source.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let letters = Iterable("xy".chars());
/// assert_eq!(Sequence::new(letters).repeat(Some(2)).collect(), vec!['x', 'y', 'x', 'y']);
/// ```
#[derive(Debug, Clone)]
pub struct Iterable<I>(pub I);

impl<'a, I> Repeatable<'a, I::Item> for Iterable<I>
where
    I: IntoIterator + Clone,
    I::IntoIter: 'a,
{
    fn cursor(&self) -> BoxCursor<'a, I::Item> {
        iter_cursor(self.0.clone()).boxed()
    }
}

impl<'a, T: 'a> Repeatable<'a, T> for Sequence<'a, T> {
    fn cursor(&self) -> BoxCursor<'a, T> {
        self.iterate()
    }
}

impl<T: Clone> Indexed<T> for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone, const N: usize> Indexed<T> for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> Indexed<T> for &'_ [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> T {
        self[index].clone()
    }
}

struct ArrayLike<F> {
    length: usize,
    read: F,
}

impl<T, F> Indexed<T> for ArrayLike<F>
where
    F: Fn(usize) -> T,
{
    fn len(&self) -> usize {
        self.length
    }

    fn at(&self, index: usize) -> T {
        (self.read)(index)
    }
}

/// Walks an indexed source from position 0, reading each element on demand.
struct IndexCursor<'a, T> {
    source: Rc<dyn Indexed<T> + 'a>,
    index: usize,
}

impl<T> Cursor for IndexCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        if self.index >= self.source.len() {
            return Step::EXHAUSTED;
        }
        let value = self.source.at(self.index);
        self.index += 1;
        Step::Yielded(value)
    }
}

/// Owned text, traversed by `char`.
struct Text(Rc<str>);

struct TextCursor {
    text: Rc<str>,
    offset: usize,
}

impl<'a> Repeatable<'a, char> for Text {
    fn cursor(&self) -> BoxCursor<'a, char> {
        TextCursor {
            text: Rc::clone(&self.0),
            offset: 0,
        }
        .boxed()
    }
}

impl Cursor for TextCursor {
    type Item = char;

    fn next(&mut self) -> Step<char> {
        match self.text[self.offset..].chars().next() {
            Some(c) => {
                self.offset += c.len_utf8();
                Step::Yielded(c)
            }
            None => Step::EXHAUSTED,
        }
    }
}

/// Cursor pulling from an iterator shared by every traversal.
struct Shared<I>(Rc<RefCell<I>>);

impl<I: Iterator> Cursor for Shared<I> {
    type Item = I::Item;

    fn next(&mut self) -> Step<I::Item> {
        self.0.borrow_mut().next().into()
    }
}
