//! The lazy sequence value type.
//!
//! A [`Sequence`] wraps a cursor factory. Building one, or wrapping it in
//! operators, never reads an element; elements are produced only when a cursor
//! obtained from [`Sequence::iterate`] is advanced, typically by a terminal
//! consumer such as [`Sequence::collect`].
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens = range(10_u32).filter(|v, _| v % 2 == 0).map(|v, _| v * v);
//! assert_eq!(evens.collect(), vec![0, 4, 16, 36, 64]);
//! // a sequence can be traversed again
//! assert_eq!(evens.take(2).join(","), "0,4");
//! ```

use std::{fmt, rc::Rc};

use either::Either;
use log::trace;

use crate::{
    BoxCursor, Cursor, IntoSource, Source, compose, consume,
    cursor::{empty, iter_cursor},
    iter::CursorIter,
    source::CursorFactory,
};

/// A lazy, re-iterable sequence of `T`.
///
/// Cloning is cheap: clones share the same cursor factory.
pub struct Sequence<'a, T> {
    factory: CursorFactory<'a, T>,
}

impl<T> Clone for Sequence<'_, T> {
    fn clone(&self) -> Self {
        Sequence {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Build a sequence from any recognized source.
    ///
    /// A sequence passed in is returned as-is.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoSource<'a, T>,
    {
        source.into_sequence()
    }

    pub(crate) fn from_source(source: Source<'a, T>) -> Self {
        trace!("normalized {} source", source.shape());
        let factory = source.into_factory();
        Sequence {
            factory: Rc::new(move || factory().fuse().boxed()),
        }
    }

    /// Build a sequence directly from a cursor factory.
    ///
    /// `factory` is called once per traversal. The cursors it returns are
    /// fused, so they are not polled again once they report exhaustion.
    pub fn from_factory<F, C>(factory: F) -> Self
    where
        F: Fn() -> C + 'a,
        C: Cursor<Item = T> + 'a,
    {
        Sequence {
            factory: Rc::new(move || factory().fuse().boxed()),
        }
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Sequence::from_factory(empty)
    }

    /// Produce a fresh cursor over the elements.
    ///
    /// The cursor stays exhausted once it has reported `Complete`.
    pub fn iterate(&self) -> BoxCursor<'a, T> {
        (self.factory)()
    }

    /// Produce a fresh standard iterator over the elements.
    pub fn iter(&self) -> CursorIter<BoxCursor<'a, T>> {
        self.iterate().into_iterator()
    }

    /// See [`map`](crate::map).
    pub fn map<U, F>(self, f: F) -> Sequence<'a, U>
    where
        F: Fn(T, usize) -> U + 'a,
        U: 'a,
    {
        compose::map(self, f)
    }

    /// See [`flat_map`](crate::flat_map).
    pub fn flat_map<U, R, F>(self, f: F) -> Sequence<'a, U>
    where
        F: Fn(T, usize) -> R + 'a,
        R: IntoSource<'a, U>,
        U: 'a,
    {
        compose::flat_map(self, f)
    }

    /// See [`filter`](crate::filter).
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'a,
    {
        compose::filter(self, predicate)
    }

    /// See [`take`](crate::take).
    pub fn take(self, count: usize) -> Self {
        compose::take(self, count)
    }

    /// See [`take_while`](crate::take_while).
    pub fn take_while<P>(self, predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'a,
    {
        compose::take_while(self, predicate)
    }

    /// See [`drop`](crate::drop).
    pub fn drop(self, count: usize) -> Self {
        compose::drop(self, count)
    }

    /// See [`drop_while`](crate::drop_while).
    pub fn drop_while<P>(self, predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'a,
    {
        compose::drop_while(self, predicate)
    }

    /// See [`zip`](crate::zip).
    pub fn zip<U, S>(self, other: S) -> Sequence<'a, (T, U)>
    where
        S: IntoSource<'a, U>,
        U: 'a,
    {
        compose::zip(self, other)
    }

    /// See [`append`](crate::append).
    pub fn append<S>(self, other: S) -> Self
    where
        S: IntoSource<'a, T>,
    {
        compose::append(self, other)
    }

    /// See [`append_either`](crate::append_either).
    pub fn append_either<U, S>(self, other: S) -> Sequence<'a, Either<T, U>>
    where
        S: IntoSource<'a, U>,
        U: 'a,
    {
        compose::append_either(self, other)
    }

    /// See [`repeat`](crate::repeat).
    pub fn repeat(self, times: Option<usize>) -> Self {
        compose::repeat(self, times)
    }

    /// See [`cycle`](crate::cycle).
    pub fn cycle(self) -> Self {
        compose::cycle(self)
    }

    /// See [`collect`](crate::collect).
    pub fn collect(&self) -> Vec<T> {
        consume::collect(self)
    }

    /// See [`join`](crate::join).
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        consume::join(self, separator)
    }

    /// See [`concat`](crate::concat).
    pub fn concat(&self) -> String
    where
        T: fmt::Display,
    {
        consume::concat(self)
    }

    /// See [`for_each`](crate::for_each).
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(T, usize),
    {
        consume::for_each(self, f)
    }

    /// See [`try_for_each`](crate::try_for_each).
    pub fn try_for_each<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnMut(T, usize) -> Result<(), E>,
    {
        consume::try_for_each(self, f)
    }

    /// See [`reduce`](crate::reduce).
    pub fn reduce<F>(&self, f: F) -> Option<T>
    where
        F: FnMut(T, T, usize) -> T,
    {
        consume::reduce(self, f)
    }
}

impl<'a, T: 'a, E: 'a> Sequence<'a, Result<T, E>> {
    /// See [`try_collect`](crate::try_collect).
    pub fn try_collect(&self) -> Result<Vec<T>, E> {
        consume::try_collect(self)
    }
}

impl<'a, T: 'a> Default for Sequence<'a, T> {
    fn default() -> Self {
        Sequence::empty()
    }
}

impl<'a, T: 'a> From<Source<'a, T>> for Sequence<'a, T> {
    fn from(source: Source<'a, T>) -> Self {
        Sequence::new(source)
    }
}

impl<'a, T: Clone + 'a> From<Vec<T>> for Sequence<'a, T> {
    fn from(values: Vec<T>) -> Self {
        Sequence::new(values)
    }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Sequence<'a, T> {
    /// Collects eagerly into an indexed source.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T: 'a> IntoIterator for Sequence<'a, T> {
    type Item = T;
    type IntoIter = CursorIter<BoxCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: 'a> IntoIterator for &Sequence<'a, T> {
    type Item = T;
    type IntoIter = CursorIter<BoxCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build a sequence over a cloneable iterator, traversing a fresh clone each time.
pub fn from_iter<'a, I>(iter: I) -> Sequence<'a, I::Item>
where
    I: Iterator + Clone + 'a,
    I::Item: 'a,
{
    Sequence::from_factory(move || iter_cursor(iter.clone()))
}
