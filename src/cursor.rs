//! The cursor protocol shared by every sequence operator.
//!
//! A [`Cursor`] is a stateful, single-use traversal handle. Each call to
//! [`Cursor::next`] either yields the next element or reports exhaustion. Cursors
//! are produced by [`Sequence::iterate`](crate::Sequence::iterate) and are never
//! reused once exhausted.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut cursor = Sequence::new(vec![1, 2]).iterate();
//! assert_eq!(cursor.next(), Step::Yielded(1));
//! assert_eq!(cursor.next(), Step::Yielded(2));
//! assert!(cursor.next().is_complete());
//! ```

use std::marker::PhantomData;

use either::Either;

use crate::{iter::CursorIter, step::Step};

/// A type-erased cursor, the unit every cursor-factory produces.
pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// Single-use traversal handle over a stream of elements.
pub trait Cursor {
    /// Type of the elements produced
    type Item;

    /// Advance, returning `Yielded` with the next element or `Complete` when exhausted.
    fn next(&mut self) -> Step<Self::Item>;

    /// Erase the concrete cursor type.
    fn boxed<'a>(self) -> BoxCursor<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Stop polling this cursor once it reports exhaustion.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse { cursor: Some(self) }
    }

    /// Adapt this cursor into a standard [`Iterator`].
    fn into_iterator(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Step<Self::Item> {
        (**self).next()
    }
}

impl<C> Cursor for &'_ mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Step<Self::Item> {
        (**self).next()
    }
}

impl<L, R> Cursor for Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Step<Self::Item> {
        match self {
            Either::Left(l) => l.next(),
            Either::Right(r) => r.next(),
        }
    }
}

/// Cursor over a standard iterator.
///
/// Created via [`iter_cursor`].
#[derive(Debug, Clone)]
pub struct IterCursor<I>(I);

/// Wrap anything iterable as a cursor.
pub fn iter_cursor<I: IntoIterator>(iter: I) -> IterCursor<I::IntoIter> {
    IterCursor(iter.into_iter())
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Step<Self::Item> {
        self.0.next().into()
    }
}

/// Drops the wrapped cursor at its first `Complete` and stays exhausted.
///
/// Created via [`Cursor::fuse`]. Every cursor handed out by
/// [`Sequence::iterate`](crate::Sequence::iterate) is fused this way.
pub struct Fuse<C> {
    cursor: Option<C>,
}

impl<C: Cursor> Cursor for Fuse<C> {
    type Item = C::Item;

    fn next(&mut self) -> Step<Self::Item> {
        let Some(cursor) = &mut self.cursor else {
            return Step::EXHAUSTED;
        };
        match cursor.next() {
            Step::Yielded(value) => Step::Yielded(value),
            Step::Complete(()) => {
                self.cursor = None;
                Step::EXHAUSTED
            }
        }
    }
}

/// A cursor that is exhausted from the start.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a cursor that yields nothing.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Step<T> {
        Step::EXHAUSTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_cursor_yields_then_completes() {
        let mut cursor = iter_cursor(vec!['a', 'b']);
        assert_eq!(cursor.next(), Step::Yielded('a'));
        assert_eq!(cursor.next(), Step::Yielded('b'));
        assert_eq!(cursor.next(), Step::EXHAUSTED);
    }

    #[test]
    fn test_empty_is_exhausted_immediately() {
        let mut cursor = empty::<u8>();
        assert!(cursor.next().is_complete());
    }

    #[test]
    fn test_either_forwards_to_active_side() {
        let mut left: Either<_, Empty<i32>> = Either::Left(iter_cursor(0..2));
        let mut right: Either<IterCursor<std::ops::Range<i32>>, _> = Either::Right(empty());

        assert_eq!(Cursor::next(&mut left), Step::Yielded(0));
        assert_eq!(Cursor::next(&mut left), Step::Yielded(1));
        assert!(Cursor::next(&mut left).is_complete());
        assert!(Cursor::next(&mut right).is_complete());
    }

    /// Yields on every call except the second.
    struct Blink(u8);

    impl Cursor for Blink {
        type Item = u8;

        fn next(&mut self) -> Step<u8> {
            self.0 += 1;
            if self.0 == 2 {
                Step::EXHAUSTED
            } else {
                Step::Yielded(self.0)
            }
        }
    }

    #[test]
    fn test_fuse_never_polls_after_exhaustion() {
        let mut fused = Blink(0).fuse();
        assert_eq!(fused.next(), Step::Yielded(1));
        assert_eq!(fused.next(), Step::EXHAUSTED);
        assert_eq!(fused.next(), Step::EXHAUSTED);
    }

    fn pull<C: Cursor>(mut cursor: C) -> Step<C::Item> {
        cursor.next()
    }

    #[test]
    fn test_boxed_and_borrowed_cursors_share_state() {
        let mut boxed = iter_cursor(1..=3).boxed();
        assert_eq!(pull(&mut boxed), Step::Yielded(1));
        let rest: Vec<_> = boxed.into_iterator().collect();
        assert_eq!(rest, vec![2, 3]);
    }
}
