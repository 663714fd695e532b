use std::rc::Rc;

use crate::{BoxCursor, Cursor, IntoSource, Sequence, Step};

/// Skips a fixed number of leading elements.
///
/// Created via [`drop`].
pub struct DropFirst<'a, T> {
    source: BoxCursor<'a, T>,
    skip: usize,
}

/// Create a sequence of the source elements after the first `count`.
///
/// The skipped elements are pulled on the first advance, not when the sequence
/// is built.
///
/// ```rust
/// assert_eq!(lazyseq::drop("hello", 3).concat(), "lo");
/// ```
pub fn drop<'a, T, S>(source: S, count: usize) -> Sequence<'a, T>
where
    S: IntoSource<'a, T>,
    T: 'a,
{
    let source = Sequence::new(source);
    Sequence::from_factory(move || DropFirst {
        source: source.iterate(),
        skip: count,
    })
}

impl<T> Cursor for DropFirst<'_, T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        while self.skip > 0 {
            self.skip -= 1;
            if self.source.next().is_complete() {
                self.skip = 0;
                return Step::EXHAUSTED;
            }
        }
        self.source.next()
    }
}

/// Skips leading elements while a predicate holds.
///
/// Created via [`drop_while`].
pub struct DropWhile<'a, T, P> {
    source: BoxCursor<'a, T>,
    predicate: Rc<P>,
    index: usize,
    yielding: bool,
}

/// Create a sequence that skips source elements while `predicate(value, index)`
/// holds, then yields the first failing element and everything after it.
///
/// The predicate is not consulted again once it has failed.
pub fn drop_while<'a, T, S, P>(source: S, predicate: P) -> Sequence<'a, T>
where
    S: IntoSource<'a, T>,
    P: Fn(&T, usize) -> bool + 'a,
    T: 'a,
{
    let source = Sequence::new(source);
    let predicate = Rc::new(predicate);
    Sequence::from_factory(move || DropWhile {
        source: source.iterate(),
        predicate: Rc::clone(&predicate),
        index: 0,
        yielding: false,
    })
}

impl<T, P> Cursor for DropWhile<'_, T, P>
where
    P: Fn(&T, usize) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Step<T> {
        if self.yielding {
            return self.source.next();
        }
        while let Step::Yielded(value) = self.source.next() {
            let index = self.index;
            self.index += 1;
            if !(self.predicate)(&value, index) {
                self.yielding = true;
                return Step::Yielded(value);
            }
        }
        Step::EXHAUSTED
    }
}
