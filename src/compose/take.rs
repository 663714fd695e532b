use std::rc::Rc;

use crate::{BoxCursor, Cursor, IntoSource, Sequence, Step};

/// Yields at most a fixed number of elements.
///
/// Created via [`take`].
pub struct Take<'a, T> {
    source: BoxCursor<'a, T>,
    remaining: usize,
}

/// Create a sequence of the first `count` source elements, or all of them if
/// the source is shorter.
///
/// The source is never pulled past the `count`-th element, so `take` bounds
/// infinite sequences:
///
/// ```rust
/// use lazyseq::{range, take};
///
/// assert_eq!(take(range(i64::MAX), 3).collect(), vec![0, 1, 2]);
/// ```
pub fn take<'a, T, S>(source: S, count: usize) -> Sequence<'a, T>
where
    S: IntoSource<'a, T>,
    T: 'a,
{
    let source = Sequence::new(source);
    Sequence::from_factory(move || Take {
        source: source.iterate(),
        remaining: count,
    })
}

impl<T> Cursor for Take<'_, T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        if self.remaining == 0 {
            return Step::EXHAUSTED;
        }
        match self.source.next() {
            Step::Yielded(value) => {
                self.remaining -= 1;
                Step::Yielded(value)
            }
            Step::Complete(()) => {
                self.remaining = 0;
                Step::EXHAUSTED
            }
        }
    }
}

/// Yields elements until the predicate first fails.
///
/// Created via [`take_while`].
pub struct TakeWhile<'a, T, P> {
    source: BoxCursor<'a, T>,
    predicate: Rc<P>,
    index: usize,
    done: bool,
}

/// Create a sequence of the leading source elements for which
/// `predicate(value, index)` holds. The first failing element is not yielded
/// and ends the sequence.
pub fn take_while<'a, T, S, P>(source: S, predicate: P) -> Sequence<'a, T>
where
    S: IntoSource<'a, T>,
    P: Fn(&T, usize) -> bool + 'a,
    T: 'a,
{
    let source = Sequence::new(source);
    let predicate = Rc::new(predicate);
    Sequence::from_factory(move || TakeWhile {
        source: source.iterate(),
        predicate: Rc::clone(&predicate),
        index: 0,
        done: false,
    })
}

impl<T, P> Cursor for TakeWhile<'_, T, P>
where
    P: Fn(&T, usize) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Step<T> {
        if self.done {
            return Step::EXHAUSTED;
        }
        match self.source.next() {
            Step::Yielded(value) if (self.predicate)(&value, self.index) => {
                self.index += 1;
                Step::Yielded(value)
            }
            _ => {
                self.done = true;
                Step::EXHAUSTED
            }
        }
    }
}
