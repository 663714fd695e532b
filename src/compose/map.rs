use std::rc::Rc;

use crate::{BoxCursor, Cursor, IntoSource, Sequence, Step};

/// Transforms each element together with its position.
///
/// Created via [`map`].
pub struct Map<'a, T, F> {
    source: BoxCursor<'a, T>,
    f: Rc<F>,
    index: usize,
}

/// Create a sequence yielding `f(value, index)` for each source element.
///
/// ```rust
/// use lazyseq::map;
///
/// let shifted = map(vec![1, 2, 3], |value, index| value + index);
/// assert_eq!(shifted.collect(), vec![1, 3, 5]);
/// ```
pub fn map<'a, T, U, S, F>(source: S, f: F) -> Sequence<'a, U>
where
    S: IntoSource<'a, T>,
    F: Fn(T, usize) -> U + 'a,
    T: 'a,
    U: 'a,
{
    let source = Sequence::new(source);
    let f = Rc::new(f);
    Sequence::from_factory(move || Map {
        source: source.iterate(),
        f: Rc::clone(&f),
        index: 0,
    })
}

impl<T, U, F> Cursor for Map<'_, T, F>
where
    F: Fn(T, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Step<U> {
        let index = self.index;
        self.source.next().map_yielded(|value| {
            self.index += 1;
            (self.f)(value, index)
        })
    }
}

/// Maps each element to a sub-source and yields all of its elements in turn.
///
/// Created via [`flat_map`].
pub struct FlatMap<'a, T, U, F> {
    source: BoxCursor<'a, T>,
    f: Rc<F>,
    index: usize,
    inner: Option<BoxCursor<'a, U>>,
}

/// Create a sequence that normalizes `f(value, index)` into a source for each
/// element and yields every element of it before advancing.
///
/// ```rust
/// use lazyseq::flat_map;
///
/// let pairs = flat_map(vec![1, 2, 3], |value, index| vec![value, index]);
/// assert_eq!(pairs.collect(), vec![1, 0, 2, 1, 3, 2]);
/// ```
pub fn flat_map<'a, T, U, R, S, F>(source: S, f: F) -> Sequence<'a, U>
where
    S: IntoSource<'a, T>,
    F: Fn(T, usize) -> R + 'a,
    R: IntoSource<'a, U>,
    T: 'a,
    U: 'a,
{
    let source = Sequence::new(source);
    let f = Rc::new(f);
    Sequence::from_factory(move || FlatMap {
        source: source.iterate(),
        f: Rc::clone(&f),
        index: 0,
        inner: None,
    })
}

impl<'a, T, U, R, F> Cursor for FlatMap<'a, T, U, F>
where
    F: Fn(T, usize) -> R,
    R: IntoSource<'a, U>,
    T: 'a,
    U: 'a,
{
    type Item = U;

    fn next(&mut self) -> Step<U> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Step::Yielded(value) = inner.next() {
                    return Step::Yielded(value);
                }
                self.inner = None;
            }
            match self.source.next() {
                Step::Yielded(value) => {
                    let sub = (self.f)(value, self.index);
                    self.index += 1;
                    self.inner = Some(sub.into_sequence().iterate());
                }
                Step::Complete(()) => return Step::EXHAUSTED,
            }
        }
    }
}
