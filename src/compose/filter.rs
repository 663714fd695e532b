use std::rc::Rc;

use crate::{BoxCursor, Cursor, IntoSource, Sequence, Step};

/// Keeps the elements that satisfy a predicate.
///
/// Created via [`filter`].
pub struct Filter<'a, T, P> {
    source: BoxCursor<'a, T>,
    predicate: Rc<P>,
    index: usize,
}

/// Create a sequence of the source elements for which `predicate(value, index)`
/// holds.
///
/// `index` is the position in the source, so rejected elements still advance it.
pub fn filter<'a, T, S, P>(source: S, predicate: P) -> Sequence<'a, T>
where
    S: IntoSource<'a, T>,
    P: Fn(&T, usize) -> bool + 'a,
    T: 'a,
{
    let source = Sequence::new(source);
    let predicate = Rc::new(predicate);
    Sequence::from_factory(move || Filter {
        source: source.iterate(),
        predicate: Rc::clone(&predicate),
        index: 0,
    })
}

impl<T, P> Cursor for Filter<'_, T, P>
where
    P: Fn(&T, usize) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Step<T> {
        while let Step::Yielded(value) = self.source.next() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&value, index) {
                return Step::Yielded(value);
            }
        }
        Step::EXHAUSTED
    }
}
