use crate::{BoxCursor, Cursor, IntoSource, Sequence, Step};

/// Pairs up elements of two sources position by position.
///
/// Created via [`zip`].
pub struct Zip<'a, T, U> {
    a: BoxCursor<'a, T>,
    b: BoxCursor<'a, U>,
}

/// Create a sequence of `(a, b)` pairs that ends when either source ends.
///
/// `a` is advanced first; once it is exhausted `b` is not pulled again.
///
/// ```rust
/// use lazyseq::{range, zip};
///
/// let pairs = zip("boom", range(f64::INFINITY));
/// assert_eq!(pairs.collect()[3], ('m', 3.0));
/// ```
pub fn zip<'a, T, U, A, B>(a: A, b: B) -> Sequence<'a, (T, U)>
where
    A: IntoSource<'a, T>,
    B: IntoSource<'a, U>,
    T: 'a,
    U: 'a,
{
    let a = Sequence::new(a);
    let b = Sequence::new(b);
    Sequence::from_factory(move || Zip {
        a: a.iterate(),
        b: b.iterate(),
    })
}

impl<T, U> Cursor for Zip<'_, T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Step<(T, U)> {
        let Step::Yielded(left) = self.a.next() else {
            return Step::EXHAUSTED;
        };
        self.b.next().map_yielded(|right| (left, right))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::from_iter;

    #[test]
    fn test_zip_ends_with_shorter_source() {
        let seq = zip(vec![1, 2, 3], "ab");
        assert_eq!(seq.collect(), vec![(1, 'a'), (2, 'b')]);

        let seq = zip("ab", vec![1, 2, 3]);
        assert_eq!(seq.collect(), vec![('a', 1), ('b', 2)]);
    }

    #[test]
    fn test_zip_does_not_pull_second_after_first_ends() {
        let pulls = Cell::new(0);
        let counted = from_iter((0..10).inspect(|_| pulls.set(pulls.get() + 1)));
        let seq = zip(vec!['x', 'y'], counted);
        assert_eq!(seq.collect(), vec![('x', 0), ('y', 1)]);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_zip_with_empty_source() {
        assert!(zip(Vec::<u8>::new(), "abc").collect().is_empty());
        assert!(zip("abc", Vec::<u8>::new()).collect().is_empty());
    }
}
