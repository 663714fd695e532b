use either::Either;

use crate::{BoxCursor, Cursor, IntoSource, Sequence, Step, compose::map};

/// Yields every element of one source, then every element of another.
///
/// Created via [`append`]. The second source is only iterated once the first
/// is exhausted.
pub struct Append<'a, T> {
    state: AppendState<'a, T>,
}

enum AppendState<'a, T> {
    OnFirst(BoxCursor<'a, T>, Sequence<'a, T>),
    OnSecond(BoxCursor<'a, T>),
}

/// Create a sequence of the elements of `first` followed by those of `second`.
///
/// ```rust
/// use lazyseq::{append, range};
///
/// assert_eq!(append(range(2_u8), vec![7, 8]).collect(), vec![0, 1, 7, 8]);
/// ```
pub fn append<'a, T, A, B>(first: A, second: B) -> Sequence<'a, T>
where
    A: IntoSource<'a, T>,
    B: IntoSource<'a, T>,
    T: 'a,
{
    let first = Sequence::new(first);
    let second = Sequence::new(second);
    Sequence::from_factory(move || Append {
        state: AppendState::OnFirst(first.iterate(), second.clone()),
    })
}

/// Append two sources of different element types, tagging each element with
/// the side it came from.
///
/// ```rust
/// use either::Either;
/// use lazyseq::append_either;
///
/// let mixed = append_either(vec![1], "a");
/// assert_eq!(mixed.collect(), vec![Either::Left(1), Either::Right('a')]);
/// ```
pub fn append_either<'a, T, U, A, B>(first: A, second: B) -> Sequence<'a, Either<T, U>>
where
    A: IntoSource<'a, T>,
    B: IntoSource<'a, U>,
    T: 'a,
    U: 'a,
{
    append(
        map(first, |value, _| Either::Left(value)),
        map(second, |value, _| Either::Right(value)),
    )
}

impl<'a, T: 'a> Cursor for Append<'a, T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        match &mut self.state {
            AppendState::OnFirst(first, second) => match first.next() {
                Step::Yielded(value) => Step::Yielded(value),
                Step::Complete(()) => {
                    // the first cursor is dropped once it completes
                    let mut rest = second.iterate();
                    let step = rest.next();
                    self.state = AppendState::OnSecond(rest);
                    step
                }
            },
            AppendState::OnSecond(second) => second.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::Source;

    #[test]
    fn test_append_yields_first_then_second() {
        let seq = append("ab", String::from("cd"));
        assert_eq!(seq.concat(), "abcd");
        assert_eq!(seq.concat(), "abcd");
    }

    #[test]
    fn test_append_with_empty_sides() {
        assert_eq!(append(Vec::new(), vec![1]).collect(), vec![1]);
        assert_eq!(append(vec![1], Vec::new()).collect(), vec![1]);
        assert!(append(Vec::<u8>::new(), Vec::new()).collect().is_empty());
    }

    #[test]
    fn test_append_reaches_second_source_lazily() {
        let calls = Cell::new(0);
        let second = Source::from_fn(|| {
            calls.set(calls.get() + 1);
            vec![3, 4]
        });
        let seq = append(vec![1, 2], second);

        let mut cursor = seq.iterate();
        assert_eq!(cursor.next(), Step::Yielded(1));
        assert_eq!(cursor.next(), Step::Yielded(2));
        assert_eq!(calls.get(), 0);
        assert_eq!(cursor.next(), Step::Yielded(3));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_append_either_keeps_both_types() {
        let seq = append_either("x", vec![1.5]);
        let rendered: Vec<String> = seq
            .iter()
            .map(|side| side.either(|c| c.to_string(), |f| f.to_string()))
            .collect();
        assert_eq!(rendered, vec!["x", "1.5"]);
    }
}
