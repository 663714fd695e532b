use crate::{Cursor, Sequence, Step};

/// Yields clones of one value.
///
/// Created via [`repeat_value`].
pub struct RepeatValue<T> {
    value: T,
    remaining: Option<usize>,
}

/// Create a sequence that yields `value` exactly `times` times, or forever when
/// `times` is `None`.
///
/// Unlike [`repeat`](crate::repeat), which re-traverses a source, this repeats a
/// single element.
///
/// ```rust
/// use lazyseq::repeat_value;
///
/// assert_eq!(repeat_value('z', Some(3)).concat(), "zzz");
/// assert_eq!(repeat_value(1, None).take(2).collect(), vec![1, 1]);
/// ```
pub fn repeat_value<'a, T>(value: T, times: Option<usize>) -> Sequence<'a, T>
where
    T: Clone + 'a,
{
    Sequence::from_factory(move || RepeatValue {
        value: value.clone(),
        remaining: times,
    })
}

impl<T: Clone> Cursor for RepeatValue<T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        match &mut self.remaining {
            Some(0) => Step::EXHAUSTED,
            Some(remaining) => {
                *remaining -= 1;
                Step::Yielded(self.value.clone())
            }
            None => Step::Yielded(self.value.clone()),
        }
    }
}
