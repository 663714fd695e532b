use crate::{BoxCursor, Cursor, IntoSource, Sequence, Step};

/// Re-traverses a source a number of times, or forever.
///
/// Created via [`repeat`] or [`cycle`].
pub struct Repeat<'a, T> {
    source: Sequence<'a, T>,
    current: Option<BoxCursor<'a, T>>,
    remaining: Option<usize>,
}

/// Create a sequence that traverses `source` from the start `times` times in a
/// row, or without end when `times` is `None`.
///
/// Each pass obtains a fresh cursor, so `source` must be repeatable for the
/// passes to agree. A pass that yields nothing ends the repeat, even when
/// `times` is `None`: an unbounded repeat of an empty source is empty, and a
/// one-shot source whose factory returns an empty iterator on some pass ends
/// there, whatever later passes would have produced.
///
/// ```rust
/// use lazyseq::repeat;
///
/// assert_eq!(repeat("ab", Some(3)).concat(), "ababab");
/// assert_eq!(repeat("ab", None).take(5).concat(), "ababa");
/// ```
pub fn repeat<'a, T, S>(source: S, times: Option<usize>) -> Sequence<'a, T>
where
    S: IntoSource<'a, T>,
    T: 'a,
{
    let source = Sequence::new(source);
    Sequence::from_factory(move || Repeat {
        source: source.clone(),
        current: None,
        remaining: times,
    })
}

/// Repeat `source` forever. Equivalent to `repeat(source, None)`.
pub fn cycle<'a, T, S>(source: S) -> Sequence<'a, T>
where
    S: IntoSource<'a, T>,
    T: 'a,
{
    repeat(source, None)
}

impl<'a, T: 'a> Cursor for Repeat<'a, T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        loop {
            if let Some(current) = &mut self.current {
                match current.next() {
                    Step::Yielded(value) => return Step::Yielded(value),
                    Step::Complete(()) => self.current = None,
                }
            }
            let mut pass = match &mut self.remaining {
                Some(0) => return Step::EXHAUSTED,
                Some(remaining) => {
                    *remaining -= 1;
                    self.source.iterate()
                }
                None => self.source.iterate(),
            };
            match pass.next() {
                Step::Yielded(value) => {
                    self.current = Some(pass);
                    return Step::Yielded(value);
                }
                // a fresh pass that yields nothing will never yield anything
                Step::Complete(()) => {
                    self.remaining = Some(0);
                    return Step::EXHAUSTED;
                }
            }
        }
    }
}
