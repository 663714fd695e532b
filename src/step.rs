/// Outcome of advancing a cursor: the next element, or the end of the traversal.
///
/// The completion payload `D` defaults to `()`; every cursor in this crate
/// completes with [`Step::EXHAUSTED`]. Converting to and from `Option` is
/// lossless for that default.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let next: Step<char> = Step::Yielded('a');
/// assert_eq!(next.map_yielded(|c| c.to_ascii_uppercase()), Step::Yielded('A'));
/// assert_eq!(Step::<char>::from(None), Step::EXHAUSTED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D = ()> {
    /// The cursor produced an element and may produce more
    Yielded(Y),
    /// The cursor has no more elements
    Complete(D),
}

impl<Y> Step<Y> {
    /// The completion every exhausted cursor reports.
    pub const EXHAUSTED: Self = Step::Complete(());

    /// The yielded element, if any.
    #[inline]
    pub fn into_option(self) -> Option<Y> {
        self.into()
    }
}

impl<Y> From<Option<Y>> for Step<Y> {
    #[inline]
    fn from(value: Option<Y>) -> Self {
        value.map_or(Step::EXHAUSTED, Step::Yielded)
    }
}

impl<Y> From<Step<Y>> for Option<Y> {
    #[inline]
    fn from(step: Step<Y>) -> Self {
        match step {
            Step::Yielded(value) => Some(value),
            Step::Complete(()) => None,
        }
    }
}

impl<Y, D> Step<Y, D> {
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Transform the yielded element, leaving a completion untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(value) => Step::Yielded(f(value)),
            Step::Complete(done) => Step::Complete(done),
        }
    }
}
