//! Arithmetic progressions over primitive numbers.

use num_traits::Num;

use crate::{Cursor, Sequence, Step};

/// Primitive numbers a range can walk over.
///
/// Stepping reports `None` instead of overflowing, which ends the range.
pub trait Number: Num + PartialOrd + Copy {
    fn step_up(self, by: Self) -> Option<Self>;
    fn step_down(self, by: Self) -> Option<Self>;
}

macro_rules! integer_number {
    ($($t:ty),*) => {$(
        impl Number for $t {
            #[inline]
            fn step_up(self, by: Self) -> Option<Self> {
                self.checked_add(by)
            }

            #[inline]
            fn step_down(self, by: Self) -> Option<Self> {
                self.checked_sub(by)
            }
        }
    )*};
}

macro_rules! float_number {
    ($($t:ty),*) => {$(
        impl Number for $t {
            #[inline]
            fn step_up(self, by: Self) -> Option<Self> {
                Some(self + by)
            }

            #[inline]
            fn step_down(self, by: Self) -> Option<Self> {
                Some(self - by)
            }
        }
    )*};
}

integer_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_number!(f32, f64);

/// Start, stop and step of a range.
///
/// `step` is a magnitude; `descending` picks the direction. A step too large
/// to represent is `None`; the range then yields `start`, then `second` if it
/// lies before `stop`, and ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    start: T,
    stop: T,
    step: Option<T>,
    second: Option<T>,
    descending: bool,
}

impl<T: Number> Bounds<T> {
    /// `0, 1, ..., stop - 1`.
    pub fn up_to(stop: T) -> Self {
        Self::between(T::zero(), stop)
    }

    /// `start, start + 1, ...` excluding `stop`.
    pub fn between(start: T, stop: T) -> Self {
        Bounds {
            start,
            stop,
            step: Some(T::one()),
            second: None,
            descending: false,
        }
    }

    /// Starts at `start` and steps by `next - start`, stopping before `stop`.
    pub fn through(start: T, next: T, stop: T) -> Self {
        let descending = next < start;
        let step = if descending {
            start.step_down(next)
        } else {
            next.step_down(start)
        };
        Bounds {
            start,
            stop,
            step,
            second: step.is_none().then_some(next),
            descending,
        }
    }

    /// Starts at `start` and steps by a signed `step`, stopping before `stop`.
    pub fn stepped(start: T, stop: T, step: T) -> Self {
        let zero = T::zero();
        if step >= zero {
            Bounds {
                start,
                stop,
                step: Some(step),
                second: None,
                descending: false,
            }
        } else {
            let magnitude = zero.step_down(step);
            Bounds {
                start,
                stop,
                step: magnitude,
                second: magnitude.map_or_else(|| start.step_up(step), |_| None),
                descending: true,
            }
        }
    }

    fn contains(&self, value: T) -> bool {
        if self.descending {
            value > self.stop
        } else {
            value < self.stop
        }
    }
}

/// Argument forms accepted by [`range`]: `stop`, `(start, stop)` or
/// `(start, next, stop)`.
pub trait RangeArgs<T> {
    fn into_bounds(self) -> Bounds<T>;
}

impl<T: Number> RangeArgs<T> for T {
    fn into_bounds(self) -> Bounds<T> {
        Bounds::up_to(self)
    }
}

impl<T: Number> RangeArgs<T> for (T, T) {
    fn into_bounds(self) -> Bounds<T> {
        Bounds::between(self.0, self.1)
    }
}

impl<T: Number> RangeArgs<T> for (T, T, T) {
    fn into_bounds(self) -> Bounds<T> {
        Bounds::through(self.0, self.1, self.2)
    }
}

impl<T: Number> RangeArgs<T> for Bounds<T> {
    fn into_bounds(self) -> Bounds<T> {
        self
    }
}

/// Walks a [`Bounds`].
///
/// Created via [`range`] or [`range_step`].
pub struct RangeCursor<T> {
    bounds: Bounds<T>,
    current: Option<T>,
    second: Option<T>,
}

/// Create a lazy arithmetic progression.
///
/// - `range(stop)`: `0, 1, ..., stop - 1`, empty if `stop <= 0`.
/// - `range((start, stop))`: counts up by one from `start`, excluding `stop`.
/// - `range((start, next, stop))`: steps by `next - start`. A descending step
///   counts down to just above `stop`. A zero step repeats `start` forever when
///   `start < stop` and is empty otherwise.
///
/// Float bounds are accepted, so an infinite `stop` gives an unbounded range.
///
/// ```rust
/// use lazyseq::range;
///
/// assert_eq!(range(5_u8).collect(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(range((2, 5)).collect(), vec![2, 3, 4]);
/// assert_eq!(range((0, 2, 5)).collect(), vec![0, 2, 4]);
/// assert_eq!(range((5, 4, 0)).collect(), vec![5, 4, 3, 2, 1]);
/// assert_eq!(range(f64::INFINITY).take(2).collect(), vec![0.0, 1.0]);
/// ```
pub fn range<'a, T, A>(args: A) -> Sequence<'a, T>
where
    A: RangeArgs<T>,
    T: Number + 'a,
{
    let bounds = args.into_bounds();
    Sequence::from_factory(move || RangeCursor {
        bounds,
        current: Some(bounds.start),
        second: bounds.second,
    })
}

/// Create a progression from `start` towards `stop` in increments of a signed
/// `step`.
///
/// ```rust
/// use lazyseq::range_step;
///
/// assert_eq!(range_step(10_i32, 0, -3).collect(), vec![10, 7, 4, 1]);
/// ```
pub fn range_step<'a, T>(start: T, stop: T, step: T) -> Sequence<'a, T>
where
    T: Number + 'a,
{
    range(Bounds::stepped(start, stop, step))
}

impl<T: Number> Cursor for RangeCursor<T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        let Some(current) = self.current else {
            return Step::EXHAUSTED;
        };
        if !self.bounds.contains(current) {
            self.current = None;
            return Step::EXHAUSTED;
        }
        self.current = match self.bounds.step {
            Some(step) if self.bounds.descending => current.step_down(step),
            Some(step) => current.step_up(step),
            None => self.second.take(),
        };
        Step::Yielded(current)
    }
}
