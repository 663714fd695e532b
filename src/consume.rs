//! Terminal consumers that drive a sequence to exhaustion.
//!
//! Each consumer obtains one fresh cursor from its source and pulls it until
//! it reports completion (or, for the `try_*` variants, until the first error).

use std::fmt::Display;

use log::trace;

use crate::{Cursor, IntoSource, Sequence, Step};

/// Drain a source into a `Vec`, preserving order.
pub fn collect<'a, T, S>(source: S) -> Vec<T>
where
    S: IntoSource<'a, T>,
    T: 'a,
{
    let mut cursor = Sequence::new(source).iterate();
    let mut values = Vec::new();
    while let Step::Yielded(value) = cursor.next() {
        values.push(value);
    }
    trace!("collected {} elements", values.len());
    values
}

/// Format every element with `Display`, placing `separator` between them.
///
/// ```rust
/// use lazyseq::{join, range};
///
/// assert_eq!(join(range((1_u8, 4)), ":"), "1:2:3");
/// assert_eq!(join(Vec::<u8>::new(), ":"), "");
/// ```
pub fn join<'a, T, S>(source: S, separator: &str) -> String
where
    S: IntoSource<'a, T>,
    T: Display + 'a,
{
    let mut cursor = Sequence::new(source).iterate();
    let mut out = String::new();
    let mut first = true;
    while let Step::Yielded(value) = cursor.next() {
        if !first {
            out.push_str(separator);
        }
        first = false;
        out.push_str(&value.to_string());
    }
    out
}

/// Format every element with `Display` with nothing in between.
pub fn concat<'a, T, S>(source: S) -> String
where
    S: IntoSource<'a, T>,
    T: Display + 'a,
{
    join(source, "")
}

/// Call `f(value, index)` once per element, in order.
pub fn for_each<'a, T, S, F>(source: S, mut f: F)
where
    S: IntoSource<'a, T>,
    F: FnMut(T, usize),
    T: 'a,
{
    let mut cursor = Sequence::new(source).iterate();
    let mut index = 0;
    while let Step::Yielded(value) = cursor.next() {
        f(value, index);
        index += 1;
    }
}

/// Left fold without a seed.
///
/// The first element becomes the accumulator and `f(acc, value, index)` is
/// called for every later element, with `index` its position in the source.
/// Returns `None` for an empty source; a single element is returned without
/// calling `f`.
///
/// ```rust
/// use lazyseq::{range, reduce};
///
/// assert_eq!(reduce(range(5_u32), |acc, value, _| acc + value), Some(10));
/// assert_eq!(reduce(Vec::<u32>::new(), |acc, value, _| acc + value), None);
/// ```
pub fn reduce<'a, T, S, F>(source: S, mut f: F) -> Option<T>
where
    S: IntoSource<'a, T>,
    F: FnMut(T, T, usize) -> T,
    T: 'a,
{
    let mut cursor = Sequence::new(source).iterate();
    let Step::Yielded(mut acc) = cursor.next() else {
        return None;
    };
    let mut index = 1;
    while let Step::Yielded(value) = cursor.next() {
        acc = f(acc, value, index);
        index += 1;
    }
    Some(acc)
}

/// Collect a source of `Result`s, stopping at the first `Err`.
///
/// Elements after the first error are never pulled.
pub fn try_collect<'a, T, E, S>(source: S) -> Result<Vec<T>, E>
where
    S: IntoSource<'a, Result<T, E>>,
    T: 'a,
    E: 'a,
{
    let mut cursor = Sequence::new(source).iterate();
    let mut values = Vec::new();
    while let Step::Yielded(value) = cursor.next() {
        values.push(value?);
    }
    Ok(values)
}

/// Call `f(value, index)` once per element until it returns an error.
pub fn try_for_each<'a, T, E, S, F>(source: S, mut f: F) -> Result<(), E>
where
    S: IntoSource<'a, T>,
    F: FnMut(T, usize) -> Result<(), E>,
    T: 'a,
{
    let mut cursor = Sequence::new(source).iterate();
    let mut index = 0;
    while let Step::Yielded(value) = cursor.next() {
        f(value, index)?;
        index += 1;
    }
    Ok(())
}
