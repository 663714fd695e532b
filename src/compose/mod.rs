//! Operators that wrap one or two sources into a new lazy sequence.
//!
//! Every operator normalizes its source(s) when called and returns a
//! [`Sequence`](crate::Sequence) whose cursor factory re-derives a cursor over
//! each source on every traversal. No element is read until that cursor is
//! advanced.

mod append;
mod drop;
mod filter;
mod map;
mod repeat;
mod take;
mod zip;

pub use append::{Append, append, append_either};
pub use drop::{DropFirst, DropWhile, drop, drop_while};
pub use filter::{Filter, filter};
pub use map::{FlatMap, Map, flat_map, map};
pub use repeat::{Repeat, cycle, repeat};
pub use take::{Take, TakeWhile, take, take_while};
pub use zip::{Zip, zip};
