//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.
//! The `drop` operator is left out so it does not shadow `std::mem::drop`; use
//! [`Sequence::drop`] or `lazyseq::drop`.

// Core types
pub use crate::{Cursor, InvalidSourceError, IntoSource, Iterable, Sequence, Shape, Source, Step};

// Generators
pub use crate::build::{range, range_step, repeat_value};

// Operators
pub use crate::compose::{
    append, append_either, cycle, drop_while, filter, flat_map, map, repeat, take, take_while,
    zip,
};

// Consumers
pub use crate::consume::{collect, concat, for_each, join, reduce, try_collect, try_for_each};
