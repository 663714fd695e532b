//! Building sequences from scratch
//!
//! This module provides generators that produce elements without an
//! underlying source.

mod range;
mod value;

pub use range::{Bounds, Number, RangeArgs, RangeCursor, range, range_step};
pub use value::{RepeatValue, repeat_value};
