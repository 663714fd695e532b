//! # Lazyseq: Lazy, Re-iterable Sequences
//!
//! Wrap collection-like inputs in a uniform [`Sequence`] and compose operators
//! over it without reading a single element until a consumer asks for one.
//!
//! ## Core Types
//!
//! - **[`Sequence`]**: A cheap, cloneable handle around a cursor factory
//! - **[`Cursor`]**: A single-use traversal that yields [`Step`]s
//! - **[`Source`]**: The three input shapes (repeatable, indexed, one-shot)
//!
//! ## Key Features
//!
//! - **Lazy**: Building a pipeline reads nothing; consumers drive it
//! - **Re-iterable**: Every traversal asks the source for a fresh cursor
//! - **Composable**: Every operator is a free function and a method
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let squares = range((1_u64, u64::MAX))
//!     .map(|n, _| n * n)
//!     .take_while(|sq, _| *sq < 50);
//!
//! assert_eq!(squares.join(" "), "1 4 9 16 25 36 49");
//! assert_eq!(squares.reduce(|acc, sq, _| acc + sq), Some(140));
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`Sequence::new(source)`](Sequence::new) - Normalize any [`IntoSource`] input
//! - [`range(args)`] - Arithmetic progression, possibly unbounded
//! - [`repeat_value(value, times)`] - One value, `times` times
//!
//! **Operators:**
//! - [`map`], [`flat_map`], [`filter`], [`zip`], [`append`]
//! - [`take`], [`take_while`], [`drop()`], [`drop_while`]
//! - [`repeat`], [`cycle`]
//!
//! **Consumers:**
//! - [`collect`], [`join`], [`for_each`], [`reduce`]

mod build;
mod compose;
mod consume;
mod cursor;
mod error;
mod iter;
#[cfg(feature = "json")]
mod json;
pub mod prelude;
mod sequence;
mod source;
mod step;

pub use build::*;
pub use compose::*;
pub use consume::*;
pub use cursor::{BoxCursor, Cursor, Empty, Fuse, IterCursor, empty, iter_cursor};
pub use error::InvalidSourceError;
pub use iter::CursorIter;
#[cfg(feature = "json")]
pub use json::from_json;
pub use sequence::{Sequence, from_iter};
pub use source::*;
pub use step::Step;
