//! Iterator adapters for cursors.
//!
//! [`CursorIter`] lets a [`Cursor`] take part in `for` loops and standard
//! iterator chains. Both `CursorIter` and `&mut CursorIter` implement
//! `Iterator`, so a traversal can be paused and resumed.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = range(10_u32).iterate().into_iterator();
//! let head: Vec<_> = (&mut iter).take(3).collect();
//! assert_eq!(head, vec![0, 1, 2]);
//! assert_eq!(iter.next(), Some(3));
//! ```

use crate::{Cursor, Step};

/// Iterator adapter for a [`Cursor`].
///
/// The wrapped cursor is dropped as soon as it reports exhaustion, so the
/// adapter is fused even when the cursor is not.
pub struct CursorIter<C> {
    state: CursorIterState<C>,
}

enum CursorIterState<C> {
    Active(C),
    Complete,
}

impl<C: Cursor> CursorIter<C> {
    /// Create a new iterator from a cursor.
    pub fn new(cursor: C) -> Self {
        Self {
            state: CursorIterState::Active(cursor),
        }
    }

    /// Check if the underlying cursor has reported exhaustion.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, CursorIterState::Complete)
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            CursorIterState::Active(cursor) => match cursor.next() {
                Step::Yielded(value) => Some(value),
                Step::Complete(()) => {
                    self.state = CursorIterState::Complete;
                    None
                }
            },
            CursorIterState::Complete => None,
        }
    }
}

impl<C: Cursor> std::iter::FusedIterator for CursorIter<C> {}
