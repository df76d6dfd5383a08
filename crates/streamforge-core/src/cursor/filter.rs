//! Filtering cursor decorator.
//!
//! Drops elements from the parent cursor that fail a predicate.

use std::fmt::Debug;

use crate::cursor::Cursor;
use crate::pull::Pull;

/// Decorator yielding only the parent's elements that pass a predicate.
///
/// Each pull keeps draining the parent until an element passes or the parent
/// is exhausted, so the retry count is bounded by the parent's length. Over a
/// never-ending parent with an always-false predicate, `next` never returns;
/// bounding such pipelines is the caller's job (see
/// [`TakeCursor`](crate::TakeCursor)).
pub struct FilterCursor<C, P> {
    parent: C,
    predicate: P,
}

impl<C, P> FilterCursor<C, P> {
    /// Wraps `parent`, keeping only elements for which `predicate` is true.
    pub fn new(parent: C, predicate: P) -> Self {
        Self { parent, predicate }
    }
}

impl<C: Debug, P> Debug for FilterCursor<C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterCursor")
            .field("parent", &self.parent)
            .finish()
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Pull<C::Item> {
        loop {
            match self.parent.next() {
                Pull::Item(item) => {
                    if (self.predicate)(&item) {
                        return Pull::Item(item);
                    }
                }
                Pull::Exhausted => return Pull::Exhausted,
            }
        }
    }
}
