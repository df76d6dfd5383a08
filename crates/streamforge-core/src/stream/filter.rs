//! Filtering stream decorator.

use std::fmt::Debug;

use crate::cursor::FilterCursor;
use crate::stream::Stream;

/// Describes "keep only the parent's elements that pass a predicate".
///
/// Built by [`Stream::filter`]; owns its parent. The predicate is cloned
/// into each materialized cursor.
pub struct FilterStream<S, P> {
    parent: S,
    predicate: P,
}

impl<S, P> FilterStream<S, P> {
    /// Wraps `parent`, describing selection by `predicate`.
    pub fn new(parent: S, predicate: P) -> Self {
        Self { parent, predicate }
    }
}

impl<S: Debug, P> Debug for FilterStream<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStream")
            .field("parent", &self.parent)
            .finish()
    }
}

impl<S, P> Stream for FilterStream<S, P>
where
    S: Stream,
    P: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn iterate(&self) -> Self::Cursor {
        FilterCursor::new(self.parent.iterate(), self.predicate.clone())
    }
}
