//! Mapping stream decorator.

use std::fmt::Debug;

use crate::cursor::MapCursor;
use crate::stream::Stream;

/// Describes "apply a transform to every element of the parent stream".
///
/// Built by [`Stream::map`]; owns its parent. The transform may change the
/// element type and is cloned into each materialized cursor, never running
/// at description time.
pub struct MapStream<S, F> {
    parent: S,
    mapper: F,
}

impl<S, F> MapStream<S, F> {
    /// Wraps `parent`, describing `mapper` applied to each of its elements.
    pub fn new(parent: S, mapper: F) -> Self {
        Self { parent, mapper }
    }
}

impl<S: Debug, F> Debug for MapStream<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapStream")
            .field("parent", &self.parent)
            .finish()
    }
}

impl<S, B, F> Stream for MapStream<S, F>
where
    S: Stream,
    F: Fn(S::Item) -> B + Clone,
{
    type Item = B;
    type Cursor = MapCursor<S::Cursor, F>;

    fn iterate(&self) -> Self::Cursor {
        MapCursor::new(self.parent.iterate(), self.mapper.clone())
    }
}
