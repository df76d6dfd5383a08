//! Truncating stream decorator.

use crate::cursor::TakeCursor;
use crate::stream::Stream;

/// Describes "truncate the parent stream to at most `count` elements".
///
/// Built by [`Stream::take`]; owns its parent. Truncation bounds consumption
/// as well as production: once the budget is spent, a materialized cursor
/// stops pulling its parent entirely.
#[derive(Debug)]
pub struct TakeStream<S> {
    parent: S,
    count: usize,
}

impl<S> TakeStream<S> {
    /// Wraps `parent`, describing truncation to at most `count` elements.
    pub fn new(parent: S, count: usize) -> Self {
        Self { parent, count }
    }

    /// Maximum number of elements this stage lets through.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<S: Stream> Stream for TakeStream<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn iterate(&self) -> Self::Cursor {
        TakeCursor::new(self.parent.iterate(), self.count)
    }
}
