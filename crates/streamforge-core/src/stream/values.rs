//! Source stream over stored values.

use crate::cursor::ValuesCursor;
use crate::stream::Stream;

/// Source stream describing an in-memory ordered sequence.
///
/// Each [`iterate`](Stream::iterate) clones the items into the new cursor,
/// so a `ValueStream` can seed any number of independent runs.
///
/// # Example
///
/// ```
/// use streamforge_core::{Stream, ValueStream};
///
/// let stream = ValueStream::of(vec![10, 20, 30]);
/// assert_eq!(stream.len(), 3);
/// assert_eq!(stream.collect(), vec![10, 20, 30]);
/// ```
#[derive(Debug, Clone)]
pub struct ValueStream<T> {
    items: Vec<T>,
}

impl<T> ValueStream<T> {
    /// Creates a source stream from any ordered sequence of items.
    ///
    /// Accepts anything iterable, so ranges work directly:
    ///
    /// ```
    /// use streamforge_core::{Stream, ValueStream};
    ///
    /// let squares = ValueStream::of(1..=4).map(|x| x * x);
    /// assert_eq!(squares.collect(), vec![1, 4, 9, 16]);
    /// ```
    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Number of source items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the source holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for ValueStream<T> {
    fn from(items: Vec<T>) -> Self {
        ValueStream { items }
    }
}

impl<T: Clone> Stream for ValueStream<T> {
    type Item = T;
    type Cursor = ValuesCursor<T>;

    fn iterate(&self) -> ValuesCursor<T> {
        ValuesCursor::new(self.items.clone())
    }
}
