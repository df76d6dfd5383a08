//! Mapping cursor decorator.
//!
//! Applies a transform to each element pulled from the parent cursor.

use std::fmt::Debug;

use crate::cursor::Cursor;
use crate::pull::Pull;

/// Decorator applying a transform to every element of its parent.
///
/// The transform runs at most once per successful pull and may change the
/// element type. Parent exhaustion passes through unchanged.
pub struct MapCursor<C, F> {
    parent: C,
    mapper: F,
}

impl<C, F> MapCursor<C, F> {
    /// Wraps `parent`, applying `mapper` to each pulled element.
    pub fn new(parent: C, mapper: F) -> Self {
        Self { parent, mapper }
    }
}

impl<C: Debug, F> Debug for MapCursor<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapCursor")
            .field("parent", &self.parent)
            .finish()
    }
}

impl<C, B, F> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Pull<B> {
        self.parent.next().map(&self.mapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::ValuesCursor;

    #[test]
    fn transforms_each_element() {
        let mut cursor = MapCursor::new(ValuesCursor::new(vec![1, 2, 3]), |x| x * 10);
        assert_eq!(cursor.next(), Pull::Item(10));
        assert_eq!(cursor.next(), Pull::Item(20));
        assert_eq!(cursor.next(), Pull::Item(30));
        assert_eq!(cursor.next(), Pull::Exhausted);
    }

    #[test]
    fn changes_element_type() {
        let mut cursor = MapCursor::new(ValuesCursor::new(vec![1, 2]), |x: i32| x.to_string());
        assert_eq!(cursor.next(), Pull::Item("1".to_string()));
        assert_eq!(cursor.next(), Pull::Item("2".to_string()));
        assert_eq!(cursor.next(), Pull::Exhausted);
    }

    #[test]
    fn propagates_exhaustion_unchanged() {
        let mut cursor = MapCursor::new(ValuesCursor::<i32>::new(vec![]), |x| x + 1);
        assert_eq!(cursor.next(), Pull::Exhausted);
        assert_eq!(cursor.next(), Pull::Exhausted);
    }
}
