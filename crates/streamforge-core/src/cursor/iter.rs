//! Standard-iterator bridge.

use std::iter::FusedIterator;

use crate::cursor::Cursor;

/// Adapter driving a [`Cursor`] as a standard [`Iterator`].
///
/// `Pull::Item` maps to `Some` and `Pull::Exhausted` to `None`. Cursor
/// exhaustion is idempotent, so the adapter satisfies the [`FusedIterator`]
/// contract without extra bookkeeping.
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Unwraps the adapter, returning the underlying cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.cursor.next().into_option()
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}

#[cfg(test)]
mod tests {
    use crate::cursor::{Cursor, ValuesCursor};

    #[test]
    fn drives_cursor_as_std_iterator() {
        let collected: Vec<i32> = ValuesCursor::new(vec![4, 5, 6]).into_iter().collect();
        assert_eq!(collected, vec![4, 5, 6]);
    }

    #[test]
    fn stays_none_after_end() {
        let mut iter = ValuesCursor::new(vec![1]).into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_inner_returns_cursor_state() {
        let mut iter = ValuesCursor::new(vec![1, 2, 3]).into_iter();
        iter.next();
        let mut cursor = iter.into_inner();
        assert_eq!(cursor.next(), crate::Pull::Item(2));
    }
}
