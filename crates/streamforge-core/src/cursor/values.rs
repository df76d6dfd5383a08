//! Source cursor over stored values.

use crate::cursor::Cursor;
use crate::pull::Pull;

/// Source cursor yielding a stored sequence of values in order.
///
/// Owns its own copy of the items, so advancing one cursor never affects the
/// stream description it came from or any sibling cursor. Once the index
/// reaches the end it stays there: exhaustion is idempotent.
#[derive(Debug)]
pub struct ValuesCursor<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> ValuesCursor<T> {
    /// Creates a cursor positioned before the first of `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }
}

impl<T: Clone> Cursor for ValuesCursor<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        if self.index < self.items.len() {
            let item = self.items[self.index].clone();
            self.index += 1;
            Pull::Item(item)
        } else {
            Pull::Exhausted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_items_in_order() {
        let mut cursor = ValuesCursor::new(vec![3, 1, 2]);
        assert_eq!(cursor.next(), Pull::Item(3));
        assert_eq!(cursor.next(), Pull::Item(1));
        assert_eq!(cursor.next(), Pull::Item(2));
        assert_eq!(cursor.next(), Pull::Exhausted);
    }

    #[test]
    fn empty_source_is_exhausted_immediately() {
        let mut cursor = ValuesCursor::<i32>::new(vec![]);
        assert_eq!(cursor.next(), Pull::Exhausted);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut cursor = ValuesCursor::new(vec![9]);
        assert_eq!(cursor.next(), Pull::Item(9));
        for _ in 0..4 {
            assert_eq!(cursor.next(), Pull::Exhausted);
        }
    }
}
