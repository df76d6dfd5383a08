//! Pull cursor trait.
//!
//! The single seam of the engine layer: one method, one outcome type.

use crate::cursor::CursorIter;
use crate::pull::Pull;

/// A stateful pull cursor materializing one run of a pipeline.
///
/// Pulling is synchronous: `next` runs to completion on the caller's thread
/// and either yields the next element in sequence order or signals
/// [`Pull::Exhausted`]. Exhaustion must be idempotent: after the first
/// `Exhausted`, every later call signals `Exhausted` again and never yields
/// a stale element.
///
/// # Example
///
/// ```
/// use streamforge_core::{Cursor, Pull, ValuesCursor};
///
/// let mut cursor = ValuesCursor::new(vec![1, 2]);
/// assert_eq!(cursor.next(), Pull::Item(1));
/// assert_eq!(cursor.next(), Pull::Item(2));
/// assert_eq!(cursor.next(), Pull::Exhausted);
/// ```
pub trait Cursor {
    /// Element type produced by this cursor.
    type Item;

    /// Pulls the next element, or signals exhaustion.
    fn next(&mut self) -> Pull<Self::Item>;

    /// Adapts this cursor into a standard [`Iterator`].
    ///
    /// # Example
    ///
    /// ```
    /// use streamforge_core::{Cursor, ValuesCursor};
    ///
    /// let doubled: Vec<i32> = ValuesCursor::new(vec![1, 2, 3])
    ///     .into_iter()
    ///     .map(|x| x * 2)
    ///     .collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn into_iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }
}
