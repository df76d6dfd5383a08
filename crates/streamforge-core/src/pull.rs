//! Pull protocol shared by every cursor.
//!
//! A pull either produces the next element or reports that the node has run
//! out. Exhaustion is an in-band value checked at each pull, so the common
//! path costs one branch and no unwinding machinery.

/// Outcome of a single [`Cursor::next`](crate::Cursor::next) call.
///
/// `Exhausted` is terminal for a well-formed cursor: once a node reports it,
/// every later pull reports it again.
///
/// # Example
///
/// ```
/// use streamforge_core::{Cursor, Pull, ValuesCursor};
///
/// let mut cursor = ValuesCursor::new(vec![7]);
/// assert_eq!(cursor.next(), Pull::Item(7));
/// assert_eq!(cursor.next(), Pull::Exhausted);
/// assert_eq!(cursor.next(), Pull::Exhausted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull<T> {
    /// The next element in sequence order.
    Item(T),
    /// No further elements are available from this node.
    Exhausted,
}

impl<T> Pull<T> {
    /// Returns `true` if this pull produced an element.
    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self, Pull::Item(_))
    }

    /// Returns `true` if this pull signaled end of sequence.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Pull::Exhausted)
    }

    /// Applies `f` to the element, passing `Exhausted` through unchanged.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Pull<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Pull::Item(item) => Pull::Item(f(item)),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Converts into an `Option`, mapping `Exhausted` to `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Pull::Item(item) => Some(item),
            Pull::Exhausted => None,
        }
    }
}
