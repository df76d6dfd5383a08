//! Truncating cursor decorator.
//!
//! Stops after a fixed number of elements have been pulled through.

use std::fmt::Debug;

use crate::cursor::Cursor;
use crate::pull::Pull;

/// Decorator passing through at most `count` elements of its parent.
///
/// Counts successful pulls only. Once the budget is spent, `next` signals
/// exhaustion without touching the parent again; if the parent runs out
/// first, its exhaustion propagates early (short sequences are not padded).
#[derive(Debug)]
pub struct TakeCursor<C> {
    parent: C,
    remaining: usize,
}

impl<C> TakeCursor<C> {
    /// Wraps `parent`, passing through at most `count` elements.
    pub fn new(parent: C, count: usize) -> Self {
        Self {
            parent,
            remaining: count,
        }
    }

    /// Elements still allowed through before this cursor cuts off.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Pull<C::Item> {
        if self.remaining == 0 {
            return Pull::Exhausted;
        }
        match self.parent.next() {
            Pull::Item(item) => {
                self.remaining -= 1;
                Pull::Item(item)
            }
            Pull::Exhausted => Pull::Exhausted,
        }
    }
}
