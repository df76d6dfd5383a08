//! Shared test infrastructure for cursor tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::pull::Pull;

/// Wraps a cursor and counts how often `next` reaches it.
///
/// The counter handle stays readable after the wrapper has been moved into a
/// decorator under test.
pub struct PullCounter<C> {
    parent: C,
    pulls: Rc<Cell<usize>>,
}

impl<C> PullCounter<C> {
    pub fn new(parent: C) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let counter = PullCounter {
            parent,
            pulls: Rc::clone(&pulls),
        };
        (counter, pulls)
    }
}

impl<C: Cursor> Cursor for PullCounter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Pull<C::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.parent.next()
    }
}
