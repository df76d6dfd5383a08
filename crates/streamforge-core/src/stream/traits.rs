//! Stream trait: pipeline description and terminal operations.
//!
//! Builder calls compose descriptions; nothing runs until a cursor is
//! materialized or a terminal operation drives one to exhaustion.

use tracing::trace;

use crate::cursor::Cursor;
use crate::pull::Pull;
use crate::stream::{FilterStream, MapStream, TakeStream};

/// A lazily-evaluated pipeline description.
///
/// A `Stream` records *what* to compute and never computes it. Builder calls
/// ([`map`](Stream::map), [`filter`](Stream::filter), [`take`](Stream::take))
/// consume the receiver and return a new node that owns it, so a pipeline is
/// one exclusively-owned chain and dropping the outermost node releases every
/// stage. Work happens only when [`iterate`](Stream::iterate) materializes a
/// cursor chain or a terminal operation ([`collect`](Stream::collect),
/// [`reduce`](Stream::reduce)) drives one to exhaustion.
///
/// # Example
///
/// ```
/// use streamforge_core::{Stream, ValueStream};
///
/// let stream = ValueStream::of(1..=9)
///     .map(|x| x + 1)
///     .filter(|x| *x > 5)
///     .take(3);
///
/// assert_eq!(stream.collect(), vec![6, 7, 8]);
/// assert_eq!(stream.reduce(0, |acc, x| acc + x), 21);
/// ```
pub trait Stream {
    /// Element type this pipeline produces.
    type Item;

    /// Cursor type materialized by [`iterate`](Stream::iterate).
    type Cursor: Cursor<Item = Self::Item>;

    /// Builds a fresh cursor chain for one run of the pipeline.
    ///
    /// Source items and stage callables are cloned into the chain, so every
    /// run is independent: draining one cursor never disturbs the
    /// description or any other cursor built from it.
    fn iterate(&self) -> Self::Cursor;

    /// Describes "apply `mapper` to every element".
    ///
    /// The element type may change across this stage. `mapper` is not
    /// invoked until a cursor is pulled.
    fn map<B, F>(self, mapper: F) -> MapStream<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> B + Clone,
    {
        MapStream::new(self, mapper)
    }

    /// Describes "keep only elements for which `predicate` is true".
    fn filter<P>(self, predicate: P) -> FilterStream<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool + Clone,
    {
        FilterStream::new(self, predicate)
    }

    /// Describes "truncate to at most `count` elements".
    ///
    /// A count of zero describes an immediately-exhausted stream.
    fn take(self, count: usize) -> TakeStream<Self>
    where
        Self: Sized,
    {
        TakeStream::new(self, count)
    }

    /// Runs the pipeline to exhaustion, returning every element in order.
    ///
    /// Exhaustion is consumed here; a panicking stage callable is not, and
    /// unwinds to the caller.
    fn collect(&self) -> Vec<Self::Item> {
        let mut cursor = self.iterate();
        let mut items = Vec::new();
        while let Pull::Item(item) = cursor.next() {
            items.push(item);
        }
        trace!(event = "collect", items = items.len());
        items
    }

    /// Folds the pipeline left-to-right starting from `init`.
    ///
    /// An empty stream returns `init` unchanged. The fold follows iteration
    /// order, so the result is deterministic for deterministic sources.
    fn reduce<G>(&self, init: Self::Item, combiner: G) -> Self::Item
    where
        G: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        let mut cursor = self.iterate();
        let mut acc = init;
        let mut folded = 0usize;
        while let Pull::Item(item) = cursor.next() {
            acc = combiner(acc, item);
            folded += 1;
        }
        trace!(event = "reduce", items = folded);
        acc
    }
}

#[cfg(test)]
#[path = "traits_tests.rs"]
mod tests;
