//! Stream descriptions: the builder layer of the pipeline.
//!
//! A stream describes a computation without running it. Composition is pure
//! bookkeeping: each builder call consumes the receiver and returns a node
//! that owns it, giving one exclusively-owned description chain per
//! pipeline. [`Stream::iterate`] turns the description into a fresh
//! [`Cursor`](crate::Cursor) chain; the terminal operations drive such a
//! chain to exhaustion.
//!
//! - [`ValueStream`] - source over an in-memory sequence
//! - [`MapStream`] - per-element transform, possibly changing the type
//! - [`FilterStream`] - predicate selection
//! - [`TakeStream`] - truncation to a fixed element budget

mod filter;
mod map;
mod take;
mod traits;
mod values;

pub use filter::FilterStream;
pub use map::MapStream;
pub use take::TakeStream;
pub use traits::Stream;
pub use values::ValueStream;
