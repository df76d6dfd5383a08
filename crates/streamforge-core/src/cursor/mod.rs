//! Pull cursors: the live engine of a materialized pipeline.
//!
//! A cursor chain is built by [`Stream::iterate`](crate::Stream::iterate) and
//! pulls elements on demand, outermost node first. Decorators own their
//! parent by value and preserve the zero-erasure architecture: each chain is
//! one concrete nested type with no boxing in the pull path.
//!
//! - [`ValuesCursor`] - source over a stored sequence
//! - [`MapCursor`] - applies a transform to each element
//! - [`FilterCursor`] - drops elements that fail a predicate
//! - [`TakeCursor`] - cuts off after a fixed number of elements
//! - [`CursorIter`] - bridges a cursor to `std::iter::Iterator`

mod filter;
mod iter;
mod map;
mod take;
#[cfg(test)]
mod test_utils;
mod traits;
mod values;

pub use filter::FilterCursor;
pub use iter::CursorIter;
pub use map::MapCursor;
pub use take::TakeCursor;
pub use traits::Cursor;
pub use values::ValuesCursor;
