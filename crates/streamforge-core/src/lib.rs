//! StreamForge Core - Lazy, composable pull streams
//!
//! This crate provides the two families that make up a pipeline:
//! - Stream descriptions for composing map/filter/take over a source
//! - Pull cursors that materialize one run of a description
//! - The `Pull` protocol signaling exhaustion in-band
//! - Terminal operations (`collect`, `reduce`) driving a run to exhaustion
//!
//! Descriptions are cheap and reusable; cursors are disposable state
//! machines. Everything is monomorphized: a pipeline is one concrete nested
//! type with no boxing or dynamic dispatch in the pull path.
//!
//! # Example
//!
//! ```
//! use streamforge_core::{Stream, ValueStream};
//!
//! let stream = ValueStream::of(1..=9)
//!     .map(|x| x + 1)
//!     .filter(|x| *x > 5)
//!     .take(3);
//!
//! assert_eq!(stream.collect(), vec![6, 7, 8]);
//! assert_eq!(stream.reduce(0, |acc, x| acc + x), 21);
//! ```

pub mod cursor;
pub mod pull;
pub mod stream;

pub use cursor::{Cursor, CursorIter, FilterCursor, MapCursor, TakeCursor, ValuesCursor};
pub use pull::Pull;
pub use stream::{FilterStream, MapStream, Stream, TakeStream, ValueStream};
