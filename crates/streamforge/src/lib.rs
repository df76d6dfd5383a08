//! StreamForge - Lazy, composable pull streams in Rust
//!
//! Describe a pipeline with `map`/`filter`/`take`, then run it as often as
//! needed: every run gets its own independent cursor chain.
//!
//! # Example
//!
//! ```rust
//! use streamforge::prelude::*;
//!
//! let stream = ValueStream::of(1..=9)
//!     .map(|x| x + 1)
//!     .filter(|x| *x > 5)
//!     .take(3);
//!
//! assert_eq!(stream.collect(), vec![6, 7, 8]);
//! assert_eq!(stream.reduce(0, |acc, x| acc + x), 21);
//! ```

// Pull protocol
pub use streamforge_core::Pull;

// Cursor family (materialized runs)
pub use streamforge_core::{Cursor, CursorIter, FilterCursor, MapCursor, TakeCursor, ValuesCursor};

// Stream family (pipeline descriptions)
pub use streamforge_core::{FilterStream, MapStream, Stream, TakeStream, ValueStream};

pub mod prelude {
    pub use super::{Cursor, Pull, Stream, ValueStream};
}
