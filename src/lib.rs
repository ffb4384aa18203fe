#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A FIFO-oriented doubly linked sequence with checked cursors.
//!
//! [`LinkedSequence`] supports pushing at the back, popping from the front,
//! access to both ends, forward iteration, and O(1) insertion before any
//! position designated by a [`Cursor`].
//!
//! Each node is owned by exactly one owner: the sequence owns the head node and
//! every node owns its successor. Backward links only observe their target, so
//! the chain has no reference cycles and is released from the front when the
//! sequence is cleared or dropped.
//!
//! # Example
//!
//! ```rust
//! use linked_sequence::{LinkedSequence, SequenceError};
//!
//! let mut seq = LinkedSequence::new();
//! seq.push(10);
//! seq.push(11);
//! seq.push(7);
//!
//! // Insert before the second element.
//! let second = seq.advance(seq.begin())?;
//! seq.insert(second, 42)?;
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![10, 42, 11, 7]);
//!
//! // Walk the sequence with a cursor.
//! let mut cursor = seq.begin();
//! let mut walked = Vec::new();
//! while cursor != seq.end() {
//!     walked.push(*seq.get(cursor)?);
//!     cursor = seq.advance(cursor)?;
//! }
//! assert_eq!(walked, vec![10, 42, 11, 7]);
//!
//! // Popping releases the front element. Only cursors to it become invalid.
//! let first = seq.begin();
//! assert_eq!(seq.pop(), Ok(10));
//! assert_eq!(seq.get(first), Err(SequenceError::InvalidCursor));
//! assert_eq!(seq.get(second), Ok(&42));
//!
//! seq.clear();
//! assert_eq!(seq.pop(), Err(SequenceError::Empty));
//! # Ok::<(), SequenceError>(())
//! ```
//!
//! # Cursor validity
//!
//! Cursors do not borrow their sequence, so they can be held across
//! mutations. The sequence checks every cursor it is handed:
//!
//! - A cursor issued by another sequence is rejected.
//! - A cursor to an element that has been released (by `pop` or `clear`) is
//!   rejected. Cursors to the other elements stay valid.
//! - Inserting never invalidates cursors.
//! - The end cursor is valid for every sequence.
//!
//! Rejections are reported as [`SequenceError::InvalidCursor`].
//!
//! # Feature Flags
//!
//! - `logging`: Emits `log` records when an operation is rejected and when a
//!   sequence releases its elements.
//! - `unstable-debug-counters`: Adds [`GlobalDebugCounters`] to observe node
//!   creations and drops.

pub(crate) mod common;
pub mod sequence;

pub use common::error::{Result, SequenceError};
pub use sequence::{Cursor, IntoIter, Iter, IterMut, LinkedSequence};

#[cfg(feature = "unstable-debug-counters")]
#[cfg_attr(docsrs, doc(cfg(feature = "unstable-debug-counters")))]
pub use common::debug_counters::GlobalDebugCounters;
