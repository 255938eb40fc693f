//! ringchunk — a bounded, single-producer/single-consumer, in-place FIFO
//! queue of variable-length opaque byte chunks.
//!
//! Memory is allocated once up front as a single power-of-two arena;
//! `push`/`shift`/`peek` are O(1) with no per-chunk heap activity, and
//! chunks retain strict ingestion order. When the arena fills, the caller
//! picks an overwrite policy ([`Policy::TailDrop`], [`Policy::HeadDrop`], or
//! [`Policy::DropAll`]) rather than the store growing.
//!
//! This is deliberately **not** thread-safe: there is no internal locking or
//! atomics anywhere in this crate. A caller needing concurrent access must
//! add a synchronization layer of its own and treat every outstanding
//! [`Cursor`] as invalidated by any `push`/`shift`/`peek`/`peek_commit` call.
//!
//! # Example
//!
//! ```
//! use ringchunk::{Policy, Store};
//!
//! let mut store = Store::new(16).unwrap();
//! store.push(b"ab", Policy::TailDrop).unwrap();
//! store.push(b"cd", Policy::TailDrop).unwrap();
//!
//! let mut cursor = store.cursor();
//! let mut buf = [0u8; 16];
//! let len = cursor.next(&store, &mut buf).unwrap();
//! assert_eq!(&buf[..len], b"ab");
//!
//! // The cursor never mutates the store.
//! assert_eq!(store.count(), 2);
//! ```

mod cursor;
mod error;
mod frame;
mod index;
mod invariants;
mod policy;
mod store;

pub use cursor::Cursor;
pub use error::StoreError;
pub use index::round_up_power_of_two;
pub use policy::Policy;
pub use store::Store;
