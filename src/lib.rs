//! Linstore - index-addressable sequences on a linear storage with
//! pluggable capacity strategies.
//!
//! The storage keeps its live elements in one contiguous run with spare
//! room on both sides. Inserting at the head, the tail or in the middle
//! either reuses that room with a single in-place shift or reallocates once,
//! relocating every affected range in the same pass.
//!
//! # Quick Start
//!
//! ```
//! use linstore::sequence::IndexSequence;
//!
//! let mut sequence = IndexSequence::with_first_index(1);
//! sequence.append_all(["b", "d"]).unwrap();
//! sequence.prepend("a").unwrap();
//! sequence.insert(3, "c").unwrap();
//!
//! assert_eq!(sequence.get(1), Some(&"a"));
//! assert_eq!(sequence.to_vec(), vec!["a", "b", "c", "d"]);
//! ```

pub mod capacity;
pub mod error;
pub mod sequence;
pub mod storage;

pub use error::Error;
pub use error::Result;

/// The traits needed to use sequences generically.
pub mod prelude {
    pub use crate::capacity::CapacityStrategy;
    pub use crate::sequence::Gettable;
    pub use crate::sequence::Insertable;
    pub use crate::sequence::Removable;
    pub use crate::sequence::Replaceable;
    pub use crate::storage::ContentIndexRegistry;
    pub use crate::storage::ResizableStorage;
}
