//! Loam: foundational container primitives.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the loam sub-crates. For most users, adding `loam` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! // A fixed array: every slot defined from construction.
//! let mut fixed = FixedArray::new(4, 0i64).unwrap();
//! fixed.set(2, 9).unwrap();
//! assert_eq!(*fixed.get(2).unwrap(), 9);
//!
//! // A growable array: capacity doubles, pushes are amortized O(1).
//! let mut dynamic = DynamicArray::new();
//! for v in 1..=5 {
//!     dynamic.push(v);
//! }
//! assert_eq!(dynamic.len(), 5);
//! assert_eq!(dynamic.capacity(), 8);
//! dynamic.remove(&3).unwrap();
//! assert_eq!(dynamic.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4, 5]);
//!
//! // A circular list: one sentinel, no null checks, newest first.
//! let mut list = SentinelCircularList::new();
//! list.add("b");
//! list.add("a");
//! assert!(list.contains(&"b"));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `loam-array` | `FixedArray`, `FixedArray2D`, `DynamicArray` |
//! | [`list`] | `loam-list` | Linked nodes, chains, `SentinelCircularList` |
//! | [`types`] | `loam-core` | `ContainerError`, `NodeId` |
//!
//! # Concurrency
//!
//! Every structure is single-threaded by design: no internal
//! synchronization is added, mutating operations take `&mut self`, and
//! sharing an instance across threads requires an external lock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Array primitives (`loam-array`).
///
/// [`array::FixedArray`] is the contiguous fixed-length basis;
/// [`array::FixedArray2D`] composes it row-major; [`array::DynamicArray`]
/// adds amortized-constant growth on top of it.
pub use loam_array as array;

/// Linked node structures (`loam-list`).
///
/// Arena-backed chains ([`list::Chain`], [`list::TwoWayChain`]) and the
/// sentinel-headed circular list ([`list::SentinelCircularList`]).
pub use loam_list as list;

/// Core error and identifier types (`loam-core`).
pub use loam_core as types;

/// Common imports for typical loam usage.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    // Arrays
    pub use loam_array::{DynamicArray, FixedArray, FixedArray2D};

    // Linked structures
    pub use loam_list::{Chain, LinkedNode, SentinelCircularList, TwoWayChain, TwoWayLinkedNode};

    // Errors and ids
    pub use loam_core::{ContainerError, NodeId};
}
