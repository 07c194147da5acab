//! Array primitives for the loam container library.
//!
//! Three layers, each built on the one below:
//!
//! ```text
//! DynamicArray<T>          growable, amortized O(1) push
//! └── FixedArray<Option<T>>  backing storage, reallocated on growth
//! FixedArray2D<T>          row-major 2D view
//! └── FixedArray<FixedArray<T>>  one independent row per entry
//! FixedArray<T>            contiguous fixed-length storage
//! ```
//!
//! All structures are single-owner and single-threaded: every mutating
//! operation takes `&mut self`, so concurrent structural mutation (and
//! observation of a stale backing buffer across a reallocation) is
//! impossible by construction. Sharing across threads requires an
//! external lock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dynamic;
pub mod fixed;
pub mod grid;

pub use dynamic::DynamicArray;
pub use fixed::FixedArray;
pub use grid::FixedArray2D;
