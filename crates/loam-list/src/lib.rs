//! Linked node structures for the loam container library.
//!
//! All linkage is arena-based: an owning `Vec` of nodes addressed by
//! stable [`NodeId`](loam_core::NodeId) indices. Links are plain
//! indices, never references, so back-links and cycles (the circular
//! list's self-referential sentinel included) carry no ownership and
//! cannot leak or dangle.
//!
//! Three structures:
//!
//! - [`Chain`] — singly-linked chain over [`LinkedNode`], terminal `None`.
//! - [`TwoWayChain`] — doubly-linked chain over [`TwoWayLinkedNode`];
//!   the forward direction is the owning chain, `previous` links are
//!   derived back-references.
//! - [`SentinelCircularList`] — closed cycle through one dedicated
//!   sentinel node, so traversal needs no null checks.
//!
//! Everything here is single-owner and single-threaded; mutating
//! operations take `&mut self` and concurrent mutation requires an
//! external lock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chain;
pub mod circular;
pub mod node;

pub use chain::{Chain, TwoWayChain};
pub use circular::SentinelCircularList;
pub use node::{LinkedNode, TwoWayLinkedNode};
