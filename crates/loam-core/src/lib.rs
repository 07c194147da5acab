//! Core types for the loam container library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy shared by every container crate and the
//! strongly-typed node identifier used by the linked structures.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::ContainerError;
pub use id::NodeId;
