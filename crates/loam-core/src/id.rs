//! Strongly-typed node identifiers.

use std::fmt;

/// Identifies a node within an arena-backed linked structure.
///
/// Nodes are allocated sequentially from an arena and addressed by
/// index rather than by reference, so links never carry ownership.
/// `NodeId(n)` is the n-th node allocated by the owning structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The arena index this id addresses.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
