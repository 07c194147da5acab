//! Passive node types for linked structures.
//!
//! Nodes are plain value holders with no behaviour beyond field access.
//! The link discipline (which direction owns, when back-links are
//! updated) is enforced by the structure managing the arena, never by
//! the node type itself.

use loam_core::NodeId;

/// A node in a singly-linked chain.
///
/// `next` is an arena index; `None` is the terminal. In circular
/// structures the last node links back to the sentinel instead and
/// `next` is always `Some`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkedNode<T> {
    /// The element held by this node.
    pub value: T,
    /// Index of the successor node, if any.
    pub next: Option<NodeId>,
}

impl<T> LinkedNode<T> {
    /// Create a node holding `value` with the given successor.
    pub fn new(value: T, next: Option<NodeId>) -> Self {
        Self { value, next }
    }
}

/// A node in a doubly-linked chain.
///
/// Satisfies a superset of [`LinkedNode`]'s capability: the same value
/// and forward link, plus a `previous` back-reference. Both links are
/// non-owning indices; by convention the forward direction is the
/// owning chain and `previous` is derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwoWayLinkedNode<T> {
    /// The element held by this node.
    pub value: T,
    /// Index of the successor node, if any.
    pub next: Option<NodeId>,
    /// Index of the predecessor node, if any.
    pub previous: Option<NodeId>,
}

impl<T> TwoWayLinkedNode<T> {
    /// Create a node holding `value` with the given neighbours.
    pub fn new(value: T, previous: Option<NodeId>, next: Option<NodeId>) -> Self {
        Self {
            value,
            next,
            previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_node_holds_value_and_link() {
        let node = LinkedNode::new(5i64, Some(NodeId(2)));
        assert_eq!(node.value, 5);
        assert_eq!(node.next, Some(NodeId(2)));

        let terminal = LinkedNode::new(1i64, None);
        assert_eq!(terminal.next, None);
    }

    #[test]
    fn two_way_node_holds_both_links() {
        let node = TwoWayLinkedNode::new(5i64, Some(NodeId(0)), Some(NodeId(2)));
        assert_eq!(node.previous, Some(NodeId(0)));
        assert_eq!(node.next, Some(NodeId(2)));
    }
}
