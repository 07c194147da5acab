//! Arena-backed singly- and doubly-linked chains.
//!
//! A chain owns its nodes in a `Vec` arena and threads them together
//! with [`NodeId`] indices. The arena is add-only, so ids stay valid
//! for the chain's lifetime and the logical length equals the arena
//! length.

use loam_core::NodeId;

use crate::node::{LinkedNode, TwoWayLinkedNode};

/// A singly-linked chain with front insertion.
///
/// New elements are pushed at the head, so iteration visits elements
/// most-recently-pushed first. The walk ends at the terminal node,
/// whose `next` is `None`.
#[derive(Debug, Default)]
pub struct Chain<T> {
    nodes: Vec<LinkedNode<T>>,
    head: Option<NodeId>,
}

impl<T> Chain<T> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Push `value` at the front of the chain; returns the new node's id.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(LinkedNode::new(value, self.head));
        self.head = Some(id);
        id
    }

    /// Number of elements. The arena is add-only, so every node is live.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the chain has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&LinkedNode<T>> {
        self.nodes.get(id.index())
    }

    /// Walk the chain from the head to the terminal node.
    pub fn iter(&self) -> ChainIter<'_, T> {
        ChainIter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

/// Iterator over a [`Chain`], head first.
pub struct ChainIter<'a, T> {
    nodes: &'a [LinkedNode<T>],
    cursor: Option<NodeId>,
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = &self.nodes[id.index()];
        self.cursor = node.next;
        Some(&node.value)
    }
}

/// A doubly-linked chain with back insertion.
///
/// The forward `next` direction is the owning chain; each node's
/// `previous` link is the derived, non-owning back-reference the chain
/// maintains on insertion. Iteration is available in both directions.
#[derive(Debug, Default)]
pub struct TwoWayChain<T> {
    nodes: Vec<TwoWayLinkedNode<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> TwoWayChain<T> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Push `value` at the back of the chain; returns the new node's id.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TwoWayLinkedNode::new(value, self.tail, None));
        match self.tail {
            Some(tail) => self.nodes[tail.index()].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the chain has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&TwoWayLinkedNode<T>> {
        self.nodes.get(id.index())
    }

    /// Walk the chain head to tail along `next` links.
    pub fn iter(&self) -> TwoWayIter<'_, T> {
        TwoWayIter {
            nodes: &self.nodes,
            cursor: self.head,
            backward: false,
        }
    }

    /// Walk the chain tail to head along `previous` links.
    pub fn iter_rev(&self) -> TwoWayIter<'_, T> {
        TwoWayIter {
            nodes: &self.nodes,
            cursor: self.tail,
            backward: true,
        }
    }
}

/// Iterator over a [`TwoWayChain`] in either direction.
pub struct TwoWayIter<'a, T> {
    nodes: &'a [TwoWayLinkedNode<T>],
    cursor: Option<NodeId>,
    backward: bool,
}

impl<'a, T> Iterator for TwoWayIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = &self.nodes[id.index()];
        self.cursor = if self.backward { node.previous } else { node.next };
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_yields_nothing() {
        let chain = Chain::<i64>::new();
        assert!(chain.is_empty());
        assert_eq!(chain.iter().count(), 0);
    }

    #[test]
    fn push_front_gives_most_recent_first_order() {
        let mut chain = Chain::new();
        for v in 1..=5 {
            chain.push_front(v);
        }
        let values: Vec<i64> = chain.iter().copied().collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
        assert_eq!(chain.len(), 5);
    }

    #[test]
    fn node_lookup_follows_links() {
        let mut chain = Chain::new();
        let first = chain.push_front("a");
        let second = chain.push_front("b");
        let head = chain.node(second).unwrap();
        assert_eq!(head.value, "b");
        assert_eq!(head.next, Some(first));
        assert_eq!(chain.node(first).unwrap().next, None);
    }

    #[test]
    fn two_way_forward_walk_is_insertion_order() {
        let mut chain = TwoWayChain::new();
        for v in 1..=5 {
            chain.push_back(v);
        }
        let forward: Vec<i64> = chain.iter().copied().collect();
        assert_eq!(forward, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn two_way_backward_walk_reverses_forward_walk() {
        let mut chain = TwoWayChain::new();
        for v in 1..=5 {
            chain.push_back(v);
        }
        let backward: Vec<i64> = chain.iter_rev().copied().collect();
        assert_eq!(backward, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn two_way_links_are_symmetric() {
        let mut chain = TwoWayChain::new();
        let a = chain.push_back(1i64);
        let b = chain.push_back(2i64);
        assert_eq!(chain.node(a).unwrap().next, Some(b));
        assert_eq!(chain.node(b).unwrap().previous, Some(a));
        assert_eq!(chain.node(a).unwrap().previous, None);
        assert_eq!(chain.node(b).unwrap().next, None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn backward_walk_is_reverse_of_forward(
                values in proptest::collection::vec(any::<i32>(), 0..32),
            ) {
                let mut chain = TwoWayChain::new();
                for &v in &values {
                    chain.push_back(v);
                }
                let forward: Vec<i32> = chain.iter().copied().collect();
                let mut backward: Vec<i32> = chain.iter_rev().copied().collect();
                backward.reverse();
                prop_assert_eq!(&forward, &values);
                prop_assert_eq!(backward, values);
            }
        }
    }
}
