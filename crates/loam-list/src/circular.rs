//! Circular singly-linked list with a sentinel header.
//!
//! One dedicated sentinel node serves as both head and tail marker, so
//! the structure is never "empty" in the null-pointer sense: the empty
//! list is the sentinel linked to itself, a deliberate degenerate
//! cycle. Traversal terminates by comparing the cursor's arena index
//! against the sentinel's — never by value, since the sentinel carries
//! no user data.

use loam_core::NodeId;

/// Arena index of the sentinel. Fixed at creation, never reassigned.
const SENTINEL: u32 = 0;

/// One arena slot: the held value (`None` only for the sentinel) and
/// the index of the next slot in the cycle.
#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    next: u32,
}

/// A circular singly-linked list headed by a sentinel node.
///
/// Stored as an arena of slots where slot 0 is the sentinel; the empty
/// list is encoded as `next[0] == 0`. Following `next` from the
/// sentinel always returns to the sentinel after visiting exactly the
/// logical elements, so every traversal terminates in finite steps.
///
/// [`add`](Self::add) splices immediately after the sentinel, giving
/// most-recently-added-first order, not insertion order.
#[derive(Debug)]
pub struct SentinelCircularList<T> {
    slots: Vec<Slot<T>>,
}

impl<T> SentinelCircularList<T> {
    /// Create an empty list: a lone sentinel linked to itself.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                value: None,
                next: SENTINEL,
            }],
        }
    }

    /// Add `value` at the logical front, immediately after the sentinel.
    ///
    /// Returns the new node's id. Ids stay valid for the list's
    /// lifetime; slots are never reclaimed.
    pub fn add(&mut self, value: T) -> NodeId {
        let id = self.slots.len() as u32;
        self.slots.push(Slot {
            value: Some(value),
            next: self.slots[SENTINEL as usize].next,
        });
        self.slots[SENTINEL as usize].next = id;
        NodeId(id)
    }

    /// Whether any element equals `value`.
    ///
    /// Walks from the slot after the sentinel; the loop-termination
    /// test is index identity against the sentinel, not a value
    /// comparison.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.slots[SENTINEL as usize].next;
        while cursor != SENTINEL {
            let slot = &self.slots[cursor as usize];
            if slot.value.as_ref() == Some(value) {
                return true;
            }
            cursor = slot.next;
        }
        false
    }

    /// Number of elements (the sentinel does not count).
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    /// Whether the cycle is just the sentinel linked to itself.
    pub fn is_empty(&self) -> bool {
        self.slots[SENTINEL as usize].next == SENTINEL
    }

    /// Walk the cycle once, sentinel excluded, most recent first.
    pub fn iter(&self) -> CircularIter<'_, T> {
        CircularIter {
            slots: &self.slots,
            cursor: self.slots[SENTINEL as usize].next,
        }
    }
}

impl<T> Default for SentinelCircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a [`SentinelCircularList`], most recently added first.
///
/// Ends when the cursor returns to the sentinel's index.
pub struct CircularIter<'a, T> {
    slots: &'a [Slot<T>],
    cursor: u32,
}

impl<'a, T> Iterator for CircularIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == SENTINEL {
            return None;
        }
        let slot = &self.slots[self.cursor as usize];
        self.cursor = slot.next;
        Some(
            slot.value
                .as_ref()
                .expect("non-sentinel slots always hold a value"),
        )
    }
}
