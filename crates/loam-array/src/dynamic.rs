//! Growable array with amortized-constant push.
//!
//! A [`DynamicArray`] is a count/capacity pair over a
//! [`FixedArray`]`<Option<T>>` backing. Slots below `count` always hold
//! `Some`; slots from `count` to `capacity` are dead (`None`). Capacity
//! starts at one and only ever grows, by doubling, through an explicit
//! reallocate-and-copy step gated by a capacity check at each insertion
//! point — growth is never hidden inside indexing.

use loam_core::ContainerError;

use crate::fixed::FixedArray;

/// A growable sequence with amortized O(1) push via capacity doubling.
///
/// Over a run of N pushes starting from capacity one, total element-copy
/// work is O(N): each doubling copies `count` elements, and the doubling
/// sizes form a geometric series. Capacity never shrinks, not even on
/// removal.
#[derive(Debug)]
pub struct DynamicArray<T> {
    /// Number of logically present elements; `count <= capacity`.
    count: usize,
    /// Backing storage; its length is the capacity.
    storage: FixedArray<Option<T>>,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with capacity one.
    pub fn new() -> Self {
        Self {
            count: 0,
            storage: FixedArray::from_fn(1, |_| None)
                .expect("capacity 1 is a valid size"),
        }
    }

    /// Number of logically present elements.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no elements are present.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of allocated slots. Always a power of two, never less
    /// than `len()`.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Get a shared reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] unless `index < len()`.
    /// The bound is the live count, not the capacity.
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        if index >= self.count {
            return Err(ContainerError::IndexOutOfRange {
                index,
                bound: self.count,
            });
        }
        let slot = self.storage.get(index)?;
        Ok(slot.as_ref().expect("slots below count always hold a value"))
    }

    /// Append `value` after the last element, growing if full.
    pub fn push(&mut self, value: T) {
        if self.count == self.capacity() {
            self.grow(self.capacity() * 2);
        }
        self.storage.slots_mut()[self.count] = Some(value);
        self.count += 1;
    }

    /// Insert `value` at `index`, shifting `[index, len())` one slot
    /// rightward. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] if `index > len()`.
    /// On error the array is unchanged; bounds are validated before any
    /// capacity growth.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        if index > self.count {
            return Err(ContainerError::IndexOutOfRange {
                index,
                bound: self.count + 1,
            });
        }
        if self.count == self.capacity() {
            self.grow(self.capacity() * 2);
        }
        let slots = self.storage.slots_mut();
        // Shift the rightmost element first so nothing is overwritten.
        for j in (index..self.count).rev() {
            slots[j + 1] = slots[j].take();
        }
        slots[index] = Some(value);
        self.count += 1;
        Ok(())
    }

    /// Remove the first element equal to `value`, shifting later
    /// elements leftward to close the gap. The vacated trailing slot is
    /// cleared; capacity is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ValueNotFound`] if no element matches,
    /// leaving the array unchanged.
    pub fn remove(&mut self, value: &T) -> Result<(), ContainerError>
    where
        T: PartialEq,
    {
        let slots = self.storage.slots_mut();
        for k in 0..self.count {
            if slots[k].as_ref() == Some(value) {
                for j in k..self.count - 1 {
                    slots[j] = slots[j + 1].take();
                }
                slots[self.count - 1] = None;
                self.count -= 1;
                return Ok(());
            }
        }
        Err(ContainerError::ValueNotFound)
    }

    /// Iterate over the live elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.storage.iter().take(self.count).filter_map(Option::as_ref)
    }

    /// Memory usage of the backing storage in bytes.
    ///
    /// Grows in doubling steps as elements are pushed.
    pub fn memory_bytes(&self) -> usize {
        self.storage.memory_bytes()
    }

    /// Reallocate the backing storage to `new_capacity`, moving the
    /// `count` live elements across in order and releasing the old
    /// storage.
    fn grow(&mut self, new_capacity: usize) {
        let mut next = FixedArray::from_fn(new_capacity, |_| None)
            .expect("doubled capacity is never zero");
        for (dst, src) in next
            .slots_mut()
            .iter_mut()
            .zip(self.storage.slots_mut().iter_mut().take(self.count))
        {
            *dst = src.take();
        }
        self.storage = next;
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
