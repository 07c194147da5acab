//! Contiguous fixed-length storage.
//!
//! A [`FixedArray`] is a fixed-length sequence of element slots, created
//! with a capacity and a fill value. Every slot holds a defined value at
//! all times; there is no internal resizing. This is the storage basis
//! for [`FixedArray2D`](crate::FixedArray2D) and
//! [`DynamicArray`](crate::DynamicArray).

use loam_core::ContainerError;

/// A contiguous, fixed-length sequence of element slots.
///
/// The length is immutable after construction and always greater than
/// zero. Indexed access is bounds-checked and reported as
/// [`ContainerError::IndexOutOfRange`]; there is no clamping and no
/// silent truncation.
#[derive(Clone, Debug)]
pub struct FixedArray<T> {
    /// Backing storage. Allocated to full length at creation and never
    /// reallocated; the slice itself never escapes the crate.
    slots: Vec<T>,
}

impl<T> FixedArray<T> {
    /// Create a new array of `len` slots, each initialised to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidSize`] if `len` is zero.
    pub fn new(len: usize, fill: T) -> Result<Self, ContainerError>
    where
        T: Clone,
    {
        if len == 0 {
            return Err(ContainerError::InvalidSize { requested: len });
        }
        Ok(Self {
            slots: vec![fill; len],
        })
    }

    /// Create a new array of `len` slots, initialising slot `i` to `f(i)`.
    ///
    /// Internal constructor for sibling containers that need a fill value
    /// the public bound cannot express (e.g. `None` without `T: Clone`).
    pub(crate) fn from_fn(
        len: usize,
        f: impl FnMut(usize) -> T,
    ) -> Result<Self, ContainerError> {
        if len == 0 {
            return Err(ContainerError::InvalidSize { requested: len });
        }
        Ok(Self {
            slots: (0..len).map(f).collect(),
        })
    }

    /// Number of slots. Constant for the array's lifetime.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a `FixedArray` has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get a shared reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        let bound = self.slots.len();
        self.slots
            .get(index)
            .ok_or(ContainerError::IndexOutOfRange { index, bound })
    }

    /// Get a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] unless `index < len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let bound = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(ContainerError::IndexOutOfRange { index, bound })
    }

    /// Overwrite the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] unless `index < len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Overwrite every slot with `value`. O(len).
    pub fn clear(&mut self, value: T)
    where
        T: Clone,
    {
        self.slots.fill(value);
    }

    /// Iterate over the elements in index order.
    ///
    /// The iterator is read-only and one-shot; requesting a fresh one
    /// restarts from index zero.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<T>()
    }

    /// Mutable view of the backing slots, for sibling containers only.
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}
