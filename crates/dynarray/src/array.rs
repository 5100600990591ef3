//! The growable array type.
//!
//! [`DynamicArray`] tracks a logical length and an allocated capacity over a
//! single exclusively owned buffer. Appending to a full array triggers a
//! growth event that doubles the capacity and relocates the existing
//! elements; nothing else ever reallocates.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::config::ArrayConfig;
use crate::cursor::Cursor;
use crate::error::ArrayError;
use crate::raw::RawStorage;

/// A contiguous, heap-allocated, growable array.
///
/// Invariants:
/// - `len() <= capacity()`.
/// - Indices `[0, len())` hold live values; the rest of the capacity is
///   allocated but unused.
/// - The buffer is released exactly once, on drop or when replaced.
pub struct DynamicArray<T> {
    storage: RawStorage<T>,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default capacity of two slots.
    pub fn new() -> Self {
        Self::from_config(ArrayConfig::default())
    }

    /// Create an empty array with the configured starting capacity.
    pub fn from_config(config: ArrayConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Create an empty array with exactly `capacity` slots allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: RawStorage::with_slots(capacity),
        }
    }

    /// Like [`with_capacity`](Self::with_capacity), but reports allocator
    /// refusal instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            storage: RawStorage::try_with_slots(capacity)?,
        })
    }

    /// Move the contents out, leaving `self` empty with no buffer.
    ///
    /// The returned array owns the original buffer unchanged. `self` ends
    /// with `len() == 0` and `capacity() == 0` and stays usable: the next
    /// append allocates a fresh buffer.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            storage: std::mem::replace(&mut self.storage, RawStorage::unallocated()),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Alias for [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of allocated slots, used or not.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Append `value` at index `len()`, growing first if the array is full.
    ///
    /// # Panics
    ///
    /// Panics if doubling the capacity overflows `usize`. Allocation failure
    /// aborts, as with `Vec`.
    pub fn append(&mut self, value: T) {
        if self.storage.is_full() {
            let capacity = self.capacity();
            let Some(grown) = ArrayConfig::grown_capacity(capacity) else {
                panic!("{}", ArrayError::CapacityOverflow { capacity });
            };
            self.storage.relocate_into(RawStorage::with_slots(grown));
        }
        self.push_unchecked_growth(value);
    }

    /// Append `value`, reporting growth failure instead of panicking.
    ///
    /// On error the array is unchanged and `value` is dropped.
    pub fn try_append(&mut self, value: T) -> Result<(), ArrayError> {
        if self.storage.is_full() {
            let capacity = self.capacity();
            let grown = ArrayConfig::grown_capacity(capacity)
                .ok_or(ArrayError::CapacityOverflow { capacity })?;
            self.storage
                .relocate_into(RawStorage::try_with_slots(grown)?);
        }
        self.push_unchecked_growth(value);
        Ok(())
    }

    fn push_unchecked_growth(&mut self, value: T) {
        // Callers grow first, so a free slot always exists here.
        if self.storage.push_within_capacity(value).is_err() {
            unreachable!("append found no free slot after growth");
        }
    }

    /// Remove and return the last element. Capacity is unchanged.
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Drop every element in index order. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// A bounds-checked copy of the element at `index`.
    pub fn at(&self, index: usize) -> Result<T, ArrayError>
    where
        T: Clone,
    {
        self.get(index).cloned()
    }

    /// A bounds-checked reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len();
        self.storage
            .as_slice()
            .get(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// A bounds-checked mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len();
        self.storage
            .as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// The live elements `[0, len())`.
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// The live elements `[0, len())`, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Front-to-back traversal; also walks back-to-front via `rev()`.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable front-to-back traversal.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Cursor at index zero.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Cursor one past the last live element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len())
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Create an array holding `len` copies of `value`, with capacity `len`.
    pub fn filled(len: usize, value: T) -> Self {
        let mut array = Self::with_capacity(len);
        if len == 0 {
            return array;
        }
        for _ in 1..len {
            array.push_unchecked_growth(value.clone());
        }
        array.push_unchecked_growth(value);
        array
    }

    /// Create an array holding a copy of each element of `elements`, with
    /// capacity equal to its length.
    pub fn from_slice(elements: &[T]) -> Self {
        let mut array = Self::with_capacity(elements.len());
        for element in elements {
            array.push_unchecked_growth(element.clone());
        }
        array
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep copy with the source's capacity, not just its length.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for element in self.iter() {
            copy.push_unchecked_growth(element.clone());
        }
        copy
    }

    /// Release the current buffer and rebuild from `source` at its capacity.
    fn clone_from(&mut self, source: &Self) {
        self.storage = RawStorage::unallocated();
        *self = source.clone();
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with the [`ArrayError::IndexOutOfRange`] message if
    /// `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    /// Capacity equals the number of collected elements.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::from(elements)
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    /// Takes over the vector's buffer; capacity equals its length.
    fn from(elements: Vec<T>) -> Self {
        Self {
            storage: RawStorage::from_vec(elements),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(elements: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        for element in elements {
            array.push_unchecked_growth(element);
        }
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    /// Compares live elements only; capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
