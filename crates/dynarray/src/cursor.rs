//! Random-access positions over an array's live elements.
//!
//! A [`Cursor`] is obtained from [`DynamicArray::begin`] or
//! [`DynamicArray::end`] and holds a position in `[0, len]`. The end
//! position dereferences to nothing. Because a cursor borrows the array,
//! anything that would reallocate or move the buffer (growth, assignment,
//! drop) is rejected by the borrow checker while the cursor is alive.
//!
//! [`DynamicArray::begin`]: crate::DynamicArray::begin
//! [`DynamicArray::end`]: crate::DynamicArray::end

use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use crate::DynamicArray;

/// A position within the live elements of a [`DynamicArray`].
pub struct Cursor<'a, T> {
    array: &'a DynamicArray<T>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(array: &'a DynamicArray<T>, position: usize) -> Self {
        debug_assert!(position <= array.len());
        Self { array, position }
    }

    /// The element under the cursor, or `None` at the end position.
    pub fn get(&self) -> Option<&'a T> {
        self.array.as_slice().get(self.position)
    }

    /// Index of the cursor within the array.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor sits one past the last element.
    pub fn is_end(&self) -> bool {
        self.position == self.array.len()
    }

    /// Move one slot towards the end.
    ///
    /// Returns `false` and leaves the cursor in place if it is already at
    /// the end position.
    pub fn step_forward(&mut self) -> bool {
        if self.is_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Move one slot towards the front.
    ///
    /// Returns `false` and leaves the cursor in place if it is already at
    /// position zero.
    pub fn step_back(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// A cursor `delta` slots away, or `None` if that leaves `[0, len]`.
    pub fn offset_by(&self, delta: isize) -> Option<Self> {
        let target = self.position.checked_add_signed(delta)?;
        (target <= self.array.len()).then(|| Self::new(self.array, target))
    }

    /// Signed number of steps from `self` to `other`.
    ///
    /// `None` when the cursors belong to different arrays.
    pub fn distance_to(&self, other: &Self) -> Option<isize> {
        if !self.same_array(other) {
            return None;
        }
        let to = isize::try_from(other.position).ok()?;
        let from = isize::try_from(self.position).ok()?;
        Some(to - from)
    }

    // Slice addresses collide for zero-sized elements; array addresses don't.
    fn same_array(&self, other: &Self) -> bool {
        ptr::eq(self.array, other.array)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_array(other) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_array(other)
            .then(|| self.position.cmp(&other.position))
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.array.len())
            .field("current", &self.get())
            .finish()
    }
}
