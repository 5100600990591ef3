//! Low-level slot storage for [`DynamicArray`](crate::DynamicArray).
//!
//! This is the only module in the workspace allowed to contain `unsafe`
//! code. [`RawStorage`] owns a boxed slice of `MaybeUninit<T>` slots and
//! the length of its initialised prefix. Every public operation keeps the
//! invariant that slots `[0, len)` hold live values and slots
//! `[len, capacity)` are uninitialised. Each `unsafe` block carries a
//! mandatory `// SAFETY:` comment and is intended to run under Miri.
//!
//! Growth relocates elements with a single non-overlapping copy. A Rust move
//! is a bitwise relocation for every `T`, so there is no separate
//! element-by-element path for types with drop glue: the source prefix is
//! simply forgotten after the copy.

#![allow(unsafe_code)]

use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

use crate::error::ArrayError;

/// Exclusively owned buffer of `capacity` slots with an initialised prefix.
pub(crate) struct RawStorage<T> {
    /// Backing slots. Never resized in place; growth swaps in a new box.
    slots: Box<[MaybeUninit<T>]>,
    /// Number of initialised slots at the front of `slots`.
    len: usize,
}

impl<T> RawStorage<T> {
    /// Storage with no slots. Does not allocate.
    pub(crate) fn unallocated() -> Self {
        Self::with_slots(0)
    }

    /// Allocate `capacity` uninitialised slots.
    ///
    /// Allocation failure follows the global allocator's convention
    /// (abort), the same as `Vec::with_capacity`.
    pub(crate) fn with_slots(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    /// Allocate `capacity` uninitialised slots, reporting allocator refusal.
    pub(crate) fn try_with_slots(capacity: usize) -> Result<Self, ArrayError> {
        let mut slots: Vec<MaybeUninit<T>> = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: capacity,
            })?;
        // SAFETY: the reserve above guarantees `capacity` slots, and a
        // `MaybeUninit<T>` slot needs no initialisation.
        unsafe { slots.set_len(capacity) };
        Ok(Self {
            slots: slots.into_boxed_slice(),
            len: 0,
        })
    }

    /// Adopt the buffer of `elements` as a full storage.
    ///
    /// Capacity equals `elements.len()`. The values are not copied; any
    /// spare capacity of the vector is released.
    pub(crate) fn from_vec(elements: Vec<T>) -> Self {
        let live: Box<[T]> = elements.into_boxed_slice();
        let len = live.len();
        let raw = Box::into_raw(live) as *mut [MaybeUninit<T>];
        // SAFETY: `raw` comes from `Box::into_raw` and `MaybeUninit<T>` has
        // the layout of `T`, so the box is rebuilt over the same allocation.
        // All `len` slots hold live values.
        let slots = unsafe { Box::from_raw(raw) };
        Self { slots, len }
    }

    /// Number of initialised slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether every slot is initialised.
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Write `value` into the first free slot.
    ///
    /// Hands the value back if no free slot remains.
    pub(crate) fn push_within_capacity(&mut self, value: T) -> Result<(), T> {
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                slot.write(value);
                self.len += 1;
                Ok(())
            }
            None => Err(value),
        }
    }

    /// Move the last initialised value out.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was inside the initialised prefix until the
        // decrement above. It is now outside it, so this is the only read.
        Some(unsafe { self.slots[self.len].assume_init_read() })
    }

    /// Drop every initialised value. Capacity is kept.
    pub(crate) fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // Shrink first so a panicking destructor cannot lead to a double drop.
        self.len = 0;
        // SAFETY: `live` covers the former initialised prefix, which is no
        // longer reachable through `self`, so each value is dropped once.
        unsafe { ptr::drop_in_place(live) }
    }

    /// The initialised prefix.
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: slots `[0, len)` are initialised and `MaybeUninit<T>` has
        // the layout of `T`. The borrow is tied to `self`.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }

    /// The initialised prefix, mutably.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; the exclusive borrow of `self` rules out
        // aliasing.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Move every initialised value into `target` and adopt its slots.
    ///
    /// The old slots are released without running any destructor.
    ///
    /// # Panics
    ///
    /// Panics if `target` is not empty or has fewer slots than `self.len()`.
    pub(crate) fn relocate_into(&mut self, mut target: RawStorage<T>) {
        assert!(
            target.len == 0 && target.capacity() >= self.len,
            "relocation target of {} slots cannot hold {} elements",
            target.capacity(),
            self.len,
        );
        // SAFETY: `target` owns a separate allocation with at least `len`
        // free slots. After the copy the values belong to `target`, and
        // zeroing `self.len` forgets the source copies before the old slots
        // are released.
        unsafe {
            ptr::copy_nonoverlapping(self.slots.as_ptr(), target.slots.as_mut_ptr(), self.len);
        }
        target.len = self.len;
        self.len = 0;
        *self = target;
    }
}

#[cfg(test)]
impl RawStorage<()> {
    /// Storage of `capacity` unit slots, all initialised.
    ///
    /// Units carry no data, so this reaches capacities no real buffer can.
    pub(crate) fn saturated_units(capacity: usize) -> Self {
        let mut storage = Self::with_slots(capacity);
        storage.len = capacity;
        storage
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
