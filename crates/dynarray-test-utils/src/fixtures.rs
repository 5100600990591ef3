//! Reusable element fixtures.
//!
//! - [`DropLedger`] / [`Tracked`]: count destructor runs.
//! - [`Opaque`]: not `Clone`; proves an operation only moves values.
//! - [`names`]: the canonical three-string sequence.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The canonical sequence used by construction and traversal tests.
pub const NAMES: [&str; 3] = ["jamie", "oliver", "twist"];

/// [`NAMES`] as owned strings.
pub fn names() -> Vec<String> {
    NAMES.iter().map(|s| s.to_string()).collect()
}

/// Shared drop counter for [`Tracked`] values.
#[derive(Clone, Default)]
pub struct DropLedger {
    drops: Arc<AtomicUsize>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so that dropping it increments this ledger.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            drops: Arc::clone(&self.drops),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// A value that reports its own drop to a [`DropLedger`].
///
/// Clones report to the same ledger, so a clone that is dropped counts too.
pub struct Tracked<T> {
    value: T,
    drops: Arc<AtomicUsize>,
}

impl<T> Tracked<T> {
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            drops: Arc::clone(&self.drops),
        }
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

/// An element type with no `Clone` impl.
#[derive(Debug, PartialEq, Eq)]
pub struct Opaque(pub u64);
