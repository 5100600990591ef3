//! Array configuration parameters.

/// Configuration for a freshly constructed [`DynamicArray`](crate::DynamicArray).
///
/// Only the starting capacity is configurable. The growth factor is fixed:
/// every growth event doubles the capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 2. Zero is allowed; the first append then allocates
    /// [`DEFAULT_INITIAL_CAPACITY`](Self::DEFAULT_INITIAL_CAPACITY) slots.
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Default starting capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 2;

    /// Left-shift applied to the capacity on each growth event.
    pub const GROWTH_SHIFT: u32 = 1;

    /// Create a config with the given starting capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Capacity after one growth event starting from `current`.
    ///
    /// Returns `None` if the doubled capacity does not fit in `usize`.
    /// An unallocated buffer (`current == 0`) restarts at
    /// [`DEFAULT_INITIAL_CAPACITY`](Self::DEFAULT_INITIAL_CAPACITY).
    pub fn grown_capacity(current: usize) -> Option<usize> {
        if current == 0 {
            return Some(Self::DEFAULT_INITIAL_CAPACITY);
        }
        // checked_shl only rejects oversized shift amounts, not lost bits.
        if current.leading_zeros() < Self::GROWTH_SHIFT {
            return None;
        }
        Some(current << Self::GROWTH_SHIFT)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_two() {
        assert_eq!(ArrayConfig::default().initial_capacity, 2);
    }

    #[test]
    fn growth_doubles() {
        assert_eq!(ArrayConfig::grown_capacity(2), Some(4));
        assert_eq!(ArrayConfig::grown_capacity(3), Some(6));
        assert_eq!(ArrayConfig::grown_capacity(1024), Some(2048));
    }

    #[test]
    fn zero_restarts_at_default() {
        assert_eq!(
            ArrayConfig::grown_capacity(0),
            Some(ArrayConfig::DEFAULT_INITIAL_CAPACITY)
        );
    }

    #[test]
    fn overflow_is_detected() {
        assert_eq!(ArrayConfig::grown_capacity(usize::MAX), None);
        assert_eq!(ArrayConfig::grown_capacity(usize::MAX / 2 + 1), None);
        assert_eq!(
            ArrayConfig::grown_capacity(usize::MAX / 2),
            Some(usize::MAX - 1)
        );
    }
}
