//! Growable circular buffer
//!
//! Logical index `i` (0 = oldest) lives at physical slot `(head + i) % capacity`.
//! Inserting into a full ring doubles the storage and re-lays the values out
//! in logical order starting at slot 0.

use crate::error::StatsError;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Initial capacity used when none is specified
pub const DEFAULT_CAPACITY: usize = 100;

/// Capacity multiplier applied on overflow
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Growable FIFO ring buffer with logical-index reads
///
/// `push_back` is amortized O(1): a full ring grows by the growth factor
/// before the write. `pop_front` is O(1) and never shrinks the storage.
///
/// # Example
///
/// ```
/// use windowstats::buffer::RingBuffer;
///
/// let mut ring = RingBuffer::with_capacity(2);
/// ring.push_back(1.0).unwrap();
/// ring.push_back(2.0).unwrap();
/// ring.push_back(3.0).unwrap(); // grows to 4
///
/// assert_eq!(ring.capacity(), 4);
/// assert_eq!(ring.pop_front(), 1.0);
/// assert_eq!(ring.peek_logical(0), 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<T: Copy + Default> {
    /// Physical storage, always `capacity` slots long
    slots: Vec<T>,
    /// Physical index of the oldest value
    head: usize,
    /// Physical index of the next write
    tail: usize,
    /// Number of live values
    len: usize,
    /// Capacity multiplier on overflow
    growth_factor: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    /// Create an empty ring with room for `capacity` values
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or the allocation fails.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(ring) => ring,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create an empty ring, reporting allocation failure instead of aborting
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StatsError> {
        assert!(capacity > 0, "capacity must be positive");

        Ok(Self {
            slots: allocate(capacity)?,
            head: 0,
            tail: 0,
            len: 0,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        })
    }

    /// Set the capacity multiplier used when the ring overflows
    ///
    /// # Panics
    ///
    /// Panics if `factor` is less than 2.
    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        assert!(factor >= 2, "growth factor must be at least 2");
        self.growth_factor = factor;
        self
    }

    /// Number of values currently stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of values the ring holds before the next growth
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    #[inline]
    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.slots.len()
    }

    /// Value at logical position `index` (0 = oldest)
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn peek_logical(&self, index: usize) -> T {
        assert!(
            index < self.len,
            "logical index {} out of bounds for ring of length {}",
            index,
            self.len
        );
        self.slots[self.physical(index)]
    }

    /// Checked variant of [`peek_logical`](Self::peek_logical)
    pub fn get(&self, index: usize) -> Option<T> {
        if index < self.len {
            Some(self.slots[self.physical(index)])
        } else {
            None
        }
    }

    /// Oldest value
    pub fn front(&self) -> Option<T> {
        self.get(0)
    }

    /// Newest value
    pub fn back(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Append `value` as the newest element, growing first if full
    ///
    /// On `OutOfMemory` the ring is left exactly as it was.
    pub fn push_back(&mut self, value: T) -> Result<(), StatsError> {
        if self.is_full() {
            self.grow()?;
        }

        self.slots[self.tail] = value;
        self.tail = (self.tail + 1) % self.slots.len();
        self.len += 1;
        Ok(())
    }

    /// Remove and return the oldest value
    ///
    /// Popping an empty ring is a no-op returning `T::default()`.
    pub fn pop_front(&mut self) -> T {
        if self.len == 0 {
            return T::default();
        }

        let value = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        value
    }

    /// Drop all values, keeping the allocation
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            front: 0,
            back: self.len,
        }
    }

    /// Copy the values out in logical order
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Memory held by the ring in bytes
    pub fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.slots.capacity() * core::mem::size_of::<T>()
    }

    fn grow(&mut self) -> Result<(), StatsError> {
        let old_capacity = self.slots.len();
        let new_capacity =
            old_capacity
                .checked_mul(self.growth_factor)
                .ok_or(StatsError::OutOfMemory {
                    requested: usize::MAX,
                })?;

        let mut slots = allocate(new_capacity)?;
        for (slot, value) in slots.iter_mut().zip(self.iter()) {
            *slot = value;
        }

        self.slots = slots;
        self.head = 0;
        self.tail = self.len;

        tracing::debug!(
            old_capacity,
            new_capacity,
            len = self.len,
            "ring buffer grew"
        );
        Ok(())
    }
}

/// Reserve exactly `capacity` slots without aborting on failure
fn allocate<T: Copy + Default>(capacity: usize) -> Result<Vec<T>, StatsError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| StatsError::OutOfMemory {
            requested: capacity,
        })?;
    slots.resize(capacity, T::default());
    Ok(slots)
}

/// Iterator over a [`RingBuffer`] in logical order
#[derive(Clone, Debug)]
pub struct Iter<'a, T: Copy + Default> {
    ring: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<T: Copy + Default> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let value = self.ring.peek_logical(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Copy + Default> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.ring.peek_logical(self.back))
    }
}

impl<T: Copy + Default> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Copy + Default> IntoIterator for &'a RingBuffer<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut ring = RingBuffer::with_capacity(4);
        assert!(ring.is_empty());

        for v in [1.0, 2.0, 3.0] {
            ring.push_back(v).unwrap();
        }

        assert_eq!(ring.len(), 3);
        assert_eq!(ring.front(), Some(1.0));
        assert_eq!(ring.back(), Some(3.0));
        assert_eq!(ring.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fifo_order() {
        let mut ring = RingBuffer::with_capacity(3);
        ring.push_back(1.0).unwrap();
        ring.push_back(2.0).unwrap();

        assert_eq!(ring.pop_front(), 1.0);
        ring.push_back(3.0).unwrap();
        ring.push_back(4.0).unwrap();

        // head has wrapped past the end of storage
        assert_eq!(ring.capacity(), 3);
        assert_eq!(ring.to_vec(), vec![2.0, 3.0, 4.0]);
        assert_eq!(ring.pop_front(), 2.0);
        assert_eq!(ring.pop_front(), 3.0);
        assert_eq!(ring.pop_front(), 4.0);
        assert!(ring.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut ring: RingBuffer<f64> = RingBuffer::with_capacity(2);
        assert_eq!(ring.pop_front(), 0.0);
        assert_eq!(ring.len(), 0);

        // the no-op pop must not disturb later pushes
        ring.push_back(7.0).unwrap();
        assert_eq!(ring.peek_logical(0), 7.0);
    }

    #[test]
    fn test_growth_preserves_order() {
        let mut ring = RingBuffer::with_capacity(DEFAULT_CAPACITY);
        for i in 0..=DEFAULT_CAPACITY {
            ring.push_back(i as f64).unwrap();
        }

        assert_eq!(ring.capacity(), DEFAULT_CAPACITY * 2);
        assert_eq!(ring.len(), DEFAULT_CAPACITY + 1);
        for i in 0..ring.len() {
            assert_eq!(ring.peek_logical(i), i as f64);
        }
    }

    #[test]
    fn test_growth_when_wrapped() {
        let mut ring = RingBuffer::with_capacity(4);
        for v in [1.0, 2.0, 3.0, 4.0] {
            ring.push_back(v).unwrap();
        }
        ring.pop_front();
        ring.pop_front();
        ring.push_back(5.0).unwrap();
        ring.push_back(6.0).unwrap();

        // full with head in the middle of storage
        assert!(ring.is_full());
        ring.push_back(7.0).unwrap();

        assert_eq!(ring.capacity(), 8);
        assert_eq!(ring.to_vec(), vec![3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(ring.pop_front(), 3.0);
    }

    #[test]
    fn test_custom_growth_factor() {
        let mut ring = RingBuffer::with_capacity(2).with_growth_factor(3);
        for v in [1.0, 2.0, 3.0] {
            ring.push_back(v).unwrap();
        }
        assert_eq!(ring.capacity(), 6);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let mut ring = RingBuffer::with_capacity(2);
        ring.push_back(1.0).unwrap();
        assert_eq!(ring.get(0), Some(1.0));
        assert_eq!(ring.get(1), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_peek_out_of_bounds() {
        let ring: RingBuffer<f64> = RingBuffer::with_capacity(2);
        ring.peek_logical(0);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity() {
        let _ring: RingBuffer<f64> = RingBuffer::with_capacity(0);
    }

    #[test]
    fn test_allocation_failure() {
        let result = RingBuffer::<f64>::try_with_capacity(usize::MAX);
        assert!(matches!(result, Err(StatsError::OutOfMemory { .. })));
    }

    #[test]
    fn test_failed_growth_leaves_ring_unchanged() {
        let mut ring = RingBuffer::with_capacity(2).with_growth_factor(usize::MAX);
        ring.push_back(1.0).unwrap();
        ring.push_back(3.0).unwrap();

        let err = ring.push_back(5.0).unwrap_err();
        assert!(matches!(err, StatsError::OutOfMemory { .. }));
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.capacity(), 2);
        assert_eq!(ring.to_vec(), vec![1.0, 3.0]);

        // still usable after the failure
        assert_eq!(ring.pop_front(), 1.0);
        ring.push_back(5.0).unwrap();
        assert_eq!(ring.to_vec(), vec![3.0, 5.0]);
    }

    #[test]
    fn test_reverse_iter() {
        let mut ring = RingBuffer::with_capacity(3);
        for v in [1, 2, 3] {
            ring.push_back(v).unwrap();
        }
        let reversed: Vec<i32> = ring.iter().rev().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
        assert_eq!(ring.iter().len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut ring = RingBuffer::with_capacity(2);
        ring.push_back(1.0).unwrap();
        ring.push_back(2.0).unwrap();
        ring.push_back(3.0).unwrap();
        ring.clear();

        assert!(ring.is_empty());
        assert_eq!(ring.capacity(), 4);
        assert_eq!(ring.back(), None);
    }
}
