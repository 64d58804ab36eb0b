//! Fixed-capacity circular buffer with overwrite-on-full semantics.
//!
//! The backing `Vec` is allocated once with the requested capacity and never
//! reallocates. Logical index `i` lives in slot `(start + i) % capacity`;
//! once the buffer is full every push overwrites the oldest slot and advances
//! `start` by one.
//!
//! ```rust
//! use quickprims::RingBuffer;
//!
//! let mut ring = RingBuffer::new(3).unwrap();
//! for v in 1..=5 {
//!     ring.push(v);
//! }
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [3, 4, 5]);
//! assert!(ring.get(3).is_none());
//! ```
use alloc::vec::Vec;
use core::{iter::FusedIterator, ops::Index};

use crate::error::{InvalidArgument, OutOfRange};

/// A circular buffer that evicts its oldest element when pushed past
/// capacity.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    start: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::RingCapacity`] when `capacity <= 1`.
    pub fn new(capacity: usize) -> Result<Self, InvalidArgument> {
        if capacity <= 1 {
            return Err(InvalidArgument::RingCapacity(capacity));
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            start: 0,
            len: 0,
        })
    }

    /// Appends `item`, evicting the oldest element if the buffer is full.
    pub fn push(&mut self, item: T) {
        if self.len == self.capacity {
            self.slots[self.start] = item;
            self.start = (self.start + 1) % self.capacity;
        } else {
            let slot = (self.start + self.len) % self.capacity;
            // Slots past `slots.len()` have never been written.
            if slot < self.slots.len() {
                self.slots[slot] = item;
            } else {
                self.slots.push(item);
            }
            self.len += 1;
        }

        #[cfg(feature = "fuzzing")]
        self.check_invariants();
    }

    /// Returns the `index`-th element in insertion order, `0` being the
    /// oldest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self.slots[(self.start + index) % self.capacity])
        } else {
            None
        }
    }

    /// Like [`get`](Self::get), but reports the failed access.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.get(index).ok_or(OutOfRange {
            index,
            len: self.len,
        })
    }

    /// The oldest live element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// The most recently pushed element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Forgets every element.
    ///
    /// Stored values are not dropped until they are overwritten by later
    /// pushes; they are unreachable through the buffer in the meantime.
    pub fn clear(&mut self) {
        self.start = 0;
        self.len = 0;
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when no element is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` once the next push will evict an element.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Maximum number of live elements, fixed at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            front: 0,
            back: self.len,
        }
    }

    #[cfg(feature = "fuzzing")]
    fn check_invariants(&self) {
        assert!(self.len <= self.capacity);
        assert!(self.start < self.capacity);
        assert!(self.slots.len() <= self.capacity);
        assert!(self.len <= self.slots.len());
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.try_get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`RingBuffer`], oldest first.
#[derive(Debug)]
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.ring.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.ring.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
