use log::{debug, trace};

use crate::error::HeapError;

pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

pub fn parent(index: usize) -> usize {
    (index - 1) / 2
}

pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// A priority queue of integers where the smallest value has the highest priority.
///
/// Backed by a flat vector treated as an implicit binary tree. The vector is
/// always exactly `capacity` long; only the first `size` slots are live, the
/// rest are stale leftovers from earlier insertions or zero-filled on growth.
/// Capacity doubles when full and never shrinks.
#[derive(Debug, Clone)]
pub struct Heap {
    storage: Vec<i32>,
    size: usize,
}

impl Heap {
    pub fn new() -> Self {
        Heap {
            storage: vec![0; DEFAULT_INITIAL_CAPACITY],
            size: 0,
        }
    }

    /// Create an empty heap with room for `capacity` values before the first growth.
    /// A capacity of zero is rejected, since doubling it would never make room.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity(capacity));
        }
        Ok(Heap {
            storage: vec![0; capacity],
            size: 0,
        })
    }

    pub fn count(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn peek(&self) -> Option<i32> {
        if self.is_empty() {
            None
        } else {
            Some(self.storage[0])
        }
    }

    /// Copy of the live elements, in storage (not sorted) order
    pub fn snapshot(&self) -> Vec<i32> {
        self.storage[..self.size].to_vec()
    }

    /// Copy of the whole backing storage, including stale slots past `count()`
    pub fn snapshot_storage(&self) -> Vec<i32> {
        self.storage.clone()
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        debug!(
            "heap full at {} elements, growing storage {} -> {}",
            self.size, old_capacity, new_capacity
        );
        let mut grown = vec![0; new_capacity];
        grown[..old_capacity].copy_from_slice(&self.storage);
        self.storage = grown;
    }

    fn sift_up(&mut self, mut index: usize) {
        /* Move the element at `index` toward the root while it is smaller than its parent */
        while index > 0 {
            let parent_index = parent(index);
            if self.storage[index] >= self.storage[parent_index] {
                break;
            }
            self.storage.swap(index, parent_index);
            index = parent_index;
        }
    }

    fn sift_down(&mut self, mut index: usize, bound: usize) {
        /* Move the element at `index` toward the leaves; children at or past `bound` are absent */
        loop {
            let left = left_child(index);
            if left >= bound {
                break;
            }
            let right = right_child(index);
            // a missing right child never wins
            let smaller = if right < bound && self.storage[right] < self.storage[left] {
                right
            } else {
                left
            };
            if self.storage[index] <= self.storage[smaller] {
                break;
            }
            self.storage.swap(index, smaller);
            index = smaller;
        }
    }

    pub fn insert(&mut self, value: i32) {
        if self.size == self.capacity() {
            self.grow();
        }
        self.storage[self.size] = value;
        self.size += 1;
        self.sift_up(self.size - 1);
    }

    /// Remove and return the smallest value.
    /// Returns `HeapError::Empty` without touching the heap if there is nothing to remove.
    pub fn extract_min(&mut self) -> Result<i32, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        let min = self.storage[0];
        self.storage[0] = self.storage[self.size - 1];
        // The vacated last slot still holds a copy of the moved value, so walking
        // with the old size never swaps anything into it.
        self.sift_down(0, self.size);
        self.size -= 1;
        trace!("extracted {}, {} remaining", min, self.size);
        Ok(min)
    }
}

impl Default for Heap {
    fn default() -> Self {
        Heap::new()
    }
}

impl From<Vec<i32>> for Heap {
    fn from(mut v: Vec<i32>) -> Self {
        let size = v.len();
        let capacity = size.max(DEFAULT_INITIAL_CAPACITY);
        v.resize(capacity, 0);
        let mut heap = Heap { storage: v, size };
        for i in (0..size / 2).rev() {
            heap.sift_down(i, size);
        }
        heap
    }
}

impl Extend<i32> for Heap {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
