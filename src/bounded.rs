//! Fixed-capacity containers shared by stations and vehicles.

/// A sequence that never holds more than `limit` items.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounded<T> {
    limit: usize,
    items: Vec<T>,
}

impl<T> Bounded<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            items: Vec::with_capacity(limit),
        }
    }

    /// Appends `item`, handing it back when the sequence is already full.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Keeps only the items matching `keep` and returns how many were dropped.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(keep);
        before - self.items.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

/// A count kept within `0..=capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatCounter {
    capacity: u32,
    count: u32,
}

impl SeatCounter {
    pub fn new(capacity: u32) -> Self {
        Self { capacity, count: 0 }
    }

    pub fn try_increment(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.count += 1;
        true
    }

    pub fn try_decrement(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.count -= 1;
        true
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn remaining(&self) -> u32 {
        self.capacity - self.count
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
