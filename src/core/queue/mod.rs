use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex};

/// Capacity used by [`Queue::new`]
pub const DEFAULT_CAPACITY: usize = 8;

/// core queue structure: a FIFO over a buffer that doubles when full.
///
/// Occupied slots are always `[0, size)`; everything past `size` is `None`.
pub struct Queue<T> {
    slots: Box<[Option<T>]>,
    size: usize,
}

impl<T> Queue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty queue with room for `capacity` items before the first growth.
    /// A capacity of 0 is bumped to 1, otherwise doubling would never make room.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            size: 0,
        }
    }

    /// Append an item at the tail
    pub fn add(&mut self, item: T) {
        if self.size == self.slots.len() {
            self.grow();
        }
        self.slots[self.size] = Some(item);
        self.size += 1;
        // --post operation assertion
        debug_assert!(self.size <= self.slots.len(), "size must never exceed capacity");
    }

    /// Remove the head. `None` means the queue was empty.
    pub fn delete(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let head = self.slots[0].take();
        // slot 0 is now vacant; rotating moves it to the end of the occupied range
        self.slots[..self.size].rotate_left(1);
        self.size -= 1;

        // -- post op assertion: vacated slot is cleared
        debug_assert!(self.slots[self.size].is_none(), "vacated slot must be cleared");
        head
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of slots in the backing buffer
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Borrow the head without removing it
    pub fn peek(&self) -> Option<&T> {
        self.slots[..self.size].first().and_then(Option::as_ref)
    }

    /// Iterate front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.size].iter().flatten()
    }

    fn grow(&mut self) {
        let mut grown = empty_slots(self.slots.len() * 2);
        for (dst, src) in grown.iter_mut().zip(self.slots.iter_mut()) {
            *dst = src.take();
        }
        self.slots = grown;
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Shared handle for callers that need a queue across threads.
/// The queue does no locking of its own.
pub type SafeQueue<T> = Arc<Mutex<Queue<T>>>;
