//! Fixed-capacity circular FIFO
//!
//! Elements are written at `head % capacity` and read from
//! `tail % capacity`. Both counters are 64-bit running totals, so
//! `head - tail` is the number of live elements even after the indices
//! have wrapped around the storage many times.

use core::fmt;
use core::marker::PhantomData;

use crate::error::FifoError;
use crate::storage::Storage;

/// Ring buffer with inline array storage
pub type ArrayRingBuffer<T, const N: usize> = RingBuffer<T, [T; N]>;

/// Ring buffer over a borrowed slice (e.g. a `static mut` link buffer)
pub type SliceRingBuffer<'a, T> = RingBuffer<T, &'a mut [T]>;

/// Fixed-capacity FIFO over caller-provided storage
///
/// Single owner, no internal locking. A producer in interrupt context and a
/// consumer in the main loop must share it through an external mutex.
pub struct RingBuffer<T, S> {
    storage: S,
    /// Capacity, cached from the storage length at construction
    capacity: usize,
    /// Elements ever pushed
    head: u64,
    /// Elements ever removed (popped, overwritten or flushed)
    tail: u64,
    _marker: PhantomData<T>,
}

impl<T: Copy, S: Storage<T>> RingBuffer<T, S> {
    /// Create an empty buffer over `storage`
    ///
    /// The capacity is the storage length. Empty storage is rejected with
    /// [`FifoError::InvalidCapacity`].
    pub fn new(storage: S) -> Result<Self, FifoError> {
        let capacity = storage.as_slice().len();
        if capacity == 0 {
            return Err(FifoError::InvalidCapacity);
        }

        Ok(Self {
            storage,
            capacity,
            head: 0,
            tail: 0,
            _marker: PhantomData,
        })
    }

    /// Release the buffer and hand the storage back
    ///
    /// Counters are reset before the storage is returned. Consuming `self`
    /// makes a second release impossible; dropping the buffer is an
    /// equivalent release when the storage is not needed.
    pub fn release(mut self) -> S {
        self.head = 0;
        self.tail = 0;
        self.storage
    }

    /// Fixed number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live elements, in `0..=capacity`
    pub fn count(&self) -> usize {
        self.head.wrapping_sub(self.tail) as usize
    }

    /// Free slots left before the buffer is full
    pub fn remaining(&self) -> usize {
        self.capacity - self.count()
    }

    /// Returns true if no slot is free
    pub fn is_full(&self) -> bool {
        self.count() == self.capacity
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Physical slot for a running counter value
    fn slot(&self, counter: u64) -> usize {
        (counter % self.capacity as u64) as usize
    }

    fn write_head(&mut self, value: T) {
        let slot = self.slot(self.head);
        self.storage.as_mut_slice()[slot] = value;
        self.head = self.head.wrapping_add(1);
    }

    fn read_tail(&mut self) -> T {
        let value = self.storage.as_slice()[self.slot(self.tail)];
        self.tail = self.tail.wrapping_add(1);
        value
    }

    /// Append an element
    ///
    /// Fails with [`FifoError::BufferFull`] when there is no free slot. The
    /// element is rejected and the buffer is left untouched, so the caller
    /// can drain and retry.
    pub fn push(&mut self, value: T) -> Result<(), FifoError> {
        if self.is_full() {
            trace!("fifo full, push rejected (capacity {})", self.capacity);
            return Err(FifoError::BufferFull);
        }
        self.write_head(value);
        Ok(())
    }

    /// Append an element, discarding the oldest one if the buffer is full
    ///
    /// Never fails. Newest data wins over oldest when saturated; the
    /// discarded element is returned so lossy producers can account for it.
    pub fn push_overwrite(&mut self, value: T) -> Option<T> {
        let dropped = if self.is_full() {
            debug!("fifo full, dropping oldest element");
            Some(self.read_tail())
        } else {
            None
        };
        self.write_head(value);
        dropped
    }

    /// Append without a capacity check
    ///
    /// The caller guarantees the buffer is not full; this is asserted in
    /// debug builds. In release builds a push onto a full buffer discards
    /// the oldest element, exactly like [`push_overwrite`](Self::push_overwrite).
    pub fn push_unchecked(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push_unchecked on a full fifo");
        self.push_overwrite(value);
    }

    /// Remove and return the oldest element
    pub fn pop(&mut self) -> Result<T, FifoError> {
        if self.is_empty() {
            return Err(FifoError::BufferEmpty);
        }
        Ok(self.read_tail())
    }

    /// Remove the oldest element without an emptiness check
    ///
    /// The caller guarantees the buffer is not empty; this is asserted in
    /// debug builds. In release builds popping an empty buffer returns the
    /// stale value in the tail slot and leaves the counters alone.
    pub fn pop_unchecked(&mut self) -> T {
        debug_assert!(!self.is_empty(), "pop_unchecked on an empty fifo");
        if self.is_empty() {
            return self.storage.as_slice()[self.slot(self.tail)];
        }
        self.read_tail()
    }

    /// Copy the element `offset` positions after the oldest one
    ///
    /// `peek(0)` is the element the next [`pop`](Self::pop) returns. Offsets
    /// at or beyond [`count`](Self::count) fail with
    /// [`FifoError::OutOfRange`].
    pub fn peek(&self, offset: usize) -> Result<T, FifoError> {
        if offset >= self.count() {
            return Err(FifoError::OutOfRange);
        }
        Ok(self.storage.as_slice()[self.slot(self.tail.wrapping_add(offset as u64))])
    }

    /// Peek without a range check
    ///
    /// The caller guarantees `offset < count()`; this is asserted in debug
    /// builds. Release builds read whatever slot the offset lands on.
    pub fn peek_unchecked(&self, offset: usize) -> T {
        debug_assert!(offset < self.count(), "peek_unchecked out of range");
        let counter = self.tail.wrapping_add(offset as u64);
        self.storage.as_slice()[self.slot(counter)]
    }

    /// Discard everything queued
    ///
    /// O(1): the tail jumps to the head. Slot contents are left as they are
    /// until later pushes overwrite them.
    pub fn flush(&mut self) {
        self.tail = self.head;
    }

    /// Drop up to `n` of the oldest elements, returning how many went
    pub fn discard(&mut self, n: usize) -> usize {
        let n = n.min(self.count());
        self.tail = self.tail.wrapping_add(n as u64);
        n
    }

    /// Append as many elements of `values` as fit
    ///
    /// Returns the number stored; the rest of the slice is left for the
    /// caller. Never overwrites.
    pub fn push_slice(&mut self, values: &[T]) -> usize {
        let n = values.len().min(self.remaining());
        for &value in &values[..n] {
            self.write_head(value);
        }
        if n < values.len() {
            trace!("fifo full, accepted {} of {}", n, values.len());
        }
        n
    }

    /// Move up to `out.len()` of the oldest elements into `out`
    ///
    /// Returns the number moved.
    pub fn pop_slice(&mut self, out: &mut [T]) -> usize {
        let n = out.len().min(self.count());
        for dst in &mut out[..n] {
            *dst = self.read_tail();
        }
        n
    }

    /// Iterate over queued elements, oldest first
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        let data = self.storage.as_slice();
        let tail = self.tail;
        (0..self.count()).map(move |i| &data[self.slot(tail.wrapping_add(i as u64))])
    }
}

#[cfg(feature = "alloc")]
impl<T: Copy + Default> RingBuffer<T, alloc::boxed::Box<[T]>> {
    /// Allocate a buffer with `capacity` slots
    ///
    /// Fails with [`FifoError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, FifoError> {
        if capacity == 0 {
            warn!("refusing to allocate a zero-capacity fifo");
            return Err(FifoError::InvalidCapacity);
        }
        Self::new(alloc::vec![T::default(); capacity].into_boxed_slice())
    }
}

impl<T, S> fmt::Debug for RingBuffer<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<T, S> defmt::Format for RingBuffer<T, S> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "RingBuffer[{}/{}]",
            self.head.wrapping_sub(self.tail),
            self.capacity
        );
    }
}
