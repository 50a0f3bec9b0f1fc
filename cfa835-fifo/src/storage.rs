//! Backing storage for the ring buffer
//!
//! The buffer never allocates on its own (except through
//! [`RingBuffer::with_capacity`](crate::RingBuffer::with_capacity) with the
//! `alloc` feature). Any contiguous block the caller owns can back it:
//!
//! - `[T; N]` - inline array, capacity fixed at compile time
//! - `&mut [T]` - a `static` or stack buffer lent to the FIFO
//! - `heapless::Vec<T, N>` - runtime length up to `N`
//! - `Box<[T]>` / `Vec<T>` - heap storage (`alloc` feature)
//!
//! The storage length at construction is the buffer capacity.

/// Contiguous element storage owned by a [`RingBuffer`](crate::RingBuffer)
pub trait Storage<T> {
    /// View the whole store
    fn as_slice(&self) -> &[T];

    /// Mutable view of the whole store
    fn as_mut_slice(&mut self) -> &mut [T];
}

impl<T, const N: usize> Storage<T> for [T; N] {
    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Storage<T> for &mut [T] {
    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Storage<T> for heapless::Vec<T, N> {
    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<T> Storage<T> for alloc::boxed::Box<[T]> {
    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<T> Storage<T> for alloc::vec::Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}
