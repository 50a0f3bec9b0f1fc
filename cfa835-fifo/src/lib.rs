//! Circular FIFO for the display link
//!
//! Bytes crossing the I2C / SPI link to a Crystalfontz packet display are
//! staged in a [`RingBuffer`]. The buffer knows nothing about packets,
//! CRCs or the transport; it only moves elements in and out in order.
//!
//! # Indexing
//!
//! ```text
//!          tail % cap          head % cap
//!              │                   │
//! ┌───┬───┬───┬▼──┬───┬───┬───┬───┬▼──┬───┐
//! │   │   │   │ a │ b │ c │ d │ e │   │   │
//! └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
//!                count = head - tail
//! ```
//!
//! `head` and `tail` are running totals of elements pushed and removed.
//! They only ever grow; the physical slot is derived modulo the capacity,
//! so a full buffer (`head - tail == capacity`) and an empty one
//! (`head == tail`) are never confused.
//!
//! # Features
//!
//! - `alloc` (default) - heap storage and [`RingBuffer::with_capacity`]
//! - `std` - host builds
//! - `defmt` - `defmt::Format` impls and trace logging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

// This must go first so the other modules see its macros.
mod fmt;

pub mod error;
pub mod io;
pub mod ring;
pub mod storage;

pub use error::FifoError;
pub use ring::{ArrayRingBuffer, RingBuffer, SliceRingBuffer};
pub use storage::Storage;
