//! `embedded-io` glue for byte FIFOs
//!
//! Lets a `RingBuffer<u8, _>` sit between a link driver and code written
//! against `embedded_io::{Read, Write}`. Both directions are non-blocking:
//! a write into a full FIFO fails with [`FifoError::BufferFull`] and a read
//! from an empty one fails with [`FifoError::BufferEmpty`]. Partial
//! transfers report the number of bytes moved.
//!
//! `Write::flush` is a no-op. It does not discard queued bytes; the
//! inherent [`RingBuffer::flush`] does that.

use embedded_io::{ErrorKind, ErrorType, Read, ReadReady, Write, WriteReady};

use crate::error::FifoError;
use crate::ring::RingBuffer;
use crate::storage::Storage;

impl embedded_io::Error for FifoError {
    fn kind(&self) -> ErrorKind {
        match self {
            FifoError::BufferFull | FifoError::BufferEmpty => ErrorKind::Other,
            FifoError::OutOfRange | FifoError::InvalidCapacity => ErrorKind::InvalidInput,
        }
    }
}

impl<S: Storage<u8>> ErrorType for RingBuffer<u8, S> {
    type Error = FifoError;
}

impl<S: Storage<u8>> Read for RingBuffer<u8, S> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        match self.pop_slice(buf) {
            0 => Err(FifoError::BufferEmpty),
            n => Ok(n),
        }
    }
}

impl<S: Storage<u8>> Write for RingBuffer<u8, S> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        match self.push_slice(buf) {
            0 => Err(FifoError::BufferFull),
            n => Ok(n),
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<S: Storage<u8>> ReadReady for RingBuffer<u8, S> {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_empty())
    }
}

impl<S: Storage<u8>> WriteReady for RingBuffer<u8, S> {
    fn write_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_full())
    }
}
