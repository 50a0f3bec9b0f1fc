//! FIFO error type

use core::fmt;

/// Errors returned by fallible [`RingBuffer`](crate::RingBuffer) operations
///
/// None of these are fatal. The caller decides whether to retry, drop data,
/// or drain the buffer first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoError {
    /// Storage has no slots; a FIFO needs at least one
    InvalidCapacity,
    /// Buffer is full, element was rejected
    BufferFull,
    /// Buffer is empty, nothing to remove
    BufferEmpty,
    /// Peek offset is not below the current count
    OutOfRange,
}

impl fmt::Display for FifoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FifoError::InvalidCapacity => "fifo capacity must be at least 1",
            FifoError::BufferFull => "fifo is full",
            FifoError::BufferEmpty => "fifo is empty",
            FifoError::OutOfRange => "peek offset out of range",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FifoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(FifoError::BufferFull.to_string(), "fifo is full");
        assert_eq!(FifoError::BufferEmpty.to_string(), "fifo is empty");
        assert_eq!(
            FifoError::InvalidCapacity.to_string(),
            "fifo capacity must be at least 1"
        );
    }
}
