//! Packet sizes, packet types and report codes
//!
//! Header format:
//! - COMMAND (1 byte): packet type in bits 7-6, command code in bits 5-0
//! - LENGTH (1 byte): number of DATA bytes
//! - DATA (0-124 bytes)
//! - CRC (2 bytes)
//!
//! [`PACKET_HEADER_SIZE`] counts everything except DATA.

use cfa835_fifo::{ArrayRingBuffer, RingBuffer, Storage};

use crate::model::DisplayModel;

/// Non-data bytes in a packet: command, length and the 2-byte CRC
pub const PACKET_HEADER_SIZE: usize = 4;

/// Largest DATA field of any model (CFA735 / CFA835)
pub const PACKET_MAX_DATA_SIZE: usize = 124;

/// Size of a complete packet carrying `data_size` data bytes
pub const fn packet_max_size(data_size: usize) -> usize {
    PACKET_HEADER_SIZE + data_size
}

/// Link FIFO size that holds one maximum-size packet of any model
pub const LINK_FIFO_SIZE: usize = packet_max_size(PACKET_MAX_DATA_SIZE);

/// Staging size for bytes read from the display
pub const RX_FIFO_SIZE: usize = LINK_FIFO_SIZE;

/// Staging size for bytes written to the display
pub const TX_FIFO_SIZE: usize = LINK_FIFO_SIZE;

/// Byte FIFO sized for the display link
pub type LinkFifo = ArrayRingBuffer<u8, LINK_FIFO_SIZE>;

const TYPE_MASK: u8 = 0xC0;
const CODE_MASK: u8 = 0x3F;

identifiers! {
    /// Packet direction / kind, stored in the top two bits of COMMAND
    pub enum PacketType {
        /// Host to display
        Command = 0x00,
        /// Display answering a command
        Reply = 0x40,
        /// Unsolicited display report (keys, fans, temperatures)
        Report = 0x80,
        /// Display rejecting a command
        Error = 0xC0,
    }
}

identifiers! {
    /// Report packet command bytes
    pub enum Report {
        Key = 0x80,
        Fan = 0x81,
        Temp = 0x82,
        /// CFA835 only
        Debug = 0x80 + 0x3E,
    }
}

/// Packet type of a COMMAND byte
pub const fn packet_type(command: u8) -> PacketType {
    match command & TYPE_MASK {
        0x00 => PacketType::Command,
        0x40 => PacketType::Reply,
        0x80 => PacketType::Report,
        _ => PacketType::Error,
    }
}

/// Command code of a COMMAND byte, with the type bits stripped
pub const fn command_code(command: u8) -> u8 {
    command & CODE_MASK
}

impl PacketType {
    /// Build a COMMAND byte of this type for `code`
    pub const fn with_code(self, code: u8) -> u8 {
        self as u8 | (code & CODE_MASK)
    }
}

/// COMMAND and LENGTH of a packet still sitting in a link FIFO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacketHeader {
    /// Packet type from the COMMAND byte
    pub kind: PacketType,
    /// Command code from the COMMAND byte
    pub code: u8,
    /// Value of the LENGTH byte
    pub data_len: u8,
}

impl PacketHeader {
    /// Read the header at the front of `fifo` without consuming anything
    ///
    /// Returns `None` until both header bytes have arrived.
    pub fn peek<S: Storage<u8>>(fifo: &RingBuffer<u8, S>) -> Option<Self> {
        let command = fifo.peek(0).ok()?;
        let data_len = fifo.peek(1).ok()?;
        Some(Self {
            kind: packet_type(command),
            code: command_code(command),
            data_len,
        })
    }

    /// Total bytes of the packet this header announces
    pub fn packet_len(&self) -> usize {
        packet_max_size(self.data_len as usize)
    }

    /// Returns true once the whole announced packet is buffered
    pub fn is_buffered<S: Storage<u8>>(&self, fifo: &RingBuffer<u8, S>) -> bool {
        fifo.count() >= self.packet_len()
    }

    /// Returns true if the announced length is legal for `model`
    pub fn fits(&self, model: DisplayModel) -> bool {
        self.data_len as usize <= model.data_size()
    }
}
