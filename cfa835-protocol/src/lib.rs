//! Crystalfontz packet protocol identifiers
//!
//! Command, sub-command and report identifiers for the intelligent packet
//! displays (CFA533, CFA631, CFA633, CFA635, CFA735, CFA835), plus the
//! packet size constants needed to size link buffers.
//!
//! # Packet Layout
//!
//! ```text
//! ┌─────────┬────────┬──────────────┬─────────┐
//! │ COMMAND │ LENGTH │ DATA         │ CRC     │
//! │ 1B      │ 1B     │ 0–124B       │ 2B      │
//! └─────────┴────────┴──────────────┴─────────┘
//! ```
//!
//! The top two bits of COMMAND carry the [`PacketType`]; the low six bits
//! are the command code. Framing and CRC checking live outside this crate.
//! Bytes are staged in a [`cfa835_fifo::RingBuffer`] and the header can be
//! inspected in place with [`PacketHeader::peek`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod commands;
pub mod model;
pub mod packet;
pub mod subcommands;

pub use commands::{Command, Command2};
pub use model::{CommandSet, DisplayModel};
pub use packet::{
    command_code, packet_max_size, packet_type, LinkFifo, PacketHeader, PacketType, Report,
    LINK_FIFO_SIZE, PACKET_HEADER_SIZE, PACKET_MAX_DATA_SIZE, RX_FIFO_SIZE, TX_FIFO_SIZE,
};
pub use subcommands::{
    is_valid_subcommand, FbscabSubCommand, FileSubCommand, FontSubCommand, GfxSubCommand,
    VideoSubCommand,
};
