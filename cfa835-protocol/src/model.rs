//! Display models and their command support

use crate::commands::{Command, Command2};
use crate::packet::{packet_max_size, PACKET_MAX_DATA_SIZE};

/// Data payload limit for the 2-line / 4-line character modules
pub const PACKET_CFA533_DATA_SIZE: usize = 22;
pub const PACKET_CFA631_DATA_SIZE: usize = 22;
pub const PACKET_CFA633_DATA_SIZE: usize = 22;
pub const PACKET_CFA635_DATA_SIZE: usize = 22;
/// Data payload limit for the graphic-capable modules
pub const PACKET_CFA735_DATA_SIZE: usize = 124;
pub const PACKET_CFA835_DATA_SIZE: usize = 124;

/// Which command table a model speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    /// [`Command`], CFA533 through CFA735
    Legacy,
    /// [`Command2`], CFA835
    Cfa835,
}

/// Supported display modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayModel {
    Cfa533,
    Cfa631,
    Cfa633,
    Cfa635,
    Cfa735,
    Cfa835,
}

impl DisplayModel {
    /// All models
    pub const ALL: [DisplayModel; 6] = [
        DisplayModel::Cfa533,
        DisplayModel::Cfa631,
        DisplayModel::Cfa633,
        DisplayModel::Cfa635,
        DisplayModel::Cfa735,
        DisplayModel::Cfa835,
    ];

    /// Maximum DATA bytes in one packet
    pub const fn data_size(self) -> usize {
        match self {
            DisplayModel::Cfa533 => PACKET_CFA533_DATA_SIZE,
            DisplayModel::Cfa631 => PACKET_CFA631_DATA_SIZE,
            DisplayModel::Cfa633 => PACKET_CFA633_DATA_SIZE,
            DisplayModel::Cfa635 => PACKET_CFA635_DATA_SIZE,
            DisplayModel::Cfa735 => PACKET_CFA735_DATA_SIZE,
            DisplayModel::Cfa835 => PACKET_CFA835_DATA_SIZE,
        }
    }

    /// Largest complete packet (header + data) this model sends or accepts
    pub const fn max_packet_size(self) -> usize {
        packet_max_size(self.data_size())
    }

    pub const fn command_set(self) -> CommandSet {
        match self {
            DisplayModel::Cfa835 => CommandSet::Cfa835,
            _ => CommandSet::Legacy,
        }
    }

    /// Check whether this model accepts a [`Command`]
    ///
    /// Always false for the CFA835, which uses [`Command2`].
    pub fn supports(self, cmd: Command) -> bool {
        use DisplayModel::*;

        if self.command_set() != CommandSet::Legacy {
            return false;
        }

        match cmd {
            Command::PrintLine1 | Command::PrintLine2 => matches!(self, Cfa533 | Cfa633),
            Command::ArbitraryDowTransaction => matches!(self, Cfa533 | Cfa633 | Cfa635),
            Command::LiveDataDisplay => matches!(self, Cfa533 | Cfa635),
            Command::KeyLegends => matches!(self, Cfa631),
            _ => true,
        }
    }

    /// Check whether this model accepts a [`Command2`]
    pub fn supports2(self, _cmd: Command2) -> bool {
        self.command_set() == CommandSet::Cfa835
    }

    /// Check whether a raw command code is valid for this model
    pub fn supports_code(self, code: u8) -> bool {
        match self.command_set() {
            CommandSet::Legacy => Command::from_byte(code).is_some_and(|c| self.supports(c)),
            CommandSet::Cfa835 => Command2::from_byte(code).is_some(),
        }
    }
}

// The widest model must fit the shared maximum
const _: () = assert!(PACKET_CFA835_DATA_SIZE == PACKET_MAX_DATA_SIZE);
