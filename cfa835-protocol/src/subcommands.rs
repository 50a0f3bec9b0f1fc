//! CFA835 portal sub-commands
//!
//! Portal commands put a sub-command in the first data byte.

use crate::commands::Command2;

identifiers! {
    /// Sub-commands of [`Command2::FbscabPortal`] (fan/temperature board)
    pub enum FbscabSubCommand {
        Query = 0,
        Fan = 1,
        FanRpm = 2,
        DowQuery = 3,
        TempValue = 4,
        Gpio = 5,
        Reset = 6,
        LiveDisplay = 7,
        AutoFanControl = 8,
    }
}

identifiers! {
    /// Sub-commands of [`Command2::FontPortal`]
    pub enum FontSubCommand {
        Load = 0,
        Print = 1,
    }
}

identifiers! {
    /// Sub-commands of [`Command2::FilePortal`]
    pub enum FileSubCommand {
        File = 0,
        Seek = 1,
        Read = 2,
        Write = 3,
        Delete = 4,
    }
}

identifiers! {
    /// Sub-commands of [`Command2::GfxPortal`]
    pub enum GfxSubCommand {
        Options = 0,
        Flush = 1,
        SendImage = 2,
        LoadImage = 3,
        Screenshot = 4,
        Pixel = 5,
        Line = 6,
        Rect = 7,
        Circle = 8,
        RoundedRect = 9,
        CrawLoad = 10,
        CrawDisplay = 11,
    }
}

identifiers! {
    /// Sub-commands of [`Command2::VideoPortal`]
    pub enum VideoSubCommand {
        Load = 0,
        Control = 1,
    }
}

/// Check whether `sub` is a known sub-command byte for `portal`
///
/// Returns false for commands that are not portals.
pub fn is_valid_subcommand(portal: Command2, sub: u8) -> bool {
    match portal {
        Command2::FbscabPortal => FbscabSubCommand::from_byte(sub).is_some(),
        Command2::FontPortal => FontSubCommand::from_byte(sub).is_some(),
        Command2::FilePortal => FileSubCommand::from_byte(sub).is_some(),
        Command2::GfxPortal => GfxSubCommand::from_byte(sub).is_some(),
        Command2::VideoPortal => VideoSubCommand::from_byte(sub).is_some(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcommand_ranges() {
        assert_eq!(FbscabSubCommand::ALL.len(), 9);
        assert_eq!(FontSubCommand::ALL.len(), 2);
        assert_eq!(FileSubCommand::ALL.len(), 5);
        assert_eq!(GfxSubCommand::ALL.len(), 12);
        assert_eq!(VideoSubCommand::ALL.len(), 2);
    }

    #[test]
    fn test_subcommand_values() {
        assert_eq!(FbscabSubCommand::AutoFanControl.to_byte(), 8);
        assert_eq!(GfxSubCommand::CrawDisplay.to_byte(), 11);
        assert_eq!(FileSubCommand::from_byte(4), Some(FileSubCommand::Delete));
        assert_eq!(GfxSubCommand::from_byte(12), None);
    }

    #[test]
    fn test_is_valid_subcommand() {
        assert!(is_valid_subcommand(Command2::GfxPortal, 11));
        assert!(!is_valid_subcommand(Command2::GfxPortal, 12));
        assert!(is_valid_subcommand(Command2::VideoPortal, 1));
        assert!(!is_valid_subcommand(Command2::VideoPortal, 2));
        assert!(!is_valid_subcommand(Command2::Ping, 0));
    }
}
