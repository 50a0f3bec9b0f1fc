//! Command codes
//!
//! Two command sets exist: [`Command`] for the CFA533 through CFA735
//! family and [`Command2`] for the CFA835. Codes shared by both sets keep
//! the same value. Which model accepts which command is answered by
//! [`DisplayModel`](crate::DisplayModel).

identifiers! {
    /// CFA533 / CFA631 / CFA633 / CFA635 / CFA735 command codes
    pub enum Command {
        Ping = 0,
        GetVersion = 1,
        WriteUserFlash = 2,
        ReadUserFlash = 3,
        StoreBootState = 4,
        Reboot = 5,
        ClearLcd = 6,
        /// CFA533 and CFA633 only
        PrintLine1 = 7,
        /// CFA533 and CFA633 only
        PrintLine2 = 8,
        SetLcdSpecialCharData = 9,
        Read8BytesLcdMemory = 10,
        SetLcdCursorPosition = 11,
        SetLcdCursorStyle = 12,
        SetLcdContrast = 13,
        SetLcdAndKeypadBacklight = 14,
        ReadFbscabInformation = 15,
        SetFanReporting = 16,
        SetFanPower = 17,
        ReadDowDeviceInformation = 18,
        SetTemperatureReporting = 19,
        /// CFA533, CFA633 and CFA635 only
        ArbitraryDowTransaction = 20,
        /// CFA533 and CFA635 only
        LiveDataDisplay = 21,
        SendCommandToCfaController = 22,
        SetKeyReporting = 23,
        ReadKeypadState = 24,
        SetFanPowerFailSafe = 25,
        FanTachGlitchFilter = 26,
        ReadFanPowerFailSafeMask = 27,
        SetAtxPowerSwitchFunctionality = 28,
        EnableDisableResetWatchdog = 29,
        ReadReportingAndStatus = 30,
        LcdPrint = 31,
        /// CFA631 only
        KeyLegends = 32,
        ConfigureInterface = 33,
        ConfigureGpioPin = 34,
        ReadGpioPinAndConfiguration = 35,
    }
}

identifiers! {
    /// CFA835 command codes
    pub enum Command2 {
        Ping = 0,
        GetVersion = 1,
        WriteUserFlash = 2,
        ReadUserFlash = 3,
        StoreBootState = 4,
        Reboot = 5,
        ClearLcd = 6,
        SetLcdSpecialCharData = 9,
        LcdCursorPosition = 11,
        LcdCursorStyle = 12,
        LcdContrast = 13,
        LcdAndKeypadBacklight = 14,
        LiveDataDisplay = 21,
        KeyReporting = 23,
        ReadKeypadState = 24,
        AtxPowerControl = 28,
        ResetWatchdog = 29,
        LcdWrite = 31,
        LcdRead = 32,
        ConfigureInterface = 33,
        GpioPin = 34,
        InterfaceBridge = 36,
        /// Carries an [`FbscabSubCommand`](crate::FbscabSubCommand)
        FbscabPortal = 37,
        /// Carries a [`FontSubCommand`](crate::FontSubCommand)
        FontPortal = 38,
        /// Carries a [`FileSubCommand`](crate::FileSubCommand)
        FilePortal = 39,
        /// Carries a [`GfxSubCommand`](crate::GfxSubCommand)
        GfxPortal = 40,
        /// Carries a [`VideoSubCommand`](crate::VideoSubCommand)
        VideoPortal = 41,
        Debug = 0x3E,
    }
}

impl Command2 {
    /// Returns true if the first data byte of this command is a sub-command
    pub fn is_portal(&self) -> bool {
        matches!(
            self,
            Command2::FbscabPortal
                | Command2::FontPortal
                | Command2::FilePortal
                | Command2::GfxPortal
                | Command2::VideoPortal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_command_codes() {
        assert_eq!(Command::Ping.to_byte(), 0);
        assert_eq!(Command::LcdPrint.to_byte(), 31);
        assert_eq!(Command::ReadGpioPinAndConfiguration.to_byte(), 35);
        assert_eq!(Command::ALL.len(), 36);
    }

    #[test]
    fn test_command2_codes() {
        assert_eq!(Command2::VideoPortal.to_byte(), 41);
        assert_eq!(Command2::Debug.to_byte(), 62);
        assert_eq!(Command2::from_byte(7), None); // no PrintLine1 on CFA835
        assert_eq!(Command2::from_byte(36), Some(Command2::InterfaceBridge));
        assert_eq!(Command2::ALL.len(), 28);
    }

    #[test]
    fn test_unknown_command() {
        assert!(Command::from_byte(36).is_none());
        assert!(Command::from_byte(0x3F).is_none());
        assert!(Command2::from_byte(42).is_none());
        assert_eq!(Command::try_from(0xFF), Err(0xFF));
    }

    #[test]
    fn test_portals() {
        assert!(Command2::GfxPortal.is_portal());
        assert!(Command2::FbscabPortal.is_portal());
        assert!(!Command2::LcdWrite.is_portal());
    }

    #[test]
    fn test_all_is_sorted() {
        assert!(Command::ALL.windows(2).all(|w| w[0].to_byte() < w[1].to_byte()));
        assert!(Command2::ALL.windows(2).all(|w| w[0].to_byte() < w[1].to_byte()));
    }

    proptest! {
        #[test]
        fn prop_command_byte_roundtrip(byte in any::<u8>()) {
            if let Some(cmd) = Command::from_byte(byte) {
                prop_assert_eq!(cmd.to_byte(), byte);
            }
            if let Some(cmd) = Command2::from_byte(byte) {
                prop_assert_eq!(u8::from(cmd), byte);
            }
        }
    }
}
