//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time::Alarm;
use crate::traits::Button;

/// Highest button index a scanner can report
pub const MAX_BUTTONS: usize = 16;

/// Tick and duration settings, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Period between `on_tick` calls
    pub tick_ms: u32,
    /// Time between blink toggles
    pub blink_ms: u32,
    /// How long UP must be held before auto-repeat starts
    pub hold_ms: u32,
    /// Upper bound of the hold accumulator
    pub hold_cap_ms: u32,
    /// Interval between auto-repeat increments
    pub repeat_ms: u32,
    /// How long the alarm banner stays after the match ends
    pub alarm_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            blink_ms: 500,
            hold_ms: 2000,
            hold_cap_ms: 60_000,
            repeat_ms: 200,
            alarm_ms: 3000,
        }
    }
}

/// Scanner indices of the three front-panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonMap {
    pub mode: u8,
    pub up: u8,
    pub ok: u8,
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self {
            mode: 0,
            up: 1,
            ok: 2,
        }
    }
}

impl ButtonMap {
    /// Scanner index of `button`
    pub fn index(&self, button: Button) -> usize {
        let raw = match button {
            Button::Mode => self.mode,
            Button::Up => self.up,
            Button::Ok => self.ok,
        };
        raw as usize
    }
}

/// Panel scan direction
///
/// The discriminant is the value OR'ed into the memory access control
/// register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ScanDir {
    /// Left to right, top to bottom
    #[default]
    L2rU2d = 0x00,
    L2rD2u = 0x80,
    R2lU2d = 0x40,
    R2lD2u = 0xC0,
    U2dL2r = 0x20,
    U2dR2l = 0x60,
    D2uL2r = 0xA0,
    D2uR2l = 0xE0,
}

impl ScanDir {
    /// Register bits for this direction
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Whether rows and columns are exchanged (landscape)
    pub const fn swaps_axes(self) -> bool {
        (self.bits() >> 4) % 4 != 0
    }

    /// Parse a direction name such as `"L2R_U2D"`
    pub fn from_name(name: &str) -> Option<Self> {
        let dir = match name {
            "L2R_U2D" => ScanDir::L2rU2d,
            "L2R_D2U" => ScanDir::L2rD2u,
            "R2L_U2D" => ScanDir::R2lU2d,
            "R2L_D2U" => ScanDir::R2lD2u,
            "U2D_L2R" => ScanDir::U2dL2r,
            "U2D_R2L" => ScanDir::U2dR2l,
            "D2U_L2R" => ScanDir::D2uL2r,
            "D2U_R2L" => ScanDir::D2uR2l,
            _ => return None,
        };
        Some(dir)
    }
}

/// Display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    pub scan_dir: ScanDir,
}

/// Complete appliance configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    pub timing: TimingConfig,
    /// Alarm slot at power-on
    pub alarm: Alarm,
    pub buttons: ButtonMap,
    pub display: DisplayConfig,
}

/// Reasons a configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `tick_ms` is zero
    ZeroTick,
    /// A period is zero or not a whole number of ticks
    PeriodNotTickMultiple,
    /// `hold_cap_ms` is below `hold_ms`, so repeat could never start
    HoldCapBelowThreshold,
    /// A button index is outside the scanner range
    ButtonOutOfRange,
    /// Two buttons share an index
    DuplicateButton,
    /// Alarm time outside 00:00:00-23:59:59
    InvalidAlarm,
}

impl ClockConfig {
    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        if t.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        let periods = [t.blink_ms, t.hold_ms, t.hold_cap_ms, t.repeat_ms, t.alarm_ms];
        if periods.iter().any(|&p| p == 0 || p % t.tick_ms != 0) {
            return Err(ConfigError::PeriodNotTickMultiple);
        }
        if t.hold_cap_ms < t.hold_ms {
            return Err(ConfigError::HoldCapBelowThreshold);
        }

        let b = &self.buttons;
        if [b.mode, b.up, b.ok].iter().any(|&i| i as usize >= MAX_BUTTONS) {
            return Err(ConfigError::ButtonOutOfRange);
        }
        if b.mode == b.up || b.mode == b.ok || b.up == b.ok {
            return Err(ConfigError::DuplicateButton);
        }

        if !self.alarm.is_valid() {
            return Err(ConfigError::InvalidAlarm);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_map_index() {
        let map = ButtonMap {
            mode: 5,
            up: 0,
            ok: 9,
        };
        assert_eq!(map.index(Button::Mode), 5);
        assert_eq!(map.index(Button::Up), 0);
        assert_eq!(map.index(Button::Ok), 9);
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ClockConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.timing.tick_ms, 50);
        assert_eq!(config.alarm, Alarm::default());
    }

    #[test]
    fn test_zero_tick_rejected() {
        let mut config = ClockConfig::default();
        config.timing.tick_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTick));
    }

    #[test]
    fn test_period_must_be_tick_multiple() {
        let mut config = ClockConfig::default();
        config.timing.repeat_ms = 210;
        assert_eq!(config.validate(), Err(ConfigError::PeriodNotTickMultiple));
    }

    #[test]
    fn test_hold_cap_below_threshold() {
        let mut config = ClockConfig::default();
        config.timing.hold_cap_ms = 1000;
        assert_eq!(config.validate(), Err(ConfigError::HoldCapBelowThreshold));
    }

    #[test]
    fn test_button_checks() {
        let mut config = ClockConfig::default();
        config.buttons.ok = 16;
        assert_eq!(config.validate(), Err(ConfigError::ButtonOutOfRange));
        config.buttons.ok = 1;
        assert_eq!(config.validate(), Err(ConfigError::DuplicateButton));
    }

    #[test]
    fn test_scan_dir_orientation() {
        assert!(!ScanDir::L2rU2d.swaps_axes());
        assert!(!ScanDir::R2lD2u.swaps_axes());
        assert!(ScanDir::U2dL2r.swaps_axes());
        assert!(ScanDir::D2uR2l.swaps_axes());
        assert_eq!(ScanDir::from_name("D2U_L2R"), Some(ScanDir::D2uL2r));
        assert_eq!(ScanDir::from_name("sideways"), None);
    }
}
