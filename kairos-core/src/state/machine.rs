//! Mode transition table

use super::events::Event;
use crate::time::Field;

/// Editing mode with its field cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Showing the live RTC time
    #[default]
    View,
    /// Editing the time/date scratch buffer
    SetTime { field: Field },
    /// Editing the alarm; `None` once the cursor has run past the year
    Alarm { field: Option<Field> },
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    None,
    /// Copy the live time into the edit buffer
    Snapshot,
    /// Write the edit buffer to the RTC
    Commit,
    /// Commit, re-read the RTC, then snapshot again
    Resync,
    /// Wrap-increment a field of the edit buffer
    IncrementTime(Field),
    /// Wrap-increment a field of the alarm
    IncrementAlarm(Field),
    /// Flip the alarm enable
    ToggleAlarm,
}

impl Mode {
    /// Short name shown in the status bar
    pub fn label(&self) -> &'static str {
        match self {
            Mode::View => "VIEW",
            Mode::SetTime { .. } => "SET",
            Mode::Alarm { .. } => "ALARM",
        }
    }

    /// Field under the cursor, if any
    pub fn active_field(&self) -> Option<Field> {
        match *self {
            Mode::View => None,
            Mode::SetTime { field } => Some(field),
            Mode::Alarm { field } => field,
        }
    }

    /// Whether the RTC is detached and the edit buffer is shown
    pub fn is_setting_time(&self) -> bool {
        matches!(self, Mode::SetTime { .. })
    }

    pub fn is_alarm(&self) -> bool {
        matches!(self, Mode::Alarm { .. })
    }

    /// Process an event and return the next mode with its side effect
    pub fn transition(self, event: Event) -> (Self, Action) {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // MODE cycles VIEW -> SET_TIME -> ALARM -> VIEW
            (View, ModePress) => (SetTime { field: Field::Hour }, Action::Snapshot),
            (SetTime { .. }, ModePress) => (
                Alarm {
                    field: Some(Field::Hour),
                },
                Action::Commit,
            ),
            (Alarm { .. }, ModePress) => (View, Action::None),

            // Time setting: cursor wraps, landing on seconds resyncs
            (SetTime { field }, UpPress | UpRepeat) => (self, Action::IncrementTime(field)),
            (SetTime { field }, OkPress) => {
                let next = field.next_cyclic();
                let action = if next == Field::Sec {
                    Action::Resync
                } else {
                    Action::None
                };
                (SetTime { field: next }, action)
            }

            // Alarm setting: cursor runs off the end instead of wrapping
            (Alarm { field: Some(f) }, UpPress | UpRepeat) if f.is_time_of_day() => {
                (self, Action::IncrementAlarm(f))
            }
            (
                Alarm {
                    field: Some(Field::Sec),
                },
                OkPress,
            ) => (
                Alarm {
                    field: Some(Field::Hour),
                },
                Action::ToggleAlarm,
            ),
            (Alarm { field: Some(f) }, OkPress) => (Alarm { field: f.next() }, Action::None),

            // Default: stay in current mode
            _ => (self, Action::None),
        }
    }
}
