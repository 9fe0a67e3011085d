//! Alarm match detection and banner timing

use crate::time::{Alarm, DateTime};

/// What the banner area should show this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Banner {
    /// Nothing to draw
    Hidden,
    /// The effect just ended; wipe the banner area once
    Clear,
    /// Draw the banner, colours swapped when `inverted`
    Show { inverted: bool },
}

/// Tracks the visual alarm effect
///
/// A match (re)arms the effect for `duration_ms`. After the match stops
/// matching the remaining time decays by one tick per tick and the
/// effect ends at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmMonitor {
    duration_ms: u32,
    remaining_ms: u32,
    active: bool,
    inverted: bool,
    needs_clear: bool,
}

impl AlarmMonitor {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            remaining_ms: 0,
            active: false,
            inverted: false,
            needs_clear: false,
        }
    }

    /// Advance by one tick
    ///
    /// Returns true on the tick the effect starts.
    pub fn update(&mut self, now: &DateTime, alarm: &Alarm, tick_ms: u32) -> bool {
        if self.active {
            if self.remaining_ms > tick_ms {
                self.remaining_ms -= tick_ms;
            } else {
                self.remaining_ms = 0;
                self.active = false;
                self.needs_clear = true;
            }
        }

        let mut started = false;
        if alarm.fires_at(now) {
            started = !self.active;
            self.active = true;
            self.needs_clear = false;
            self.remaining_ms = self.duration_ms;
        }
        started
    }

    /// Banner state for the next frame
    ///
    /// Each call while active flips the colours, so the banner flashes at
    /// the redraw rate.
    pub fn banner(&mut self) -> Banner {
        if self.active {
            self.inverted = !self.inverted;
            Banner::Show {
                inverted: self.inverted,
            }
        } else if self.needs_clear {
            self.needs_clear = false;
            Banner::Clear
        } else {
            Banner::Hidden
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}
