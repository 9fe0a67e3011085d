//! UP-button hold-to-repeat accelerator

use crate::config::TimingConfig;

/// Turns a long UP press into periodic repeat steps
///
/// Once the button has been held for `threshold_ms`, one step fires every
/// `step_ms`. The hold accumulator stops growing at `cap_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldRepeat {
    threshold_ms: u32,
    cap_ms: u32,
    step_ms: u32,
    hold_ms: u32,
    repeat_ms: u32,
}

impl HoldRepeat {
    pub const fn new(threshold_ms: u32, cap_ms: u32, step_ms: u32) -> Self {
        Self {
            threshold_ms,
            cap_ms,
            step_ms,
            hold_ms: 0,
            repeat_ms: 0,
        }
    }

    pub const fn from_timing(timing: &TimingConfig) -> Self {
        Self::new(timing.hold_ms, timing.hold_cap_ms, timing.repeat_ms)
    }

    /// Advance by one tick given the button's consecutive-pressed count
    ///
    /// Returns true when a repeat step fires on this tick.
    pub fn update(&mut self, press_count: u16, tick_ms: u32) -> bool {
        // Released, or the press tick itself
        if press_count <= 1 {
            self.reset();
            return false;
        }

        if self.hold_ms < self.cap_ms {
            self.hold_ms += tick_ms;
        }
        if self.hold_ms < self.threshold_ms {
            return false;
        }

        self.repeat_ms += tick_ms;
        if self.repeat_ms >= self.step_ms {
            self.repeat_ms = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.hold_ms = 0;
        self.repeat_ms = 0;
    }

    /// How long the button has been held, capped
    pub fn held_ms(&self) -> u32 {
        self.hold_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tick offsets (relative to the press tick) on which a step fired
    fn fire_ticks(hold: &mut HoldRepeat, ticks: u16) -> ([u16; 16], usize) {
        let mut fired = [0; 16];
        let mut n = 0;
        for count in 1..=ticks {
            if hold.update(count, 50) {
                fired[n] = count - 1;
                n += 1;
            }
        }
        (fired, n)
    }

    #[test]
    fn test_first_repeat_after_threshold() {
        let mut hold = HoldRepeat::from_timing(&TimingConfig::default());
        let (fired, n) = fire_ticks(&mut hold, 52);
        assert_eq!(&fired[..n], &[43, 47, 51]);
    }

    #[test]
    fn test_nothing_before_two_seconds() {
        let mut hold = HoldRepeat::from_timing(&TimingConfig::default());
        for count in 1..=40u16 {
            assert!(!hold.update(count, 50));
        }
    }

    #[test]
    fn test_release_resets() {
        let mut hold = HoldRepeat::from_timing(&TimingConfig::default());
        for count in 1..=50u16 {
            hold.update(count, 50);
        }
        assert!(hold.held_ms() >= 2000);
        hold.update(0, 50);
        assert_eq!(hold.held_ms(), 0);
        let (_, n) = fire_ticks(&mut hold, 43);
        assert_eq!(n, 0);
    }

    #[test]
    fn test_hold_accumulator_capped() {
        let mut hold = HoldRepeat::new(2000, 3000, 200);
        let mut steps = 0;
        for count in 1..=200u16 {
            if hold.update(count, 50) {
                steps += 1;
            }
        }
        assert_eq!(hold.held_ms(), 3000);
        assert!(steps > 30);
    }
}
