//! Free-running blink phase

/// Toggles a visibility flag every `period_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blink {
    period_ms: u32,
    acc_ms: u32,
    on: bool,
}

impl Blink {
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            acc_ms: 0,
            on: true,
        }
    }

    /// Advance by one tick
    pub fn advance(&mut self, tick_ms: u32) {
        self.acc_ms += tick_ms;
        if self.acc_ms >= self.period_ms {
            self.acc_ms = 0;
            self.on = !self.on;
        }
    }

    /// Whether blinking content is visible in this phase
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn reset(&mut self) {
        self.acc_ms = 0;
        self.on = true;
    }
}
