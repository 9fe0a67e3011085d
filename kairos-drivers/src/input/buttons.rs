//! Debounced GPIO button scanner
//!
//! Each button is sampled once per tick. A level change is accepted after
//! two consecutive samples agree; the accepted state drives a
//! consecutive-pressed-tick counter per button.

use heapless::Vec;
use kairos_core::traits::ButtonInputs;
use kairos_hal::InputPin;

/// Most buttons one scanner handles
pub const MAX_BUTTONS: usize = 16;

#[derive(Debug, Clone, Copy, Default)]
struct Debounce {
    last_raw: bool,
    pressed: bool,
    count: u16,
}

/// Button scanner over GPIO inputs
///
/// Buttons are indexed in the order they were added.
pub struct ButtonScanner<P> {
    pins: Vec<P, MAX_BUTTONS>,
    state: [Debounce; MAX_BUTTONS],
    active_low: bool,
}

impl<P: InputPin> ButtonScanner<P> {
    /// Create an empty scanner
    ///
    /// With `active_low` a pressed button reads low (pull-up wiring).
    pub fn new(active_low: bool) -> Self {
        Self {
            pins: Vec::new(),
            state: [Debounce::default(); MAX_BUTTONS],
            active_low,
        }
    }

    /// Add a button, returning its index
    ///
    /// Gives the pin back when the scanner is full.
    pub fn add(&mut self, pin: P) -> Result<usize, P> {
        self.pins.push(pin)?;
        Ok(self.pins.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Sample every button once; call once per tick
    pub fn scan(&mut self) {
        for (pin, s) in self.pins.iter().zip(self.state.iter_mut()) {
            let raw = pin.is_high() != self.active_low;
            if raw == s.last_raw {
                s.pressed = raw;
            }
            s.last_raw = raw;
            s.count = if s.pressed {
                s.count.saturating_add(1)
            } else {
                0
            };
        }
    }
}

impl<P: InputPin> ButtonInputs for ButtonScanner<P> {
    fn press_count(&self, index: usize) -> u16 {
        if index < self.pins.len() {
            self.state[index].count
        } else {
            0
        }
    }
}
