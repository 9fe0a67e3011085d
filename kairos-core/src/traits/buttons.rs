//! Button scanner trait

/// Front-panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Cycles VIEW, SET_TIME and ALARM
    Mode,
    /// Increments the active field
    Up,
    /// Moves the cursor, toggles the alarm
    Ok,
}

/// Debounced button state, sampled once per tick
///
/// `press_count` is the number of consecutive ticks a button has been
/// seen pressed: 0 while released, 1 on the tick it went down, then
/// counting up while held.
pub trait ButtonInputs {
    /// Consecutive pressed ticks of the button at `index`
    fn press_count(&self, index: usize) -> u16;

    /// Whether the button is down
    fn is_pressed(&self, index: usize) -> bool {
        self.press_count(index) > 0
    }

    /// Whether the button went down on this tick
    fn is_edge(&self, index: usize) -> bool {
        self.press_count(index) == 1
    }
}

impl<T: ButtonInputs + ?Sized> ButtonInputs for &T {
    fn press_count(&self, index: usize) -> u16 {
        (**self).press_count(index)
    }
}
