//! GPIO wrappers for STM32F4
//!
//! Adapts embassy-stm32 pins to the `kairos-hal` pin traits.

use embassy_stm32::gpio::{Input, Output};

/// Push-pull output (display reset, backlight)
pub struct Pin<'d>(Output<'d>);

impl<'d> Pin<'d> {
    pub fn new(output: Output<'d>) -> Self {
        Self(output)
    }
}

impl kairos_hal::OutputPin for Pin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Button input
pub struct Button<'d>(Input<'d>);

impl<'d> Button<'d> {
    pub fn new(input: Input<'d>) -> Self {
        Self(input)
    }
}

impl kairos_hal::InputPin for Button<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
