use embedded_hal::digital::v2::OutputPin;

use crate::config::NUM_INDICATORS;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Indicator {
    Led1,
    Led2,
    Led3,
}

impl Indicator {
    pub const ALL: [Indicator; NUM_INDICATORS] =
        [Indicator::Led1, Indicator::Led2, Indicator::Led3];

    /// LED keyed by the 1-based button number. Only buttons 1..=3 have one.
    pub fn for_button_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(Indicator::Led1),
            2 => Some(Indicator::Led2),
            3 => Some(Indicator::Led3),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The three mode LEDs, active high.
pub struct Indicators<P> {
    leds: [P; NUM_INDICATORS],
}

impl<P: OutputPin> Indicators<P> {
    /// Pins must already be configured as outputs. Their level is left as
    /// found.
    pub fn new(leds: [P; NUM_INDICATORS]) -> Self {
        Self { leds }
    }

    pub fn set(&mut self, indicator: Indicator, on: bool) -> Result<(), P::Error> {
        let led = &mut self.leds[indicator.index()];
        if on {
            led.set_high()
        } else {
            led.set_low()
        }
    }

    pub fn release(self) -> [P; NUM_INDICATORS] {
        self.leds
    }
}
