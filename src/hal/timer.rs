use avr_device::atmega328p::TC0;
use embedded_hal::blocking::delay::DelayMs;

use crate::config::DELAY_TIMER_TOP;

// TCCR0A
const WGM01: u8 = 1 << 1;
// TIFR0
const OCF0A: u8 = 1 << 1;

/// Busy-wait delay on Timer0.
///
/// CTC mode at 16 MHz / 64 with OCR0A = 249, so the compare flag is raised
/// once per millisecond. The flag stays set until cleared, so an interrupt
/// arriving during a wait can stretch it but never loses a period.
pub struct Delay {
    tc0: TC0,
}

impl Delay {
    pub fn new(tc0: TC0) -> Self {
        unsafe {
            tc0.tccr0a.write(|w| w.bits(WGM01));
            tc0.ocr0a.write(|w| w.bits(DELAY_TIMER_TOP));
            tc0.tcnt0.write(|w| w.bits(0));
        }
        tc0.tccr0b.write(|w| w.cs0().prescale_64());
        Self { tc0 }
    }

    fn wait_one_ms(&mut self) {
        while self.tc0.tifr0.read().bits() & OCF0A == 0 {}
        // Written one to clear
        unsafe { self.tc0.tifr0.write(|w| w.bits(OCF0A)) };
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        // Start on a period boundary so the first millisecond is whole
        unsafe {
            self.tc0.tcnt0.write(|w| w.bits(0));
            self.tc0.tifr0.write(|w| w.bits(OCF0A));
        }
        for _ in 0..ms {
            self.wait_one_ms();
        }
    }
}
