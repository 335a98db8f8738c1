//! Configuration constants for the DMX panel firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// Timer0 clock divider used by the millisecond delay
pub const DELAY_PRESCALE: u32 = 64;

/// Timer0 compare value: counts 0..=TOP make one millisecond
pub const DELAY_TIMER_TOP: u8 = (CPU_FREQ_HZ / DELAY_PRESCALE / 1000 - 1) as u8;

/// Time between two full scans of the button lines, in milliseconds
pub const POLL_INTERVAL_MS: u16 = 50;

/// DMX512 slot baud rate (8N2)
pub const DMX_BAUD: u32 = 250_000;

/// Baud rate used to stretch one 0x00 byte into the break (8E1)
pub const DMX_BREAK_BAUD: u32 = 100_000;

/// Console baud rate when built with the `debug` feature
pub const CONSOLE_BAUD: u32 = 115_200;

/// Number of addressable DMX channels
pub const UNIVERSE_SIZE: usize = 512;

/// Number of button lines on the panel
pub const NUM_BUTTONS: usize = 9;

/// Number of indicator LEDs
pub const NUM_INDICATORS: usize = 3;

/// Axis speed while fine mode is on
pub const LOW_SPEED: u8 = 127;

/// Axis speed in normal mode
pub const HIGH_SPEED: u8 = 255;

// Fixture channel layout. Pan direction: 0..127 left, 128..255 right.
// Tilt direction: 0..127 up, 128..255 down.
pub const PAN_DIRECTION_CHANNEL: u16 = 1;
pub const TILT_DIRECTION_CHANNEL: u16 = 3;
pub const PAN_SPEED_CHANNEL: u16 = 5;
pub const TILT_SPEED_CHANNEL: u16 = 6;
pub const FOCUS_CHANNEL: u16 = 501;

pub const FOCUS_MINUS_VALUE: u8 = 128;
pub const FOCUS_PLUS_VALUE: u8 = 255;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_period_is_one_millisecond() {
        assert_eq!(DELAY_TIMER_TOP, 249);
        assert_eq!((DELAY_TIMER_TOP as u32 + 1) * DELAY_PRESCALE * 1000, CPU_FREQ_HZ);
    }
}
