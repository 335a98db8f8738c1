//! DMX512 frame sequencing
//!
//! A frame on the wire is: break, mark-after-break, start code, then one byte
//! per channel. The break is made by sending a single `0x00` at
//! [`DMX_BREAK_BAUD`](crate::config::DMX_BREAK_BAUD) with even parity: the
//! start bit, eight zero data bits and the zero parity bit give 100 µs of break
//! and the stop bit gives the mark-after-break.

use super::Universe;
use crate::config::{DMX_BREAK_BAUD, UNIVERSE_SIZE};

/// Start code for dimmer/fixture data.
pub const NULL_START_CODE: u8 = 0x00;

/// Low bit times in the break byte (start, 8 data, even parity).
pub const BREAK_LOW_BITS: u32 = 10;

/// Receivers must accept a break of 88 µs, transmitters must send at least 92.
pub const MIN_BREAK_MICROS: u32 = 92;

/// Length of the break put on the line.
pub const fn break_micros() -> u32 {
    BREAK_LOW_BITS * 1_000_000 / DMX_BREAK_BAUD
}

/// What the transmitter has to put on the line next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxStep {
    /// Switch to break speed and send 0x00
    Break,
    /// Switch back to slot speed and send the start code
    StartCode,
    /// Send one channel value
    Slot(u8),
}

/// Walks a universe byte by byte, wrapping to a new frame after channel 512.
pub struct FrameSender {
    // 0 = break, 1 = start code, 2.. = channel (position - 1)
    position: u16,
}

impl FrameSender {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    pub fn next_step(&mut self, universe: &Universe) -> TxStep {
        let step = match self.position {
            0 => TxStep::Break,
            1 => TxStep::StartCode,
            p => TxStep::Slot(universe.get(p - 1)),
        };

        self.position += 1;
        if self.position as usize > UNIVERSE_SIZE + 1 {
            self.position = 0;
        }

        step
    }
}

impl Default for FrameSender {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dmx::DmxOutput;

    #[test]
    fn frame_is_break_start_code_then_all_slots() {
        let mut universe = Universe::new();
        universe.write(1, 0x11);
        universe.write(6, 0x66);
        universe.write(512, 0xff);

        let mut sender = FrameSender::new();
        assert_eq!(sender.next_step(&universe), TxStep::Break);
        assert_eq!(sender.next_step(&universe), TxStep::StartCode);

        for channel in 1..=UNIVERSE_SIZE as u16 {
            assert_eq!(
                sender.next_step(&universe),
                TxStep::Slot(universe.get(channel))
            );
        }

        // wraps straight into the next frame
        assert_eq!(sender.next_step(&universe), TxStep::Break);
        assert_eq!(sender.next_step(&universe), TxStep::StartCode);
    }

    #[test]
    fn break_is_long_enough_for_strict_receivers() {
        assert_eq!(break_micros(), 100);
        assert!(break_micros() >= MIN_BREAK_MICROS);
    }

    #[test]
    fn changes_mid_frame_show_up_in_later_slots() {
        let mut universe = Universe::new();
        let mut sender = FrameSender::new();

        sender.next_step(&universe);
        sender.next_step(&universe);
        assert_eq!(sender.next_step(&universe), TxStep::Slot(0)); // channel 1

        universe.write(3, 200);
        assert_eq!(sender.next_step(&universe), TxStep::Slot(0)); // channel 2
        assert_eq!(sender.next_step(&universe), TxStep::Slot(200)); // channel 3
    }
}
