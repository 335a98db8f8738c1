//! DMX512 channel output
//!
//! Channels are addressed 1-based like on the fixture's DMX chart. The
//! [`Universe`] holds the value of every channel; refreshing the wire from it
//! is the transmitter's job (see [`frame`]).

pub mod frame;

pub use frame::{FrameSender, TxStep};

use crate::config::UNIVERSE_SIZE;

/// Fire-and-forget, channel-addressed write primitive.
pub trait DmxOutput {
    /// Set `channel` (1..=512) to `value`.
    fn write(&mut self, channel: u16, value: u8);

    /// Write zero to every channel, one write per channel, lowest first.
    fn reset_all(&mut self) {
        for channel in 1..=UNIVERSE_SIZE as u16 {
            self.write(channel, 0);
        }
    }
}

impl<T: DmxOutput + ?Sized> DmxOutput for &mut T {
    fn write(&mut self, channel: u16, value: u8) {
        (**self).write(channel, value);
    }
}

/// Values of all 512 channels of one DMX universe.
pub struct Universe {
    slots: [u8; UNIVERSE_SIZE],
}

impl Universe {
    pub const fn new() -> Self {
        Self {
            slots: [0; UNIVERSE_SIZE],
        }
    }

    /// Current value of `channel`, 0 if the address is out of range.
    pub fn get(&self, channel: u16) -> u8 {
        match Self::index(channel) {
            Some(idx) => self.slots[idx],
            None => 0,
        }
    }

    pub fn slots(&self) -> &[u8; UNIVERSE_SIZE] {
        &self.slots
    }

    pub fn is_dark(&self) -> bool {
        self.slots.iter().all(|&v| v == 0)
    }

    #[inline]
    fn index(channel: u16) -> Option<usize> {
        let channel = channel as usize;
        if (1..=UNIVERSE_SIZE).contains(&channel) {
            Some(channel - 1)
        } else {
            None
        }
    }
}

impl DmxOutput for Universe {
    fn write(&mut self, channel: u16, value: u8) {
        // Out-of-range addresses are dropped silently
        if let Some(idx) = Self::index(channel) {
            self.slots[idx] = value;
        }
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingOutput {
        writes: std::vec::Vec<(u16, u8)>,
    }

    impl DmxOutput for CountingOutput {
        fn write(&mut self, channel: u16, value: u8) {
            self.writes.push((channel, value));
        }
    }

    #[test]
    fn write_is_one_based() {
        let mut universe = Universe::new();
        universe.write(1, 10);
        universe.write(512, 20);

        assert_eq!(universe.slots()[0], 10);
        assert_eq!(universe.slots()[511], 20);
        assert_eq!(universe.get(1), 10);
        assert_eq!(universe.get(512), 20);
    }

    #[test]
    fn out_of_range_channels_are_ignored() {
        let mut universe = Universe::new();
        universe.write(0, 99);
        universe.write(513, 99);
        universe.write(u16::MAX, 99);

        assert!(universe.is_dark());
        assert_eq!(universe.get(0), 0);
        assert_eq!(universe.get(513), 0);
    }

    #[test]
    fn reset_all_writes_every_channel_once_in_order() {
        let mut out = CountingOutput {
            writes: std::vec::Vec::new(),
        };
        out.reset_all();

        assert_eq!(out.writes.len(), UNIVERSE_SIZE);
        for (i, &(channel, value)) in out.writes.iter().enumerate() {
            assert_eq!(channel as usize, i + 1);
            assert_eq!(value, 0);
        }
    }

    #[test]
    fn repeated_resets_leave_universe_dark() {
        let mut universe = Universe::new();
        universe.write(3, 255);
        universe.write(501, 128);

        universe.reset_all();
        assert!(universe.is_dark());
        let after_first = *universe.slots();

        universe.reset_all();
        assert_eq!(universe.slots(), &after_first);
    }
}
