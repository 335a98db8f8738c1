use embedded_hal::digital::v2::InputPin;

/// Edge seen on one button line since the previous sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed(usize),
    Released(usize),
}

/// Edge detector over `N` pulled-up, active-low button lines.
///
/// There is no debounce: one sample per line per scan, compared against the
/// previous sample of the same line.
pub struct ButtonHandler<P, const N: usize> {
    buttons: [P; N],
    pressed: [bool; N],
}

impl<P: InputPin, const N: usize> ButtonHandler<P, N> {
    /// Pins must already be configured as pull-up inputs. Every line starts
    /// as released.
    pub fn new(buttons: [P; N]) -> Self {
        Self {
            buttons,
            pressed: [false; N],
        }
    }

    /// Sample `slot` once and report a press or release edge.
    ///
    /// On a read error the line's history is left untouched.
    pub fn poll_slot(&mut self, slot: usize) -> Result<Option<ButtonEvent>, P::Error> {
        let now = self.buttons[slot].is_low()?; // Buttons are active low
        let before = core::mem::replace(&mut self.pressed[slot], now);

        Ok(match (before, now) {
            (false, true) => Some(ButtonEvent::Pressed(slot)),
            (true, false) => Some(ButtonEvent::Released(slot)),
            _ => None,
        })
    }

    /// Level seen on the last sample of `slot`.
    pub fn is_pressed(&self, slot: usize) -> bool {
        self.pressed[slot]
    }

    pub fn release(self) -> [P; N] {
        self.buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

    fn line(levels: &[PinState]) -> PinMock {
        let expectations: std::vec::Vec<PinTransaction> =
            levels.iter().map(|s| PinTransaction::get(s.clone())).collect();
        PinMock::new(&expectations)
    }

    #[test]
    fn reports_press_then_release_once() {
        use PinState::{High, Low};
        let pin = line(&[High, Low, Low, High, High]);
        let mut handler = ButtonHandler::new([pin]);

        assert_eq!(handler.poll_slot(0).unwrap(), None);
        assert_eq!(handler.poll_slot(0).unwrap(), Some(ButtonEvent::Pressed(0)));
        assert!(handler.is_pressed(0));
        assert_eq!(handler.poll_slot(0).unwrap(), None);
        assert_eq!(handler.poll_slot(0).unwrap(), Some(ButtonEvent::Released(0)));
        assert_eq!(handler.poll_slot(0).unwrap(), None);
        assert!(!handler.is_pressed(0));

        let [mut pin] = handler.release();
        pin.done();
    }

    #[test]
    fn held_at_startup_counts_as_press() {
        let pin = line(&[PinState::Low]);
        let mut handler = ButtonHandler::new([pin]);

        assert_eq!(handler.poll_slot(0).unwrap(), Some(ButtonEvent::Pressed(0)));

        let [mut pin] = handler.release();
        pin.done();
    }

    #[test]
    fn lines_are_tracked_independently() {
        use PinState::{High, Low};
        let a = line(&[Low, Low]);
        let b = line(&[High, Low]);
        let mut handler = ButtonHandler::new([a, b]);

        assert_eq!(handler.poll_slot(0).unwrap(), Some(ButtonEvent::Pressed(0)));
        assert_eq!(handler.poll_slot(1).unwrap(), None);
        assert_eq!(handler.poll_slot(0).unwrap(), None);
        assert_eq!(handler.poll_slot(1).unwrap(), Some(ButtonEvent::Pressed(1)));

        for mut pin in handler.release() {
            pin.done();
        }
    }
}
