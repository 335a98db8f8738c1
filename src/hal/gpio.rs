use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub struct Input;
pub struct Output;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    B,
    C,
    D,
}

/// One port pin. Port and bit are kept at runtime so pins from different
/// ports can share an array.
#[derive(Debug)]
pub struct Pin<MODE> {
    port: Port,
    mask: u8,
    _mode: PhantomData<MODE>,
}

macro_rules! modify_bits {
    ($reg:expr, $mask:expr, $on:expr) => {
        $reg.modify(|r, w| {
            w.bits(if $on {
                r.bits() | $mask
            } else {
                r.bits() & !$mask
            })
        })
    };
}

impl Port {
    unsafe fn set_ddr(self, mask: u8, output: bool) {
        match self {
            Port::B => modify_bits!((*PORTB::ptr()).ddrb, mask, output),
            Port::C => modify_bits!((*PORTC::ptr()).ddrc, mask, output),
            Port::D => modify_bits!((*PORTD::ptr()).ddrd, mask, output),
        }
    }

    unsafe fn set_port(self, mask: u8, high: bool) {
        match self {
            Port::B => modify_bits!((*PORTB::ptr()).portb, mask, high),
            Port::C => modify_bits!((*PORTC::ptr()).portc, mask, high),
            Port::D => modify_bits!((*PORTD::ptr()).portd, mask, high),
        }
    }

    unsafe fn read_pins(self) -> u8 {
        match self {
            Port::B => (*PORTB::ptr()).pinb.read().bits(),
            Port::C => (*PORTC::ptr()).pinc.read().bits(),
            Port::D => (*PORTD::ptr()).pind.read().bits(),
        }
    }
}

impl Pin<Input> {
    /// Input with the internal pull-up enabled, idle level high.
    fn pull_up(port: Port, bit: u8) -> Self {
        let mask = 1 << bit;
        unsafe {
            port.set_ddr(mask, false);
            port.set_port(mask, true);
        }
        Pin {
            port,
            mask,
            _mode: PhantomData,
        }
    }
}

impl Pin<Output> {
    /// Push-pull output, starts low.
    fn output(port: Port, bit: u8) -> Self {
        let mask = 1 << bit;
        unsafe {
            port.set_port(mask, false);
            port.set_ddr(mask, true);
        }
        Pin {
            port,
            mask,
            _mode: PhantomData,
        }
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(unsafe { self.port.read_pins() } & self.mask != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        unsafe { self.port.set_port(self.mask, true) };
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        unsafe { self.port.set_port(self.mask, false) };
        Ok(())
    }
}

// Arduino Nano / Uno wiring
pub mod board {
    use super::*;
    use crate::config::{NUM_BUTTONS, NUM_INDICATORS};

    /// Button lines in slot order: D2, D3, D11, D5, D6, D7, D8, D9, D10
    pub const BUTTON_PINS: [(Port, u8); NUM_BUTTONS] = [
        (Port::D, 2),
        (Port::D, 3),
        (Port::B, 3),
        (Port::D, 5),
        (Port::D, 6),
        (Port::D, 7),
        (Port::B, 0),
        (Port::B, 1),
        (Port::B, 2),
    ];

    /// Indicator LEDs: A0, A1, A2
    pub const LED_PINS: [(Port, u8); NUM_INDICATORS] = [(Port::C, 0), (Port::C, 1), (Port::C, 2)];

    pub struct Pins {
        pub buttons: [Pin<Input>; NUM_BUTTONS],
        pub leds: [Pin<Output>; NUM_INDICATORS],
    }

    impl Pins {
        /// Takes the port peripherals so nothing else can reconfigure them.
        pub fn new(_portb: PORTB, _portc: PORTC, _portd: PORTD) -> Self {
            Self {
                buttons: BUTTON_PINS.map(|(port, bit)| Pin::<Input>::pull_up(port, bit)),
                leds: LED_PINS.map(|(port, bit)| Pin::<Output>::output(port, bit)),
            }
        }
    }
}
