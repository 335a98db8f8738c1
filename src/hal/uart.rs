use avr_device::atmega328p::USART0;
use core::convert::Infallible;
use embedded_hal::serial;

use crate::config::{CONSOLE_BAUD, CPU_FREQ_HZ, DMX_BAUD, DMX_BREAK_BAUD};
use crate::dmx::frame::{break_micros, FrameSender, TxStep, MIN_BREAK_MICROS, NULL_START_CODE};
use crate::dmx::Universe;

// UCSR0A
const U2X0: u8 = 1 << 1;
const UDRE0: u8 = 1 << 5;
// UCSR0B
const TXEN0: u8 = 1 << 3;
const TXCIE0: u8 = 1 << 6;
// UCSR0C: asynchronous, 8 data bits
const FORMAT_8N1: u8 = 0b0000_0110;
const FORMAT_8N2: u8 = 0b0000_1110;
// UPM01 set: the parity bit of 0x00 is low, stretching the break by one bit
const FORMAT_8E1: u8 = 0b0010_0110;

/// UBRR value for `baud`, rounded to nearest.
pub const fn ubrr(baud: u32, double_speed: bool) -> u16 {
    let div = if double_speed { 8 } else { 16 };
    ((CPU_FREQ_HZ + div * baud / 2) / (div * baud) - 1) as u16
}

const UBRR_DMX: u16 = ubrr(DMX_BAUD, false);
const UBRR_BREAK: u16 = ubrr(DMX_BREAK_BAUD, false);
const UBRR_CONSOLE: u16 = ubrr(CONSOLE_BAUD, true);

const _: () = assert!(break_micros() >= MIN_BREAK_MICROS);

/// USART0 driven from its transmit-complete interrupt, refreshing the
/// universe forever.
///
/// Each byte is loaded only after the previous one has fully left the shift
/// register, so the baud rate can be switched for the break.
pub struct DmxTransmitter {
    usart: USART0,
    sender: FrameSender,
}

impl DmxTransmitter {
    pub fn new(usart: USART0) -> Self {
        unsafe {
            usart.ucsr0a.write(|w| w.bits(0));
            usart.ubrr0.write(|w| w.bits(UBRR_DMX));
            usart.ucsr0c.write(|w| w.bits(FORMAT_8N2));
            usart.ucsr0b.write(|w| w.bits(TXEN0 | TXCIE0));
        }

        Self {
            usart,
            sender: FrameSender::new(),
        }
    }

    /// Send the first break. Later bytes are sent from the ISR.
    pub fn start(&mut self, universe: &Universe) {
        self.on_tx_complete(universe);
    }

    /// Call from `USART_TX`.
    pub fn on_tx_complete(&mut self, universe: &Universe) {
        let step = self.sender.next_step(universe);
        self.emit(step);
    }

    fn emit(&mut self, step: TxStep) {
        match step {
            TxStep::Break => {
                self.set_line(UBRR_BREAK, FORMAT_8E1);
                self.send(0x00);
            }
            TxStep::StartCode => {
                self.set_line(UBRR_DMX, FORMAT_8N2);
                self.send(NULL_START_CODE);
            }
            TxStep::Slot(value) => self.send(value),
        }
    }

    fn set_line(&mut self, ubrr: u16, format: u8) {
        unsafe {
            self.usart.ubrr0.write(|w| w.bits(ubrr));
            self.usart.ucsr0c.write(|w| w.bits(format));
        }
    }

    #[inline]
    fn send(&mut self, byte: u8) {
        unsafe { self.usart.udr0.write(|w| w.bits(byte)) };
    }
}

/// USART0 as a polled 115200 baud text port.
pub struct ConsoleUart {
    usart: USART0,
}

impl ConsoleUart {
    pub fn new(usart: USART0) -> Self {
        unsafe {
            usart.ucsr0a.write(|w| w.bits(U2X0));
            usart.ubrr0.write(|w| w.bits(UBRR_CONSOLE));
            usart.ucsr0c.write(|w| w.bits(FORMAT_8N1));
            usart.ucsr0b.write(|w| w.bits(TXEN0));
        }
        Self { usart }
    }

    #[inline]
    fn tx_ready(&self) -> bool {
        self.usart.ucsr0a.read().bits() & UDRE0 != 0
    }
}

impl serial::Write<u8> for ConsoleUart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if !self.tx_ready() {
            return Err(nb::Error::WouldBlock);
        }
        unsafe { self.usart.udr0.write(|w| w.bits(byte)) };
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.tx_ready() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

impl ufmt::uWrite for ConsoleUart {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            nb::block!(serial::Write::write(self, byte))?;
        }
        Ok(())
    }
}
