#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega328p::Peripherals;
    use avr_device::interrupt::{self, Mutex};
    use core::cell::RefCell;
    use embedded_hal::blocking::delay::DelayMs;

    use dmx_panel_firmware::config::POLL_INTERVAL_MS;
    use dmx_panel_firmware::dmx::{DmxOutput, Universe};
    use dmx_panel_firmware::hal::{board, Delay};
    use dmx_panel_firmware::panel::Panel;

    #[cfg(feature = "debug")]
    use dmx_panel_firmware::{drivers::SerialConsole, hal::ConsoleUart};
    #[cfg(not(feature = "debug"))]
    use dmx_panel_firmware::hal::DmxTransmitter;

    // Channel values, written by the main loop and read by the transmit ISR
    static UNIVERSE: Mutex<RefCell<Universe>> = Mutex::new(RefCell::new(Universe::new()));

    #[cfg(not(feature = "debug"))]
    static DMX_TX: Mutex<RefCell<Option<DmxTransmitter>>> = Mutex::new(RefCell::new(None));

    /// Main-loop handle on the shared universe.
    struct SharedUniverse;

    impl DmxOutput for SharedUniverse {
        fn write(&mut self, channel: u16, value: u8) {
            interrupt::free(|cs| UNIVERSE.borrow(cs).borrow_mut().write(channel, value));
        }
    }

    #[cfg(not(feature = "debug"))]
    #[avr_device::interrupt(atmega328p)]
    fn USART_TX() {
        interrupt::free(|cs| {
            if let Some(tx) = DMX_TX.borrow(cs).borrow_mut().as_mut() {
                tx.on_tx_complete(&UNIVERSE.borrow(cs).borrow());
            }
        });
    }

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();

        let mut dmx = SharedUniverse;
        let pins = board::Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);
        let mut panel = Panel::new(pins.buttons, pins.leds, &mut dmx);
        let mut delay = Delay::new(dp.TC0);

        #[cfg(not(feature = "debug"))]
        interrupt::free(|cs| {
            let mut slot = DMX_TX.borrow(cs).borrow_mut();
            let tx = slot.insert(DmxTransmitter::new(dp.USART0));
            tx.start(&UNIVERSE.borrow(cs).borrow());
        });

        #[cfg(feature = "debug")]
        let mut console = SerialConsole::new(ConsoleUart::new(dp.USART0));
        #[cfg(feature = "debug")]
        {
            console.write_line("DMX panel v0.1.0");
            console.write_line("Console mode, DMX output off");
        }

        // Enable interrupts globally
        unsafe { interrupt::enable() };

        loop {
            // Pin faults are recorded in the panel log; the scan itself never stops
            panel.poll(&mut dmx).ok();

            #[cfg(feature = "debug")]
            console.dump(panel.log_mut());

            delay.delay_ms(POLL_INTERVAL_MS);
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
