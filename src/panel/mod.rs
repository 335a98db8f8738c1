//! Panel controller
//!
//! Scans the nine buttons in slot order once per call to [`Panel::poll`]:
//! toggle buttons latch a mode flag and light its LED, movement and focus
//! buttons write their channel pattern on press and black out the whole
//! universe on release.

pub mod pattern;
pub mod role;

pub use pattern::ChannelCommand;
pub use role::{Role, Toggle, Toggles, ROLE_MAP};

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::config::{NUM_BUTTONS, NUM_INDICATORS};
use crate::dmx::DmxOutput;
use crate::drivers::{ButtonEvent, ButtonHandler, Indicator, Indicators};
use crate::logger::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    /// Reading the button line failed; it was skipped this cycle
    Input { slot: u8 },
    /// Driving the LED failed (1-based indicator number)
    Indicator { index: u8 },
}

impl PanelError {
    fn log_slot(self) -> u8 {
        match self {
            PanelError::Input { slot } => slot,
            PanelError::Indicator { index } => index - 1,
        }
    }

    fn log_source(self) -> u8 {
        match self {
            PanelError::Input { .. } => 0,
            PanelError::Indicator { .. } => 1,
        }
    }
}

pub type Result<T> = core::result::Result<T, PanelError>;

/// LED that mirrors each mode flag.
fn indicator_toggle(indicator: Indicator) -> Toggle {
    match indicator {
        Indicator::Led1 => Toggle::Fine,
        Indicator::Led2 => Toggle::FlipX,
        Indicator::Led3 => Toggle::FlipY,
    }
}

pub struct Panel<B, L> {
    buttons: ButtonHandler<B, NUM_BUTTONS>,
    indicators: Indicators<L>,
    toggles: Toggles,
    tick: u32,
    log: Logger,
}

impl<B: InputPin, L: OutputPin> Panel<B, L> {
    /// Blacks out the universe, takes the buttons as released and switches
    /// every LED off.
    ///
    /// Buttons must be pull-up inputs and LEDs outputs already. LED faults
    /// are only logged.
    pub fn new<D: DmxOutput>(buttons: [B; NUM_BUTTONS], leds: [L; NUM_INDICATORS], dmx: &mut D) -> Self {
        dmx.reset_all();

        let mut panel = Self {
            buttons: ButtonHandler::new(buttons),
            indicators: Indicators::new(leds),
            toggles: Toggles::default(),
            tick: 0,
            log: Logger::new(),
        };

        for (number, indicator) in (1u8..).zip(Indicator::ALL) {
            if panel.indicators.set(indicator, false).is_err() {
                panel.record_fault(PanelError::Indicator { index: number });
            }
        }

        panel
    }

    /// Run one scan over all button lines.
    ///
    /// A failing line does not stop the scan; the first fault of the cycle is
    /// returned after every line has been handled.
    pub fn poll<D: DmxOutput>(&mut self, dmx: &mut D) -> Result<()> {
        self.tick = self.tick.wrapping_add(1);

        let mut fault = None;
        for slot in 0..NUM_BUTTONS {
            if let Err(err) = self.scan_slot(slot, dmx) {
                self.record_fault(err);
                fault.get_or_insert(err);
            }
        }

        match fault {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn scan_slot<D: DmxOutput>(&mut self, slot: usize, dmx: &mut D) -> Result<()> {
        let event = self
            .buttons
            .poll_slot(slot)
            .map_err(|_| PanelError::Input { slot: slot as u8 })?;

        match event {
            Some(ButtonEvent::Pressed(slot)) => self.on_press(slot, dmx),
            Some(ButtonEvent::Released(slot)) => {
                self.on_release(slot, dmx);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn on_press<D: DmxOutput>(&mut self, slot: usize, dmx: &mut D) -> Result<()> {
        let role = ROLE_MAP[slot];
        self.log.log_press(self.tick, slot as u8, role as u8);

        match role.toggle() {
            Some(toggle) => {
                let state = self.toggles.flip(toggle);
                self.log.log_toggle(self.tick, slot as u8, state);
            }
            None => {
                if let Some(command) = ChannelCommand::for_role(role, &self.toggles) {
                    command.send(dmx);
                }
            }
        }

        self.update_indicator(slot + 1)
    }

    fn on_release<D: DmxOutput>(&mut self, slot: usize, dmx: &mut D) {
        let role = ROLE_MAP[slot];
        self.log.log_release(self.tick, slot as u8, role as u8);

        if !role.is_toggle() {
            dmx.reset_all();
            self.log.log_reset(self.tick, slot as u8);
        }
    }

    fn update_indicator(&mut self, button_number: usize) -> Result<()> {
        let Some(indicator) = Indicator::for_button_number(button_number) else {
            return Ok(());
        };

        let on = self.toggles.get(indicator_toggle(indicator));
        self.indicators
            .set(indicator, on)
            .map_err(|_| PanelError::Indicator {
                index: button_number as u8,
            })
    }

    fn record_fault(&mut self, err: PanelError) {
        self.log.log_fault(self.tick, err.log_slot(), err.log_source());
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    pub fn is_pressed(&self, slot: usize) -> bool {
        self.buttons.is_pressed(slot)
    }

    /// Number of completed scans.
    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn log_mut(&mut self) -> &mut Logger {
        &mut self.log
    }

    pub fn release(self) -> ([B; NUM_BUTTONS], [L; NUM_INDICATORS]) {
        (self.buttons.release(), self.indicators.release())
    }
}
