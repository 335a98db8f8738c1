pub mod button_handler;
pub mod indicators;
pub mod serial_console;

pub use button_handler::{ButtonEvent, ButtonHandler};
pub use indicators::{Indicator, Indicators};
pub use serial_console::SerialConsole;
