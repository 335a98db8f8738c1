//! Pan/tilt/focus pushbutton panel for a DMX512 moving head.
//!
//! Everything except [`hal`] is target independent and is tested on the host
//! with `cargo test`.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod dmx;
pub mod drivers;
pub mod logger;
pub mod panel;

#[cfg(target_arch = "avr")]
pub mod hal;
