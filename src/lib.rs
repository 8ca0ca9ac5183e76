//! Joystick-to-LED control loop for an STM32F401 board.
//!
//! Four EXTI button lines raise pending flags from interrupt context; a single
//! spinning loop consumes them and forces two LEDs to fixed levels.
//!
//! Everything except `hardware::stm32` (feature `board`) builds on the host, which is where the
//! tests run.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod binding;
pub mod dispatcher;
pub mod hardware;
pub mod input;
pub mod output;
pub mod platform;
