//! Output lines driven by the action loop.

use crate::hardware::traits::Led;

/// One of the two LEDs the buttons drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputLine {
    LedA,
    LedC,
}

/// Electrical level an output is forced to. `On` drives the pin high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    On,
    Off,
}

/// Level both outputs hold after startup.
pub const DEFAULT_LEVEL: Level = Level::On;

/// The two bound LEDs.
pub struct Outputs<A, C> {
    led_a: A,
    led_c: C,
}

impl<A: Led, C: Led> Outputs<A, C> {
    pub fn new(led_a: A, led_c: C) -> Self {
        Self { led_a, led_c }
    }

    pub fn set_level(&mut self, line: OutputLine, level: Level) {
        match line {
            OutputLine::LedA => self.led_a.set_level(level),
            OutputLine::LedC => self.led_c.set_level(level),
        }
    }

    pub fn led_a(&self) -> &A {
        &self.led_a
    }

    pub fn led_c(&self) -> &C {
        &self.led_c
    }

    pub fn into_inner(self) -> (A, C) {
        (self.led_a, self.led_c)
    }
}
