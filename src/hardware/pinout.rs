//! Joystick shield wiring on the Nucleo-F401RE.

use crate::input::{InputLine, LINE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
}

impl Port {
    /// Port selector value for `SYSCFG_EXTICRx`.
    pub const fn exticr_code(self) -> u8 {
        match self {
            Port::A => 0,
            Port::B => 1,
            Port::C => 2,
        }
    }
}

/// NVIC vector serving an EXTI line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExtiVector {
    Exti0,
    Exti1,
    Exti2,
    Exti3,
    Exti4,
    Exti9_5,
    Exti15_10,
}

impl ExtiVector {
    pub const fn for_pin(pin: u8) -> Self {
        match pin {
            0 => ExtiVector::Exti0,
            1 => ExtiVector::Exti1,
            2 => ExtiVector::Exti2,
            3 => ExtiVector::Exti3,
            4 => ExtiVector::Exti4,
            5..=9 => ExtiVector::Exti9_5,
            _ => ExtiVector::Exti15_10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPin {
    pub line: InputLine,
    pub port: Port,
    /// Pin number, which is also the EXTI line number.
    pub pin: u8,
}

impl ButtonPin {
    pub const fn vector(&self) -> ExtiVector {
        ExtiVector::for_pin(self.pin)
    }
}

pub const BUTTON_PINS: [ButtonPin; LINE_COUNT] = [
    ButtonPin {
        line: InputLine::Top,
        port: Port::A,
        pin: 4,
    },
    ButtonPin {
        line: InputLine::Bottom,
        port: Port::B,
        pin: 0,
    },
    ButtonPin {
        line: InputLine::Center,
        port: Port::B,
        pin: 5,
    },
    ButtonPin {
        line: InputLine::Left,
        port: Port::C,
        pin: 1,
    },
];

pub const fn button_pin(line: InputLine) -> ButtonPin {
    BUTTON_PINS[line.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PRIORITY_ORDER;

    #[test]
    fn table_is_indexed_by_line() {
        for line in InputLine::ALL {
            assert_eq!(button_pin(line).line, line);
        }
    }

    #[test]
    fn exti_lines_are_distinct() {
        for (i, a) in BUTTON_PINS.iter().enumerate() {
            for b in &BUTTON_PINS[i + 1..] {
                assert_ne!(a.pin, b.pin, "{:?} and {:?} share an EXTI line", a.line, b.line);
            }
        }
    }

    #[test]
    fn each_line_has_its_own_vector() {
        for (i, a) in BUTTON_PINS.iter().enumerate() {
            for b in &BUTTON_PINS[i + 1..] {
                assert_ne!(a.vector(), b.vector());
            }
        }
    }

    #[test]
    fn vectors_match_board() {
        assert_eq!(button_pin(InputLine::Top).vector(), ExtiVector::Exti4);
        assert_eq!(button_pin(InputLine::Bottom).vector(), ExtiVector::Exti0);
        assert_eq!(button_pin(InputLine::Center).vector(), ExtiVector::Exti9_5);
        assert_eq!(button_pin(InputLine::Left).vector(), ExtiVector::Exti1);
    }

    #[test]
    fn priority_order_covers_every_pin() {
        for pin in BUTTON_PINS {
            assert!(PRIORITY_ORDER.contains(&pin.line));
        }
    }
}
