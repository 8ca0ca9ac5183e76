//! Fixed button-to-LED table.
//!
//! Every binding forces its output to a level regardless of the current one.
//! Top and Bottom share LedC with opposite levels, Center and Left share LedA.

use crate::input::{InputLine, LINE_COUNT};
use crate::output::{Level, OutputLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Binding {
    pub input: InputLine,
    pub output: OutputLine,
    pub level: Level,
}

/// All bindings, in the order the action loop applies them.
pub const BINDINGS: [Binding; LINE_COUNT] = [
    Binding {
        input: InputLine::Top,
        output: OutputLine::LedC,
        level: Level::Off,
    },
    Binding {
        input: InputLine::Bottom,
        output: OutputLine::LedC,
        level: Level::On,
    },
    Binding {
        input: InputLine::Center,
        output: OutputLine::LedA,
        level: Level::On,
    },
    Binding {
        input: InputLine::Left,
        output: OutputLine::LedA,
        level: Level::Off,
    },
];

pub const fn binding_for(line: InputLine) -> Binding {
    BINDINGS[line.index()]
}
