use crate::input::InputLine;
use crate::output::Level;

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);

    fn set_level(&mut self, level: Level) {
        match level {
            Level::On => self.on(),
            Level::Off => self.off(),
        }
    }
}

/// Rising-edge detection for the button lines.
///
/// Methods take `&self` so a `static` instance can be shared with the
/// interrupt handlers.
pub trait EdgeSource {
    /// Arms rising-edge detection for `line`. Idempotent.
    fn configure(&self, line: InputLine);

    /// Whether the hardware has latched an edge for `line`.
    fn is_edge_pending(&self, line: InputLine) -> bool;

    /// Clears the latched edge for `line`.
    fn acknowledge(&self, line: InputLine);
}

pub trait InterruptController {
    /// `rank` 0 is the most urgent.
    fn set_priority(&mut self, line: InputLine, rank: u8);
    fn enable(&mut self, line: InputLine);
}
