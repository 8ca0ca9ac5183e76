//! Input lines and the pending flags shared with interrupt context.

use core::sync::atomic::{AtomicBool, Ordering, compiler_fence};

use crate::hardware::traits::EdgeSource;

/// Number of monitored button lines.
pub const LINE_COUNT: usize = 4;

/// A monitored joystick direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputLine {
    Top,
    Bottom,
    Center,
    Left,
}

impl InputLine {
    /// Every line, in the order the action loop checks them.
    pub const ALL: [InputLine; LINE_COUNT] = [
        InputLine::Top,
        InputLine::Bottom,
        InputLine::Center,
        InputLine::Left,
    ];

    pub const fn index(self) -> usize {
        match self {
            InputLine::Top => 0,
            InputLine::Bottom => 1,
            InputLine::Center => 2,
            InputLine::Left => 3,
        }
    }
}

/// One-deep notification slot for a single line.
///
/// Set only from the line's interrupt handler, cleared only by the action
/// loop. Repeated sets before a clear collapse into one.
pub struct PendingFlag(AtomicBool);

impl PendingFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for PendingFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// The pending flags of all four lines, meant to live in a `static`.
pub struct PendingFlags {
    flags: [PendingFlag; LINE_COUNT],
}

impl PendingFlags {
    pub const fn new() -> Self {
        Self {
            flags: [
                PendingFlag::new(),
                PendingFlag::new(),
                PendingFlag::new(),
                PendingFlag::new(),
            ],
        }
    }

    pub fn flag(&self, line: InputLine) -> &PendingFlag {
        &self.flags[line.index()]
    }

    pub fn raise(&self, line: InputLine) {
        self.flag(line).raise();
    }

    pub fn is_pending(&self, line: InputLine) -> bool {
        self.flag(line).is_raised()
    }

    pub fn clear(&self, line: InputLine) {
        self.flag(line).clear();
    }

    /// True when no line has an unconsumed edge.
    pub fn is_idle(&self) -> bool {
        InputLine::ALL.iter().all(|&line| !self.is_pending(line))
    }
}

impl Default for PendingFlags {
    fn default() -> Self {
        Self::new()
    }
}

/// Interrupt-side handler for a rising edge on `line`.
///
/// Does nothing and returns `false` if the hardware has no edge latched for
/// this line (shared vectors fire for sibling lines too). Otherwise records the
/// edge and acknowledges it. The acknowledge must come after the flag is set:
/// an edge landing in between then re-enters the handler instead of being lost.
pub fn on_edge<S>(flags: &PendingFlags, source: &S, line: InputLine) -> bool
where
    S: EdgeSource + ?Sized,
{
    if !source.is_edge_pending(line) {
        return false;
    }

    flags.raise(line);
    compiler_fence(Ordering::SeqCst);
    source.acknowledge(line);
    true
}
