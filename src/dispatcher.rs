//! The action loop: the firmware's only thread-mode activity.

use heapless::Vec;

use crate::binding::{BINDINGS, Binding};
use crate::hardware::traits::Led;
use crate::input::{LINE_COUNT, PendingFlags};
use crate::output::Outputs;

/// Bindings applied by one [`ActionLoop::poll_once`], in application order.
pub type Applied = Vec<Binding, LINE_COUNT>;

/// Consumes pending flags and forces the bound outputs.
pub struct ActionLoop<'a, A, C> {
    flags: &'a PendingFlags,
    outputs: Outputs<A, C>,
}

impl<'a, A: Led, C: Led> ActionLoop<'a, A, C> {
    pub fn new(flags: &'a PendingFlags, outputs: Outputs<A, C>) -> Self {
        Self { flags, outputs }
    }

    /// Checks each line once, in binding order, and applies the binding of
    /// every line that had an edge.
    ///
    /// A flag is cleared only after its output was written. An edge landing
    /// between the read and the clear is absorbed; its level was just forced.
    /// An edge after the clear raises the flag again for a later pass.
    pub fn poll_once(&mut self) -> Applied {
        let mut applied = Applied::new();

        for binding in BINDINGS {
            if !self.flags.is_pending(binding.input) {
                continue;
            }

            self.outputs.set_level(binding.output, binding.level);
            self.flags.clear(binding.input);
            debug!(
                "{} -> {} {}",
                binding.input, binding.output, binding.level
            );

            // At most one entry per binding, so capacity is never exceeded.
            let pushed = applied.push(binding);
            debug_assert!(pushed.is_ok(), "applied list overflow");
        }

        applied
    }

    /// Polls without pause until reset.
    pub fn run_forever(&mut self) -> ! {
        info!("action loop running");
        loop {
            self.poll_once();
        }
    }

    pub fn outputs(&self) -> &Outputs<A, C> {
        &self.outputs
    }

    pub fn into_outputs(self) -> Outputs<A, C> {
        self.outputs
    }
}
