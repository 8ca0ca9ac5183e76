//! Startup sequence handed to the board collaborator.

use crate::hardware::traits::{EdgeSource, InterruptController, Led};
use crate::input::{InputLine, LINE_COUNT};
use crate::output::{DEFAULT_LEVEL, OutputLine, Outputs};

/// Interrupt priority order, highest first. Position in the list is the rank
/// handed to [`InterruptController::set_priority`].
pub const PRIORITY_ORDER: [InputLine; LINE_COUNT] = [
    InputLine::Top,
    InputLine::Bottom,
    InputLine::Center,
    InputLine::Left,
];

/// Rank of `line` in [`PRIORITY_ORDER`]; 0 is the most urgent.
pub const fn priority_rank(line: InputLine) -> u8 {
    let mut rank = 0;
    while PRIORITY_ORDER[rank].index() != line.index() {
        rank += 1;
    }
    rank as u8
}

/// Drives both LEDs to their asserted level. Call once before the loop.
pub fn init_outputs<A: Led, C: Led>(outputs: &mut Outputs<A, C>) {
    outputs.set_level(OutputLine::LedA, DEFAULT_LEVEL);
    outputs.set_level(OutputLine::LedC, DEFAULT_LEVEL);
}

/// Arms edge detection on every line, assigns priorities and only then
/// unmasks the interrupts. Call once before the loop.
pub fn init_inputs_and_interrupts<S, I>(source: &S, irqs: &mut I)
where
    S: EdgeSource + ?Sized,
    I: InterruptController,
{
    for line in InputLine::ALL {
        source.configure(line);
        trace!("configured {}", line);
    }

    for line in PRIORITY_ORDER {
        let rank = priority_rank(line);
        irqs.set_priority(line, rank);
        trace!("{} priority {}", line, rank);
    }

    for line in PRIORITY_ORDER {
        irqs.enable(line);
    }

    info!("edge interrupts enabled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Step {
        Configure(InputLine),
        Priority(InputLine, u8),
        Enable(InputLine),
    }

    #[derive(Default)]
    struct Recorder {
        steps: RefCell<Vec<Step>>,
    }

    impl EdgeSource for Recorder {
        fn configure(&self, line: InputLine) {
            self.steps.borrow_mut().push(Step::Configure(line));
        }

        fn is_edge_pending(&self, _line: InputLine) -> bool {
            false
        }

        fn acknowledge(&self, _line: InputLine) {}
    }

    struct Irqs<'a>(&'a Recorder);

    impl InterruptController for Irqs<'_> {
        fn set_priority(&mut self, line: InputLine, rank: u8) {
            self.0.steps.borrow_mut().push(Step::Priority(line, rank));
        }

        fn enable(&mut self, line: InputLine) {
            self.0.steps.borrow_mut().push(Step::Enable(line));
        }
    }

    #[test]
    fn ranks_follow_declared_order() {
        assert_eq!(priority_rank(InputLine::Top), 0);
        assert_eq!(priority_rank(InputLine::Bottom), 1);
        assert_eq!(priority_rank(InputLine::Center), 2);
        assert_eq!(priority_rank(InputLine::Left), 3);
    }

    #[test]
    fn interrupts_are_enabled_last() {
        let recorder = Recorder::default();
        init_inputs_and_interrupts(&recorder, &mut Irqs(&recorder));

        let steps = recorder.steps.into_inner();
        assert_eq!(steps.len(), 3 * LINE_COUNT);

        let first_enable = steps
            .iter()
            .position(|s| matches!(s, Step::Enable(_)))
            .unwrap();
        assert_eq!(first_enable, 2 * LINE_COUNT);
        assert!(steps[..LINE_COUNT].iter().all(|s| matches!(s, Step::Configure(_))));
        assert!(
            steps[LINE_COUNT..first_enable]
                .iter()
                .all(|s| matches!(s, Step::Priority(..)))
        );
    }

    #[test]
    fn every_line_is_configured_prioritised_and_enabled() {
        let recorder = Recorder::default();
        init_inputs_and_interrupts(&recorder, &mut Irqs(&recorder));
        let steps = recorder.steps.into_inner();

        for line in InputLine::ALL {
            assert!(steps.contains(&Step::Configure(line)));
            assert!(steps.contains(&Step::Priority(line, priority_rank(line))));
            assert!(steps.contains(&Step::Enable(line)));
        }
    }
}
