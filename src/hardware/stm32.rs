//! EXTI and NVIC backends for the STM32F401.

use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_stm32::pac::{self, Interrupt};

use super::pinout::{ExtiVector, button_pin};
use super::traits::{EdgeSource, InterruptController};
use crate::input::InputLine;

/// Rising-edge detection through SYSCFG/EXTI.
pub struct ExtiEdgeSource {
    _private: (),
}

impl ExtiEdgeSource {
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl EdgeSource for ExtiEdgeSource {
    fn configure(&self, line: InputLine) {
        let button = button_pin(line);
        let pin = button.pin as usize;

        // EXTICR and the EXTI mask registers are shared by all lines.
        cortex_m::interrupt::free(|_| {
            pac::RCC.apb2enr().modify(|w| w.set_syscfgen(true));
            pac::SYSCFG
                .exticr(pin / 4)
                .modify(|w| w.set_exti(pin % 4, button.port.exticr_code()));
            pac::EXTI.rtsr(0).modify(|w| w.set_line(pin, true));
            pac::EXTI.ftsr(0).modify(|w| w.set_line(pin, false));
            pac::EXTI.pr(0).write(|w| w.set_line(pin, true));
            pac::EXTI.imr(0).modify(|w| w.set_line(pin, true));
        });
    }

    fn is_edge_pending(&self, line: InputLine) -> bool {
        pac::EXTI.pr(0).read().line(button_pin(line).pin as usize)
    }

    fn acknowledge(&self, line: InputLine) {
        // PR is write-one-to-clear; a plain write leaves the other lines alone.
        pac::EXTI
            .pr(0)
            .write(|w| w.set_line(button_pin(line).pin as usize, true));
    }
}

/// NVIC control of the EXTI vectors the buttons use.
pub struct NvicLines {
    _private: (),
}

impl NvicLines {
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

fn irq(line: InputLine) -> Interrupt {
    match button_pin(line).vector() {
        ExtiVector::Exti0 => Interrupt::EXTI0,
        ExtiVector::Exti1 => Interrupt::EXTI1,
        ExtiVector::Exti2 => Interrupt::EXTI2,
        ExtiVector::Exti3 => Interrupt::EXTI3,
        ExtiVector::Exti4 => Interrupt::EXTI4,
        ExtiVector::Exti9_5 => Interrupt::EXTI9_5,
        ExtiVector::Exti15_10 => Interrupt::EXTI15_10,
    }
}

fn priority(rank: u8) -> Priority {
    match rank {
        0 => Priority::P0,
        1 => Priority::P1,
        2 => Priority::P2,
        3 => Priority::P3,
        _ => Priority::P4,
    }
}

impl InterruptController for NvicLines {
    fn set_priority(&mut self, line: InputLine, rank: u8) {
        irq(line).set_priority(priority(rank));
    }

    fn enable(&mut self, line: InputLine) {
        let irq = irq(line);
        irq.unpend();
        // SAFETY: the handlers only touch the pending flags and the EXTI
        // pending register, neither of which relies on a critical section.
        unsafe { irq.enable() };
    }
}
