//! Nucleo-F401RE Joystick Shield LED Control
//! =============================================================================================
//!
//! The four joystick directions raise EXTI interrupts; the main loop forces two of the
//! shield's LED channels to a fixed level per button.
//!
//! Hardware Connections (joystick/RGB shield on the Arduino header):
//!   Joystick -> Nucleo
//!      UP     -> PA4 (EXTI4, highest priority)
//!      DOWN   -> PB0 (EXTI0)
//!      CENTER -> PB5 (EXTI9_5)
//!      LEFT   -> PC1 (EXTI1, lowest priority)
//!
//!   LEDs:
//!      LED A  -> PA9   (CENTER on, LEFT off)
//!      LED B  -> PB4   (held at its startup level)
//!      LED C  -> PC7   (UP off, DOWN on)
//!
//! Flash and watch logs with `cargo run --release --features board --target thumbv7em-none-eabihf`.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt_rtt as _; // Global logger
use embassy_stm32::{
    gpio::{Input, Level, Output, Pull, Speed},
    interrupt,
};
use panic_probe as _; // Panic handler

use joystick_leds::{
    dispatcher::ActionLoop,
    hardware::{
        gpio_led::GpioLed,
        stm32::{ExtiEdgeSource, NvicLines},
    },
    input::{InputLine, PendingFlags, on_edge},
    output::Outputs,
    platform,
};

// Edge notifications shared between the EXTI handlers and the main loop
static PENDING: PendingFlags = PendingFlags::new();

static EXTI: ExtiEdgeSource = ExtiEdgeSource::new();

#[entry]
fn main() -> ! {
    let p = embassy_stm32::init(Default::default());
    defmt::info!("joystick leds starting");

    // LED pins, push-pull, asserted from the start
    let led_a = GpioLed::new(Output::new(p.PA9, Level::High, Speed::Low));
    let led_c = GpioLed::new(Output::new(p.PC7, Level::High, Speed::Low));
    let _led_b = Output::new(p.PB4, Level::High, Speed::Low);

    let mut outputs = Outputs::new(led_a, led_c);
    platform::init_outputs(&mut outputs);

    // Button pins as plain inputs; edge detection is set up through EXTI below.
    // They must stay alive, dropping them returns the pins to analog mode.
    let _top = Input::new(p.PA4, Pull::None);
    let _bottom = Input::new(p.PB0, Pull::None);
    let _center = Input::new(p.PB5, Pull::None);
    let _left = Input::new(p.PC1, Pull::None);

    platform::init_inputs_and_interrupts(&EXTI, &mut NvicLines::new());

    ActionLoop::new(&PENDING, outputs).run_forever()
}

#[interrupt]
fn EXTI4() {
    on_edge(&PENDING, &EXTI, InputLine::Top);
}

#[interrupt]
fn EXTI0() {
    on_edge(&PENDING, &EXTI, InputLine::Bottom);
}

#[interrupt]
fn EXTI9_5() {
    on_edge(&PENDING, &EXTI, InputLine::Center);
}

#[interrupt]
fn EXTI1() {
    on_edge(&PENDING, &EXTI, InputLine::Left);
}
