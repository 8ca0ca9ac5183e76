pub mod gpio_led;
pub mod pinout;
pub mod traits;

#[cfg(feature = "board")]
pub mod stm32;
