use super::traits::Led;
use embedded_hal::digital::{Error, OutputPin};

/// LED on a push-pull pin. `on` drives the pin high.
pub struct GpioLed<P> {
    pin: P,
}

impl<P: OutputPin> GpioLed<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Led for GpioLed<P> {
    fn on(&mut self) {
        if let Err(e) = self.pin.set_high() {
            warn!("led write failed: {}", e.kind());
        }
    }

    fn off(&mut self) {
        if let Err(e) = self.pin.set_low() {
            warn!("led write failed: {}", e.kind());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Level;
    use embedded_hal_mock::eh1::MockError;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

    #[test]
    fn on_drives_high_and_off_drives_low() {
        let expectations = [
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ];
        let mut led = GpioLed::new(PinMock::new(&expectations));

        led.on();
        led.off();

        led.release().done();
    }

    #[test]
    fn set_level_forces_without_reading_back() {
        let expectations = [
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ];
        let mut led = GpioLed::new(PinMock::new(&expectations));

        led.set_level(Level::Off);
        led.set_level(Level::Off);
        led.set_level(Level::On);

        led.release().done();
    }

    #[test]
    fn write_error_is_swallowed() {
        let expectations = [
            PinTransaction::set(State::High).with_error(MockError::Io(std::io::ErrorKind::Other)),
            PinTransaction::set(State::Low),
        ];
        let mut led = GpioLed::new(PinMock::new(&expectations));

        led.on();
        led.off();

        led.release().done();
    }
}
