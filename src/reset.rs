//! LPn reset-line control for the VL53L5CX.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::DEFAULT_RESET_SETTLE_MS;

/// Level-triggered reset line wired to the sensor's LPn input.
pub struct ResetLine<P> {
    pin: P,
}

impl<P> ResetLine<P>
where
    P: OutputPin,
{
    /// Wraps a pin already configured as a push-pull output.
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Consumes the line and returns the owned pin.
    pub fn release(self) -> P {
        self.pin
    }

    /// Resets the sensor with the default 100 ms settle time per edge.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), P::Error> {
        self.pulse(delay, DEFAULT_RESET_SETTLE_MS)
    }

    /// Drives the line low, holds, drives it high, and holds again.
    pub fn pulse(&mut self, delay: &mut impl DelayNs, settle_ms: u32) -> Result<(), P::Error> {
        debug!("pulsing LPn, {} ms per edge", settle_ms);

        self.pin.set_low()?;
        delay.delay_ms(settle_ms);

        self.pin.set_high()?;
        delay.delay_ms(settle_ms);

        Ok(())
    }
}
