//! GP2Y0A21YK driver over one analog input pin.
//!
//! The driver owns the pin and samples it through any ADC implementing
//! `embedded_hal::adc::OneShot`. Nothing is cached: every range query takes
//! a fresh sample, blocking on the converter. There is no internal locking;
//! serialize access externally if more than one context touches the sensor.

use embedded_hal::adc::{Channel, OneShot};

use crate::curve::{self, RangeMode};

/// One GP2Y0A21YK ranger wired to one analog input pin.
///
/// The pin is fixed at construction. The regime flag may be switched at any
/// time and applies from the next query; the caller must know from
/// deployment geometry which regime the target is in, because the sensor's
/// voltage output is ambiguous over its full span and the driver never
/// picks for you.
pub struct IrSensor<PIN> {
    pin: PIN,
    mode: RangeMode,
}

impl<PIN> IrSensor<PIN> {
    /// Create a driver for the ranger wired to `pin`.
    ///
    /// Starts in far mode, the manufacturer-rated regime.
    pub fn new(pin: PIN) -> Self {
        Self {
            pin,
            mode: RangeMode::Far,
        }
    }

    /// Select the short-range linear fit (`true`) or the rated power fit
    /// (`false`). Effective from the next query.
    pub fn set_close_mode(&mut self, close: bool) {
        self.mode = if close {
            RangeMode::Close
        } else {
            RangeMode::Far
        };
    }

    /// Currently selected regime.
    pub fn mode(&self) -> RangeMode {
        self.mode
    }

    /// Release the pin.
    pub fn release(self) -> PIN {
        self.pin
    }

    /// Take one raw sample and return it unconverted.
    pub fn read_raw<ADC, WORD, A>(&mut self, adc: &mut A) -> nb::Result<u16, A::Error>
    where
        A: OneShot<ADC, WORD, PIN>,
        PIN: Channel<ADC>,
        WORD: Into<u16>,
    {
        adc.read(&mut self.pin).map(Into::into)
    }

    /// Distance estimate in centimeters from one fresh sample.
    pub fn range_cm<ADC, WORD, A>(&mut self, adc: &mut A) -> nb::Result<f32, A::Error>
    where
        A: OneShot<ADC, WORD, PIN>,
        PIN: Channel<ADC>,
        WORD: Into<u16>,
    {
        let raw = self.read_raw(adc)?;
        Ok(curve::range_cm(self.mode, raw))
    }

    /// Distance estimate in inches.
    ///
    /// Takes its own sample rather than reusing a prior reading; callers
    /// wanting both units from a single moment should convert one result
    /// with [`curve::cm_to_in`] instead.
    pub fn range_in<ADC, WORD, A>(&mut self, adc: &mut A) -> nb::Result<f32, A::Error>
    where
        A: OneShot<ADC, WORD, PIN>,
        PIN: Channel<ADC>,
        WORD: Into<u16>,
    {
        let cm = self.range_cm(adc)?;
        Ok(curve::cm_to_in(cm))
    }
}
