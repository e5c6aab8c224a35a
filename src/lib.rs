//! Driver for the Sharp GP2Y0A21YK analog infrared distance ranger
//! (part # R301-GP2Y0A21YK).
//!
//! The sensor outputs a voltage that is sampled over one analog input
//! channel and mapped to a distance through two empirically fitted curves:
//! - Far mode: power-law fit of the manufacturer's typical response curve,
//!   reasonable accuracy over the rated 10-80 cm.
//! - Close mode: linear guess for targets closer than 10 cm, uncalibrated.
//!
//! The two regimes cannot be merged: one voltage value can represent two
//! distances (one near, one far), so the caller selects the regime from
//! deployment geometry via [`IrSensor::set_close_mode`].
//!
//! Compatibility:
//! - Should also work with the GP2Y0A21YK0F (RoHS variant of the same part).
//! - Might work with the GP2D12 (narrower detection area) - verify against
//!   known distances before relying on it.
//!
//! Sampling goes through `embedded_hal::adc::OneShot`, so the driver runs
//! against any HAL that implements it and against a fake ADC in tests.

#![cfg_attr(not(test), no_std)]

pub mod curve;
pub mod sensor;

pub use curve::RangeMode;
pub use sensor::IrSensor;
