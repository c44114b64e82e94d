//! Drivers for LM75-family temperature sensors
//!
//! One generic register device serves every supported part. Each part is a
//! [`sensor::Sensor`] tagged with a family marker, and the marker decides at
//! compile time which capabilities are available:
//!
//! - Standard configuration (fault queue, alert polarity, thermostat mode,
//!   shutdown) on every LM75-compatible part
//! - Resolution select on 9..12-bit parts
//! - One-shot conversion via a configuration bit or a trigger register
//! - Extended mode, conversion rate and alert status on TMP102-style parts
//!
//! ```ignore
//! use lm75x_drivers::prelude::*;
//! use lm75x_drivers::sensor::parts::Tmp102Sensor;
//!
//! let mut sensor = Tmp102Sensor::new(bus);
//! sensor.set_conversion_rate(ConversionRate::Hz8)?;
//! sensor.enable_extended_mode()?;
//! let c = sensor.read_temperature_c()?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod sensor;

/// Everything needed to drive a sensor
pub mod prelude {
    pub use crate::sensor::capability::*;
    pub use crate::sensor::config::ConfigurationRegister;
    pub use crate::sensor::{RegisterDevice, Sensor};
    pub use lm75x_core::field::{
        AlertPolarity, ConversionRate, ConversionResolution, FaultQueueLength, ThermostatMode,
    };
    pub use lm75x_core::{SensorSettings, TemperatureSensor};
}
