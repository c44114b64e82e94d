//! Board-agnostic core of the LM75-family sensor drivers
//!
//! This crate contains everything about the sensors that does not need a
//! bus to exist:
//!
//! - Register layouts and per-family device attribute tables
//! - Raw register value <-> temperature conversion
//! - The configuration field table and typed field values
//! - Persisted sensor settings
//! - Sensor traits shared with application code

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod attributes;
pub mod codec;
pub mod config;
pub mod field;
pub mod traits;

pub use attributes::{DeviceAttributes, Encoding, RegisterLayout, DEFAULT_I2C_ADDRESS};
pub use codec::TemperatureScale;
pub use config::SensorSettings;
pub use field::{ConfigField, ConfigWord, FieldValue};
pub use traits::TemperatureSensor;
