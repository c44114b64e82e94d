//! LM75-family sensors
//!
//! - [`device`]: register access and temperature conversion shared by all parts
//! - [`config`]: 8- and 16-bit configuration register protocol
//! - [`family`]: family markers and the [`Sensor`] wrapper
//! - [`capability`]: configuration operations, gated per family
//! - [`parts`]: part-number aliases

pub mod capability;
pub mod config;
pub mod device;
pub mod family;
pub mod parts;

#[cfg(test)]
mod mock;

pub use config::{ConfigRegister, ExtendedRegister, StandardRegister};
pub use device::RegisterDevice;
pub use family::{
    ExtendedConfig, Family, OneShotBit, OneShotTriggerRegister, SelectableResolution, Sensor,
    StandardConfig,
};
