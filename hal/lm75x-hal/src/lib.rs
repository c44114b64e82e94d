//! lm75x Hardware Abstraction Layer
//!
//! This crate defines the bus traits the sensor drivers are written
//! against. Anything that can perform addressed I2C reads and writes can
//! host an LM75-family sensor, whether it is a chip HAL, an
//! `embedded-hal` 1.0 implementation or a test double.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lm75x-drivers (sensor families)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lm75x-hal (this crate - bus traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  chip HAL /   │
//! │   1.0 I2c     │       │  test double  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C bus operations

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key traits at crate root for convenience
pub use i2c::{EmbeddedHalBus, I2cBus, I2cBusError};
