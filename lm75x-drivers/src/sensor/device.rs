//! Register-level access shared by every LM75-family part
//!
//! # Wire format
//!
//! - Register select: `START addr+W reg STOP`
//! - Register read: register select, then `START addr+R data.. STOP`
//! - Register write: `START addr+W reg data.. STOP`
//!
//! Multi-byte values are big-endian. Temperature registers are read as one
//! byte when the resolution is 8 bits or less, two bytes otherwise, and are
//! always written as two bytes.

use lm75x_core::attributes::{DeviceAttributes, Encoding};
use lm75x_core::codec::{celsius_to_fahrenheit, fahrenheit_to_celsius, TemperatureScale};
use lm75x_core::field::ConfigWord;
use lm75x_core::traits::TemperatureSensor;
use lm75x_hal::I2cBus;

/// A sensor on the bus, addressed through its register map
///
/// Holds the bus handle, the 7-bit address, the family's static attributes
/// and the current temperature encoding. The encoding is local state: it
/// changes how later reads are decoded but never touches the device.
pub struct RegisterDevice<I2C> {
    bus: I2C,
    address: u8,
    attributes: &'static DeviceAttributes,
    scale: TemperatureScale,
}

impl<I2C> RegisterDevice<I2C> {
    /// Create a device using the family's power-on encoding
    pub fn new(bus: I2C, address: u8, attributes: &'static DeviceAttributes) -> Self {
        Self {
            bus,
            address,
            attributes,
            scale: TemperatureScale::new(attributes),
        }
    }

    /// 7-bit I2C address
    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn attributes(&self) -> &'static DeviceAttributes {
        self.attributes
    }

    /// Current decoding of the temperature registers
    pub fn scale(&self) -> &TemperatureScale {
        &self.scale
    }

    pub fn resolution(&self) -> u8 {
        self.scale.resolution()
    }

    pub fn frac_width(&self) -> u8 {
        self.scale.frac_width()
    }

    /// Set the resolution used to decode reads (local only)
    ///
    /// Programming the device itself to convert at a different resolution
    /// is done through the configuration register.
    pub fn set_resolution(&mut self, resolution: u8) {
        self.scale.set_resolution(resolution);
    }

    /// Set the fractional width used by conversions (local only)
    pub fn set_fractional_width(&mut self, frac_width: u8) {
        self.scale.set_frac_width(frac_width);
    }

    /// Set resolution and fractional width together (local only)
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.scale.set_encoding(encoding);
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.bus
    }
}

impl<I2C: I2cBus> RegisterDevice<I2C> {
    /// Point the device's register pointer at `register`
    pub fn select_register(&mut self, register: u8) -> Result<(), I2C::Error> {
        self.bus.write(self.address, &[register])
    }

    /// Read a 1- or 2-byte register
    pub fn read_register<W: ConfigWord>(&mut self, register: u8) -> Result<W, I2C::Error> {
        self.select_register(register)?;
        let mut buf = [0u8; 2];
        self.bus.read(self.address, &mut buf[..W::BYTES])?;
        Ok(W::from_be_slice(&buf[..W::BYTES]))
    }

    /// Write a 1- or 2-byte register
    pub fn write_register<W: ConfigWord>(
        &mut self,
        register: u8,
        value: W,
    ) -> Result<(), I2C::Error> {
        let mut buf = [0u8; 3];
        buf[0] = register;
        value.write_be_slice(&mut buf[1..1 + W::BYTES]);
        self.bus.write(self.address, &buf[..1 + W::BYTES])
    }

    /// Read a temperature-format register as a signed raw value
    ///
    /// Reserved low bits beyond the current resolution are cleared before
    /// the value is signed.
    pub fn read_raw_temperature(&mut self, register: u8) -> Result<i16, I2C::Error> {
        self.select_register(register)?;
        let len = self.scale.read_len();
        let mut buf = [0u8; 2];
        self.bus.read(self.address, &mut buf[..len])?;
        Ok(self.scale.decode_register(u16::from_be_bytes(buf)))
    }

    /// Write a signed raw value to a temperature-format register
    ///
    /// Always a full 16-bit write, whatever the current resolution.
    pub fn write_raw_temperature(&mut self, register: u8, value: i16) -> Result<(), I2C::Error> {
        trace!("write temp reg {=u8} = {=i16}", register, value);
        self.write_register(register, value as u16)
    }

    fn read_celsius_at(&mut self, register: u8) -> Result<f32, I2C::Error> {
        let raw = self.read_raw_temperature(register)?;
        Ok(self.scale.to_celsius(raw))
    }

    fn write_celsius_at(&mut self, register: u8, celsius: f32) -> Result<(), I2C::Error> {
        let raw = self.scale.from_celsius(celsius);
        self.write_raw_temperature(register, raw)
    }

    /// Current temperature in °C
    pub fn read_temperature_c(&mut self) -> Result<f32, I2C::Error> {
        self.read_celsius_at(self.attributes.registers.temperature)
    }

    /// Current temperature in °F
    pub fn read_temperature_f(&mut self) -> Result<f32, I2C::Error> {
        self.read_temperature_c().map(celsius_to_fahrenheit)
    }

    /// Low threshold (T_HYST) in °C
    pub fn read_threshold_low_c(&mut self) -> Result<f32, I2C::Error> {
        self.read_celsius_at(self.attributes.registers.temperature_low)
    }

    pub fn read_threshold_low_f(&mut self) -> Result<f32, I2C::Error> {
        self.read_threshold_low_c().map(celsius_to_fahrenheit)
    }

    /// High threshold (T_OS) in °C
    pub fn read_threshold_high_c(&mut self) -> Result<f32, I2C::Error> {
        self.read_celsius_at(self.attributes.registers.temperature_high)
    }

    pub fn read_threshold_high_f(&mut self) -> Result<f32, I2C::Error> {
        self.read_threshold_high_c().map(celsius_to_fahrenheit)
    }

    pub fn set_threshold_low_c(&mut self, celsius: f32) -> Result<(), I2C::Error> {
        self.write_celsius_at(self.attributes.registers.temperature_low, celsius)
    }

    pub fn set_threshold_low_f(&mut self, fahrenheit: f32) -> Result<(), I2C::Error> {
        self.set_threshold_low_c(fahrenheit_to_celsius(fahrenheit))
    }

    pub fn set_threshold_high_c(&mut self, celsius: f32) -> Result<(), I2C::Error> {
        self.write_celsius_at(self.attributes.registers.temperature_high, celsius)
    }

    pub fn set_threshold_high_f(&mut self, fahrenheit: f32) -> Result<(), I2C::Error> {
        self.set_threshold_high_c(fahrenheit_to_celsius(fahrenheit))
    }
}

impl<I2C: I2cBus> TemperatureSensor for RegisterDevice<I2C> {
    type Error = I2C::Error;

    fn read_celsius(&mut self) -> Result<f32, Self::Error> {
        self.read_temperature_c()
    }
}
