//! Device families
//!
//! A family is a zero-sized marker type. It names the static attribute
//! table its parts use and, through the marker traits it implements, which
//! capabilities [`Sensor`] exposes for it. Capability selection happens at
//! compile time: calling `enable_extended_mode` on an LM75 does not build.
//!
//! | Family | Attributes | Capabilities |
//! |--------|------------|--------------|
//! | [`Generic9Bit`] | 9 bit | standard |
//! | [`Generic10Bit`] | 10 bit | standard |
//! | [`Generic11Bit`] | 11 bit | standard |
//! | [`Generic12Bit`] | 12 bit | standard |
//! | [`Selectable9To12Bit`] | 12 bit | standard, resolution select |
//! | [`Selectable9To12BitOneShot`] | 12 bit | standard, resolution select, one-shot bit |
//! | [`Nct75`] | 12 bit | standard, one-shot register |
//! | [`Tmp102`] | 12/13 bit | standard, resolution select, one-shot bit, extended |

use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

use lm75x_core::attributes::{
    DeviceAttributes, Encoding, DEFAULT_I2C_ADDRESS, GENERIC_LM75, GENERIC_LM75_10BIT,
    GENERIC_LM75_11BIT, GENERIC_LM75_12BIT, TI_TMP102, TMP102_EXTENDED, TMP102_NORMAL,
};
use lm75x_core::traits::TemperatureSensor;
use lm75x_hal::I2cBus;

use super::config::{ExtendedRegister, StandardRegister};
use super::device::RegisterDevice;

/// A device family
pub trait Family {
    /// Attribute table shared by every part of the family
    fn attributes() -> &'static DeviceAttributes;
}

/// 8-bit configuration register with fault queue, alert polarity,
/// thermostat mode and shutdown
pub trait StandardConfig: Family {}

/// 2-bit conversion resolution field (9..12 bits)
pub trait SelectableResolution: StandardConfig {}

/// One-shot trigger / ready bit in the configuration register
pub trait OneShotBit: SelectableResolution {}

/// Separate one-shot trigger register
pub trait OneShotTriggerRegister: StandardConfig {
    /// Register index written to start a conversion
    const TRIGGER_REGISTER: u8;
}

/// 16-bit configuration register with extended mode, alert flag and
/// conversion rate
pub trait ExtendedConfig: OneShotBit {
    /// Encoding while extended mode is off
    const NORMAL: Encoding;
    /// Encoding while extended mode is on
    const EXTENDED: Encoding;
}

macro_rules! family {
    ($(#[$meta:meta])* $name:ident => $attributes:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl Family for $name {
            fn attributes() -> &'static DeviceAttributes {
                &$attributes
            }
        }
    };
}

family!(
    /// Original 9-bit LM75
    Generic9Bit => GENERIC_LM75
);
family!(
    /// Fixed 10-bit LM75 derivative
    Generic10Bit => GENERIC_LM75_10BIT
);
family!(
    /// Fixed 11-bit LM75 derivative
    Generic11Bit => GENERIC_LM75_11BIT
);
family!(
    /// Fixed 12-bit LM75 derivative
    Generic12Bit => GENERIC_LM75_12BIT
);
family!(
    /// 9..12-bit selectable parts (DS75 style)
    Selectable9To12Bit => GENERIC_LM75_12BIT
);
family!(
    /// 9..12-bit selectable parts with one-shot (TMP75 / MCP980x style)
    Selectable9To12BitOneShot => GENERIC_LM75_12BIT
);
family!(
    /// ON Semiconductor NCT75 / NCT375
    Nct75 => GENERIC_LM75_12BIT
);
family!(
    /// TI TMP102 / TMP112
    Tmp102 => TI_TMP102
);

impl StandardConfig for Generic9Bit {}
impl StandardConfig for Generic10Bit {}
impl StandardConfig for Generic11Bit {}
impl StandardConfig for Generic12Bit {}
impl StandardConfig for Selectable9To12Bit {}
impl StandardConfig for Selectable9To12BitOneShot {}
impl StandardConfig for Nct75 {}
impl StandardConfig for Tmp102 {}

impl SelectableResolution for Selectable9To12Bit {}
impl SelectableResolution for Selectable9To12BitOneShot {}
impl SelectableResolution for Tmp102 {}

impl OneShotBit for Selectable9To12BitOneShot {}
impl OneShotBit for Tmp102 {}

impl OneShotTriggerRegister for Nct75 {
    const TRIGGER_REGISTER: u8 = lm75x_core::field::NCT_ONE_SHOT_REGISTER;
}

impl ExtendedConfig for Tmp102 {
    const NORMAL: Encoding = TMP102_NORMAL;
    const EXTENDED: Encoding = TMP102_EXTENDED;
}

/// A sensor of family `F` on bus `I2C`
///
/// Dereferences to the underlying [`RegisterDevice`] for temperature and
/// threshold access; configuration goes through the capability traits.
pub struct Sensor<I2C, F> {
    device: RegisterDevice<I2C>,
    family: PhantomData<F>,
}

impl<I2C, F: Family> Sensor<I2C, F> {
    /// Create a sensor at the default address (0x48)
    pub fn new(bus: I2C) -> Self {
        Self::with_address(bus, DEFAULT_I2C_ADDRESS)
    }

    /// Create a sensor at `address` (7-bit)
    pub fn with_address(bus: I2C, address: u8) -> Self {
        Self {
            device: RegisterDevice::new(bus, address, F::attributes()),
            family: PhantomData,
        }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.device.release()
    }
}

impl<I2C, F: StandardConfig> Sensor<I2C, F> {
    /// The 8-bit configuration register
    pub fn standard_register(&mut self) -> StandardRegister<'_, I2C> {
        StandardRegister::new(&mut self.device)
    }
}

impl<I2C, F: ExtendedConfig> Sensor<I2C, F> {
    /// The 16-bit configuration register
    pub fn extended_register(&mut self) -> ExtendedRegister<'_, I2C> {
        ExtendedRegister::new(&mut self.device)
    }
}

impl<I2C, F> Deref for Sensor<I2C, F> {
    type Target = RegisterDevice<I2C>;

    fn deref(&self) -> &Self::Target {
        &self.device
    }
}

impl<I2C, F> DerefMut for Sensor<I2C, F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.device
    }
}

impl<I2C: I2cBus, F> TemperatureSensor for Sensor<I2C, F> {
    type Error = I2C::Error;

    fn read_celsius(&mut self) -> Result<f32, Self::Error> {
        self.device.read_temperature_c()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::mock::MockBus;

    #[test]
    fn test_default_address() {
        let mut bus = MockBus::new();
        let sensor: Sensor<_, Generic9Bit> = Sensor::new(&mut bus);
        assert_eq!(sensor.address(), 0x48);
        assert_eq!(sensor.resolution(), 9);
    }

    #[test]
    fn test_with_address() {
        let mut bus = MockBus::new();
        bus.address = 0x4C;
        bus.set_register(0x00, 0x1900);
        let mut sensor: Sensor<_, Tmp102> = Sensor::with_address(&mut bus, 0x4C);

        assert_eq!(sensor.address(), 0x4C);
        assert_eq!(sensor.read_celsius(), Ok(25.0));
    }

    #[test]
    fn test_family_attributes() {
        assert!(core::ptr::eq(Generic9Bit::attributes(), &GENERIC_LM75));
        assert!(core::ptr::eq(Generic11Bit::attributes(), &GENERIC_LM75_11BIT));
        assert!(core::ptr::eq(Nct75::attributes(), &GENERIC_LM75_12BIT));
        assert!(core::ptr::eq(Tmp102::attributes(), &TI_TMP102));
        assert_eq!(Nct75::TRIGGER_REGISTER, 0x04);
        assert_eq!(Tmp102::EXTENDED.resolution, 13);
    }

    #[test]
    fn test_sensors_share_attribute_table() {
        let mut bus_a = MockBus::new();
        let mut bus_b = MockBus::new();
        let a: Sensor<_, Generic12Bit> = Sensor::new(&mut bus_a);
        let b: Sensor<_, Selectable9To12Bit> = Sensor::new(&mut bus_b);
        assert!(core::ptr::eq(a.attributes(), b.attributes()));
    }

    #[test]
    fn test_release_returns_bus() {
        let sensor: Sensor<_, Generic10Bit> = Sensor::new(MockBus::new());
        let bus = sensor.release();
        assert!(bus.log.is_empty());
    }
}
