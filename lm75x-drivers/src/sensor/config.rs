//! Configuration register protocol
//!
//! The standard protocol drives an 8-bit configuration register, the
//! extended protocol a 16-bit one (TMP102-style parts, where the second
//! byte holds conversion rate, alert flag and extended-mode select).
//!
//! Every operation reads the register fresh from the device. Nothing is
//! cached: the part can change bits on its own (alert flag, one-shot
//! completion). Each set/clear/field write is its own read-modify-write,
//! so two callers racing on the same register can lose an update; callers
//! serialize access.

use core::marker::PhantomData;

use lm75x_core::field::{self, ConfigField, ConfigWord, FieldValue};
use lm75x_hal::I2cBus;

use super::device::RegisterDevice;

/// Bit-level access to a configuration register
pub trait ConfigurationRegister {
    /// Register word (`u8` standard, `u16` extended)
    type Word: ConfigWord;
    /// Transport error
    type Error;

    fn read_configuration(&mut self) -> Result<Self::Word, Self::Error>;

    fn write_configuration(&mut self, value: Self::Word) -> Result<(), Self::Error>;

    /// Set every bit in `mask`
    fn set_bits(&mut self, mask: Self::Word) -> Result<(), Self::Error> {
        let configuration = self.read_configuration()?;
        self.write_configuration(field::with_bits_set(configuration, mask))
    }

    /// Clear every bit in `mask`
    fn clear_bits(&mut self, mask: Self::Word) -> Result<(), Self::Error> {
        let configuration = self.read_configuration()?;
        self.write_configuration(field::with_bits_cleared(configuration, mask))
    }

    /// Replace `width_bits` bits at `start_bit` with `value`
    ///
    /// `value` is not range-checked: bits beyond `width_bits` land in the
    /// neighbouring field. Use [`ConfigField::fits`] first if unsure.
    /// Bits shifted past the top of the word are dropped, so a field
    /// starting at or beyond the register width writes the register back
    /// unchanged.
    fn set_field(
        &mut self,
        value: Self::Word,
        start_bit: u8,
        width_bits: u8,
    ) -> Result<(), Self::Error> {
        let configuration = self.read_configuration()?;
        self.write_configuration(field::with_field(
            configuration,
            value,
            start_bit,
            width_bits,
        ))
    }

    /// Register value with everything outside `mask` cleared
    fn read_field(&mut self, mask: Self::Word) -> Result<Self::Word, Self::Error> {
        self.read_configuration().map(|c| c & mask)
    }

    /// True iff every bit of `mask` is set
    fn check_all_bits_set(&mut self, mask: Self::Word) -> Result<bool, Self::Error> {
        self.read_configuration().map(|c| field::all_set(c, mask))
    }

    /// Write a typed value into its field
    fn write_value<V: FieldValue>(&mut self, value: V) -> Result<(), Self::Error> {
        let field: ConfigField = V::FIELD;
        let bits = <Self::Word as From<u8>>::from(value.bits());
        self.set_field(bits, field.offset, field.width)
    }

    /// Read a typed value from its field
    fn read_value<V: FieldValue>(&mut self) -> Result<V, Self::Error> {
        let configuration = self.read_configuration()?;
        Ok(V::from_bits(V::FIELD.extract(configuration).low_byte()))
    }
}

/// A device's configuration register seen as a `W`-bit word
///
/// Borrowing the device for the lifetime of the view keeps every bit
/// operation on one bus handle.
pub struct ConfigRegister<'a, I2C, W> {
    device: &'a mut RegisterDevice<I2C>,
    word: PhantomData<W>,
}

/// 8-bit configuration register
pub type StandardRegister<'a, I2C> = ConfigRegister<'a, I2C, u8>;

/// 16-bit configuration register
pub type ExtendedRegister<'a, I2C> = ConfigRegister<'a, I2C, u16>;

impl<'a, I2C, W> ConfigRegister<'a, I2C, W> {
    pub fn new(device: &'a mut RegisterDevice<I2C>) -> Self {
        Self {
            device,
            word: PhantomData,
        }
    }
}

impl<I2C: I2cBus, W: ConfigWord> ConfigurationRegister for ConfigRegister<'_, I2C, W> {
    type Word = W;
    type Error = I2C::Error;

    fn read_configuration(&mut self) -> Result<W, I2C::Error> {
        let register = self.device.attributes().registers.configuration;
        self.device.read_register(register)
    }

    fn write_configuration(&mut self, value: W) -> Result<(), I2C::Error> {
        let register = self.device.attributes().registers.configuration;
        trace!(
            "config @{=u8:#x} <- {=u16:#x}",
            self.device.address(),
            value.to_u16()
        );
        self.device.write_register(register, value)
    }
}
