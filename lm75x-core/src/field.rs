//! Configuration register fields
//!
//! Every configuration knob of every supported family is one row in this
//! table: a bit offset and a width inside either the 8-bit standard
//! configuration register or the 16-bit extended one. Adding a family means
//! adding rows here, not new driver code.
//!
//! The bit math is generic over [`ConfigWord`] so the same functions serve
//! both register widths.
//!
//! | Field | Register | Bits |
//! |-------|----------|------|
//! | [`SHUTDOWN`] | standard | 0 |
//! | [`THERMOSTAT_MODE`] | standard | 1 |
//! | [`ALERT_POLARITY`] | standard | 2 |
//! | [`FAULT_QUEUE`] | standard | 4:3 |
//! | [`RESOLUTION`] | standard | 6:5 |
//! | [`ONE_SHOT`] | standard | 7 |
//! | [`NCT_ONE_SHOT_MODE`] | standard (NCT75) | 5 |
//! | [`EXT_EXTENDED_MODE`] | extended | 4 |
//! | [`EXT_ALERT`] | extended | 5 |
//! | [`EXT_CONVERSION_RATE`] | extended | 7:6 |

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, Not, Shl, Shr, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unsigned configuration register word (`u8` or `u16`)
pub trait ConfigWord:
    Copy
    + Eq
    + Debug
    + From<u8>
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Sub<Output = Self>
    + Shl<u8, Output = Self>
    + Shr<u8, Output = Self>
{
    /// Bits in the word
    const BITS: u8;
    /// Bytes on the wire
    const BYTES: usize;
    const ZERO: Self;
    const ONE: Self;

    /// Decode from big-endian bytes (`bytes.len() == BYTES`)
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Encode as big-endian bytes into `out` (`out.len() == BYTES`)
    fn write_be_slice(self, out: &mut [u8]);

    /// Low eight bits
    fn low_byte(self) -> u8;

    /// Zero-extended to 16 bits
    fn to_u16(self) -> u16;
}

impl ConfigWord for u8 {
    const BITS: u8 = 8;
    const BYTES: usize = 1;
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn from_be_slice(bytes: &[u8]) -> Self {
        bytes[0]
    }

    fn write_be_slice(self, out: &mut [u8]) {
        out[0] = self;
    }

    fn low_byte(self) -> u8 {
        self
    }

    fn to_u16(self) -> u16 {
        u16::from(self)
    }
}

impl ConfigWord for u16 {
    const BITS: u8 = 16;
    const BYTES: usize = 2;
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn from_be_slice(bytes: &[u8]) -> Self {
        u16::from_be_bytes([bytes[0], bytes[1]])
    }

    fn write_be_slice(self, out: &mut [u8]) {
        out[..2].copy_from_slice(&self.to_be_bytes());
    }

    fn low_byte(self) -> u8 {
        self as u8
    }

    fn to_u16(self) -> u16 {
        self
    }
}

/// `value << by`, with bits shifted past the top of the word dropped
///
/// A shift of `W::BITS` or more gives zero instead of overflowing.
pub fn shl_or_zero<W: ConfigWord>(value: W, by: u8) -> W {
    if by >= W::BITS {
        W::ZERO
    } else {
        value << by
    }
}

/// `value >> by`; a shift of `W::BITS` or more gives zero
pub fn shr_or_zero<W: ConfigWord>(value: W, by: u8) -> W {
    if by >= W::BITS {
        W::ZERO
    } else {
        value >> by
    }
}

/// Mask of `width` bits starting at `start`
///
/// Bits that would land at or above `W::BITS` are dropped, so a field
/// starting past the end of the word has an empty mask.
pub fn field_mask<W: ConfigWord>(start: u8, width: u8) -> W {
    if width == 0 {
        W::ZERO
    } else if width >= W::BITS {
        shl_or_zero(!W::ZERO, start)
    } else {
        shl_or_zero((W::ONE << width) - W::ONE, start)
    }
}

/// `register | mask`
pub fn with_bits_set<W: ConfigWord>(register: W, mask: W) -> W {
    register | mask
}

/// `register & !mask`
pub fn with_bits_cleared<W: ConfigWord>(register: W, mask: W) -> W {
    register & !mask
}

/// Replace `width` bits at `start` with `value`
///
/// `value` is shifted into place but NOT truncated to `width`: a value that
/// does not fit spills into the neighbouring bits. Some parts document
/// reserved bits that overlap, so callers decide. Check with
/// [`ConfigField::fits`] when the value is not already known to fit.
///
/// Bits shifted past the top of the word are dropped. A field starting at
/// or beyond `W::BITS` leaves `register` unchanged.
pub fn with_field<W: ConfigWord>(register: W, value: W, start: u8, width: u8) -> W {
    let mask = field_mask::<W>(start, width);
    (register & !mask) | shl_or_zero(value, start)
}

/// True when every bit of `mask` is set in `register`
pub fn all_set<W: ConfigWord>(register: W, mask: W) -> bool {
    register & mask == mask
}

/// Location of a field inside a configuration register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigField {
    /// Lowest bit of the field
    pub offset: u8,
    /// Number of bits
    pub width: u8,
}

impl ConfigField {
    pub const fn new(offset: u8, width: u8) -> Self {
        Self { offset, width }
    }

    /// Mask covering the field
    pub fn mask<W: ConfigWord>(self) -> W {
        field_mask(self.offset, self.width)
    }

    /// Field value shifted down from a register value
    pub fn extract<W: ConfigWord>(self, register: W) -> W {
        shr_or_zero(register & self.mask::<W>(), self.offset)
    }

    /// `register` with this field replaced by `value` (unchecked, see [`with_field`])
    pub fn insert<W: ConfigWord>(self, register: W, value: W) -> W {
        with_field(register, value, self.offset, self.width)
    }

    /// Whether `value` fits in the field without touching neighbours
    pub fn fits(self, value: u16) -> bool {
        self.width >= 16 || value >> self.width == 0
    }
}

/// Shutdown (standard register)
pub const SHUTDOWN: ConfigField = ConfigField::new(0, 1);
/// Comparator / interrupt thermostat mode (standard register)
pub const THERMOSTAT_MODE: ConfigField = ConfigField::new(1, 1);
/// OS/ALERT pin polarity (standard register)
pub const ALERT_POLARITY: ConfigField = ConfigField::new(2, 1);
/// Consecutive faults before the alert trips (standard register)
pub const FAULT_QUEUE: ConfigField = ConfigField::new(3, 2);
/// Conversion resolution on 9..12-bit parts (standard register)
pub const RESOLUTION: ConfigField = ConfigField::new(5, 2);
/// One-shot trigger / conversion ready (standard register)
pub const ONE_SHOT: ConfigField = ConfigField::new(7, 1);
/// One-shot mode enable on ON Semi NCT75 (standard register)
pub const NCT_ONE_SHOT_MODE: ConfigField = ConfigField::new(5, 1);

/// Extended (13-bit) mode on TMP102-style parts (extended register)
pub const EXT_EXTENDED_MODE: ConfigField = ConfigField::new(4, 1);
/// Alert status flag (extended register, read-only on hardware)
pub const EXT_ALERT: ConfigField = ConfigField::new(5, 1);
/// Continuous conversion rate (extended register)
pub const EXT_CONVERSION_RATE: ConfigField = ConfigField::new(6, 2);

/// Register written to start a one-shot conversion on ON Semi NCT75
pub const NCT_ONE_SHOT_REGISTER: u8 = 0x04;

/// A typed value that lives in a configuration field
pub trait FieldValue: Copy {
    /// Field the value is stored in
    const FIELD: ConfigField;

    /// Raw field bits (always fit in [`FieldValue::FIELD`])
    fn bits(self) -> u8;

    /// Decode raw field bits; bits above the field width are ignored
    fn from_bits(bits: u8) -> Self;
}

/// Number of consecutive faults before OS/ALERT asserts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FaultQueueLength {
    #[default]
    One,
    Two,
    Four,
    Six,
}

impl FieldValue for FaultQueueLength {
    const FIELD: ConfigField = FAULT_QUEUE;

    fn bits(self) -> u8 {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Four => 2,
            Self::Six => 3,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::One,
            1 => Self::Two,
            2 => Self::Four,
            _ => Self::Six,
        }
    }
}

/// Active level of the OS/ALERT output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlertPolarity {
    #[default]
    ActiveLow,
    ActiveHigh,
}

impl FieldValue for AlertPolarity {
    const FIELD: ConfigField = ALERT_POLARITY;

    fn bits(self) -> u8 {
        match self {
            Self::ActiveLow => 0,
            Self::ActiveHigh => 1,
        }
    }

    fn from_bits(bits: u8) -> Self {
        if bits & 1 == 0 {
            Self::ActiveLow
        } else {
            Self::ActiveHigh
        }
    }
}

/// Thermostat output behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ThermostatMode {
    /// Output follows the temperature with hysteresis
    #[default]
    Comparator,
    /// Output latches until a register is read
    Interrupt,
}

impl FieldValue for ThermostatMode {
    const FIELD: ConfigField = THERMOSTAT_MODE;

    fn bits(self) -> u8 {
        match self {
            Self::Comparator => 0,
            Self::Interrupt => 1,
        }
    }

    fn from_bits(bits: u8) -> Self {
        if bits & 1 == 0 {
            Self::Comparator
        } else {
            Self::Interrupt
        }
    }
}

/// Conversion resolution on 9..12-bit selectable parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionResolution {
    #[default]
    Bits9,
    Bits10,
    Bits11,
    Bits12,
}

impl ConversionResolution {
    /// Significant bits produced at this setting
    pub fn significant_bits(self) -> u8 {
        9 + self.bits()
    }
}

impl FieldValue for ConversionResolution {
    const FIELD: ConfigField = RESOLUTION;

    fn bits(self) -> u8 {
        match self {
            Self::Bits9 => 0,
            Self::Bits10 => 1,
            Self::Bits11 => 2,
            Self::Bits12 => 3,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Bits9,
            1 => Self::Bits10,
            2 => Self::Bits11,
            _ => Self::Bits12,
        }
    }
}

/// Continuous conversion rate on TMP102-style parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionRate {
    Hz0_25,
    Hz1,
    #[default]
    Hz4,
    Hz8,
}

impl FieldValue for ConversionRate {
    const FIELD: ConfigField = EXT_CONVERSION_RATE;

    fn bits(self) -> u8 {
        match self {
            Self::Hz0_25 => 0,
            Self::Hz1 => 1,
            Self::Hz4 => 2,
            Self::Hz8 => 3,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Hz0_25,
            1 => Self::Hz1,
            2 => Self::Hz4,
            _ => Self::Hz8,
        }
    }
}
