//! Raw register value <-> temperature conversion
//!
//! The sensors report temperature as a signed, MSB-justified fixed-point
//! number. Only the top `resolution` bits carry data; the remaining low
//! bits are reserved and may read back as anything, so they are masked off
//! before the value is interpreted as two's complement.
//!
//! Conversion from temperature to raw truncates toward zero, matching the
//! integer cast the register values were always produced with. Rounding to
//! nearest would write thresholds one LSB away from what existing firmware
//! writes.

use crate::attributes::{DeviceAttributes, Encoding};

/// Convert degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(c: f32) -> f32 {
    c * 1.8 + 32.0
}

/// Convert degrees Fahrenheit to degrees Celsius
pub fn fahrenheit_to_celsius(f: f32) -> f32 {
    (f - 32.0) / 1.8
}

/// Scale a signed raw value to a physical value
pub fn decode(raw: i16, frac_scale: f32) -> f32 {
    raw as f32 * frac_scale
}

/// Scale a physical value back to a signed raw value
///
/// Truncates toward zero and saturates at the `i16` bounds.
pub fn encode(value: f32, frac_scale: f32) -> i16 {
    (value / frac_scale) as i16
}

/// Mask keeping the top `resolution` bits of a `width`-bit register
///
/// `!((1 << (width - resolution)) - 1)`; a resolution at or above the
/// register width keeps every bit.
pub fn resolution_mask(width: u8, resolution: u8) -> u16 {
    let unused = width.saturating_sub(resolution).min(16) as u32;
    let low = (1u32 << unused) - 1;
    !(low as u16)
}

/// Scale factor for `frac_width` fractional bits (`2^-frac_width`)
pub fn frac_scale(frac_width: u8) -> f32 {
    1.0 / (1u32 << frac_width.min(31)) as f32
}

/// Reinterpret the low `width` bits of `raw` as a two's-complement number
///
/// Bit `width - 1` is the sign bit. Bits above `width` are ignored.
pub fn to_signed(raw: u16, width: u8) -> i16 {
    let shift = 16 - u32::from(width.clamp(1, 16));
    ((raw << shift) as i16) >> shift
}

/// Current interpretation of a device's temperature registers
///
/// The mask and scale factor are derived from the resolution and
/// fractional width. They are private and only recomputed by the setters,
/// so a reader never sees a mask from one resolution paired with another.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureScale {
    width: u8,
    resolution: u8,
    resolution_mask: u16,
    frac_width: u8,
    frac_scale: f32,
}

impl TemperatureScale {
    /// Scale for a family at its power-on encoding
    pub fn new(attributes: &DeviceAttributes) -> Self {
        let mut scale = Self {
            width: attributes.temperature_width,
            resolution: 0,
            resolution_mask: 0,
            frac_width: 0,
            frac_scale: 1.0,
        };
        scale.set_encoding(attributes.default_encoding());
        scale
    }

    /// Change the number of significant bits
    pub fn set_resolution(&mut self, resolution: u8) {
        self.resolution = resolution;
        self.resolution_mask = resolution_mask(self.width, resolution);
    }

    /// Change the number of fractional bits
    pub fn set_frac_width(&mut self, frac_width: u8) {
        self.frac_width = frac_width;
        self.frac_scale = frac_scale(frac_width);
    }

    /// Change resolution and fractional width together
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.set_resolution(encoding.resolution);
        self.set_frac_width(encoding.frac_width);
    }

    pub fn encoding(&self) -> Encoding {
        Encoding {
            resolution: self.resolution,
            frac_width: self.frac_width,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn resolution(&self) -> u8 {
        self.resolution
    }

    pub fn resolution_mask(&self) -> u16 {
        self.resolution_mask
    }

    pub fn frac_width(&self) -> u8 {
        self.frac_width
    }

    pub fn frac_scale(&self) -> f32 {
        self.frac_scale
    }

    /// Bytes a temperature read transfers: one up to 8 bits, else two
    pub fn read_len(&self) -> usize {
        if self.resolution <= 8 {
            1
        } else {
            2
        }
    }

    /// Mask reserved bits off a raw register value and sign it
    pub fn decode_register(&self, raw: u16) -> i16 {
        to_signed(raw & self.resolution_mask, self.width)
    }

    /// Raw signed value to degrees Celsius
    pub fn to_celsius(&self, raw: i16) -> f32 {
        decode(raw, self.frac_scale)
    }

    /// Degrees Celsius to raw signed value (truncating)
    pub fn from_celsius(&self, celsius: f32) -> i16 {
        encode(celsius, self.frac_scale)
    }
}
