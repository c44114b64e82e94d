//! Register layouts and device attribute tables
//!
//! Every LM75 derivative is described by one static [`DeviceAttributes`]
//! row. Devices hold a `&'static` reference to their row; the tables are
//! never copied or mutated.

/// The typical I2C address for any LM75-family device (A0..A2 tied low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x48;

/// Register indices for one device family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterLayout {
    /// Temperature result (signed, MSB-justified)
    pub temperature: u8,
    /// Configuration (8 or 16 bit depending on family)
    pub configuration: u8,
    /// Low threshold, T_HYST on LM75 (signed 16 bit)
    pub temperature_low: u8,
    /// High threshold, T_OS on LM75 (signed 16 bit)
    pub temperature_high: u8,
}

/// Static parameters of a device family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceAttributes {
    /// Bit width of the raw signed temperature register
    pub temperature_width: u8,
    /// Significant bits after power-on
    pub default_resolution: u8,
    /// Bits below the binary point after power-on
    pub default_frac_width: u8,
    /// Highest resolution the family can be switched to
    pub max_resolution: u8,
    /// Register map shared by the family
    pub registers: &'static RegisterLayout,
}

/// A resolution / fractional width pair the codec can be switched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Encoding {
    /// Significant bits
    pub resolution: u8,
    /// Bits below the binary point
    pub frac_width: u8,
}

/// The register map used by every supported part
pub static LM75_COMPATIBLE_REGISTERS: RegisterLayout = RegisterLayout {
    temperature: 0x00,
    configuration: 0x01,
    temperature_low: 0x02,
    temperature_high: 0x03,
};

/// Original 9-bit LM75 (0.5°C steps)
pub static GENERIC_LM75: DeviceAttributes = DeviceAttributes {
    temperature_width: 16,
    default_resolution: 9,
    default_frac_width: 8,
    max_resolution: 9,
    registers: &LM75_COMPATIBLE_REGISTERS,
};

/// 10-bit LM75 derivatives (0.25°C steps)
pub static GENERIC_LM75_10BIT: DeviceAttributes = DeviceAttributes {
    temperature_width: 16,
    default_resolution: 10,
    default_frac_width: 8,
    max_resolution: 10,
    registers: &LM75_COMPATIBLE_REGISTERS,
};

/// 11-bit LM75 derivatives such as LM75B / PCT2075 (0.125°C steps)
pub static GENERIC_LM75_11BIT: DeviceAttributes = DeviceAttributes {
    temperature_width: 16,
    default_resolution: 11,
    default_frac_width: 8,
    max_resolution: 11,
    registers: &LM75_COMPATIBLE_REGISTERS,
};

/// 12-bit LM75 derivatives (0.0625°C steps)
pub static GENERIC_LM75_12BIT: DeviceAttributes = DeviceAttributes {
    temperature_width: 16,
    default_resolution: 12,
    default_frac_width: 8,
    max_resolution: 12,
    registers: &LM75_COMPATIBLE_REGISTERS,
};

/// TI TMP102 / TMP112: 12 bits, 13 in extended mode
pub static TI_TMP102: DeviceAttributes = DeviceAttributes {
    temperature_width: 16,
    default_resolution: 12,
    default_frac_width: 8,
    max_resolution: 13,
    registers: &LM75_COMPATIBLE_REGISTERS,
};

/// TMP102 normal mode: 12 bits, range -55..=128°C
pub const TMP102_NORMAL: Encoding = Encoding {
    resolution: 12,
    frac_width: 8,
};

/// TMP102 extended mode: 13 bits, range up to 150°C
pub const TMP102_EXTENDED: Encoding = Encoding {
    resolution: 13,
    frac_width: 7,
};

impl DeviceAttributes {
    /// Encoding the family powers up with
    pub const fn default_encoding(&self) -> Encoding {
        Encoding {
            resolution: self.default_resolution,
            frac_width: self.default_frac_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> [&'static DeviceAttributes; 5] {
        [
            &GENERIC_LM75,
            &GENERIC_LM75_10BIT,
            &GENERIC_LM75_11BIT,
            &GENERIC_LM75_12BIT,
            &TI_TMP102,
        ]
    }

    #[test]
    fn test_tables_share_register_layout() {
        for attrs in all() {
            assert!(core::ptr::eq(attrs.registers, &LM75_COMPATIBLE_REGISTERS));
        }
        assert_eq!(LM75_COMPATIBLE_REGISTERS.temperature, 0x00);
        assert_eq!(LM75_COMPATIBLE_REGISTERS.configuration, 0x01);
        assert_eq!(LM75_COMPATIBLE_REGISTERS.temperature_low, 0x02);
        assert_eq!(LM75_COMPATIBLE_REGISTERS.temperature_high, 0x03);
    }

    #[test]
    fn test_resolutions_fit_register() {
        for attrs in all() {
            assert!(attrs.default_resolution <= attrs.max_resolution);
            assert!(attrs.max_resolution <= attrs.temperature_width);
            assert!((9..=13).contains(&attrs.default_resolution));
        }
    }

    #[test]
    fn test_tmp102_encodings() {
        assert_eq!(TI_TMP102.default_encoding(), TMP102_NORMAL);
        assert_eq!(TMP102_EXTENDED.resolution, TI_TMP102.max_resolution);
    }
}
