//! Sensor settings
//!
//! The four standard configuration fields every LM75 derivative shares,
//! grouped so an application can keep them in its own configuration and
//! apply them in one register write. Settings can be stored as postcard
//! binary data when the `serde` feature is enabled.

use crate::field::{
    AlertPolarity, ConfigField, FaultQueueLength, FieldValue, ThermostatMode, ALERT_POLARITY,
    FAULT_QUEUE, SHUTDOWN, THERMOSTAT_MODE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard configuration of an LM75-compatible sensor
///
/// `Default` matches the power-on state: one fault, active-low alert,
/// comparator mode, converting continuously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorSettings {
    /// Faults before OS/ALERT asserts
    pub fault_queue: FaultQueueLength,
    /// OS/ALERT active level
    pub alert_polarity: AlertPolarity,
    /// Comparator or interrupt output
    pub thermostat_mode: ThermostatMode,
    /// Low-power shutdown
    pub shutdown: bool,
}

impl SensorSettings {
    /// Bits of the configuration register these settings own
    pub fn mask() -> u8 {
        FAULT_QUEUE.mask::<u8>()
            | ALERT_POLARITY.mask::<u8>()
            | THERMOSTAT_MODE.mask::<u8>()
            | SHUTDOWN.mask::<u8>()
    }

    /// Compose the settings into configuration register bits
    ///
    /// Bits outside [`SensorSettings::mask`] are zero.
    pub fn to_bits(&self) -> u8 {
        let mut reg = 0u8;
        reg = put(reg, self.fault_queue);
        reg = put(reg, self.alert_polarity);
        reg = put(reg, self.thermostat_mode);
        SHUTDOWN.insert(reg, u8::from(self.shutdown))
    }

    /// Parse settings out of a configuration register value
    pub fn from_bits(reg: u8) -> Self {
        Self {
            fault_queue: get(reg),
            alert_polarity: get(reg),
            thermostat_mode: get(reg),
            shutdown: SHUTDOWN.extract(reg) != 0,
        }
    }

    /// `reg` with the settings' bits replaced and every other bit kept
    pub fn merge_into(&self, reg: u8) -> u8 {
        (reg & !Self::mask()) | self.to_bits()
    }
}

fn put<V: FieldValue>(reg: u8, value: V) -> u8 {
    V::FIELD.insert(reg, value.bits())
}

fn get<V: FieldValue>(reg: u8) -> V {
    let field: ConfigField = V::FIELD;
    V::from_bits(field.extract(reg))
}

/// Errors from persisting settings
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Output buffer too small or value not representable
    Encode,
    /// Input bytes are not a valid settings record
    Decode,
}

#[cfg(feature = "serde")]
impl SensorSettings {
    /// Serialize into `buf` as postcard bytes, returning the used prefix
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], SettingsError> {
        postcard::to_slice(self, buf).map_err(|_| SettingsError::Encode)
    }

    /// Deserialize from postcard bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, SettingsError> {
        postcard::from_bytes(bytes).map_err(|_| SettingsError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_power_on_state() {
        assert_eq!(SensorSettings::default().to_bits(), 0x00);
        assert_eq!(SensorSettings::from_bits(0x00), SensorSettings::default());
    }

    #[test]
    fn test_to_bits() {
        let settings = SensorSettings {
            fault_queue: FaultQueueLength::Six,
            alert_polarity: AlertPolarity::ActiveHigh,
            thermostat_mode: ThermostatMode::Interrupt,
            shutdown: true,
        };
        assert_eq!(settings.to_bits(), 0b0001_1111);
        assert_eq!(SensorSettings::from_bits(0b0001_1111), settings);
    }

    #[test]
    fn test_merge_keeps_foreign_bits() {
        let settings = SensorSettings {
            fault_queue: FaultQueueLength::Two,
            ..Default::default()
        };
        // Resolution and one-shot bits belong to other capabilities
        assert_eq!(settings.merge_into(0b1110_0111), 0b1110_1000);
    }

    #[test]
    fn test_mask() {
        assert_eq!(SensorSettings::mask(), 0x1F);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_storage() {
        let settings = SensorSettings {
            fault_queue: FaultQueueLength::Four,
            alert_polarity: AlertPolarity::ActiveHigh,
            thermostat_mode: ThermostatMode::Comparator,
            shutdown: false,
        };
        let mut buf = [0u8; 16];
        let used = settings.encode(&mut buf).unwrap().len();
        assert_eq!(SensorSettings::decode(&buf[..used]), Ok(settings));

        let mut tiny = [0u8; 1];
        assert_eq!(settings.encode(&mut tiny), Err(SettingsError::Encode));
        assert_eq!(SensorSettings::decode(&[]), Err(SettingsError::Decode));
    }
}
