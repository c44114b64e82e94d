//! Named configuration capabilities
//!
//! Each trait is one capability from a part's datasheet. They are
//! implemented for [`Sensor`] whenever the family marker carries the
//! matching marker trait, so a part exposes exactly the operations its
//! register map supports.
//!
//! All operations are independent read-modify-write cycles on the
//! configuration register. None of them batch, and none of them touch the
//! local temperature encoding except the extended-mode transition.

use lm75x_core::config::SensorSettings;
use lm75x_core::field::{
    AlertPolarity, ConversionRate, ConversionResolution, FaultQueueLength, ThermostatMode,
    ALERT_POLARITY, EXT_ALERT, EXT_EXTENDED_MODE, NCT_ONE_SHOT_MODE, ONE_SHOT, SHUTDOWN,
    THERMOSTAT_MODE,
};
use lm75x_hal::I2cBus;

use super::config::ConfigurationRegister;
use super::family::{
    ExtendedConfig, Family, OneShotBit, OneShotTriggerRegister, SelectableResolution,
    StandardConfig,
};
use super::Sensor;

/// Error type shared by the capability traits
pub trait Capability {
    type Error;
}

impl<I2C: I2cBus, F: Family> Capability for Sensor<I2C, F> {
    type Error = I2C::Error;
}

/// Number of consecutive faults before OS/ALERT asserts
pub trait FaultQueue: Capability {
    fn set_fault_queue_length(&mut self, length: FaultQueueLength) -> Result<(), Self::Error>;
    fn fault_queue_length(&mut self) -> Result<FaultQueueLength, Self::Error>;
}

/// OS/ALERT output polarity
pub trait AlertPolarityControl: Capability {
    fn set_alert_active_low(&mut self) -> Result<(), Self::Error>;
    fn set_alert_active_high(&mut self) -> Result<(), Self::Error>;
    fn alert_polarity(&mut self) -> Result<AlertPolarity, Self::Error>;
}

/// Comparator or interrupt thermostat output
pub trait ThermostatControl: Capability {
    fn set_thermostat_comparator_mode(&mut self) -> Result<(), Self::Error>;
    fn set_thermostat_interrupt_mode(&mut self) -> Result<(), Self::Error>;
    fn thermostat_mode(&mut self) -> Result<ThermostatMode, Self::Error>;
}

/// Low-power shutdown
pub trait Shutdown: Capability {
    fn enable_shutdown(&mut self) -> Result<(), Self::Error>;
    fn disable_shutdown(&mut self) -> Result<(), Self::Error>;
    fn is_shutdown(&mut self) -> Result<bool, Self::Error>;
}

/// All standard fields at once
pub trait StandardSettings: Capability {
    /// Write fault queue, polarity, thermostat mode and shutdown in one
    /// read-modify-write, keeping every other configuration bit
    fn apply_settings(&mut self, settings: &SensorSettings) -> Result<(), Self::Error>;
    fn read_settings(&mut self) -> Result<SensorSettings, Self::Error>;
}

/// Conversion resolution on 9..12-bit parts
///
/// Only programs the device. The local decoding resolution is left alone;
/// reads at the family default still decode correctly because the unused
/// low bits read as zero.
pub trait ResolutionSelect: Capability {
    fn set_conversion_resolution(
        &mut self,
        resolution: ConversionResolution,
    ) -> Result<(), Self::Error>;
    fn conversion_resolution(&mut self) -> Result<ConversionResolution, Self::Error>;
}

/// One-shot conversion through the configuration register's OS bit
pub trait OneShot: Capability {
    /// Set the OS bit; the part clears it when the conversion finishes
    fn start_one_shot_conversion(&mut self) -> Result<(), Self::Error>;
    /// Whether the OS bit reads back set
    fn is_conversion_ready(&mut self) -> Result<bool, Self::Error>;
}

/// One-shot conversion through a dedicated trigger register (NCT75)
pub trait OneShotRegister: Capability {
    /// Enter one-shot mode and leave shutdown
    fn enable_one_shot_mode(&mut self) -> Result<(), Self::Error>;
    /// Start one conversion
    fn trigger_one_shot_conversion(&mut self) -> Result<(), Self::Error>;
}

/// 13-bit extended range on TMP102-style parts
pub trait ExtendedMode: Capability {
    /// Set the EM bit, then decode reads as 13 bits / 7 fractional bits
    fn enable_extended_mode(&mut self) -> Result<(), Self::Error>;
    /// Clear the EM bit, then decode reads as 12 bits / 8 fractional bits
    fn disable_extended_mode(&mut self) -> Result<(), Self::Error>;
    fn is_extended_mode(&mut self) -> Result<bool, Self::Error>;
}

/// Continuous conversion rate on TMP102-style parts
pub trait ConversionRateControl: Capability {
    fn set_conversion_rate(&mut self, rate: ConversionRate) -> Result<(), Self::Error>;
    fn conversion_rate(&mut self) -> Result<ConversionRate, Self::Error>;
}

/// Alert status flag on TMP102-style parts
pub trait AlertStatus: Capability {
    /// Whether the AL flag is set
    fn check_alert(&mut self) -> Result<bool, Self::Error>;
}

impl<I2C: I2cBus, F: StandardConfig> FaultQueue for Sensor<I2C, F> {
    fn set_fault_queue_length(&mut self, length: FaultQueueLength) -> Result<(), I2C::Error> {
        self.standard_register().write_value(length)
    }

    fn fault_queue_length(&mut self) -> Result<FaultQueueLength, I2C::Error> {
        self.standard_register().read_value()
    }
}

impl<I2C: I2cBus, F: StandardConfig> AlertPolarityControl for Sensor<I2C, F> {
    fn set_alert_active_low(&mut self) -> Result<(), I2C::Error> {
        self.standard_register().clear_bits(ALERT_POLARITY.mask())
    }

    fn set_alert_active_high(&mut self) -> Result<(), I2C::Error> {
        self.standard_register().set_bits(ALERT_POLARITY.mask())
    }

    fn alert_polarity(&mut self) -> Result<AlertPolarity, I2C::Error> {
        self.standard_register().read_value()
    }
}

impl<I2C: I2cBus, F: StandardConfig> ThermostatControl for Sensor<I2C, F> {
    fn set_thermostat_comparator_mode(&mut self) -> Result<(), I2C::Error> {
        self.standard_register().clear_bits(THERMOSTAT_MODE.mask())
    }

    fn set_thermostat_interrupt_mode(&mut self) -> Result<(), I2C::Error> {
        self.standard_register().set_bits(THERMOSTAT_MODE.mask())
    }

    fn thermostat_mode(&mut self) -> Result<ThermostatMode, I2C::Error> {
        self.standard_register().read_value()
    }
}

impl<I2C: I2cBus, F: StandardConfig> Shutdown for Sensor<I2C, F> {
    fn enable_shutdown(&mut self) -> Result<(), I2C::Error> {
        self.standard_register().set_bits(SHUTDOWN.mask())
    }

    fn disable_shutdown(&mut self) -> Result<(), I2C::Error> {
        self.standard_register().clear_bits(SHUTDOWN.mask())
    }

    fn is_shutdown(&mut self) -> Result<bool, I2C::Error> {
        self.standard_register().check_all_bits_set(SHUTDOWN.mask())
    }
}

impl<I2C: I2cBus, F: StandardConfig> StandardSettings for Sensor<I2C, F> {
    fn apply_settings(&mut self, settings: &SensorSettings) -> Result<(), I2C::Error> {
        let mut register = self.standard_register();
        let configuration = register.read_configuration()?;
        register.write_configuration(settings.merge_into(configuration))
    }

    fn read_settings(&mut self) -> Result<SensorSettings, I2C::Error> {
        self.standard_register()
            .read_configuration()
            .map(SensorSettings::from_bits)
    }
}

impl<I2C: I2cBus, F: SelectableResolution> ResolutionSelect for Sensor<I2C, F> {
    fn set_conversion_resolution(
        &mut self,
        resolution: ConversionResolution,
    ) -> Result<(), I2C::Error> {
        self.standard_register().write_value(resolution)
    }

    fn conversion_resolution(&mut self) -> Result<ConversionResolution, I2C::Error> {
        self.standard_register().read_value()
    }
}

impl<I2C: I2cBus, F: OneShotBit> OneShot for Sensor<I2C, F> {
    fn start_one_shot_conversion(&mut self) -> Result<(), I2C::Error> {
        self.standard_register().set_bits(ONE_SHOT.mask())
    }

    fn is_conversion_ready(&mut self) -> Result<bool, I2C::Error> {
        self.standard_register().check_all_bits_set(ONE_SHOT.mask())
    }
}

impl<I2C: I2cBus, F: OneShotTriggerRegister> OneShotRegister for Sensor<I2C, F> {
    fn enable_one_shot_mode(&mut self) -> Result<(), I2C::Error> {
        let mut register = self.standard_register();
        register.set_bits(NCT_ONE_SHOT_MODE.mask())?;
        register.clear_bits(SHUTDOWN.mask())
    }

    fn trigger_one_shot_conversion(&mut self) -> Result<(), I2C::Error> {
        // Any value written to the trigger register starts a conversion
        self.write_register(F::TRIGGER_REGISTER, 1u8)
    }
}

impl<I2C: I2cBus, F: ExtendedConfig> ExtendedMode for Sensor<I2C, F> {
    fn enable_extended_mode(&mut self) -> Result<(), I2C::Error> {
        self.extended_register().set_bits(EXT_EXTENDED_MODE.mask())?;
        self.set_encoding(F::EXTENDED);
        debug!(
            "extended mode on @{=u8:#x}: {=u8} bit",
            self.address(),
            F::EXTENDED.resolution
        );
        Ok(())
    }

    fn disable_extended_mode(&mut self) -> Result<(), I2C::Error> {
        self.extended_register()
            .clear_bits(EXT_EXTENDED_MODE.mask())?;
        self.set_encoding(F::NORMAL);
        debug!(
            "extended mode off @{=u8:#x}: {=u8} bit",
            self.address(),
            F::NORMAL.resolution
        );
        Ok(())
    }

    fn is_extended_mode(&mut self) -> Result<bool, I2C::Error> {
        self.extended_register()
            .check_all_bits_set(EXT_EXTENDED_MODE.mask())
    }
}

impl<I2C: I2cBus, F: ExtendedConfig> ConversionRateControl for Sensor<I2C, F> {
    fn set_conversion_rate(&mut self, rate: ConversionRate) -> Result<(), I2C::Error> {
        self.extended_register().write_value(rate)
    }

    fn conversion_rate(&mut self) -> Result<ConversionRate, I2C::Error> {
        self.extended_register().read_value()
    }
}

impl<I2C: I2cBus, F: ExtendedConfig> AlertStatus for Sensor<I2C, F> {
    fn check_alert(&mut self) -> Result<bool, I2C::Error> {
        self.extended_register().check_all_bits_set(EXT_ALERT.mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::family::{Generic9Bit, Nct75, Selectable9To12BitOneShot, Tmp102};
    use crate::sensor::mock::{MockBus, MockError, Transaction};
    use lm75x_core::traits::TemperatureSensor;

    #[test]
    fn test_fault_queue() {
        let mut bus = MockBus::new();
        {
            let mut sensor: Sensor<_, Generic9Bit> = Sensor::new(&mut bus);
            sensor
                .set_fault_queue_length(FaultQueueLength::Four)
                .unwrap();
            assert_eq!(sensor.fault_queue_length(), Ok(FaultQueueLength::Four));
        }
        assert_eq!(bus.register_u8(0x01), 0x10);
    }

    #[test]
    fn test_standard_bits() {
        let mut bus = MockBus::new();
        let mut sensor: Sensor<_, Generic9Bit> = Sensor::new(&mut bus);

        sensor.set_alert_active_high().unwrap();
        assert_eq!(sensor.alert_polarity(), Ok(AlertPolarity::ActiveHigh));
        sensor.set_thermostat_interrupt_mode().unwrap();
        assert_eq!(sensor.thermostat_mode(), Ok(ThermostatMode::Interrupt));
        sensor.enable_shutdown().unwrap();
        assert_eq!(sensor.is_shutdown(), Ok(true));
        assert_eq!(sensor.standard_register().read_configuration(), Ok(0x07));

        sensor.set_alert_active_low().unwrap();
        sensor.set_thermostat_comparator_mode().unwrap();
        sensor.disable_shutdown().unwrap();
        assert_eq!(sensor.standard_register().read_configuration(), Ok(0x00));
        assert_eq!(sensor.is_shutdown(), Ok(false));
    }

    #[test]
    fn test_settings_keep_other_bits() {
        let mut bus = MockBus::new();
        bus.set_register_u8(0x01, 0b0110_0001);
        {
            let mut sensor: Sensor<_, Selectable9To12BitOneShot> = Sensor::new(&mut bus);
            let settings = SensorSettings {
                fault_queue: FaultQueueLength::Six,
                alert_polarity: AlertPolarity::ActiveHigh,
                ..Default::default()
            };
            sensor.apply_settings(&settings).unwrap();
            assert_eq!(sensor.read_settings(), Ok(settings));
        }
        // Resolution bits survive, shutdown is cleared by the settings
        assert_eq!(bus.register_u8(0x01), 0b0111_1100);
    }

    #[test]
    fn test_resolution_select() {
        let mut bus = MockBus::new();
        {
            let mut sensor: Sensor<_, Selectable9To12BitOneShot> = Sensor::new(&mut bus);
            sensor
                .set_conversion_resolution(ConversionResolution::Bits11)
                .unwrap();
            assert_eq!(
                sensor.conversion_resolution(),
                Ok(ConversionResolution::Bits11)
            );
            // Decoding resolution is local state, untouched here
            assert_eq!(sensor.resolution(), 12);
        }
        assert_eq!(bus.register_u8(0x01), 0b0100_0000);
    }

    #[test]
    fn test_one_shot_bit() {
        let mut bus = MockBus::new();
        bus.set_register_u8(0x01, 0x01);
        let mut sensor: Sensor<_, Selectable9To12BitOneShot> = Sensor::new(&mut bus);

        assert_eq!(sensor.is_conversion_ready(), Ok(false));
        sensor.start_one_shot_conversion().unwrap();
        assert_eq!(sensor.is_conversion_ready(), Ok(true));
        assert_eq!(sensor.standard_register().read_configuration(), Ok(0x81));
    }

    #[test]
    fn test_nct75_one_shot() {
        let mut bus = MockBus::new();
        bus.set_register_u8(0x01, 0x01);
        {
            let mut sensor: Sensor<_, Nct75> = Sensor::new(&mut bus);
            sensor.enable_one_shot_mode().unwrap();
            sensor.trigger_one_shot_conversion().unwrap();
        }

        assert_eq!(bus.register_u8(0x01), 0x20);
        assert_eq!(
            bus.log.last(),
            Some(&Transaction::Write(0x48, vec![0x04, 0x01]))
        );
    }

    #[test]
    fn test_extended_mode_transition() {
        let mut bus = MockBus::new();
        bus.set_register(0x01, 0x60A0);
        {
            let mut sensor: Sensor<_, Tmp102> = Sensor::new(&mut bus);
            assert_eq!(sensor.resolution(), 12);
            assert_eq!(sensor.frac_width(), 8);

            sensor.enable_extended_mode().unwrap();
            assert_eq!(sensor.resolution(), 13);
            assert_eq!(sensor.frac_width(), 7);
            assert_eq!(sensor.is_extended_mode(), Ok(true));
        }
        assert_eq!(bus.register(0x01), 0x60B0);

        {
            let mut sensor: Sensor<_, Tmp102> = Sensor::new(&mut bus);
            sensor.enable_extended_mode().unwrap();
            sensor.disable_extended_mode().unwrap();
            assert_eq!(sensor.resolution(), 12);
            assert_eq!(sensor.frac_width(), 8);
            assert_eq!(sensor.is_extended_mode(), Ok(false));
        }
        assert_eq!(bus.register(0x01), 0x60A0);
    }

    #[test]
    fn test_extended_mode_reads_13_bit() {
        let mut bus = MockBus::new();
        // 150°C in extended format
        bus.set_register(0x00, 0x4B00);
        let mut sensor: Sensor<_, Tmp102> = Sensor::new(&mut bus);

        sensor.enable_extended_mode().unwrap();
        assert_eq!(sensor.read_celsius(), Ok(150.0));
    }

    #[test]
    fn test_extended_mode_failure_keeps_encoding() {
        let mut bus = MockBus::new();
        bus.fail_after = Some(2);
        let mut sensor: Sensor<_, Tmp102> = Sensor::new(&mut bus);

        // Select and read succeed, the write fails
        assert_eq!(sensor.enable_extended_mode(), Err(MockError::Bus));
        assert_eq!(sensor.resolution(), 12);
        assert_eq!(sensor.frac_width(), 8);
    }

    #[test]
    fn test_conversion_rate_and_alert() {
        let mut bus = MockBus::new();
        bus.set_register(0x01, 0x60A0);
        {
            let mut sensor: Sensor<_, Tmp102> = Sensor::new(&mut bus);
            assert_eq!(sensor.conversion_rate(), Ok(ConversionRate::Hz4));
            assert_eq!(sensor.check_alert(), Ok(true));

            sensor.set_conversion_rate(ConversionRate::Hz0_25).unwrap();
            assert_eq!(sensor.conversion_rate(), Ok(ConversionRate::Hz0_25));
        }
        assert_eq!(bus.register(0x01), 0x6020);
    }

    #[test]
    fn test_tmp102_standard_byte_shared() {
        let mut bus = MockBus::new();
        bus.set_register(0x01, 0x60A0);
        {
            let mut sensor: Sensor<_, Tmp102> = Sensor::new(&mut bus);
            sensor.enable_shutdown().unwrap();
        }
        // The 8-bit protocol writes only the first configuration byte
        assert_eq!(bus.register(0x01), 0x61A0);
    }
}
