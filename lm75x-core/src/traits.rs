//! Sensor traits
//!
//! These traits define the interface between application logic and the
//! concrete sensor drivers.

use crate::codec::celsius_to_fahrenheit;

/// Trait for temperature sensors
///
/// Implementations handle the specific sensor family; callers only see
/// degrees.
pub trait TemperatureSensor {
    /// Error reported by the underlying transport
    type Error;

    /// Read the current temperature in degrees Celsius
    ///
    /// Takes `&mut self` because reading the sensor requires bus access.
    fn read_celsius(&mut self) -> Result<f32, Self::Error>;

    /// Read the current temperature in degrees Fahrenheit
    fn read_fahrenheit(&mut self) -> Result<f32, Self::Error> {
        self.read_celsius().map(celsius_to_fahrenheit)
    }

    /// Read the current temperature as a fixed-point value with 0.1°C
    /// resolution (45.5°C is returned as 455), truncated toward zero
    fn read_celsius_x10(&mut self) -> Result<i16, Self::Error> {
        self.read_celsius().map(|c| (c * 10.0) as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSensor(f32);

    impl TemperatureSensor for FixedSensor {
        type Error = ();

        fn read_celsius(&mut self) -> Result<f32, ()> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_default_conversions() {
        let mut sensor = FixedSensor(45.5);
        assert_eq!(sensor.read_celsius_x10(), Ok(455));
        assert!((sensor.read_fahrenheit().unwrap() - 113.9).abs() < 1e-3);

        let mut cold = FixedSensor(-0.25);
        assert_eq!(cold.read_celsius_x10(), Ok(-2));
    }
}
