//! Temperature values and unit views
//!
//! Temperatures are stored in Kelvin. Celsius and Fahrenheit are computed on
//! demand with the fixed affine formulas, so no precision is lost beyond the
//! float representation.

use core::fmt;

use crate::constants::physics::{FAHRENHEIT_FREEZING_POINT, FAHRENHEIT_PER_CELSIUS, KELVIN_OFFSET};

/// Output unit for sensor reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Kelvin (K)
    Kelvin,
    /// Degrees Celsius (°C)
    #[default]
    Celsius,
    /// Degrees Fahrenheit (°F)
    Fahrenheit,
}

impl TemperatureUnit {
    /// Display suffix
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// An absolute temperature
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature {
    kelvin: f32,
}

impl Temperature {
    /// From an absolute temperature
    pub const fn from_kelvin(kelvin: f32) -> Self {
        Self { kelvin }
    }

    /// From degrees Celsius
    pub fn from_celsius(celsius: f32) -> Self {
        Self::from_kelvin(celsius_to_kelvin(celsius))
    }

    /// Kelvin
    pub fn kelvin(self) -> f32 {
        self.kelvin
    }

    /// Degrees Celsius
    pub fn celsius(self) -> f32 {
        kelvin_to_celsius(self.kelvin)
    }

    /// Degrees Fahrenheit
    pub fn fahrenheit(self) -> f32 {
        celsius_to_fahrenheit(self.celsius())
    }

    /// Value in the requested unit
    pub fn in_unit(self, unit: TemperatureUnit) -> f32 {
        match unit {
            TemperatureUnit::Kelvin => self.kelvin(),
            TemperatureUnit::Celsius => self.celsius(),
            TemperatureUnit::Fahrenheit => self.fahrenheit(),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} K", self.kelvin)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Temperature {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} K", self.kelvin)
    }
}

/// Kelvin to degrees Celsius
pub fn kelvin_to_celsius(kelvin: f32) -> f32 {
    kelvin - KELVIN_OFFSET
}

/// Degrees Celsius to Kelvin
pub fn celsius_to_kelvin(celsius: f32) -> f32 {
    celsius + KELVIN_OFFSET
}

/// Degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_FREEZING_POINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_views() {
        let t = Temperature::from_celsius(100.0);
        assert!((t.kelvin() - 373.15).abs() < 1e-3);
        assert!((t.celsius() - 100.0).abs() < 1e-3);
        assert!((t.fahrenheit() - 212.0).abs() < 1e-3);
    }

    #[test]
    fn fixed_points() {
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(Temperature::from_kelvin(0.0).celsius(), -273.15);
    }

    #[test]
    fn in_unit_matches_views() {
        let t = Temperature::from_kelvin(300.0);
        assert_eq!(t.in_unit(TemperatureUnit::Kelvin), t.kelvin());
        assert_eq!(t.in_unit(TemperatureUnit::Celsius), t.celsius());
        assert_eq!(t.in_unit(TemperatureUnit::Fahrenheit), t.fahrenheit());
        assert_eq!(TemperatureUnit::default().symbol(), "°C");
    }
}
