//! Temperature Scale Constants

/// Offset between the Kelvin and Celsius scales.
///
/// Source: NIST Special Publication 330 (2019)
pub const KELVIN_OFFSET: f32 = 273.15;

/// Fahrenheit degrees per Celsius degree.
pub const FAHRENHEIT_PER_CELSIUS: f32 = 9.0 / 5.0;

/// Water freezing point on the Fahrenheit scale (°F).
pub const FAHRENHEIT_FREEZING_POINT: f32 = 32.0;
