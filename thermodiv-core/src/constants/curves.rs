//! Calibration Coefficients
//!
//! Beta and Steinhart-Hart sets for the supported parts, plus the TMP36 linear
//! diode parameters.

// ===== GENERIC NTC =====

/// Default Beta coefficient (K).
pub const DEFAULT_BETA: u16 = 3435;

/// Default nominal resistance at [`DEFAULT_NOMINAL_CELSIUS`] (Ω).
pub const DEFAULT_NOMINAL_RESISTANCE_OHMS: f32 = 10_000.0;

/// Default nominal temperature (°C).
pub const DEFAULT_NOMINAL_CELSIUS: f32 = 25.0;

/// Common 10 kΩ NTC Steinhart-Hart coefficients.
pub const DEFAULT_SH_C1: f32 = 1.129148e-03;
/// Second Steinhart-Hart coefficient of the default set.
pub const DEFAULT_SH_C2: f32 = 2.341250e-04;
/// Third Steinhart-Hart coefficient of the default set.
pub const DEFAULT_SH_C3: f32 = 8.767410e-08;

// ===== KY013 =====

/// KY-013 100 kΩ@25 °C module Steinhart-Hart coefficients.
///
/// Source: fitted with the SRS NTC calculator from the module's R/T table
pub const KY013_SH_C1: f32 = 5.182977433e-04;
/// Second KY-013 coefficient.
pub const KY013_SH_C2: f32 = 2.252079282e-04;
/// Third KY-013 coefficient.
pub const KY013_SH_C3: f32 = 1.615362158e-07;

// ===== MF52D =====

/// MF52-103 3435 1% NTC.
pub const MF52D_BETA: u16 = 3435;
/// MF52D resistance at 25 °C (Ω).
pub const MF52D_NOMINAL_RESISTANCE_OHMS: f32 = 10_000.0;
/// MF52D nominal temperature (°C).
pub const MF52D_NOMINAL_CELSIUS: f32 = 25.0;

// ===== TMP36 =====

/// TMP36 output at 0 °C (V).
///
/// Source: Analog Devices TMP35/36/37 datasheet
pub const TMP36_OFFSET_V: f32 = 0.5;

/// TMP36 scale factor (°C per V), i.e. 10 mV/°C.
pub const TMP36_SLOPE_C_PER_V: f32 = 100.0;
