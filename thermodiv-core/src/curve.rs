//! Calibration Curves
//!
//! ## Models
//!
//! ### Beta (simple NTC)
//! ```text
//! 1/T = 1/T0 + ln(R/R0) / β
//! ```
//! One coefficient plus a nominal (R0, T0) point. Accurate to a few tenths of
//! a degree around T0, drifting further away from it.
//!
//! ### Steinhart-Hart
//! ```text
//! 1/T = c1 + c2·ln(R) + c3·ln(R)^3
//! ```
//! Three coefficients fitted over three calibration points; better over wide
//! ranges.
//!
//! ### Linear diode
//! ```text
//! T[°C] = (V - offset) · slope
//! ```
//! Silicon band-gap sensors such as the TMP36 read a voltage, not a resistance.
//!
//! A sensor holds exactly one curve; selecting another variant replaces the
//! whole coefficient set.

use crate::{
    constants::curves::{
        DEFAULT_BETA, DEFAULT_NOMINAL_CELSIUS, DEFAULT_NOMINAL_RESISTANCE_OHMS, DEFAULT_SH_C1,
        DEFAULT_SH_C2, DEFAULT_SH_C3, KY013_SH_C1, KY013_SH_C2, KY013_SH_C3, MF52D_BETA,
        MF52D_NOMINAL_CELSIUS, MF52D_NOMINAL_RESISTANCE_OHMS, TMP36_OFFSET_V, TMP36_SLOPE_C_PER_V,
    },
    errors::{SensorError, SensorResult},
    temperature::{celsius_to_kelvin, Temperature},
};

/// Beta-coefficient NTC model
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaModel {
    /// Beta coefficient (K)
    pub beta: u16,
    /// Resistance at the nominal temperature (Ω)
    pub nominal_resistance: f32,
    /// Nominal temperature (°C)
    pub nominal_celsius: f32,
}

impl Default for BetaModel {
    fn default() -> Self {
        Self {
            beta: DEFAULT_BETA,
            nominal_resistance: DEFAULT_NOMINAL_RESISTANCE_OHMS,
            nominal_celsius: DEFAULT_NOMINAL_CELSIUS,
        }
    }
}

impl BetaModel {
    /// Model from β, R0 (Ω) and T0 (°C)
    pub fn new(beta: u16, nominal_resistance: f32, nominal_celsius: f32) -> Self {
        Self { beta, nominal_resistance, nominal_celsius }
    }

    /// MF52-103 3435 1% NTC
    pub fn mf52d() -> Self {
        Self::new(MF52D_BETA, MF52D_NOMINAL_RESISTANCE_OHMS, MF52D_NOMINAL_CELSIUS)
    }

    /// Temperature of a thermistor at `resistance` ohms
    pub fn solve(&self, resistance: f32) -> SensorResult<Temperature> {
        check_resistance(resistance)?;
        let inv_t = 1.0 / celsius_to_kelvin(self.nominal_celsius)
            + libm::logf(resistance / self.nominal_resistance) / f32::from(self.beta);
        invert(inv_t)
    }

    /// Resistance the model predicts at `temperature`
    pub fn resistance_at(&self, temperature: Temperature) -> f32 {
        let exponent = f32::from(self.beta)
            * (1.0 / temperature.kelvin() - 1.0 / celsius_to_kelvin(self.nominal_celsius));
        self.nominal_resistance * libm::expf(exponent)
    }
}

/// Steinhart-Hart cubic coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteinhartHart {
    /// Constant term
    pub c1: f32,
    /// ln R term
    pub c2: f32,
    /// (ln R)³ term
    pub c3: f32,
}

impl Default for SteinhartHart {
    fn default() -> Self {
        Self::new(DEFAULT_SH_C1, DEFAULT_SH_C2, DEFAULT_SH_C3)
    }
}

impl SteinhartHart {
    /// Coefficients of `1/T = c1 + c2 ln R + c3 (ln R)³`
    pub fn new(c1: f32, c2: f32, c3: f32) -> Self {
        Self { c1, c2, c3 }
    }

    /// KY-013 100 kΩ module
    pub fn ky013() -> Self {
        Self::new(KY013_SH_C1, KY013_SH_C2, KY013_SH_C3)
    }

    /// Temperature of a thermistor at `resistance` ohms
    pub fn solve(&self, resistance: f32) -> SensorResult<Temperature> {
        check_resistance(resistance)?;
        let ln_r = libm::logf(resistance);
        let inv_t = self.c1 + self.c2 * ln_r + self.c3 * libm::powf(ln_r, 3.0);
        invert(inv_t)
    }
}

/// Linear diode voltage model
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiodeModel {
    /// Output voltage at 0 °C (V)
    pub offset_voltage: f32,
    /// °C per volt
    pub slope: f32,
}

impl Default for DiodeModel {
    fn default() -> Self {
        Self::tmp36()
    }
}

impl DiodeModel {
    /// Line through `offset_voltage` at 0 °C with `slope` °C/V
    pub fn new(offset_voltage: f32, slope: f32) -> Self {
        Self { offset_voltage, slope }
    }

    /// Analog Devices TMP36: 500 mV at 0 °C, 10 mV/°C
    pub fn tmp36() -> Self {
        Self::new(TMP36_OFFSET_V, TMP36_SLOPE_C_PER_V)
    }

    /// Temperature for an output voltage
    pub fn solve(&self, voltage: f32) -> SensorResult<Temperature> {
        if !voltage.is_finite() {
            return Err(SensorError::invalid_reading(voltage));
        }
        Ok(Temperature::from_celsius((voltage - self.offset_voltage) * self.slope))
    }

    /// Voltage the model predicts at `temperature`
    pub fn voltage_at(&self, temperature: Temperature) -> f32 {
        temperature.celsius() / self.slope + self.offset_voltage
    }
}

/// The active calibration of a sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "snake_case"))]
pub enum CalibrationCurve {
    /// β-parameter NTC model
    Beta(BetaModel),
    /// Steinhart-Hart NTC model
    SteinhartHart(SteinhartHart),
    /// Linear voltage output (TMP36 style)
    LinearDiode(DiodeModel),
}

impl Default for CalibrationCurve {
    fn default() -> Self {
        Self::Beta(BetaModel::default())
    }
}

impl CalibrationCurve {
    /// Short model name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beta(_) => "beta",
            Self::SteinhartHart(_) => "steinhart-hart",
            Self::LinearDiode(_) => "linear diode",
        }
    }

    /// True for curves solved from a resistance
    pub fn is_resistive(&self) -> bool {
        !matches!(self, Self::LinearDiode(_))
    }

    /// Temperature for a thermistor resistance (Ω)
    pub fn solve_resistance(&self, resistance: f32) -> SensorResult<Temperature> {
        match self {
            Self::Beta(model) => model.solve(resistance),
            Self::SteinhartHart(model) => model.solve(resistance),
            Self::LinearDiode(_) => Err(SensorError::CurveMismatch { expected: "resistive" }),
        }
    }

    /// Temperature for a diode output voltage (V)
    pub fn solve_voltage(&self, voltage: f32) -> SensorResult<Temperature> {
        match self {
            Self::LinearDiode(model) => model.solve(voltage),
            _ => Err(SensorError::CurveMismatch { expected: "linear diode" }),
        }
    }
}

impl From<BetaModel> for CalibrationCurve {
    fn from(model: BetaModel) -> Self {
        Self::Beta(model)
    }
}

impl From<SteinhartHart> for CalibrationCurve {
    fn from(model: SteinhartHart) -> Self {
        Self::SteinhartHart(model)
    }
}

impl From<DiodeModel> for CalibrationCurve {
    fn from(model: DiodeModel) -> Self {
        Self::LinearDiode(model)
    }
}

fn check_resistance(resistance: f32) -> SensorResult<()> {
    if !resistance.is_finite() || resistance <= 0.0 {
        return Err(SensorError::invalid_reading(resistance));
    }
    Ok(())
}

// 1/T must give a finite absolute temperature
fn invert(inv_t: f32) -> SensorResult<Temperature> {
    let kelvin = 1.0 / inv_t;
    if !kelvin.is_finite() || kelvin <= 0.0 {
        return Err(SensorError::invalid_reading(inv_t));
    }
    Ok(Temperature::from_kelvin(kelvin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beta_nominal_point() {
        let curve = CalibrationCurve::Beta(BetaModel::new(3435, 10_000.0, 25.0));
        let t = curve.solve_resistance(10_000.0).unwrap();
        assert!((t.kelvin() - 298.15).abs() < 1e-3);
        assert!((t.celsius() - 25.0).abs() < 1e-3);
    }

    #[test]
    fn beta_is_ntc() {
        let model = BetaModel::default();
        let warm = model.solve(5_000.0).unwrap();
        let cold = model.solve(20_000.0).unwrap();
        assert!(warm > cold);
    }

    #[test]
    fn beta_resistance_inverts_solve() {
        let model = BetaModel::mf52d();
        let r = model.resistance_at(Temperature::from_celsius(60.0));
        let t = model.solve(r).unwrap();
        assert!((t.celsius() - 60.0).abs() < 0.01);
    }

    #[test]
    fn steinhart_hart_room_temperature() {
        // Common 10k coefficients put 10 kΩ at about 25 °C
        let t = SteinhartHart::default().solve(10_000.0).unwrap();
        assert!((t.celsius() - 25.0).abs() < 0.1);
    }

    #[test]
    fn ky013_room_temperature() {
        // 100 kΩ module
        let t = SteinhartHart::ky013().solve(100_000.0).unwrap();
        assert!((t.celsius() - 25.0).abs() < 0.5);
    }

    #[test]
    fn diode_model_is_linear() {
        let curve = CalibrationCurve::LinearDiode(DiodeModel::new(0.5, 100.0));
        let t = curve.solve_voltage(0.75).unwrap();
        assert_eq!(t.celsius(), 25.0);
        assert!((t.kelvin() - 298.15).abs() < 1e-4);
    }

    #[test]
    fn non_positive_resistance_is_invalid() {
        let curve = CalibrationCurve::default();
        for r in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                curve.solve_resistance(r),
                Err(SensorError::DisconnectedOrInvalidReading { .. })
            ));
        }
    }

    #[test]
    fn variants_reject_wrong_input() {
        let diode = CalibrationCurve::from(DiodeModel::tmp36());
        assert_eq!(
            diode.solve_resistance(10_000.0),
            Err(SensorError::CurveMismatch { expected: "resistive" })
        );

        let beta = CalibrationCurve::from(BetaModel::default());
        assert!(beta.solve_voltage(0.7).is_err());
        assert!(beta.is_resistive());
        assert!(!diode.is_resistive());
    }
}
