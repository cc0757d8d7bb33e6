//! TMP36-style linear voltage sensors

use crate::{
    curve::{CalibrationCurve, DiodeModel},
    divider::VoltageDivider,
    errors::SensorResult,
    temperature::{Temperature, TemperatureUnit},
    traits::{AnalogInput, Delay},
};

use super::TemperatureSensor;

/// A diode sensor read as a plain midpoint voltage
///
/// The divider's balance resistor is ignored; only the code-to-voltage path
/// is used.
pub struct Tmp36<A, D> {
    divider: VoltageDivider<A, D>,
    model: DiodeModel,
}

impl<A, D> Tmp36<A, D>
where
    A: AnalogInput,
    D: Delay,
{
    /// TMP36 with the datasheet offset and slope
    pub fn new(divider: VoltageDivider<A, D>) -> Self {
        Self::with_model(divider, DiodeModel::tmp36())
    }

    /// TMP36-style sensor with a custom line
    pub fn with_model(divider: VoltageDivider<A, D>, model: DiodeModel) -> Self {
        Self { divider, model }
    }

    /// Replace offset (V) and slope (°C/V) together
    pub fn set_params(&mut self, offset_voltage: f32, slope: f32) {
        self.model = DiodeModel::new(offset_voltage, slope);
    }

    /// Active diode model
    pub fn model(&self) -> &DiodeModel {
        &self.model
    }

    /// Active model as a calibration curve
    pub fn curve(&self) -> CalibrationCurve {
        self.model.into()
    }

    /// The underlying divider
    pub fn divider(&self) -> &VoltageDivider<A, D> {
        &self.divider
    }

    /// Mutable access to the divider
    pub fn divider_mut(&mut self) -> &mut VoltageDivider<A, D> {
        &mut self.divider
    }

    /// Give back the divider
    pub fn into_divider(self) -> VoltageDivider<A, D> {
        self.divider
    }

    /// Temperature for an already averaged code
    pub fn temperature_from_code(&self, code: u16) -> SensorResult<Temperature> {
        self.model.solve(self.divider.code_to_voltage(code))
    }

    /// Temperature for a voltage, clamped to `[0, reference_voltage]`
    pub fn temperature_from_voltage(&self, voltage: f32) -> SensorResult<Temperature> {
        let reference = self.divider.config().reference_voltage;
        let voltage = if voltage.is_finite() { voltage.max(0.0).min(reference) } else { voltage };
        self.model.solve(voltage)
    }

    /// Convert an averaged code straight to `unit`
    pub fn code_to_unit(&self, code: u16, unit: TemperatureUnit) -> SensorResult<f32> {
        self.temperature_from_code(code).map(|t| t.in_unit(unit))
    }
}

impl<A, D> TemperatureSensor for Tmp36<A, D>
where
    A: AnalogInput,
    D: Delay,
{
    fn read(&mut self) -> SensorResult<Temperature> {
        let voltage = self.divider.read_voltage()?;
        self.model.solve(voltage)
    }
}
