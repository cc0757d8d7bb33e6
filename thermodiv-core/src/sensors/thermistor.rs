//! NTC thermistor on a resistive divider

use crate::{
    curve::{BetaModel, CalibrationCurve, SteinhartHart},
    divider::{DividerConfig, VoltageDivider},
    errors::{SensorError, SensorResult},
    temperature::{Temperature, TemperatureUnit},
    traits::{AnalogInput, Delay},
};

use super::TemperatureSensor;

/// Known thermistor parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThermistorKind {
    /// Generic 10 kΩ NTC with the default Beta or Steinhart-Hart set
    #[default]
    Default,
    /// KY-013 module, Steinhart-Hart
    Ky013,
    /// MF52D 10 kΩ 3435, Beta
    Mf52d,
}

/// A thermistor read through the leg opposite the balance resistor
pub struct Thermistor<A, D> {
    divider: VoltageDivider<A, D>,
    curve: CalibrationCurve,
    kind: ThermistorKind,
    prefer_beta: bool,
}

impl<A, D> Thermistor<A, D>
where
    A: AnalogInput,
    D: Delay,
{
    /// Generic thermistor with default coefficients
    ///
    /// `prefer_beta` selects the default Beta model, otherwise the default
    /// Steinhart-Hart set.
    pub fn new(divider: VoltageDivider<A, D>, prefer_beta: bool) -> SensorResult<Self> {
        require_balance(divider.config())?;

        let mut sensor = Self {
            divider,
            curve: CalibrationCurve::default(),
            kind: ThermistorKind::Default,
            prefer_beta,
        };
        sensor.set_kind(ThermistorKind::Default);
        Ok(sensor)
    }

    /// KY-013 module (Steinhart-Hart)
    pub fn ky013(divider: VoltageDivider<A, D>) -> SensorResult<Self> {
        let mut sensor = Self::new(divider, false)?;
        sensor.set_kind(ThermistorKind::Ky013);
        Ok(sensor)
    }

    /// MF52D 10 kΩ NTC (Beta 3435)
    pub fn mf52d(divider: VoltageDivider<A, D>) -> SensorResult<Self> {
        let mut sensor = Self::new(divider, true)?;
        sensor.set_kind(ThermistorKind::Mf52d);
        Ok(sensor)
    }

    /// Thermistor with an explicit resistive curve
    pub fn with_curve(divider: VoltageDivider<A, D>, curve: CalibrationCurve) -> SensorResult<Self> {
        let mut sensor = Self::new(divider, true)?;
        sensor.set_curve(curve)?;
        Ok(sensor)
    }

    /// Load the coefficient set of a known part
    pub fn set_kind(&mut self, kind: ThermistorKind) {
        self.kind = kind;
        self.curve = match kind {
            ThermistorKind::Ky013 => SteinhartHart::ky013().into(),
            ThermistorKind::Mf52d => BetaModel::mf52d().into(),
            ThermistorKind::Default if self.prefer_beta => BetaModel::default().into(),
            ThermistorKind::Default => SteinhartHart::default().into(),
        };
        self.prefer_beta = matches!(self.curve, CalibrationCurve::Beta(_));
        log_debug!("thermistor curve set to {}", self.curve.name());
    }

    /// Switch to a Beta model
    pub fn set_beta(&mut self, model: BetaModel) {
        self.curve = model.into();
        self.prefer_beta = true;
    }

    /// Switch to Steinhart-Hart coefficients
    pub fn set_steinhart_hart(&mut self, coefficients: SteinhartHart) {
        self.curve = coefficients.into();
        self.prefer_beta = false;
    }

    /// Replace the curve; diode curves are rejected
    pub fn set_curve(&mut self, curve: CalibrationCurve) -> SensorResult<()> {
        match curve {
            CalibrationCurve::Beta(model) => self.set_beta(model),
            CalibrationCurve::SteinhartHart(coefficients) => self.set_steinhart_hart(coefficients),
            CalibrationCurve::LinearDiode(_) => {
                return Err(SensorError::CurveMismatch { expected: "resistive" })
            }
        }
        Ok(())
    }

    /// Active calibration curve
    pub fn curve(&self) -> &CalibrationCurve {
        &self.curve
    }

    /// Part the last `set_kind` loaded
    pub fn kind(&self) -> ThermistorKind {
        self.kind
    }

    /// The underlying divider
    pub fn divider(&self) -> &VoltageDivider<A, D> {
        &self.divider
    }

    /// Mutable access to the divider
    ///
    /// A configuration without a balance resistor set through here makes the
    /// conversions fail with `InvalidConfig`.
    pub fn divider_mut(&mut self) -> &mut VoltageDivider<A, D> {
        &mut self.divider
    }

    /// Replace the divider configuration, keeping the balance resistor check
    pub fn set_config(&mut self, config: DividerConfig) -> SensorResult<()> {
        require_balance(&config)?;
        self.divider.set_config(config)
    }

    /// Give back the divider
    pub fn into_divider(self) -> VoltageDivider<A, D> {
        self.divider
    }

    /// Solve the active curve for a thermistor resistance
    pub fn temperature_from_resistance(&self, resistance: f32) -> SensorResult<Temperature> {
        self.curve.solve_resistance(resistance)
    }

    /// Temperature for an already averaged code
    pub fn temperature_from_code(&self, code: u16) -> SensorResult<Temperature> {
        let config = self.divider.config();
        require_balance(config)?;
        let resistance = config.unknown_resistance_from_code(code)?;
        self.temperature_from_resistance(resistance)
    }

    /// Temperature for a midpoint voltage
    pub fn temperature_from_voltage(&self, voltage: f32) -> SensorResult<Temperature> {
        let config = self.divider.config();
        require_balance(config)?;
        let resistance = config.unknown_resistance_from_voltage(voltage)?;
        self.temperature_from_resistance(resistance)
    }

    /// Convert a resistance straight to `unit`
    pub fn resistance_to_unit(&self, resistance: f32, unit: TemperatureUnit) -> SensorResult<f32> {
        self.temperature_from_resistance(resistance).map(|t| t.in_unit(unit))
    }
}

impl<A, D> TemperatureSensor for Thermistor<A, D>
where
    A: AnalogInput,
    D: Delay,
{
    fn read(&mut self) -> SensorResult<Temperature> {
        require_balance(self.divider.config())?;
        let resistance = self.divider.read_unknown_resistance()?;
        self.temperature_from_resistance(resistance)
    }
}

// A zero balance leg reads as the 0 Ω sentinel, which no curve can solve
fn require_balance(config: &DividerConfig) -> SensorResult<()> {
    if config.is_disabled() {
        return Err(SensorError::InvalidConfig {
            reason: "thermistor divider needs a balance resistor",
        });
    }
    Ok(())
}
