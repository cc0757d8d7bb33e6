//! Voltage Divider Engine
//!
//! Maps ADC activity on a divider midpoint to a voltage and to the resistance
//! of either leg.
//!
//! ## Divider Topology
//!
//! ```text
//!  Vref ---[ R1 ]---+---[ R2 ]--- Gnd
//!                   |
//!                  Vout --> ADC
//! ```
//!
//! One leg is the known balance resistor, the other is unknown (usually a
//! thermistor). With `N = max_code + 1` quantisation steps:
//!
//! ```text
//! ratio = N / code - 1        (code form)
//! ratio = Vref / Vout - 1     (voltage form)
//! ratio = R1 / R2
//! ```
//!
//! so `R1 = R2 * ratio` when the balance is R2, and `R2 = R1 / ratio` when the
//! balance is R1.
//!
//! ## Resistor Identities
//!
//! | Operation   | Balance assumed        | Returns                         |
//! |-------------|------------------------|---------------------------------|
//! | `r1_*`      | configured             | R1 (the balance itself if R1)   |
//! | `r2_*`      | configured             | R2 (the balance itself if R2)   |
//! | `r1x_*`     | R2, ignoring config    | R1 computed from the ratio      |
//! | `r2x_*`     | R1, ignoring config    | R2 computed from the ratio      |
//!
//! The `x` forms answer "what would the other leg be if the balance were wired
//! the other way" without reconfiguring the instance.
//!
//! ## Sampling
//!
//! `read_averaged_code` optionally discards one warm-up conversion and waits
//! the settle delay, then averages `sampling_count` readings spaced by the
//! sample delay. Each reading and the final mean get a +0.5 bias before
//! truncation to counter ADC floor quantisation. The call blocks for roughly
//! `settle_delay_ms + sampling_count * sample_delay_ms`.

use crate::{
    constants::adc::{
        ARM_REFERENCE_VOLTAGE_V, AVR_REFERENCE_VOLTAGE_V, DEFAULT_ADC_MAX_CODE,
        DEFAULT_BALANCE_RESISTOR_OHMS, DEFAULT_REFERENCE_VOLTAGE_V, DEFAULT_SAMPLE_COUNT,
        DEFAULT_SAMPLE_DELAY_MS, DEFAULT_SETTLE_DELAY_MS, ROUNDING_BIAS,
    },
    errors::{SensorError, SensorResult},
    registry::{CounterGuard, InstanceCounter},
    traits::{AnalogInput, Delay},
};

/// Which leg of the divider holds the known balance resistor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BalancePosition {
    /// Balance is R1, between the reference and the midpoint
    #[default]
    Upper,
    /// Balance is R2, between the midpoint and ground
    Lower,
}

impl BalancePosition {
    /// The opposite wiring
    pub fn flipped(self) -> Self {
        match self {
            Self::Upper => Self::Lower,
            Self::Lower => Self::Upper,
        }
    }

    /// The resistor that is the balance under this wiring
    pub fn balance_resistor(self) -> Resistor {
        match self {
            Self::Upper => Resistor::R1,
            Self::Lower => Resistor::R2,
        }
    }

    /// The resistor left unknown under this wiring
    pub fn unknown_resistor(self) -> Resistor {
        self.flipped().balance_resistor()
    }
}

/// Divider leg identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resistor {
    /// Upper leg, connected to the reference
    R1,
    /// Lower leg, connected to ground
    R2,
}

/// A midpoint measurement, either as a raw code or as a voltage
#[derive(Debug, Clone, Copy, PartialEq)]
enum Midpoint {
    Code(u16),
    Voltage(f32),
}

/// Tunable divider constants
///
/// Owned by exactly one [`VoltageDivider`] and replaced as a whole through
/// [`VoltageDivider::set_config`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DividerConfig {
    /// Readings averaged per measurement
    pub sampling_count: u16,
    /// Delay after each reading (ms)
    pub sample_delay_ms: u32,
    /// Delay after the discarded warm-up read (ms); 0 skips the warm-up
    pub settle_delay_ms: u32,
    /// ADC reference voltage (V)
    pub reference_voltage: f32,
    /// Full-scale ADC code
    pub max_code: u16,
    /// Known resistor (Ω); 0 disables resistance conversion
    pub balance_resistor: f32,
    /// Leg holding the balance resistor
    pub balance: BalancePosition,
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            sampling_count: DEFAULT_SAMPLE_COUNT,
            sample_delay_ms: DEFAULT_SAMPLE_DELAY_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            reference_voltage: DEFAULT_REFERENCE_VOLTAGE_V,
            max_code: DEFAULT_ADC_MAX_CODE,
            balance_resistor: DEFAULT_BALANCE_RESISTOR_OHMS,
            balance: BalancePosition::Upper,
        }
    }
}

impl DividerConfig {
    /// Classic 5 V AVR board with a 10-bit ADC
    pub fn avr_5v() -> Self {
        Self {
            reference_voltage: AVR_REFERENCE_VOLTAGE_V,
            ..Self::default()
        }
    }

    /// 3.3 V board with a 10-bit ADC
    pub fn arm_3v3() -> Self {
        Self {
            reference_voltage: ARM_REFERENCE_VOLTAGE_V,
            ..Self::default()
        }
    }

    /// A divider used only for voltage readings (TMP36 style)
    pub fn voltage_only() -> Self {
        Self {
            balance_resistor: 0.0,
            ..Self::default()
        }
    }

    /// Set the sample count and the per-sample and settle delays (ms)
    pub fn with_sampling(mut self, count: u16, sample_delay_ms: u32, settle_delay_ms: u32) -> Self {
        self.sampling_count = count;
        self.sample_delay_ms = sample_delay_ms;
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    /// Set the ADC reference voltage and full-scale code
    pub fn with_reference(mut self, reference_voltage: f32, max_code: u16) -> Self {
        self.reference_voltage = reference_voltage;
        self.max_code = max_code;
        self
    }

    /// Set the balance resistor value (Ω) and its position
    pub fn with_balance(mut self, ohms: f32, position: BalancePosition) -> Self {
        self.balance_resistor = ohms;
        self.balance = position;
        self
    }

    /// Reject constants that would make the conversions meaningless
    pub fn validate(&self) -> SensorResult<()> {
        if self.sampling_count == 0 {
            return Err(SensorError::InvalidConfig {
                reason: "sampling count must be at least 1",
            });
        }
        if !self.reference_voltage.is_finite() || self.reference_voltage <= 0.0 {
            return Err(SensorError::InvalidConfig {
                reason: "reference voltage must be positive",
            });
        }
        if self.max_code == 0 {
            return Err(SensorError::InvalidConfig {
                reason: "max code must be positive",
            });
        }
        if !self.balance_resistor.is_finite() || self.balance_resistor < 0.0 {
            return Err(SensorError::InvalidConfig {
                reason: "balance resistor must be zero or positive",
            });
        }
        Ok(())
    }

    /// Number of quantisation steps (`max_code + 1`)
    pub fn steps(&self) -> f32 {
        f32::from(self.max_code) + 1.0
    }

    /// True when no balance resistor is configured
    pub fn is_disabled(&self) -> bool {
        self.balance_resistor.is_nan() || self.balance_resistor <= 0.0
    }

    /// Worst-case blocking time of one averaged measurement (ms)
    pub fn measurement_time_ms(&self) -> u64 {
        u64::from(self.settle_delay_ms)
            + u64::from(self.sampling_count) * u64::from(self.sample_delay_ms)
    }

    /// Limit `code` to `max_code`
    pub fn clamp_code(&self, code: u16) -> u16 {
        code.min(self.max_code)
    }

    /// Convert a code to the midpoint voltage
    ///
    /// Codes above `max_code` are clamped.
    pub fn code_to_voltage(&self, code: u16) -> f32 {
        f32::from(self.clamp_code(code)) * (self.reference_voltage / self.steps())
    }

    /// Divider ratio R1/R2 from a code
    pub fn ratio_from_code(&self, code: u16) -> SensorResult<f32> {
        self.ratio(Midpoint::Code(code))
    }

    /// Divider ratio R1/R2 from a voltage
    pub fn ratio_from_voltage(&self, voltage: f32) -> SensorResult<f32> {
        self.ratio(Midpoint::Voltage(voltage))
    }

    /// Resistance of the leg opposite `assumed`, from a code
    ///
    /// Returns `Ok(0.0)` when the divider has no balance resistor.
    pub fn resistance_from_code(&self, code: u16, assumed: BalancePosition) -> SensorResult<f32> {
        self.solve(Midpoint::Code(code), assumed)
    }

    /// Resistance of the leg opposite `assumed`, from a voltage
    pub fn resistance_from_voltage(&self, voltage: f32, assumed: BalancePosition) -> SensorResult<f32> {
        self.solve(Midpoint::Voltage(voltage), assumed)
    }

    /// The leg opposite the configured balance
    pub fn unknown_resistance_from_code(&self, code: u16) -> SensorResult<f32> {
        self.resistance_from_code(code, self.balance)
    }

    /// The leg opposite the configured balance, from a voltage
    pub fn unknown_resistance_from_voltage(&self, voltage: f32) -> SensorResult<f32> {
        self.resistance_from_voltage(voltage, self.balance)
    }

    /// R1 under the configured balance, from a code
    pub fn r1_from_code(&self, code: u16) -> SensorResult<f32> {
        self.leg(Resistor::R1, Midpoint::Code(code))
    }

    /// R1 under the configured balance, from a voltage
    pub fn r1_from_voltage(&self, voltage: f32) -> SensorResult<f32> {
        self.leg(Resistor::R1, Midpoint::Voltage(voltage))
    }

    /// R2 under the configured balance, from a code
    pub fn r2_from_code(&self, code: u16) -> SensorResult<f32> {
        self.leg(Resistor::R2, Midpoint::Code(code))
    }

    /// R2 under the configured balance, from a voltage
    pub fn r2_from_voltage(&self, voltage: f32) -> SensorResult<f32> {
        self.leg(Resistor::R2, Midpoint::Voltage(voltage))
    }

    /// R1 assuming the balance is R2, whatever the configuration says
    pub fn r1x_from_code(&self, code: u16) -> SensorResult<f32> {
        self.resistance_from_code(code, BalancePosition::Lower)
    }

    /// Voltage form of [`Self::r1x_from_code`]
    pub fn r1x_from_voltage(&self, voltage: f32) -> SensorResult<f32> {
        self.resistance_from_voltage(voltage, BalancePosition::Lower)
    }

    /// R2 assuming the balance is R1, whatever the configuration says
    pub fn r2x_from_code(&self, code: u16) -> SensorResult<f32> {
        self.resistance_from_code(code, BalancePosition::Upper)
    }

    /// Voltage form of [`Self::r2x_from_code`]
    pub fn r2x_from_voltage(&self, voltage: f32) -> SensorResult<f32> {
        self.resistance_from_voltage(voltage, BalancePosition::Upper)
    }

    fn leg(&self, resistor: Resistor, midpoint: Midpoint) -> SensorResult<f32> {
        if self.is_disabled() {
            return Ok(0.0);
        }
        if self.balance.balance_resistor() == resistor {
            Ok(self.balance_resistor)
        } else {
            self.solve(midpoint, self.balance)
        }
    }

    fn solve(&self, midpoint: Midpoint, assumed: BalancePosition) -> SensorResult<f32> {
        if self.is_disabled() {
            return Ok(0.0);
        }

        let ratio = self.ratio(midpoint)?;
        match assumed {
            BalancePosition::Lower => Ok(self.balance_resistor * ratio),
            BalancePosition::Upper => {
                if ratio <= 0.0 {
                    // Midpoint at the reference: R1 shorted or R2 open
                    return Err(SensorError::invalid_reading(ratio));
                }
                Ok(self.balance_resistor / ratio)
            }
        }
    }

    fn ratio(&self, midpoint: Midpoint) -> SensorResult<f32> {
        match midpoint {
            Midpoint::Code(code) => {
                let code = self.clamp_code(code);
                if code == 0 {
                    return Err(SensorError::invalid_reading(0.0));
                }
                Ok(self.steps() / f32::from(code) - 1.0)
            }
            Midpoint::Voltage(voltage) => {
                if !voltage.is_finite() {
                    return Err(SensorError::invalid_reading(voltage));
                }
                let voltage = voltage.max(0.0).min(self.reference_voltage);
                if voltage == 0.0 {
                    return Err(SensorError::invalid_reading(voltage));
                }
                Ok(self.reference_voltage / voltage - 1.0)
            }
        }
    }
}

/// A divider wired to one ADC channel
///
/// Owns the analog input and the delay provider. Pure conversions live on
/// [`DividerConfig`]; this type adds the blocking sampling paths.
pub struct VoltageDivider<A, D> {
    adc: A,
    delay: D,
    config: DividerConfig,
    registration: Option<CounterGuard>,
}

impl<A, D> VoltageDivider<A, D>
where
    A: AnalogInput,
    D: Delay,
{
    /// Validate `config` and configure the analog input
    pub fn new(mut adc: A, delay: D, config: DividerConfig) -> SensorResult<Self> {
        config.validate()?;
        adc.configure().map_err(|_| SensorError::AdcReadFailed)?;

        Ok(Self {
            adc,
            delay,
            config,
            registration: None,
        })
    }

    /// Track this divider in `counter` until it is dropped
    pub fn with_counter(mut self, counter: &'static InstanceCounter) -> Self {
        self.registration = Some(counter.register());
        self
    }

    /// Counter this divider is registered with, if any
    pub fn counter(&self) -> Option<&'static InstanceCounter> {
        self.registration.as_ref().map(CounterGuard::counter)
    }

    /// Current configuration
    pub fn config(&self) -> &DividerConfig {
        &self.config
    }

    /// Replace every tunable constant at once
    pub fn set_config(&mut self, config: DividerConfig) -> SensorResult<()> {
        config.validate()?;
        log_debug!(
            "divider reconfigured: {} samples, vref {} V, max code {}",
            config.sampling_count,
            config.reference_voltage,
            config.max_code
        );
        self.config = config;
        Ok(())
    }

    /// The analog input
    pub fn adc(&self) -> &A {
        &self.adc
    }

    /// Mutable access to the analog input
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    /// The delay provider
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Mutable access to the delay provider
    pub fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }

    /// Give back the analog input and the delay provider
    pub fn release(self) -> (A, D) {
        (self.adc, self.delay)
    }

    fn read_code(&mut self) -> SensorResult<u16> {
        let raw = nb::block!(self.adc.read_raw()).map_err(|_| SensorError::AdcReadFailed)?;
        Ok(self.config.clamp_code(raw))
    }

    /// Sample and average the midpoint code
    ///
    /// Blocks for [`DividerConfig::measurement_time_ms`].
    pub fn read_averaged_code(&mut self) -> SensorResult<u16> {
        let config = self.config;

        if config.settle_delay_ms > 0 {
            self.read_code()?;
            self.delay.delay_ms(config.settle_delay_ms);
        }

        // Integer sum stays exact for every u16 count and code
        let mut total: u64 = 0;
        for _ in 0..config.sampling_count {
            total += u64::from(self.read_code()?);
            if config.sample_delay_ms > 0 {
                self.delay.delay_ms(config.sample_delay_ms);
            }
        }

        // Per-reading bias averages to one ROUNDING_BIAS, plus one for rounding
        let bias = 2.0 * f64::from(ROUNDING_BIAS);
        let mean = total as f64 / f64::from(config.sampling_count) + bias;
        let code = config.clamp_code(mean as u16);
        log_debug!("averaged {} samples to code {}", config.sampling_count, code);
        Ok(code)
    }

    /// Sample and convert to the midpoint voltage
    pub fn read_voltage(&mut self) -> SensorResult<f32> {
        let code = self.read_averaged_code()?;
        Ok(self.config.code_to_voltage(code))
    }

    /// See [`DividerConfig::code_to_voltage`]
    pub fn code_to_voltage(&self, code: u16) -> f32 {
        self.config.code_to_voltage(code)
    }

    /// See [`DividerConfig::resistance_from_code`]
    pub fn resistance_from_code(&self, code: u16, assumed: BalancePosition) -> SensorResult<f32> {
        self.config.resistance_from_code(code, assumed)
    }

    /// See [`DividerConfig::resistance_from_voltage`]
    pub fn resistance_from_voltage(&self, voltage: f32, assumed: BalancePosition) -> SensorResult<f32> {
        self.config.resistance_from_voltage(voltage, assumed)
    }

    /// Sample and compute R1
    pub fn read_r1(&mut self) -> SensorResult<f32> {
        let code = self.read_averaged_code()?;
        self.config.r1_from_code(code)
    }

    /// Sample and compute R2
    pub fn read_r2(&mut self) -> SensorResult<f32> {
        let code = self.read_averaged_code()?;
        self.config.r2_from_code(code)
    }

    /// Sample and compute R1 assuming the balance is R2
    pub fn read_r1x(&mut self) -> SensorResult<f32> {
        let code = self.read_averaged_code()?;
        self.config.r1x_from_code(code)
    }

    /// Sample and compute R2 assuming the balance is R1
    pub fn read_r2x(&mut self) -> SensorResult<f32> {
        let code = self.read_averaged_code()?;
        self.config.r2x_from_code(code)
    }

    /// Sample the leg opposite the configured balance
    pub fn read_unknown_resistance(&mut self) -> SensorResult<f32> {
        let code = self.read_averaged_code()?;
        self.config.unknown_resistance_from_code(code)
    }
}
