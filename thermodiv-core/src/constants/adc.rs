//! ADC and Divider Hardware Defaults
//!
//! Defaults for a 10-bit ADC sampling a resistive divider on a multiplexed
//! analog pin.
//!
//! ```text
//!  Vref ----
//!          |
//!         ---
//!         |R| R1 (default: known balance resistor)
//!         ---
//!          |----- Vout --> ADC pin
//!         ---
//!         |R| R2 (default: unknown / variable resistor)
//!         ---
//!          |
//!  Gnd -----
//! ```

// ===== REFERENCE VOLTAGE =====

/// Analog reference on 5 V AVR boards (V).
///
/// Source: ATmega328P datasheet, AVCC reference
pub const AVR_REFERENCE_VOLTAGE_V: f32 = 5.0;

/// Analog reference on 3.3 V ARM/ESP boards (V).
pub const ARM_REFERENCE_VOLTAGE_V: f32 = 3.3;

/// Default analog reference (V).
///
/// 3.3 V parts dominate current boards; use [`AVR_REFERENCE_VOLTAGE_V`]
/// through `DividerConfig::avr_5v()` on classic AVR.
pub const DEFAULT_REFERENCE_VOLTAGE_V: f32 = ARM_REFERENCE_VOLTAGE_V;

// ===== RESOLUTION =====

/// Largest code a 10-bit ADC returns.
///
/// The number of quantisation steps is `max_code + 1` (1024), which is the
/// divisor used for code-to-voltage conversion.
pub const DEFAULT_ADC_MAX_CODE: u16 = 1023;

// ===== SAMPLING =====

/// Readings averaged per measurement.
pub const DEFAULT_SAMPLE_COUNT: u16 = 16;

/// Delay after each reading (ms).
pub const DEFAULT_SAMPLE_DELAY_MS: u32 = 1;

/// Settle delay after the discarded warm-up read (ms).
///
/// Multiplexed ADCs need time for the sample-and-hold capacitor to charge
/// after switching channels. A value of 0 skips the warm-up read entirely.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 10;

// ===== DIVIDER =====

/// Default known balance resistor (Ω).
///
/// Matches the 10 kΩ nominal resistance of the common NTC parts.
pub const DEFAULT_BALANCE_RESISTOR_OHMS: f32 = 10_000.0;

/// Added to every reading and to the final mean before truncation.
///
/// Compensates the floor behaviour of ADC quantisation.
pub const ROUNDING_BIAS: f32 = 0.5;
