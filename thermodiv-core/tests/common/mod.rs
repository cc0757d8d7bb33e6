//! Shared helpers for integration tests
//!
//! - Building dividers on scripted inputs and a virtual clock
//! - Ideal ADC codes for a given unknown resistance

#![allow(dead_code)]

use thermodiv_core::{
    mock::ScriptedAdc,
    time::MockClock,
    BalancePosition, DividerConfig, VoltageDivider,
};

pub type ScriptedDivider = VoltageDivider<ScriptedAdc<8>, MockClock>;

/// Divider on a scripted ADC, starting the clock at 0
pub fn scripted_divider(codes: &[u16], config: DividerConfig) -> ScriptedDivider {
    VoltageDivider::new(ScriptedAdc::from_slice(codes), MockClock::new(0), config)
        .expect("test config is valid")
}

/// Code an ideal ADC reports for `unknown_ohms` opposite the balance
pub fn ideal_code(config: &DividerConfig, unknown_ohms: f32) -> u16 {
    let (r1, r2) = match config.balance {
        BalancePosition::Upper => (config.balance_resistor, unknown_ohms),
        BalancePosition::Lower => (unknown_ohms, config.balance_resistor),
    };
    let fraction = r2 / (r1 + r2);
    (fraction * config.steps()).round() as u16
}

/// Raw reading that the +1 averaging bias turns into `code`
pub fn raw_for_averaged(code: u16) -> u16 {
    code.saturating_sub(1)
}

pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
