//! Integration tests for the full sample-and-solve path
//!
//! Runs thermistors and TMP36 sensors against scripted ADC inputs and a
//! virtual clock:
//! - Thermistor temperatures across the operating range
//! - Blocking time of a measurement
//! - Instance accounting
//! - Configuration loaded from JSON

mod common;

use thermodiv_core::{
    mock::{FailingAdc, ScriptedAdc, SlowAdc},
    time::{MockClock, TimeSource},
    BalancePosition, BetaModel, CalibrationCurve, DividerConfig, InstanceCounter, SensorError,
    SteinhartHart, Temperature, TemperatureSensor, TemperatureUnit, Thermistor, ThermistorKind,
    Tmp36, VoltageDivider,
};

use common::{assert_close, ideal_code, raw_for_averaged, scripted_divider};

#[test]
fn thermistor_tracks_beta_curve() {
    let config = DividerConfig::default().with_sampling(1, 0, 0);
    let model = BetaModel::mf52d();

    for celsius in [-10.0f32, 0.0, 25.0, 50.0, 80.0] {
        let expected = Temperature::from_celsius(celsius);
        let code = ideal_code(&config, model.resistance_at(expected));

        let mut sensor = Thermistor::mf52d(scripted_divider(&[raw_for_averaged(code)], config)).unwrap();
        let measured = sensor.read_temperature(TemperatureUnit::Celsius).unwrap();

        // Quantisation of a 10-bit code costs a few tenths near the ends
        assert_close(measured, celsius, 0.5);
    }
}

#[test]
fn lower_balance_thermistor() {
    let config = DividerConfig::arm_3v3()
        .with_sampling(1, 0, 0)
        .with_balance(10_000.0, BalancePosition::Lower);
    let model = BetaModel::default();
    let expected = Temperature::from_celsius(40.0);
    let code = ideal_code(&config, model.resistance_at(expected));

    let mut sensor = Thermistor::new(scripted_divider(&[raw_for_averaged(code)], config), true).unwrap();
    assert_close(sensor.read().unwrap().celsius(), 40.0, 0.3);
}

#[test]
fn averaged_noise_converges() {
    // Noise around code 512 (R2 == balance)
    let config = DividerConfig::default().with_sampling(7, 1, 10);
    let divider = scripted_divider(&[0, 509, 513, 510, 512, 511, 510, 512], config);
    let mut sensor = Thermistor::with_curve(divider, BetaModel::mf52d().into()).unwrap();

    let t = sensor.read().unwrap();
    assert_close(t.celsius(), 25.0, 0.5);

    let clock = sensor.divider().delay();
    assert_eq!(clock.now(), config.measurement_time_ms());
    assert_eq!(sensor.divider().adc().reads(), 8);
}

#[test]
fn ky013_module() {
    // 100 kΩ module under a 100 kΩ balance at midscale
    let config = DividerConfig::default()
        .with_sampling(1, 0, 0)
        .with_balance(100_000.0, BalancePosition::Upper);
    let sensor = Thermistor::ky013(scripted_divider(&[511], config)).unwrap();

    assert_eq!(sensor.kind(), ThermistorKind::Ky013);
    let t = sensor.temperature_from_code(512).unwrap();
    assert_close(t.celsius(), 24.68, 0.05);
}

#[test]
fn steinhart_hart_and_beta_agree_near_nominal() {
    let sensor = Thermistor::new(scripted_divider(&[511], DividerConfig::default()), false).unwrap();
    let sh = sensor.temperature_from_resistance(10_000.0).unwrap();
    let beta = CalibrationCurve::from(BetaModel::default())
        .solve_resistance(10_000.0)
        .unwrap();
    assert_close(sh.celsius(), beta.celsius(), 0.05);
    assert!(matches!(sensor.curve(), CalibrationCurve::SteinhartHart(_)));

    let f = sensor.resistance_to_unit(10_000.0, TemperatureUnit::Fahrenheit).unwrap();
    assert_close(f, 77.0, 0.1);
}

#[test]
fn tmp36_end_to_end() {
    // 0.75 V on a 5 V / 10-bit ADC is code 153.6; 153 reads 24.7 °C
    let config = DividerConfig::voltage_only()
        .with_reference(5.0, 1023)
        .with_sampling(4, 1, 10);
    let divider = VoltageDivider::new(ScriptedAdc::<1>::constant(152), MockClock::new(0), config).unwrap();
    let mut tmp = Tmp36::new(divider);

    let c = tmp.read_temperature(TemperatureUnit::Celsius).unwrap();
    assert_close(c, 24.707, 0.01);

    let k = tmp.read_temperature(TemperatureUnit::Kelvin).unwrap();
    assert_close(k, 297.857, 0.01);

    assert_eq!(tmp.divider().delay().now(), 2 * config.measurement_time_ms());
}

#[test]
fn tmp36_ignores_balance_resistor() {
    let config = DividerConfig::avr_5v().with_sampling(1, 0, 0);
    let divider = VoltageDivider::new(ScriptedAdc::<1>::constant(152), MockClock::new(0), config).unwrap();
    let tmp = Tmp36::new(divider);
    assert_close(tmp.temperature_from_voltage(0.75).unwrap().celsius(), 25.0, 1e-4);
}

#[test]
fn conversion_in_progress_is_polled() {
    let config = DividerConfig::default().with_sampling(2, 0, 0);
    let divider = VoltageDivider::new(SlowAdc::new(511, 3), MockClock::new(0), config).unwrap();

    let mut sensor = Thermistor::mf52d(divider).unwrap();
    assert_close(sensor.read().unwrap().celsius(), 25.0, 0.01);
    assert_eq!(sensor.divider().adc().polls(), 8);
}

#[test]
fn hardware_failure_surfaces() {
    let divider = VoltageDivider::new(FailingAdc, MockClock::new(0), DividerConfig::default()).unwrap();
    let mut sensor = Thermistor::mf52d(divider).unwrap();
    assert_eq!(sensor.read(), Err(SensorError::AdcReadFailed));
    // Nothing sticky: pure conversions keep working
    assert!(sensor.temperature_from_code(512).is_ok());
}

#[test]
fn instance_counter_tracks_live_dividers() {
    static DIVIDERS: InstanceCounter = InstanceCounter::new();

    let mut live: Vec<_> = (0..6)
        .map(|_| scripted_divider(&[511], DividerConfig::default()).with_counter(&DIVIDERS))
        .collect();
    assert_eq!(DIVIDERS.count(), 6);
    assert!(live.iter().all(|d| d.counter().is_some()));

    live.truncate(2);
    assert_eq!(DIVIDERS.count(), 2);

    // Moving a divider into a sensor keeps its registration
    let sensor = Thermistor::mf52d(live.pop().unwrap()).unwrap();
    assert_eq!(DIVIDERS.count(), 2);
    drop(sensor);
    drop(live);
    assert_eq!(DIVIDERS.count(), 0);
}

#[test]
fn released_parts_are_reusable() {
    let divider = scripted_divider(&[400], DividerConfig::default().with_sampling(1, 5, 0));
    let mut sensor = Thermistor::new(divider, true).unwrap();
    sensor.read().unwrap();

    let (adc, clock) = sensor.into_divider().release();
    assert!(adc.is_configured());
    assert_eq!(adc.reads(), 1);
    assert_eq!(clock.now(), 5);
}

#[test]
fn borrowed_hardware() {
    let mut adc = ScriptedAdc::<1>::constant(511);
    let mut clock = MockClock::new(100);
    {
        let divider = VoltageDivider::new(&mut adc, &mut clock, DividerConfig::default()).unwrap();
        let mut sensor = Thermistor::mf52d(divider).unwrap();
        sensor.read().unwrap();
    }
    assert_eq!(adc.reads(), 17);
    assert_eq!(clock.elapsed_since(100), 26);
}

#[cfg(feature = "serde")]
#[test]
fn config_from_json() {
    let json = r#"{
        "sampling_count": 4,
        "reference_voltage": 5.0,
        "balance_resistor": 4700.0,
        "balance": "lower"
    }"#;
    let config: DividerConfig = serde_json::from_str(json).unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.sampling_count, 4);
    assert_eq!(config.balance, BalancePosition::Lower);
    // Missing fields fall back to defaults
    assert_eq!(config.max_code, 1023);
    assert_eq!(config.settle_delay_ms, 10);
}

#[cfg(feature = "serde")]
#[test]
fn curve_from_json() {
    let curve: CalibrationCurve =
        serde_json::from_str(r#"{"model": "steinhart_hart", "c1": 0.001, "c2": 0.0002, "c3": 1e-7}"#).unwrap();
    let CalibrationCurve::SteinhartHart(SteinhartHart { c1, c2, c3 }) = curve else {
        panic!("expected a Steinhart-Hart curve, got {curve:?}");
    };
    assert_close(c1, 0.001, 1e-9);
    assert_close(c2, 0.0002, 1e-10);
    assert_close(c3, 1e-7, 1e-12);
}
