//! Thermistor Reading Example
//!
//! Reads an MF52D NTC thermistor through a 10 kΩ divider and prints the
//! temperature in every unit.
//!
//! ## What You'll Learn
//!
//! - Wiring a `VoltageDivider` to an analog input and a delay
//! - Composing it into a `Thermistor`
//! - Switching between Beta and Steinhart-Hart curves
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_thermistor_reading
//! ```

use thermodiv_core::{
    mock::ScriptedAdc,
    time::StdDelay,
    DividerConfig, SensorError, SteinhartHart, TemperatureSensor, TemperatureUnit, Thermistor,
    VoltageDivider,
};

fn main() -> Result<(), SensorError> {
    println!("thermodiv Thermistor Example");
    println!("============================\n");

    // Stand-in for a real ADC pin: a slightly noisy midpoint around 45% of scale
    let adc = ScriptedAdc::<4>::from_slice(&[460, 462, 461, 459]);
    let config = DividerConfig::avr_5v();

    println!("Divider:");
    println!("  Reference:   {} V", config.reference_voltage);
    println!("  Balance:     {} Ω ({:?})", config.balance_resistor, config.balance);
    println!("  Samples:     {}", config.sampling_count);
    println!("  Blocks for:  ~{} ms per reading\n", config.measurement_time_ms());

    let divider = VoltageDivider::new(adc, StdDelay, config)?;
    let mut sensor = Thermistor::mf52d(divider)?;

    for unit in [TemperatureUnit::Celsius, TemperatureUnit::Kelvin, TemperatureUnit::Fahrenheit] {
        let value = sensor.read_temperature(unit)?;
        println!("  Beta model:           {:8.2} {}", value, unit.symbol());
    }

    sensor.set_steinhart_hart(SteinhartHart::default());
    let celsius = sensor.read_temperature(TemperatureUnit::Celsius)?;
    println!("  Steinhart-Hart model: {:8.2} °C", celsius);

    // Offline conversion of a logged code, no sampling delay involved
    let logged = sensor.temperature_from_code(300)?;
    println!("\nLogged code 300 -> {}", logged);

    Ok(())
}
