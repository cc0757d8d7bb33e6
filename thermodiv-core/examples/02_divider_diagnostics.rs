//! Divider Diagnostics Example
//!
//! Shows the four resistor identities for the same code, and how an open
//! sensor is reported.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_divider_diagnostics
//! ```

use thermodiv_core::{BalancePosition, DividerConfig, SensorError};

fn main() {
    println!("thermodiv Divider Diagnostics");
    println!("=============================\n");

    let config = DividerConfig::default().with_balance(4_700.0, BalancePosition::Upper);

    let codes = [1u16, 256, 512, 768, 1023, 0];
    println!("{:>6} {:>8} {:>12} {:>12} {:>12} {:>12}", "code", "volts", "R1", "R2", "R1x", "R2x");

    for code in codes {
        let volts = config.code_to_voltage(code);
        let cells = [
            config.r1_from_code(code),
            config.r2_from_code(code),
            config.r1x_from_code(code),
            config.r2x_from_code(code),
        ];

        print!("{:>6} {:>8.4}", code, volts);
        for cell in cells {
            match cell {
                Ok(ohms) => print!(" {:>12.1}", ohms),
                Err(SensorError::DisconnectedOrInvalidReading { .. }) => print!(" {:>12}", "open"),
                Err(e) => print!(" {:>12}", e),
            }
        }
        println!();
    }

    // What-if: the same code read with the balance on the other leg
    let flipped = config.with_balance(config.balance_resistor, config.balance.flipped());
    println!("\nFlipped wiring, code 256: R1 = {:?}", flipped.r1_from_code(256));
}
