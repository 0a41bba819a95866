//! One conversion in each direction
//!
//! Resolves a PT100 reading of 268.5 ohms to a temperature, then
//! evaluates the PT500 curve at 438°C.

use vandusen::{resistance, temperature, SensorType};

fn main() {
    match temperature(SensorType::Pt100, 268.5, 25.0) {
        Ok(t) => println!("PT100 at 268.5 ohms: {t:.2} °C"),
        Err(e) => println!("PT100 conversion failed: {e:?}"),
    }

    match resistance(SensorType::Pt500, 438.0) {
        Ok(r) => println!("PT500 at 438.00 °C: {r:.2} ohms"),
        Err(e) => println!("PT500 conversion failed: {e:?}"),
    }
}
