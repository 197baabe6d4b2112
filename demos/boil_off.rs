//! Prints the ARTIE-II resistance breakdown, boil-off time, and a vacuum gap
//! sweep.
//!
//! Dimensions can be overridden in inches from the command line:
//!
//! ```text
//! RUST_LOG=debug cargo run --example boil_off -- foam_outer_radius=3.0
//! ```

use std::error::Error;

use artie_models::models::thermal::{
    materials::{Environment, Materials},
    target::{Geometry, GeometryConfig, Target},
};
use uom::si::{
    f64::Length, length::inch, mass_rate::gram_per_second, power::watt, time::hour,
};

/// Parses one `key=value` argument, with the value in inches.
fn parse_override(arg: &str) -> Result<(String, f64), Box<dyn Error>> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{arg}`"))?;
    let value: f64 = value.parse()?;
    if !value.is_finite() {
        let message = format!("`{key}` must be a finite number of inches, got `{value}`");
        return Err(message.into());
    }
    Ok((key.to_owned(), value))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let overrides = std::env::args()
        .skip(1)
        .map(|arg| parse_override(&arg))
        .collect::<Result<Vec<_>, _>>()?;

    let config = GeometryConfig::from_overrides(overrides)?;
    let target = Target::new(
        Geometry::new(&config)?,
        Materials::artie(),
        Environment::default(),
    );

    println!("{:<24} {:>12}", "layer", "K/W");
    for contribution in target.network().breakdown()? {
        println!(
            "{:<24} {:>12.4} x{}",
            contribution.layer.to_string(),
            contribution.resistance.value,
            contribution.count
        );
    }

    let boil_off = target.boil_off()?;
    println!();
    println!("surface   {:>10.3} K/W", boil_off.totals.surface.value);
    println!("face      {:>10.3} K/W", boil_off.totals.face.value);
    println!("total     {:>10.3} K/W", boil_off.total_resistance().value);
    println!("heat leak {:>10.4} W", boil_off.heat_leak.get::<watt>());
    println!("boil-off  {:>10.4} g/s", boil_off.boil_off_rate.get::<gram_per_second>());
    println!("tau_alpha {:>10.2} h", boil_off.tau_alpha.get::<hour>());

    println!();
    println!("{:>14} {:>12}", "offset (in)", "tau (h)");
    let offsets = (0..=10).map(|i| Length::new::<inch>(-0.2 + 0.1 * f64::from(i)));
    for point in target.sweep_vacuum_offsets(offsets)? {
        println!(
            "{:>14.2} {:>12.2}",
            point.parameter.get::<inch>(),
            point.tau_alpha.get::<hour>()
        );
    }

    Ok(())
}
