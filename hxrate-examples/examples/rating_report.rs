//! # Rating Report
//!
//! Rates a water-to-water exchanger in both flow arrangements and prints the
//! headline metrics for each.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example rating_report
//! ```

use hxrate_core::{ExchangerSpec, FlowArrangement, FluidStream, rate};
use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, MassRate, SpecificHeatCapacity, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    mass_rate::kilogram_per_second,
    power::kilowatt,
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    temperature_interval,
    thermodynamic_temperature::degree_celsius,
};

fn main() {
    for arrangement in [FlowArrangement::Parallel, FlowArrangement::Counter] {
        let spec = water_water(arrangement);
        let rating = rate(&spec);

        println!("{}", arrangement.label());
        println!(
            "  Heat Duty (Q):           {:.2} kW",
            rating.duty.actual.get::<kilowatt>()
        );
        match rating.duty.effectiveness {
            Ok(effectiveness) => {
                println!("  Effectiveness (ε):       {:.2}", effectiveness.get::<ratio>());
            }
            Err(why) => println!("  Effectiveness (ε):       undefined ({why})"),
        }
        match rating.lmtd {
            Ok(lmtd) => println!(
                "  LMTD:                    {:.2} °C",
                lmtd.get::<temperature_interval::degree_celsius>()
            ),
            Err(why) => println!("  LMTD:                    undefined ({why})"),
        }
        match rating.lmtd_heat_duty {
            Ok(duty) => println!(
                "  Estimated Q (via LMTD):  {:.2} kW",
                duty.get::<kilowatt>()
            ),
            Err(why) => println!("  Estimated Q (via LMTD):  undefined ({why})"),
        }
        println!();
    }
}

fn water_water(arrangement: FlowArrangement) -> ExchangerSpec {
    ExchangerSpec {
        hot: FluidStream::new(
            MassRate::new::<kilogram_per_second>(1.5),
            SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.2),
            ThermodynamicTemperature::new::<degree_celsius>(140.0),
            ThermodynamicTemperature::new::<degree_celsius>(90.0),
        )
        .unwrap(),
        cold: FluidStream::new(
            MassRate::new::<kilogram_per_second>(2.0),
            SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.18),
            ThermodynamicTemperature::new::<degree_celsius>(30.0),
            ThermodynamicTemperature::new::<degree_celsius>(70.0),
        )
        .unwrap(),
        overall_heat_transfer: HeatTransfer::new::<watt_per_square_meter_kelvin>(600.0),
        area: Area::new::<square_meter>(25.0),
        arrangement,
    }
}
