//! # Temperature Profile Plot
//!
//! Rates a water-to-water exchanger and opens a window plotting both fluid
//! temperatures along the normalized exchanger length.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example temperature_profile
//! ```

use hxrate_core::{ExchangerSpec, FlowArrangement, FluidStream, rate};
use hxrate_plot::PlotApp;
use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, MassRate, SpecificHeatCapacity, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    mass_rate::kilogram_per_second,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

fn main() {
    let spec = ExchangerSpec {
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
        arrangement: FlowArrangement::Counter,
    };

    let rating = rate(&spec);

    let app = PlotApp::new()
        .add_colored_series("Hot Fluid", [220, 20, 60], &rating.hot_profile.plot_points())
        .add_colored_series("Cold Fluid", [65, 105, 225], &rating.cold_profile.plot_points())
        .with_axis_labels("Normalized Exchanger Length", "Temperature (°C)");

    app.run(&format!("Temperature Profile - {}", spec.arrangement.label()))
        .unwrap();
}
