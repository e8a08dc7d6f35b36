//! Shared fixtures for the integration tests.

use hxrate_core::{ExchangerSpec, FlowArrangement, FluidStream};
use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, MassRate, SpecificHeatCapacity, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    mass_rate::kilogram_per_second,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// A stream built from plain numbers in the UI's units.
pub fn stream(mass_rate: f64, cp: f64, inlet: f64, outlet: f64) -> FluidStream {
    FluidStream::new(
        MassRate::new::<kilogram_per_second>(mass_rate),
        SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cp),
        ThermodynamicTemperature::new::<degree_celsius>(inlet),
        ThermodynamicTemperature::new::<degree_celsius>(outlet),
    )
    .expect("fixture streams have positive flow and cp")
}

/// The water-to-water operating point used across the test suite.
pub fn water_water(arrangement: FlowArrangement) -> ExchangerSpec {
    ExchangerSpec {
        hot: stream(1.5, 4.2, 140.0, 90.0),
        cold: stream(2.0, 4.18, 30.0, 70.0),
        overall_heat_transfer: HeatTransfer::new::<watt_per_square_meter_kelvin>(600.0),
        area: Area::new::<square_meter>(25.0),
        arrangement,
    }
}
