//! Extensions to `uom` quantities used across the crate.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction for absolute temperatures.
///
/// `uom` keeps `ThermodynamicTemperature` (a point on the scale) distinct
/// from `TemperatureInterval` (a change along it) and implements no `Sub`
/// between two absolute temperatures, so the difference is taken explicitly
/// in kelvin.
pub trait TemperatureOps {
    /// The signed interval `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
