use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::{arrangement::FlowArrangement, stream::FluidStream, units::TemperatureOps};

/// Number of samples in a temperature profile.
pub const PROFILE_RESOLUTION: usize = 50;

/// One sample of a temperature profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Normalized position along the exchanger, in `[0, 1]`.
    pub position: Ratio,
    /// Fluid temperature at that position.
    pub temperature: ThermodynamicTemperature,
}

/// A fluid's temperature sampled along the normalized exchanger length.
///
/// Profiles are linear between the boundary temperatures, sampled at
/// [`PROFILE_RESOLUTION`] equally spaced positions covering both endpoints,
/// and fully materialized; iterating one is free of recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureProfile {
    points: Vec<ProfilePoint>,
}

impl TemperatureProfile {
    /// The hot-side profile, falling linearly from inlet to outlet.
    ///
    /// The hot stream always enters at position zero, so the profile is the
    /// same for both arrangements.
    #[must_use]
    pub fn hot(stream: &FluidStream) -> Self {
        let drop = stream.inlet_temperature.minus(stream.outlet_temperature);
        Self::sampled(|x| stream.inlet_temperature - drop * x)
    }

    /// The cold-side profile for the given arrangement.
    #[must_use]
    pub fn cold(arrangement: FlowArrangement, stream: &FluidStream) -> Self {
        let rise = stream.outlet_temperature.minus(stream.inlet_temperature);
        match arrangement {
            FlowArrangement::Parallel => Self::sampled(|x| stream.inlet_temperature + rise * x),
            // Counter flow runs the cold stream against the position axis:
            // its temperature is evaluated at the reversed position 1 - x,
            // counting down from the outlet.
            FlowArrangement::Counter => {
                Self::sampled(|x| stream.outlet_temperature - rise * (1.0 - x))
            }
        }
    }

    fn sampled(temperature_at: impl Fn(f64) -> ThermodynamicTemperature) -> Self {
        let last = (PROFILE_RESOLUTION - 1) as f64;
        let points = (0..PROFILE_RESOLUTION)
            .map(|i| {
                let x = i as f64 / last;
                ProfilePoint {
                    position: Ratio::new::<ratio>(x),
                    temperature: temperature_at(x),
                }
            })
            .collect();

        Self { points }
    }

    /// All samples, ordered by position.
    #[must_use]
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// The samples as `[position, temperature in °C]` pairs, ready for a
    /// line chart.
    #[must_use]
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|point| {
                [
                    point.position.get::<ratio>(),
                    point.temperature.get::<degree_celsius>(),
                ]
            })
            .collect()
    }
}
