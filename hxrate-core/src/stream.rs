use serde::{Deserialize, Serialize};
use uom::si::f64::{
    MassRate, Power, SpecificHeatCapacity, ThermalConductance, ThermodynamicTemperature,
};

use crate::{
    constraint::{self, ConstraintResult},
    units::TemperatureOps,
};

/// One side of the exchanger: a fluid with constant specific heat and known
/// boundary temperatures.
///
/// The outlet temperature is a measured or assumed value, not something this
/// crate solves for. Nothing ties it to the inlet; physically inconsistent
/// boundaries flow through the rating arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidStream {
    /// Mass flow rate. Strictly positive when built via [`FluidStream::new`].
    pub mass_rate: MassRate,
    /// Specific heat capacity, assumed constant across the exchanger.
    /// Strictly positive when built via [`FluidStream::new`].
    pub specific_heat: SpecificHeatCapacity,
    /// Temperature where the fluid enters.
    pub inlet_temperature: ThermodynamicTemperature,
    /// Temperature where the fluid leaves.
    pub outlet_temperature: ThermodynamicTemperature,
}

impl FluidStream {
    /// Creates a stream, rejecting a non-positive flow rate or specific heat.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`](crate::ConstraintError) if `mass_rate`
    /// or `specific_heat` is zero, negative, or not a number.
    pub fn new(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature: ThermodynamicTemperature,
    ) -> ConstraintResult<Self> {
        constraint::check_mass_rate(mass_rate)?;
        constraint::check_specific_heat(specific_heat)?;

        Ok(Self {
            mass_rate,
            specific_heat,
            inlet_temperature,
            outlet_temperature,
        })
    }

    /// The capacitance rate `m * cp` of this stream.
    #[must_use]
    pub fn capacitance_rate(&self) -> ThermalConductance {
        self.mass_rate * self.specific_heat
    }

    /// Heat released as the fluid moves from inlet to outlet, `m * cp * (T_in - T_out)`.
    ///
    /// Negative when the fluid actually warms up along the exchanger.
    #[must_use]
    pub fn heat_released(&self) -> Power {
        self.capacitance_rate() * self.inlet_temperature.minus(self.outlet_temperature)
    }

    /// Heat absorbed as the fluid moves from inlet to outlet, `m * cp * (T_out - T_in)`.
    ///
    /// Negative when the fluid actually cools down along the exchanger.
    #[must_use]
    pub fn heat_absorbed(&self) -> Power {
        -self.heat_released()
    }
}
