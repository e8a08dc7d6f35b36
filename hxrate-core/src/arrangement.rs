use serde::{Deserialize, Serialize};
use uom::si::f64::TemperatureInterval;

use crate::{stream::FluidStream, units::TemperatureOps};

/// The relative flow direction of the two fluids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowArrangement {
    /// Both fluids travel the same direction through the exchanger.
    Parallel,
    /// The fluids travel in opposite directions, which generally yields a
    /// higher effectiveness for the same conductance.
    Counter,
}

impl FlowArrangement {
    /// The terminal temperature differences at the two ends of the exchanger.
    ///
    /// Which temperatures pair up depends on the arrangement: in parallel
    /// flow both inlets share an end, while in counter flow each inlet faces
    /// the other fluid's outlet.
    #[must_use]
    pub fn terminal_differences(
        self,
        hot: &FluidStream,
        cold: &FluidStream,
    ) -> [TemperatureInterval; 2] {
        match self {
            Self::Parallel => [
                hot.inlet_temperature.minus(cold.inlet_temperature),
                hot.outlet_temperature.minus(cold.outlet_temperature),
            ],
            Self::Counter => [
                hot.inlet_temperature.minus(cold.outlet_temperature),
                hot.outlet_temperature.minus(cold.inlet_temperature),
            ],
        }
    }

    /// Human-readable name, as used in chart titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Parallel => "Parallel Flow",
            Self::Counter => "Counter Flow",
        }
    }
}
