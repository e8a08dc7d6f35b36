use serde::{Deserialize, Serialize};
use uom::si::f64::{Area, HeatTransfer, ThermalConductance};

use crate::{arrangement::FlowArrangement, stream::FluidStream};

/// A complete description of a heat exchanger operating point.
///
/// Constructed fresh for every evaluation and passed by reference into
/// [`rate`](crate::rate); nothing in this crate mutates a spec after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangerSpec {
    /// The stream giving up heat.
    pub hot: FluidStream,
    /// The stream taking up heat.
    pub cold: FluidStream,
    /// Overall heat transfer coefficient U of the exchanger surface.
    pub overall_heat_transfer: HeatTransfer,
    /// Heat transfer area A.
    pub area: Area,
    /// Relative flow direction of the two streams.
    pub arrangement: FlowArrangement,
}

impl ExchangerSpec {
    /// The exchanger conductance `U * A`.
    #[must_use]
    pub fn ua(&self) -> ThermalConductance {
        self.overall_heat_transfer * self.area
    }
}
