use uom::si::f64::{Power, TemperatureInterval};

use crate::{
    duty::DutySummary,
    lmtd::{self, LmtdError},
    profile::TemperatureProfile,
    spec::ExchangerSpec,
};

/// The derived thermal performance of an exchanger operating point.
///
/// A rating is recomputed in full whenever any input changes and is never
/// mutated in place. The two states with no defined numeric value (an
/// undefined log mean, a zero maximum duty) are carried as `Err` values
/// inside the record, so every evaluation still yields something the caller
/// can render.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    /// Stream duties, capacitance rates, and effectiveness.
    pub duty: DutySummary,
    /// Log-mean temperature difference for the arrangement.
    pub lmtd: Result<TemperatureInterval, LmtdError>,
    /// Transfer rate implied by the exchanger conductance, `U * A * LMTD`.
    pub lmtd_heat_duty: Result<Power, LmtdError>,
    /// Hot-stream temperature along the normalized exchanger length.
    pub hot_profile: TemperatureProfile,
    /// Cold-stream temperature along the normalized exchanger length.
    pub cold_profile: TemperatureProfile,
}

/// Rates a heat exchanger operating point.
///
/// This is a pure, total function: it performs no I/O, touches no shared
/// state, and always returns a displayable [`Rating`]. Repeated calls with
/// the same spec return the same rating.
#[must_use]
pub fn rate(spec: &ExchangerSpec) -> Rating {
    let lmtd = lmtd::log_mean_temperature_difference(spec.arrangement, &spec.hot, &spec.cold);

    Rating {
        duty: DutySummary::of(spec),
        lmtd,
        lmtd_heat_duty: lmtd.map(|lmtd| spec.ua() * lmtd),
        hot_profile: TemperatureProfile::hot(&spec.hot),
        cold_profile: TemperatureProfile::cold(spec.arrangement, &spec.cold),
    }
}
