use thiserror::Error;
use uom::si::f64::TemperatureInterval;

use crate::{arrangement::FlowArrangement, stream::FluidStream};

/// The log-mean temperature difference has no defined value for these
/// boundary temperatures.
///
/// The log mean requires a strictly positive ratio of terminal differences.
/// Rather than letting a logarithm of a non-positive number propagate as NaN
/// into displayed metrics, the calculator reports which way the ratio failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LmtdError {
    /// One terminal difference is zero while the other is not.
    #[error("a terminal temperature difference is zero, so the log mean is undefined")]
    ZeroTerminalDifference,
    /// The terminal differences have opposite signs.
    #[error("the terminal temperature differences have opposite signs, so the log mean is undefined")]
    OppositeSigns,
}

/// Computes the log-mean of the two terminal temperature differences.
///
/// Equal terminal differences are the log mean's removable singularity; the
/// common value is its limit there and is returned without evaluating the
/// logarithm. Both differences sharing a negative sign is accepted and
/// yields a negative log mean.
///
/// # Errors
///
/// Returns an [`LmtdError`] if the ratio of terminal differences is zero,
/// infinite, or negative.
pub fn log_mean_temperature_difference(
    arrangement: FlowArrangement,
    hot: &FluidStream,
    cold: &FluidStream,
) -> Result<TemperatureInterval, LmtdError> {
    let [delta_1, delta_2] = arrangement.terminal_differences(hot, cold);

    if delta_1 == delta_2 {
        return Ok(delta_1);
    }
    if delta_1.value == 0.0 || delta_2.value == 0.0 {
        return Err(LmtdError::ZeroTerminalDifference);
    }
    if delta_1.value.is_sign_positive() != delta_2.value.is_sign_positive() {
        return Err(LmtdError::OppositeSigns);
    }

    Ok((delta_1 - delta_2) / (delta_1.value / delta_2.value).ln())
}
