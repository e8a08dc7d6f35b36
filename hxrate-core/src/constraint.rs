//! Input-boundary checks for stream quantities.
//!
//! A [`FluidStream`](crate::FluidStream) is only constructible with a
//! strictly positive mass flow rate and specific heat. The rating functions
//! themselves never re-validate; callers that bypass [`FluidStream::new`]
//! (the fields are public) take on the garbage-in/garbage-out contract.

use thiserror::Error;
use uom::si::f64::{MassRate, SpecificHeatCapacity};

/// An error returned when an input quantity violates its required bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    /// The mass flow rate is zero, negative, or not a number.
    #[error("mass flow rate must be greater than zero")]
    NonPositiveMassRate,
    /// The specific heat is zero, negative, or not a number.
    #[error("specific heat must be greater than zero")]
    NonPositiveSpecificHeat,
}

/// A result type alias to use with [`ConstraintError`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

pub(crate) fn check_mass_rate(value: MassRate) -> ConstraintResult<()> {
    // NaN fails the comparison and is rejected along with zero and negatives.
    if value.value > 0.0 {
        Ok(())
    } else {
        Err(ConstraintError::NonPositiveMassRate)
    }
}

pub(crate) fn check_specific_heat(value: SpecificHeatCapacity) -> ConstraintResult<()> {
    if value.value > 0.0 {
        Ok(())
    } else {
        Err(ConstraintError::NonPositiveSpecificHeat)
    }
}
