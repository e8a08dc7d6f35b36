#![warn(missing_docs)]

//! Rating calculations for two-fluid heat exchangers.
//!
//! Given the flow rates, specific heats, and boundary temperatures of a hot
//! and a cold stream, plus the exchanger's conductance and flow arrangement,
//! this crate computes:
//!
//! - Heat duty on each side and the actual transfer rate
//! - The log-mean temperature difference (LMTD) and the duty it implies
//! - Effectiveness relative to the maximum possible transfer rate
//! - Temperature profiles along the normalized exchanger length
//!
//! The entry point is [`rate`], a pure function from an [`ExchangerSpec`] to
//! a [`Rating`]. Evaluations with no defined LMTD or effectiveness still
//! produce a rating; those fields carry an error value describing why.
//!
//! # Example
//!
//! ```rust
//! use hxrate_core::{ExchangerSpec, FlowArrangement, FluidStream, rate};
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, HeatTransfer, MassRate, SpecificHeatCapacity, ThermodynamicTemperature},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     mass_rate::kilogram_per_second,
//!     power::kilowatt,
//!     specific_heat_capacity::kilojoule_per_kilogram_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let spec = ExchangerSpec {
//!     hot: FluidStream::new(
//!         MassRate::new::<kilogram_per_second>(1.5),
//!         SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.2),
//!         ThermodynamicTemperature::new::<degree_celsius>(140.0),
//!         ThermodynamicTemperature::new::<degree_celsius>(90.0),
//!     )?,
//!     cold: FluidStream::new(
//!         MassRate::new::<kilogram_per_second>(2.0),
//!         SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.18),
//!         ThermodynamicTemperature::new::<degree_celsius>(30.0),
//!         ThermodynamicTemperature::new::<degree_celsius>(70.0),
//!     )?,
//!     overall_heat_transfer: HeatTransfer::new::<watt_per_square_meter_kelvin>(600.0),
//!     area: Area::new::<square_meter>(25.0),
//!     arrangement: FlowArrangement::Parallel,
//! };
//!
//! let rating = rate(&spec);
//! assert_eq!(rating.duty.actual.get::<kilowatt>(), 315.0);
//! # Ok::<(), hxrate_core::ConstraintError>(())
//! ```

mod arrangement;
mod constraint;
mod duty;
mod lmtd;
mod profile;
mod rating;
mod spec;
mod stream;
mod units;

pub use arrangement::FlowArrangement;
pub use constraint::{ConstraintError, ConstraintResult};
pub use duty::{DutySummary, ZeroMaxDuty};
pub use lmtd::{LmtdError, log_mean_temperature_difference};
pub use profile::{PROFILE_RESOLUTION, ProfilePoint, TemperatureProfile};
pub use rating::{Rating, rate};
pub use spec::ExchangerSpec;
pub use stream::FluidStream;
pub use units::TemperatureOps;
