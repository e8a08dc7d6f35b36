use thiserror::Error;
use uom::si::f64::{Power, Ratio, ThermalConductance};

use crate::{spec::ExchangerSpec, units::TemperatureOps};

/// The maximum possible heat duty is exactly zero, so effectiveness has no
/// defined value. This happens when the hot and cold inlet temperatures
/// coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the inlet temperatures are equal, so no heat transfer is possible")]
pub struct ZeroMaxDuty;

/// Heat duties, capacitance rates, and effectiveness for an operating point.
///
/// Nothing here is clamped or sign-checked: boundary temperatures implying a
/// warming hot stream produce a negative duty, and an actual duty above the
/// maximum produces an effectiveness above one. The only guarded case is a
/// maximum duty of exactly zero, where the ratio is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutySummary {
    /// Capacitance rate `m * cp` of the hot stream.
    pub hot_capacitance_rate: ThermalConductance,
    /// Capacitance rate `m * cp` of the cold stream.
    pub cold_capacitance_rate: ThermalConductance,
    /// Heat released by the hot stream.
    pub hot: Power,
    /// Heat absorbed by the cold stream.
    pub cold: Power,
    /// The actual transfer rate, the smaller of the two stream duties.
    pub actual: Power,
    /// The thermodynamic ceiling `C_min * (T_hot_in - T_cold_in)`.
    pub max_possible: Power,
    /// `actual / max_possible`, unclamped.
    pub effectiveness: Result<Ratio, ZeroMaxDuty>,
}

impl DutySummary {
    /// Computes the duty summary for an operating point.
    #[must_use]
    pub fn of(spec: &ExchangerSpec) -> Self {
        let hot_capacitance_rate = spec.hot.capacitance_rate();
        let cold_capacitance_rate = spec.cold.capacitance_rate();

        let hot = spec.hot.heat_released();
        let cold = spec.cold.heat_absorbed();
        let actual = hot.min(cold);

        let c_min = hot_capacitance_rate.min(cold_capacitance_rate);
        let max_possible =
            c_min * spec.hot.inlet_temperature.minus(spec.cold.inlet_temperature);

        let effectiveness = if max_possible.value == 0.0 {
            Err(ZeroMaxDuty)
        } else {
            Ok(actual / max_possible)
        };

        Self {
            hot_capacitance_rate,
            cold_capacitance_rate,
            hot,
            cold,
            actual,
            max_possible,
            effectiveness,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, HeatTransfer, MassRate, SpecificHeatCapacity, ThermodynamicTemperature},
        heat_transfer::watt_per_square_meter_kelvin,
        mass_rate::kilogram_per_second,
        power::watt,
        ratio::ratio,
        specific_heat_capacity::kilojoule_per_kilogram_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::{arrangement::FlowArrangement, stream::FluidStream};

    use super::*;

    fn stream(mass_rate: f64, cp: f64, inlet: f64, outlet: f64) -> FluidStream {
        FluidStream::new(
            MassRate::new::<kilogram_per_second>(mass_rate),
            SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cp),
            ThermodynamicTemperature::new::<degree_celsius>(inlet),
            ThermodynamicTemperature::new::<degree_celsius>(outlet),
        )
        .unwrap()
    }

    fn spec(hot: FluidStream, cold: FluidStream) -> ExchangerSpec {
        ExchangerSpec {
            hot,
            cold,
            overall_heat_transfer: HeatTransfer::new::<watt_per_square_meter_kelvin>(600.0),
            area: Area::new::<square_meter>(25.0),
            arrangement: FlowArrangement::Parallel,
        }
    }

    #[test]
    fn actual_duty_is_the_smaller_stream_duty() {
        let summary = DutySummary::of(&spec(
            stream(1.5, 4.2, 140.0, 90.0),
            stream(2.0, 4.18, 30.0, 70.0),
        ));

        assert_relative_eq!(summary.hot.get::<watt>(), 315_000.0);
        assert_relative_eq!(summary.cold.get::<watt>(), 334_400.0);
        assert_eq!(summary.actual, summary.hot.min(summary.cold));
    }

    #[test]
    fn effectiveness_is_actual_over_maximum() {
        let summary = DutySummary::of(&spec(
            stream(1.5, 4.2, 140.0, 90.0),
            stream(2.0, 4.18, 30.0, 70.0),
        ));

        assert_relative_eq!(summary.max_possible.get::<watt>(), 693_000.0);
        assert_relative_eq!(
            summary.effectiveness.unwrap().get::<ratio>(),
            315.0 / 693.0
        );
    }

    #[test]
    fn negative_duties_propagate_unclamped() {
        // Hot outlet above hot inlet: the "hot" stream warms up.
        let summary = DutySummary::of(&spec(
            stream(1.5, 4.2, 90.0, 140.0),
            stream(2.0, 4.18, 30.0, 70.0),
        ));

        assert!(summary.hot.get::<watt>() < 0.0);
        assert_eq!(summary.actual, summary.hot);
        assert!(summary.effectiveness.unwrap().get::<ratio>() < 0.0);
    }

    #[test]
    fn equal_inlet_temperatures_leave_effectiveness_undefined() {
        let summary = DutySummary::of(&spec(
            stream(1.5, 4.2, 30.0, 25.0),
            stream(2.0, 4.18, 30.0, 70.0),
        ));

        assert_relative_eq!(summary.max_possible.get::<watt>(), 0.0);
        assert_eq!(summary.effectiveness, Err(ZeroMaxDuty));
    }
}
