//! End-to-end rating scenarios for the water-to-water reference case and its
//! degenerate variants.

use approx::assert_relative_eq;
use hxrate_core::{
    FlowArrangement, LmtdError, PROFILE_RESOLUTION, ZeroMaxDuty, rate,
};
use integration_tests::{stream, water_water};
use uom::si::{power::watt, ratio::ratio, temperature_interval, thermal_conductance::watt_per_kelvin};

#[test]
fn parallel_reference_case() {
    let rating = rate(&water_water(FlowArrangement::Parallel));

    assert_relative_eq!(rating.duty.hot_capacitance_rate.get::<watt_per_kelvin>(), 6300.0);
    assert_relative_eq!(rating.duty.cold_capacitance_rate.get::<watt_per_kelvin>(), 8360.0);

    assert_relative_eq!(rating.duty.hot.get::<watt>(), 315_000.0);
    assert_relative_eq!(rating.duty.cold.get::<watt>(), 334_400.0);
    assert_eq!(rating.duty.actual, rating.duty.hot.min(rating.duty.cold));
    assert_relative_eq!(rating.duty.max_possible.get::<watt>(), 693_000.0);
    assert_relative_eq!(
        rating.duty.effectiveness.unwrap().get::<ratio>(),
        315_000.0 / 693_000.0
    );

    let expected_lmtd = 90.0 / (110.0_f64 / 20.0).ln();
    assert_relative_eq!(
        rating
            .lmtd
            .unwrap()
            .get::<temperature_interval::degree_celsius>(),
        expected_lmtd
    );
    assert_relative_eq!(
        rating.lmtd_heat_duty.unwrap().get::<watt>(),
        600.0 * 25.0 * expected_lmtd
    );
}

#[test]
fn counter_reference_case_differs_from_parallel() {
    let parallel = rate(&water_water(FlowArrangement::Parallel));
    let counter = rate(&water_water(FlowArrangement::Counter));

    let expected = 10.0 / (70.0_f64 / 60.0).ln();
    assert_relative_eq!(
        counter
            .lmtd
            .unwrap()
            .get::<temperature_interval::degree_celsius>(),
        expected
    );
    assert_ne!(parallel.lmtd, counter.lmtd);

    // Duty and effectiveness only depend on the boundary temperatures, not
    // the arrangement.
    assert_eq!(parallel.duty, counter.duty);
}

#[test]
fn reversing_one_stream_and_switching_arrangement_preserves_the_lmtd() {
    // A counter-flow exchanger is a parallel-flow exchanger with the cold
    // stream walked in from the other end: swapping the cold boundary
    // temperatures while switching arrangement pairs the same temperatures
    // at the same ends.
    let parallel = water_water(FlowArrangement::Parallel);
    let mut counter = water_water(FlowArrangement::Counter);
    counter.cold = stream(2.0, 4.18, 70.0, 30.0);

    assert_eq!(rate(&parallel).lmtd, rate(&counter).lmtd);
}

#[test]
fn relabeling_the_fluids_negates_the_lmtd() {
    for arrangement in [FlowArrangement::Parallel, FlowArrangement::Counter] {
        let spec = water_water(arrangement);
        let mut swapped = spec;
        swapped.hot = spec.cold;
        swapped.cold = spec.hot;

        let original = rate(&spec).lmtd.unwrap();
        let relabeled = rate(&swapped).lmtd.unwrap();

        assert_relative_eq!(
            original.get::<temperature_interval::degree_celsius>(),
            -relabeled.get::<temperature_interval::degree_celsius>(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn profiles_have_the_documented_shape() {
    for arrangement in [FlowArrangement::Parallel, FlowArrangement::Counter] {
        let rating = rate(&water_water(arrangement));

        let hot = rating.hot_profile.points();
        let cold = rating.cold_profile.points();
        assert_eq!(hot.len(), PROFILE_RESOLUTION);
        assert_eq!(cold.len(), PROFILE_RESOLUTION);

        assert_relative_eq!(hot[0].temperature.value, 140.0 + 273.15);
        assert_relative_eq!(hot[PROFILE_RESOLUTION - 1].temperature.value, 90.0 + 273.15);
        assert_relative_eq!(cold[0].temperature.value, 30.0 + 273.15);
        assert_relative_eq!(
            cold[PROFILE_RESOLUTION - 1].temperature.value,
            70.0 + 273.15
        );
    }
}

#[test]
fn equal_terminal_differences_short_circuit_the_logarithm() {
    // Counter flow, balanced streams: 100 -> 60 against 20 -> 60 puts a
    // 40-degree gap at both ends.
    let mut spec = water_water(FlowArrangement::Counter);
    spec.hot = stream(1.5, 4.2, 100.0, 60.0);
    spec.cold = stream(2.0, 4.18, 20.0, 60.0);

    let rating = rate(&spec);
    assert_relative_eq!(
        rating
            .lmtd
            .unwrap()
            .get::<temperature_interval::degree_celsius>(),
        40.0
    );
}

#[test]
fn undefined_states_are_reported_not_nan() {
    // Cold outlet overshoots the hot outlet in parallel flow: opposite signs.
    let mut spec = water_water(FlowArrangement::Parallel);
    spec.cold = stream(2.0, 4.18, 30.0, 95.0);
    let rating = rate(&spec);
    assert_eq!(rating.lmtd, Err(LmtdError::OppositeSigns));
    assert_eq!(rating.lmtd_heat_duty, Err(LmtdError::OppositeSigns));

    // Equal inlet temperatures: zero maximum duty.
    let mut spec = water_water(FlowArrangement::Counter);
    spec.cold = stream(2.0, 4.18, 140.0, 150.0);
    let rating = rate(&spec);
    assert_eq!(rating.duty.effectiveness, Err(ZeroMaxDuty));
}
