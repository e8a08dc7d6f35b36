//! Deserializing an `ExchangerSpec` from TOML.
//!
//! Quantities deserialize as plain numbers in SI base units (kg/s, J/kg·K,
//! K, W/m²·K, m²), so a spec can be written down as a small config table.

use approx::assert_relative_eq;
use hxrate_core::{ExchangerSpec, FlowArrangement, rate};
use integration_tests::water_water;
use uom::si::{power::watt, temperature_interval};

const WATER_WATER_TOML: &str = r#"
arrangement = "Parallel"
overall_heat_transfer = 600.0
area = 25.0

[hot]
mass_rate = 1.5
specific_heat = 4200.0
inlet_temperature = 413.15
outlet_temperature = 363.15

[cold]
mass_rate = 2.0
specific_heat = 4180.0
inlet_temperature = 303.15
outlet_temperature = 343.15
"#;

#[test]
fn deserialized_spec_rates_like_the_handwritten_one() {
    let from_toml: ExchangerSpec = toml::from_str(WATER_WATER_TOML).unwrap();
    let reference = water_water(FlowArrangement::Parallel);

    assert_eq!(from_toml.arrangement, reference.arrangement);

    let rating = rate(&from_toml);
    let expected = rate(&reference);

    assert_relative_eq!(
        rating.duty.actual.get::<watt>(),
        expected.duty.actual.get::<watt>(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        rating
            .lmtd
            .unwrap()
            .get::<temperature_interval::degree_celsius>(),
        expected
            .lmtd
            .unwrap()
            .get::<temperature_interval::degree_celsius>(),
        max_relative = 1e-12
    );
}

#[test]
fn spec_round_trips_through_toml() {
    let reference = water_water(FlowArrangement::Counter);

    let serialized = toml::to_string(&reference).unwrap();
    let restored: ExchangerSpec = toml::from_str(&serialized).unwrap();

    assert_eq!(restored, reference);
}
