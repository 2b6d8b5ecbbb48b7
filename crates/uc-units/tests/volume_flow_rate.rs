//! Built-in volume flow rate table against the registry API.

use proptest::prelude::*;
use uc_core::{Tolerances, UcError, nearly_equal};
use uc_graph::UnitSystem;
use uc_units::{build_registry, registry, volume_flow_rate};
use uom::si::f64::VolumeRate;
use uom::si::volume_rate::{
    cubic_centimeter_per_second, cubic_foot_per_minute, cubic_foot_per_second,
    cubic_inch_per_second, cubic_meter_per_hour, cubic_meter_per_second, cubic_yard_per_second,
};

fn tol() -> Tolerances {
    Tolerances::default()
}

fn convert(x: f64, from: &str, to: &str) -> f64 {
    let units = registry();
    let from = units.find(from).unwrap();
    let to = units.find(to).unwrap();
    units.convert(x, from, to).unwrap().magnitude
}

#[test]
fn cubic_meter_per_second_to_per_hour() {
    assert_eq!(
        convert(1.0, "cubic meter per second", "cubic meter per hour"),
        3600.0
    );
}

#[test]
fn cubic_meter_to_cubic_foot() {
    let ft3 = convert(1.0, "cubic meter per second", "cubic foot per second");
    assert!((ft3 - 35.314_666_7).abs() < 1e-6);
}

#[test]
fn symbols_and_aliases() {
    let units = registry();
    let base = units.unit_named("cubic meter per second").unwrap();

    assert_eq!(units.find("m3/s"), Ok(base));
    assert_eq!(units.find("m³/s"), Ok(base));
    assert_eq!(units.find("m3s-1"), Ok(base));
    assert_eq!(units.find("cubic metre per second"), Ok(base));
    assert_eq!(units.find("CUBIC METER PER SECOND"), Ok(base));
    assert_eq!(
        units.find("cubic metres per second"),
        Err(UcError::not_found("cubic metres per second"))
    );
}

#[test]
fn registry_shape() {
    let units = registry();
    assert_eq!(units.len(), 24);
    assert_eq!(units.quantities().len(), 1);
    assert!(units.audit().is_empty());

    let q = units.quantity_named(volume_flow_rate::QUANTITY).unwrap();
    assert_eq!(units.units_of(q.id).count(), 24);

    let first = units.all_units().next().unwrap();
    assert_eq!(first.name, "cubic centimeter per day");

    let si = units
        .all_units()
        .filter(|u| u.system == Some(UnitSystem::Si))
        .count();
    assert_eq!(si, 12);
}

#[test]
fn fresh_registries_are_independent_and_equal() {
    let a = build_registry().unwrap();
    let b = build_registry().unwrap();
    let names_a: Vec<&str> = a.all_units().map(|u| u.name.as_str()).collect();
    let names_b: Vec<&str> = b.all_units().map(|u| u.name.as_str()).collect();
    assert_eq!(names_a, names_b);
}

#[test]
fn worst_case_path_is_short() {
    // cm3/d -> yd3/min: cm3/d - m3/d - m3/s - m3/min - yd3/min
    let units = registry();
    let from = units.find("cm3/d").unwrap();
    let to = units.find("cubic yard per minute").unwrap();
    assert_eq!(units.resolve(from, to).unwrap().len(), 4);
}

#[test]
fn matches_exact_length_definitions() {
    // International inch, foot and yard, cubed.
    let cases = [
        ("cubic inch per second", 0.0254_f64),
        ("cubic foot per second", 0.3048),
        ("cubic yard per second", 0.9144),
        ("cubic decimeter per second", 0.1),
        ("cubic centimeter per second", 0.01),
    ];
    for (unit, edge) in cases {
        let expected = 1.0 / (edge * edge * edge);
        let actual = convert(1.0, "m3/s", unit);
        assert!(
            nearly_equal(actual, expected, tol()),
            "{unit}: {actual} != {expected}"
        );
    }
    assert!((convert(1.0, "m3/s", "cubic inch per second") - 61_023.744_1).abs() < 1e-4);
}

#[test]
fn agrees_with_uom() {
    // uom rounds its customary factors to seven significant digits.
    let uom_tol = Tolerances {
        abs: 0.0,
        rel: 1e-6,
    };
    let one = VolumeRate::new::<cubic_meter_per_second>(1.0);
    let cases = [
        ("cubic meter per hour", one.get::<cubic_meter_per_hour>()),
        ("cubic centimeter per second", one.get::<cubic_centimeter_per_second>()),
        ("cubic inch per second", one.get::<cubic_inch_per_second>()),
        ("cubic foot per second", one.get::<cubic_foot_per_second>()),
        ("cubic foot per minute", one.get::<cubic_foot_per_minute>()),
        ("cubic yard per second", one.get::<cubic_yard_per_second>()),
    ];
    for (unit, expected) in cases {
        let actual = convert(1.0, "m3/s", unit);
        assert!(
            nearly_equal(actual, expected, uom_tol),
            "{unit}: {actual} != {expected}"
        );
    }
}

#[test]
fn every_ratio_edge_round_trips() {
    let units = registry();
    for edge in units.graph().edges() {
        for x in [1.0, 0.001, 12_345.678, -7.25] {
            let there = units.convert(x, edge.from, edge.to).unwrap();
            let back = there.convert_to(units, edge.from).unwrap();
            assert!(nearly_equal(back.magnitude, x, tol()));
        }
    }
}

proptest! {
    #[test]
    fn any_pair_converts_and_is_transitive(
        a in 0usize..24,
        b in 0usize..24,
        c in 0usize..24,
        x in -1e6_f64..1e6,
    ) {
        let units = registry();
        let all: Vec<_> = units.all_units().map(|u| u.id).collect();
        let (a, b, c) = (all[a], all[b], all[c]);

        let direct = units.convert(x, a, c).unwrap().magnitude;
        let via_b = units
            .convert(units.convert(x, a, b).unwrap().magnitude, b, c)
            .unwrap()
            .magnitude;
        let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
        prop_assert!(nearly_equal(direct, via_b, tol));
        prop_assert_eq!(units.convert(x, a, a).unwrap().magnitude, x);
    }
}
