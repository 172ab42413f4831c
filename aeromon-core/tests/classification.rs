//! Classification invariants across every built-in scale
//!
//! Covers the monotonicity, boundary, and totality guarantees the
//! classification engine makes to its display collaborators.

use aeromon_core::{classify, scale_for, ParameterKind};
use proptest::prelude::*;

const SCALED_KINDS: [ParameterKind; 4] = [
    ParameterKind::Pm25,
    ParameterKind::Pm10,
    ParameterKind::Ozone,
    ParameterKind::Uv,
];

const ALL_KINDS: [ParameterKind; 7] = [
    ParameterKind::Pm25,
    ParameterKind::Pm10,
    ParameterKind::Ozone,
    ParameterKind::Uv,
    ParameterKind::Temperature,
    ParameterKind::Humidity,
    ParameterKind::Custom(9),
];

#[test]
fn spec_scenarios() {
    assert_eq!(classify(5.0, ParameterKind::Pm25).label, "Excellent");
    assert_eq!(classify(6.0, ParameterKind::Pm25).label, "Excellent");
    assert_eq!(classify(6.01, ParameterKind::Pm25).label, "Good");
    assert_eq!(classify(200.0, ParameterKind::Pm25).label, "Hazardous");
    assert_eq!(classify(4.0, ParameterKind::Uv).label, "Moderate");
    assert_eq!(classify(-3.0, ParameterKind::Pm10).label, "Excellent");
}

#[test]
fn scale_shapes() {
    for kind in SCALED_KINDS {
        let scale = scale_for(kind);
        assert_eq!(
            scale.categories().len(),
            scale.breakpoints().len() + 1,
            "{}: ladder must have one step per interval",
            kind.name()
        );
        assert!(
            scale.breakpoints().windows(2).all(|w| w[0] < w[1]),
            "{}: breakpoints must be strictly increasing",
            kind.name()
        );
        assert!(
            scale
                .categories()
                .windows(2)
                .all(|w| w[0].severity <= w[1].severity),
            "{}: severities must be non-decreasing",
            kind.name()
        );
    }
}

#[test]
fn boundary_semantics() {
    const EPSILON: f32 = 1e-3;

    for kind in SCALED_KINDS {
        let scale = scale_for(kind);
        for (idx, bound) in scale.breakpoints().iter().enumerate() {
            let at = classify(*bound, kind);
            let below = classify(bound - EPSILON, kind);
            let above = classify(bound + EPSILON, kind);

            // Closed on the lower-severity side
            assert_eq!(at, below, "{}: bound {} must include its interval", kind.name(), bound);

            // Crossing the bound may never reduce severity, and is strict
            // wherever the ladder itself steps up (everywhere except the
            // duplicated UV top band).
            assert!(above.severity >= at.severity);
            let next = scale.categories()[idx + 1];
            if next.severity > scale.categories()[idx].severity {
                assert!(
                    above.severity > at.severity,
                    "{}: expected a strict step above {}",
                    kind.name(),
                    bound
                );
            }
        }
    }
}

#[test]
fn extremes_are_defined() {
    for kind in ALL_KINDS {
        let scale = scale_for(kind);
        let lowest = scale.categories()[0];
        let highest = scale.categories()[scale.categories().len() - 1];

        assert_eq!(classify(-1e9, kind).severity, lowest.severity);
        assert_eq!(classify(0.0, kind).severity, lowest.severity);
        assert_eq!(classify(1e9, kind).severity, highest.severity);
    }
}

#[test]
fn default_category_never_aliases_pollutant_bands() {
    for value in [-5.0, 0.0, 11.0, 55.4, 500.0] {
        let result = classify(value, ParameterKind::Custom(42));
        assert_eq!(result.label, "Normal");
        assert_eq!(result.severity, 0);
    }
}

proptest! {
    #[test]
    fn severity_monotonic_in_value(a in -1000.0f32..1000.0, b in -1000.0f32..1000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for kind in ALL_KINDS {
            prop_assert!(
                classify(lo, kind).severity <= classify(hi, kind).severity,
                "{}: classify({}) ranked above classify({})",
                kind.name(), lo, hi
            );
        }
    }

    #[test]
    fn classification_is_total_and_pure(value in prop::num::f32::ANY) {
        for kind in ALL_KINDS {
            let first = classify(value, kind);
            let second = classify(value, kind);
            prop_assert_eq!(first, second);

            let ladder = scale_for(kind).categories();
            prop_assert!(ladder.iter().any(|c| c.label == first.label));
        }
    }
}
