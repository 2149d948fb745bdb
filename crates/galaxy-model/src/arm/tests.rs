use super::law::{radius_at, trim_at, width_at};
use super::smooth::smooth_linear;
use super::*;

use proptest::prelude::*;

fn span_len(span: (f64, f64)) -> usize {
    (span.1 - span.0) as usize + 1
}

#[test]
fn spine_counts_match_angular_domains() {
    for kind in ArmKind::ALL {
        let arm = Arm::build(kind);
        let params = kind.params();
        assert_eq!(arm.spans.len(), params.spans.len(), "{kind}");
        for (span, built) in params.spans.iter().zip(&arm.spans) {
            let n = span_len(*span);
            assert_eq!(built.spine.len(), n, "{kind}");
            assert_eq!(built.spine.b.len(), n);
            assert_eq!(built.spine.r.len(), n);
            assert_eq!(built.spine.width.len(), n);
        }
    }
}

#[test]
fn border_and_ring_counts() {
    for kind in ArmKind::ALL {
        let arm = Arm::build(kind);
        for span in &arm.spans {
            let n = span.spine.len();
            let (inner, outer) = ribbon::border_points(&span.spine);
            assert_eq!(inner.len(), n - 1, "{kind}");
            assert_eq!(outer.len(), n - 1, "{kind}");
            assert_eq!(span.ring.points.len(), 2 * (n - 1), "{kind}");
        }
    }
}

#[test]
fn radius_law_is_positive_over_all_domains() {
    for kind in ArmKind::ALL {
        let params = kind.params();
        for &(begin, end) in params.spans {
            let n = span_len((begin, end));
            for i in 0..n {
                let b = begin + i as f64;
                assert!(radius_at(params, b) > 0.0, "{kind} at {b}");
            }
        }
    }
}

#[test]
fn radius_law_is_continuous_at_the_kink() {
    // The exponential passes through R_kink at B_kink no matter which pitch
    // angle is active, so the kink itself introduces no jump.
    for kind in ArmKind::ALL {
        let params = kind.params();
        let kink = params.regimes[0].b_kink;
        let before = radius_at(params, kink - 1e-9);
        let after = radius_at(params, kink + 1e-9);
        assert!((before - after).abs() < 1e-6, "{kind}");
    }
}

#[test]
fn smoothing_damps_the_tangency_jump() {
    // Sct-Cen has a genuine radius discontinuity where psi changes at the
    // tangency angle; after smoothing no single step may exceed it.
    let params = ArmKind::SctCen.params();
    let (begin, end) = params.spans[0];
    let n = span_len((begin, end));
    let raw: Vec<f64> = (0..n).map(|i| radius_at(params, begin + i as f64)).collect();
    let smoothed = smooth_linear(&raw, params.window);

    let max_raw_step = raw.windows(2).map(|w| (w[1] - w[0]).abs()).fold(0.0, f64::max);
    let max_smooth_step = smoothed.windows(2).map(|w| (w[1] - w[0]).abs()).fold(0.0, f64::max);
    assert!(max_raw_step > 0.3, "expected a visible pre-smoothing jump");
    assert!(max_smooth_step < max_raw_step);
}

#[test]
fn ribbon_contains_its_own_spine_midpoint() {
    for kind in ArmKind::ALL {
        let arm = Arm::build(kind);
        for span in &arm.spans {
            let mid = span.spine.points[span.spine.len() / 2];
            assert!(span.ring.contains(mid), "{kind}");
        }
    }
}

#[test]
fn split_arm_has_two_disjoint_spans() {
    let arm = Arm::build(ArmKind::ThreeKpc);
    assert_eq!(arm.spans.len(), 2);
    // A point on the near span is not in the far span and vice versa.
    let near_mid = arm.spans[0].spine.points[arm.spans[0].spine.len() / 2];
    let far_mid = arm.spans[1].spine.points[arm.spans[1].spine.len() / 2];
    assert!(arm.spans[0].ring.contains(near_mid));
    assert!(!arm.spans[1].ring.contains(near_mid));
    assert!(arm.spans[1].ring.contains(far_mid));
    assert!(!arm.spans[0].ring.contains(far_mid));
    // Union containment still sees both.
    assert!(arm.contains(near_mid));
    assert!(arm.contains(far_mid));
}

#[test]
fn composite_arm_trim_is_triangular() {
    let params = ArmKind::NormaOuter.params();
    // At the tangency center the first term peaks at its amplitude.
    assert!((trim_at(params, 153.5) - 0.7).abs() < 1e-12);
    // Far away both terms vanish (the second is pre-kink only).
    assert_eq!(trim_at(params, 400.0), 0.0);
    // At the domain start both terms are active (0.8 plus the tail of the
    // tangency term: 0.7 - 123.5 / 200).
    let expected = 0.8 + (0.7 - 123.5 / 200.0);
    assert!((trim_at(params, 30.0) - expected).abs() < 1e-12);
    // Other arms carry no trims.
    assert_eq!(trim_at(ArmKind::Perseus.params(), 300.0), 0.0);
}

#[test]
fn width_table_switch_for_composite_arm() {
    let params = ArmKind::NormaOuter.params();
    // Below 350 deg the Norma coefficients apply, above it the Outer ones.
    let r = 10.0;
    let w_norma = 0.14 + 0.042 * (r - 4.46) * 1.65 + 0.2;
    let w_outer = 0.65 + 0.042 * (r - 12.24) * 1.65 + 0.2;
    assert!((width_at(params, 349.0, r) - w_norma).abs() < 1e-12);
    assert!((width_at(params, 350.0, r) - w_outer).abs() < 1e-12);
}

proptest! {
    #[test]
    fn radius_law_positive_for_any_angle(b in -720.0..900.0f64) {
        for kind in ArmKind::ALL {
            prop_assert!(radius_at(kind.params(), b) > 0.0);
        }
    }

    #[test]
    fn smoothing_stays_within_raw_bounds(
        values in proptest::collection::vec(-10.0..10.0f64, 9..40),
    ) {
        // Interior values are plain window averages, so the global min and
        // max of the input bound them.
        let smoothed = smooth_linear(&values, 5);
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for x in &smoothed[2..smoothed.len() - 2] {
            prop_assert!(*x >= lo - 1e-9 && *x <= hi + 1e-9);
        }
    }
}
