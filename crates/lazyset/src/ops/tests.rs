//! Predicate tests: concrete scenarios, pair specializations against the
//! generic rules, witness contracts and operand-order symmetry.

use super::*;
use crate::sets::rand::{draw_ball2, draw_hyperrectangle, ReplayToken, SampleCfg};
use crate::error::LazySetError;
use crate::sets::{Ball2, Hyperrectangle, Singleton};
use crate::tol::Tolerance;
use nalgebra::dvector;
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Hides the concrete type so only the generic code paths apply.
#[derive(Debug)]
struct Opaque<S: LazySet>(S);

impl<S: LazySet> LazySet for Opaque<S> {
    fn dim(&self) -> usize {
        self.0.dim()
    }
    fn support_vector(&self, d: &DVector<f64>) -> Result<DVector<f64>, UsageError> {
        self.0.support_vector(d)
    }
    fn contains_with(
        &self,
        p: &DVector<f64>,
        tol: &Tolerance<f64>,
    ) -> Result<bool, UsageError> {
        self.0.contains_with(p, tol)
    }
    fn an_element(&self) -> DVector<f64> {
        self.0.an_element()
    }
}

/// Membership without any tolerance, whatever the caller passes.
#[derive(Debug)]
struct Strict<S: LazySet>(S);

impl<S: LazySet> LazySet for Strict<S> {
    fn dim(&self) -> usize {
        self.0.dim()
    }
    fn support_vector(&self, d: &DVector<f64>) -> Result<DVector<f64>, UsageError> {
        self.0.support_vector(d)
    }
    fn contains_with(&self, p: &DVector<f64>, _: &Tolerance<f64>) -> Result<bool, UsageError> {
        self.0.contains_with(p, &Tolerance::exact())
    }
    fn an_element(&self) -> DVector<f64> {
        self.0.an_element()
    }
}

fn ball(c: DVector<f64>, r: f64) -> Ball2 {
    Ball2::new(c, r).unwrap()
}
fn hrect(c: DVector<f64>, r: DVector<f64>) -> Hyperrectangle {
    Hyperrectangle::new(c, r).unwrap()
}
fn point(p: DVector<f64>) -> Singleton {
    Singleton::new(p).unwrap()
}

fn in_both(w: &DVector<f64>, a: &dyn LazySet, b: &dyn LazySet) -> bool {
    a.contains(w).unwrap() && b.contains(w).unwrap()
}

#[test]
fn ball_not_subset_of_singleton_with_witness() {
    init_tracing();
    let b = ball(dvector![1.0, 2.0], 2.0);
    let s = point(dvector![2.0, 2.0]);
    let (holds, w) = subset(&b, &s, true, GeomCfg::default()).unwrap();
    assert!(!holds);
    let w = w.expect("witness requested");
    assert!(b.contains(&w).unwrap());
    assert!(!s.contains(&w).unwrap());
    assert_ne!(w, dvector![2.0, 2.0]);
    assert!((w - dvector![-1.0, 2.0]).norm() < 1e-12);
}

#[test]
fn degenerate_ball_is_subset_of_its_center() {
    let b = ball(dvector![1.0, 2.0], 0.0);
    let s = point(dvector![1.0, 2.0]);
    assert_eq!(subset(&b, &s, true, GeomCfg::default()).unwrap(), (true, None));
    // and the reverse direction goes through the vertex rule
    assert!(is_subset(&s, &b, GeomCfg::default()).unwrap());
}

#[test]
fn zero_radius_ball_matches_singleton_at_large_coordinates() {
    let cfg = GeomCfg::default();
    let b0 = ball(dvector![1e9, 0.0], 0.0);
    let s0 = point(dvector![1e9, 0.0]);
    let s1 = point(dvector![1e9 + 1.0, 0.0]);

    let (holds, w) = subset(&b0, &s1, true, cfg).unwrap();
    assert!(!holds);
    let w = w.unwrap();
    assert!(b0.contains(&w).unwrap());
    assert!(!s1.contains(&w).unwrap());
    assert_eq!(subset(&s0, &s1, false, cfg).unwrap().0, holds);

    assert!(is_intersection_empty(&b0, &s1, false, cfg).unwrap().0);
    assert!(is_intersection_empty(&s0, &s1, false, cfg).unwrap().0);
    assert!(!is_intersection_empty(&b0, &s0, false, cfg).unwrap().0);
    assert!(!is_intersection_empty(&s0, &s0, false, cfg).unwrap().0);
    assert!(is_subset(&b0, &s0, cfg).unwrap() && is_subset(&s0, &b0, cfg).unwrap());
}

#[test]
fn ball_in_ball_closed_form() {
    let cfg = GeomCfg::default();
    let small = ball(dvector![1.0, 0.0], 1.0);
    let big = ball(dvector![0.0, 0.0], 2.0);
    // internally tangent counts as contained
    assert!(is_subset(&small, &big, cfg).unwrap());
    let (holds, w) = subset(&big, &small, true, cfg).unwrap();
    assert!(!holds);
    let w = w.unwrap();
    assert!(big.contains(&w).unwrap() && !small.contains(&w).unwrap());
    // concentric: witness along the first axis
    let inner = ball(dvector![0.0, 0.0], 1.0);
    let (_, w) = subset(&big, &inner, true, cfg).unwrap();
    assert_eq!(w.unwrap(), dvector![2.0, 0.0]);
}

#[test]
fn witness_omitted_unless_requested() {
    let cfg = GeomCfg::default();
    let a = ball(dvector![0.0, 0.0], 3.0);
    let b = ball(dvector![0.0, 0.0], 1.0);
    assert_eq!(subset(&a, &b, false, cfg).unwrap(), (false, None));
    let c = ball(dvector![1.0, 0.0], 1.0);
    assert_eq!(is_intersection_empty(&a, &c, false, cfg).unwrap(), (false, None));
}

#[test]
fn box_in_ball_by_vertices() {
    let cfg = GeomCfg::default();
    let h = hrect(dvector![0.0, 0.0], dvector![1.0, 1.0]);
    assert!(is_subset(&h, &ball(dvector![0.0, 0.0], 1.5), cfg).unwrap());
    let b = ball(dvector![0.0, 0.0], 1.4);
    let (holds, w) = subset(&h, &b, true, cfg).unwrap();
    assert!(!holds);
    let w = w.unwrap();
    assert_eq!(w, dvector![1.0, 1.0]);
    assert!(h.contains(&w).unwrap() && !b.contains(&w).unwrap());
}

#[test]
fn box_in_ball_stays_linear_in_high_dimension() {
    init_tracing();
    let cfg = GeomCfg::default();
    let n = 40;
    let h = hrect(DVector::zeros(n), DVector::from_element(n, 1.0));
    assert!(is_subset(&h, &ball(DVector::zeros(n), (n as f64).sqrt()), cfg).unwrap());
    let b = ball(DVector::zeros(n), 6.0);
    let (holds, w) = subset(&h, &b, true, cfg).unwrap();
    assert!(!holds);
    let w = w.unwrap();
    assert_eq!(w, h.high());
    assert!(h.contains(&w).unwrap() && !b.contains(&w).unwrap());
    // the vertex rule stops at the first outside corner
    assert!(!inclusion::generic(&h, &b, false, &cfg.tol).unwrap().0);

    let wide = usize::BITS as usize;
    let h = hrect(DVector::zeros(wide), DVector::from_element(wide, 1.0));
    assert!(!is_subset(&h, &ball(DVector::zeros(wide), 1.0), cfg).unwrap());
    let (holds, w) = subset(&h, &point(DVector::zeros(wide)), true, cfg).unwrap();
    assert!(!holds);
    assert_eq!(w.unwrap(), h.high());
    let flat = hrect(DVector::from_element(wide, 2.0), DVector::zeros(wide));
    assert!(is_subset(&flat, &point(DVector::from_element(wide, 2.0)), cfg).unwrap());
}

#[test]
fn translate_refuses_non_finite_centers() {
    let h = hrect(dvector![0.0, 0.0], dvector![1.0, 1.0]);
    let run = || -> Result<bool, LazySetError> {
        let moved = h.translate(&dvector![f64::NAN, 0.0])?;
        Ok(is_intersecting(&moved, &ball(dvector![0.0, 0.0], 1.0), GeomCfg::default())?)
    };
    assert!(matches!(
        run(),
        Err(LazySetError::Usage(UsageError::NonFinite { .. }))
    ));
}

#[test]
fn ball_in_box_per_axis() {
    let cfg = GeomCfg::default();
    let h = hrect(dvector![0.0, 0.0], dvector![1.0, 1.0]);
    assert!(is_subset(&ball(dvector![0.0, 0.0], 1.0), &h, cfg).unwrap());
    let b = ball(dvector![0.0, -0.5], 1.0);
    let (holds, w) = subset(&b, &h, true, cfg).unwrap();
    assert!(!holds);
    assert_eq!(w.unwrap(), dvector![0.0, -1.5]);
}

#[test]
fn box_in_box_per_axis() {
    let cfg = GeomCfg::default();
    let outer = hrect(dvector![0.0, 0.0, 0.0], dvector![2.0, 2.0, 2.0]);
    let inner = hrect(dvector![1.0, 0.0, -1.0], dvector![1.0, 2.0, 1.0]);
    assert!(is_subset(&inner, &outer, cfg).unwrap());
    let shifted = inner.translate(&dvector![0.0, 0.0, -0.5]).unwrap();
    let (holds, w) = subset(&shifted, &outer, true, cfg).unwrap();
    assert!(!holds);
    let w = w.unwrap();
    assert!(shifted.contains(&w).unwrap() && !outer.contains(&w).unwrap());
    assert!(shifted.vertices().unwrap().contains(&w));
}

#[test]
fn separated_balls_are_disjoint() {
    let a = ball(dvector![0.0, 0.0], 2.0);
    let b = ball(dvector![4.0, 4.0], 2.0);
    assert_eq!(is_intersection_empty(&a, &b, true, GeomCfg::default()).unwrap(), (true, None));
}

#[test]
fn overlapping_balls_share_witness() {
    init_tracing();
    let a = ball(dvector![0.0, 0.0], 2.0);
    let b = ball(dvector![2.0, 2.0], 2.0);
    let (empty, w) = is_intersection_empty(&a, &b, true, GeomCfg::default()).unwrap();
    assert!(!empty);
    let w = w.unwrap();
    assert!(in_both(&w, &a, &b));
    assert!((w - dvector![1.0, 1.0]).norm() < 1e-12);
}

#[test]
fn tangent_and_nested_balls() {
    let cfg = GeomCfg::default();
    let a = ball(dvector![0.0, 0.0], 1.0);
    let b = ball(dvector![2.0, 0.0], 1.0);
    let (empty, w) = is_intersection_empty(&a, &b, true, cfg).unwrap();
    assert!(!empty);
    assert!((w.unwrap() - dvector![1.0, 0.0]).norm() < 1e-12);
    let tiny = ball(dvector![0.2, 0.0], 0.1);
    let (empty, w) = is_intersection_empty(&a, &tiny, true, cfg).unwrap();
    assert!(!empty);
    assert!(in_both(&w.unwrap(), &a, &tiny));
    let (empty, w) = is_intersection_empty(&a, &a, true, cfg).unwrap();
    assert!(!empty);
    assert_eq!(w.unwrap(), dvector![0.0, 0.0]);
}

#[test]
fn boxes_overlap_touch_and_separate() {
    let cfg = GeomCfg::default();
    let a = hrect(dvector![0.0, 0.0], dvector![1.0, 1.0]);
    let b = hrect(dvector![1.5, 0.5], dvector![1.0, 1.0]);
    let (empty, w) = is_intersection_empty(&a, &b, true, cfg).unwrap();
    assert!(!empty);
    let w = w.unwrap();
    assert_eq!(w, dvector![0.75, 0.25]);
    assert!(in_both(&w, &a, &b));
    let touching = hrect(dvector![2.0, 0.0], dvector![1.0, 1.0]);
    assert!(is_intersecting(&a, &touching, cfg).unwrap());
    let apart = hrect(dvector![0.0, 2.1], dvector![1.0, 1.0]);
    assert!(!is_intersecting(&a, &apart, cfg).unwrap());
}

#[test]
fn box_and_ball_in_both_orders() {
    let cfg = GeomCfg::default();
    let h = hrect(dvector![0.0, 0.0], dvector![1.0, 1.0]);
    let near = ball(dvector![2.0, 2.0], 1.5);
    let far = ball(dvector![2.0, 2.0], 1.4);
    let (empty, w) = is_intersection_empty(&h, &near, true, cfg).unwrap();
    assert!(!empty);
    assert_eq!(w.clone().unwrap(), dvector![1.0, 1.0]);
    assert_eq!(is_intersection_empty(&near, &h, true, cfg).unwrap(), (false, w));
    assert!(is_intersection_empty(&h, &far, false, cfg).unwrap().0);
    assert!(is_intersection_empty(&far, &h, false, cfg).unwrap().0);
}

#[test]
fn singleton_pairs() {
    let cfg = GeomCfg::default();
    let s = point(dvector![0.5, 0.5]);
    let h = hrect(dvector![0.0, 0.0], dvector![1.0, 1.0]);
    assert_eq!(
        is_intersection_empty(&s, &h, true, cfg).unwrap(),
        (false, Some(dvector![0.5, 0.5]))
    );
    assert_eq!(
        is_intersection_empty(&h, &s, true, cfg).unwrap(),
        (false, Some(dvector![0.5, 0.5]))
    );
    let t = point(dvector![3.0, 0.0]);
    assert!(is_intersection_empty(&t, &h, true, cfg).unwrap().0);
    assert!(is_intersection_empty(&s, &t, true, cfg).unwrap().0);
    assert!(is_subset(&s, &h, cfg).unwrap());
    assert!(!is_subset(&h, &s, cfg).unwrap());
}

#[test]
fn dimension_mismatch_is_a_usage_error() {
    let cfg = GeomCfg::default();
    let a = ball(dvector![0.0, 0.0], 1.0);
    let b = hrect(dvector![0.0, 0.0, 0.0], dvector![1.0, 1.0, 1.0]);
    assert!(matches!(
        subset(&a, &b, true, cfg),
        Err(UsageError::DimensionMismatch {
            expected: 2,
            found: 3,
            ..
        })
    ));
    assert!(matches!(
        is_intersection_empty(&b, &a, true, cfg),
        Err(UsageError::DimensionMismatch { .. })
    ));
}

#[test]
fn generic_subset_uses_superset_constraints() {
    let cfg = GeomCfg::default();
    let h = hrect(dvector![0.0, 0.0], dvector![1.0, 1.0]);
    let inside = Opaque(ball(dvector![0.0, 0.0], 1.0));
    assert!(is_subset(&inside, &h, cfg).unwrap());
    let outside = Opaque(ball(dvector![0.5, 0.0], 1.0));
    let (holds, w) = subset(&outside, &h, true, cfg).unwrap();
    assert!(!holds);
    let w = w.unwrap();
    assert!((&w - dvector![1.5, 0.0]).norm() < 1e-12);
    assert!(outside.contains(&w).unwrap() && !h.contains(&w).unwrap());
    // neither vertices nor constraints available
    assert!(matches!(
        subset(&outside, &ball(dvector![0.0, 0.0], 5.0), false, cfg),
        Err(UsageError::Unsupported { .. })
    ));
}

#[test]
fn fallback_on_opaque_shapes() {
    init_tracing();
    let cfg = GeomCfg::default();
    let h = Opaque(hrect(dvector![0.0, 0.0], dvector![1.0, 1.0]));
    let overlapping = Opaque(ball(dvector![1.5, 0.5], 1.0));
    let (empty, w) = is_intersection_empty(&h, &overlapping, true, cfg).unwrap();
    assert!(!empty);
    assert!(in_both(&w.unwrap(), &h, &overlapping));
    let apart = Opaque(ball(dvector![3.0, 3.0], 1.0));
    assert!(is_intersection_empty(&h, &apart, true, cfg).unwrap().0);
    let a = Opaque(ball(dvector![0.0, 0.0], 3.0));
    let b = Opaque(ball(dvector![3.5, 0.0], 1.0));
    let (empty, w) = is_intersection_empty(&a, &b, true, cfg).unwrap();
    assert!(!empty);
    assert!(in_both(&w.unwrap(), &a, &b));
}

#[test]
fn fallback_budget_exhaustion_only_returns_checked_witnesses() {
    init_tracing();
    let cfg = GeomCfg::default().with_fallback_max_iters(3);
    // a gap far below ztol, but exact membership on both sides
    let a = Strict(point(dvector![0.0, 0.0]));
    let b = Strict(point(dvector![1e-9, 0.0]));
    assert_eq!(is_intersection_empty(&a, &b, true, cfg).unwrap(), (false, None));

    // with no iterations at all the tracked points are still tried
    let cfg = GeomCfg::default().with_fallback_max_iters(0);
    let a = Opaque(ball(dvector![0.0, 0.0], 1.0));
    let b = Opaque(ball(dvector![0.5, 0.0], 0.1));
    let (empty, w) = is_intersection_empty(&a, &b, true, cfg).unwrap();
    assert!(!empty);
    let w = w.unwrap();
    assert_eq!(w, dvector![0.5, 0.0]);
    assert!(in_both(&w, &a, &b));
}

#[test]
fn fallback_agrees_with_ball_closed_form() {
    let cfg = GeomCfg::default();
    let sample = SampleCfg {
        center_half_width: 3.0,
        radius_max: 3.0,
    };
    let mut checked = 0;
    for index in 0..200 {
        let dim = 1 + (index as usize % 4);
        let a = draw_ball2(dim, sample, ReplayToken { seed: 5, index });
        let b = draw_ball2(dim, sample, ReplayToken { seed: 6, index });
        let dist = (a.center() - b.center()).norm();
        if (dist - (a.radius() + b.radius())).abs() < 0.05 {
            continue;
        }
        let closed = is_intersection_empty(&a, &b, false, cfg).unwrap().0;
        let (generic, w) =
            is_intersection_empty(&Opaque(a.clone()), &Opaque(b.clone()), true, cfg).unwrap();
        assert_eq!(closed, generic, "index {index}: {a:?} vs {b:?}");
        if let Some(w) = w {
            assert!(in_both(&w, &a, &b));
        }
        checked += 1;
    }
    assert!(checked > 100);
}

fn draw_shape(kind: u8, dim: usize, tok: ReplayToken) -> Box<dyn LazySet> {
    let sample = SampleCfg {
        center_half_width: 4.0,
        radius_max: 3.0,
    };
    match kind % 3 {
        0 => Box::new(draw_hyperrectangle(dim, sample, tok)),
        1 => Box::new(draw_ball2(dim, sample, tok)),
        _ => Box::new(Singleton::new(draw_hyperrectangle(dim, sample, tok).center().clone()).unwrap()),
    }
}

proptest! {
    #[test]
    fn intersection_is_symmetric_and_witnessed(
        ka in 0u8..3,
        kb in 0u8..3,
        dim in 1usize..5,
        seed in any::<u64>(),
    ) {
        let cfg = GeomCfg::default();
        let a = draw_shape(ka, dim, ReplayToken { seed, index: 0 });
        let b = draw_shape(kb, dim, ReplayToken { seed, index: 1 });
        let (ab, wab) = is_intersection_empty(a.as_ref(), b.as_ref(), true, cfg).unwrap();
        let (ba, wba) = is_intersection_empty(b.as_ref(), a.as_ref(), true, cfg).unwrap();
        prop_assert_eq!(ab, ba);
        for w in [wab, wba].into_iter().flatten() {
            prop_assert!(in_both(&w, a.as_ref(), b.as_ref()));
        }
    }

    #[test]
    fn subset_witness_contract(
        ka in 0u8..3,
        kb in 0u8..3,
        dim in 1usize..5,
        seed in any::<u64>(),
    ) {
        let cfg = GeomCfg::default();
        let a = draw_shape(ka, dim, ReplayToken { seed, index: 0 });
        let b = draw_shape(kb, dim, ReplayToken { seed, index: 1 });
        let (holds, w) = subset(a.as_ref(), b.as_ref(), true, cfg).unwrap();
        if holds {
            prop_assert!(w.is_none());
        } else {
            let w = w.unwrap();
            prop_assert!(a.contains(&w).unwrap());
            prop_assert!(!b.contains(&w).unwrap());
        }
    }

    #[test]
    fn box_in_box_matches_vertex_rule(dim in 1usize..6, seed in any::<u64>()) {
        let cfg = GeomCfg::default();
        let sample = SampleCfg { center_half_width: 1.0, radius_max: 3.0 };
        let a = draw_hyperrectangle(dim, sample, ReplayToken { seed, index: 0 });
        let b = draw_hyperrectangle(dim, sample, ReplayToken { seed, index: 1 });
        let closed = subset(&a, &b, false, cfg).unwrap().0;
        let by_vertices = inclusion::generic(&a, &b, false, &cfg.tol).unwrap().0;
        prop_assert_eq!(closed, by_vertices);
    }

    #[test]
    fn ball_in_box_matches_constraint_rule(dim in 1usize..6, seed in any::<u64>()) {
        let cfg = GeomCfg::default();
        let sample = SampleCfg { center_half_width: 1.0, radius_max: 3.0 };
        let a = draw_ball2(dim, sample, ReplayToken { seed, index: 0 });
        let b = draw_hyperrectangle(dim, sample, ReplayToken { seed, index: 1 });
        let closed = subset(&a, &b, false, cfg).unwrap().0;
        let generic = subset(&Opaque(a.clone()), &b, false, cfg).unwrap().0;
        prop_assert_eq!(closed, generic);
    }
}
