//! Generic intersection emptiness from support vectors only.
//!
//! `A ∩ B ≠ ∅` iff `0 ∈ A - B`. We run Frank–Wolfe on `min ½‖x‖²` over the
//! Minkowski difference, whose support vector in direction `d` is
//! `σ_A(d) - σ_B(-d)`. The iterate is kept as a pair `(pa, pb)` with
//! `pa ∈ A`, `pb ∈ B` and `x = pa - pb`, so a witness is available when the
//! sets meet.
//!
//! Certificates
//! - Empty: the linear minimizer `s` satisfies `x·s > 0` beyond tolerance, so
//!   the hyperplane `x·c = 0` separates `0` from `A - B`.
//! - Non-empty: the midpoint of `pa` and `pb` passes both membership tests.
//!
//! Without either certificate after `fallback_max_iters` steps, the answer
//! falls back to whether `‖x‖` is approximately zero (logged as a warning).
//! A witness is then only returned if one of the tracked points passes both
//! membership tests.

use tracing::{debug, warn};

use super::Certified;
use crate::cfg::GeomCfg;
use crate::error::UsageError;
use crate::sets::LazySet;

pub(super) fn min_norm_difference(
    a: &dyn LazySet,
    b: &dyn LazySet,
    witness: bool,
    cfg: GeomCfg,
) -> Result<Certified, UsageError> {
    let tol = &cfg.tol;
    let mut pa = a.an_element();
    let mut pb = b.an_element();
    for iter in 0..cfg.fallback_max_iters {
        let mid = (&pa + &pb) * 0.5;
        if a.contains_with(&mid, tol)? && b.contains_with(&mid, tol)? {
            debug!(iter, "common point found");
            return Ok((false, witness.then_some(mid)));
        }
        let x = &pa - &pb;
        let sa = a.support_vector(&(-&x))?;
        let sb = b.support_vector(&x)?;
        let s = &sa - &sb;
        if !tol.leq(x.dot(&s), 0.0) {
            debug!(iter, dist = x.norm(), "separating direction found");
            return Ok((true, None));
        }
        let step = &x - &s;
        let denom = step.norm_squared();
        if denom == 0.0 {
            break;
        }
        let gamma = (x.dot(&step) / denom).clamp(0.0, 1.0);
        if gamma == 0.0 {
            break;
        }
        let da = (sa - &pa) * gamma;
        let db = (sb - &pb) * gamma;
        pa += da;
        pb += db;
    }

    let dist = (&pa - &pb).norm();
    let mid = (&pa + &pb) * 0.5;
    for p in [mid, pa, pb] {
        if a.contains_with(&p, tol)? && b.contains_with(&p, tol)? {
            return Ok((false, witness.then_some(p)));
        }
    }
    let empty = !tol.is_approx_zero(dist);
    warn!(
        max_iters = cfg.fallback_max_iters,
        dist, empty, "intersection fallback ended without a certificate"
    );
    Ok((empty, None))
}
