//! Closed-form intersection emptiness for known shape pairs.

use nalgebra::DVector;
use tracing::debug;

use super::Certified;
use crate::error::UsageError;
use crate::sets::{Ball2, Hyperrectangle, LazySet};
use crate::tol::Tolerance;

/// Empty iff `‖cA - cB‖ > rA + rB`; externally tangent balls intersect.
///
/// Witness: midpoint of the chord `[max(-rA, d - rB), min(rA, d + rB)]`,
/// measured from `cA` towards `cB`.
pub(super) fn ball_ball(a: &Ball2, b: &Ball2, witness: bool, tol: &Tolerance<f64>) -> Certified {
    let (ca, ra) = (a.center(), a.radius());
    let (cb, rb) = (b.center(), b.radius());
    let offset = cb - ca;
    let dist = offset.norm();
    if !tol.leq(dist, ra + rb) {
        return (true, None);
    }
    if !witness {
        return (false, None);
    }
    if dist == 0.0 {
        return (false, Some(ca.clone()));
    }
    let lo = (-ra).max(dist - rb);
    let hi = ra.min(dist + rb);
    let t = 0.5 * (lo + hi);
    debug!(dist, t, "balls overlap");
    (false, Some(ca + offset * (t / dist)))
}

/// Empty iff some axis has `|cA_i - cB_i| > rA_i + rB_i`.
///
/// Witness: per-axis midpoint of `[max(lowA, lowB), min(highA, highB)]`.
pub(super) fn box_box(
    a: &Hyperrectangle,
    b: &Hyperrectangle,
    witness: bool,
    tol: &Tolerance<f64>,
) -> Certified {
    let (ca, ra) = (a.center(), a.radius_vec());
    let (cb, rb) = (b.center(), b.radius_vec());
    for i in 0..ca.len() {
        if !tol.leq((ca[i] - cb[i]).abs(), ra[i] + rb[i]) {
            debug!(axis = i, "boxes separated");
            return (true, None);
        }
    }
    let w = witness.then(|| {
        DVector::from_fn(ca.len(), |i, _| {
            let lo = (ca[i] - ra[i]).max(cb[i] - rb[i]);
            let hi = (ca[i] + ra[i]).min(cb[i] + rb[i]);
            0.5 * (lo + hi)
        })
    });
    (false, w)
}

/// Empty iff the point of the box closest to the ball's center is farther
/// than the radius. That closest point is the witness.
pub(super) fn box_ball(
    h: &Hyperrectangle,
    b: &Ball2,
    witness: bool,
    tol: &Tolerance<f64>,
) -> Certified {
    let (ch, rh) = (h.center(), h.radius_vec());
    let cb = b.center();
    let closest = DVector::from_fn(ch.len(), |i, _| {
        cb[i].clamp(ch[i] - rh[i], ch[i] + rh[i])
    });
    if !tol.leq((&closest - cb).norm(), b.radius()) {
        return (true, None);
    }
    (false, witness.then_some(closest))
}

/// Empty iff `p ∉ S`; the point itself is the witness.
pub(super) fn point_in(
    p: &DVector<f64>,
    s: &dyn LazySet,
    witness: bool,
    tol: &Tolerance<f64>,
) -> Result<Certified, UsageError> {
    if s.contains_with(p, tol)? {
        Ok((false, witness.then(|| p.clone())))
    } else {
        Ok((true, None))
    }
}
