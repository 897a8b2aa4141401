//! Subset checks (`A ⊆ B`) with counterexample witnesses.

use nalgebra::DVector;
use tracing::debug;

use super::Certified;
use crate::error::UsageError;
use crate::sets::{first_axis, sign_nonneg, Ball2, Hyperrectangle, LazySet};
use crate::tol::Tolerance;

/// `‖cA - cB‖ + rA <= rB`.
///
/// Witness: `cA + rA·u` with `u` the unit vector from `cB` to `cA`.
pub(super) fn ball_in_ball(
    ca: &DVector<f64>,
    ra: f64,
    cb: &DVector<f64>,
    rb: f64,
    witness: bool,
    tol: &Tolerance<f64>,
) -> Certified {
    let offset = ca - cb;
    let dist = offset.norm();
    if tol.leq(dist + ra, rb) {
        return (true, None);
    }
    if !witness {
        return (false, None);
    }
    let u = if dist == 0.0 {
        first_axis(ca.len())
    } else {
        offset / dist
    };
    let w = ca + u * ra;
    debug!(dist, ra, rb, "ball not contained in ball");
    (false, Some(w))
}

/// Per axis, both extremes `cA_i ± rA` must pass the box membership test.
pub(super) fn ball_in_box(
    a: &Ball2,
    b: &Hyperrectangle,
    witness: bool,
    tol: &Tolerance<f64>,
) -> Certified {
    let (ca, ra) = (a.center(), a.radius());
    let (cb, rb) = (b.center(), b.radius_vec());
    for i in 0..ca.len() {
        // the worse extreme first; sign(0) = +1 keeps the choice deterministic
        let s = sign_nonneg(ca[i] - cb[i]);
        let far = ca[i] + s * ra;
        if !tol.leq((cb[i] - far).abs(), rb[i]) {
            debug!(axis = i, "ball leaves box");
            let w = witness.then(|| {
                let mut w = ca.clone();
                w[i] = far;
                w
            });
            return (false, w);
        }
    }
    (true, None)
}

/// The vertex of `A` farthest from `cB` must lie in the ball `(cB, rB)`.
///
/// That vertex takes the face farther from `cB` on every axis, so the check
/// is `O(n)` and the vertex itself is the witness. `rB = 0` covers
/// singletons.
pub(super) fn box_in_ball(
    a: &Hyperrectangle,
    cb: &DVector<f64>,
    rb: f64,
    witness: bool,
    tol: &Tolerance<f64>,
) -> Certified {
    let (ca, ra) = (a.center(), a.radius_vec());
    let far = DVector::from_fn(ca.len(), |i, _| ca[i] + sign_nonneg(ca[i] - cb[i]) * ra[i]);
    let dist = (&far - cb).norm();
    if tol.leq(dist, rb) {
        return (true, None);
    }
    debug!(dist, rb, "box corner leaves ball");
    (false, witness.then_some(far))
}

/// Per axis, both faces of `A` must pass the box membership test of `B`.
///
/// Equivalent to checking all `2^n` vertices, in `O(n)`.
pub(super) fn box_in_box(
    a: &Hyperrectangle,
    b: &Hyperrectangle,
    witness: bool,
    tol: &Tolerance<f64>,
) -> Certified {
    let (ca, ra) = (a.center(), a.radius_vec());
    let (cb, rb) = (b.center(), b.radius_vec());
    for i in 0..ca.len() {
        let s = sign_nonneg(ca[i] - cb[i]);
        let far = ca[i] + s * ra[i];
        if !tol.leq((cb[i] - far).abs(), rb[i]) {
            debug!(axis = i, "box leaves box");
            // support vector of A along s·e_i: a vertex
            let w = witness.then(|| {
                DVector::from_fn(ca.len(), |j, _| if j == i { far } else { ca[j] + ra[j] })
            });
            return (false, w);
        }
    }
    (true, None)
}

/// Support-function rules for pairs without a closed form.
///
/// - `A` with a finite vertex set: every vertex must be a member of `B`,
///   visited lazily so the first outsider ends the walk.
/// - `B` polyhedral: `ρ_A(a) <= b` for every constraint `a·x <= b`. A
///   violated constraint only counts if `σ_A(a)` also fails `B`'s own
///   membership test, so the witness always satisfies the contract.
pub(super) fn generic(
    a: &dyn LazySet,
    b: &dyn LazySet,
    witness: bool,
    tol: &Tolerance<f64>,
) -> Result<Certified, UsageError> {
    if let Some(vertices) = a.vertices_iter() {
        for v in vertices {
            if !b.contains_with(&v, tol)? {
                debug!(dim = v.len(), "vertex outside superset candidate");
                return Ok((false, witness.then_some(v)));
            }
        }
        return Ok((true, None));
    }
    if let Some(constraints) = b.constraints_list() {
        for c in &constraints {
            if tol.leq(a.support_function(&c.a)?, c.b) {
                continue;
            }
            let s = a.support_vector(&c.a)?;
            if b.contains_with(&s, tol)? {
                continue;
            }
            debug!("support vector violates a constraint of the superset candidate");
            return Ok((false, witness.then_some(s)));
        }
        return Ok((true, None));
    }
    Err(UsageError::unsupported(format!(
        "subset of {a:?} in {b:?}: no vertex list for the subset and no constraints for the superset"
    )))
}
