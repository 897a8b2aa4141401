//! Certificate-producing predicates: subset and intersection emptiness.
//!
//! Purpose
//! - Answer `A ⊆ B` and `A ∩ B = ∅` for any pair of `LazySet`s, optionally
//!   returning a witness point:
//!   - subset is `false` → witness lies in `A` and fails membership in `B`;
//!   - intersection is non-empty → witness lies in both operands.
//!
//! Dispatch
//! - Known pairs (ball/ball, box/box, box/ball, singleton/anything) use closed
//!   forms. Mixed pairs are routed to the same routine regardless of operand
//!   order, so `is_intersection_empty(a, b) == is_intersection_empty(b, a)`.
//! - Everything else falls back to support-function algorithms: vertex
//!   checks and polyhedral supersets for subset, a Frank–Wolfe search on the
//!   Minkowski difference for intersection.
//!
//! Witness rules (deterministic, for reproducible tests)
//! - Ball ⊄ Ball: the point of `A` farthest from `B`'s center along the
//!   center line (`+e_1` if the centers coincide).
//! - Ball ⊄ Box: `A`'s support vector along the first violated axis.
//! - Box ⊄ Ball (or Singleton): the vertex of `A` farthest from `B`'s center.
//! - Box ⊄ Box: `A`'s support vector along the first violated axis.
//! - Other vertex-enumerable `A`: the first violating vertex.
//! - Ball ∩ Ball: midpoint of the overlap chord on the center line.
//! - Box ∩ Box: per-axis midpoint of the overlap interval.
//! - Box ∩ Ball: the point of the box closest to the ball's center.

mod fallback;
mod intersection;
mod inclusion;

use nalgebra::DVector;
use tracing::trace;

use crate::cfg::GeomCfg;
use crate::error::{check_dim, UsageError};
use crate::sets::{LazySet, SetRef};

/// Predicate outcome plus optional witness point.
pub type Certified = (bool, Option<DVector<f64>>);

/// `A ⊆ B`, with a counterexample in `A \ B` when `witness` is set and the
/// answer is `false`.
pub fn subset(
    a: &dyn LazySet,
    b: &dyn LazySet,
    witness: bool,
    cfg: GeomCfg,
) -> Result<Certified, UsageError> {
    check_dim("subset operands", a.dim(), b.dim())?;
    let tol = &cfg.tol;
    let out = match (a.as_set_ref(), b.as_set_ref()) {
        (SetRef::Ball2(x), SetRef::Ball2(y)) => {
            trace!(pair = "ball2/ball2", "subset");
            inclusion::ball_in_ball(x.center(), x.radius(), y.center(), y.radius(), witness, tol)
        }
        (SetRef::Ball2(x), SetRef::Singleton(y)) => {
            trace!(pair = "ball2/singleton", "subset");
            inclusion::ball_in_ball(x.center(), x.radius(), y.element(), 0.0, witness, tol)
        }
        (SetRef::Ball2(x), SetRef::Hyperrectangle(y)) => {
            trace!(pair = "ball2/hyperrectangle", "subset");
            inclusion::ball_in_box(x, y, witness, tol)
        }
        (SetRef::Hyperrectangle(x), SetRef::Hyperrectangle(y)) => {
            trace!(pair = "hyperrectangle/hyperrectangle", "subset");
            inclusion::box_in_box(x, y, witness, tol)
        }
        (SetRef::Hyperrectangle(x), SetRef::Ball2(y)) => {
            trace!(pair = "hyperrectangle/ball2", "subset");
            inclusion::box_in_ball(x, y.center(), y.radius(), witness, tol)
        }
        (SetRef::Hyperrectangle(x), SetRef::Singleton(y)) => {
            trace!(pair = "hyperrectangle/singleton", "subset");
            inclusion::box_in_ball(x, y.element(), 0.0, witness, tol)
        }
        _ => inclusion::generic(a, b, witness, tol)?,
    };
    Ok(out)
}

/// `A ∩ B = ∅`, with a common point when `witness` is set and the answer is
/// `false`.
pub fn is_intersection_empty(
    a: &dyn LazySet,
    b: &dyn LazySet,
    witness: bool,
    cfg: GeomCfg,
) -> Result<Certified, UsageError> {
    check_dim("intersection operands", a.dim(), b.dim())?;
    let tol = &cfg.tol;
    let out = match (a.as_set_ref(), b.as_set_ref()) {
        (SetRef::Ball2(x), SetRef::Ball2(y)) => {
            trace!(pair = "ball2/ball2", "is_intersection_empty");
            intersection::ball_ball(x, y, witness, tol)
        }
        (SetRef::Hyperrectangle(x), SetRef::Hyperrectangle(y)) => {
            trace!(pair = "hyperrectangle/hyperrectangle", "is_intersection_empty");
            intersection::box_box(x, y, witness, tol)
        }
        (SetRef::Hyperrectangle(h), SetRef::Ball2(x))
        | (SetRef::Ball2(x), SetRef::Hyperrectangle(h)) => {
            trace!(pair = "hyperrectangle/ball2", "is_intersection_empty");
            intersection::box_ball(h, x, witness, tol)
        }
        (SetRef::Singleton(s), _) => {
            trace!(pair = "singleton/any", "is_intersection_empty");
            intersection::point_in(s.element(), b, witness, tol)?
        }
        (_, SetRef::Singleton(s)) => {
            trace!(pair = "any/singleton", "is_intersection_empty");
            intersection::point_in(s.element(), a, witness, tol)?
        }
        _ => {
            trace!(pair = "generic", "is_intersection_empty");
            fallback::min_norm_difference(a, b, witness, cfg)?
        }
    };
    Ok(out)
}

/// `A ⊆ B` without a witness.
pub fn is_subset(a: &dyn LazySet, b: &dyn LazySet, cfg: GeomCfg) -> Result<bool, UsageError> {
    subset(a, b, false, cfg).map(|(holds, _)| holds)
}

/// `A ∩ B ≠ ∅` without a witness.
pub fn is_intersecting(a: &dyn LazySet, b: &dyn LazySet, cfg: GeomCfg) -> Result<bool, UsageError> {
    is_intersection_empty(a, b, false, cfg).map(|(empty, _)| !empty)
}

#[cfg(test)]
mod tests;
