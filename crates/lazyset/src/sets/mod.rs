//! Convex sets represented through their support function.
//!
//! Purpose
//! - `LazySet` is the capability set every representation implements:
//!   dimension, support vector and membership. Predicates in `crate::ops`
//!   only talk to shapes through this trait.
//! - Known shapes expose a tagged view (`SetRef`) so the predicate engine can
//!   pick closed-form code paths for pairs like ball/ball or box/box.
//!
//! Conventions
//! - Points and directions are `DVector<f64>`; a dimension mismatch between a
//!   query vector and the shape is a `UsageError`, never a `false`.
//! - Shapes are immutable. Operations such as `translate` return new values.
//! - Constructors reject negative radii and non-finite components, and
//!   `translate` rejects a shift that leaves the finite range. Query vectors
//!   are not validated (NaN comparisons simply fail).

mod ball2;
mod hyperrect;
pub mod rand;
mod singleton;

pub use ball2::Ball2;
pub use hyperrect::{Hyperrectangle, HyperrectangleBuilder, HyperrectangleSpec, Vertices};
pub use singleton::Singleton;

use nalgebra::DVector;
use std::fmt;

use crate::error::{check_dim, ConstructionError, UsageError};
use crate::tol::Tolerance;

/// Closed half-space `a · x <= b`.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfSpace {
    pub a: DVector<f64>,
    pub b: f64,
}

impl HalfSpace {
    #[inline]
    pub fn new(a: DVector<f64>, b: f64) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn satisfies(&self, p: &DVector<f64>, tol: &Tolerance<f64>) -> bool {
        tol.leq(self.a.dot(p), self.b)
    }
}

/// Tagged view of a shape, used to select pair-specialized algorithms.
#[derive(Clone, Copy, Debug)]
pub enum SetRef<'a> {
    Hyperrectangle(&'a Hyperrectangle),
    Ball2(&'a Ball2),
    Singleton(&'a Singleton),
    /// Any other implementation; handled by the generic code paths.
    Other,
}

/// Convex set known through its support function.
pub trait LazySet: fmt::Debug + Send + Sync {
    /// Ambient dimension.
    fn dim(&self) -> usize;

    /// A point of the set maximizing `d · x`.
    fn support_vector(&self, d: &DVector<f64>) -> Result<DVector<f64>, UsageError>;

    /// `max_{x ∈ S} d · x`.
    fn support_function(&self, d: &DVector<f64>) -> Result<f64, UsageError> {
        let s = self.support_vector(d)?;
        Ok(d.dot(&s))
    }

    /// Membership, deciding boundary cases with `tol`.
    fn contains_with(&self, p: &DVector<f64>, tol: &Tolerance<f64>) -> Result<bool, UsageError>;

    /// Membership with the default `f64` tolerance.
    fn contains(&self, p: &DVector<f64>) -> Result<bool, UsageError> {
        self.contains_with(p, &Tolerance::default())
    }

    /// Some point guaranteed to be in the set.
    fn an_element(&self) -> DVector<f64>;

    fn is_bounded(&self) -> bool {
        true
    }

    fn is_empty(&self) -> bool {
        false
    }

    /// Finite set of extreme points, if the shape has one.
    fn vertices_list(&self) -> Option<Vec<DVector<f64>>> {
        None
    }

    /// Extreme points one at a time; shapes with many vertices override this
    /// so callers can stop at the first one they need.
    fn vertices_iter(&self) -> Option<Box<dyn Iterator<Item = DVector<f64>> + '_>> {
        let vs = self.vertices_list()?;
        Some(Box::new(vs.into_iter()))
    }

    /// H-representation, if the shape is polyhedral.
    fn constraints_list(&self) -> Option<Vec<HalfSpace>> {
        None
    }

    fn as_set_ref(&self) -> SetRef<'_> {
        SetRef::Other
    }
}

/// p-norm for `p ∈ [1, ∞]`; `1`, `2` and `∞` are computed directly.
pub fn norm_p(v: &DVector<f64>, p: f64) -> f64 {
    debug_assert!(p >= 1.0, "p-norm requires p >= 1, got {p}");
    if p == f64::INFINITY {
        v.amax()
    } else if p == 1.0 {
        v.iter().map(|x| x.abs()).sum()
    } else if p == 2.0 {
        v.norm()
    } else {
        v.iter().map(|x| x.abs().powf(p)).sum::<f64>().powf(1.0 / p)
    }
}

/// `+1` for `x >= 0` (including `0`), `-1` otherwise.
#[inline]
pub(crate) fn sign_nonneg(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Unit vector along the first axis (empty for dimension 0).
pub(crate) fn first_axis(n: usize) -> DVector<f64> {
    DVector::from_fn(n, |i, _| if i == 0 { 1.0 } else { 0.0 })
}

pub(crate) fn check_finite(v: &DVector<f64>, context: &'static str) -> Result<(), ConstructionError> {
    if v.iter().all(|x| x.is_finite()) {
        Ok(())
    } else {
        Err(ConstructionError::NonFinite { context })
    }
}

/// `center + offset`; the shifted center must stay finite.
pub(crate) fn translated(
    center: &DVector<f64>,
    offset: &DVector<f64>,
) -> Result<DVector<f64>, UsageError> {
    check_dim("translation offset", center.len(), offset.len())?;
    let moved = center + offset;
    if moved.iter().all(|x| x.is_finite()) {
        Ok(moved)
    } else {
        Err(UsageError::NonFinite {
            context: "translated center",
        })
    }
}
