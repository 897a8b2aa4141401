//! Single point `{x}`: the degenerate box/ball of radius zero.
//!
//! Membership is the zero-radius ball test `‖p - x‖ <= 0` through the
//! tolerance layer, so a `Singleton` and a `Ball2` of radius zero around the
//! same point agree on every query.

use nalgebra::DVector;

use super::{check_finite, translated, HalfSpace, LazySet, SetRef};
use crate::error::{check_dim, ConstructionError, UsageError};
use crate::tol::Tolerance;

#[derive(Clone, Debug, PartialEq)]
pub struct Singleton {
    element: DVector<f64>,
}

impl Singleton {
    pub fn new(element: DVector<f64>) -> Result<Self, ConstructionError> {
        check_finite(&element, "singleton element")?;
        Ok(Self { element })
    }

    #[inline]
    pub fn element(&self) -> &DVector<f64> {
        &self.element
    }

    pub fn translate(&self, offset: &DVector<f64>) -> Result<Self, UsageError> {
        Ok(Self {
            element: translated(&self.element, offset)?,
        })
    }
}

impl LazySet for Singleton {
    fn dim(&self) -> usize {
        self.element.len()
    }

    fn support_vector(&self, d: &DVector<f64>) -> Result<DVector<f64>, UsageError> {
        check_dim("support direction", self.dim(), d.len())?;
        Ok(self.element.clone())
    }

    fn contains_with(&self, p: &DVector<f64>, tol: &Tolerance<f64>) -> Result<bool, UsageError> {
        check_dim("membership point", self.dim(), p.len())?;
        Ok(tol.leq((p - &self.element).norm(), 0.0))
    }

    fn an_element(&self) -> DVector<f64> {
        self.element.clone()
    }

    fn vertices_list(&self) -> Option<Vec<DVector<f64>>> {
        Some(vec![self.element.clone()])
    }

    /// Pins every coordinate from both sides.
    fn constraints_list(&self) -> Option<Vec<HalfSpace>> {
        let n = self.dim();
        let mut out = Vec::with_capacity(2 * n);
        for i in 0..n {
            let e = DVector::from_fn(n, |j, _| if j == i { 1.0 } else { 0.0 });
            out.push(HalfSpace::new(e.clone(), self.element[i]));
            out.push(HalfSpace::new(-e, -self.element[i]));
        }
        Some(out)
    }

    fn as_set_ref(&self) -> SetRef<'_> {
        SetRef::Singleton(self)
    }
}
