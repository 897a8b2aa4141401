//! Euclidean ball: center plus scalar radius.

use nalgebra::DVector;

use super::{check_finite, translated, LazySet, SetRef};
use crate::error::{check_dim, ConstructionError, UsageError};
use crate::tol::Tolerance;

#[derive(Clone, Debug, PartialEq)]
pub struct Ball2 {
    center: DVector<f64>,
    radius: f64,
}

impl Ball2 {
    /// Rejects a negative or non-finite radius and non-finite centers.
    pub fn new(center: DVector<f64>, radius: f64) -> Result<Self, ConstructionError> {
        check_finite(&center, "ball center")?;
        if !radius.is_finite() {
            return Err(ConstructionError::NonFinite {
                context: "ball radius",
            });
        }
        if radius < 0.0 {
            return Err(ConstructionError::NegativeRadius {
                value: radius,
                axis: None,
            });
        }
        Ok(Self { center, radius })
    }

    pub(crate) fn from_parts_unchecked(center: DVector<f64>, radius: f64) -> Self {
        debug_assert!(radius >= 0.0);
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> &DVector<f64> {
        &self.center
    }
    /// Euclidean radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Largest p-norm distance from the center to a point of the ball.
    ///
    /// On the Euclidean unit sphere `max ‖u‖_p` is `n^(1/p - 1/2)` for `p < 2`
    /// and `1` for `p >= 2`.
    pub fn radius_p(&self, p: f64) -> f64 {
        debug_assert!(p >= 1.0);
        let n = self.center.len() as f64;
        let exponent = (1.0 / p - 0.5).max(0.0);
        if exponent == 0.0 || n <= 1.0 {
            self.radius
        } else {
            self.radius * n.powf(exponent)
        }
    }
    pub fn diameter_p(&self, p: f64) -> f64 {
        2.0 * self.radius_p(p)
    }
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn translate(&self, offset: &DVector<f64>) -> Result<Self, UsageError> {
        Ok(Self {
            center: translated(&self.center, offset)?,
            radius: self.radius,
        })
    }
}

impl LazySet for Ball2 {
    fn dim(&self) -> usize {
        self.center.len()
    }

    /// `center + r · d / ‖d‖`; the zero direction yields the center.
    fn support_vector(&self, d: &DVector<f64>) -> Result<DVector<f64>, UsageError> {
        check_dim("support direction", self.dim(), d.len())?;
        let norm = d.norm();
        if norm == 0.0 {
            return Ok(self.center.clone());
        }
        Ok(&self.center + d * (self.radius / norm))
    }

    fn support_function(&self, d: &DVector<f64>) -> Result<f64, UsageError> {
        check_dim("support direction", self.dim(), d.len())?;
        Ok(d.dot(&self.center) + self.radius * d.norm())
    }

    fn contains_with(&self, p: &DVector<f64>, tol: &Tolerance<f64>) -> Result<bool, UsageError> {
        check_dim("membership point", self.dim(), p.len())?;
        Ok(tol.leq((p - &self.center).norm(), self.radius))
    }

    fn an_element(&self) -> DVector<f64> {
        self.center.clone()
    }

    fn as_set_ref(&self) -> SetRef<'_> {
        SetRef::Ball2(self)
    }
}
