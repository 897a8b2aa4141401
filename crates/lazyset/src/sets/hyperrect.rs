//! Axis-aligned box (`Hyperrectangle`): center plus per-axis half-width.
//!
//! Invariants:
//! - `center.len() == radius.len()`.
//! - `radius[i] >= 0` and all components finite.
//!
//! Vertex enumeration is exponential in the dimension (`2^n` corners).
//! `vertex_iter` produces them lazily so consumers can stop early; it refuses
//! dimensions whose corner count does not fit in a `usize`.

use nalgebra::DVector;

use super::{check_finite, norm_p, sign_nonneg, translated, HalfSpace, LazySet, SetRef};
use crate::error::{check_dim, ConstructionError, UsageError};
use crate::tol::Tolerance;

#[derive(Clone, Debug, PartialEq)]
pub struct Hyperrectangle {
    center: DVector<f64>,
    radius: DVector<f64>,
}

/// The two accepted ways of describing a box.
#[derive(Clone, Debug, PartialEq)]
pub enum HyperrectangleSpec {
    CenterRadius {
        center: DVector<f64>,
        radius: DVector<f64>,
    },
    LowHigh {
        low: DVector<f64>,
        high: DVector<f64>,
    },
}

/// Collects optional parts and resolves them into a `HyperrectangleSpec`.
///
/// A complete `center`+`radius` pair takes precedence over `low`+`high`.
/// Any other combination is rejected with `ConstructionError::Argument`.
#[derive(Clone, Debug, Default)]
pub struct HyperrectangleBuilder {
    center: Option<DVector<f64>>,
    radius: Option<DVector<f64>>,
    low: Option<DVector<f64>>,
    high: Option<DVector<f64>>,
}

impl HyperrectangleBuilder {
    pub fn center(mut self, center: DVector<f64>) -> Self {
        self.center = Some(center);
        self
    }
    pub fn radius(mut self, radius: DVector<f64>) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn low(mut self, low: DVector<f64>) -> Self {
        self.low = Some(low);
        self
    }
    pub fn high(mut self, high: DVector<f64>) -> Self {
        self.high = Some(high);
        self
    }

    pub fn resolve(self) -> Result<HyperrectangleSpec, ConstructionError> {
        match self {
            Self {
                center: Some(center),
                radius: Some(radius),
                ..
            } => Ok(HyperrectangleSpec::CenterRadius { center, radius }),
            Self {
                low: Some(low),
                high: Some(high),
                ..
            } => Ok(HyperrectangleSpec::LowHigh { low, high }),
            other => {
                let given: Vec<&str> = [
                    ("center", other.center.is_some()),
                    ("radius", other.radius.is_some()),
                    ("low", other.low.is_some()),
                    ("high", other.high.is_some()),
                ]
                .into_iter()
                .filter_map(|(name, set)| set.then_some(name))
                .collect();
                let given = if given.is_empty() {
                    "nothing".to_string()
                } else {
                    given.join(", ")
                };
                Err(ConstructionError::argument(format!(
                    "a hyperrectangle needs either center and radius or low and high; got {given}"
                )))
            }
        }
    }

    pub fn build(self) -> Result<Hyperrectangle, ConstructionError> {
        match self.resolve()? {
            HyperrectangleSpec::CenterRadius { center, radius } => {
                Hyperrectangle::new(center, radius)
            }
            HyperrectangleSpec::LowHigh { low, high } => Hyperrectangle::from_bounds(low, high),
        }
    }
}

impl Hyperrectangle {
    pub fn new(center: DVector<f64>, radius: DVector<f64>) -> Result<Self, ConstructionError> {
        if center.len() != radius.len() {
            return Err(ConstructionError::dimension(
                "hyperrectangle radius",
                center.len(),
                radius.len(),
            ));
        }
        check_finite(&center, "hyperrectangle center")?;
        check_finite(&radius, "hyperrectangle radius")?;
        if let Some((axis, &value)) = radius.iter().enumerate().find(|(_, r)| **r < 0.0) {
            return Err(ConstructionError::NegativeRadius {
                value,
                axis: Some(axis),
            });
        }
        Ok(Self { center, radius })
    }

    /// Box spanned by `low` and `high`: `center = (low + high) / 2`, `radius = |high - center|`.
    pub fn from_bounds(low: DVector<f64>, high: DVector<f64>) -> Result<Self, ConstructionError> {
        if low.len() != high.len() {
            return Err(ConstructionError::dimension(
                "hyperrectangle high",
                low.len(),
                high.len(),
            ));
        }
        let center = (&low + &high) / 2.0;
        let radius = (&high - &center).abs();
        Self::new(center, radius)
    }

    pub fn builder() -> HyperrectangleBuilder {
        HyperrectangleBuilder::default()
    }

    /// Caller guarantees the invariants (used by samplers).
    pub(crate) fn from_parts_unchecked(center: DVector<f64>, radius: DVector<f64>) -> Self {
        debug_assert_eq!(center.len(), radius.len());
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> &DVector<f64> {
        &self.center
    }
    /// Per-axis half-widths.
    #[inline]
    pub fn radius_vec(&self) -> &DVector<f64> {
        &self.radius
    }

    pub fn low(&self) -> DVector<f64> {
        &self.center - &self.radius
    }
    pub fn high(&self) -> DVector<f64> {
        &self.center + &self.radius
    }

    /// Distance from the center to any vertex in the p-norm (`norm_p(radius)`).
    pub fn radius_p(&self, p: f64) -> f64 {
        norm_p(&self.radius, p)
    }
    /// `radius_p(∞)`.
    pub fn radius(&self) -> f64 {
        self.radius_p(f64::INFINITY)
    }
    pub fn diameter_p(&self, p: f64) -> f64 {
        2.0 * self.radius_p(p)
    }
    pub fn diameter(&self) -> f64 {
        self.diameter_p(f64::INFINITY)
    }

    /// Largest p-norm over the vertices.
    ///
    /// Every coordinate of the farthest vertex has magnitude `|c_i| + r_i`,
    /// so no enumeration is needed.
    pub fn norm_p(&self, p: f64) -> f64 {
        let extreme = self.center.abs() + &self.radius;
        norm_p(&extreme, p)
    }
    pub fn norm(&self) -> f64 {
        self.norm_p(f64::INFINITY)
    }

    /// Lazy walk over the `2^n` corners. Bit `i` of the corner index selects
    /// `-radius[i]`; corner 0 is `high()`.
    pub fn vertex_iter(&self) -> Result<Vertices<'_>, UsageError> {
        let n = self.dim();
        if n >= usize::BITS as usize {
            return Err(UsageError::unsupported(format!(
                "vertex enumeration of a {n}-dimensional hyperrectangle"
            )));
        }
        Ok(Vertices {
            rect: self,
            next: 0,
            count: 1usize << n,
        })
    }

    /// All corners, in `vertex_iter` order.
    pub fn vertices(&self) -> Result<Vec<DVector<f64>>, UsageError> {
        Ok(self.vertex_iter()?.collect())
    }

    fn vertex(&self, k: usize) -> DVector<f64> {
        DVector::from_fn(self.dim(), |i, _| {
            if (k >> i) & 1 == 0 {
                self.center[i] + self.radius[i]
            } else {
                self.center[i] - self.radius[i]
            }
        })
    }

    pub fn translate(&self, offset: &DVector<f64>) -> Result<Self, UsageError> {
        Ok(Self {
            center: translated(&self.center, offset)?,
            radius: self.radius.clone(),
        })
    }
}

/// Corners of a `Hyperrectangle`, see [`Hyperrectangle::vertex_iter`].
#[derive(Clone, Debug)]
pub struct Vertices<'a> {
    rect: &'a Hyperrectangle,
    next: usize,
    count: usize,
}

impl Iterator for Vertices<'_> {
    type Item = DVector<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.count {
            return None;
        }
        let v = self.rect.vertex(self.next);
        self.next += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Vertices<'_> {}

impl LazySet for Hyperrectangle {
    fn dim(&self) -> usize {
        self.center.len()
    }

    /// `center[i] + sign(d[i]) · radius[i]` with `sign(0) = +1`.
    fn support_vector(&self, d: &DVector<f64>) -> Result<DVector<f64>, UsageError> {
        check_dim("support direction", self.dim(), d.len())?;
        Ok(DVector::from_fn(self.dim(), |i, _| {
            self.center[i] + sign_nonneg(d[i]) * self.radius[i]
        }))
    }

    fn support_function(&self, d: &DVector<f64>) -> Result<f64, UsageError> {
        check_dim("support direction", self.dim(), d.len())?;
        Ok(d.dot(&self.center) + d.abs().dot(&self.radius))
    }

    fn contains_with(&self, p: &DVector<f64>, tol: &Tolerance<f64>) -> Result<bool, UsageError> {
        check_dim("membership point", self.dim(), p.len())?;
        Ok((0..self.dim()).all(|i| tol.leq((self.center[i] - p[i]).abs(), self.radius[i])))
    }

    fn an_element(&self) -> DVector<f64> {
        self.center.clone()
    }

    /// `None` once the corner count no longer fits in a `usize`.
    fn vertices_list(&self) -> Option<Vec<DVector<f64>>> {
        self.vertices().ok()
    }

    fn vertices_iter(&self) -> Option<Box<dyn Iterator<Item = DVector<f64>> + '_>> {
        let it = self.vertex_iter().ok()?;
        Some(Box::new(it))
    }

    /// `e_i · x <= c_i + r_i` and `-e_i · x <= r_i - c_i` for every axis.
    fn constraints_list(&self) -> Option<Vec<HalfSpace>> {
        let n = self.dim();
        let mut out = Vec::with_capacity(2 * n);
        for i in 0..n {
            let e = DVector::from_fn(n, |j, _| if j == i { 1.0 } else { 0.0 });
            out.push(HalfSpace::new(e.clone(), self.center[i] + self.radius[i]));
            out.push(HalfSpace::new(-e, self.radius[i] - self.center[i]));
        }
        Some(out)
    }

    fn as_set_ref(&self) -> SetRef<'_> {
        SetRef::Hyperrectangle(self)
    }
}
