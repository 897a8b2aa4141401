//! Tolerance layer: approximate comparisons used by every geometric predicate.
//!
//! Purpose
//! - Support vectors computed in floating point land on facets only up to
//!   rounding error. Raw `<=`/`==` then flip answers exactly at boundaries.
//!   Every membership, subset and intersection check goes through `leq`/`geq`
//!   and `is_approx` instead.
//!
//! Conventions
//! - `Tolerance<T>` holds `rtol` (relative), `ztol` (zero) and `atol` (absolute).
//! - Floating types default to `rtol = sqrt(eps)`, `ztol = 10·sqrt(eps)`, `atol = 0`.
//! - Exact types (integers) default to all zeros and compare exactly; `leq`
//!   bypasses the approximate path for them.
//! - Tolerances are values threaded through calls. There is no global state.

use nalgebra::DVector;
use num_traits::Signed;

/// Numeric comparison tolerances for scalar type `T`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance<T> {
    pub rtol: T,
    pub ztol: T,
    pub atol: T,
}

/// Scalars that carry a per-type default tolerance.
pub trait ToleranceScalar: Copy + PartialOrd + Signed {
    /// `true` for exact representations; comparisons then skip the tolerance.
    const EXACT: bool;

    fn default_tolerance() -> Tolerance<Self>;
}

macro_rules! impl_float_tolerance {
    ($($t:ty),*) => {$(
        impl ToleranceScalar for $t {
            const EXACT: bool = false;

            #[inline]
            fn default_tolerance() -> Tolerance<$t> {
                let s = <$t>::EPSILON.sqrt();
                Tolerance { rtol: s, ztol: 10.0 * s, atol: 0.0 }
            }
        }
    )*};
}

macro_rules! impl_exact_tolerance {
    ($($t:ty),*) => {$(
        impl ToleranceScalar for $t {
            const EXACT: bool = true;

            #[inline]
            fn default_tolerance() -> Tolerance<$t> {
                Tolerance::exact()
            }
        }
    )*};
}

impl_float_tolerance!(f32, f64);
impl_exact_tolerance!(i32, i64);

impl<T: ToleranceScalar> Default for Tolerance<T> {
    fn default() -> Self {
        T::default_tolerance()
    }
}

impl<T: ToleranceScalar> Tolerance<T> {
    /// All-zero tolerance: every comparison is exact.
    pub fn exact() -> Self {
        Self {
            rtol: T::zero(),
            ztol: T::zero(),
            atol: T::zero(),
        }
    }

    #[inline]
    pub fn with_rtol(self, rtol: T) -> Self {
        Self { rtol, ..self }
    }
    #[inline]
    pub fn with_ztol(self, ztol: T) -> Self {
        Self { ztol, ..self }
    }
    #[inline]
    pub fn with_atol(self, atol: T) -> Self {
        Self { atol, ..self }
    }

    #[inline]
    pub fn leq(&self, x: T, y: T) -> bool {
        leq(x, y, self)
    }
    #[inline]
    pub fn geq(&self, x: T, y: T) -> bool {
        geq(x, y, self)
    }
    #[inline]
    pub fn is_approx(&self, x: T, y: T) -> bool {
        is_approx(x, y, self)
    }
    #[inline]
    pub fn is_approx_zero(&self, x: T) -> bool {
        is_approx_zero(x, self)
    }
}

/// `|x| <= ztol`.
#[inline]
pub fn is_approx_zero<T: ToleranceScalar>(x: T, tol: &Tolerance<T>) -> bool {
    x.abs() <= tol.ztol
}

/// Combined relative/absolute equality; two approx-zero values are always equal.
pub fn is_approx<T: ToleranceScalar>(x: T, y: T, tol: &Tolerance<T>) -> bool {
    // native equality first so that equal infinities compare equal
    if x == y {
        return true;
    }
    if T::EXACT {
        return false;
    }
    if is_approx_zero(x, tol) && is_approx_zero(y, tol) {
        return true;
    }
    let (ax, ay) = (x.abs(), y.abs());
    let scale = if ax > ay { ax } else { ay };
    (x - y).abs() <= tol.atol + tol.rtol * scale
}

/// `x <= y`, or approximately equal for floating types.
#[inline]
pub fn leq<T: ToleranceScalar>(x: T, y: T, tol: &Tolerance<T>) -> bool {
    if T::EXACT {
        x <= y
    } else {
        x <= y || is_approx(x, y, tol)
    }
}

/// `leq(y, x)`.
#[inline]
pub fn geq<T: ToleranceScalar>(x: T, y: T, tol: &Tolerance<T>) -> bool {
    leq(y, x, tol)
}

/// Componentwise `is_approx`; vectors of different length are never equal.
pub fn is_approx_vec(a: &DVector<f64>, b: &DVector<f64>, tol: &Tolerance<f64>) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(&x, &y)| is_approx(x, y, tol))
}
