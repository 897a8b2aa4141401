//! Query configuration.
//!
//! `GeomCfg` is a small `Copy` value passed to every predicate. It carries the
//! tolerance used at boundary comparisons and the iteration budget of the
//! support-function fallback used for shape pairs without a closed form.

use crate::tol::Tolerance;

/// Geometry configuration (tolerances and fallback budget).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub tol: Tolerance<f64>,
    /// Maximum Frank–Wolfe steps of the generic intersection fallback.
    pub fallback_max_iters: usize,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            tol: Tolerance::default(),
            fallback_max_iters: 10_000,
        }
    }
}

impl GeomCfg {
    #[inline]
    pub fn with_tol(self, tol: Tolerance<f64>) -> Self {
        Self { tol, ..self }
    }
    #[inline]
    pub fn with_fallback_max_iters(self, fallback_max_iters: usize) -> Self {
        Self {
            fallback_max_iters,
            ..self
        }
    }
}
