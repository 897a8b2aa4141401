//! Convex sets represented lazily through their support function.
//!
//! Shapes answer `support_vector` and membership queries; the predicates in
//! [`ops`] build containment and intersection checks on top of them and return
//! witness points alongside the boolean answers. Every boundary comparison
//! goes through the tolerance layer in [`tol`].
//!
//! Layout (leaves first)
//! - `tol`: approximate comparisons (`leq`, `geq`, `is_approx`, `is_approx_zero`).
//! - `error`, `cfg`: error taxonomy and per-call configuration.
//! - `sets`: the `LazySet` protocol plus `Hyperrectangle`, `Ball2`, `Singleton`.
//! - `ops`: `subset` and `is_intersection_empty` with witnesses.

pub mod api;
pub mod cfg;
pub mod error;
pub mod ops;
pub mod sets;
pub mod tol;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::{ConstructionError, LazySetError, UsageError};
pub use nalgebra::DVector as VecN;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::GeomCfg;
    pub use crate::error::{ConstructionError, LazySetError, UsageError};
    pub use crate::ops::{is_intersecting, is_intersection_empty, is_subset, subset, Certified};
    pub use crate::sets::{Ball2, HalfSpace, Hyperrectangle, LazySet, Singleton};
    pub use crate::tol::Tolerance;
    pub use nalgebra::DVector as VecN;
}
