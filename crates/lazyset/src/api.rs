//! Curated surface for higher layers (set operators, plotting, I/O).
//!
//! Prefer these re-exports over reaching into submodules; module layout may
//! change, these names should not.

// Tolerance layer
pub use crate::tol::{geq, is_approx, is_approx_vec, is_approx_zero, leq, Tolerance, ToleranceScalar};
// Shapes
pub use crate::sets::rand::{draw_ball2, draw_direction, draw_hyperrectangle, ReplayToken, SampleCfg};
pub use crate::sets::{
    norm_p, Ball2, HalfSpace, Hyperrectangle, HyperrectangleBuilder, HyperrectangleSpec, LazySet,
    Vertices,
    SetRef, Singleton,
};
// Predicates
pub use crate::ops::{is_intersecting, is_intersection_empty, is_subset, subset, Certified};
pub use crate::cfg::GeomCfg;
