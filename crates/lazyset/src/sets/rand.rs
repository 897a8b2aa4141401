//! Reproducible random boxes, balls and directions.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//! a failing property test or benchmark input can be regenerated exactly.

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Ball2, Hyperrectangle};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    #[inline]
    pub fn next_index(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Sampling ranges.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Center coordinates are uniform in `[-center_half_width, center_half_width]`.
    pub center_half_width: f64,
    /// Radii (per axis for boxes) are uniform in `[0, radius_max]`.
    pub radius_max: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            center_half_width: 10.0,
            radius_max: 3.0,
        }
    }
}

impl SampleCfg {
    fn center<R: Rng>(&self, dim: usize, rng: &mut R) -> DVector<f64> {
        let w = self.center_half_width.abs();
        DVector::from_fn(dim, |_, _| rng.gen_range(-w..=w))
    }
    fn radius<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(0.0..=self.radius_max.abs())
    }
}

pub fn draw_hyperrectangle(dim: usize, cfg: SampleCfg, tok: ReplayToken) -> Hyperrectangle {
    let mut rng = tok.to_std_rng();
    let center = cfg.center(dim, &mut rng);
    let radius = DVector::from_fn(dim, |_, _| cfg.radius(&mut rng));
    Hyperrectangle::from_parts_unchecked(center, radius)
}

pub fn draw_ball2(dim: usize, cfg: SampleCfg, tok: ReplayToken) -> Ball2 {
    let mut rng = tok.to_std_rng();
    let center = cfg.center(dim, &mut rng);
    let radius = cfg.radius(&mut rng);
    Ball2::from_parts_unchecked(center, radius)
}

/// Direction with components uniform in `[-1, 1]` (may be zero in rare cases).
pub fn draw_direction(dim: usize, tok: ReplayToken) -> DVector<f64> {
    let mut rng = tok.to_std_rng();
    DVector::from_fn(dim, |_, _| rng.gen_range(-1.0..=1.0))
}
