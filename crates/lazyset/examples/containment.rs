//! Check a few containment and intersection queries and print the witnesses.
//!
//! Usage:
//!   cargo run -p lazyset --example containment

use lazyset::prelude::*;
use nalgebra::dvector;

fn main() -> Result<(), LazySetError> {
    let cfg = GeomCfg::default();
    let reach = Hyperrectangle::builder()
        .low(dvector![-1.0, -1.0])
        .high(dvector![1.0, 2.0])
        .build()?;
    let safe = Ball2::new(dvector![0.0, 0.5], 1.5)?;
    let unsafe_region = Ball2::new(dvector![3.0, 3.0], 1.0)?;

    let (inside, witness) = subset(&reach, &safe, true, cfg)?;
    println!("reach ⊆ safe: {inside}");
    if let Some(w) = witness {
        println!("  counterexample: {}", w.transpose());
    }

    let (empty, witness) = is_intersection_empty(&reach, &unsafe_region, true, cfg)?;
    println!("reach ∩ unsafe = ∅: {empty}");
    if let Some(w) = witness {
        println!("  common point: {}", w.transpose());
    }

    let moved = reach.translate(&dvector![1.5, 1.0])?;
    let (empty, witness) = is_intersection_empty(&moved, &unsafe_region, true, cfg)?;
    println!("moved ∩ unsafe = ∅: {empty}");
    if let Some(w) = witness {
        println!("  common point: {}", w.transpose());
    }
    Ok(())
}
