//! Spiral-arm geometry: parameter tables, piecewise radius/width laws,
//! spine sampling with smoothing, and ribbon polygon construction.
//!
//! Pipeline per arm span (one span for five arms, two for the split
//! Three-kpc arm): sample the radius law at every integer degree, smooth,
//! evaluate and smooth the width law, convert to planar spine points, offset
//! both sides along local normals, close the borders into a ring.
//!
//! Everything here is immutable once built and safe to query from any number
//! of threads.

pub mod law;
pub mod params;
pub mod ribbon;
pub mod smooth;
pub mod spine;

use nalgebra::Vector2;
use serde::Serialize;

pub use params::{ArmKind, ArmParams};
pub use ribbon::Ring;
pub use spine::Spine;

/// One contiguous angular span of an arm: its spine and ribbon ring.
#[derive(Clone, Debug, Serialize)]
pub struct ArmSpan {
    pub spine: Spine,
    pub ring: Ring,
}

/// A named arm: one span, or two for the split arm. The spans form a single
/// region for containment but stay distinct shapes for rendering.
#[derive(Clone, Debug, Serialize)]
pub struct Arm {
    pub kind: ArmKind,
    pub spans: Vec<ArmSpan>,
}

impl Arm {
    /// Build the arm's full geometry from its calibration table.
    pub fn build(kind: ArmKind) -> Arm {
        let params = kind.params();
        let spans = params
            .spans
            .iter()
            .map(|&span| {
                let spine = spine::build_spine(params, span);
                let (inner, outer) = ribbon::border_points(&spine);
                let ring = ribbon::assemble_ring(inner, outer);
                ArmSpan { spine, ring }
            })
            .collect();
        Arm { kind, spans }
    }

    /// Union containment over the arm's span rings.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.spans.iter().any(|s| s.ring.contains(p))
    }
}

#[cfg(test)]
mod tests;
