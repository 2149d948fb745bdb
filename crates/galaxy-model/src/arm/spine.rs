//! Spine sampling: radius/width laws at every integer degree, smoothing,
//! empirical corrections, and polar-to-planar conversion.
//!
//! The sign convention is fixed here (`x = r cos B`, `y = r sin B`, `B` in
//! degrees); any coordinate-frame flip belongs to the caller's
//! coordinate-transform layer, not to this module.

use nalgebra::Vector2;
use serde::Serialize;

use super::law::{radius_at, trim_at, width_at};
use super::params::ArmParams;
use super::smooth::smooth_linear;

/// Ordered centerline of one arm span: one sample per integer degree.
///
/// Invariants:
/// - `b`, `r`, `points`, `width` all have length `end - begin + 1`.
/// - `b` increases by exactly one degree per sample.
#[derive(Clone, Debug, Serialize)]
pub struct Spine {
    /// Angle samples (degrees).
    pub b: Vec<f64>,
    /// Smoothed and trim-corrected galactocentric radii (kpc).
    pub r: Vec<f64>,
    /// Planar spine points (kpc), consistent with `r` and `b`.
    pub points: Vec<Vector2<f64>>,
    /// Smoothed half-widths (kpc).
    pub width: Vec<f64>,
}

impl Spine {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[inline]
pub(crate) fn polar_point(r: f64, b_deg: f64) -> Vector2<f64> {
    let b = b_deg.to_radians();
    Vector2::new(r * b.cos(), r * b.sin())
}

/// Sample one angular span of an arm and smooth it.
///
/// The raw radii are smoothed first; half-widths are evaluated on the
/// smoothed radii (keeping them continuous across regime boundaries) and then
/// smoothed themselves. Triangular corrections apply after smoothing and
/// shape only the planar spine.
pub fn build_spine(params: &ArmParams, span: (f64, f64)) -> Spine {
    let (begin, end) = span;
    debug_assert!(end > begin);
    let n = (end - begin) as usize + 1;
    debug_assert!(params.window <= n);

    let b: Vec<f64> = (0..n).map(|i| begin + i as f64).collect();
    let raw_r: Vec<f64> = b.iter().map(|&bi| radius_at(params, bi)).collect();
    let smooth_r = smooth_linear(&raw_r, params.window);

    let raw_w: Vec<f64> = b
        .iter()
        .zip(&smooth_r)
        .map(|(&bi, &ri)| width_at(params, bi, ri))
        .collect();
    let width = smooth_linear(&raw_w, params.window);

    let r: Vec<f64> = b
        .iter()
        .zip(&smooth_r)
        .map(|(&bi, &ri)| ri - trim_at(params, bi))
        .collect();
    let points = b.iter().zip(&r).map(|(&bi, &ri)| polar_point(ri, bi)).collect();

    Spine { b, r, points, width }
}
