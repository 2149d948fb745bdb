//! Fixed circular spur regions.
//!
//! Minor structures independent of the spiral-arm model; centers and radii
//! are calibration constants (roughly estimated from ALMAGAL data in the
//! reference model), with no derived computation.

use nalgebra::Vector2;
use serde::Serialize;

/// One spur: a disk in the galactocentric plane (kpc).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Spur {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Spur {
    /// Point-in-disk test: distance to the center <= radius.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (p - self.center).norm() <= self.radius
    }
}

/// The four calibrated spurs.
pub fn standard_spurs() -> Vec<Spur> {
    vec![
        Spur { center: Vector2::new(-1.66, 4.85), radius: 1.15 },
        Spur { center: Vector2::new(1.1, 4.4), radius: 0.8 },
        Spur { center: Vector2::new(2.2, 3.75), radius: 0.5 },
        Spur { center: Vector2::new(2.8, 3.1), radius: 0.5 },
    ]
}
