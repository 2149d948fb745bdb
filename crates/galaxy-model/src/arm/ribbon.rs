//! Ribbon construction: width-offset borders around a spine and the closed
//! polygon ring they bound, plus point containment on the ring.

use nalgebra::Vector2;
use serde::Serialize;

use super::spine::Spine;

/// Closed simple polygon; endpoints connect implicitly.
///
/// Simplicity holds for the calibrated arm inputs, not for arbitrary rings.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Ring {
    pub points: Vec<Vector2<f64>>,
}

impl Ring {
    /// Even-odd containment (horizontal ray crossing count).
    ///
    /// Boundary points are not reliably classified; the ring edges are a
    /// measure-zero set and the calibrated queries never land on them.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let pts = &self.points;
        if pts.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = pts.len() - 1;
        for i in 0..pts.len() {
            let (a, b) = (pts[i], pts[j]);
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Inner and outer offset borders of a spine.
///
/// Forward differences define the local tangent, so the first spine sample
/// has none and is dropped: each border has `spine.len() - 1` points.
pub fn border_points(spine: &Spine) -> (Vec<Vector2<f64>>, Vec<Vector2<f64>>) {
    let pts = &spine.points;
    let m = pts.len().saturating_sub(1);
    let mut inner = Vec::with_capacity(m);
    let mut outer = Vec::with_capacity(m);
    for i in 1..pts.len() {
        let d = pts[i] - pts[i - 1];
        // Rotate the tangent by +90 degrees for the inner normal.
        let n = Vector2::new(-d.y, d.x);
        let norm = n.norm();
        debug_assert!(norm > 0.0);
        let unit = n / norm;
        let w = spine.width[i];
        inner.push(pts[i] + unit * w);
        outer.push(pts[i] - unit * w);
    }
    (inner, outer)
}

/// Close the two borders into a ribbon ring: inner border in order, outer
/// border reversed.
pub fn assemble_ring(inner: Vec<Vector2<f64>>, outer: Vec<Vector2<f64>>) -> Ring {
    let mut points = inner;
    points.extend(outer.into_iter().rev());
    Ring { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Ring {
        Ring {
            points: vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(2.0, 0.0),
                Vector2::new(2.0, 2.0),
                Vector2::new(0.0, 2.0),
            ],
        }
    }

    #[test]
    fn square_containment() {
        let sq = square();
        assert!(sq.contains(Vector2::new(1.0, 1.0)));
        assert!(!sq.contains(Vector2::new(3.0, 1.0)));
        assert!(!sq.contains(Vector2::new(-0.5, 0.5)));
        assert!(!sq.contains(Vector2::new(1.0, 2.5)));
    }

    #[test]
    fn concave_ring_containment() {
        // L-shape: the notch at the upper right is outside.
        let ring = Ring {
            points: vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(3.0, 0.0),
                Vector2::new(3.0, 1.0),
                Vector2::new(1.0, 1.0),
                Vector2::new(1.0, 3.0),
                Vector2::new(0.0, 3.0),
            ],
        };
        assert!(ring.contains(Vector2::new(0.5, 2.0)));
        assert!(ring.contains(Vector2::new(2.0, 0.5)));
        assert!(!ring.contains(Vector2::new(2.0, 2.0)));
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        let ring = Ring { points: vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0)] };
        assert!(!ring.contains(Vector2::new(0.5, 0.5)));
    }
}
