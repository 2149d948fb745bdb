//! The assembled galaxy model: six spiral arms, the spur set, the fixed bar
//! ellipse, and the coordinate registry, with the containment classifier.
//!
//! Arm and spur geometry is immutable after construction and may be queried
//! concurrently; the registry is the only mutable entity and wants a
//! single-writer discipline if shared across threads.

use nalgebra::Vector2;
use serde::Serialize;

use crate::arm::{Arm, ArmKind};
use crate::registry::{CoordinateRegistry, RegistryError};
use crate::spur::{standard_spurs, Spur};

/// Containment category of one query point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum Category {
    /// On neither an arm nor a spur.
    None = 0,
    /// On exactly one spiral arm.
    SpiralArm = 1,
    /// On a spur only.
    Spur = 2,
    /// On several regions: multiple arms, or an arm and a spur.
    Multiple = 3,
}

/// Simplified galactic-bar ellipse, exported for renderers only.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BarEllipse {
    pub center: Vector2<f64>,
    pub semi_major: f64,
    pub semi_minor: f64,
    pub position_angle_deg: f64,
}

/// The full model. Construction builds all six arms from their calibration
/// tables; everything but the registry is immutable afterwards.
#[derive(Clone, Debug)]
pub struct Galaxy {
    arms: Vec<Arm>,
    spurs: Vec<Spur>,
    bar: BarEllipse,
    registry: CoordinateRegistry,
}

impl Default for Galaxy {
    fn default() -> Self {
        Self::new()
    }
}

impl Galaxy {
    pub fn new() -> Self {
        Galaxy {
            arms: ArmKind::ALL.iter().map(|&k| Arm::build(k)).collect(),
            spurs: standard_spurs(),
            bar: BarEllipse {
                center: Vector2::new(0.0, 0.0),
                semi_major: 4.5,
                semi_minor: 1.6,
                position_angle_deg: 60.0,
            },
            registry: CoordinateRegistry::new(),
        }
    }

    /// Per-arm geometry (spines and polygon rings), for rendering.
    #[inline]
    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    #[inline]
    pub fn spurs(&self) -> &[Spur] {
        &self.spurs
    }

    #[inline]
    pub fn bar(&self) -> &BarEllipse {
        &self.bar
    }

    /// Current registry contents as parallel `(xs, ys)` slices.
    #[inline]
    pub fn coordinates(&self) -> (&[f64], &[f64]) {
        (self.registry.xs(), self.registry.ys())
    }

    /// Append plot coordinates; fails atomically on mismatched or empty
    /// input.
    pub fn add_coordinates(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), RegistryError> {
        self.registry.add(xs, ys)
    }

    /// Remove plot coordinates; never fails, emits notices on absent or
    /// ambiguous matches.
    pub fn remove_coordinates(&mut self, xs: &[f64], ys: &[f64]) {
        self.registry.remove(xs, ys)
    }

    fn arms_containing(&self, p: Vector2<f64>) -> Vec<ArmKind> {
        self.arms.iter().filter(|a| a.contains(p)).map(|a| a.kind).collect()
    }

    #[inline]
    fn on_spur(&self, p: Vector2<f64>) -> bool {
        self.spurs.iter().any(|s| s.contains(p))
    }

    /// Classify each `(x, y)` pair against the arm polygons and spur disks.
    ///
    /// Pure query: no mutation; `verbose` only emits one log line per point.
    /// In the verbose message, spiral-arm information takes precedence over
    /// spur information; the returned encoding still reports `Multiple` for
    /// a point on both.
    pub fn classify(&self, xs: &[f64], ys: &[f64], verbose: bool) -> Vec<Category> {
        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| {
                let p = Vector2::new(x, y);
                let arms = self.arms_containing(p);
                let on_spur = self.on_spur(p);
                if verbose {
                    report_location(x, y, &arms, on_spur);
                }
                encode(&arms, on_spur)
            })
            .collect()
    }
}

fn encode(arms: &[ArmKind], on_spur: bool) -> Category {
    if (on_spur && !arms.is_empty()) || arms.len() > 1 {
        Category::Multiple
    } else if on_spur {
        Category::Spur
    } else if arms.len() == 1 {
        Category::SpiralArm
    } else {
        Category::None
    }
}

fn report_location(x: f64, y: f64, arms: &[ArmKind], on_spur: bool) {
    if !arms.is_empty() {
        let names: Vec<&str> = arms.iter().map(|a| a.label()).collect();
        tracing::info!("({x}, {y}) is on [{}] spiral arm", names.join(", "));
    } else if on_spur {
        tracing::info!("({x}, {y}) is on a spur");
    } else {
        tracing::info!("({x}, {y}) is on nothing");
    }
}
