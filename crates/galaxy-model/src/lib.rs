//! Geometric model of a disk galaxy's visible spiral structure.
//!
//! Six ribbon-shaped spiral-arm regions in the galactocentric plane, a fixed
//! set of circular spurs, and a point-classification query against the
//! resulting regions. The model is a deterministic geometric approximation
//! built from fixed calibration constants, not a physical simulation.
//!
//! Scope
//! - Celestial-coordinate conversion happens upstream: callers pass planar
//!   galactocentric (x, y) in kpc.
//! - Rendering happens downstream: the model exports spines, polygon rings,
//!   spur disks, and the bar ellipse as plain data.

pub mod arm;
pub mod galaxy;
pub mod registry;
pub mod spur;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use galaxy::{BarEllipse, Category, Galaxy};
pub use nalgebra::Vector2 as Vec2;
pub use registry::RegistryError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arm::{Arm, ArmKind, ArmParams, Ring, Spine};
    pub use crate::galaxy::{BarEllipse, Category, Galaxy};
    pub use crate::registry::{CoordinateRegistry, RegistryError};
    pub use crate::spur::{standard_spurs, Spur};
    pub use nalgebra::Vector2 as Vec2;
}
