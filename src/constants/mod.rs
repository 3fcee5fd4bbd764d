//! Constants module for vector calculations

use crate::vector::Vector3;

// Tolerance
/// Per-axis tolerance used by every approximate comparison
pub const THRESHOLD: f64 = 0.00001;

// Axes
/// Unit vector along the X axis
pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
/// Unit vector along the Y axis
pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
/// Unit vector along the Z axis
pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);
/// The origin
pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
