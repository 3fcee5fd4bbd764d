//! Vector module
//!
//! - `vector3`: the `Vector3` value type, its arithmetic and comparisons
//! - `mapping`: conversion to and from string-keyed maps and JSON

pub mod mapping;
pub mod vector3;

// Re-export primary types for convenience
pub use self::vector3::{distance, subtract_points, Vector3};
