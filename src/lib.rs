//! math3d: a 3D vector and point value type
//!
//! This crate provides `Vector3`, three `f64` components used as either a
//! displacement or a position in 3D space, together with its arithmetic,
//! dot/cross products, reflection, distance and tolerance-based comparisons.
//!
//! Floating point faults are never errors: division by zero and `NaN`/`inf`
//! inputs propagate through results following IEEE 754. The only fallible
//! operations are decoding a vector from a map or JSON text and writing its
//! text form to an output stream.

use thiserror::Error;

pub mod constants;
pub mod vector;

// Re-export commonly used types
pub use constants::{THRESHOLD, UNIT_X, UNIT_Y, UNIT_Z, ZERO};
pub use vector::{distance, subtract_points, Vector3};

/// Main error type for the math3d library
#[derive(Debug, Error)]
pub enum Math3dError {
    #[error("Missing component: {0}")]
    MissingComponent(&'static str),

    #[error("Invalid input for component {axis}: expected a number, found {found}")]
    InvalidInput { axis: &'static str, found: String },

    #[error("Component {axis} is not finite: {value}")]
    NonFinite { axis: &'static str, value: f64 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for math3d operations
pub type Result<T> = std::result::Result<T, Math3dError>;
