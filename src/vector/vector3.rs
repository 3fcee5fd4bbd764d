//! # Vector3 Module
//!
//! This module provides the `Vector3` value type: three `f64` components used
//! interchangeably as a displacement in 3D space or as a point in 3D space.
//!
//! ## Value Semantics
//!
//! `Vector3` is `Copy` and carries no hidden state. Every operation reads the
//! components of its inputs and returns a fresh value; nothing mutates in
//! place. Results follow IEEE 754 rules without special cases, so dividing by
//! zero or normalizing the zero vector yields `inf`/`NaN` components rather
//! than an error.
//!
//! ## Vectors vs Points
//!
//! The arithmetic on both interpretations coincides, but the API keeps the
//! framing apart:
//! - [`Vector3::subtract`] is the difference of two vectors
//! - [`subtract_points`] is the displacement from one point to another
//! - [`distance`] is the length of that displacement
//!
//! ## Approximate Comparisons
//!
//! `PartialEq` compares components exactly. The named predicates
//! ([`Vector3::equal`], [`Vector3::differ`], [`Vector3::lesser_or_equal`],
//! [`Vector3::greater_or_equal`]) apply the per-axis tolerance
//! [`THRESHOLD`](crate::constants::THRESHOLD) instead.
//!
//! ## Examples
//!
//! ```rust
//! use math3d::constants::{UNIT_X, UNIT_Y, UNIT_Z};
//! use math3d::Vector3;
//!
//! let sum = UNIT_X + UNIT_Y;
//! assert_eq!(sum, Vector3::new(1.0, 1.0, 0.0));
//!
//! assert_eq!(UNIT_X.dot(UNIT_Y), 0.0);
//! assert!(UNIT_X.cross(UNIT_Y).equal(UNIT_Z));
//! ```

use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

use crate::constants::THRESHOLD;
use crate::Result;

/// Three-dimensional vector or point
///
/// Holds the three components of a displacement or a position. The
/// interpretation depends on context; the representation is the same.
///
/// Serializes as an object with the keys `x`, `y` and `z`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from its three components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// The zero vector (origin)
    pub const fn zero() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// For a point this is the distance from the origin.
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    ///
    /// let v = Vector3::new(3.0, 4.0, 0.0);
    /// assert_eq!(v.magnitude(), 5.0);
    /// ```
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the vector scaled to unit magnitude
    ///
    /// Divides every component by [`magnitude`](Self::magnitude). The zero
    /// vector is not special-cased: its components come back as `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
    /// assert!(unit.equal(Vector3::new(0.6, 0.8, 0.0)));
    ///
    /// assert!(Vector3::zero().normalize().x.is_nan());
    /// ```
    pub fn normalize(self) -> Vector3 {
        self.divide(self.magnitude())
    }

    /// Divides every component by `k`
    ///
    /// `k == 0.0` yields `inf` or `NaN` components.
    pub fn divide(self, k: f64) -> Vector3 {
        Vector3 {
            x: self.x / k,
            y: self.y / k,
            z: self.z / k,
        }
    }

    /// Multiplies every component by `k`
    pub fn multiply(self, k: f64) -> Vector3 {
        Vector3 {
            x: self.x * k,
            y: self.y * k,
            z: self.z * k,
        }
    }

    /// Component-wise sum of two vectors
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Component-wise difference `self - other`
    ///
    /// For the displacement between two points use [`subtract_points`].
    pub fn subtract(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Calculates the dot product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::constants::{UNIT_X, UNIT_Y};
    ///
    /// assert_eq!(UNIT_X.dot(UNIT_Y), 0.0);
    /// assert_eq!(UNIT_X.dot(UNIT_X), 1.0);
    /// ```
    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the right-handed cross product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    ///
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// let b = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.cross(b), Vector3::new(-3.0, 6.0, -3.0));
    /// ```
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Reflects the vector off a surface with the given normal
    ///
    /// Computed as `(self - normal) * (2 * self·normal)`. Note that this is
    /// not the textbook reflection `self - 2(self·normal)normal`; callers
    /// relying on this result get exactly the formula above.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    ///
    /// let v = Vector3::new(1.0, 1.0, 0.0);
    /// let n = Vector3::new(0.0, 1.0, 0.0);
    /// assert_eq!(v.reflect(n), Vector3::new(2.0, 0.0, 0.0));
    /// ```
    pub fn reflect(self, normal: Vector3) -> Vector3 {
        self.subtract(normal).multiply(self.dot(normal) * 2.0)
    }

    /// True if every axis differs by strictly less than `THRESHOLD`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    ///
    /// let origin = Vector3::zero();
    /// assert!(origin.equal(Vector3::new(0.0, 0.0, 0.000005)));
    /// assert!(!origin.equal(Vector3::new(0.0, 0.0, 0.00002)));
    /// ```
    pub fn equal(self, other: Vector3) -> bool {
        (self.x - other.x).abs() < THRESHOLD
            && (self.y - other.y).abs() < THRESHOLD
            && (self.z - other.z).abs() < THRESHOLD
    }

    /// Negation of [`equal`](Self::equal)
    pub fn differ(self, other: Vector3) -> bool {
        !self.equal(other)
    }

    /// True if on every axis `self` is smaller than `other` or within
    /// `THRESHOLD` above it
    pub fn lesser_or_equal(self, other: Vector3) -> bool {
        self.x - other.x <= THRESHOLD
            && self.y - other.y <= THRESHOLD
            && self.z - other.z <= THRESHOLD
    }

    /// True if on every axis `self` is greater than `other` or within
    /// `THRESHOLD` below it
    pub fn greater_or_equal(self, other: Vector3) -> bool {
        other.x - self.x <= THRESHOLD
            && other.y - self.y <= THRESHOLD
            && other.z - self.z <= THRESHOLD
    }

    /// Writes the text form (`[x.xxx, y.xxx, z.xxx]`) to `writer`
    ///
    /// No trailing newline is written.
    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }

    /// Prints the text form to standard output, without a trailing newline
    pub fn print(self) -> Result<()> {
        log::trace!("printing {:?} to stdout", self);
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)?;
        handle.flush()?;
        Ok(())
    }
}

/// Returns the vector that goes from `point_b` to `point_a` (`point_a - point_b`)
///
/// # Examples
///
/// ```rust
/// use math3d::{subtract_points, Vector3};
///
/// let a = Vector3::new(5.0, 5.0, 5.0);
/// let b = Vector3::new(1.0, 2.0, 3.0);
/// assert_eq!(subtract_points(a, b), Vector3::new(4.0, 3.0, 2.0));
/// ```
pub fn subtract_points(point_a: Vector3, point_b: Vector3) -> Vector3 {
    Vector3 {
        x: point_a.x - point_b.x,
        y: point_a.y - point_b.y,
        z: point_a.z - point_b.z,
    }
}

/// Returns the Euclidean distance between two points
///
/// # Examples
///
/// ```rust
/// use math3d::{distance, Vector3};
///
/// let a = Vector3::new(1.0, 1.0, 1.0);
/// let b = Vector3::new(4.0, 5.0, 1.0);
/// assert_eq!(distance(a, b), 5.0);
/// ```
pub fn distance(point_a: Vector3, point_b: Vector3) -> f64 {
    subtract_points(point_a, point_b).magnitude()
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}, {:.3}]", self.x, self.y, self.z)
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::add(self, other)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        self.subtract(other)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        self.multiply(scalar)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vector: Vector3) -> Vector3 {
        vector.multiply(self)
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        self.divide(scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

// nalgebra interop
impl From<na::Vector3<f64>> for Vector3 {
    fn from(vec: na::Vector3<f64>) -> Self {
        Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector3> for na::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        na::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{UNIT_X, UNIT_Y, UNIT_Z, ZERO};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;

    #[test]
    fn test_vector_creation() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);

        assert_eq!(Vector3::zero(), ZERO);
        assert_eq!(Vector3::default(), ZERO);
    }

    #[test]
    fn test_magnitude_calculation() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);

        for unit in [UNIT_X, UNIT_Y, UNIT_Z] {
            assert_abs_diff_eq!(unit.magnitude(), 1.0, epsilon = THRESHOLD);
        }

        assert_eq!(ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let normalized = Vector3::new(3.0, 4.0, 0.0).normalize();
        assert_relative_eq!(normalized.magnitude(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(normalized.x, 0.6, epsilon = 1e-15);
        assert_relative_eq!(normalized.y, 0.8, epsilon = 1e-15);
        assert_eq!(normalized.z, 0.0);

        // Normalizing twice changes nothing
        let v = Vector3::new(-2.5, 7.0, 0.125);
        assert!(v.normalize().normalize().equal(v.normalize()));
    }

    #[test]
    fn test_normalize_zero_propagates_nan() {
        let n = ZERO.normalize();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
        assert!(n.z.is_nan());
    }

    #[test]
    fn test_divide_by_zero_propagates_infinity() {
        let v = Vector3::new(1.0, -1.0, 0.0).divide(0.0);
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_dot_product() {
        assert_eq!(UNIT_X.dot(UNIT_Y), 0.0);
        assert_eq!(UNIT_X.dot(UNIT_Z), 0.0);
        assert_eq!(UNIT_Y.dot(UNIT_Z), 0.0);
        assert_eq!(UNIT_X.dot(UNIT_X), 1.0);

        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b), 12.0);
    }

    #[test]
    fn test_cross_product() {
        // Right-hand rule
        assert_eq!(UNIT_X.cross(UNIT_Y), UNIT_Z);
        assert_eq!(UNIT_Y.cross(UNIT_Z), UNIT_X);
        assert_eq!(UNIT_Z.cross(UNIT_X), UNIT_Y);

        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(b), Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(b.cross(a), Vector3::new(3.0, -6.0, 3.0));
        assert!(a.cross(b).equal(-b.cross(a)));
    }

    #[test]
    fn test_unit_axes_scenario() {
        let v1 = Vector3::new(1.0, 0.0, 0.0);
        let v2 = Vector3::new(0.0, 1.0, 0.0);

        assert_eq!(v1.add(v2), Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(v1.dot(v2), 0.0);
        assert_eq!(v1.cross(v2), UNIT_Z);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(a.add(b), a + b);

        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(b.subtract(a), b - a);

        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a.multiply(2.0), a * 2.0);

        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(a.divide(2.0), a / 2.0);

        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_subtract_points_and_distance() {
        let a = Vector3::new(5.0, 5.0, 5.0);
        let b = Vector3::new(1.0, 2.0, 3.0);

        // Arithmetic matches the method form; framing differs
        assert_eq!(subtract_points(a, b), a.subtract(b));
        assert_eq!(subtract_points(a, b), Vector3::new(4.0, 3.0, 2.0));

        assert_relative_eq!(distance(a, b), 29.0_f64.sqrt(), epsilon = 1e-15);
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_reflect_uses_literal_formula() {
        let v = Vector3::new(1.0, 1.0, 0.0);
        let n = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(v.reflect(n), Vector3::new(2.0, 0.0, 0.0));

        let v = Vector3::new(1.0, -2.0, 3.0);
        let n = Vector3::new(0.5, 0.5, 0.5);
        // v·n = 1.0, (v - n) * 2.0
        assert_eq!(v.reflect(n), Vector3::new(1.0, -5.0, 5.0));

        // Orthogonal normal collapses to zero
        assert_eq!(UNIT_X.reflect(UNIT_Y), ZERO);
    }

    #[rstest]
    #[case(Vector3::new(0.0, 0.0, 0.000005), true)]
    #[case(Vector3::new(0.0, 0.0, -0.000005), true)]
    #[case(Vector3::new(0.000009, -0.000009, 0.000009), true)]
    #[case(Vector3::new(0.0, 0.0, 0.00002), false)]
    #[case(Vector3::new(0.00002, 0.0, 0.0), false)]
    #[case(Vector3::new(0.0, -0.00002, 0.0), false)]
    fn test_equal_threshold(#[case] other: Vector3, #[case] expected: bool) {
        assert_eq!(ZERO.equal(other), expected);
        assert_eq!(other.equal(ZERO), expected);
        assert_eq!(ZERO.differ(other), !expected);
    }

    #[test]
    fn test_equal_nan_never_matches() {
        let nan = Vector3::new(f64::NAN, 0.0, 0.0);
        assert!(!nan.equal(nan));
        assert!(nan.differ(nan));
    }

    #[rstest]
    #[case(Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0), true, true)]
    #[case(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0), true, false)]
    #[case(Vector3::new(1.0, 1.0, 1.0), Vector3::new(0.0, 0.0, 0.0), false, true)]
    #[case(Vector3::new(0.0, 2.0, 0.0), Vector3::new(1.0, 1.0, 1.0), false, false)]
    #[case(Vector3::new(0.000005, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0), true, true)]
    #[case(Vector3::new(0.00002, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0), false, true)]
    fn test_ordering_predicates(
        #[case] a: Vector3,
        #[case] b: Vector3,
        #[case] lesser: bool,
        #[case] greater: bool,
    ) {
        assert_eq!(a.lesser_or_equal(b), lesser);
        assert_eq!(a.greater_or_equal(b), greater);
        // Mirror relationship
        assert_eq!(b.greater_or_equal(a), lesser);
        assert_eq!(b.lesser_or_equal(a), greater);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ZERO.to_string(), "[0.000, 0.000, 0.000]");
        assert_eq!(
            Vector3::new(1.0, -2.5, 3.14159).to_string(),
            "[1.000, -2.500, 3.142]"
        );
        assert_eq!(
            Vector3::new(1234.5678, 0.0004, -0.0006).to_string(),
            "[1234.568, 0.000, -0.001]"
        );
    }

    #[test]
    fn test_write_to_has_no_trailing_newline() {
        let mut buffer = Vec::new();
        Vector3::new(0.6, 0.8, 0.0)
            .write_to(&mut buffer)
            .expect("writing to a Vec cannot fail");
        assert_eq!(String::from_utf8(buffer).unwrap(), "[0.600, 0.800, 0.000]");
    }

    #[test]
    fn test_nalgebra_conversions() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let vec: na::Vector3<f64> = v.into();
        assert_eq!(vec.x, 1.0);
        assert_eq!(vec.y, 2.0);
        assert_eq!(vec.z, 3.0);

        // Cross products agree with nalgebra
        let other = Vector3::new(-4.0, 0.5, 2.0);
        let other_vec: na::Vector3<f64> = other.into();
        let na_cross: na::Vector3<f64> = vec.cross(&other_vec);
        assert_eq!(Vector3::from(na_cross), v.cross(other));

        assert_eq!(Vector3::from(vec), v);
    }

    #[test]
    fn test_array_conversions() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }
}
