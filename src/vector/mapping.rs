//! Map and JSON interchange for `Vector3`
//!
//! A vector is exchanged with serialization layers as a string-keyed map with
//! exactly the keys `"x"`, `"y"` and `"z"`. Decoding is strict: a missing key
//! or a non-numeric value is reported as a [`Math3dError`] rather than a panic.

use serde_json::Value;
use std::collections::HashMap;

use super::Vector3;
use crate::{Math3dError, Result};

/// Keys of the map representation, in component order
const AXES: [&str; 3] = ["x", "y", "z"];

impl Vector3 {
    /// Returns the map representation `{"x": x, "y": y, "z": z}`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    ///
    /// let map = Vector3::new(1.0, 2.0, 3.0).as_map();
    /// assert_eq!(map["x"], 1.0);
    /// assert_eq!(map["y"], 2.0);
    /// assert_eq!(map["z"], 3.0);
    /// ```
    pub fn as_map(self) -> HashMap<String, f64> {
        AXES.iter()
            .zip([self.x, self.y, self.z])
            .map(|(axis, value)| (axis.to_string(), value))
            .collect()
    }

    /// Builds a vector from the `"x"`, `"y"` and `"z"` entries of a map
    ///
    /// Inverse of [`as_map`](Self::as_map). Extra keys are ignored.
    ///
    /// # Errors
    ///
    /// [`Math3dError::MissingComponent`] if a key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    ///
    /// let v = Vector3::new(1.5, -2.0, 0.0);
    /// assert_eq!(Vector3::from_map(&v.as_map()).unwrap(), v);
    /// ```
    pub fn from_map(map: &HashMap<String, f64>) -> Result<Vector3> {
        let [x, y, z] = AXES;
        Ok(Vector3::new(
            component(map, x)?,
            component(map, y)?,
            component(map, z)?,
        ))
    }

    /// Builds a vector from a loosely typed map, such as a decoded JSON object
    ///
    /// Every `"x"`, `"y"` and `"z"` entry must hold a JSON number. Integers
    /// are widened to `f64`; extra keys are ignored.
    ///
    /// # Errors
    ///
    /// - [`Math3dError::MissingComponent`] if a key is absent
    /// - [`Math3dError::InvalidInput`] if a value is not a number
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    /// use serde_json::{json, Value};
    /// use std::collections::HashMap;
    ///
    /// let map: HashMap<String, Value> =
    ///     serde_json::from_value(json!({"x": 1.5, "y": -2, "z": 0.0})).unwrap();
    /// let v = Vector3::from_value_map(&map).unwrap();
    /// assert_eq!(v, Vector3::new(1.5, -2.0, 0.0));
    /// ```
    pub fn from_value_map(map: &HashMap<String, Value>) -> Result<Vector3> {
        let [x, y, z] = AXES;
        Ok(Vector3::new(
            numeric_component(map, x)?,
            numeric_component(map, y)?,
            numeric_component(map, z)?,
        ))
    }

    /// Encodes the vector as a compact JSON object
    ///
    /// JSON has no representation for `NaN` or infinities, so only finite
    /// vectors encode.
    ///
    /// # Errors
    ///
    /// [`Math3dError::NonFinite`] naming the first non-finite component.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    ///
    /// let json = Vector3::new(1.0, -2.5, 0.0).to_json().unwrap();
    /// assert_eq!(json, r#"{"x":1.0,"y":-2.5,"z":0.0}"#);
    ///
    /// assert!(Vector3::new(f64::NAN, 0.0, 0.0).to_json().is_err());
    /// ```
    pub fn to_json(self) -> Result<String> {
        for (axis, value) in AXES.into_iter().zip([self.x, self.y, self.z]) {
            if !value.is_finite() {
                log::debug!("cannot encode non-finite '{}' ({}) as JSON", axis, value);
                return Err(Math3dError::NonFinite { axis, value });
            }
        }
        Ok(serde_json::to_string(&self)?)
    }

    /// Decodes a vector from a JSON object with numeric `x`, `y` and `z` fields
    ///
    /// # Errors
    ///
    /// [`Math3dError::SerializationError`] if the text is not a JSON object
    /// with all three numeric fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use math3d::Vector3;
    ///
    /// let v = Vector3::from_json(r#"{"x": 0.6, "y": 0.8, "z": 0.0}"#).unwrap();
    /// assert_eq!(v, Vector3::new(0.6, 0.8, 0.0));
    ///
    /// assert!(Vector3::from_json(r#"{"x": 0.6, "y": 0.8}"#).is_err());
    /// ```
    pub fn from_json(json_str: &str) -> Result<Vector3> {
        serde_json::from_str(json_str).map_err(|e| {
            log::debug!("rejected vector JSON: {}", e);
            Math3dError::from(e)
        })
    }
}

fn component(map: &HashMap<String, f64>, axis: &'static str) -> Result<f64> {
    map.get(axis).copied().ok_or_else(|| {
        log::debug!("vector map is missing the '{}' component", axis);
        Math3dError::MissingComponent(axis)
    })
}

/// Reads one numeric component out of a loosely typed map
fn numeric_component(map: &HashMap<String, Value>, axis: &'static str) -> Result<f64> {
    let value = map.get(axis).ok_or_else(|| {
        log::debug!("vector map is missing the '{}' component", axis);
        Math3dError::MissingComponent(axis)
    })?;

    value.as_f64().ok_or_else(|| {
        log::debug!("vector map holds non-numeric '{}': {}", axis, value);
        Math3dError::InvalidInput {
            axis,
            found: value.to_string(),
        }
    })
}

impl From<Vector3> for HashMap<String, f64> {
    fn from(v: Vector3) -> Self {
        v.as_map()
    }
}

impl TryFrom<&HashMap<String, f64>> for Vector3 {
    type Error = Math3dError;

    fn try_from(map: &HashMap<String, f64>) -> Result<Self> {
        Vector3::from_map(map)
    }
}

impl TryFrom<&HashMap<String, Value>> for Vector3 {
    type Error = Math3dError;

    fn try_from(map: &HashMap<String, Value>) -> Result<Self> {
        Vector3::from_value_map(map)
    }
}
