//! 3D Cartesian points for geodetic frame conversions.
//!
//! Geocentric positions are expressed as right-handed Cartesian triples in
//! meters. A batch of points is an ordered sequence; nothing in this library
//! reorders it, so output row *i* always corresponds to input row *i*.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geocentric Cartesian point (X, Y, Z) in meters.
///
/// The point has no identity beyond its position. Components are public for
/// direct access.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as a `[f64; 3]` array in (X, Y, Z) order.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a point from a `[f64; 3]` array in (X, Y, Z) order.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// True when all three components are finite reals.
    ///
    /// Non-finite coordinates violate the caller contract of the transform
    /// engine; see [`crate::TransformEngine::convert`].
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Euclidean distance to another point, in meters.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        libm::sqrt(dx * dx + dy * dy + dz * dz)
    }
}

/// Point + Point (componentwise, used for applying translation offsets)
impl std::ops::Add for Point3d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Point - Point
impl std::ops::Sub for Point3d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Point * scalar
impl std::ops::Mul<f64> for Point3d {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// scalar * Point
impl std::ops::Mul<Point3d> for f64 {
    type Output = Point3d;

    fn mul(self, point: Point3d) -> Point3d {
        point * self
    }
}

impl fmt::Display for Point3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_arrays() {
        let p = Point3d::new(1.0, 2.0, 3.0);
        assert_eq!(p.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Point3d::from_array([1.0, 2.0, 3.0]), p);
    }

    #[test]
    fn test_arithmetic() {
        let a = Point3d::new(1.0, 2.0, 3.0);
        let b = Point3d::new(10.0, 20.0, 30.0);

        assert_eq!(a + b, Point3d::new(11.0, 22.0, 33.0));
        assert_eq!(b - a, Point3d::new(9.0, 18.0, 27.0));
        assert_eq!(a * 2.0, Point3d::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
    }

    #[test]
    fn test_distance() {
        let a = Point3d::new(0.0, 3.0, 0.0);
        let b = Point3d::new(4.0, 0.0, 0.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point3d::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Point3d::new(f64::NAN, 2.0, 3.0).is_finite());
        assert!(!Point3d::new(1.0, f64::INFINITY, 3.0).is_finite());
        assert!(!Point3d::new(1.0, 2.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_display_formatting() {
        let p = Point3d::new(3000000.0, -141.25, 0.5);
        assert_eq!(format!("{}", p), "(3000000.0000, -141.2500, 0.5000)");
    }
}
