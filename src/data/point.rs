//! A point (or direction) in 3D space. Export projects onto the XY plane.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    /// Create a point in the XY plane
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (*self - *other).length()
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Affine blend `(1 - t) * self + t * other`, applied per coordinate
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new_3d(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Coordinate-wise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new_3d(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new_3d(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new_3d(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new_3d(-self.x, -self.y, -self.z)
    }
}

impl From<Point> for Vector3<f64> {
    fn from(p: Point) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3<f64>> for Point {
    fn from(v: Vector3<f64>) -> Self {
        Point::new_3d(v.x, v.y, v.z)
    }
}
