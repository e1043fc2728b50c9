//! Cartesian coordinates.

use glam::DVec2;

use crate::errors::GeometryError;
use crate::validation::is_number;

/// An immutable point in a cartesian coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point, failing if either coordinate is not a finite number.
    pub fn try_new(x: f64, y: f64) -> Result<Self, GeometryError> {
        if !is_number(x) || !is_number(y) {
            return Err(GeometryError::InvalidParams { x, y });
        }
        Ok(Self { x, y })
    }

    /// Create a point without checking the coordinates.
    ///
    /// Use [`Point::try_new`] for values that have not been validated.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Compare within an absolute tolerance.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<Point> for DVec2 {
    fn from(point: Point) -> Self {
        point.to_vec2()
    }
}

impl TryFrom<DVec2> for Point {
    type Error = GeometryError;

    fn try_from(v: DVec2) -> Result<Self, Self::Error> {
        Point::try_new(v.x, v.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
