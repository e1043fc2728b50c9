//! Axis-aligned rectangular regions.

use crate::dimensions::Dimensions;
use crate::errors::GeometryError;
use crate::point::Point;

/// A position and size within a cartesian coordinate system.
///
/// Bounds and corner points are derived once from the origin and dimensions:
/// `right - left == width` and `bottom - top == height`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Region {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
    top_left_point: Point,
    top_right_point: Point,
    bottom_right_point: Point,
    bottom_left_point: Point,
    dimensions: Dimensions,
}

impl Region {
    /// Create a region with its top-left corner at `origin`.
    pub fn new(origin: Point, dimensions: Dimensions) -> Self {
        let top = origin.y();
        let left = origin.x();
        let right = left + dimensions.width();
        let bottom = top + dimensions.height();

        Self {
            top,
            right,
            bottom,
            left,
            top_left_point: origin,
            top_right_point: Point::new(right, top),
            bottom_right_point: Point::new(right, bottom),
            bottom_left_point: Point::new(left, bottom),
            dimensions,
        }
    }

    /// Create the region spanning two opposite corner points, given in any order.
    pub fn from_corners(a: Point, b: Point) -> Result<Self, GeometryError> {
        let left = a.x().min(b.x());
        let top = a.y().min(b.y());
        let dimensions = Dimensions::new(a.x().max(b.x()) - left, a.y().max(b.y()) - top)?;
        Ok(Self::new(Point::try_new(left, top)?, dimensions))
    }

    /// The smallest region covering every region in `regions`.
    ///
    /// Returns `None` when `regions` is empty.
    pub fn enclosing<'a>(regions: impl IntoIterator<Item = &'a Region>) -> Option<Region> {
        regions
            .into_iter()
            .fold(None, |acc: Option<Region>, region| match acc {
                Some(acc) => Some(acc.union(region)),
                None => Some(*region),
            })
    }

    /// Compute union (bounding box) with another region.
    pub fn union(&self, other: &Region) -> Region {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right.max(other.right);
        let bottom = self.bottom.max(other.bottom);

        Region::new(
            Point::new(left, top),
            Dimensions::from_validated(right - left, bottom - top),
        )
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top_left_point(&self) -> Point {
        self.top_left_point
    }

    pub fn top_right_point(&self) -> Point {
        self.top_right_point
    }

    pub fn bottom_right_point(&self) -> Point {
        self.bottom_right_point
    }

    pub fn bottom_left_point(&self) -> Point {
        self.bottom_left_point
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> f64 {
        self.dimensions.width()
    }

    pub fn height(&self) -> f64 {
        self.dimensions.height()
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    /// Check if a point is inside the region (edges included).
    pub fn contains(&self, point: Point) -> bool {
        point.x() >= self.left
            && point.x() <= self.right
            && point.y() >= self.top
            && point.y() <= self.bottom
    }
}
