//! Axis-aligned bounding box in the XY plane.

use crate::data::point::Point;

/// Axis-aligned box spanned by `min` and `max`.
///
/// An empty box has `min > max` on both axes and absorbs the first point
/// included into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    pub fn empty() -> Self {
        Self {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        points
            .into_iter()
            .fold(Self::empty(), |bbox, p| bbox.include_point(p))
    }

    /// Box around `center` with the given half extents
    pub fn around(center: Point, half_width: f64, half_height: f64) -> Self {
        Self {
            min: Point::new(center.x - half_width, center.y - half_height),
            max: Point::new(center.x + half_width, center.y + half_height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn include_point(self, p: &Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    pub fn union(self, other: &BoundingBox) -> Self {
        if other.is_empty() {
            return self;
        }
        self.include_point(&other.min).include_point(&other.max)
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.x - self.min.x
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.y - self.min.y
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pt;

    #[test]
    fn test_from_points_ignores_z() {
        let bbox = BoundingBox::from_points(&[pt!(1, 5, 100), pt!(-2, 3, -7), pt!(4, -1)]);
        assert_eq!(bbox.min, pt!(-2, -1));
        assert_eq!(bbox.max, pt!(4, 5));
        assert_eq!(bbox.width(), 6.0);
        assert_eq!(bbox.height(), 6.0);
    }

    #[test]
    fn test_empty_box() {
        let empty = BoundingBox::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.width(), 0.0);

        let single = BoundingBox::from_points(&[pt!(3, 3)]);
        assert!(!single.is_empty());
        assert_eq!(empty.union(&single), single);
        assert_eq!(single.union(&empty), single);
    }

    #[test]
    fn test_union() {
        let a = BoundingBox::around(pt!(0, 0), 1.0, 1.0);
        let b = BoundingBox::around(pt!(5, 5), 1.0, 2.0);
        let both = a.union(&b);
        assert_eq!(both.min, pt!(-1, -1));
        assert_eq!(both.max, pt!(6, 7));
    }
}
