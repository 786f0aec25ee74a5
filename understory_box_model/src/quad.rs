// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Point, Rect, Shape};

/// A quadrilateral with named corners.
///
/// Corners are stored in clockwise order for a y-down coordinate space:
/// top-left, top-right, bottom-right, bottom-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    /// Top-left corner.
    pub top_left: Point,
    /// Top-right corner.
    pub top_right: Point,
    /// Bottom-right corner.
    pub bottom_right: Point,
    /// Bottom-left corner.
    pub bottom_left: Point,
}

impl Quad {
    /// Quad from four corners in clockwise order starting at the top-left.
    pub const fn new(
        top_left: Point,
        top_right: Point,
        bottom_right: Point,
        bottom_left: Point,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// The axis-aligned quad covering `rect`.
    pub const fn from_rect(rect: Rect) -> Self {
        Self::new(
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        )
    }

    /// The four corners, clockwise from the top-left.
    pub const fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// The corners as a closed ring: the four corners followed by the first again.
    pub const fn ring(&self) -> [Point; 5] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
            self.top_left,
        ]
    }

    /// A closed path through the corners.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.top_left);
        path.line_to(self.top_right);
        path.line_to(self.bottom_right);
        path.line_to(self.bottom_left);
        path.close_path();
        path
    }

    /// Enclosed area (always non-negative).
    pub fn area(&self) -> f64 {
        let [a, b, c, d] = self.corners();
        let twice = (a.x * b.y - b.x * a.y)
            + (b.x * c.y - c.x * b.y)
            + (c.x * d.y - d.x * c.y)
            + (d.x * a.y - a.x * d.y);
        let half = twice * 0.5;
        if half < 0.0 { -half } else { half }
    }

    /// Axis-aligned bounding box.
    pub fn bounding_box(&self) -> Rect {
        let [a, b, c, d] = self.corners();
        Rect::from_points(a, b).union_pt(c).union_pt(d)
    }

    /// Whether `pt` lies inside the quad, using the nonzero winding rule.
    ///
    /// Boundary points follow Kurbo's winding conventions; the right and bottom
    /// edges of the bounding box are exclusive.
    pub fn contains(&self, pt: Point) -> bool {
        self.bounding_box().contains(pt) && self.to_path().contains(pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_closes_on_first_corner() {
        let quad = Quad::from_rect(Rect::new(1.0, 2.0, 3.0, 4.0));
        let ring = quad.ring();
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[0], Point::new(1.0, 2.0));
        assert_eq!(ring[2], Point::new(3.0, 4.0));
    }

    #[test]
    fn area_of_trapezoid() {
        // Parallel sides 10 and 6, height 2.
        let quad = Quad::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(8.0, 2.0),
            Point::new(2.0, 2.0),
        );
        assert_eq!(quad.area(), 16.0);
    }

    #[test]
    fn contains_interior_not_exterior() {
        let quad = Quad::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(8.0, 2.0),
            Point::new(2.0, 2.0),
        );
        assert!(quad.contains(Point::new(5.0, 1.0)));
        assert!(!quad.contains(Point::new(0.5, 1.5)));
        assert!(!quad.contains(Point::new(5.0, 3.0)));
    }

    #[test]
    fn bounding_box_spans_corners() {
        let quad = Quad::new(
            Point::new(1.0, 0.0),
            Point::new(9.0, 1.0),
            Point::new(8.0, 5.0),
            Point::new(0.0, 4.0),
        );
        assert_eq!(quad.bounding_box(), Rect::new(0.0, 0.0, 9.0, 5.0));
    }
}
