//! Core geometry types for fp-playground.
//!
//! ## Rust Lesson #1: Structs & Derives
//!
//! A point is just two numbers, so we make it a small `Copy` struct.
//! `#[derive(...)]` generates the boilerplate:
//! - `Debug` = print with `{:?}`
//! - `Clone` + `Copy` = pass by value without thinking about ownership
//! - `PartialEq` = compare with `==`
//! - `Serialize` / `Deserialize` = read and write it from YAML/JSON via serde

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A scalar used as a radius or threshold.
///
/// A type alias gives the number a name without adding a wrapper:
/// `Distance` and `f64` are interchangeable.
pub type Distance = f64;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Positions and points are the same thing, the name just reads better
/// when talking about ships.
pub type Position = Point;

/// A polygon with an outer boundary and optional holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Outer boundary vertices
    pub outer: Vec<Point>,
    /// Interior holes
    pub holes: Vec<Vec<Point>>,
    /// Optional ID from the SVG element
    pub id: Option<String>,
}

impl Point {
    /// Called as: `Point::new(1.0, 2.0)`
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, `(0, 0)`.
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> Distance {
        (*self - other).length()
    }

    /// Distance to the origin.
    #[inline]
    pub fn length(&self) -> Distance {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// True if both coordinates are finite (no NaN or infinity).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ============================================================================
// OPERATORS
// ============================================================================
//
// ## Rust Lesson #2: Operator Overloading
//
// Operators are traits in `std::ops`. Implement `Sub` and `a - b` works.
// You can't invent new operators like `>>>` or `??` the way some languages
// allow, only overload the existing set. Anything else becomes a named
// function, which is usually clearer anyway.

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Polygon {
    /// Create a simple polygon with no holes.
    pub fn new(outer: Vec<Point>) -> Self {
        Self { outer, holes: Vec::new(), id: None }
    }

    /// Create a polygon with holes.
    pub fn with_holes(outer: Vec<Point>, holes: Vec<Vec<Point>>) -> Self {
        Self { outer, holes, id: None }
    }

    /// Create a polygon with an ID.
    pub fn with_id(outer: Vec<Point>, id: Option<String>) -> Self {
        Self { outer, holes: Vec::new(), id }
    }

    /// Get the bounding box as (min_x, min_y, max_x, max_y).
    ///
    /// ## Rust Lesson #3: Option<T>
    ///
    /// No `null`: an empty polygon has no bounding box, so we return `None`
    /// and the caller has to deal with it.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        if self.outer.is_empty() {
            return None;
        }

        let min_x = self.outer.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = self.outer.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = self.outer.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = self.outer.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Some((min_x, min_y, max_x, max_y))
    }

    /// Check if a point is inside the polygon body (inside outer, not in any hole).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        if !point_in_polygon(p, &self.outer) {
            return false;
        }
        !self.holes.iter().any(|hole| point_in_polygon(p, hole))
    }
}

/// Test if a point is inside a ring using ray casting.
///
/// Casts a ray to the right and counts edge crossings.
/// Odd crossings = inside, even = outside. Rings with fewer than
/// three vertices contain nothing.
///
/// ## Rust Lesson #5: References & Slices
///
/// `&[Point]` is a borrowed view into any contiguous run of points:
/// a `Vec<Point>`, an array, or part of either.
#[inline]
pub fn point_in_polygon(p: Point, ring: &[Point]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (ring[i].x, ring[i].y);
        let (xj, yj) = (ring[j].x, ring[j].y);

        if ((yi > p.y) != (yj > p.y)) && (p.x < (xj - xi) * (p.y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ]
    }

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn point_length_is_distance_to_origin() {
        assert_eq!(Point::new(-3.0, 4.0).length(), 5.0);
        assert_eq!(Point::ORIGIN.length(), 0.0);
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 5.0);
        assert_eq!(a + b, Point::new(4.0, 7.0));
        assert_eq!(b - a, Point::new(2.0, 3.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(Point::from((1.0, 2.0)), a);
    }

    #[test]
    fn point_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn polygon_bbox() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(0.0, 5.0),
        ]);
        assert_eq!(poly.bounding_box(), Some((0.0, 0.0, 10.0, 5.0)));
    }

    #[test]
    fn empty_polygon_bbox() {
        let poly = Polygon::new(vec![]);
        assert_eq!(poly.bounding_box(), None);
    }

    #[test]
    fn ray_casting_square() {
        let ring = square(10.0);
        assert!(point_in_polygon(Point::new(5.0, 5.0), &ring));
        assert!(!point_in_polygon(Point::new(15.0, 5.0), &ring));
        assert!(!point_in_polygon(Point::new(-1.0, 5.0), &ring));
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        let ring = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(!point_in_polygon(Point::new(0.5, 0.5), &ring));
    }

    #[test]
    fn polygon_with_hole() {
        let hole = vec![
            Point::new(4.0, 4.0),
            Point::new(6.0, 4.0),
            Point::new(6.0, 6.0),
            Point::new(4.0, 6.0),
        ];
        let poly = Polygon::with_holes(square(10.0), vec![hole]);

        assert!(poly.contains(Point::new(2.0, 2.0)));
        assert!(!poly.contains(Point::new(5.0, 5.0)), "point in hole is outside the body");
        assert!(!poly.contains(Point::new(12.0, 5.0)));
    }
}
