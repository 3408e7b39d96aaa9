//! Regions: areas of the plane described by a membership test.
//!
//! A region never stores a boundary. It is just a function answering
//! "is this point inside?". Small functions that build and combine those
//! tests (circles, shifts, unions...) cover a surprising number of shapes
//! without a single special case.
//!
//! ## Rust Lesson #7: Functions as Values
//!
//! Every closure in Rust has its own unnamed type, so two different
//! closures can't sit in the same variable. To store "some function
//! `Point -> bool`" we erase the type behind a trait object:
//!
//! ```text
//! Rc<dyn Fn(Point) -> bool>
//! ```
//!
//! - `dyn Fn(Point) -> bool` = any callable with that signature
//! - `Rc<...>` = shared ownership, so cloning a region is cheap and
//!   combinators can hold on to their inputs
//!
//! ```
//! use fp_playground::region::{circle, shift};
//! use fp_playground::Point;
//!
//! let ring = circle(5.0) - circle(2.0);
//! let moved = shift(Point::new(10.0, 0.0), ring);
//! assert!(moved.contains(Point::new(14.0, 0.0)));
//! assert!(!moved.contains(Point::new(10.0, 0.0)));
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, Not, Sub};
use std::rc::Rc;

use crate::geometry::{Distance, Point, Polygon};
use crate::seq::reduce;

/// A predicate over points.
///
/// Cloning shares the underlying closure.
#[derive(Clone)]
pub struct Region {
    test: Rc<dyn Fn(Point) -> bool>,
}

impl Region {
    /// Wrap any `Point -> bool` closure.
    ///
    /// `'static` means the closure owns everything it captured (use `move`).
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(Point) -> bool + 'static,
    {
        Self { test: Rc::new(test) }
    }

    /// Apply the predicate.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        (self.test)(point)
    }

    /// The whole plane. Identity for intersection.
    pub fn everywhere() -> Self {
        Region::new(|_| true)
    }

    /// The empty region. Identity for union.
    pub fn nowhere() -> Self {
        Region::new(|_| false)
    }

    /// Method form of [`shift`].
    pub fn shifted(self, offset: Point) -> Self {
        shift(offset, self)
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Region(<fn>)")
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// Points within `radius` of the origin.
///
/// A negative radius gives a region containing nothing, since no distance
/// is negative.
pub fn circle(radius: Distance) -> Region {
    Region::new(move |point| point.length() <= radius)
}

/// Points within `radius` of `center`.
pub fn circle_at(radius: Distance, center: Point) -> Region {
    Region::new(move |point| point.distance(center) <= radius)
}

/// Points inside a polygon's outer ring and outside its holes.
pub fn polygon(polygon: Polygon) -> Region {
    Region::new(move |point| polygon.contains(point))
}

// ============================================================================
// COMBINATORS
// ============================================================================
//
// ## Rust Lesson #8: `move` Closures
//
// Each combinator returns a closure that outlives the call that made it.
// `move` transfers the captured regions into the closure so nothing
// dangles once the function returns.

/// Test `region` at `point - offset`.
///
/// The content of `region` ends up moved by `+offset`: a circle around the
/// origin becomes a circle around `offset`.
pub fn shift(offset: Point, region: Region) -> Region {
    Region::new(move |point| region.contains(point - offset))
}

/// Logical NOT.
pub fn invert(region: Region) -> Region {
    Region::new(move |point| !region.contains(point))
}

/// Logical AND.
pub fn intersection(a: Region, b: Region) -> Region {
    Region::new(move |point| a.contains(point) && b.contains(point))
}

/// Logical OR.
pub fn union(a: Region, b: Region) -> Region {
    Region::new(move |point| a.contains(point) || b.contains(point))
}

/// Points in `region` but not in `minus`.
pub fn difference(region: Region, minus: Region) -> Region {
    intersection(region, invert(minus))
}

/// Union of any number of regions. No regions gives [`Region::nowhere`].
pub fn union_all(regions: impl IntoIterator<Item = Region>) -> Region {
    reduce(regions, Region::nowhere(), union)
}

/// Intersection of any number of regions. No regions gives [`Region::everywhere`].
pub fn intersection_all(regions: impl IntoIterator<Item = Region>) -> Region {
    reduce(regions, Region::everywhere(), intersection)
}

// ============================================================================
// OPERATORS
// ============================================================================
//
// `!a`, `a & b`, `a | b` and `a - b` read like the set algebra they stand
// for. They just forward to the named functions.

impl Not for Region {
    type Output = Region;

    fn not(self) -> Region {
        invert(self)
    }
}

impl BitAnd for Region {
    type Output = Region;

    fn bitand(self, rhs: Region) -> Region {
        intersection(self, rhs)
    }
}

impl BitOr for Region {
    type Output = Region;

    fn bitor(self, rhs: Region) -> Region {
        union(self, rhs)
    }
}

impl Sub for Region {
    type Output = Region;

    fn sub(self, rhs: Region) -> Region {
        difference(self, rhs)
    }
}
