//! # fp-playground
//!
//! Functional programming, one small piece at a time: regions built from
//! closures, hand-rolled map/filter/reduce, lazy defaults, currying.
//!
//! ## Rust Lesson #4: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Every module has to be declared; nothing is picked up by accident.

pub mod curry;
pub mod geometry;
pub mod optional;
pub mod raster;
pub mod region;
pub mod scene;
pub mod seq;
pub mod svg;
pub mod targeting;

// Re-export common types at crate root for convenience.
pub use curry::{add, add_curried, compose, curry, uncurry, Pipeline};
pub use geometry::{Distance, Point, Polygon, Position};
pub use optional::{or_else, Coalesce};
pub use raster::{estimate_area, sample, Mask, RasterError, Viewport, ViewportBounds};
pub use region::{
    circle, circle_at, difference, intersection, intersection_all, invert, shift, union, union_all,
    Region,
};
pub use scene::{Scene, SceneError, Shape};
pub use seq::{filter, map, reduce};
pub use svg::{polygons_from_svg, region_from_svg, SvgError};
pub use targeting::{in_range, Engagement};
