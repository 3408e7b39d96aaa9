//! SVG shapes as regions.
//!
//! Uses usvg for complete SVG resolution (CSS, basic shapes, nested groups)
//! then walks the tree and turns every path into a polygon region. Each
//! path is moved through its absolute transform first, so shapes inside
//! `<g transform=...>` land where they are drawn.
//!
//! ## Curve Flattening
//!
//! SVG paths contain Bézier curves. A point-in-polygon test needs straight
//! edges, so curves are "flattened" into short line segments with lyon_geom.

use std::fmt;

use log::debug;
use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};

use crate::geometry::{Point, Polygon};
use crate::region::{self, Region};

/// Error type for SVG parsing.
///
/// ## Rust Lesson #13: Error Handling
///
/// Rust uses `Result<T, E>` instead of exceptions:
/// - `Ok(value)` = success
/// - `Err(error)` = failure
///
/// Implementing `Display` and `std::error::Error` lets callers wrap it in
/// whatever error type they like (the CLI uses `anyhow`).
#[derive(Debug)]
pub enum SvgError {
    Parse(String),
    NoPolygons,
}

impl fmt::Display for SvgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgError::Parse(msg) => write!(f, "SVG parse error: {}", msg),
            SvgError::NoPolygons => write!(f, "No polygons found in SVG"),
        }
    }
}

impl std::error::Error for SvgError {}

/// Tolerance for curve flattening.
/// Lower = more points, smoother curves, slower.
const CURVE_TOLERANCE: f32 = 0.1;

/// Extract all closed shapes from an SVG document as polygons.
pub fn polygons_from_svg(svg_content: &str) -> Result<Vec<Polygon>, SvgError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options).map_err(|e| SvgError::Parse(e.to_string()))?;

    let mut polygons = Vec::new();
    extract_from_group(tree.root(), &mut polygons);
    debug!("extracted {} polygons from SVG", polygons.len());

    if polygons.is_empty() {
        Err(SvgError::NoPolygons)
    } else {
        Ok(polygons)
    }
}

/// The union of every shape in an SVG document.
///
/// SVG's y axis points down; coordinates are kept as they are.
pub fn region_from_svg(svg_content: &str) -> Result<Region, SvgError> {
    let polygons = polygons_from_svg(svg_content)?;
    Ok(region::union_all(polygons.into_iter().map(region::polygon)))
}

/// Bounding box over all polygons as (min_x, min_y, max_x, max_y).
pub fn bounds_of(polygons: &[Polygon]) -> Option<(f64, f64, f64, f64)> {
    polygons
        .iter()
        .filter_map(Polygon::bounding_box)
        .reduce(|a, b| (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3)))
}

fn extract_from_group(group: &usvg::Group, polygons: &mut Vec<Polygon>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => extract_from_group(group, polygons),
            usvg::Node::Path(path) => {
                if let Some(polygon) = path_to_polygon(path) {
                    polygons.push(polygon);
                }
            }
            // Text and images have no fillable outline here
            _ => {}
        }
    }
}

/// Convert a usvg path to a polygon, flattening curves.
///
/// The first subpath is the outer ring; later subpaths become holes.
fn path_to_polygon(path: &usvg::Path) -> Option<Polygon> {
    // usvg keeps path data in the path's local space
    let data = path.data().clone().transform(path.abs_transform())?;

    let mut rings: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut last_point: Option<(f32, f32)> = None;

    for segment in data.segments() {
        match segment {
            usvg::tiny_skia_path::PathSegment::MoveTo(p) => {
                if !current.is_empty() {
                    rings.push(std::mem::take(&mut current));
                }
                current.push(Point::new(p.x as f64, p.y as f64));
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::LineTo(p) => {
                current.push(Point::new(p.x as f64, p.y as f64));
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::QuadTo(ctrl, p) => {
                if let Some((lx, ly)) = last_point {
                    let curve = QuadraticBezierSegment {
                        from: point(lx, ly),
                        ctrl: point(ctrl.x, ctrl.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |line| {
                        current.push(Point::new(line.to.x as f64, line.to.y as f64));
                    });
                } else {
                    current.push(Point::new(p.x as f64, p.y as f64));
                }
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::CubicTo(ctrl1, ctrl2, p) => {
                if let Some((lx, ly)) = last_point {
                    let curve = CubicBezierSegment {
                        from: point(lx, ly),
                        ctrl1: point(ctrl1.x, ctrl1.y),
                        ctrl2: point(ctrl2.x, ctrl2.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |line| {
                        current.push(Point::new(line.to.x as f64, line.to.y as f64));
                    });
                } else {
                    current.push(Point::new(p.x as f64, p.y as f64));
                }
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::Close => {}
        }
    }
    if !current.is_empty() {
        rings.push(current);
    }

    let mut rings: Vec<Vec<Point>> = rings
        .into_iter()
        .map(|mut ring| {
            // Curve flattening can repeat a point
            ring.dedup_by(|a, b| (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6);
            ring
        })
        .filter(|ring| ring.len() >= 3)
        .collect();

    if rings.is_empty() {
        return None;
    }

    let outer = rings.remove(0);
    let id = path.id();
    let mut polygon = Polygon::with_id(outer, (!id.is_empty()).then(|| id.to_string()));
    polygon.holes = rings;
    Some(polygon)
}
