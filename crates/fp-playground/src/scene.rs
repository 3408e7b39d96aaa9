//! Scenes: region expressions written down as YAML.
//!
//! Scenes are YAML files describing a tree of shapes and combinators.
//! Building a scene walks the tree and calls the same combinators you
//! would call by hand.
//!
//! ```yaml
//! name: firing-zone
//! viewport: { min_x: -10, min_y: -10, max_x: 10, max_y: 10, columns: 40, rows: 20 }
//! shape:
//!   kind: difference
//!   region: { kind: circle, radius: 8 }
//!   minus:  { kind: circle, radius: 2 }
//! ```
//!
//! ## Rust Lesson #12: Recursive Enums
//!
//! A `Shape` can contain other shapes. An enum can't contain itself
//! directly (it would have infinite size), so the nested shapes live
//! behind a `Box` or inside a `Vec`, both of which are pointer-sized.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Polygon};
use crate::raster::Viewport;
use crate::region::{self, Region};
use crate::seq::map;

/// Error type for scene loading and building.
#[derive(Debug)]
pub enum SceneError {
    /// YAML could not be parsed into a scene
    Parse(String),
    /// A coordinate, radius or offset is NaN or infinite
    NonFinite(&'static str),
    /// A polygon has fewer than three points
    DegeneratePolygon(usize),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Parse(msg) => write!(f, "scene parse error: {}", msg),
            SceneError::NonFinite(what) => write!(f, "{} must be a finite number", what),
            SceneError::DegeneratePolygon(n) => {
                write!(f, "polygon needs at least 3 points, got {}", n)
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// A region expression.
///
/// `#[serde(tag = "kind")]` means the variant name is read from a `kind:`
/// field next to the variant's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle {
        radius: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        center: Option<Point>,
    },
    Polygon {
        points: Vec<Point>,
    },
    Shift {
        offset: Point,
        shape: Box<Shape>,
    },
    Invert {
        shape: Box<Shape>,
    },
    Intersection {
        shapes: Vec<Shape>,
    },
    Union {
        shapes: Vec<Shape>,
    },
    Difference {
        region: Box<Shape>,
        minus: Box<Shape>,
    },
    Everywhere,
    Nowhere,
}

/// A named shape plus an optional viewport to look at it through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,

    pub shape: Shape,
}

impl Scene {
    /// Parse a scene from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_yaml::from_str(content).map_err(|e| SceneError::Parse(e.to_string()))?;
        debug!("parsed scene '{}' ({} shapes)", scene.name, scene.shape.count());
        Ok(scene)
    }

    pub fn to_yaml(&self) -> Result<String, SceneError> {
        serde_yaml::to_string(self).map_err(|e| SceneError::Parse(e.to_string()))
    }

    /// Build the scene's region.
    pub fn region(&self) -> Result<Region, SceneError> {
        self.shape.build()
    }
}

fn finite(value: f64, what: &'static str) -> Result<f64, SceneError> {
    if value.is_finite() { Ok(value) } else { Err(SceneError::NonFinite(what)) }
}

fn finite_point(p: Point, what: &'static str) -> Result<Point, SceneError> {
    if p.is_finite() { Ok(p) } else { Err(SceneError::NonFinite(what)) }
}

impl Shape {
    /// Turn the expression into a region, validating numbers on the way.
    ///
    /// ## Rust Lesson #14: The ? Operator
    ///
    /// Each `?` returns early with the first error found, so a bad number
    /// deep inside the tree surfaces without any manual plumbing.
    pub fn build(&self) -> Result<Region, SceneError> {
        let built = match self {
            Shape::Circle { radius, center } => {
                let radius = finite(*radius, "circle radius")?;
                match center {
                    Some(c) => region::circle_at(radius, finite_point(*c, "circle center")?),
                    None => region::circle(radius),
                }
            }
            Shape::Polygon { points } => {
                if points.len() < 3 {
                    return Err(SceneError::DegeneratePolygon(points.len()));
                }
                for p in points {
                    finite_point(*p, "polygon point")?;
                }
                region::polygon(Polygon::new(points.clone()))
            }
            Shape::Shift { offset, shape } => {
                region::shift(finite_point(*offset, "shift offset")?, shape.build()?)
            }
            Shape::Invert { shape } => region::invert(shape.build()?),
            Shape::Intersection { shapes } => region::intersection_all(build_all(shapes)?),
            Shape::Union { shapes } => region::union_all(build_all(shapes)?),
            Shape::Difference { region: keep, minus } => region::difference(keep.build()?, minus.build()?),
            Shape::Everywhere => Region::everywhere(),
            Shape::Nowhere => Region::nowhere(),
        };
        Ok(built)
    }

    /// Number of nodes in the expression tree.
    pub fn count(&self) -> usize {
        match self {
            Shape::Circle { .. } | Shape::Polygon { .. } | Shape::Everywhere | Shape::Nowhere => 1,
            Shape::Shift { shape, .. } | Shape::Invert { shape } => 1 + shape.count(),
            Shape::Intersection { shapes } | Shape::Union { shapes } => {
                1 + shapes.iter().map(Shape::count).sum::<usize>()
            }
            Shape::Difference { region, minus } => 1 + region.count() + minus.count(),
        }
    }
}

fn build_all(shapes: &[Shape]) -> Result<Vec<Region>, SceneError> {
    map(shapes, Shape::build).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRING_ZONE: &str = r#"
name: firing-zone
description: ring around our ship, minus the friendly's margin
viewport: { min_x: -10, min_y: -10, max_x: 10, max_y: 10, columns: 40, rows: 20 }
shape:
  kind: difference
  region:
    kind: difference
    region: { kind: circle, radius: 8 }
    minus: { kind: circle, radius: 2 }
  minus:
    kind: shift
    offset: { x: 5, y: 0 }
    shape: { kind: circle, radius: 2 }
"#;

    #[test_log::test]
    fn parses_and_builds_firing_zone() {
        let scene = Scene::from_yaml(FIRING_ZONE).unwrap();
        assert_eq!(scene.name, "firing-zone");
        assert_eq!(scene.viewport.unwrap().columns(), 40);
        assert_eq!(scene.shape.count(), 6);

        let region = scene.region().unwrap();
        assert!(region.contains(Point::new(0.0, 6.0)));
        assert!(!region.contains(Point::ORIGIN), "inside the safety margin");
        assert!(!region.contains(Point::new(5.0, 0.5)), "too close to the friendly");
        assert!(!region.contains(Point::new(9.0, 0.0)), "out of range");
    }

    #[test]
    fn circle_with_center() {
        let scene = Scene::from_yaml(
            "name: c\nshape: { kind: circle, radius: 1, center: { x: 3, y: 3 } }\n",
        )
        .unwrap();
        let region = scene.region().unwrap();
        assert!(region.contains(Point::new(3.0, 3.5)));
        assert!(!region.contains(Point::ORIGIN));
        assert_eq!(scene.viewport, None);
    }

    #[test]
    fn empty_combinators_use_identities() {
        let union = Shape::Union { shapes: vec![] }.build().unwrap();
        let inter = Shape::Intersection { shapes: vec![] }.build().unwrap();
        assert!(!union.contains(Point::ORIGIN));
        assert!(inter.contains(Point::ORIGIN));
    }

    #[test]
    fn polygon_and_invert() {
        let yaml = r#"
name: outside-triangle
shape:
  kind: invert
  shape:
    kind: polygon
    points: [{ x: 0, y: 0 }, { x: 4, y: 0 }, { x: 0, y: 4 }]
"#;
        let region = Scene::from_yaml(yaml).unwrap().region().unwrap();
        assert!(!region.contains(Point::new(1.0, 1.0)));
        assert!(region.contains(Point::new(3.0, 3.0)));
    }

    #[test]
    fn rejects_degenerate_polygon() {
        let shape = Shape::Polygon { points: vec![Point::ORIGIN, Point::new(1.0, 0.0)] };
        assert!(matches!(shape.build(), Err(SceneError::DegeneratePolygon(2))));
    }

    #[test]
    fn rejects_non_finite_numbers_deep_in_tree() {
        let shape = Shape::Union {
            shapes: vec![
                Shape::Everywhere,
                Shape::Shift {
                    offset: Point::new(f64::NAN, 0.0),
                    shape: Box::new(Shape::Circle { radius: 1.0, center: None }),
                },
            ],
        };
        assert!(matches!(shape.build(), Err(SceneError::NonFinite("shift offset"))));

        let radius = Shape::Circle { radius: f64::INFINITY, center: None };
        assert!(matches!(radius.build(), Err(SceneError::NonFinite("circle radius"))));
    }

    #[test]
    fn negative_radius_is_allowed_and_empty() {
        let region = Shape::Circle { radius: -3.0, center: None }.build().unwrap();
        assert!(!region.contains(Point::ORIGIN));
    }

    #[test]
    fn rejects_bad_yaml_and_bad_viewport() {
        assert!(matches!(Scene::from_yaml("name: [unclosed"), Err(SceneError::Parse(_))));
        assert!(matches!(
            Scene::from_yaml("name: x\nshape: { kind: hexagon }\n"),
            Err(SceneError::Parse(_))
        ));

        let flat = "name: flat\nviewport: { min_x: 0, min_y: 0, max_x: 0, max_y: 1, columns: 4, rows: 4 }\nshape: { kind: everywhere }\n";
        match Scene::from_yaml(flat) {
            Err(SceneError::Parse(msg)) => assert!(msg.contains("min must be below max"), "{}", msg),
            other => panic!("expected a viewport error, got {:?}", other),
        }

        let wide = "name: wide\nviewport: { min_x: -1e308, min_y: -1, max_x: 1e308, max_y: 1, columns: 4, rows: 4 }\nshape: { kind: everywhere }\n";
        assert!(matches!(Scene::from_yaml(wide), Err(SceneError::Parse(_))));
    }

    #[test]
    fn yaml_round_trip_keeps_structure() {
        let scene = Scene::from_yaml(FIRING_ZONE).unwrap();
        let again = Scene::from_yaml(&scene.to_yaml().unwrap()).unwrap();
        assert_eq!(scene, again);
    }
}
