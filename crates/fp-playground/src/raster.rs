//! Sampling regions onto a grid.
//!
//! A region can't tell you its shape, only answer questions about points.
//! To look at one we ask about the center of every cell in a grid and
//! keep the answers in a [`Mask`].

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::region::Region;

/// Upper bound on `columns * rows`.
pub const MAX_CELLS: usize = 1 << 24;

/// Error type for viewport validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// A bound, or the extent between two bounds, is NaN or infinite
    NonFinite,
    /// min >= max on an axis
    EmptyExtent,
    /// Zero columns or rows
    NoCells,
    /// More cells than [`MAX_CELLS`]
    TooManyCells,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::NonFinite => write!(f, "viewport bounds and extent must be finite"),
            RasterError::EmptyExtent => write!(f, "viewport min must be below max on both axes"),
            RasterError::NoCells => write!(f, "viewport needs at least one column and one row"),
            RasterError::TooManyCells => write!(f, "viewport has more than {} cells", MAX_CELLS),
        }
    }
}

impl std::error::Error for RasterError {}

/// Viewport fields as written in a scene file, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub columns: usize,
    pub rows: usize,
}

/// A rectangle of the plane divided into `columns` x `rows` cells.
///
/// Only constructed through validation, so the extent is finite and
/// non-empty and the cell count is between 1 and [`MAX_CELLS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewportBounds", into = "ViewportBounds")]
pub struct Viewport {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    columns: usize,
    rows: usize,
    cells: usize,
}

impl TryFrom<ViewportBounds> for Viewport {
    type Error = RasterError;

    fn try_from(b: ViewportBounds) -> Result<Self, RasterError> {
        let bounds = [b.min_x, b.min_y, b.max_x, b.max_y];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(RasterError::NonFinite);
        }
        if b.min_x >= b.max_x || b.min_y >= b.max_y {
            return Err(RasterError::EmptyExtent);
        }
        // -1e308..1e308 is finite at both ends but not in between
        let (width, height) = (b.max_x - b.min_x, b.max_y - b.min_y);
        if !(width * height).is_finite() {
            return Err(RasterError::NonFinite);
        }
        if b.columns == 0 || b.rows == 0 {
            return Err(RasterError::NoCells);
        }
        let cells = b.columns.checked_mul(b.rows).filter(|&n| n <= MAX_CELLS).ok_or(RasterError::TooManyCells)?;

        Ok(Self {
            min_x: b.min_x,
            min_y: b.min_y,
            max_x: b.max_x,
            max_y: b.max_y,
            columns: b.columns,
            rows: b.rows,
            cells,
        })
    }
}

impl From<Viewport> for ViewportBounds {
    fn from(v: Viewport) -> Self {
        Self { min_x: v.min_x, min_y: v.min_y, max_x: v.max_x, max_y: v.max_y, columns: v.columns, rows: v.rows }
    }
}

impl Viewport {
    /// Create a validated viewport.
    pub fn new(min: Point, max: Point, columns: usize, rows: usize) -> Result<Self, RasterError> {
        Self::try_from(ViewportBounds { min_x: min.x, min_y: min.y, max_x: max.x, max_y: max.y, columns, rows })
    }

    /// A square viewport `[-half, half]` on both axes.
    pub fn centered(half: f64, columns: usize, rows: usize) -> Result<Self, RasterError> {
        Self::new(Point::new(-half, -half), Point::new(half, half), columns, rows)
    }

    /// Same extent, different resolution.
    pub fn with_resolution(self, columns: usize, rows: usize) -> Result<Self, RasterError> {
        Self::try_from(ViewportBounds { columns, rows, ..ViewportBounds::from(self) })
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `columns * rows`, checked when the viewport was built.
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn cell_width(&self) -> f64 {
        self.width() / self.columns as f64
    }

    pub fn cell_height(&self) -> f64 {
        self.height() / self.rows as f64
    }

    /// Center of a cell. Row 0 is the top row, so y decreases as rows go down.
    #[inline]
    pub fn cell_center(&self, col: usize, row: usize) -> Point {
        Point::new(
            self.min_x + (col as f64 + 0.5) * self.cell_width(),
            self.max_y - (row as f64 + 0.5) * self.cell_height(),
        )
    }
}

/// One membership answer per viewport cell, row-major from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    viewport: Viewport,
    cells: Vec<bool>,
}

/// Ask `region` about the center of every cell.
pub fn sample(region: &Region, viewport: Viewport) -> Mask {
    let mut cells = Vec::with_capacity(viewport.cell_count());
    for row in 0..viewport.rows {
        for col in 0..viewport.columns {
            cells.push(region.contains(viewport.cell_center(col, row)));
        }
    }
    Mask { viewport, cells }
}

impl Mask {
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn columns(&self) -> usize {
        self.viewport.columns
    }

    pub fn rows(&self) -> usize {
        self.viewport.rows
    }

    /// Membership of one cell; `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<bool> {
        if col >= self.viewport.columns || row >= self.viewport.rows {
            return None;
        }
        self.cells.get(row * self.viewport.columns + col).copied()
    }

    /// Iterate `(col, row)` of every filled cell.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.viewport.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, inside)| **inside)
            .map(move |(i, _)| (i % columns, i / columns))
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Fraction of cells filled, in [0, 1].
    pub fn coverage(&self) -> f64 {
        self.filled() as f64 / self.cells.len() as f64
    }

    /// Estimated area of the region inside the viewport.
    pub fn area(&self) -> f64 {
        self.coverage() * self.viewport.area()
    }

    /// One line of text per row, top row first.
    pub fn to_ascii(&self, filled: char, empty: char) -> String {
        let mut out = String::with_capacity((self.viewport.columns + 1) * self.viewport.rows);
        for row in self.cells.chunks(self.viewport.columns) {
            for &inside in row {
                out.push(if inside { filled } else { empty });
            }
            out.push('\n');
        }
        out
    }
}

/// Monte Carlo estimate of the region's area inside `viewport`.
///
/// Draws `samples` uniform points; zero samples estimates zero.
pub fn estimate_area<R: Rng + ?Sized>(region: &Region, viewport: &Viewport, samples: usize, rng: &mut R) -> f64 {
    if samples == 0 {
        return 0.0;
    }

    let mut hits = 0usize;
    for _ in 0..samples {
        let x = rng.random_range(viewport.min_x..viewport.max_x);
        let y = rng.random_range(viewport.min_y..viewport.max_y);
        if region.contains(Point::new(x, y)) {
            hits += 1;
        }
    }

    hits as f64 / samples as f64 * viewport.area()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::circle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::PI;

    #[test]
    fn viewport_validation() {
        assert_eq!(
            Viewport::new(Point::new(0.0, 0.0), Point::new(0.0, 1.0), 4, 4),
            Err(RasterError::EmptyExtent)
        );
        assert_eq!(
            Viewport::new(Point::new(0.0, 0.0), Point::new(1.0, f64::NAN), 4, 4),
            Err(RasterError::NonFinite)
        );
        assert_eq!(Viewport::centered(1.0, 0, 4), Err(RasterError::NoCells));
        assert!(Viewport::centered(1.0, 4, 4).is_ok());
    }

    #[test]
    fn extent_overflowing_to_infinity_is_rejected() {
        assert_eq!(
            Viewport::new(Point::new(-1e308, -1.0), Point::new(1e308, 1.0), 4, 4),
            Err(RasterError::NonFinite)
        );
        assert_eq!(
            Viewport::new(Point::new(0.0, 0.0), Point::new(1e200, 1e200), 4, 4),
            Err(RasterError::NonFinite)
        );
    }

    #[test]
    fn huge_extent_still_samples_and_estimates() {
        let vp = Viewport::new(Point::new(-1e153, -1e153), Point::new(1e153, 1e153), 4, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let estimate = estimate_area(&circle(1.0), &vp, 10, &mut rng);
        assert!(estimate.is_finite());
        assert_eq!(sample(&Region::everywhere(), vp).filled(), 16);
    }

    #[test]
    fn cell_count_is_checked() {
        assert_eq!(Viewport::centered(1.0, usize::MAX, 2), Err(RasterError::TooManyCells));
        assert_eq!(Viewport::centered(1.0, 100_000, 100_000), Err(RasterError::TooManyCells));
        assert_eq!(Viewport::centered(1.0, 4096, 4096).unwrap().cell_count(), MAX_CELLS);

        let vp = Viewport::centered(1.0, 4, 4).unwrap();
        assert_eq!(vp.with_resolution(usize::MAX, usize::MAX), Err(RasterError::TooManyCells));
        assert_eq!(vp.with_resolution(3, 5).unwrap().cell_count(), 15);
    }

    #[test]
    fn deserializing_validates() {
        let ok: Viewport = serde_json::from_str(
            r#"{"min_x": -1, "min_y": -1, "max_x": 1, "max_y": 1, "columns": 2, "rows": 3}"#,
        )
        .unwrap();
        assert_eq!(ok.columns(), 2);
        assert_eq!(ok.rows(), 3);
        assert_eq!(ok.cell_count(), 6);

        let zero = serde_json::from_str::<Viewport>(
            r#"{"min_x": -1, "min_y": -1, "max_x": 1, "max_y": 1, "columns": 0, "rows": 3}"#,
        );
        assert!(zero.unwrap_err().to_string().contains("at least one column"));

        let json = serde_json::to_value(ok).unwrap();
        assert_eq!(json["columns"], 2);
        assert!(json.get("cells").is_none());
    }

    #[test]
    fn cell_centers_top_down() {
        let vp = Viewport::new(Point::new(0.0, 0.0), Point::new(4.0, 2.0), 4, 2).unwrap();
        assert_eq!(vp.cell_center(0, 0), Point::new(0.5, 1.5));
        assert_eq!(vp.cell_center(3, 1), Point::new(3.5, 0.5));
    }

    #[test]
    fn everywhere_and_nowhere() {
        let vp = Viewport::centered(5.0, 10, 6).unwrap();
        let full = sample(&Region::everywhere(), vp);
        let none = sample(&Region::nowhere(), vp);
        assert_eq!(full.filled(), 60);
        assert_eq!(full.coverage(), 1.0);
        assert_eq!(full.area(), 100.0);
        assert_eq!(none.filled(), 0);
        assert_eq!(none.coverage(), 0.0);
    }

    #[test]
    fn half_plane_fills_half() {
        let vp = Viewport::centered(1.0, 8, 8).unwrap();
        let mask = sample(&Region::new(|p| p.x > 0.0), vp);
        assert_eq!(mask.filled(), 32);
        assert_eq!(mask.get(0, 0), Some(false));
        assert_eq!(mask.get(7, 0), Some(true));
        assert_eq!(mask.get(8, 0), None);
        assert!(mask.filled_cells().all(|(col, _)| col >= 4));
    }

    #[test]
    fn upper_half_is_top_rows() {
        let vp = Viewport::centered(1.0, 2, 2).unwrap();
        let mask = sample(&Region::new(|p| p.y > 0.0), vp);
        assert_eq!(mask.to_ascii('#', '.'), "##\n..\n");
    }

    #[test]
    fn circle_coverage_approximates_pi_r_squared() {
        let vp = Viewport::centered(2.0, 200, 200).unwrap();
        let mask = sample(&circle(1.5), vp);
        let expected = PI * 1.5 * 1.5;
        assert!((mask.area() - expected).abs() < 0.05, "area {} vs {}", mask.area(), expected);
    }

    #[test]
    fn ascii_dimensions() {
        let vp = Viewport::centered(3.0, 7, 3).unwrap();
        let text = sample(&circle(1.0), vp).to_ascii('#', ' ');
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 7));
        assert_eq!(lines[1].chars().nth(3), Some('#'));
    }

    #[test]
    fn monte_carlo_area() {
        let vp = Viewport::centered(2.0, 1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let estimate = estimate_area(&circle(1.0), &vp, 40_000, &mut rng);
        assert!((estimate - PI).abs() < 0.15, "estimate {}", estimate);

        assert_eq!(estimate_area(&circle(1.0), &vp, 0, &mut rng), 0.0);
    }

    #[test]
    fn monte_carlo_is_reproducible_with_seed() {
        let vp = Viewport::centered(2.0, 1, 1).unwrap();
        let region = circle(1.0) - circle(0.5);
        let a = estimate_area(&region, &vp, 1000, &mut StdRng::seed_from_u64(7));
        let b = estimate_area(&region, &vp, 1000, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
