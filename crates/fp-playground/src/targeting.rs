//! The battleship problem that motivates regions.
//!
//! A ship at `own` may fire at `target` when the target is within firing
//! range, not dangerously close to the ship, and not dangerously close to
//! a friendly ship.
//!
//! We solve it twice: once with raw arithmetic, then by combining regions.
//! The second version has no distance formula in it at all.
//!
//! ## Rust Lesson #11: Structs instead of captured globals
//!
//! The range and the safety margin are configuration. Rather than reading
//! them from a global, `Engagement` carries them as fields, and every
//! method (and every region it builds) captures its own copy.

use serde::{Deserialize, Serialize};

use crate::geometry::{Distance, Position};
use crate::region::{circle, difference, shift, Region};

/// Safety margin used when none is given.
pub const DEFAULT_MIN_DISTANCE: Distance = 2.0;

/// Is `target` within `range` of the origin?
pub fn in_range(target: Position, range: Distance) -> bool {
    target.length() <= range
}

/// Firing range plus safety margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Engagement {
    pub range: Distance,
    #[serde(default = "default_min_distance")]
    pub min_distance: Distance,
}

fn default_min_distance() -> Distance {
    DEFAULT_MIN_DISTANCE
}

impl Engagement {
    pub fn new(range: Distance) -> Self {
        Self { range, min_distance: DEFAULT_MIN_DISTANCE }
    }

    pub fn with_min_distance(mut self, min_distance: Distance) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Hand-written check: every distance computed explicitly.
    pub fn can_engage_direct(&self, own: Position, friendly: Position, target: Position) -> bool {
        let dx = own.x - target.x;
        let dy = own.y - target.y;
        let target_distance = (dx * dx + dy * dy).sqrt();

        let friendly_dx = friendly.x - target.x;
        let friendly_dy = friendly.y - target.y;
        let friendly_distance = (friendly_dx * friendly_dx + friendly_dy * friendly_dy).sqrt();

        target_distance <= self.range
            && target_distance >= self.min_distance
            && friendly_distance >= self.min_distance
    }

    /// Where a ship at `own` may fire, with a friendly ship at `friendly`.
    ///
    /// A ring around our own ship, minus a disc around the friendly one.
    pub fn firing_zone(&self, own: Position, friendly: Position) -> Region {
        let range_region = difference(circle(self.range), circle(self.min_distance));
        let target_region = shift(own, range_region);
        let friendly_region = shift(friendly, circle(self.min_distance));
        difference(target_region, friendly_region)
    }

    /// Same answer as [`Engagement::can_engage_direct`], built from regions.
    ///
    /// The two differ only for targets exactly `min_distance` away from a
    /// ship: the region version treats that circle as unsafe.
    pub fn can_engage(&self, own: Position, friendly: Position, target: Position) -> bool {
        self.firing_zone(own, friendly).contains(target)
    }
}

impl Default for Engagement {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Distances from `target` to both ships, for reporting.
pub fn distances(own: Position, friendly: Position, target: Position) -> (Distance, Distance) {
    (own.distance(target), friendly.distance(target))
}
