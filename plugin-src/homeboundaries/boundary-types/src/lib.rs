//! Shared types for the HomeBoundaries plugin.
//!
//! No server or storage dependencies: safe to use from any crate.

use serde::{Deserialize, Serialize};

/// A world position. Plots only ever look at `x` and `z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}, Y: {}, Z: {}", self.x, self.y, self.z)
    }
}

/// Horizontal extent of a plot, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl PlotBounds {
    /// Build bounds from two arbitrary corners, min/max sorted.
    #[must_use]
    pub fn from_corners(a: &Point3, b: &Point3) -> Self {
        Self {
            min_x: a.x.min(b.x),
            max_x: a.x.max(b.x),
            min_z: a.z.min(b.z),
            max_z: a.z.max(b.z),
        }
    }

    #[must_use]
    pub fn contains_xz(&self, x: f64, z: f64) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }
}

/// A committed land claim: one owner, two corners, every height.
///
/// Field names match the persisted document (`player`, `coordinates`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    #[serde(rename = "player")]
    owner: String,
    #[serde(rename = "coordinates")]
    corners: [Point3; 2],
}

impl Plot {
    #[must_use]
    pub fn new(owner: impl Into<String>, corner1: Point3, corner2: Point3) -> Self {
        Self {
            owner: owner.into(),
            corners: [corner1, corner2],
        }
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub const fn corner1(&self) -> &Point3 {
        &self.corners[0]
    }

    #[must_use]
    pub const fn corner2(&self) -> &Point3 {
        &self.corners[1]
    }

    #[must_use]
    pub fn is_owned_by(&self, player: &str) -> bool {
        self.owner == player
    }

    #[must_use]
    pub fn bounds(&self) -> PlotBounds {
        PlotBounds::from_corners(self.corner1(), self.corner2())
    }

    /// Whether `pos` lies in this plot's column. `pos.y` is ignored.
    #[must_use]
    pub fn contains(&self, pos: &Point3) -> bool {
        self.bounds().contains_xz(pos.x, pos.z)
    }
}
