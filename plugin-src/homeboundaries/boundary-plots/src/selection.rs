//! Plotting tool state: per-player corner1/corner2 for defining plots.

use std::collections::HashMap;

use boundary_types::Point3;

use crate::error::PlotError;

/// Result of marking a point with the plotting tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkOutcome {
    /// The point became corner1.
    First(Point3),
    /// The point became corner2; the selection is now complete.
    Second { corner1: Point3, corner2: Point3 },
    /// Both corners were already set. Nothing changed.
    Full,
}

/// Per-player pending selections. A player with no entry has marked nothing.
///
/// Each entry holds one or two points, never more. Saving reads the points
/// without removing them; only `cancel` clears a selection.
#[derive(Debug, Default)]
pub struct SelectionStore {
    pending: HashMap<String, Vec<Point3>>,
}

impl SelectionStore {
    pub fn mark(&mut self, player: &str, point: Point3) -> MarkOutcome {
        let points = self.pending.entry(player.to_owned()).or_default();
        match points.as_slice() {
            [] => {
                points.push(point);
                MarkOutcome::First(point)
            }
            [corner1] => {
                let corner1 = *corner1;
                points.push(point);
                MarkOutcome::Second {
                    corner1,
                    corner2: point,
                }
            }
            _ => MarkOutcome::Full,
        }
    }

    /// Discard the player's points. Returns false if there was nothing to discard.
    pub fn cancel(&mut self, player: &str) -> bool {
        self.pending.remove(player).is_some()
    }

    /// Both corners, if the player has marked two points.
    pub fn completed(&self, player: &str) -> Result<(Point3, Point3), PlotError> {
        match self.points(player) {
            [corner1, corner2] => Ok((*corner1, *corner2)),
            _ => Err(PlotError::NoSelection),
        }
    }

    /// Drop every pending selection.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn points(&self, player: &str) -> &[Point3] {
        self.pending.get(player).map(Vec::as_slice).unwrap_or_default()
    }
}
