//! Occupancy tracker: turns per-move containment into enter/exit edges.

use std::collections::HashSet;

use boundary_types::Plot;

/// A change in whether a player stands in a plot owned by someone else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Enter { player: String, owner: String },
    Exit { player: String },
}

/// Players currently inside a foreign plot. Which plot is not recorded, so
/// walking from one foreign plot straight into another is not a new entry.
///
/// Never persisted; a restart starts everyone outside.
#[derive(Debug, Default)]
pub struct OccupancyTracker {
    inside: HashSet<String>,
}

impl OccupancyTracker {
    /// Feed the foreign plot `player` now stands in (if any). Returns a
    /// transition only when the inside/outside state flips.
    pub fn observe(&mut self, player: &str, matched: Option<&Plot>) -> Option<Transition> {
        match matched {
            Some(plot) if !self.inside.contains(player) => {
                self.inside.insert(player.to_owned());
                Some(Transition::Enter {
                    player: player.to_owned(),
                    owner: plot.owner().to_owned(),
                })
            }
            None if self.inside.remove(player) => Some(Transition::Exit {
                player: player.to_owned(),
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_inside(&self, player: &str) -> bool {
        self.inside.contains(player)
    }

    /// Drop any state for `player` without emitting an exit.
    pub fn forget(&mut self, player: &str) -> bool {
        self.inside.remove(player)
    }

    pub fn clear(&mut self) {
        self.inside.clear();
    }
}
