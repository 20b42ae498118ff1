//! Containment engine: which plot, if any, a position falls in.
//!
//! Plots are scanned in registry order and the first hit wins. Height is never
//! considered: a plot owns its whole column.

use boundary_types::{Plot, Point3};

/// First plot containing `pos`.
#[must_use]
pub fn first_containing<'a>(plots: &'a [Plot], pos: &Point3) -> Option<&'a Plot> {
    plots.iter().find(|plot| plot.contains(pos))
}

/// First plot containing `pos` that `player` does not own. The player's own
/// plots are skipped, so a foreign plot registered after an own plot still matches.
#[must_use]
pub fn first_foreign_containing<'a>(
    plots: &'a [Plot],
    pos: &Point3,
    player: &str,
) -> Option<&'a Plot> {
    plots
        .iter()
        .find(|plot| !plot.is_owned_by(player) && plot.contains(pos))
}
