//! Shared plugin state for homeboundaries.

use std::sync::{Arc, PoisonError, RwLock};

use boundary_types::{Plot, Point3};
use tokio::runtime::Handle;

use crate::config::PlotsConfig;
use crate::containment::first_foreign_containing;
use crate::error::PlotError;
use crate::notify::Notifier;
use crate::occupancy::{OccupancyTracker, Transition};
use crate::registry::PlotRegistry;
use crate::selection::{MarkOutcome, SelectionStore};

/// Shared state passed to event handlers and command executors.
///
/// Each component sits behind its own lock. Locks are never held across an
/// `.await`, and when two are needed the registry is taken first.
#[derive(Clone)]
pub struct PluginState {
    pub runtime: Handle,
    pub config: Arc<PlotsConfig>,
    pub selections: Arc<RwLock<SelectionStore>>,
    pub registry: Arc<RwLock<PlotRegistry>>,
    pub occupancy: Arc<RwLock<OccupancyTracker>>,
    /// Off-server entry notifications; `None` when no webhook is configured.
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl PluginState {
    pub fn new(
        runtime: Handle,
        config: PlotsConfig,
        registry: PlotRegistry,
        notifier: Option<Arc<dyn Notifier>>,
    ) -> Self {
        Self {
            runtime,
            config: Arc::new(config),
            selections: Arc::new(RwLock::new(SelectionStore::default())),
            registry: Arc::new(RwLock::new(registry)),
            occupancy: Arc::new(RwLock::new(OccupancyTracker::default())),
            notifier,
        }
    }

    #[must_use]
    pub fn tool_label(&self) -> &str {
        &self.config.plots.tool_label
    }

    // ── Selection ──

    pub fn mark_point(&self, player: &str, point: Point3) -> MarkOutcome {
        self.selections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .mark(player, point)
    }

    pub fn cancel_selection(&self, player: &str) -> bool {
        self.selections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel(player)
    }

    /// Turn the player's two marked points into a plot and persist it.
    ///
    /// The selection is left in place, so saving again adds a second,
    /// identical plot.
    pub fn commit(&self, player: &str) -> Result<Plot, PlotError> {
        let (corner1, corner2) = self
            .selections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .completed(player)?;

        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        let plot = registry.append(Plot::new(player, corner1, corner2))?.clone();
        log::info!(
            "homeboundaries: {player} saved a plot ({} owned, {} total)",
            registry.owned_by(player).count(),
            registry.len()
        );
        Ok(plot)
    }

    // ── Occupancy ──

    /// Run containment for a move and update the player's occupancy.
    pub fn observe_move(&self, player: &str, to: &Point3) -> Option<Transition> {
        let registry = self.registry.read().unwrap_or_else(PoisonError::into_inner);
        let matched = first_foreign_containing(registry.all(), to, player);
        self.occupancy
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .observe(player, matched)
    }

    pub fn forget_player(&self, player: &str) -> bool {
        self.occupancy
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .forget(player)
    }

    #[must_use]
    pub fn plot_count(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
