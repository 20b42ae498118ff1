//! HomeBoundaries: player land plots with entry notifications.
//!
//! Players mark two corners with the plotting tool and `/plot save` them as a
//! plot that claims the full vertical column. Whenever a player walks into a
//! plot owned by someone else the server is told once per crossing, in chat and
//! through an optional webhook.
//!
//! - **[selection]**: two-point plotting tool state
//! - **[registry]**: committed plots and their JSON document
//! - **[containment]**: first plot containing a position
//! - **[occupancy]**: enter/exit edges per player
//! - **[notify]**: webhook delivery
//! - **[events]** / **[commands]**: what the host server calls into

pub mod commands;
pub mod config;
pub mod containment;
pub mod error;
pub mod events;
pub mod host;
pub mod notify;
pub mod occupancy;
pub mod registry;
pub mod selection;
pub mod state;

#[cfg(test)]
mod test_support;

use std::path::Path;
use std::sync::{Arc, PoisonError};

use boundary_store::PlotFile;

use commands::PlotCommandExecutor;
use config::PlotsConfig;
use events::{PlotInteractHandler, PlotLeaveHandler, PlotMoveHandler};
use host::{EventHandler, InteractEvent, LeaveEvent, MoveEvent};
use notify::{DiscordWebhook, Notifier};
use registry::PlotRegistry;
use state::PluginState;

/// Everything the host has to wire up after a successful load.
#[derive(Clone)]
pub struct PluginHandles {
    pub interact: Arc<dyn EventHandler<InteractEvent>>,
    pub movement: Arc<dyn EventHandler<MoveEvent>>,
    pub leave: Arc<dyn EventHandler<LeaveEvent>>,
    /// Handles `/plot`, `/plot cancel`, `/plot save`.
    pub command: Arc<PlotCommandExecutor>,
}

pub struct HomeBoundariesPlugin {
    runtime: Arc<tokio::runtime::Runtime>,
    state: Option<PluginState>,
}

impl HomeBoundariesPlugin {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("homeboundaries-rt")
            .build()?;

        Ok(Self {
            runtime: Arc::new(runtime),
            state: None,
        })
    }

    /// Load config and plots from `data_folder`.
    ///
    /// A plot document that exists but cannot be read is fatal: the plugin
    /// refuses to enable rather than run with missing claims.
    pub fn on_load(&mut self, data_folder: &Path) -> Result<PluginHandles, String> {
        let config = match PlotsConfig::load(&data_folder.join("config.toml")) {
            Ok(c) => c,
            Err(e) => {
                log::error!("homeboundaries: Failed to load config: {e}");
                return Err(e);
            }
        };

        let plot_file = PlotFile::new(data_folder.join(&config.plots.file));
        let registry = match PlotRegistry::load(plot_file) {
            Ok(r) => r,
            Err(e) => {
                log::error!("homeboundaries: Refusing to enable, plot document unusable: {e}");
                return Err(e.to_string());
            }
        };
        log::info!(
            "homeboundaries: Loaded {} plots from {:?}",
            registry.len(),
            registry.file().path()
        );

        let notifier = if config.webhook.is_enabled() {
            let webhook = DiscordWebhook::new(config.webhook.url.clone(), config.webhook.timeout())
                .map_err(|e| format!("webhook client: {e}"))?;
            Some(Arc::new(webhook) as Arc<dyn Notifier>)
        } else {
            log::info!("homeboundaries: No webhook configured, entries are announced in chat only");
            None
        };

        let state = PluginState::new(self.runtime.handle().clone(), config, registry, notifier);
        self.state = Some(state.clone());

        log::info!("homeboundaries: Loaded (/plot, plotting tool, entry notifications)");
        Ok(PluginHandles {
            interact: Arc::new(PlotInteractHandler {
                state: state.clone(),
            }),
            movement: Arc::new(PlotMoveHandler {
                state: state.clone(),
            }),
            leave: Arc::new(PlotLeaveHandler {
                state: state.clone(),
            }),
            command: Arc::new(PlotCommandExecutor::new(state)),
        })
    }

    pub fn on_unload(&mut self) -> Result<(), String> {
        if let Some(state) = self.state.take() {
            state
                .selections
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
            state
                .occupancy
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
        log::info!("homeboundaries: Unloaded");
        Ok(())
    }

    /// Run async work on the plugin's runtime.
    #[inline]
    pub fn block_on<F, T>(&self, f: F) -> T
    where
        F: std::future::Future<Output = T>,
    {
        self.runtime.block_on(f)
    }
}
