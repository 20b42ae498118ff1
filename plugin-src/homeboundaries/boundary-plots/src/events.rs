//! Event handlers: plotting tool clicks, movement, disconnects.

use crate::error::PlotError;
use crate::host::{BoxFuture, EventHandler, Host, InteractAction, InteractEvent, LeaveEvent, MoveEvent};
use crate::notify;
use crate::occupancy::Transition;
use crate::selection::MarkOutcome;
use crate::state::PluginState;

// ───────────────────────────── Plotting tool ─────────────────────────────

pub struct PlotInteractHandler {
    pub state: PluginState,
}

impl PlotInteractHandler {
    fn is_plotting_click(&self, event: &InteractEvent) -> bool {
        event.action == InteractAction::RightClickBlock
            && event.held_item_label.as_deref() == Some(self.state.tool_label())
    }
}

impl EventHandler<InteractEvent> for PlotInteractHandler {
    fn handle<'a>(&'a self, host: &'a dyn Host, event: &'a InteractEvent) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            if !self.is_plotting_click(event) {
                return;
            }
            let player = event.player.as_str();

            let reply = match self.state.mark_point(player, event.position) {
                MarkOutcome::First(point) => format!(
                    "First plot point set at {point}. Please select the second plot point."
                ),
                MarkOutcome::Second { corner1, corner2 } => {
                    match serde_json::to_string(&[corner1, corner2]) {
                        Ok(json) => log::info!("homeboundaries: {player}'s Plot JSON: {json}"),
                        Err(e) => log::warn!("homeboundaries: could not encode {player}'s plot: {e}"),
                    }
                    format!("Second plot point set at {corner2}. Plot defined.")
                }
                MarkOutcome::Full => PlotError::SelectionFull.to_string(),
            };
            host.send_message(player, reply).await;
        })
    }
}

// ───────────────────────────── Player Move ─────────────────────────────

pub struct PlotMoveHandler {
    pub state: PluginState,
}

impl EventHandler<MoveEvent> for PlotMoveHandler {
    fn handle<'a>(&'a self, host: &'a dyn Host, event: &'a MoveEvent) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            match self.state.observe_move(&event.player, &event.to) {
                Some(Transition::Enter { player, owner }) => {
                    log::info!("homeboundaries: {player} entered a plot owned by {owner}");
                    if let Some(notifier) = &self.state.notifier {
                        notify::dispatch(
                            &self.state.runtime,
                            notifier.clone(),
                            notify::enter_webhook(&player, &owner),
                        );
                    }
                    if self.state.config.notifications.broadcast {
                        host.broadcast(notify::enter_broadcast(&player, &owner)).await;
                    }
                }
                Some(Transition::Exit { player }) => {
                    log::debug!("homeboundaries: {player} left foreign plot land");
                }
                None => {}
            }
        })
    }
}

// ───────────────────────────── Player Leave ─────────────────────────────

pub struct PlotLeaveHandler {
    pub state: PluginState,
}

impl EventHandler<LeaveEvent> for PlotLeaveHandler {
    fn handle<'a>(&'a self, _host: &'a dyn Host, event: &'a LeaveEvent) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            self.state.forget_player(&event.player);
        })
    }
}
