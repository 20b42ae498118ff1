//! `/plot save`: commit the two marked points as a plot.

use super::{CommandExecutor, CommandResult};
use crate::host::Host;
use crate::state::PluginState;

pub struct SaveExecutor(pub PluginState);

impl CommandExecutor for SaveExecutor {
    fn execute<'a>(&'a self, host: &'a dyn Host, player: &'a str) -> CommandResult<'a> {
        Box::pin(async move {
            let plot = self.0.commit(player)?;
            let bounds = plot.bounds();
            log::info!(
                "homeboundaries: {player} claimed x {}..{}, z {}..{}",
                bounds.min_x,
                bounds.max_x,
                bounds.min_z,
                bounds.max_z,
            );
            host.send_message(player, "Plot saved successfully!".to_owned())
                .await;
            Ok(1)
        })
    }
}
