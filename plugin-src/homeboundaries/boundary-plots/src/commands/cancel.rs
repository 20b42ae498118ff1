//! `/plot cancel`: drop the marked points.

use super::{CommandExecutor, CommandResult};
use crate::host::Host;
use crate::state::PluginState;

pub struct CancelExecutor(pub PluginState);

impl CommandExecutor for CancelExecutor {
    fn execute<'a>(&'a self, host: &'a dyn Host, player: &'a str) -> CommandResult<'a> {
        Box::pin(async move {
            self.0.cancel_selection(player);
            host.send_message(player, "Plot points cleared.".to_owned())
                .await;
            Ok(1)
        })
    }
}
