//! `/plot`: enter plotting mode.

use super::{CommandExecutor, CommandResult};
use crate::host::Host;
use crate::state::PluginState;

pub struct StartExecutor(pub PluginState);

impl CommandExecutor for StartExecutor {
    fn execute<'a>(&'a self, host: &'a dyn Host, player: &'a str) -> CommandResult<'a> {
        Box::pin(async move {
            host.give_tool(player, self.0.tool_label()).await;
            host.send_message(player, "You are now in plotting mode.".to_owned())
                .await;
            host.send_message(player, "Right click to select your first plot".to_owned())
                .await;
            Ok(1)
        })
    }
}
