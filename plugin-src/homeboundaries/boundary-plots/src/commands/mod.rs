//! `/plot` command.
//!
//!   /plot         : enter plotting mode and receive the plotting tool
//!   /plot cancel  : clear your marked points
//!   /plot save    : save your two marked points as a plot

mod cancel;
mod save;
mod start;

use crate::error::PlotError;
use crate::host::{BoxFuture, CommandSender, Host};
use crate::state::PluginState;

/// Result of a subcommand: `Ok(1)` on success, `Ok(0)` for a handled no-op.
pub type CommandResult<'a> = BoxFuture<'a, Result<i32, PlotError>>;

/// One `/plot` subcommand, run on behalf of an in-game player.
pub trait CommandExecutor: Send + Sync {
    fn execute<'a>(&'a self, host: &'a dyn Host, player: &'a str) -> CommandResult<'a>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotCommand {
    Start,
    Cancel,
    Save,
}

impl PlotCommand {
    pub fn parse(args: &[&str]) -> Result<Self, PlotError> {
        match args {
            [] => Ok(Self::Start),
            ["cancel"] => Ok(Self::Cancel),
            ["save"] => Ok(Self::Save),
            _ => Err(PlotError::CommandMisuse(args.join(" "))),
        }
    }
}

/// Entry point the host calls for every `/plot` invocation.
pub struct PlotCommandExecutor {
    start: start::StartExecutor,
    cancel: cancel::CancelExecutor,
    save: save::SaveExecutor,
}

impl PlotCommandExecutor {
    #[must_use]
    pub fn new(state: PluginState) -> Self {
        Self {
            start: start::StartExecutor(state.clone()),
            cancel: cancel::CancelExecutor(state.clone()),
            save: save::SaveExecutor(state),
        }
    }

    /// Run `/plot <args>`. Failures are reported to the sender, never returned.
    pub fn execute<'a>(
        &'a self,
        host: &'a dyn Host,
        sender: &'a CommandSender,
        args: &'a [&'a str],
    ) -> BoxFuture<'a, i32> {
        Box::pin(async move {
            let result = match (PlotCommand::parse(args), sender.as_player()) {
                (Err(e), _) => Err(e),
                (Ok(_), None) => Err(PlotError::NotInGame),
                (Ok(command), Some(player)) => self.executor(command).execute(host, player).await,
            };
            match result {
                Ok(n) => n,
                Err(e) => {
                    report(host, sender, &e).await;
                    0
                }
            }
        })
    }

    fn executor(&self, command: PlotCommand) -> &dyn CommandExecutor {
        match command {
            PlotCommand::Start => &self.start,
            PlotCommand::Cancel => &self.cancel,
            PlotCommand::Save => &self.save,
        }
    }
}

async fn report(host: &dyn Host, sender: &CommandSender, err: &PlotError) {
    let text = match err {
        PlotError::Store(e) => {
            log::error!("homeboundaries: Failed to save plot: {e}");
            "Failed to save plot. See the server log.".to_owned()
        }
        PlotError::CommandMisuse(args) => {
            log::debug!("homeboundaries: unknown /plot arguments '{args}'");
            err.to_string()
        }
        _ => err.to_string(),
    };
    match sender.as_player() {
        Some(player) => host.send_message(player, text).await,
        None => log::info!("homeboundaries: {text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingHost, test_state};
    use boundary_types::Point3;

    fn alice() -> CommandSender {
        CommandSender::Player("Alice".into())
    }

    #[test]
    fn parses_subcommands() {
        assert_eq!(PlotCommand::parse(&[]).unwrap(), PlotCommand::Start);
        assert_eq!(PlotCommand::parse(&["cancel"]).unwrap(), PlotCommand::Cancel);
        assert_eq!(PlotCommand::parse(&["save"]).unwrap(), PlotCommand::Save);
        assert!(matches!(
            PlotCommand::parse(&["delete"]),
            Err(PlotError::CommandMisuse(a)) if a == "delete"
        ));
        assert!(PlotCommand::parse(&["save", "now"]).is_err());
    }

    #[tokio::test]
    async fn start_gives_tool() {
        let dir = tempfile::tempdir().unwrap();
        let exec = PlotCommandExecutor::new(test_state(dir.path(), None));
        let host = RecordingHost::default();

        assert_eq!(exec.execute(&host, &alice(), &[]).await, 1);

        assert_eq!(
            host.tools.lock().unwrap().as_slice(),
            &[("Alice".to_owned(), "Plotting Axe".to_owned())]
        );
        assert_eq!(
            host.messages_to("Alice"),
            vec![
                "You are now in plotting mode.".to_owned(),
                "Right click to select your first plot".to_owned(),
            ]
        );
    }

    #[tokio::test]
    async fn save_without_points_reports_no_selection() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path(), None);
        let exec = PlotCommandExecutor::new(state.clone());
        let host = RecordingHost::default();

        state.mark_point("Alice", Point3::new(0.0, 0.0, 0.0));
        assert_eq!(exec.execute(&host, &alice(), &["save"]).await, 0);

        assert_eq!(host.messages_to("Alice"), vec!["No plot points to save.".to_owned()]);
        assert_eq!(state.plot_count(), 0);
    }

    #[tokio::test]
    async fn save_commits_selection() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path(), None);
        let exec = PlotCommandExecutor::new(state.clone());
        let host = RecordingHost::default();

        state.mark_point("Alice", Point3::new(0.0, 0.0, 0.0));
        state.mark_point("Alice", Point3::new(10.0, 0.0, 10.0));
        assert_eq!(exec.execute(&host, &alice(), &["save"]).await, 1);

        assert_eq!(host.messages_to("Alice"), vec!["Plot saved successfully!".to_owned()]);
        assert_eq!(state.plot_count(), 1);
        assert!(dir.path().join("coordinates.json").exists());
    }

    #[tokio::test]
    async fn cancel_clears_points() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path(), None);
        let exec = PlotCommandExecutor::new(state.clone());
        let host = RecordingHost::default();

        state.mark_point("Alice", Point3::new(0.0, 0.0, 0.0));
        assert_eq!(exec.execute(&host, &alice(), &["cancel"]).await, 1);
        assert_eq!(exec.execute(&host, &alice(), &["save"]).await, 0);

        assert_eq!(
            host.messages_to("Alice"),
            vec!["Plot points cleared.".to_owned(), "No plot points to save.".to_owned()]
        );
    }

    #[tokio::test]
    async fn unknown_subcommand_prints_usage() {
        let dir = tempfile::tempdir().unwrap();
        let exec = PlotCommandExecutor::new(test_state(dir.path(), None));
        let host = RecordingHost::default();

        assert_eq!(exec.execute(&host, &alice(), &["claim"]).await, 0);

        assert_eq!(host.messages_to("Alice"), vec!["Usage: /plot [cancel|save]".to_owned()]);
    }

    #[tokio::test]
    async fn console_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let exec = PlotCommandExecutor::new(test_state(dir.path(), None));
        let host = RecordingHost::default();

        assert_eq!(exec.execute(&host, &CommandSender::Console, &["cancel"]).await, 0);

        assert!(host.messages.lock().unwrap().is_empty());
        assert!(host.tools.lock().unwrap().is_empty());
    }
}
