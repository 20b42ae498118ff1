//! Error taxonomy for plot operations.

use boundary_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// Save attempted with fewer than two marked points.
    #[error("No plot points to save.")]
    NoSelection,
    /// A third point was marked before the selection was saved or cancelled.
    #[error("Both plot points are already set. Use /plot save or /plot cancel.")]
    SelectionFull,
    /// The plot document could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Unrecognized `/plot` subcommand.
    #[error("Usage: /plot [cancel|save]")]
    CommandMisuse(String),
    #[error("This command can only be used in-game!")]
    NotInGame,
}
