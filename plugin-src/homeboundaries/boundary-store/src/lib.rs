//! Disk persistence for HomeBoundaries.
//!
//! Decoupled from the plugin: owns the plot document format and config file
//! handling, nothing else.

mod atomic_write;
mod config;
mod plot_file;

use std::path::PathBuf;

pub use config::load_or_create_config;
pub use plot_file::PlotFile;

/// Everything that can go wrong reading or writing plugin files.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed plot document {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("plot #{index} in {} has a non-finite coordinate", .path.display())]
    InvalidPlot { path: PathBuf, index: usize },
    #[error("failed to encode plot document: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
