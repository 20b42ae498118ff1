use std::path::Path;

use serde::de::DeserializeOwned;

use crate::StoreError;
use crate::atomic_write::atomic_write;

/// Load a TOML config file, writing `default_toml` there first if it does not
/// exist yet.
pub fn load_or_create_config<T: DeserializeOwned>(
    path: &Path,
    default_toml: &str,
) -> Result<T, StoreError> {
    let text = if path.exists() {
        std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        atomic_write(path, default_toml.as_bytes()).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("homeboundaries: Created default config at {path:?}");
        default_toml.to_owned()
    };

    toml::from_str(&text).map_err(|source| StoreError::Config {
        path: path.to_path_buf(),
        source,
    })
}
