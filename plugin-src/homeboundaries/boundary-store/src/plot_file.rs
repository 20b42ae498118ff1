//! The persisted plot document: a JSON array of `{player, coordinates}`.

use std::path::{Path, PathBuf};

use boundary_types::Plot;

use crate::StoreError;
use crate::atomic_write::atomic_write;

/// Location of the plot document. Every save rewrites the whole file.
#[derive(Debug, Clone)]
pub struct PlotFile {
    path: PathBuf,
}

impl PlotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every plot in document order.
    ///
    /// A missing file is an empty registry. A file that exists but does not
    /// parse, or holds a non-finite coordinate, is an error.
    pub fn load(&self) -> Result<Vec<Plot>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let text = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let plots: Vec<Plot> =
            serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        self.check_finite(&plots)?;
        Ok(plots)
    }

    /// Overwrite the document with `plots`, pretty-printed.
    ///
    /// A non-finite coordinate is refused before anything is written: JSON
    /// would store it as `null` and the next `load` would fail.
    pub fn save(&self, plots: &[Plot]) -> Result<(), StoreError> {
        self.check_finite(plots)?;
        let json = serde_json::to_string_pretty(plots).map_err(StoreError::Encode)?;
        atomic_write(&self.path, json.as_bytes()).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn check_finite(&self, plots: &[Plot]) -> Result<(), StoreError> {
        match plots
            .iter()
            .position(|p| !(p.corner1().is_finite() && p.corner2().is_finite()))
        {
            Some(index) => Err(StoreError::InvalidPlot {
                path: self.path.clone(),
                index,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundary_types::Point3;

    fn sample() -> Vec<Plot> {
        vec![
            Plot::new("Alice", Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 10.0)),
            Plot::new("Bob", Point3::new(-3.5, 64.0, 7.25), Point3::new(-20.0, 70.0, 1.0)),
            Plot::new("Alice", Point3::new(100.0, 5.0, 100.0), Point3::new(90.0, 5.0, 90.0)),
        ]
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = PlotFile::new(dir.path().join("coordinates.json"));
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let file = PlotFile::new(dir.path().join("coordinates.json"));
        let plots = sample();

        file.save(&plots).unwrap();

        assert_eq!(file.load().unwrap(), plots);
    }

    #[test]
    fn reads_document_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coordinates.json");
        std::fs::write(
            &path,
            r#"[
                {
                    "player": "Alice",
                    "coordinates": [
                        {"x": 0, "y": 64, "z": 0},
                        {"x": 10.5, "y": 64, "z": 10}
                    ]
                }
            ]"#,
        )
        .unwrap();

        let plots = PlotFile::new(&path).load().unwrap();

        assert_eq!(plots.len(), 1);
        assert_eq!(plots[0].owner(), "Alice");
        assert_eq!(plots[0].corner2().x, 10.5);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coordinates.json");
        std::fs::write(&path, r#"[{"player": "Alice", "coordinates": "#).unwrap();

        let err = PlotFile::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }), "{err}");
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coordinates.json");
        std::fs::write(&path, r#"{"player": "Alice"}"#).unwrap();

        assert!(matches!(
            PlotFile::new(&path).load(),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn non_finite_corner_is_never_written() {
        let dir = tempfile::tempdir().unwrap();
        let file = PlotFile::new(dir.path().join("coordinates.json"));
        let mut plots = sample();
        file.save(&plots).unwrap();

        plots.push(Plot::new(
            "Carol",
            Point3::new(f64::NAN, 64.0, 0.0),
            Point3::new(10.0, 64.0, 10.0),
        ));
        let err = file.save(&plots).unwrap_err();

        assert!(matches!(err, StoreError::InvalidPlot { index: 3, .. }), "{err}");
        assert_eq!(file.load().unwrap(), sample());
    }

    #[test]
    fn save_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let file = PlotFile::new(dir.path().join("coordinates.json"));
        let mut plots = sample();

        file.save(&plots).unwrap();
        plots.truncate(1);
        file.save(&plots).unwrap();

        assert_eq!(file.load().unwrap(), plots);
    }
}
