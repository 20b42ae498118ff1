//! Plot registry: the committed plots, in the order they were saved.

use boundary_store::PlotFile;
use boundary_types::Plot;

use crate::error::PlotError;

/// Every committed plot plus the document that backs it.
///
/// Insertion order is preserved; it decides which plot wins where plots overlap.
pub struct PlotRegistry {
    plots: Vec<Plot>,
    file: PlotFile,
}

impl PlotRegistry {
    /// Read the document. A missing file gives an empty registry; a corrupt
    /// one is an error and must stop the plugin from enabling.
    pub fn load(file: PlotFile) -> Result<Self, PlotError> {
        let plots = file.load()?;
        Ok(Self { plots, file })
    }

    /// Add `plot` at the end and rewrite the document.
    ///
    /// If the write fails the plot is dropped again, so memory never holds a
    /// plot the document does not.
    pub fn append(&mut self, plot: Plot) -> Result<&Plot, PlotError> {
        self.plots.push(plot);
        if let Err(e) = self.file.save(&self.plots) {
            self.plots.pop();
            return Err(e.into());
        }
        let index = self.plots.len() - 1;
        Ok(&self.plots[index])
    }

    #[must_use]
    pub fn all(&self) -> &[Plot] {
        &self.plots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Plots claimed by `player`, in registry order.
    pub fn owned_by<'a>(&'a self, player: &'a str) -> impl Iterator<Item = &'a Plot> + 'a {
        self.plots.iter().filter(move |p| p.is_owned_by(player))
    }

    #[must_use]
    pub fn file(&self) -> &PlotFile {
        &self.file
    }
}
