//! Write-once holder for the loaded dataset

use std::sync::{Arc, OnceLock};

use super::dataset::Dataset;

/// Shared slot filled once by the loader and read by every query.
///
/// Readers never block: before the loader finishes, `get` returns `None`.
#[derive(Debug, Default)]
pub struct DatasetSlot {
    cell: OnceLock<Arc<Dataset>>,
}

impl DatasetSlot {
    /// Creates an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already holds a dataset
    pub fn loaded(dataset: Dataset) -> Self {
        let slot = Self::new();
        let _ = slot.cell.set(Arc::new(dataset));
        slot
    }

    /// Installs the dataset. Returns it back if the slot was already filled.
    pub fn install(&self, dataset: Arc<Dataset>) -> Result<(), Arc<Dataset>> {
        self.cell.set(dataset)
    }

    /// Returns the dataset, if loaded
    pub fn get(&self) -> Option<Arc<Dataset>> {
        self.cell.get().cloned()
    }

    /// Returns true once the dataset is installed
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot() {
        let slot = DatasetSlot::new();
        assert!(!slot.is_loaded());
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_install_once() {
        let slot = DatasetSlot::new();
        assert!(slot.install(Arc::new(Dataset::from_features(Vec::new()))).is_ok());
        assert!(slot.is_loaded());

        let second = slot.install(Arc::new(Dataset::from_features(Vec::new())));
        assert!(second.is_err());
    }

    #[test]
    fn test_loaded_constructor() {
        let slot = DatasetSlot::loaded(Dataset::from_features(Vec::new()));
        assert!(slot.get().is_some_and(|d| d.is_empty()));
    }
}
