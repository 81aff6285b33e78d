//! Repository layer for the in-memory record store

pub mod inventory;

pub use inventory::InventoryRepository;

/// Main repository struct holding the record store
#[derive(Debug, Default)]
pub struct Repository {
    pub inventory: InventoryRepository,
}

impl Repository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }
}
