//! Business logic services

pub mod inventory;
pub mod persistence;
pub mod view;

use crate::repository::Repository;

/// Container for all services
pub struct Services {
    pub inventory: inventory::InventoryService,
    pub view: view::ViewService,
    pub persistence: persistence::PersistenceService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            inventory: inventory::InventoryService::new(repository),
            view: view::ViewService::new(),
            persistence: persistence::PersistenceService::new(),
        }
    }
}
