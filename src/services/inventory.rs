//! Inventory service
//!
//! Validates drafts, stamps type and status, and mutates the record store.
//! Every accepted mutation is logged.

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        enums::ItemType,
        record::{Column, InventoryRecord, RecordDraft},
    },
    repository::Repository,
};

pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate a draft and append it as a new record
    pub fn add(&mut self, draft: RecordDraft, item_type: ItemType) -> AppResult<InventoryRecord> {
        draft.validate()?;
        let record = draft.into_record(item_type);
        self.repository.inventory.insert(record.clone())?;
        tracing::info!("Item added: {} - {}", record.item_type, record.name);
        Ok(record)
    }

    /// Validate a draft and replace the full row for `asset_number`
    pub fn update(
        &mut self,
        asset_number: &str,
        draft: RecordDraft,
        item_type: ItemType,
    ) -> AppResult<InventoryRecord> {
        draft.validate()?;
        let record = draft.into_record(item_type);
        self.repository.inventory.update(asset_number, record.clone())?;
        tracing::info!("Item updated: {} - {}", record.item_type, record.name);
        Ok(record)
    }

    /// Remove the record with the given asset number
    pub fn remove(&mut self, asset_number: &str) -> AppResult<()> {
        self.repository.inventory.delete(asset_number)?;
        tracing::info!("Item deleted: {asset_number}");
        Ok(())
    }

    /// Look up a record by asset number
    pub fn get(&self, asset_number: &str) -> AppResult<&InventoryRecord> {
        self.repository.inventory.get(asset_number)
    }

    /// The item type stored on a record, for reopening the matching form.
    /// Unknown stored values fall back to `Other`.
    pub fn item_type_of(&self, asset_number: &str) -> AppResult<ItemType> {
        let record = self.repository.inventory.get(asset_number)?;
        Ok(record.item_type.parse().unwrap_or(ItemType::Other))
    }

    /// All records, in current store order
    pub fn records(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.repository.inventory.scan()
    }

    pub fn len(&self) -> usize {
        self.repository.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.inventory.is_empty()
    }

    /// Reorder the store by a column
    pub fn sort(&mut self, column: Column, ascending: bool) {
        self.repository.inventory.sort_by_column(column, ascending);
        let direction = if ascending { "ascending" } else { "descending" };
        tracing::info!("Sorted by '{column}' ({direction})");
    }

    /// Replace the whole table after a successful load
    pub fn replace_all(&mut self, records: Vec<InventoryRecord>) -> AppResult<usize> {
        self.repository.inventory.replace_all(records)?;
        Ok(self.repository.inventory.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn service() -> InventoryService {
        InventoryService::new(Repository::new())
    }

    fn draft(asset: &str) -> RecordDraft {
        RecordDraft {
            asset_number: asset.to_string(),
            name: "Machine".to_string(),
            sector: "IT".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_rejects_invalid_draft_without_mutating() {
        let mut service = service();
        let err = service.add(RecordDraft::default(), ItemType::Notebook).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(service.is_empty());
    }

    #[test]
    fn test_add_stamps_type_and_status() {
        let mut service = service();
        let record = service.add(draft("A1"), ItemType::Monitor).unwrap();
        assert_eq!(record.item_type, "Monitor");
        assert_eq!(record.status, "Active");
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_update_requires_existing_key() {
        let mut service = service();
        let err = service
            .update("missing", draft("missing"), ItemType::Desktop)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_item_type_of_falls_back_to_other() {
        let mut service = service();
        service.add(draft("A1"), ItemType::Notebook).unwrap();
        assert_eq!(service.item_type_of("A1").unwrap(), ItemType::Notebook);

        let mut odd = draft("A2").into_record(ItemType::Other);
        odd.item_type = "Typewriter".to_string();
        service.replace_all(vec![odd]).unwrap();
        assert_eq!(service.item_type_of("A2").unwrap(), ItemType::Other);
    }
}
