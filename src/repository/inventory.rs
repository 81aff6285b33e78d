//! Inventory record store
//!
//! An ordered, key-unique table of inventory records. Insertion order is the
//! default display order; an explicit sort reorders the store in place.
//! Asset Number is the unique key; every mutation checks it before touching
//! the table.

use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::record::{Column, InventoryRecord},
};

#[derive(Debug, Default)]
pub struct InventoryRepository {
    records: IndexMap<String, InventoryRecord>,
}

impl InventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, asset_number: &str) -> bool {
        self.records.contains_key(asset_number)
    }

    /// Get a record by asset number
    pub fn get(&self, asset_number: &str) -> AppResult<&InventoryRecord> {
        self.records
            .get(asset_number)
            .ok_or_else(|| AppError::NotFound(asset_number.to_string()))
    }

    /// Append a record, preserving insertion order. Fails if the asset
    /// number is already present; the store is left unchanged.
    pub fn insert(&mut self, record: InventoryRecord) -> AppResult<()> {
        if self.records.contains_key(&record.asset_number) {
            return Err(AppError::DuplicateKey(record.asset_number));
        }
        self.records.insert(record.asset_number.clone(), record);
        Ok(())
    }

    /// Replace the full row for `asset_number` in place, keeping its
    /// position. The replacement may carry a different asset number as long
    /// as the new key does not collide with another row.
    pub fn update(&mut self, asset_number: &str, record: InventoryRecord) -> AppResult<()> {
        let index = self
            .records
            .get_index_of(asset_number)
            .ok_or_else(|| AppError::NotFound(asset_number.to_string()))?;

        if record.asset_number == asset_number {
            self.records[index] = record;
        } else {
            if self.records.contains_key(&record.asset_number) {
                return Err(AppError::DuplicateKey(record.asset_number));
            }
            self.records.shift_remove_index(index);
            self.records
                .shift_insert(index, record.asset_number.clone(), record);
        }
        Ok(())
    }

    /// Remove the row with the given asset number
    pub fn delete(&mut self, asset_number: &str) -> AppResult<()> {
        self.records
            .shift_remove(asset_number)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(asset_number.to_string()))
    }

    /// All records, in current store order
    pub fn scan(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.records.values()
    }

    /// Stable sort by a column's value. Empty values sort last regardless
    /// of direction.
    pub fn sort_by_column(&mut self, column: Column, ascending: bool) {
        self.records.sort_by(|_, a, _, b| {
            let (va, vb) = (a.get(column), b.get(column));
            match (va.is_empty(), vb.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    if ascending {
                        va.cmp(vb)
                    } else {
                        vb.cmp(va)
                    }
                }
            }
        });
    }

    /// Replace the whole table, e.g. after loading a file. Duplicate asset
    /// numbers in the incoming set reject the replacement and leave the
    /// store unchanged.
    pub fn replace_all(&mut self, records: Vec<InventoryRecord>) -> AppResult<()> {
        let mut table = IndexMap::with_capacity(records.len());
        for record in records {
            if table.contains_key(&record.asset_number) {
                return Err(AppError::Format(format!(
                    "Duplicate asset number '{}' in loaded data",
                    record.asset_number
                )));
            }
            table.insert(record.asset_number.clone(), record);
        }
        self.records = table;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::ItemType;
    use crate::models::record::RecordDraft;

    fn record(asset: &str, name: &str) -> InventoryRecord {
        RecordDraft {
            asset_number: asset.to_string(),
            name: name.to_string(),
            sector: "IT".to_string(),
            ..Default::default()
        }
        .into_record(ItemType::Desktop)
    }

    fn keys(repo: &InventoryRepository) -> Vec<&str> {
        repo.scan().map(|r| r.asset_number.as_str()).collect()
    }

    #[test]
    fn test_scan_preserves_insertion_order() {
        let mut repo = InventoryRepository::new();
        for asset in ["C", "A", "B"] {
            repo.insert(record(asset, asset)).unwrap();
        }
        assert_eq!(keys(&repo), ["C", "A", "B"]);
    }

    #[test]
    fn test_duplicate_insert_leaves_store_unchanged() {
        let mut repo = InventoryRepository::new();
        repo.insert(record("A", "first")).unwrap();
        let err = repo.insert(record("A", "second")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("A").unwrap().name, "first");
    }

    #[test]
    fn test_update_absent_key_is_not_found() {
        let mut repo = InventoryRepository::new();
        repo.insert(record("A", "first")).unwrap();
        let err = repo.update("B", record("B", "ghost")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_update_replaces_all_fields_in_place() {
        let mut repo = InventoryRepository::new();
        repo.insert(record("A", "old")).unwrap();
        repo.insert(record("B", "other")).unwrap();

        let mut replacement = record("A", "new");
        replacement.sector = "Finance".to_string();
        repo.update("A", replacement).unwrap();

        assert_eq!(keys(&repo), ["A", "B"]);
        let updated = repo.get("A").unwrap();
        assert_eq!(updated.name, "new");
        assert_eq!(updated.sector, "Finance");
    }

    #[test]
    fn test_update_may_change_key_keeping_position() {
        let mut repo = InventoryRepository::new();
        repo.insert(record("A", "a")).unwrap();
        repo.insert(record("B", "b")).unwrap();
        repo.insert(record("C", "c")).unwrap();

        repo.update("B", record("B2", "renamed")).unwrap();
        assert_eq!(keys(&repo), ["A", "B2", "C"]);
        assert!(!repo.contains("B"));
    }

    #[test]
    fn test_update_rejects_key_collision() {
        let mut repo = InventoryRepository::new();
        repo.insert(record("A", "a")).unwrap();
        repo.insert(record("B", "b")).unwrap();

        let err = repo.update("B", record("A", "stolen")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
        assert_eq!(keys(&repo), ["A", "B"]);
    }

    #[test]
    fn test_delete_removes_key() {
        let mut repo = InventoryRepository::new();
        repo.insert(record("A", "a")).unwrap();
        repo.insert(record("B", "b")).unwrap();
        repo.delete("A").unwrap();
        assert_eq!(keys(&repo), ["B"]);
        assert!(matches!(repo.delete("A"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_sort_empty_values_last_in_both_directions() {
        let mut repo = InventoryRepository::new();
        repo.insert(record("1", "zeta")).unwrap();
        repo.insert(record("2", "")).unwrap();
        repo.insert(record("3", "alpha")).unwrap();

        repo.sort_by_column(Column::Name, true);
        assert_eq!(keys(&repo), ["3", "1", "2"]);

        repo.sort_by_column(Column::Name, false);
        assert_eq!(keys(&repo), ["1", "3", "2"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut repo = InventoryRepository::new();
        repo.insert(record("1", "same")).unwrap();
        repo.insert(record("2", "same")).unwrap();
        repo.insert(record("3", "same")).unwrap();
        repo.sort_by_column(Column::Name, true);
        assert_eq!(keys(&repo), ["1", "2", "3"]);
    }

    #[test]
    fn test_replace_all_rejects_duplicates_and_keeps_store() {
        let mut repo = InventoryRepository::new();
        repo.insert(record("A", "kept")).unwrap();

        let err = repo
            .replace_all(vec![record("X", "x"), record("X", "x again")])
            .unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
        assert_eq!(keys(&repo), ["A"]);

        repo.replace_all(vec![record("X", "x"), record("Y", "y")])
            .unwrap();
        assert_eq!(keys(&repo), ["X", "Y"]);
    }
}
