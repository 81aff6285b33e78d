//! View projection
//!
//! Filtered and sorted views of the record store for display. Filtering
//! never mutates the store; sorting direction is tracked per column and
//! toggles on repeated invocation, independently of other columns.

use std::collections::HashMap;

use crate::models::record::{Column, InventoryRecord};

#[derive(Debug, Default)]
pub struct ViewService {
    sort_order: HashMap<Column, bool>,
}

impl ViewService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match against every field of every
    /// record, original order preserved.
    pub fn filter<'a, I>(&self, records: I, term: &str) -> Vec<&'a InventoryRecord>
    where
        I: IntoIterator<Item = &'a InventoryRecord>,
    {
        let needle = term.to_lowercase();
        records
            .into_iter()
            .filter(|record| {
                Column::ALL
                    .iter()
                    .any(|c| record.get(*c).to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Direction for the next sort of `column`: ascending on the first
    /// invocation, toggling on each repeat.
    pub fn toggle_sort(&mut self, column: Column) -> bool {
        let ascending = self.sort_order.entry(column).or_insert(false);
        *ascending = !*ascending;
        *ascending
    }
}
