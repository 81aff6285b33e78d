//! Inventory record schema
//!
//! Every record stores the same fixed, ordered set of columns regardless of
//! item type; fields that do not apply to a type are left empty. All values
//! are stored as strings, matching the spreadsheet representation.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::enums::{ItemType, Status};

/// Date format used for the purchase date field
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

/// The fixed column schema, in stored order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    AssetNumber,
    Type,
    Name,
    Model,
    Sector,
    User,
    Ram,
    Os,
    Processor,
    PurchaseDate,
    LastMaintenance,
    Notes,
    Status,
}

impl Column {
    pub const ALL: [Column; 13] = [
        Column::AssetNumber,
        Column::Type,
        Column::Name,
        Column::Model,
        Column::Sector,
        Column::User,
        Column::Ram,
        Column::Os,
        Column::Processor,
        Column::PurchaseDate,
        Column::LastMaintenance,
        Column::Notes,
        Column::Status,
    ];

    /// Canonical header name, used in spreadsheet and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::AssetNumber => "Asset Number",
            Column::Type => "Type",
            Column::Name => "Name",
            Column::Model => "Model",
            Column::Sector => "Sector",
            Column::User => "User",
            Column::Ram => "RAM",
            Column::Os => "OS",
            Column::Processor => "Processor",
            Column::PurchaseDate => "Purchase Date",
            Column::LastMaintenance => "Last Maintenance",
            Column::Notes => "Notes",
            Column::Status => "Status",
        }
    }

    /// The header row, in schema order
    pub fn headers() -> [&'static str; 13] {
        Self::ALL.map(|c| c.as_str())
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Column::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == needle)
            .ok_or_else(|| format!("Unknown column: {s}"))
    }
}

// ---------------------------------------------------------------------------
// InventoryRecord
// ---------------------------------------------------------------------------

/// One inventory item's full field set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(rename = "Asset Number")]
    pub asset_number: String,
    #[serde(rename = "Type")]
    pub item_type: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "RAM")]
    pub ram: String,
    #[serde(rename = "OS")]
    pub os: String,
    #[serde(rename = "Processor")]
    pub processor: String,
    #[serde(rename = "Purchase Date")]
    pub purchase_date: String,
    #[serde(rename = "Last Maintenance")]
    pub last_maintenance: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl InventoryRecord {
    /// Value of the given schema column
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::AssetNumber => &self.asset_number,
            Column::Type => &self.item_type,
            Column::Name => &self.name,
            Column::Model => &self.model,
            Column::Sector => &self.sector,
            Column::User => &self.user,
            Column::Ram => &self.ram,
            Column::Os => &self.os,
            Column::Processor => &self.processor,
            Column::PurchaseDate => &self.purchase_date,
            Column::LastMaintenance => &self.last_maintenance,
            Column::Notes => &self.notes,
            Column::Status => &self.status,
        }
    }

    /// All field values, in schema order
    pub fn values(&self) -> [&str; 13] {
        Column::ALL.map(|c| self.get(c))
    }

    /// Build a record from a row of cell values in schema order
    pub fn from_row(row: [String; 13]) -> Self {
        let [asset_number, item_type, name, model, sector, user, ram, os, processor, purchase_date, last_maintenance, notes, status] =
            row;
        Self {
            asset_number,
            item_type,
            name,
            model,
            sector,
            user,
            ram,
            os,
            processor,
            purchase_date,
            last_maintenance,
            notes,
            status,
        }
    }
}

// ---------------------------------------------------------------------------
// RecordDraft
// ---------------------------------------------------------------------------

/// Raw form input for a record, before validation. Type and status are
/// stamped by the caller when the draft is accepted.
#[derive(Debug, Clone, Default, Validate)]
pub struct RecordDraft {
    #[validate(length(min = 1, message = "Field 'Asset Number' is required"))]
    pub asset_number: String,
    #[validate(length(min = 1, message = "Field 'Name' is required"))]
    pub name: String,
    pub model: String,
    #[validate(length(min = 1, message = "Field 'Sector' is required"))]
    pub sector: String,
    pub user: String,
    #[validate(custom(function = validate_ram))]
    pub ram: String,
    pub os: String,
    pub processor: String,
    #[validate(custom(function = validate_purchase_date))]
    pub purchase_date: String,
    pub last_maintenance: String,
    pub notes: String,
}

impl RecordDraft {
    /// Prefill a draft from an existing record, for editing
    pub fn from_record(record: &InventoryRecord) -> Self {
        Self {
            asset_number: record.asset_number.clone(),
            name: record.name.clone(),
            model: record.model.clone(),
            sector: record.sector.clone(),
            user: record.user.clone(),
            ram: record.ram.clone(),
            os: record.os.clone(),
            processor: record.processor.clone(),
            purchase_date: record.purchase_date.clone(),
            last_maintenance: record.last_maintenance.clone(),
            notes: record.notes.clone(),
        }
    }

    /// Current value of a form column, for prompt prefills
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::AssetNumber => &self.asset_number,
            Column::Name => &self.name,
            Column::Model => &self.model,
            Column::Sector => &self.sector,
            Column::User => &self.user,
            Column::Ram => &self.ram,
            Column::Os => &self.os,
            Column::Processor => &self.processor,
            Column::PurchaseDate => &self.purchase_date,
            Column::LastMaintenance => &self.last_maintenance,
            Column::Notes => &self.notes,
            // Stamped, never part of a form
            Column::Type | Column::Status => "",
        }
    }

    /// Set a form column's value. Stamped columns are ignored.
    pub fn set(&mut self, column: Column, value: String) {
        match column {
            Column::AssetNumber => self.asset_number = value,
            Column::Name => self.name = value,
            Column::Model => self.model = value,
            Column::Sector => self.sector = value,
            Column::User => self.user = value,
            Column::Ram => self.ram = value,
            Column::Os => self.os = value,
            Column::Processor => self.processor = value,
            Column::PurchaseDate => self.purchase_date = value,
            Column::LastMaintenance => self.last_maintenance = value,
            Column::Notes => self.notes = value,
            Column::Type | Column::Status => {}
        }
    }

    /// Build the stored record, stamping the item type and the default
    /// status. Values are trimmed the way the form collected them.
    pub fn into_record(self, item_type: ItemType) -> InventoryRecord {
        InventoryRecord {
            asset_number: self.asset_number,
            item_type: item_type.to_string(),
            name: self.name,
            model: self.model,
            sector: self.sector,
            user: self.user,
            ram: self.ram,
            os: self.os,
            processor: self.processor,
            purchase_date: self.purchase_date,
            last_maintenance: self.last_maintenance,
            notes: self.notes,
            status: Status::default().to_string(),
        }
    }
}

/// Purchase date, when present, must parse as DD/MM/YYYY and not be later
/// than today.
fn validate_purchase_date(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| field_error("purchase_date", "Invalid date format (DD/MM/YYYY)"))?;
    if date > Local::now().date_naive() {
        return Err(field_error(
            "purchase_date",
            "Purchase date cannot be in the future",
        ));
    }
    Ok(())
}

/// RAM, when present, must be a number
fn validate_ram(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.parse::<f64>().is_ok() {
        return Ok(());
    }
    Err(field_error("ram", "RAM must be a number"))
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
