//! Data-driven form descriptors
//!
//! Each item type maps to the ordered list of columns its form collects.
//! Adding a new item type means adding a table entry here, nothing else.
//! Type and Status are never collected; they are stamped when a draft is
//! accepted.

use crate::models::enums::ItemType;
use crate::models::record::Column;

/// Form layout for one item type
#[derive(Debug, Clone, Copy)]
pub struct FormDescriptor {
    pub item_type: ItemType,
    pub title: &'static str,
    pub fields: &'static [Column],
}

/// Full hardware field set, collected for computers
const DEVICE_FIELDS: &[Column] = &[
    Column::AssetNumber,
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
];

/// Reduced field set for items without their own hardware details
const BASIC_FIELDS: &[Column] = &[
    Column::AssetNumber,
    Column::Name,
    Column::Model,
    Column::Sector,
    Column::User,
    Column::PurchaseDate,
    Column::Notes,
];

const DESCRIPTORS: &[FormDescriptor] = &[
    FormDescriptor {
        item_type: ItemType::Notebook,
        title: "Notebook details",
        fields: DEVICE_FIELDS,
    },
    FormDescriptor {
        item_type: ItemType::Desktop,
        title: "Desktop details",
        fields: DEVICE_FIELDS,
    },
    FormDescriptor {
        item_type: ItemType::Monitor,
        title: "Monitor details",
        fields: BASIC_FIELDS,
    },
    FormDescriptor {
        item_type: ItemType::Other,
        title: "Other item details",
        fields: BASIC_FIELDS,
    },
];

/// Descriptor for the given item type
pub fn descriptor(item_type: ItemType) -> &'static FormDescriptor {
    DESCRIPTORS
        .iter()
        .find(|d| d.item_type == item_type)
        .expect("every item type has a form descriptor")
}
