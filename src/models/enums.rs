//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ItemType
// ---------------------------------------------------------------------------

/// Inventory item category, selecting which form fields apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Notebook,
    Desktop,
    Monitor,
    Other,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Notebook,
        ItemType::Desktop,
        ItemType::Monitor,
        ItemType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Notebook => "Notebook",
            ItemType::Desktop => "Desktop",
            ItemType::Monitor => "Monitor",
            ItemType::Other => "Other",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "notebook" => Ok(ItemType::Notebook),
            "desktop" => Ok(ItemType::Desktop),
            "monitor" => Ok(ItemType::Monitor),
            "other" => Ok(ItemType::Other),
            _ => Err(format!("Unknown item type: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Item lifecycle status. Forms always stamp `Active`; the other values
/// survive load and round-trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Maintenance,
    Retired,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Maintenance => "Maintenance",
            Status::Retired => "Retired",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_parse_roundtrip() {
        for item_type in ItemType::ALL {
            assert_eq!(item_type.as_str().parse::<ItemType>(), Ok(item_type));
        }
        assert!("printer".parse::<ItemType>().is_err());
    }
}
