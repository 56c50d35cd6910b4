use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of location fuel moves between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    Supplier,
    Warehouse,
    Site,
}

impl LocationType {
    /// Wire code, also used as the `<option>` value
    pub fn code(&self) -> &'static str {
        match self {
            LocationType::Supplier => "Supplier",
            LocationType::Warehouse => "Warehouse",
            LocationType::Site => "Site",
        }
    }

    /// Every location type, in display order
    pub fn all() -> Vec<LocationType> {
        vec![
            LocationType::Supplier,
            LocationType::Warehouse,
            LocationType::Site,
        ]
    }

    /// Location types fuel can be delivered to. Suppliers only ever ship.
    pub fn destinations() -> Vec<LocationType> {
        vec![LocationType::Warehouse, LocationType::Site]
    }

    /// Whether the type is admissible as a transaction destination
    pub fn is_destination(&self) -> bool {
        !matches!(self, LocationType::Supplier)
    }

    /// Parse from the wire code; anything else (including "") is `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Supplier" => Some(LocationType::Supplier),
            "Warehouse" => Some(LocationType::Warehouse),
            "Site" => Some(LocationType::Site),
            _ => None,
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(LocationType::from_code("Warehouse"), Some(LocationType::Warehouse));
        assert_eq!(LocationType::from_code(""), None);
        assert_eq!(LocationType::from_code("warehouse"), None);
    }

    #[test]
    fn test_destinations_exclude_supplier() {
        assert!(!LocationType::destinations().contains(&LocationType::Supplier));
        assert!(LocationType::Site.is_destination());
    }
}
