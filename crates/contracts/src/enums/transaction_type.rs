use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuel movement process recorded by a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Supplier to warehouse or site
    #[serde(rename = "Replenishment Process 1")]
    SupplierReplenishment,
    /// Warehouse to site
    #[serde(rename = "Replenishment Process 2")]
    WarehouseReplenishment,
    /// Any other transfer
    #[serde(rename = "Fuel Transfer Process")]
    Transfer,
}

impl TransactionType {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::SupplierReplenishment => "Replenishment Process 1",
            TransactionType::WarehouseReplenishment => "Replenishment Process 2",
            TransactionType::Transfer => "Fuel Transfer Process",
        }
    }

    /// Label shown in the transaction type select
    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionType::SupplierReplenishment => {
                "Replenishment Process 1 (Supplier to WH/Site)"
            }
            TransactionType::WarehouseReplenishment => {
                "Replenishment Process 2 (Warehouse to Site)"
            }
            TransactionType::Transfer => "Fuel Transfer Process (Other Transfers)",
        }
    }

    pub fn all() -> Vec<TransactionType> {
        vec![
            TransactionType::SupplierReplenishment,
            TransactionType::WarehouseReplenishment,
            TransactionType::Transfer,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_wire_code() {
        let json = serde_json::to_string(&TransactionType::WarehouseReplenishment).unwrap();
        assert_eq!(json, "\"Replenishment Process 2\"");

        let parsed: TransactionType = serde_json::from_str("\"Fuel Transfer Process\"").unwrap();
        assert_eq!(parsed, TransactionType::Transfer);
        assert_eq!(TransactionType::from_code(parsed.code()), Some(parsed));
    }
}
