use crate::domain::common::ReferenceRecord;
use serde::{Deserialize, Serialize};

/// Supplier reference record (`GET /suppliers`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(rename = "supplierID")]
    pub supplier_id: i64,
    pub supplier_name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl ReferenceRecord for Supplier {
    fn id(&self) -> i64 {
        self.supplier_id
    }

    fn display_name(&self) -> &str {
        &self.supplier_name
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }
}
