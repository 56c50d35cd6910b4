use crate::domain::common::ReferenceRecord;
use serde::{Deserialize, Serialize};

/// Warehouse reference record (`GET /warehouses`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    #[serde(rename = "warehouseID")]
    pub warehouse_id: i64,
    pub warehouse_name: String,
    #[serde(default)]
    pub warehouse_type: Option<String>,
    #[serde(rename = "generatedIDCode", default)]
    pub generated_id_code: Option<String>,
    #[serde(default)]
    pub location_details: Option<String>,
    #[serde(rename = "townshipID", default)]
    pub township_id: Option<i64>,
    #[serde(rename = "siteID", default)]
    pub site_id: Option<i64>,
    #[serde(default)]
    pub sub_office: Option<String>,
}

impl ReferenceRecord for Warehouse {
    fn id(&self) -> i64 {
        self.warehouse_id
    }

    fn display_name(&self) -> &str {
        &self.warehouse_name
    }

    fn collection_name() -> &'static str {
        "warehouses"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "warehouseID": 5,
            "warehouseName": "WH-A",
            "warehouseType": "Main",
            "generatedIDCode": "WH-0005",
            "locationDetails": null,
            "townshipID": 3,
            "siteID": null,
            "subOffice": "North"
        }"#;
        let wh: Warehouse = serde_json::from_str(json).unwrap();
        assert_eq!(wh.to_option().id, 5);
        assert_eq!(wh.to_option().display_name, "WH-A");
        assert_eq!(wh.generated_id_code.as_deref(), Some("WH-0005"));
        assert_eq!(wh.township_id, Some(3));
        assert_eq!(wh.site_id, None);
    }
}
