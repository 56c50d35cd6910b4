use crate::domain::common::ReferenceRecord;
use serde::{Deserialize, Serialize};

/// Site reference record (`GET /sites`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(rename = "siteID")]
    pub site_id: i64,
    pub site_name: String,
    #[serde(rename = "townshipID", default)]
    pub township_id: Option<i64>,
    #[serde(default)]
    pub location_details: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl ReferenceRecord for Site {
    fn id(&self) -> i64 {
        self.site_id
    }

    fn display_name(&self) -> &str {
        &self.site_name
    }

    fn collection_name() -> &'static str {
        "sites"
    }
}
