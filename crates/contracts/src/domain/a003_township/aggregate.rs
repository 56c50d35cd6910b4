use crate::domain::common::ReferenceRecord;
use serde::{Deserialize, Serialize};

/// Township reference record (`GET /townships`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Township {
    #[serde(rename = "townshipID")]
    pub township_id: i64,
    pub township_name: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub state_division: Option<String>,
}

impl ReferenceRecord for Township {
    fn id(&self) -> i64 {
        self.township_id
    }

    fn display_name(&self) -> &str {
        &self.township_name
    }

    fn collection_name() -> &'static str {
        "townships"
    }
}
