use serde::{Deserialize, Serialize};

/// Trait for master-data records (fuel types, suppliers, sites, ...)
///
/// Each API collection names its key pair differently (`supplierID` /
/// `supplierName`, `siteID` / `siteName`, ...). This trait is the single
/// projection the UI renders from, whatever the concrete record shape.
pub trait ReferenceRecord {
    /// Numeric id assigned by the API
    fn id(&self) -> i64;

    /// Human readable name
    fn display_name(&self) -> &str;

    /// Resource path of the collection (e.g. "fueltypes")
    fn collection_name() -> &'static str;

    /// Project the record to the `{id, display_name}` option shape
    fn to_option(&self) -> ReferenceOption {
        ReferenceOption {
            id: self.id(),
            display_name: self.display_name().to_string(),
        }
    }
}

/// Unified `{id, display_name}` option rendered by select controls
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceOption {
    pub id: i64,
    pub display_name: String,
}

impl ReferenceOption {
    pub fn new(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }

    /// Value attribute of the `<option>` element
    pub fn value(&self) -> String {
        self.id.to_string()
    }
}
