use serde::{Deserialize, Serialize};

/// Success body of every write endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteAck {
    pub message: String,
    /// Returned by `POST /fueltransactions` only
    #[serde(rename = "usageTransitionID", default)]
    pub usage_transition_id: Option<String>,
}

/// Error body returned with any non-success status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
