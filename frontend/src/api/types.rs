use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Site parameters collected on the input page. Values stay as the raw
/// input strings until the analysis service consumes them; field names
/// serialize camelCase to match the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysisRequest {
    pub latitude: String,
    pub longitude: String,
    pub energy_consumption: String,
}

/// Error envelope returned by the API, also used for client-side failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}
