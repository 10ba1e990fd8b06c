use reqwest::Client;

use crate::{
    api::types::{ApiError, CostAnalysisRequest},
    config,
};

/// Thin wrapper around `reqwest::Client`. The base URL normally comes from
/// the runtime config; tests inject one via `new_with_base_url`.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Fetches the old-system vs new-system cost analysis for a site. The
    /// form fields travel as query parameters; the payload shape is owned
    /// by the analysis service, so it stays an untyped JSON value.
    pub async fn fetch_cost_analysis(
        &self,
        request: &CostAnalysisRequest,
    ) -> Result<serde_json::Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{}/solar", base_url))
            .query(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|e| {
                ApiError::request_failed(format!("Failed to parse response: {}", e))
            })
        } else {
            let error = response.json::<ApiError>().await.unwrap_or_else(|_| {
                ApiError::request_failed(format!("Analysis request returned {}", status))
            });
            Err(error)
        }
    }
}
