use crate::api::{ApiClient, ApiError, CostAnalysisRequest};
use serde_json::Value;
use std::rc::Rc;

#[derive(Clone)]
pub struct CostAnalysisRepository {
    client: Rc<ApiClient>,
}

impl CostAnalysisRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_analysis(&self, request: &CostAnalysisRequest) -> Result<Value, ApiError> {
        self.client.fetch_cost_analysis(request).await
    }
}
