use contracts::domain::a006_bill::aggregate::{Bill, GenerateBillsRequest, GenerateBillsResponse};

use crate::shared::api_utils::{collection_path, ApiClient, ApiError};

pub const COLLECTION: &str = "bills";

pub async fn fetch_bills(client: &ApiClient) -> Result<Vec<Bill>, ApiError> {
    client.fetch_collection(COLLECTION).await
}

/// Server-side bill run for one period; amounts are computed by the backend
pub async fn generate_bills(
    client: &ApiClient,
    period: &str,
) -> Result<GenerateBillsResponse, ApiError> {
    let request = GenerateBillsRequest {
        period: period.to_string(),
    };
    let path = format!("{}/generate", collection_path(COLLECTION));
    client.post(&path, &request).await
}
