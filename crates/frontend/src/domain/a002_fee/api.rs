use contracts::domain::a002_fee::aggregate::{Fee, FeeDto};

use crate::shared::api_utils::{collection_path, member_path, ApiClient, ApiError};

pub const COLLECTION: &str = "fees";

pub async fn fetch_fees(client: &ApiClient) -> Result<Vec<Fee>, ApiError> {
    client.fetch_collection(COLLECTION).await
}

/// Create when `dto.id` is empty, update otherwise
pub async fn save_fee(client: &ApiClient, dto: &FeeDto) -> Result<(), ApiError> {
    match &dto.id {
        Some(id) => client.put(&member_path(COLLECTION, id), dto).await,
        None => client.post_unit(&collection_path(COLLECTION), dto).await,
    }
}

pub async fn delete_fee(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&member_path(COLLECTION, id)).await
}
