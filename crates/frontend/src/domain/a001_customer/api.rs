use contracts::domain::a001_customer::aggregate::Customer;

use crate::shared::api_utils::{ApiClient, ApiError};

pub const COLLECTION: &str = "customers";

pub async fn fetch_customers(client: &ApiClient) -> Result<Vec<Customer>, ApiError> {
    client.fetch_collection(COLLECTION).await
}
