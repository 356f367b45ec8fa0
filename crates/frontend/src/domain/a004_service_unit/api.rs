use contracts::domain::a004_service_unit::aggregate::{AssignFeeDto, ServiceUnit};

use crate::shared::api_utils::{member_path, ApiClient, ApiError};

pub const COLLECTION: &str = "service-units";

pub async fn fetch_service_units(client: &ApiClient) -> Result<Vec<ServiceUnit>, ApiError> {
    client.fetch_collection(COLLECTION).await
}

/// Re-points a service unit at another tariff (or none)
pub async fn assign_fee(client: &ApiClient, dto: &AssignFeeDto) -> Result<(), ApiError> {
    let path = format!("{}/fee", member_path(COLLECTION, &dto.service_unit_id));
    client.post_unit(&path, dto).await
}
