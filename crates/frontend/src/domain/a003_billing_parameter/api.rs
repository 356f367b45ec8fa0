use contracts::domain::a003_billing_parameter::aggregate::{
    BillingParameter, UpdateBillingParameterDto,
};

use crate::shared::api_utils::{member_path, ApiClient, ApiError};

pub const COLLECTION: &str = "billing-parameters";

pub async fn fetch_parameters(client: &ApiClient) -> Result<Vec<BillingParameter>, ApiError> {
    client.fetch_collection(COLLECTION).await
}

pub async fn update_parameter(
    client: &ApiClient,
    dto: &UpdateBillingParameterDto,
) -> Result<(), ApiError> {
    client.put(&member_path(COLLECTION, &dto.key), dto).await
}
