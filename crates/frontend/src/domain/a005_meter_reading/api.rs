use contracts::domain::a005_meter_reading::aggregate::{CreateMeterReadingDto, MeterReading};

use crate::shared::api_utils::{collection_path, ApiClient, ApiError};

pub const COLLECTION: &str = "meter-readings";

pub async fn fetch_readings(client: &ApiClient) -> Result<Vec<MeterReading>, ApiError> {
    client.fetch_collection(COLLECTION).await
}

pub async fn create_reading(
    client: &ApiClient,
    dto: &CreateMeterReadingDto,
) -> Result<MeterReading, ApiError> {
    client.post(&collection_path(COLLECTION), dto).await
}
