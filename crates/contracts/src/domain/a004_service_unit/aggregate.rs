use serde::{Deserialize, Serialize};

use crate::domain::a002_fee::aggregate::FeeId;

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор единицы обслуживания
    ServiceUnitId
);

/// Единица обслуживания (сектор, квартал), привязанная к тарифу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceUnit {
    pub id: ServiceUnitId,
    pub name: String,
    pub fee_id: Option<FeeId>,
    pub customer_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignFeeDto {
    pub service_unit_id: String,
    pub fee_id: Option<String>,
}
