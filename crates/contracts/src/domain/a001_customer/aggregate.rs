use serde::{Deserialize, Serialize};

use crate::domain::a004_service_unit::aggregate::ServiceUnitId;

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор абонента
    CustomerId
);

/// Абонент консорциума (владелец лицевого счёта и счётчика)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub account_number: String,
    pub full_name: String,
    pub address: String,
    pub meter_number: String,
    pub service_unit_id: Option<ServiceUnitId>,
    pub email: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: Option<String>,
    pub account_number: String,
    pub full_name: String,
    pub address: String,
    pub meter_number: String,
    pub service_unit_id: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: Some(c.id.to_string()),
            account_number: c.account_number.clone(),
            full_name: c.full_name.clone(),
            address: c.address.clone(),
            meter_number: c.meter_number.clone(),
            service_unit_id: c.service_unit_id.map(|id| id.to_string()),
            email: c.email.clone(),
            is_active: c.is_active,
        }
    }
}
