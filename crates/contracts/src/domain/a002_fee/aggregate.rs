use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор тарифа
    FeeId
);

/// Тариф: фиксированная плата плюс цена за кубометр
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub id: FeeId,
    pub code: String,
    pub description: String,
    /// Price per cubic metre
    pub unit_price: f64,
    /// Monthly charge applied regardless of consumption
    pub fixed_charge: f64,
    /// First billing period the tariff applies to, `YYYY-MM`
    pub valid_from: String,
    pub is_active: bool,
}

/// Create/update payload. `id` is `None` when creating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeeDto {
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub unit_price: f64,
    pub fixed_charge: f64,
    pub valid_from: String,
    pub is_active: bool,
}

impl From<&Fee> for FeeDto {
    fn from(f: &Fee) -> Self {
        Self {
            id: Some(f.id.to_string()),
            code: f.code.clone(),
            description: f.description.clone(),
            unit_price: f.unit_price,
            fixed_charge: f.fixed_charge,
            valid_from: f.valid_from.clone(),
            is_active: f.is_active,
        }
    }
}
