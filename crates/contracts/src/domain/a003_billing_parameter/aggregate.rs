use serde::{Deserialize, Serialize};

/// Параметр биллинга (например, текущий период или ставка пени)
///
/// Parameters are keyed by name; the backend owns their meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingParameter {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBillingParameterDto {
    pub key: String,
    pub value: String,
}
