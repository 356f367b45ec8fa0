use serde::{Deserialize, Serialize};

use crate::domain::a001_customer::aggregate::CustomerId;

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор показания счётчика
    MeterReadingId
);

/// Показание счётчика за расчётный период
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    pub id: MeterReadingId,
    pub customer_id: CustomerId,
    /// Billing period, `YYYY-MM`
    pub period: String,
    pub previous_value: f64,
    pub current_value: f64,
    pub read_at: String,
}

impl MeterReading {
    /// Consumption in cubic metres; a meter rollover or bad entry never goes negative.
    pub fn consumption(&self) -> f64 {
        (self.current_value - self.previous_value).max(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeterReadingDto {
    pub customer_id: String,
    pub period: String,
    pub current_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(previous: f64, current: f64) -> MeterReading {
        MeterReading {
            id: MeterReadingId::new_v4(),
            customer_id: CustomerId::new_v4(),
            period: "2024-05".to_string(),
            previous_value: previous,
            current_value: current,
            read_at: "2024-05-31".to_string(),
        }
    }

    #[test]
    fn test_consumption() {
        assert_eq!(reading(120.0, 134.5).consumption(), 14.5);
        assert_eq!(reading(200.0, 150.0).consumption(), 0.0);
    }
}
