use serde::{Deserialize, Serialize};

use crate::domain::a001_customer::aggregate::CustomerId;

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор счёта
    BillId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    Issued,
    Paid,
    Overdue,
    Cancelled,
}

impl BillStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Issued => "Issued",
            BillStatus::Paid => "Paid",
            BillStatus::Overdue => "Overdue",
            BillStatus::Cancelled => "Cancelled",
        }
    }
}

/// Строка счёта (тарифная составляющая)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillLine {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub amount: f64,
}

/// Счёт абонента за расчётный период. Суммы рассчитывает сервер.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub number: String,
    pub customer_id: CustomerId,
    /// Billing period, `YYYY-MM`
    pub period: String,
    pub issue_date: String,
    pub due_date: String,
    pub consumption: f64,
    pub lines: Vec<BillLine>,
    pub total: f64,
    pub status: BillStatus,
}

/// Asks the backend to generate bills for every active customer in a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBillsRequest {
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBillsResponse {
    pub generated: u32,
    pub skipped: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_bill() {
        let json = r#"{
            "id": "6f1c0c7e-3b8b-4c1f-9d6a-0b7f0f8a2c11",
            "number": "B-2024-0001",
            "customer_id": "0d4f7a52-90a4-4d35-8f1e-2b1f8e6f2a90",
            "period": "2024-05",
            "issue_date": "2024-06-01",
            "due_date": "2024-06-20",
            "consumption": 14.5,
            "lines": [
                {"description": "Fixed charge", "quantity": 1.0, "unit_price": 5.0, "amount": 5.0},
                {"description": "Water", "quantity": 14.5, "unit_price": 1.2, "amount": 17.4}
            ],
            "total": 22.4,
            "status": "overdue"
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.status, BillStatus::Overdue);
        assert_eq!(bill.lines.len(), 2);
        assert_eq!(bill.customer_id.to_string(), "0d4f7a52-90a4-4d35-8f1e-2b1f8e6f2a90");
    }
}
