use contracts::domain::a002_fee::aggregate::{Fee, FeeDto};

/// Raw text of the tariff form, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeeForm {
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub unit_price: String,
    pub fixed_charge: String,
    pub valid_from: String,
    pub is_active: bool,
}

impl FeeForm {
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    pub fn from_fee(fee: &Fee) -> Self {
        Self {
            id: Some(fee.id.to_string()),
            code: fee.code.clone(),
            description: fee.description.clone(),
            unit_price: fee.unit_price.to_string(),
            fixed_charge: fee.fixed_charge.to_string(),
            valid_from: fee.valid_from.clone(),
            is_active: fee.is_active,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Builds the payload; amounts accept either `.` or `,` as the decimal mark.
    pub fn to_dto(&self) -> Result<FeeDto, String> {
        if self.code.trim().is_empty() {
            return Err("Code is required".to_string());
        }
        Ok(FeeDto {
            id: self.id.clone(),
            code: self.code.trim().to_string(),
            description: self.description.trim().to_string(),
            unit_price: parse_amount("Unit price", &self.unit_price)?,
            fixed_charge: parse_amount("Fixed charge", &self.fixed_charge)?,
            valid_from: self.valid_from.trim().to_string(),
            is_active: self.is_active,
        })
    }
}

fn parse_amount(field: &str, raw: &str) -> Result<f64, String> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return Ok(0.0);
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{} must be a number", field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_fee::aggregate::FeeId;

    #[test]
    fn test_new_form_creates() {
        let form = FeeForm {
            code: " RES-1 ".into(),
            unit_price: "1,25".into(),
            ..FeeForm::new()
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.code, "RES-1");
        assert_eq!(dto.unit_price, 1.25);
        assert_eq!(dto.fixed_charge, 0.0);
        assert!(dto.is_active);
    }

    #[test]
    fn test_edit_form_keeps_id() {
        let fee = Fee {
            id: FeeId::new_v4(),
            code: "COM".into(),
            description: "Commercial".into(),
            unit_price: 2.5,
            fixed_charge: 10.0,
            valid_from: "2024-01".into(),
            is_active: false,
        };
        let form = FeeForm::from_fee(&fee);
        assert!(form.is_edit_mode());
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.id, Some(fee.id.to_string()));
        assert_eq!(dto.fixed_charge, 10.0);
    }

    #[test]
    fn test_bad_amount_is_reported() {
        let form = FeeForm {
            code: "X".into(),
            fixed_charge: "ten".into(),
            ..FeeForm::new()
        };
        assert_eq!(form.to_dto().unwrap_err(), "Fixed charge must be a number");
        assert!(FeeForm::new().to_dto().is_err());
    }
}
