//! Ввод нового показания счётчика

use crate::domain::a005_meter_reading::api::create_reading;
use crate::shared::date_utils::{default_billing_period, parse_period};
use crate::shared::in_flight::InFlight;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_api;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a005_meter_reading::aggregate::CreateMeterReadingDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingForm {
    pub customer_id: String,
    pub period: String,
    pub current_value: String,
}

impl ReadingForm {
    pub fn to_dto(&self) -> Result<CreateMeterReadingDto, String> {
        if self.customer_id.is_empty() {
            return Err("Choose a customer".to_string());
        }
        let period = self.period.trim();
        if parse_period(period).is_none() {
            return Err("Period must look like 2024-05".to_string());
        }
        let current_value = self
            .current_value
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| "Reading must be a non-negative number".to_string())?;
        Ok(CreateMeterReadingDto {
            customer_id: self.customer_id.clone(),
            period: period.to_string(),
            current_value,
        })
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MeterReadingDetails(
    #[prop(into)] customers: Signal<Vec<Customer>>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let customer_id = RwSignal::new(String::new());
    let period = RwSignal::new(default_billing_period());
    let current_value = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = InFlight::new();

    let on_save = move |_| {
        let form = ReadingForm {
            customer_id: customer_id.get_untracked(),
            period: period.get_untracked(),
            current_value: current_value.get_untracked(),
        };
        let dto = match form.to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        let Some(guard) = saving.try_begin() else {
            return;
        };
        let client = api.get_untracked();
        spawn_local(async move {
            let _guard = guard;
            match create_reading(&client, &dto).await {
                Ok(reading) => {
                    log::debug!("Reading {} stored, {} m³", reading.id, reading.consumption());
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to store reading: {}", e);
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <Modal title="New meter reading" on_close=on_close>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            <div class="form">
                <div class="form-group">
                    <label>"Customer"</label>
                    <select
                        class="form-select"
                        on:change=move |ev| customer_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select..."</option>
                        {move || customers.get().into_iter().map(|c| view! {
                            <option value=c.id.to_string()>
                                {format!("{} · {}", c.account_number, c.full_name)}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Period"</label>
                        <Input value=period placeholder="2024-05" />
                    </div>
                    <div class="form-group">
                        <label>"Current reading, m³"</label>
                        <Input value=current_value placeholder="0.0" />
                    </div>
                </div>
            </div>
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.is_busy())
                    on_click=on_save
                >
                    "Save"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(customer: &str, period: &str, value: &str) -> ReadingForm {
        ReadingForm {
            customer_id: customer.into(),
            period: period.into(),
            current_value: value.into(),
        }
    }

    #[test]
    fn test_valid_reading() {
        let dto = form("c-1", " 2024-05 ", "134,5").to_dto().unwrap();
        assert_eq!(dto.period, "2024-05");
        assert_eq!(dto.current_value, 134.5);
    }

    #[test]
    fn test_rejected_readings() {
        assert!(form("", "2024-05", "1").to_dto().is_err());
        assert!(form("c-1", "May", "1").to_dto().is_err());
        assert!(form("c-1", "2024-05", "-3").to_dto().is_err());
        assert!(form("c-1", "2024-05", "").to_dto().is_err());
    }
}
