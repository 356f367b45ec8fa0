use crate::domain::a002_fee::api::fetch_fees;
use crate::domain::a004_service_unit::api::{assign_fee, fetch_service_units};
use crate::shared::components::data_table::{ColumnDef, DataTable, RowKey};
use crate::shared::icons::icon;
use crate::shared::in_flight::InFlight;
use crate::shared::list_utils::{FieldValue, SortDirection};
use crate::shared::notifications::use_notifications;
use crate::shared::resource::use_fetch;
use crate::system::auth::context::use_api;
use contracts::domain::a002_fee::aggregate::{Fee, FeeId};
use contracts::domain::a004_service_unit::aggregate::{AssignFeeDto, ServiceUnit};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use std::sync::Arc;

/// Текст колонки тарифа: код, либо прочерк если тариф не назначен или не найден
fn tariff_label(fee_id: Option<FeeId>, codes: &HashMap<FeeId, String>) -> String {
    fee_id
        .and_then(|id| codes.get(&id).cloned())
        .unwrap_or_else(|| "—".to_string())
}

fn service_unit_columns(
    fees: Signal<Vec<Fee>>,
    codes: Memo<HashMap<FeeId, String>>,
    on_assign: Callback<(ServiceUnit, Option<String>)>,
    assigning: InFlight,
) -> Vec<ColumnDef<ServiceUnit>> {
    vec![
        ColumnDef::data("name", "Service unit", |u: &ServiceUnit| FieldValue::from(&u.name))
            .sortable(),
        ColumnDef::data("customer_count", "Customers", |u: &ServiceUnit| {
            FieldValue::from(u.customer_count)
        })
        .sortable(),
        ColumnDef::data("tariff", "Tariff", move |u: &ServiceUnit| {
            codes.with(|c| FieldValue::from(tariff_label(u.fee_id, c)))
        })
        .sortable()
        .render(move |u: &ServiceUnit| {
            let unit = u.clone();
            let current = u.fee_id.map(|id| id.to_string()).unwrap_or_default();
            let unassigned = current.is_empty();
            view! {
                <select
                    class="table__select"
                    disabled=move || assigning.is_busy()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let fee_id = (!value.is_empty()).then_some(value);
                        on_assign.run((unit.clone(), fee_id));
                    }
                >
                    <option value="" selected=unassigned>"(none)"</option>
                    {move || fees.get().into_iter().map(|fee| {
                        let id = fee.id.to_string();
                        let selected = id == current;
                        view! { <option value=id selected=selected>{fee.code}</option> }
                    }).collect_view()}
                </select>
            }
            .into_any()
        }),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ServiceUnitList() -> impl IntoView {
    let api = use_api();
    let notifications = use_notifications();
    let units = use_fetch(move || {
        let client = api.get_untracked();
        async move { fetch_service_units(&client).await }
    });
    let fees = use_fetch(move || {
        let client = api.get_untracked();
        async move { fetch_fees(&client).await }
    });
    let fee_list = fees.data_or_default();
    let codes = Memo::new(move |_| {
        fee_list.with(|list| {
            list.iter()
                .map(|f| (f.id, f.code.clone()))
                .collect::<HashMap<_, _>>()
        })
    });
    let assigning = InFlight::new();

    let on_assign = Callback::new(move |(unit, fee_id): (ServiceUnit, Option<String>)| {
        let Some(guard) = assigning.try_begin() else {
            return;
        };
        let dto = AssignFeeDto {
            service_unit_id: unit.id.to_string(),
            fee_id,
        };
        let client = api.get_untracked();
        spawn_local(async move {
            let _guard = guard;
            match assign_fee(&client, &dto).await {
                Ok(()) => {
                    notifications.success(format!("Tariff updated for {}", unit.name));
                    units.refetch();
                }
                Err(e) => {
                    log::error!("Failed to assign fee to {}: {}", unit.id, e);
                    notifications.error(format!("Could not change tariff: {}", e));
                }
            }
        });
    });

    let row_key: RowKey<ServiceUnit> = Arc::new(|u: &ServiceUnit| u.id.to_string());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Service units"}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            units.refetch();
                            fees.refetch();
                        }
                    >
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || units.error.get().or_else(|| fees.error.get()).map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <DataTable
                data=units.data_or_default()
                columns=service_unit_columns(fee_list, codes, on_assign, assigning)
                row_key=row_key
                default_sort="name"
                default_sort_direction=SortDirection::Ascending
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tariff_label() {
        let known = FeeId::new_v4();
        let codes = HashMap::from([(known, "RES-1".to_string())]);
        assert_eq!(tariff_label(Some(known), &codes), "RES-1");
        assert_eq!(tariff_label(Some(FeeId::new_v4()), &codes), "—");
        assert_eq!(tariff_label(None, &codes), "—");
    }
}
