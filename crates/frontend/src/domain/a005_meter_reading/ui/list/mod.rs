use crate::domain::a001_customer::api::fetch_customers;
use crate::domain::a005_meter_reading::api::fetch_readings;
use crate::domain::a005_meter_reading::ui::details::MeterReadingDetails;
use crate::shared::components::data_table::{ColumnDef, DataTable, RowKey};
use crate::shared::components::table::{format_number_with_decimals, format_volume};
use crate::shared::date_utils::{format_date, format_period};
use crate::shared::icons::icon;
use crate::shared::list_utils::FieldValue;
use crate::shared::notifications::use_notifications;
use crate::shared::resource::use_fetch;
use crate::system::auth::context::use_api;
use contracts::domain::a001_customer::aggregate::CustomerId;
use contracts::domain::a005_meter_reading::aggregate::MeterReading;
use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

fn reading_columns(accounts: Memo<HashMap<CustomerId, String>>) -> Vec<ColumnDef<MeterReading>> {
    vec![
        ColumnDef::data("period", "Period", |r: &MeterReading| FieldValue::from(&r.period))
            .sortable()
            .render(|r: &MeterReading| format_period(&r.period).into_any()),
        ColumnDef::data("account", "Account", move |r: &MeterReading| {
            accounts.with(|a| FieldValue::from(a.get(&r.customer_id)))
        })
        .sortable(),
        ColumnDef::data("previous_value", "Previous", |r: &MeterReading| {
            FieldValue::from(r.previous_value)
        })
        .render(|r: &MeterReading| format_number_with_decimals(r.previous_value, 1).into_any()),
        ColumnDef::data("current_value", "Current", |r: &MeterReading| {
            FieldValue::from(r.current_value)
        })
        .render(|r: &MeterReading| format_number_with_decimals(r.current_value, 1).into_any()),
        ColumnDef::data("consumption", "Consumption", |r: &MeterReading| {
            FieldValue::from(r.consumption())
        })
        .sortable()
        .render(|r: &MeterReading| format_volume(r.consumption()).into_any()),
        ColumnDef::data("read_at", "Read on", |r: &MeterReading| FieldValue::from(&r.read_at))
            .sortable()
            .render(|r: &MeterReading| format_date(&r.read_at).into_any()),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn MeterReadingList() -> impl IntoView {
    let api = use_api();
    let notifications = use_notifications();
    let readings = use_fetch(move || {
        let client = api.get_untracked();
        async move { fetch_readings(&client).await }
    });
    let customers = use_fetch(move || {
        let client = api.get_untracked();
        async move { fetch_customers(&client).await }
    });
    let customer_list = customers.data_or_default();
    let accounts = Memo::new(move |_| {
        customer_list.with(|list| {
            list.iter()
                .map(|c| (c.id, c.account_number.clone()))
                .collect::<HashMap<_, _>>()
        })
    });
    let show_new = RwSignal::new(false);

    let on_close = Callback::new(move |_| show_new.set(false));
    let on_saved = Callback::new(move |_| {
        show_new.set(false);
        notifications.success("Reading saved");
        readings.refetch();
    });
    let row_key: RowKey<MeterReading> = Arc::new(|r: &MeterReading| r.id.to_string());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Meter readings"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| show_new.set(true)>
                        {icon("plus")}
                        {"New reading"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| readings.refetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || readings.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <DataTable
                data=readings.data_or_default()
                columns=reading_columns(accounts)
                row_key=row_key
                default_sort="period"
            />

            <Show when=move || show_new.get()>
                <MeterReadingDetails customers=customer_list on_saved=on_saved on_close=on_close />
            </Show>
        </div>
    }
}
