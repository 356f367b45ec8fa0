use crate::domain::a002_fee::api::{delete_fee, fetch_fees};
use crate::domain::a002_fee::ui::details::FeeDetails;
use crate::shared::components::data_table::{ColumnDef, DataTable, RowKey};
use crate::shared::components::table::{format_money, MoneyCell};
use crate::shared::date_utils::format_period;
use crate::shared::icons::icon;
use crate::shared::in_flight::InFlight;
use crate::shared::list_utils::{FieldValue, SortDirection};
use crate::shared::notifications::use_notifications;
use crate::shared::resource::use_fetch;
use crate::system::auth::context::use_api;
use contracts::domain::a002_fee::aggregate::Fee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

/// Which tariff the details modal is showing
#[derive(Debug, Clone, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(Fee),
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn fee_columns(
    on_edit: Callback<Fee>,
    on_delete: Callback<Fee>,
    deleting: InFlight,
) -> Vec<ColumnDef<Fee>> {
    vec![
        ColumnDef::data("code", "Code", |f: &Fee| FieldValue::from(&f.code)).sortable(),
        ColumnDef::data("description", "Description", |f: &Fee| {
            FieldValue::from(&f.description)
        })
        .sortable(),
        ColumnDef::data("unit_price", "Price per m³", |f: &Fee| {
            FieldValue::from(f.unit_price)
        })
        .sortable()
        .render(|f: &Fee| view! { <MoneyCell value=f.unit_price /> }.into_any()),
        ColumnDef::data("fixed_charge", "Fixed charge", |f: &Fee| {
            FieldValue::from(f.fixed_charge)
        })
        .sortable()
        .render(|f: &Fee| format!("${}", format_money(f.fixed_charge)).into_any()),
        ColumnDef::data("valid_from", "Valid from", |f: &Fee| {
            FieldValue::from(&f.valid_from)
        })
        .sortable()
        .render(|f: &Fee| format_period(&f.valid_from).into_any()),
        ColumnDef::actions("Actions", move |f: &Fee| {
            let for_edit = f.clone();
            let for_delete = f.clone();
            view! {
                <div class="table__actions">
                    <button
                        class="button button--icon"
                        title="Edit"
                        on:click=move |_| on_edit.run(for_edit.clone())
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="button button--icon button--danger"
                        title="Delete"
                        disabled=move || deleting.is_busy()
                        on:click=move |_| on_delete.run(for_delete.clone())
                    >
                        {icon("delete")}
                    </button>
                </div>
            }
            .into_any()
        }),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn FeeList() -> impl IntoView {
    let api = use_api();
    let notifications = use_notifications();
    let fees = use_fetch(move || {
        let client = api.get_untracked();
        async move { fetch_fees(&client).await }
    });
    let editing = RwSignal::new(Editing::Closed);
    let deleting = InFlight::new();

    let on_edit = Callback::new(move |fee: Fee| editing.set(Editing::Existing(fee)));
    let on_delete = Callback::new(move |fee: Fee| {
        if !confirm(&format!("Delete tariff {}?", fee.code)) {
            return;
        }
        let Some(guard) = deleting.try_begin() else {
            return;
        };
        let client = api.get_untracked();
        spawn_local(async move {
            let _guard = guard;
            match delete_fee(&client, &fee.id.to_string()).await {
                Ok(()) => {
                    notifications.success(format!("Tariff {} deleted", fee.code));
                    fees.refetch();
                }
                Err(e) => {
                    log::error!("Failed to delete fee {}: {}", fee.id, e);
                    notifications.error(format!("Could not delete tariff: {}", e));
                }
            }
        });
    });

    let on_close = Callback::new(move |_| editing.set(Editing::Closed));
    let on_saved = Callback::new(move |_| {
        editing.set(Editing::Closed);
        notifications.success("Tariff saved");
        fees.refetch();
    });

    let row_key: RowKey<Fee> = Arc::new(|f: &Fee| f.id.to_string());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Tariffs"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| editing.set(Editing::New)>
                        {icon("plus")}
                        {"New tariff"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fees.refetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || fees.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <DataTable
                data=fees.data_or_default()
                columns=fee_columns(on_edit, on_delete, deleting)
                row_key=row_key
                default_sort="code"
                default_sort_direction=SortDirection::Ascending
            />

            {move || match editing.get() {
                Editing::Closed => None,
                Editing::New => Some(view! {
                    <FeeDetails on_saved=on_saved on_close=on_close />
                }.into_any()),
                Editing::Existing(fee) => Some(view! {
                    <FeeDetails fee=fee on_saved=on_saved on_close=on_close />
                }.into_any()),
            }}
        </div>
    }
}
