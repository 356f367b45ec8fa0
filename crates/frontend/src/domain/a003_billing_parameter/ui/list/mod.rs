use crate::domain::a003_billing_parameter::api::{fetch_parameters, update_parameter};
use crate::shared::components::data_table::{ColumnDef, DataTable, RowKey};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::in_flight::InFlight;
use crate::shared::list_utils::{FieldValue, SortDirection};
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use crate::shared::resource::use_fetch;
use crate::system::auth::context::use_api;
use contracts::domain::a003_billing_parameter::aggregate::{
    BillingParameter, UpdateBillingParameterDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

fn parameter_columns(on_edit: Callback<BillingParameter>) -> Vec<ColumnDef<BillingParameter>> {
    vec![
        ColumnDef::data("key", "Parameter", |p: &BillingParameter| FieldValue::from(&p.key))
            .sortable()
            .render(|p: &BillingParameter| view! { <code>{p.key.clone()}</code> }.into_any()),
        ColumnDef::data("value", "Value", |p: &BillingParameter| FieldValue::from(&p.value)),
        ColumnDef::data("description", "Description", |p: &BillingParameter| {
            FieldValue::from(p.description.as_deref())
        }),
        ColumnDef::data("updated_at", "Updated", |p: &BillingParameter| {
            FieldValue::from(&p.updated_at)
        })
        .sortable()
        .render(|p: &BillingParameter| format_date(&p.updated_at).into_any()),
        ColumnDef::actions("", move |p: &BillingParameter| {
            let parameter = p.clone();
            view! {
                <button
                    class="button button--icon"
                    title="Edit value"
                    on:click=move |_| on_edit.run(parameter.clone())
                >
                    {icon("edit")}
                </button>
            }
            .into_any()
        }),
    ]
}

#[component]
#[allow(non_snake_case)]
fn ParameterEditor(
    parameter: BillingParameter,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let value = RwSignal::new(parameter.value.clone());
    let error = RwSignal::new(None::<String>);
    let saving = InFlight::new();
    let key = parameter.key.clone();

    let on_save = move |_| {
        let Some(guard) = saving.try_begin() else {
            return;
        };
        let dto = UpdateBillingParameterDto {
            key: key.clone(),
            value: value.get_untracked().trim().to_string(),
        };
        let client = api.get_untracked();
        spawn_local(async move {
            let _guard = guard;
            match update_parameter(&client, &dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to update parameter {}: {}", dto.key, e);
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <Modal title=format!("Parameter {}", parameter.key) on_close=on_close>
            {parameter.description.clone().map(|d| view! { <p class="form-hint">{d}</p> })}
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            <div class="form-group">
                <label>"Value"</label>
                <Input value=value />
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

#[component]
#[allow(non_snake_case)]
pub fn BillingParameterList() -> impl IntoView {
    let api = use_api();
    let notifications = use_notifications();
    let parameters = use_fetch(move || {
        let client = api.get_untracked();
        async move { fetch_parameters(&client).await }
    });
    let editing = RwSignal::new(None::<BillingParameter>);

    let on_edit = Callback::new(move |p: BillingParameter| editing.set(Some(p)));
    let on_close = Callback::new(move |_| editing.set(None));
    let on_saved = Callback::new(move |_| {
        editing.set(None);
        notifications.success("Parameter updated");
        parameters.refetch();
    });
    let row_key: RowKey<BillingParameter> = Arc::new(|p: &BillingParameter| p.key.clone());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Billing parameters"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| parameters.refetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || parameters.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <DataTable
                data=parameters.data_or_default()
                columns=parameter_columns(on_edit)
                row_key=row_key
                default_sort="key"
                default_sort_direction=SortDirection::Ascending
            />

            {move || editing.get().map(|parameter| view! {
                <ParameterEditor parameter=parameter on_saved=on_saved on_close=on_close />
            })}
        </div>
    }
}
