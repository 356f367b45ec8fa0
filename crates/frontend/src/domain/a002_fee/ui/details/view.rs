use super::view_model::FeeForm;
use crate::domain::a002_fee::api::save_fee;
use crate::shared::in_flight::InFlight;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_api;
use contracts::domain::a002_fee::aggregate::Fee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Форма тарифа в модальном окне; `fee = None` создаёт новый
#[component]
#[allow(non_snake_case)]
pub fn FeeDetails(
    #[prop(optional)] fee: Option<Fee>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let initial = fee.as_ref().map(FeeForm::from_fee).unwrap_or_else(FeeForm::new);
    let is_edit = initial.is_edit_mode();
    let id = initial.id.clone();

    let code = RwSignal::new(initial.code);
    let description = RwSignal::new(initial.description);
    let unit_price = RwSignal::new(initial.unit_price);
    let fixed_charge = RwSignal::new(initial.fixed_charge);
    let valid_from = RwSignal::new(initial.valid_from);
    let is_active = RwSignal::new(initial.is_active);
    let error = RwSignal::new(None::<String>);
    let saving = InFlight::new();

    let on_save = move |_| {
        let form = FeeForm {
            id: id.clone(),
            code: code.get_untracked(),
            description: description.get_untracked(),
            unit_price: unit_price.get_untracked(),
            fixed_charge: fixed_charge.get_untracked(),
            valid_from: valid_from.get_untracked(),
            is_active: is_active.get_untracked(),
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
            match save_fee(&client, &dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to save fee: {}", e);
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    let title = if is_edit { "Edit tariff" } else { "New tariff" };

    view! {
        <Modal title=title on_close=on_close>
            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="form">
                <div class="form-group">
                    <label>"Code"</label>
                    <Input value=code placeholder="RES-1" />
                </div>
                <div class="form-group">
                    <label>"Description"</label>
                    <Input value=description />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Price per m³"</label>
                        <Input value=unit_price placeholder="0.00" />
                    </div>
                    <div class="form-group">
                        <label>"Fixed charge"</label>
                        <Input value=fixed_charge placeholder="0.00" />
                    </div>
                </div>
                <div class="form-group">
                    <label>"Valid from (YYYY-MM)"</label>
                    <Input value=valid_from placeholder="2024-01" />
                </div>
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| is_active.set(event_target_checked(&ev))
                    />
                    "Active"
                </label>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.is_busy())
                    on_click=on_save
                >
                    {move || if saving.is_busy() { "Saving..." } else { "Save" }}
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            </div>
        </Modal>
    }
}
