//! Чекбокс выбора строки таблицы
//!
//! ```ignore
//! ColumnDef::data("select", "", |_: &Bill| FieldValue::Empty).render(move |bill| {
//!     let id = bill.id.to_string();
//!     view! { <RowCheckbox item_id=id selected=selected on_change=toggle /> }.into_any()
//! })
//! ```

use leptos::prelude::*;
use std::collections::HashSet;

/// Чекбокс строки; клик не всплывает до обработчика строки
#[component]
pub fn RowCheckbox(
    #[prop(into)]
    item_id: String,

    /// Выбранные ID
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Callback при изменении (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_checked = item_id.clone();

    view! {
        <input
            type="checkbox"
            class="table__checkbox"
            on:click=|e| e.stop_propagation()
            prop:checked=move || selected.with(|s| s.contains(&item_id_for_checked))
            on:change=move |ev| {
                let checked = event_target_checked(&ev);
                on_change.run((item_id.clone(), checked));
            }
        />
    }
}
