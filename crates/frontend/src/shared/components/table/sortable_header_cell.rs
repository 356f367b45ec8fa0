//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Total"
//!     is_active=Signal::derive(move || state.with(|s| s.sort.field == Some("total")))
//!     direction=Signal::derive(move || state.with(|s| s.sort.direction))
//!     on_sort=Callback::new(move |_| toggle("total"))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Заголовок колонки с индикатором сортировки (▲▼)
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Колонка сейчас отсортирована
    #[prop(into)]
    is_active: Signal<bool>,

    #[prop(into)]
    direction: Signal<SortDirection>,

    on_sort: Callback<()>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; user-select: none;"
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || get_sort_class(is_active.get())>
                    {move || get_sort_indicator(is_active.get(), direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
