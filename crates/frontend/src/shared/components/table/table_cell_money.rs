//! Ячейка таблицы для денежных значений
//!
//! ```ignore
//! ColumnDef::data("total", "Total", |b: &Bill| b.total.into())
//!     .render(|b| view! { <MoneyCell value=b.total /> }.into_any())
//! ```

use super::number_format::format_money;
use leptos::prelude::*;

/// Right-aligned amount; negative values (credits) are highlighted.
#[component]
pub fn MoneyCell(
    value: f64,
    /// Символ валюты перед суммой
    #[prop(optional, default = "$")]
    currency: &'static str,
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let mut styles = vec!["display: block", "text-align: right"];
    if value < 0.0 {
        styles.push("color: var(--color-error-700)");
    }
    if bold {
        styles.push("font-weight: 600");
    }

    view! {
        <span class="money" style=styles.join("; ")>
            {format!("{}{}", currency, format_money(value))}
        </span>
    }
}
