//! Стартовая страница роли: сводка по счетам и переходы в разделы

use crate::domain::a006_bill::api::fetch_bills;
use crate::layout::global_context::{sections_for_role, AppGlobalContext, Section};
use crate::shared::components::table::format_money;
use crate::shared::icons::icon;
use crate::shared::resource::use_fetch;
use crate::system::auth::context::{use_api, use_auth};
use contracts::domain::a006_bill::aggregate::{Bill, BillStatus};
use contracts::system::auth::Role;
use leptos::prelude::*;

/// Totals shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BillSummary {
    pub count: usize,
    pub outstanding: f64,
    pub overdue_count: usize,
}

pub fn bill_summary(bills: &[Bill]) -> BillSummary {
    bills.iter().fold(BillSummary::default(), |mut acc, bill| {
        acc.count += 1;
        match bill.status {
            BillStatus::Issued => acc.outstanding += bill.total,
            BillStatus::Overdue => {
                acc.outstanding += bill.total;
                acc.overdue_count += 1;
            }
            BillStatus::Paid | BillStatus::Cancelled => {}
        }
        acc
    })
}

fn greeting(role: Role) -> &'static str {
    match role {
        Role::User => "Your water bills and invoices",
        Role::Operator => "Readings, customers and billing runs",
        Role::Admin => "Tariffs, parameters and consortium setup",
    }
}

#[component]
pub fn RoleDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth_state = use_auth();
    let api = use_api();
    let bills = use_fetch(move || {
        let client = api.get_untracked();
        async move { fetch_bills(&client).await }
    });
    let summary = Memo::new(move |_| bills.data.with(|b| b.as_deref().map(bill_summary)));
    let role = move || auth_state.with(|s| s.user_info.as_ref().map(|u| u.role));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {move || role().map(|r| format!("{} dashboard", r.label())).unwrap_or_default()}
                    </h1>
                    <p class="header__subtitle">{move || role().map(greeting)}</p>
                </div>
            </div>

            <div class="dashboard-cards">
                <div class="dashboard-card">
                    <div class="dashboard-card__label">"Bills"</div>
                    <div class="dashboard-card__value">
                        {move || summary.get().map(|s| s.count.to_string()).unwrap_or_else(|| "…".to_string())}
                    </div>
                </div>
                <div class="dashboard-card">
                    <div class="dashboard-card__label">"Outstanding"</div>
                    <div class="dashboard-card__value">
                        {move || summary.get().map(|s| format!("${}", format_money(s.outstanding))).unwrap_or_else(|| "…".to_string())}
                    </div>
                </div>
                <div class="dashboard-card">
                    <div class="dashboard-card__label">"Overdue"</div>
                    <div class="dashboard-card__value">
                        {move || summary.get().map(|s| s.overdue_count.to_string()).unwrap_or_else(|| "…".to_string())}
                    </div>
                </div>
            </div>

            {move || bills.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="dashboard-links">
                {move || role().map(sections_for_role).unwrap_or_default().into_iter()
                    .filter(|s| *s != Section::Dashboard)
                    .map(|section| view! {
                        <button class="dashboard-link" on:click=move |_| ctx.open(section)>
                            {icon(section.icon())}
                            <span>{section.label()}</span>
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::aggregate::CustomerId;
    use contracts::domain::a006_bill::aggregate::BillId;

    fn bill(total: f64, status: BillStatus) -> Bill {
        Bill {
            id: BillId::new_v4(),
            number: "B".into(),
            customer_id: CustomerId::new_v4(),
            period: "2024-05".into(),
            issue_date: "2024-06-01".into(),
            due_date: "2024-06-20".into(),
            consumption: 1.0,
            lines: vec![],
            total,
            status,
        }
    }

    #[test]
    fn test_bill_summary() {
        let bills = vec![
            bill(10.0, BillStatus::Issued),
            bill(5.5, BillStatus::Overdue),
            bill(99.0, BillStatus::Paid),
            bill(1.0, BillStatus::Cancelled),
        ];
        let summary = bill_summary(&bills);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.outstanding, 15.5);
        assert_eq!(summary.overdue_count, 1);
        assert_eq!(bill_summary(&[]), BillSummary::default());
    }
}
