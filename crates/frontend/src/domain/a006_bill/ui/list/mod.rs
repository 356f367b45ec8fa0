use crate::domain::a001_customer::api::fetch_customers;
use crate::domain::a006_bill::api::{fetch_bills, generate_bills};
use crate::domain::a006_bill::ui::invoice::{batch_file_name, invoice_file_name, InvoiceSheet};
use crate::shared::components::data_table::{ColumnDef, DataTable, RowKey};
use crate::shared::components::table::{format_volume, MoneyCell, RowCheckbox};
use crate::shared::date_utils::{default_billing_period, format_date, format_period};
use crate::shared::export::{export_to_excel, ExcelExportable};
use crate::shared::icons::icon;
use crate::shared::in_flight::InFlight;
use crate::shared::list_utils::FieldValue;
use crate::shared::notifications::use_notifications;
use crate::shared::pdf::{export_element, join_by_key, OffscreenDocument};
use crate::shared::resource::use_fetch;
use crate::system::auth::context::use_api;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};
use contracts::domain::a006_bill::aggregate::{Bill, BillStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thaw::*;

/// Pause between mounting invoice sheets and capturing them, so the browser
/// lays them out first.
const RENDER_SETTLE_MS: u32 = 100;

const EXPORT_FAILED: &str = "Could not generate the PDF. Please try again.";

impl ExcelExportable for Bill {
    fn headers() -> Vec<&'static str> {
        vec!["Number", "Period", "Issued", "Due", "Consumption", "Total", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.period.clone(),
            self.issue_date.clone(),
            self.due_date.clone(),
            format!("{:.2}", self.consumption),
            format!("{:.2}", self.total),
            self.status.label().to_string(),
        ]
    }
}

/// Выбранные счета вместе с абонентами; счета без абонента молча пропускаются
fn batch_entries(
    bills: &[Bill],
    selected: &HashSet<String>,
    customers: &[Customer],
) -> Vec<(Bill, Customer)> {
    let chosen: Vec<Bill> = bills
        .iter()
        .filter(|b| selected.contains(&b.id.to_string()))
        .cloned()
        .collect();
    join_by_key(&chosen, customers, |b| b.customer_id, |c| c.id)
        .into_iter()
        .map(|(bill, customer)| (bill.clone(), customer.clone()))
        .collect()
}

/// Batch export job for the selection, `None` when no selected bill has a
/// customer.
fn batch_job(
    bills: &[Bill],
    selected: &HashSet<String>,
    customers: &[Customer],
) -> Option<(Vec<(Bill, Customer)>, String)> {
    let entries = batch_entries(bills, selected, customers);
    if entries.is_empty() {
        return None;
    }
    let file_name = batch_file_name(entries.len());
    Some((entries, file_name))
}

fn status_class(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Issued => "badge badge--info",
        BillStatus::Paid => "badge badge--success",
        BillStatus::Overdue => "badge badge--error",
        BillStatus::Cancelled => "badge badge--neutral",
    }
}

fn bill_columns(
    accounts: Memo<HashMap<CustomerId, String>>,
    selected: RwSignal<HashSet<String>>,
    on_toggle: Callback<(String, bool)>,
    on_download: Callback<Bill>,
    exporting: InFlight,
) -> Vec<ColumnDef<Bill>> {
    vec![
        ColumnDef::data("select", "", |_: &Bill| FieldValue::Empty).render(move |b: &Bill| {
            view! {
                <RowCheckbox item_id=b.id.to_string() selected=selected on_change=on_toggle />
            }
            .into_any()
        }),
        ColumnDef::data("number", "Number", |b: &Bill| FieldValue::from(&b.number)).sortable(),
        ColumnDef::data("account", "Account", move |b: &Bill| {
            accounts.with(|a| FieldValue::from(a.get(&b.customer_id)))
        })
        .sortable(),
        ColumnDef::data("period", "Period", |b: &Bill| FieldValue::from(&b.period))
            .sortable()
            .render(|b: &Bill| format_period(&b.period).into_any()),
        ColumnDef::data("consumption", "Consumption", |b: &Bill| {
            FieldValue::from(b.consumption)
        })
        .sortable()
        .render(|b: &Bill| format_volume(b.consumption).into_any()),
        ColumnDef::data("total", "Total", |b: &Bill| FieldValue::from(b.total))
            .sortable()
            .render(|b: &Bill| view! { <MoneyCell value=b.total bold=true /> }.into_any()),
        ColumnDef::data("due_date", "Due", |b: &Bill| FieldValue::from(&b.due_date))
            .sortable()
            .render(|b: &Bill| format_date(&b.due_date).into_any()),
        ColumnDef::data("status", "Status", |b: &Bill| FieldValue::from(b.status.label()))
            .sortable()
            .render(|b: &Bill| {
                view! { <span class=status_class(b.status)>{b.status.label()}</span> }.into_any()
            }),
        ColumnDef::actions("Invoice", move |b: &Bill| {
            let bill = b.clone();
            view! {
                <button
                    class="button button--icon"
                    title="Download invoice PDF"
                    disabled=move || exporting.is_busy()
                    on:click=move |_| on_download.run(bill.clone())
                >
                    {icon("download")}
                </button>
            }
            .into_any()
        }),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn BillList() -> impl IntoView {
    let api = use_api();
    let notifications = use_notifications();
    let bills = use_fetch(move || {
        let client = api.get_untracked();
        async move { fetch_bills(&client).await }
    });
    let customers = use_fetch(move || {
        let client = api.get_untracked();
        async move { fetch_customers(&client).await }
    });
    let bill_list = bills.data_or_default();
    let customer_list = customers.data_or_default();
    let accounts = Memo::new(move |_| {
        customer_list.with(|list| {
            list.iter()
                .map(|c| (c.id, c.account_number.clone()))
                .collect::<HashMap<_, _>>()
        })
    });

    let selected = RwSignal::new(HashSet::<String>::new());
    let on_toggle = Callback::new(move |(id, checked): (String, bool)| {
        selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    });

    // Off-screen invoices currently being rasterized
    let rendering = RwSignal::new(Vec::<(Bill, Customer)>::new());
    let document_ref = NodeRef::<html::Div>::new();
    let generating = RwSignal::new(false);
    let exporting = InFlight::new();

    let run_export = move |entries: Vec<(Bill, Customer)>, file_name: String| {
        let Some(guard) = exporting.try_begin() else {
            return;
        };
        rendering.set(entries);
        spawn_local(async move {
            let _guard = guard;
            TimeoutFuture::new(RENDER_SETTLE_MS).await;
            // The pipeline has already logged the cause
            if export_element(document_ref, &file_name, generating).await.is_err() {
                notifications.error(EXPORT_FAILED);
            }
            let _ = rendering.try_set(Vec::new());
        });
    };

    let on_download = Callback::new(move |bill: Bill| {
        let customer = customer_list
            .with_untracked(|list| list.iter().find(|c| c.id == bill.customer_id).cloned());
        match customer {
            Some(customer) => {
                let file_name = invoice_file_name(&bill);
                run_export(vec![(bill, customer)], file_name);
            }
            None => notifications.error(format!("No customer found for bill {}", bill.number)),
        }
    });

    let export_selected = move |_| {
        let job = bill_list.with_untracked(|b| {
            selected.with_untracked(|s| customer_list.with_untracked(|c| batch_job(b, s, c)))
        });
        selected.set(HashSet::new());
        if let Some((entries, file_name)) = job {
            run_export(entries, file_name);
        }
    };

    let export_csv = move |_| {
        let rows = bill_list.get_untracked();
        if let Err(e) = export_to_excel(&rows, "bills.csv") {
            notifications.error(e);
        }
    };

    let period = RwSignal::new(default_billing_period());
    let generating_bills = InFlight::new();
    let on_generate = move |_| {
        let Some(guard) = generating_bills.try_begin() else {
            return;
        };
        let target = period.get_untracked().trim().to_string();
        let client = api.get_untracked();
        spawn_local(async move {
            let _guard = guard;
            match generate_bills(&client, &target).await {
                Ok(result) => {
                    notifications.success(format!(
                        "Generated {} bill(s) for {}, {} skipped",
                        result.generated,
                        format_period(&target),
                        result.skipped
                    ));
                    bills.refetch();
                }
                Err(e) => {
                    log::error!("Bill generation for {} failed: {}", target, e);
                    notifications.error(format!("Bill generation failed: {}", e));
                }
            }
        });
    };

    let row_key: RowKey<Bill> = Arc::new(|b: &Bill| b.id.to_string());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Bills"}</h1>
                </div>
                <div class="header__actions">
                    <div style="width: 120px;">
                        <Input value=period placeholder="2024-05" />
                    </div>
                    <button
                        class="button button--primary"
                        disabled=move || generating_bills.is_busy()
                        on:click=on_generate
                    >
                        {icon("bills")}
                        {move || if generating_bills.is_busy() { "Generating..." } else { "Generate bills" }}
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || selected.with(HashSet::is_empty) || exporting.is_busy()
                        on:click=export_selected
                    >
                        {icon("download")}
                        {move || format!("Export PDF ({})", selected.with(HashSet::len))}
                    </button>
                    <button class="button button--secondary" on:click=export_csv>
                        {icon("download")}
                        {"CSV"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            bills.refetch();
                            customers.refetch();
                        }
                    >
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || bills.error.get().or_else(|| customers.error.get()).map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show when=move || generating.get()>
                <div class="export-progress">
                    <Spinner />
                    <span>"Generating PDF..."</span>
                </div>
            </Show>

            <DataTable
                data=bill_list
                columns=bill_columns(accounts, selected, on_toggle, on_download, exporting)
                row_key=row_key
                default_sort="period"
            />

            <OffscreenDocument node_ref=document_ref>
                {move || rendering.get().into_iter().map(|(bill, customer)| view! {
                    <InvoiceSheet bill=bill customer=customer />
                }).collect_view()}
            </OffscreenDocument>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_bill::aggregate::BillId;

    fn customer(account: &str) -> Customer {
        Customer {
            id: CustomerId::new_v4(),
            account_number: account.to_string(),
            full_name: format!("Owner of {}", account),
            address: "1 Main St".to_string(),
            meter_number: "M".to_string(),
            service_unit_id: None,
            email: None,
            is_active: true,
        }
    }

    fn bill(number: &str, customer_id: CustomerId) -> Bill {
        Bill {
            id: BillId::new_v4(),
            number: number.to_string(),
            customer_id,
            period: "2024-05".to_string(),
            issue_date: "2024-06-01".to_string(),
            due_date: "2024-06-20".to_string(),
            consumption: 10.0,
            lines: vec![],
            total: 12.0,
            status: BillStatus::Issued,
        }
    }

    #[test]
    fn test_batch_skips_bill_without_customer() {
        let a = customer("A-1");
        let b = customer("A-2");
        let bills = vec![
            bill("B-1", a.id),
            bill("B-2", CustomerId::new_v4()),
            bill("B-3", b.id),
        ];
        let selected: HashSet<String> = bills.iter().map(|b| b.id.to_string()).collect();

        let entries = batch_entries(&bills, &selected, &[a.clone(), b.clone()]);

        let numbers: Vec<&str> = entries.iter().map(|(bill, _)| bill.number.as_str()).collect();
        assert_eq!(numbers, vec!["B-1", "B-3"]);
        assert_eq!(entries[1].1.account_number, "A-2");
    }

    #[test]
    fn test_batch_job_names_file_by_matched_count() {
        let a = customer("A-1");
        let bills = vec![bill("B-1", a.id), bill("B-2", CustomerId::new_v4()), bill("B-3", a.id)];
        let selected: HashSet<String> = bills.iter().map(|b| b.id.to_string()).collect();
        let (entries, file_name) = batch_job(&bills, &selected, &[a]).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(file_name, batch_file_name(2));
    }

    #[test]
    fn test_batch_job_without_any_customer_is_empty() {
        let bills = vec![bill("B-1", CustomerId::new_v4()), bill("B-2", CustomerId::new_v4())];
        let selected: HashSet<String> = bills.iter().map(|b| b.id.to_string()).collect();

        assert!(batch_job(&bills, &selected, &[customer("A-1")]).is_none());
        assert!(batch_job(&bills, &HashSet::new(), &[]).is_none());
    }

    #[test]
    fn test_batch_only_takes_selected() {
        let a = customer("A-1");
        let bills = vec![bill("B-1", a.id), bill("B-2", a.id)];
        let selected = HashSet::from([bills[1].id.to_string()]);
        let entries = batch_entries(&bills, &selected, &[a]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0.number, "B-2");
    }

    #[test]
    fn test_bill_csv_row() {
        let row = bill("B-9", CustomerId::new_v4()).to_csv_row();
        assert_eq!(row.len(), Bill::headers().len());
        assert_eq!(row[5], "12.00");
        assert_eq!(row[6], "Issued");
    }
}
