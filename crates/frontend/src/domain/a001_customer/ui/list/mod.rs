use crate::domain::a001_customer::api::fetch_customers;
use crate::shared::api_utils::ApiClient;
use crate::shared::components::data_table::{ColumnDef, DataTable, RowKey};
use crate::shared::export::{export_to_excel, ExcelExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{FieldValue, SortDirection};
use crate::shared::notifications::use_notifications;
use crate::shared::resource::use_fetch;
use crate::system::auth::context::use_api;
use contracts::domain::a001_customer::aggregate::Customer;
use leptos::prelude::*;
use std::sync::Arc;

impl ExcelExportable for Customer {
    fn headers() -> Vec<&'static str> {
        vec!["Account", "Full name", "Address", "Meter", "Email", "Active"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.account_number.clone(),
            self.full_name.clone(),
            self.address.clone(),
            self.meter_number.clone(),
            self.email.clone().unwrap_or_default(),
            if self.is_active { "yes" } else { "no" }.to_string(),
        ]
    }
}

fn customer_columns() -> Vec<ColumnDef<Customer>> {
    vec![
        ColumnDef::data("account_number", "Account", |c: &Customer| {
            FieldValue::from(&c.account_number)
        })
        .sortable(),
        ColumnDef::data("full_name", "Full name", |c: &Customer| {
            FieldValue::from(&c.full_name)
        })
        .sortable(),
        ColumnDef::data("address", "Address", |c: &Customer| FieldValue::from(&c.address))
            .sortable(),
        ColumnDef::data("meter_number", "Meter", |c: &Customer| {
            FieldValue::from(&c.meter_number)
        }),
        ColumnDef::data("email", "Email", |c: &Customer| FieldValue::from(c.email.as_deref())),
        ColumnDef::data("is_active", "Status", |c: &Customer| FieldValue::from(c.is_active))
            .render(|c: &Customer| {
                let (class, label) = if c.is_active {
                    ("badge badge--success", "Active")
                } else {
                    ("badge badge--neutral", "Inactive")
                };
                view! { <span class=class>{label}</span> }.into_any()
            }),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let api = use_api();
    let notifications = use_notifications();
    let customers = use_fetch(move || {
        let client: ApiClient = api.get_untracked();
        async move { fetch_customers(&client).await }
    });
    let data = customers.data_or_default();
    let row_key: RowKey<Customer> = Arc::new(|c: &Customer| c.id.to_string());

    let export_csv = move |_| {
        let rows = data.get_untracked();
        if let Err(e) = export_to_excel(&rows, "customers.csv") {
            notifications.error(e);
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Customers"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| customers.refetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button class="button button--secondary" on:click=export_csv>
                        {icon("download")}
                        {"Export CSV"}
                    </button>
                </div>
            </div>

            {move || customers.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <DataTable
                data=data
                columns=customer_columns()
                row_key=row_key
                default_sort="account_number"
                default_sort_direction=SortDirection::Ascending
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::aggregate::CustomerId;

    fn customer(account: &str, email: Option<&str>) -> Customer {
        Customer {
            id: CustomerId::new_v4(),
            account_number: account.to_string(),
            full_name: "Ana Díaz".to_string(),
            address: "12 River Rd".to_string(),
            meter_number: "M-1".to_string(),
            service_unit_id: None,
            email: email.map(str::to_string),
            is_active: true,
        }
    }

    #[test]
    fn test_customer_csv_row() {
        let row = customer("A-001", None).to_csv_row();
        assert_eq!(row.len(), Customer::headers().len());
        assert_eq!(row[0], "A-001");
        assert_eq!(row[4], "");
        assert_eq!(row[5], "yes");
    }

    #[test]
    fn test_customer_columns_sortable_keys() {
        let columns: Vec<ColumnDef<Customer, String>> = vec![ColumnDef::data(
            "account_number",
            "Account",
            |c: &Customer| FieldValue::from(&c.account_number),
        )
        .sortable()];
        let c = customer("A-7", Some("a@b.c"));
        assert_eq!(columns[0].sort_value(&c), Some(FieldValue::from("A-7")));
        assert_eq!(customer_columns().iter().filter(|c| c.is_sortable()).count(), 3);
    }
}
