//! Печатная форма счёта. Rendered off-screen and rasterized into the PDF.

use crate::shared::amount_in_words::amount_in_words;
use crate::shared::components::table::{format_money, format_number_with_decimals, format_volume};
use crate::shared::date_utils::{format_date, format_period};
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a006_bill::aggregate::Bill;
use leptos::prelude::*;

/// Height of one A4 sheet at the off-screen document width
const SHEET_MIN_HEIGHT_PX: u32 = 1123;

const ISSUER: &str = "AquaBill Water Consortium";

pub fn invoice_file_name(bill: &Bill) -> String {
    let number: String = bill
        .number
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("invoice-{}.pdf", number)
}

pub fn batch_file_name(count: usize) -> String {
    format!("invoices-{}.pdf", count)
}

#[component]
#[allow(non_snake_case)]
pub fn InvoiceSheet(bill: Bill, customer: Customer) -> impl IntoView {
    let lines = bill.lines.clone();

    view! {
        <article
            class="invoice-sheet"
            style=format!(
                "box-sizing: border-box; min-height: {}px; padding: 48px; font-family: sans-serif; color: #1f2933;",
                SHEET_MIN_HEIGHT_PX
            )
        >
            <header style="display: flex; justify-content: space-between; border-bottom: 2px solid #1c64f2; padding-bottom: 16px;">
                <div>
                    <h1 style="margin: 0; font-size: 22px;">{ISSUER}</h1>
                    <div style="font-size: 12px; color: #52606d;">"Water supply invoice"</div>
                </div>
                <div style="text-align: right;">
                    <div style="font-size: 18px; font-weight: 600;">{format!("Invoice {}", bill.number)}</div>
                    <div>{format!("Issued {}", format_date(&bill.issue_date))}</div>
                    <div>{format!("Due {}", format_date(&bill.due_date))}</div>
                </div>
            </header>

            <section style="display: flex; justify-content: space-between; margin: 24px 0;">
                <div>
                    <div style="font-weight: 600;">{customer.full_name.clone()}</div>
                    <div>{customer.address.clone()}</div>
                    <div>{format!("Account {}", customer.account_number)}</div>
                </div>
                <div style="text-align: right;">
                    <div>{format!("Period: {}", format_period(&bill.period))}</div>
                    <div>{format!("Meter: {}", customer.meter_number)}</div>
                    <div>{format!("Consumption: {}", format_volume(bill.consumption))}</div>
                </div>
            </section>

            <table style="width: 100%; border-collapse: collapse;">
                <thead>
                    <tr style="border-bottom: 1px solid #cbd2d9; text-align: left;">
                        <th>"Description"</th>
                        <th style="text-align: right;">"Quantity"</th>
                        <th style="text-align: right;">"Unit price"</th>
                        <th style="text-align: right;">"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {lines.into_iter().map(|line| view! {
                        <tr style="border-bottom: 1px solid #e4e7eb;">
                            <td>{line.description}</td>
                            <td style="text-align: right;">{format_number_with_decimals(line.quantity, 2)}</td>
                            <td style="text-align: right;">{format!("${}", format_money(line.unit_price))}</td>
                            <td style="text-align: right;">{format!("${}", format_money(line.amount))}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>

            <div style="margin-top: 24px; text-align: right; font-size: 18px; font-weight: 600;">
                {format!("Total due: ${}", format_money(bill.total))}
            </div>
            <p style="margin-top: 8px; text-align: right; font-style: italic;">
                {amount_in_words(bill.total)}
            </p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::aggregate::CustomerId;
    use contracts::domain::a006_bill::aggregate::{BillId, BillStatus};

    #[test]
    fn test_file_names() {
        let bill = Bill {
            id: BillId::new_v4(),
            number: "B/2024 0001".to_string(),
            customer_id: CustomerId::new_v4(),
            period: "2024-05".to_string(),
            issue_date: "2024-06-01".to_string(),
            due_date: "2024-06-20".to_string(),
            consumption: 14.5,
            lines: vec![],
            total: 22.4,
            status: BillStatus::Issued,
        };
        assert_eq!(invoice_file_name(&bill), "invoice-B_2024_0001.pdf");
        assert_eq!(batch_file_name(2), "invoices-2.pdf");
    }
}
