//! Section registry: the single mapping from [`Section`] to its screen

use crate::dashboards::RoleDashboard;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_fee::ui::list::FeeList;
use crate::domain::a003_billing_parameter::ui::list::BillingParameterList;
use crate::domain::a004_service_unit::ui::list::ServiceUnitList;
use crate::domain::a005_meter_reading::ui::list::MeterReadingList;
use crate::domain::a006_bill::ui::list::BillList;
use crate::layout::global_context::Section;
use leptos::prelude::*;

pub fn render_section(section: Section) -> AnyView {
    match section {
        Section::Dashboard => view! { <RoleDashboard /> }.into_any(),
        Section::Customers => view! { <CustomerList /> }.into_any(),
        Section::Fees => view! { <FeeList /> }.into_any(),
        Section::BillingParameters => view! { <BillingParameterList /> }.into_any(),
        Section::ServiceUnits => view! { <ServiceUnitList /> }.into_any(),
        Section::MeterReadings => view! { <MeterReadingList /> }.into_any(),
        Section::Bills => view! { <BillList /> }.into_any(),
    }
}
