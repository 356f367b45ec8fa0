use contracts::system::auth::Role;
use leptos::prelude::*;

/// Разделы консоли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Customers,
    Fees,
    BillingParameters,
    ServiceUnits,
    MeterReadings,
    Bills,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Customers => "Customers",
            Section::Fees => "Tariffs",
            Section::BillingParameters => "Billing parameters",
            Section::ServiceUnits => "Service units",
            Section::MeterReadings => "Meter readings",
            Section::Bills => "Bills",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Customers => "customers",
            Section::Fees => "fees",
            Section::BillingParameters => "parameters",
            Section::ServiceUnits => "service-units",
            Section::MeterReadings => "meter",
            Section::Bills => "bills",
        }
    }
}

/// Sections offered to a role. Presentation only: the backend decides what
/// each role may actually read or change.
pub fn sections_for_role(role: Role) -> Vec<Section> {
    match role {
        Role::User => vec![Section::Dashboard, Section::Bills],
        Role::Operator => vec![
            Section::Dashboard,
            Section::Customers,
            Section::MeterReadings,
            Section::Bills,
        ],
        Role::Admin => vec![
            Section::Dashboard,
            Section::Customers,
            Section::Fees,
            Section::BillingParameters,
            Section::ServiceUnits,
            Section::MeterReadings,
            Section::Bills,
        ],
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Dashboard),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open(&self, section: Section) {
        log::debug!("open section {:?}", section);
        self.active.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_sees_dashboard_and_bills() {
        for role in [Role::User, Role::Operator, Role::Admin] {
            let sections = sections_for_role(role);
            assert_eq!(sections.first(), Some(&Section::Dashboard));
            assert!(sections.contains(&Section::Bills));
        }
    }

    #[test]
    fn test_only_admin_manages_tariffs() {
        assert!(!sections_for_role(Role::User).contains(&Section::Fees));
        assert!(!sections_for_role(Role::Operator).contains(&Section::Fees));
        assert!(sections_for_role(Role::Admin).contains(&Section::Fees));
        assert_eq!(sections_for_role(Role::Admin).len(), 7);
    }
}
