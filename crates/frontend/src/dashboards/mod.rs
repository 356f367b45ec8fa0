pub mod role_dashboard;

pub use role_dashboard::RoleDashboard;
