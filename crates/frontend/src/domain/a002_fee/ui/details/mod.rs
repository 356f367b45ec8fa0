mod view;
mod view_model;

pub use view::FeeDetails;
pub use view_model::FeeForm;
