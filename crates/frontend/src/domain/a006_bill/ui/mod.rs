pub mod invoice;
pub mod list;
