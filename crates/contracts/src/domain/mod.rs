pub mod a001_customer;
pub mod a002_fee;
pub mod a003_billing_parameter;
pub mod a004_service_unit;
pub mod a005_meter_reading;
pub mod a006_bill;
pub mod common;
