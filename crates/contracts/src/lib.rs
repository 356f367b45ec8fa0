//! DTOs shared between the billing console and the billing backend.

pub mod domain;
pub mod system;
