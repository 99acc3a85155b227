//! Domain entities and value objects of the parking registry.
//!
//! Nothing in here depends on services, forms or the shell.

pub mod lot;
pub mod types;
pub mod vehicle;
