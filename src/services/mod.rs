pub mod errors;
pub mod parking;

pub use errors::{ServiceError, ServiceResult};
