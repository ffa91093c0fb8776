pub mod celebrations;
pub mod health;

pub use celebrations::{fetch_employee_details, method_not_allowed};
pub use health::{health_check, metrics_endpoint, readiness_check};
