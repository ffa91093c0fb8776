pub mod employee;

pub use employee::{EmployeeRecord, ACTIVE_STATUS};
