use crate::models::EmployeeRecord;
use async_trait::async_trait;
use service_core::error::AppError;

/// Read access to the employee collection.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// All records whose `employmentStatus` equals `status`.
    async fn find_by_employment_status(&self, status: &str)
        -> Result<Vec<EmployeeRecord>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
