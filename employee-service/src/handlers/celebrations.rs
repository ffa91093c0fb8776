use crate::dtos::{CelebrationsRequest, CelebrationsResponse};
use crate::models::ACTIVE_STATUS;
use crate::services::metrics::record_lookup;
use crate::services::{collect_celebrations, CelebrationQuery};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

/// `POST /api/dashboard/fetchEmployeeDetails`
///
/// Birthdays and work anniversaries of active employees for the requested
/// month.
pub async fn fetch_employee_details(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CelebrationsResponse>, AppError> {
    let request = CelebrationsRequest::from_body(&body);

    let query = CelebrationQuery::from_request(&request)
        .inspect_err(|_| record_lookup("bad_request"))?;

    let result = lookup(&state, query).await;
    record_lookup(if result.is_ok() { "ok" } else { "error" });
    result.map(Json)
}

async fn lookup(state: &AppState, query: CelebrationQuery) -> Result<CelebrationsResponse, AppError> {
    let records = state
        .directory
        .find_by_employment_status(ACTIVE_STATUS)
        .await?;

    let celebrations = collect_celebrations(&records, query)?;

    tracing::info!(
        month = ?query.month,
        year = ?query.year,
        scanned = celebrations.scanned,
        skipped = celebrations.skipped,
        birthdays = celebrations.birthdays.len(),
        anniversaries = celebrations.anniversaries.len(),
        "Fetched employee celebrations"
    );

    Ok(celebrations.into())
}

/// Any method other than POST on the lookup route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
