//! Birthday and work-anniversary matching over fetched employee records.
//!
//! Everything here is pure; the handler fetches records and hands them over.

use crate::coerce::{bson_is_truthy, is_truthy, leading_integer, leading_integer_of, loose_number};
use crate::dtos::{AnniversaryEntry, BirthdayEntry, CelebrationsRequest, CelebrationsResponse};
use crate::models::EmployeeRecord;
use anyhow::anyhow;
use mongodb::bson::Bson;
use service_core::error::AppError;
use std::cmp::Ordering;

pub const MISSING_PARAMETERS: &str = "Month and year are required parameters";
pub const MONTH_OUT_OF_RANGE: &str = "Month must be between 1 and 12";

/// Components of a stored `YYYY-MM-DD` date.
///
/// Each component is the integer prefix of its `-`-separated part, so
/// `15T00:00:00Z` reads as 15. Unreadable components are `None` and never
/// match. Components are not checked against the calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: Option<f64>,
    pub month: Option<f64>,
    pub day: Option<f64>,
}

impl CalendarDate {
    pub fn parse(text: &str) -> Self {
        let mut parts = text.split('-').map(leading_integer);
        Self {
            year: parts.next().flatten(),
            month: parts.next().flatten(),
            day: parts.next().flatten(),
        }
    }
}

/// Validated lookup parameters.
///
/// Both are integer readings of what the caller sent; `None` when there is
/// none (e.g. `"abc"`), and such a component never matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelebrationQuery {
    pub month: Option<f64>,
    pub year: Option<f64>,
}

impl CelebrationQuery {
    pub fn from_request(request: &CelebrationsRequest) -> Result<Self, AppError> {
        let (Some(month), Some(year)) = (request.month.as_ref(), request.year.as_ref()) else {
            return Err(AppError::bad_request(MISSING_PARAMETERS));
        };
        if !is_truthy(Some(month)) || !is_truthy(Some(year)) {
            return Err(AppError::bad_request(MISSING_PARAMETERS));
        }

        // Only a value with a numeric reading outside [1, 12] is rejected;
        // NaN fails both comparisons and passes.
        let numeric = loose_number(month);
        if numeric < 1.0 || numeric > 12.0 {
            return Err(AppError::bad_request(MONTH_OUT_OF_RANGE));
        }

        Ok(Self {
            month: leading_integer_of(month),
            year: leading_integer_of(year),
        })
    }
}

/// Matches for one month, plus how many records were scanned and skipped.
#[derive(Debug, Default)]
pub struct Celebrations {
    pub birthdays: Vec<BirthdayEntry>,
    pub anniversaries: Vec<AnniversaryEntry>,
    pub scanned: usize,
    pub skipped: usize,
}

impl From<Celebrations> for CelebrationsResponse {
    fn from(celebrations: Celebrations) -> Self {
        Self {
            upcoming_birthday: celebrations.birthdays,
            upcoming_anniversaries: celebrations.anniversaries,
        }
    }
}

fn same(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

// Unreadable days go after readable ones, keeping scan order among themselves.
fn day_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Date text of a stored field; empty or falsy values count as absent.
fn date_text<'a>(
    record: &EmployeeRecord,
    value: Option<&'a Bson>,
    field: &str,
) -> anyhow::Result<Option<&'a str>> {
    match value {
        Some(Bson::String(s)) if !s.is_empty() => Ok(Some(s.as_str())),
        Some(other) if bson_is_truthy(other) => Err(anyhow!(
            "Employee {} has a non-text {}: {}",
            record.id,
            field,
            other
        )),
        _ => Ok(None),
    }
}

/// Partitions active employee records into birthdays and anniversaries
/// falling in `query.month`, each sorted by day of month.
///
/// An anniversary needs at least one full calendar year between the hire
/// year and the query year; the hire day is not compared. Fails only when a
/// named record holds a date that is not text.
pub fn collect_celebrations(
    records: &[EmployeeRecord],
    query: CelebrationQuery,
) -> anyhow::Result<Celebrations> {
    let mut birthdays: Vec<(Option<f64>, BirthdayEntry)> = Vec::new();
    let mut anniversaries: Vec<(Option<f64>, AnniversaryEntry)> = Vec::new();
    let mut skipped = 0;

    for record in records {
        let Some(employee_name) = record.display_name() else {
            skipped += 1;
            continue;
        };

        if let Some(date_of_birth) = date_text(record, record.date_of_birth.as_ref(), "dateOfBirth")? {
            let date = CalendarDate::parse(date_of_birth);
            if same(date.month, query.month) {
                birthdays.push((
                    date.day,
                    BirthdayEntry {
                        employee_id: record.id.clone(),
                        employee_name: employee_name.clone(),
                        date_of_birth: date_of_birth.to_string(),
                    },
                ));
            }
        }

        if let Some(hire_date) = date_text(record, record.hire_date.as_ref(), "hireDate")? {
            let date = CalendarDate::parse(hire_date);
            let worked_a_year =
                matches!((query.year, date.year), (Some(year), Some(hired)) if year - hired >= 1.0);
            if same(date.month, query.month) && worked_a_year {
                anniversaries.push((
                    date.day,
                    AnniversaryEntry {
                        employee_id: record.id.clone(),
                        employee_name,
                        hire_date: hire_date.to_string(),
                    },
                ));
            }
        }
    }

    birthdays.sort_by(|(a, _), (b, _)| day_order(*a, *b));
    anniversaries.sort_by(|(a, _), (b, _)| day_order(*a, *b));

    Ok(Celebrations {
        birthdays: birthdays.into_iter().map(|(_, entry)| entry).collect(),
        anniversaries: anniversaries.into_iter().map(|(_, entry)| entry).collect(),
        scanned: records.len(),
        skipped,
    })
}
