//! Validation for the apply-leave form.
//!
//! The API re-validates everything; these checks only catch input the API
//! would reject anyway (bad dates, reversed ranges) before a round trip.

#[cfg(test)]
#[path = "leave_form_test.rs"]
mod leave_form_test;

use time::Date;
use time::macros::format_description;

use crate::net::types::NewLeave;

/// Leave categories offered by the form.
pub const LEAVE_TYPES: [&str; 4] = ["Casual", "Sick", "Earned", "Maternity"];

/// Parse an ISO `YYYY-MM-DD` date as produced by `<input type="date">`.
pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Inclusive day count between two ISO dates, or `None` if either is invalid
/// or the range is reversed.
pub fn leave_days(start: &str, end: &str) -> Option<i64> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let days = (end - start).whole_days() + 1;
    (days > 0).then_some(days)
}

/// Validate raw form fields and build the request body.
///
/// # Errors
///
/// Returns the message to show inline when a field is missing or the date
/// range is invalid.
pub fn validate_leave_input(leave_type: &str, start: &str, end: &str, reason: &str) -> Result<NewLeave, &'static str> {
    let leave_type = leave_type.trim();
    if leave_type.is_empty() {
        return Err("Choose a leave type.");
    }
    if start.trim().is_empty() || end.trim().is_empty() {
        return Err("Enter both a start and an end date.");
    }
    if parse_date(start).is_none() || parse_date(end).is_none() {
        return Err("Dates must be in YYYY-MM-DD format.");
    }
    if leave_days(start, end).is_none() {
        return Err("End date cannot be before start date.");
    }
    let reason = reason.trim();
    Ok(NewLeave {
        leave_type: leave_type.to_owned(),
        start_date: start.trim().to_owned(),
        end_date: end.trim().to_owned(),
        reason: (!reason.is_empty()).then(|| reason.to_owned()),
    })
}
