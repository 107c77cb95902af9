//! Date parsing.

use chrono::NaiveDate;

use crate::error::MiqatError;

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<NaiveDate, MiqatError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| MiqatError::InvalidDate(s.to_string()))
}
