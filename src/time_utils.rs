// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date parsing and formatting.

use crate::error::AppError;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        AppError::BadRequest(format!("Invalid date '{}': expected YYYY-MM-DD", raw.trim()))
    })
}

/// Format a date the way a person reads it, e.g. "Mon Jan 15 2024".
pub fn format_date_readable(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}
