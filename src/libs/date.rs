//! Due-date text formatting and parsing.
//!
//! Due dates are stored and displayed in a single textual form:
//! `D/MonthName/YYYY` — day with no leading zero, month as a full Spanish
//! name from a fixed 12-entry table, four-digit year. The same table backs
//! both directions, so `parse_due_date(format_due_date(d))` reconstructs
//! `d` for every valid calendar date.
//!
//! ## Format Specifications
//!
//! - 15 April 2025 → `"15/Abril/2025"`
//! - 1 January 2025 → `"1/Enero/2025"` (no leading zero)
//! - 31 December 2025 → `"31/Diciembre/2025"`
//!
//! ## Error Handling
//!
//! Parsing is deliberately lenient and total:
//! - An unrecognized month name falls back to the first month (Enero)
//! - Empty or structurally malformed input falls back to the current date
//! - A triple that is not a real calendar date (e.g. `31/Febrero/2025`)
//!   falls back to the current date
//!
//! No error ever propagates to the caller.

use chrono::{Datelike, Local, NaiveDate};

/// Fixed, ordered month-name table. Index 0 is the first month.
pub const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Formats a calendar date into its `D/MonthName/YYYY` text form.
///
/// Total over valid dates; operates on the date's calendar fields as given,
/// with no timezone conversion.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use proman::libs::date::format_due_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
/// assert_eq!(format_due_date(&date), "15/Abril/2025");
/// ```
pub fn format_due_date(date: &NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), MONTHS[date.month0() as usize], date.year())
}

/// Parses a `D/MonthName/YYYY` string back into a calendar date.
///
/// Falls back to the current date when the input is empty or cannot be
/// parsed, and to the first month when only the month name is
/// unrecognized. Never returns an error.
pub fn parse_due_date(text: &str) -> NaiveDate {
    try_parse(text).unwrap_or_else(|| Local::now().date_naive())
}

fn try_parse(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('/');

    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month_name = parts.next()?.trim();
    let year: i32 = parts.next()?.trim().parse().ok()?;

    // Unknown month names resolve to Enero rather than failing.
    let month0 = MONTHS.iter().position(|month| *month == month_name).unwrap_or(0);

    NaiveDate::from_ymd_opt(year, month0 as u32 + 1, day)
}
