//! Calendar date parsing and period bucketing for reports.
//!
//! Stored dates are calendar dates (`YYYY-MM-DD`). Older records may carry full ISO
//! date-times; those are converted to UTC before the date is taken. All comparisons work
//! on `NaiveDate` so time-of-day never affects which bucket a record falls into.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

/// Sentinel rendered in place of a date that cannot be parsed.
pub const UNKNOWN_DATE: &str = "N/A";

/// Parses a stored date into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times (converted to UTC) and ISO date-times
/// without an offset.
///
/// # Returns
/// - `Some(NaiveDate)` - The calendar date
/// - `None` - The value is empty or in an unsupported format
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc).date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
}

/// Formats a stored date as `YYYY-MM-DD`, or `N/A` if it cannot be parsed.
pub fn normalize_date(value: &str) -> String {
    parse_date(value)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Formats a stored date for display as `dd/mm/yyyy`, or `N/A` if it cannot be parsed.
pub fn format_display(value: &str) -> String {
    parse_date(value)
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// First day (Sunday) of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Date bucket used by appointment and financial reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    /// Parses the appointment report period (`dia`, `semana`, `mes`), ignoring case.
    pub fn from_report_param(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "dia" => Some(Self::Day),
            "semana" => Some(Self::Week),
            "mes" | "mês" => Some(Self::Month),
            _ => None,
        }
    }

    /// Checks whether `date` falls in the same period as `reference`.
    ///
    /// Weeks start on Sunday.
    pub fn contains(self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::Day => date == reference,
            Self::Week => week_start(date) == week_start(reference),
            Self::Month => date.year() == reference.year() && date.month() == reference.month(),
        }
    }
}

/// Period filter for the financial report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinancialPeriod {
    Within(Period),
    Total,
}

impl FinancialPeriod {
    /// Parses `day`, `week`, `month` or `total`, ignoring case. A missing value means `total`.
    pub fn from_param(value: Option<&str>) -> Option<Self> {
        let Some(value) = value else {
            return Some(Self::Total);
        };

        match value.trim().to_lowercase().as_str() {
            "day" => Some(Self::Within(Period::Day)),
            "week" => Some(Self::Within(Period::Week)),
            "month" => Some(Self::Within(Period::Month)),
            "total" => Some(Self::Total),
            _ => None,
        }
    }

    /// Checks whether a stored date string is included when reporting relative to `today`.
    ///
    /// Unparseable dates only match `Total`.
    pub fn includes(self, value: &str, today: NaiveDate) -> bool {
        match self {
            Self::Total => true,
            Self::Within(period) => parse_date(value)
                .map(|date| period.contains(date, today))
                .unwrap_or(false),
        }
    }
}
