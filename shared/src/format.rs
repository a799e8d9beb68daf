//! Display formatting for amounts, dates and times.

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Display settings shared by every table and summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix for money amounts, followed by a space
    pub currency_marker: String,
    /// Shown in place of a missing date or time
    pub placeholder: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_marker: "Rs".to_string(),
            placeholder: "-".to_string(),
        }
    }
}

/// Formats raw record fields into cell text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Formatter {
    config: DisplayConfig,
}

impl Formatter {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// `Some(15000.0)` becomes `"Rs 15,000"`. A missing amount is an empty
    /// string so the cell stays blank instead of showing a bogus zero.
    pub fn currency(&self, amount: Option<f64>) -> String {
        match amount.filter(|a| a.is_finite()) {
            Some(amount) => format!("{} {}", self.config.currency_marker, group_thousands(amount)),
            None => String::new(),
        }
    }

    /// Long date, e.g. "January 15, 2025"
    pub fn long_date(&self, raw: Option<&str>) -> String {
        self.date_with(raw, "%B %-d, %Y")
    }

    /// Short date, e.g. "Jan 15, 2025"
    pub fn short_date(&self, raw: Option<&str>) -> String {
        self.date_with(raw, "%b %-d, %Y")
    }

    /// Pay period, e.g. "January 2025". Accepts `YYYY-MM` as well as full dates.
    pub fn month_year(&self, raw: Option<&str>) -> String {
        self.date_with(raw, "%B %Y")
    }

    /// 24-hour `HH:MM[:SS]` to "2:30 PM"
    pub fn time_of_day(&self, raw: Option<&str>) -> String {
        let Some(raw) = non_blank(raw) else {
            return self.config.placeholder.clone();
        };
        match parse_time(raw) {
            Some(time) => time.format("%-I:%M %p").to_string(),
            None => raw.to_string(),
        }
    }

    /// "2:30 PM - 4:00 PM"; the placeholder alone when both ends are missing.
    pub fn time_range(&self, start: Option<&str>, end: Option<&str>) -> String {
        if non_blank(start).is_none() && non_blank(end).is_none() {
            return self.config.placeholder.clone();
        }
        format!("{} - {}", self.time_of_day(start), self.time_of_day(end))
    }

    /// Plain text, blank when missing.
    pub fn text(&self, raw: Option<&str>) -> String {
        raw.map(str::trim).unwrap_or_default().to_string()
    }

    fn date_with(&self, raw: Option<&str>, pattern: &str) -> String {
        let Some(raw) = non_blank(raw) else {
            return self.config.placeholder.clone();
        };
        match parse_date(raw) {
            Some(date) => date.format(pattern).to_string(),
            None => raw.to_string(),
        }
    }
}

/// Thousands-grouped amount with at most two fraction digits, trailing
/// fraction zeros dropped: `1234.5` is `"1,234.5"`, `-1000.0` is `"-1,000"`.
pub fn group_thousands(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if amount < 0.0 && cents > 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        0 => {}
        f if f % 10 == 0 => grouped.push_str(&format!(".{}", f / 10)),
        f => grouped.push_str(&format!(".{:02}", f)),
    }
    grouped
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM`, RFC 3339 timestamps and anything that
/// starts with a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    if raw.len() == 7 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
            return Some(date);
        }
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S%.f"))
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(15000.0), "15,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(1234.5), "1,234.5");
        assert_eq!(group_thousands(1234.56), "1,234.56");
        assert_eq!(group_thousands(0.05), "0.05");
        assert_eq!(group_thousands(-1000.0), "-1,000");
        assert_eq!(group_thousands(-0.001), "0");
        assert_eq!(group_thousands(99.999), "100");
    }

    #[test]
    fn test_currency() {
        let fmt = Formatter::default();
        assert_eq!(fmt.currency(Some(15000.0)), "Rs 15,000");
        assert_eq!(fmt.currency(Some(2000.0)), "Rs 2,000");
        assert_eq!(fmt.currency(None), "");
        assert_eq!(fmt.currency(Some(f64::NAN)), "");
    }

    #[test]
    fn test_custom_currency_marker() {
        let fmt = Formatter::new(DisplayConfig {
            currency_marker: "PKR".to_string(),
            ..DisplayConfig::default()
        });
        assert_eq!(fmt.currency(Some(1500.0)), "PKR 1,500");
    }

    #[test]
    fn test_dates() {
        let fmt = Formatter::default();
        assert_eq!(fmt.long_date(Some("2025-01-15")), "January 15, 2025");
        assert_eq!(fmt.short_date(Some("2025-01-15")), "Jan 15, 2025");
        assert_eq!(fmt.long_date(Some("2025-06-03T10:30:00+05:00")), "June 3, 2025");
        assert_eq!(fmt.long_date(Some("2025-06-03T10:30:00.000Z")), "June 3, 2025");
        assert_eq!(fmt.long_date(Some("2025-06-03 10:30:00")), "June 3, 2025");
        assert_eq!(fmt.month_year(Some("2025-02")), "February 2025");
        assert_eq!(fmt.month_year(Some("2025-02-01")), "February 2025");
    }

    #[test]
    fn test_missing_dates_use_placeholder() {
        let fmt = Formatter::default();
        assert_eq!(fmt.long_date(None), "-");
        assert_eq!(fmt.long_date(Some("")), "-");
        assert_eq!(fmt.short_date(Some("   ")), "-");
        assert_eq!(fmt.month_year(None), "-");
    }

    #[test]
    fn test_unparseable_date_is_shown_verbatim() {
        let fmt = Formatter::default();
        assert_eq!(fmt.long_date(Some("next Tuesday")), "next Tuesday");
    }

    #[test]
    fn test_times() {
        let fmt = Formatter::default();
        assert_eq!(fmt.time_of_day(Some("14:30:00")), "2:30 PM");
        assert_eq!(fmt.time_of_day(Some("09:05")), "9:05 AM");
        assert_eq!(fmt.time_of_day(Some("00:00:00")), "12:00 AM");
        assert_eq!(fmt.time_of_day(None), "-");
        assert_eq!(fmt.time_range(Some("14:30:00"), Some("16:00:00")), "2:30 PM - 4:00 PM");
        assert_eq!(fmt.time_range(Some("14:30"), None), "2:30 PM - -");
        assert_eq!(fmt.time_range(None, None), "-");
    }

    #[test]
    fn test_text() {
        let fmt = Formatter::default();
        assert_eq!(fmt.text(Some(" Maths ")), "Maths");
        assert_eq!(fmt.text(None), "");
    }
}
