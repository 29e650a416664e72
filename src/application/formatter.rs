// Formatter - display strings for dates, counts and the last-updated stamp
use crate::domain::locale::Locale;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// What a timestamp that cannot be parsed renders as.
pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    locale: Locale,
    offset: FixedOffset,
}

impl Formatter {
    /// `offset` is the viewer's time zone.
    pub fn new(locale: Locale, offset: FixedOffset) -> Self {
        Self { locale, offset }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// `YYYY/MM/DD HH:MM` in the viewer's time zone, or `None` when there is
    /// nothing to show.
    pub fn format_last_updated(&self, iso: Option<&str>) -> Option<String> {
        let raw = iso.filter(|s| !s.is_empty())?;
        let formatted = match self.parse_timestamp(raw) {
            Some(date) => date.format("%Y/%m/%d %H:%M").to_string(),
            None => INVALID_DATE.to_string(),
        };
        Some(formatted)
    }

    /// Locale short date, empty when absent.
    pub fn format_date(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            return String::new();
        };
        match self.parse_timestamp(raw) {
            Some(date) => self.locale.short_date(&date),
            None => INVALID_DATE.to_string(),
        }
    }

    /// Thousands-grouped count, e.g. `1,234,567`.
    pub fn format_count(&self, n: i64) -> String {
        let digits = n.unsigned_abs().to_string();
        let separator = self.locale.thousands_separator();

        let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if n < 0 {
            result.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                result.push(separator);
            }
            result.push(ch);
        }
        result
    }

    pub fn current_year(&self, now: DateTime<Utc>) -> i32 {
        now.with_timezone(&self.offset).year()
    }

    /// Parse the timestamp shapes the data file carries and shift into the
    /// viewer's time zone.
    fn parse_timestamp(&self, raw: &str) -> Option<DateTime<FixedOffset>> {
        let raw = raw.trim();

        if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
            return Some(date.with_timezone(&self.offset));
        }
        // RSS pubDate
        if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
            return Some(date.with_timezone(&self.offset));
        }
        // Date-time without an offset is local time
        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
                return self.offset.from_local_datetime(&naive).single();
            }
        }
        // Date-only is UTC midnight
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&naive).with_timezone(&self.offset));
        }
        None
    }
}
