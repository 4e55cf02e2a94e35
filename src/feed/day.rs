use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::fmt;

/// A canonical calendar day in the configured timezone.
///
/// All day comparisons in the application go through this type: two instants
/// belong to the same `DayKey` exactly when they fall on the same calendar
/// day under the injected offset. The key carries no time component, so
/// ordering and equality are always whole-day.
///
/// Renders as `YYYY-MM-DD` via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Derive the day key for a unix timestamp (seconds) under `tz`.
    ///
    /// Returns `None` for timestamps outside chrono's representable range.
    /// Callers treat `None` the same as an absent timestamp: the item never
    /// matches any selected day.
    pub fn from_timestamp(secs: i64, tz: FixedOffset) -> Option<DayKey> {
        let dt: DateTime<Utc> = DateTime::from_timestamp(secs, 0)?;
        Some(DayKey(dt.with_timezone(&tz).date_naive()))
    }

    /// The current day under `tz`.
    pub fn today(tz: FixedOffset) -> DayKey {
        DayKey(Utc::now().with_timezone(&tz).date_naive())
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Option<DayKey> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(DayKey)
    }

    /// The previous calendar day. Saturates at the representable minimum.
    pub fn pred(self) -> DayKey {
        DayKey(self.0.pred_opt().unwrap_or(self.0))
    }

    /// The next calendar day. Saturates at the representable maximum.
    pub fn succ(self) -> DayKey {
        DayKey(self.0.succ_opt().unwrap_or(self.0))
    }

    /// Human label for the date header: `Today`, `Yesterday`, `Tomorrow`,
    /// or the full date as `Aug 25, 2026` for anything further out.
    pub fn label(self, today: DayKey) -> String {
        if self == today {
            "Today".to_string()
        } else if self.succ() == today {
            "Yesterday".to_string()
        } else if self == today.succ() {
            "Tomorrow".to_string()
        } else {
            self.0.format("%b %d, %Y").to_string()
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Offset;

    fn utc() -> FixedOffset {
        Utc.fix()
    }

    fn offset_hours(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).unwrap()
    }

    fn day(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    #[test]
    fn test_same_day_same_key() {
        // 2024-01-15 00:00:00 UTC and 2024-01-15 23:59:59 UTC
        let a = DayKey::from_timestamp(1705276800, utc()).unwrap();
        let b = DayKey::from_timestamp(1705363199, utc()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "2024-01-15");
    }

    #[test]
    fn test_midnight_boundary_splits_keys() {
        // One second apart across midnight UTC
        let before = DayKey::from_timestamp(1705363199, utc()).unwrap();
        let after = DayKey::from_timestamp(1705363200, utc()).unwrap();
        assert_ne!(before, after);
        assert_eq!(before.succ(), after);
    }

    #[test]
    fn test_offset_moves_instant_across_days() {
        // 2024-01-15 23:30:00 UTC is already Jan 16 at UTC+1,
        // and still Jan 15 at UTC-1.
        let ts = 1705361400;
        let east = DayKey::from_timestamp(ts, offset_hours(1)).unwrap();
        let west = DayKey::from_timestamp(ts, offset_hours(-1)).unwrap();
        assert_eq!(east.to_string(), "2024-01-16");
        assert_eq!(west.to_string(), "2024-01-15");
    }

    #[test]
    fn test_negative_timestamp_before_epoch() {
        let key = DayKey::from_timestamp(-86400, utc()).unwrap();
        assert_eq!(key.to_string(), "1969-12-31");
    }

    #[test]
    fn test_out_of_range_timestamp_is_none() {
        assert!(DayKey::from_timestamp(i64::MAX, utc()).is_none());
    }

    #[test]
    fn test_pred_succ_round_trip() {
        let d = day("2024-03-01");
        assert_eq!(d.pred().to_string(), "2024-02-29"); // leap year
        assert_eq!(d.pred().succ(), d);
    }

    #[test]
    fn test_ordering_is_calendar_order() {
        assert!(day("2024-01-01") < day("2024-01-02"));
        assert!(day("2023-12-31") < day("2024-01-01"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(DayKey::parse("not a date").is_none());
        assert!(DayKey::parse("2024-13-01").is_none());
        assert!(DayKey::parse("2024-02-30").is_none());
        assert!(DayKey::parse("").is_none());
    }

    #[test]
    fn test_labels() {
        let today = day("2024-06-15");
        assert_eq!(today.label(today), "Today");
        assert_eq!(today.pred().label(today), "Yesterday");
        assert_eq!(today.succ().label(today), "Tomorrow");
        assert_eq!(day("2024-06-01").label(today), "Jun 01, 2024");
        assert_eq!(day("2023-12-25").label(today), "Dec 25, 2023");
    }
}
