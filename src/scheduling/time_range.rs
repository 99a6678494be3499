use time::{Date, Duration, OffsetDateTime};

/// A half-open interval `[start, end)` over absolute timestamps.
///
/// Timestamps are compared exactly as provided; no timezone normalization
/// happens here or anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl TimeRange {
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self { start, end }
    }

    /// Two half-open intervals overlap iff each starts before the other ends.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, instant: OffsetDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// The full calendar-day window for `day`, used when a tutor disables a
    /// whole day at once.
    pub fn calendar_day(day: Date) -> Self {
        let start = day.midnight().assume_utc();
        Self {
            start,
            end: start + Duration::days(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn overlap_is_symmetric() {
        let a = TimeRange::new(datetime!(2026-09-07 09:00 UTC), datetime!(2026-09-07 10:00 UTC));
        let b = TimeRange::new(datetime!(2026-09-07 09:30 UTC), datetime!(2026-09-07 10:30 UTC));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_ranges_do_not_overlap() {
        let a = TimeRange::new(datetime!(2026-09-07 09:00 UTC), datetime!(2026-09-07 10:00 UTC));
        let b = TimeRange::new(datetime!(2026-09-07 10:00 UTC), datetime!(2026-09-07 11:00 UTC));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn contains_is_half_open() {
        let r = TimeRange::new(datetime!(2026-09-07 09:00 UTC), datetime!(2026-09-07 10:00 UTC));
        assert!(r.contains(datetime!(2026-09-07 09:00 UTC)));
        assert!(r.contains(datetime!(2026-09-07 09:59:59.999 UTC)));
        assert!(!r.contains(datetime!(2026-09-07 10:00 UTC)));
    }

    #[test]
    fn calendar_day_spans_midnight_to_midnight() {
        let r = TimeRange::calendar_day(date!(2026-09-07));
        assert!(r.contains(datetime!(2026-09-07 00:00 UTC)));
        assert!(r.contains(datetime!(2026-09-07 23:59:59.999 UTC)));
        assert!(!r.contains(datetime!(2026-09-08 00:00 UTC)));
        assert!(!r.contains(datetime!(2026-09-06 23:59:59.999 UTC)));
    }
}
