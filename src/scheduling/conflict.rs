use thiserror::Error;
use time::OffsetDateTime;

use super::time_range::TimeRange;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("Availability cannot start in the past")]
    PastStartTime,

    #[error("Slots must be added in chronological order; the next slot must start at or after {floor}")]
    OutOfOrderSlot { floor: OffsetDateTime },

    #[error("The requested time window already has bookings")]
    SlotAlreadyBooked,
}

/// Decide whether a proposed slot may be appended to a tutor's day.
///
/// `existing` holds the day's current slots ordered by start time ascending.
/// Only the latest slot's end time is consulted: insertion is append-only
/// per day, and earlier slots are never re-checked for overlap.
pub fn check_new_slot(
    now: OffsetDateTime,
    existing: &[TimeRange],
    proposed: &TimeRange,
) -> Result<(), ConflictError> {
    if proposed.start < now {
        return Err(ConflictError::PastStartTime);
    }

    if let Some(last) = existing.last() {
        if proposed.start < last.end {
            return Err(ConflictError::OutOfOrderSlot { floor: last.end });
        }
    }

    Ok(())
}

/// True iff any booking time falls inside `[window.start, window.end)`.
pub fn has_booking_in_window(booking_times: &[OffsetDateTime], window: &TimeRange) -> bool {
    booking_times.iter().any(|t| window.contains(*t))
}

/// Reject a slot edit, delete or day-disable when bookings occupy the
/// affected window.
pub fn ensure_window_unbooked(
    booking_times: &[OffsetDateTime],
    window: &TimeRange,
) -> Result<(), ConflictError> {
    if has_booking_in_window(booking_times, window) {
        Err(ConflictError::SlotAlreadyBooked)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn range(start: OffsetDateTime, end: OffsetDateTime) -> TimeRange {
        TimeRange::new(start, end)
    }

    const NOW: OffsetDateTime = datetime!(2026-09-01 08:00 UTC);

    #[test]
    fn past_start_is_rejected_regardless_of_existing_slots() {
        let proposed = range(datetime!(2026-08-31 09:00 UTC), datetime!(2026-08-31 10:00 UTC));
        assert_eq!(
            check_new_slot(NOW, &[], &proposed),
            Err(ConflictError::PastStartTime)
        );

        let existing = [range(datetime!(2026-08-30 09:00 UTC), datetime!(2026-08-30 10:00 UTC))];
        assert_eq!(
            check_new_slot(NOW, &existing, &proposed),
            Err(ConflictError::PastStartTime)
        );
    }

    #[test]
    fn first_slot_of_the_day_is_accepted() {
        let proposed = range(datetime!(2026-09-07 09:00 UTC), datetime!(2026-09-07 10:00 UTC));
        assert_eq!(check_new_slot(NOW, &[], &proposed), Ok(()));
    }

    #[test]
    fn slot_starting_before_last_end_is_rejected_with_floor() {
        // Monday 09:00-10:00 exists; 09:30-10:30 must be rejected citing 10:00.
        let existing = [range(datetime!(2026-09-07 09:00 UTC), datetime!(2026-09-07 10:00 UTC))];
        let proposed = range(datetime!(2026-09-07 09:30 UTC), datetime!(2026-09-07 10:30 UTC));

        let err = check_new_slot(NOW, &existing, &proposed).unwrap_err();
        assert_eq!(
            err,
            ConflictError::OutOfOrderSlot {
                floor: datetime!(2026-09-07 10:00 UTC)
            }
        );
        assert!(err.to_string().contains("10:00"));
    }

    #[test]
    fn slot_starting_at_last_end_is_accepted() {
        let existing = [range(datetime!(2026-09-07 09:00 UTC), datetime!(2026-09-07 10:00 UTC))];
        let proposed = range(datetime!(2026-09-07 10:00 UTC), datetime!(2026-09-07 11:00 UTC));
        assert_eq!(check_new_slot(NOW, &existing, &proposed), Ok(()));
    }

    #[test]
    fn only_the_latest_slot_sets_the_floor() {
        // A gap between earlier slots is not re-checked; only the last slot's
        // end matters.
        let existing = [
            range(datetime!(2026-09-07 09:00 UTC), datetime!(2026-09-07 10:00 UTC)),
            range(datetime!(2026-09-07 12:00 UTC), datetime!(2026-09-07 13:00 UTC)),
        ];
        let inside_gap = range(datetime!(2026-09-07 10:30 UTC), datetime!(2026-09-07 11:30 UTC));
        assert_eq!(
            check_new_slot(NOW, &existing, &inside_gap),
            Err(ConflictError::OutOfOrderSlot {
                floor: datetime!(2026-09-07 13:00 UTC)
            })
        );
    }

    #[test]
    fn booking_inside_window_blocks_the_mutation() {
        // Student booked 10:30; the 10:00-11:00 slot cannot be deleted.
        let bookings = [datetime!(2026-09-07 10:30 UTC)];
        let window = range(datetime!(2026-09-07 10:00 UTC), datetime!(2026-09-07 11:00 UTC));
        assert_eq!(
            ensure_window_unbooked(&bookings, &window),
            Err(ConflictError::SlotAlreadyBooked)
        );
    }

    #[test]
    fn booking_at_window_end_does_not_block() {
        let bookings = [datetime!(2026-09-07 11:00 UTC)];
        let window = range(datetime!(2026-09-07 10:00 UTC), datetime!(2026-09-07 11:00 UTC));
        assert_eq!(ensure_window_unbooked(&bookings, &window), Ok(()));
    }

    #[test]
    fn day_window_catches_any_booking_on_that_day() {
        let bookings = [datetime!(2026-09-07 18:45 UTC)];
        let window = TimeRange::calendar_day(date!(2026-09-07));
        assert!(has_booking_in_window(&bookings, &window));

        let other_day = TimeRange::calendar_day(date!(2026-09-08));
        assert!(!has_booking_in_window(&bookings, &other_day));
    }
}
