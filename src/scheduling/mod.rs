//! Validation logic gating every scheduling mutation: time-range algebra,
//! availability ordering, booking-window conflicts, booking status
//! transitions and study-group membership rules. Everything here is pure and
//! synchronous; handlers fetch the relevant records and pass them in along
//! with the requesting principal.

pub mod conflict;
pub mod membership;
pub mod status;
pub mod time_range;

pub use conflict::ConflictError;
pub use membership::MembershipError;
pub use status::TransitionError;
pub use time_range::TimeRange;
