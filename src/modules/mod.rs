pub mod bookings;
pub mod study_groups;
pub mod tutors;
