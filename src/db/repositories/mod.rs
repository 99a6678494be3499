mod availability_repository;
mod booking_repository;
mod study_group_repository;
mod user_repository;

pub use availability_repository::AvailabilityRepository;
pub use booking_repository::BookingRepository;
pub use study_group_repository::StudyGroupRepository;
pub use user_repository::UserRepository;
