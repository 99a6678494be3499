mod availability;
mod booking;
mod study_group;
mod user;

pub use availability::*;
pub use booking::*;
pub use study_group::*;
pub use user::*;
