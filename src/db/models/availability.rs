use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Date, OffsetDateTime};
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub tutor_id: Uuid,
    pub day: Date,
    pub subject: String,
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewAvailabilitySlot {
    pub day: Date,
    #[validate(length(min = 1, message = "Subject must not be empty"))]
    pub subject: String,
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAvailabilitySlot {
    #[validate(length(min = 1, message = "Subject must not be empty"))]
    pub subject: Option<String>,
    pub start_time: Option<OffsetDateTime>,
    pub end_time: Option<OffsetDateTime>,
    pub is_active: Option<bool>,
}

impl UpdateAvailabilitySlot {
    /// True when the patch affects the time window students see: a changed
    /// subject or time, or deactivating the slot.
    pub fn affects_booked_window(&self) -> bool {
        self.subject.is_some()
            || self.start_time.is_some()
            || self.end_time.is_some()
            || self.is_active == Some(false)
    }
}

#[derive(Debug, Deserialize)]
pub struct DisableDayPayload {
    pub day: Date,
}

/// An active slot joined with its tutor's name, for the student-facing listing.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct OpenSlot {
    pub id: Uuid,
    pub tutor_id: Uuid,
    pub tutor_first_name: String,
    pub tutor_last_name: String,
    pub day: Date,
    pub subject: String,
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
}
