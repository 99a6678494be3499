use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Date, OffsetDateTime, Time};
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub description: Option<String>,
    pub meeting_date: Date,
    pub meeting_time: Time,
    pub duration_minutes: i32,
    pub creator_id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewStudyGroup {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Subject must not be empty"))]
    pub subject: String,
    pub description: Option<String>,
    pub meeting_date: Date,
    pub meeting_time: Time,
    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration_minutes: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudyGroup {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Subject must not be empty"))]
    pub subject: Option<String>,
    pub description: Option<String>,
    pub meeting_date: Option<Date>,
    pub meeting_time: Option<Time>,
    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration_minutes: Option<i32>,
}

impl UpdateStudyGroup {
    /// Subject, date and time lock once a second participant has joined.
    pub fn touches_locked_fields(&self) -> bool {
        self.subject.is_some() || self.meeting_date.is_some() || self.meeting_time.is_some()
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ParticipantInfo {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize)]
pub struct StudyGroupWithParticipants {
    #[serde(flatten)]
    pub group: StudyGroup,
    pub participants: Vec<ParticipantInfo>,
}
