use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Completed => write!(f, "completed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub student_id: Uuid,
    pub tutor_id: Uuid,
    pub subject: String,
    pub booking_time: OffsetDateTime,
    pub status: BookingStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewBooking {
    pub tutor_id: Uuid,
    #[validate(length(min = 1, message = "Subject must not be empty"))]
    pub subject: String,
    pub booking_time: OffsetDateTime,
}

/// Status is taken as a raw string so unknown values surface as a 400 from
/// the transition guard instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingPayload {
    pub status: Option<String>,
    pub booking_time: Option<OffsetDateTime>,
}

/// A booking joined with the counterparty's name, for the calendar views.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookingWithParty {
    pub id: Uuid,
    pub subject: String,
    pub booking_time: OffsetDateTime,
    pub status: BookingStatus,
    pub party_first_name: String,
    pub party_last_name: String,
}

#[derive(Debug, Serialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
    pub status: BookingStatus,
}
