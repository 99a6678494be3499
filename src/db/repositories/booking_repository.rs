use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::error::DatabaseError;
use crate::db::models::{Booking, BookingStatus, BookingWithParty, NewBooking};

pub struct BookingRepository;

impl BookingRepository {
    pub async fn insert(
        pool: &PgPool,
        student_id: Uuid,
        booking: &NewBooking,
    ) -> Result<Booking, DatabaseError> {
        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (student_id, tutor_id, subject, booking_time, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, student_id, tutor_id, subject, booking_time, status, created_at, updated_at
            "#,
        )
        .bind(student_id)
        .bind(booking.tutor_id)
        .bind(&booking.subject)
        .bind(booking.booking_time)
        .bind(BookingStatus::Pending)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }

    pub async fn find(pool: &PgPool, booking_id: Uuid) -> Result<Option<Booking>, DatabaseError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, student_id, tutor_id, subject, booking_time, status, created_at, updated_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(pool)
        .await?;

        Ok(booking)
    }

    /// All booking times held against a tutor, fed to the overlap checker
    /// before availability mutations. Bookings are never deleted, so this is
    /// the complete picture.
    pub async fn times_for_tutor(
        pool: &PgPool,
        tutor_id: Uuid,
    ) -> Result<Vec<OffsetDateTime>, DatabaseError> {
        let rows = sqlx::query_as::<_, (OffsetDateTime,)>(
            "SELECT booking_time FROM bookings WHERE tutor_id = $1",
        )
        .bind(tutor_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(|(t,)| t).collect())
    }

    /// A tutor's bookings joined with each student's name.
    pub async fn for_tutor_with_students(
        pool: &PgPool,
        tutor_id: Uuid,
    ) -> Result<Vec<BookingWithParty>, DatabaseError> {
        let bookings = sqlx::query_as::<_, BookingWithParty>(
            r#"
            SELECT
                b.id, b.subject, b.booking_time, b.status,
                u.first_name AS party_first_name, u.last_name AS party_last_name
            FROM bookings b
            JOIN users u ON u.id = b.student_id
            WHERE b.tutor_id = $1
            ORDER BY b.booking_time ASC
            "#,
        )
        .bind(tutor_id)
        .fetch_all(pool)
        .await?;

        Ok(bookings)
    }

    /// A student's bookings joined with each tutor's name.
    pub async fn for_student_with_tutors(
        pool: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<BookingWithParty>, DatabaseError> {
        let bookings = sqlx::query_as::<_, BookingWithParty>(
            r#"
            SELECT
                b.id, b.subject, b.booking_time, b.status,
                u.first_name AS party_first_name, u.last_name AS party_last_name
            FROM bookings b
            JOIN users u ON u.id = b.tutor_id
            WHERE b.student_id = $1
            ORDER BY b.booking_time ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(pool)
        .await?;

        Ok(bookings)
    }

    pub async fn update(
        pool: &PgPool,
        booking_id: Uuid,
        status: Option<BookingStatus>,
        booking_time: Option<OffsetDateTime>,
    ) -> Result<Booking, DatabaseError> {
        let updated = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET
                status = COALESCE($1, status),
                booking_time = COALESCE($2, booking_time),
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, student_id, tutor_id, subject, booking_time, status, created_at, updated_at
            "#,
        )
        .bind(status)
        .bind(booking_time)
        .bind(booking_id)
        .fetch_one(pool)
        .await?;

        Ok(updated)
    }
}
