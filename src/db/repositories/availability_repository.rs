use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::db::error::DatabaseError;
use crate::db::models::{AvailabilitySlot, NewAvailabilitySlot, OpenSlot, UpdateAvailabilitySlot};

pub struct AvailabilityRepository;

impl AvailabilityRepository {
    /// A tutor's slots for one day, ordered by start time ascending. The
    /// conflict checker relies on this ordering.
    pub async fn slots_for_tutor_day(
        pool: &PgPool,
        tutor_id: Uuid,
        day: Date,
    ) -> Result<Vec<AvailabilitySlot>, DatabaseError> {
        let slots = sqlx::query_as::<_, AvailabilitySlot>(
            r#"
            SELECT id, tutor_id, day, subject, start_time, end_time, is_active, created_at, updated_at
            FROM availability_slots
            WHERE tutor_id = $1 AND day = $2
            ORDER BY start_time ASC
            "#,
        )
        .bind(tutor_id)
        .bind(day)
        .fetch_all(pool)
        .await?;

        Ok(slots)
    }

    pub async fn slots_for_tutor(
        pool: &PgPool,
        tutor_id: Uuid,
    ) -> Result<Vec<AvailabilitySlot>, DatabaseError> {
        let slots = sqlx::query_as::<_, AvailabilitySlot>(
            r#"
            SELECT id, tutor_id, day, subject, start_time, end_time, is_active, created_at, updated_at
            FROM availability_slots
            WHERE tutor_id = $1
            ORDER BY day ASC, start_time ASC
            "#,
        )
        .bind(tutor_id)
        .fetch_all(pool)
        .await?;

        Ok(slots)
    }

    pub async fn insert(
        pool: &PgPool,
        tutor_id: Uuid,
        slot: &NewAvailabilitySlot,
    ) -> Result<AvailabilitySlot, DatabaseError> {
        let created = sqlx::query_as::<_, AvailabilitySlot>(
            r#"
            INSERT INTO availability_slots (tutor_id, day, subject, start_time, end_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, tutor_id, day, subject, start_time, end_time, is_active, created_at, updated_at
            "#,
        )
        .bind(tutor_id)
        .bind(slot.day)
        .bind(&slot.subject)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }

    pub async fn find_owned(
        pool: &PgPool,
        slot_id: Uuid,
        tutor_id: Uuid,
    ) -> Result<Option<AvailabilitySlot>, DatabaseError> {
        let slot = sqlx::query_as::<_, AvailabilitySlot>(
            r#"
            SELECT id, tutor_id, day, subject, start_time, end_time, is_active, created_at, updated_at
            FROM availability_slots
            WHERE id = $1 AND tutor_id = $2
            "#,
        )
        .bind(slot_id)
        .bind(tutor_id)
        .fetch_optional(pool)
        .await?;

        Ok(slot)
    }

    pub async fn update(
        pool: &PgPool,
        slot_id: Uuid,
        update: &UpdateAvailabilitySlot,
    ) -> Result<AvailabilitySlot, DatabaseError> {
        let updated = sqlx::query_as::<_, AvailabilitySlot>(
            r#"
            UPDATE availability_slots
            SET
                subject = COALESCE($1, subject),
                start_time = COALESCE($2, start_time),
                end_time = COALESCE($3, end_time),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
            WHERE id = $5
            RETURNING id, tutor_id, day, subject, start_time, end_time, is_active, created_at, updated_at
            "#,
        )
        .bind(update.subject.as_deref())
        .bind(update.start_time)
        .bind(update.end_time)
        .bind(update.is_active)
        .bind(slot_id)
        .fetch_one(pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(pool: &PgPool, slot_id: Uuid) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM availability_slots WHERE id = $1")
            .bind(slot_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Deactivate every slot a tutor has on `day`. Returns the number of
    /// slots affected.
    pub async fn disable_day(
        pool: &PgPool,
        tutor_id: Uuid,
        day: Date,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE availability_slots
            SET is_active = FALSE, updated_at = NOW()
            WHERE tutor_id = $1 AND day = $2
            "#,
        )
        .bind(tutor_id)
        .bind(day)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Every active slot across all tutors, with tutor names, for the
    /// student-facing listing.
    pub async fn active_slots_with_tutors(pool: &PgPool) -> Result<Vec<OpenSlot>, DatabaseError> {
        let slots = sqlx::query_as::<_, OpenSlot>(
            r#"
            SELECT
                a.id, a.tutor_id,
                u.first_name AS tutor_first_name, u.last_name AS tutor_last_name,
                a.day, a.subject, a.start_time, a.end_time
            FROM availability_slots a
            JOIN users u ON u.id = a.tutor_id
            WHERE a.is_active = TRUE
            ORDER BY a.day ASC, a.start_time ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(slots)
    }
}
