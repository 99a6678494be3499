use sqlx::PgPool;
use uuid::Uuid;

use crate::db::error::DatabaseError;
use crate::db::models::{NewStudyGroup, ParticipantInfo, StudyGroup, UpdateStudyGroup};

pub struct StudyGroupRepository;

impl StudyGroupRepository {
    /// Create the group and the creator's participant row in one
    /// transaction; the participants table is the single source of truth
    /// for membership.
    pub async fn insert(
        pool: &PgPool,
        creator_id: Uuid,
        group: &NewStudyGroup,
    ) -> Result<StudyGroup, DatabaseError> {
        let mut tx = pool.begin().await?;

        let created = sqlx::query_as::<_, StudyGroup>(
            r#"
            INSERT INTO study_groups
                (title, subject, description, meeting_date, meeting_time, duration_minutes, creator_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, subject, description, meeting_date, meeting_time,
                      duration_minutes, creator_id, created_at, updated_at
            "#,
        )
        .bind(&group.title)
        .bind(&group.subject)
        .bind(group.description.as_deref())
        .bind(group.meeting_date)
        .bind(group.meeting_time)
        .bind(group.duration_minutes)
        .bind(creator_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO study_group_participants (group_id, user_id) VALUES ($1, $2)")
            .bind(created.id)
            .bind(creator_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    pub async fn find(pool: &PgPool, group_id: Uuid) -> Result<Option<StudyGroup>, DatabaseError> {
        let group = sqlx::query_as::<_, StudyGroup>(
            r#"
            SELECT id, title, subject, description, meeting_date, meeting_time,
                   duration_minutes, creator_id, created_at, updated_at
            FROM study_groups
            WHERE id = $1
            "#,
        )
        .bind(group_id)
        .fetch_optional(pool)
        .await?;

        Ok(group)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<StudyGroup>, DatabaseError> {
        let groups = sqlx::query_as::<_, StudyGroup>(
            r#"
            SELECT id, title, subject, description, meeting_date, meeting_time,
                   duration_minutes, creator_id, created_at, updated_at
            FROM study_groups
            ORDER BY meeting_date ASC, meeting_time ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(groups)
    }

    pub async fn participant_ids(
        pool: &PgPool,
        group_id: Uuid,
    ) -> Result<Vec<Uuid>, DatabaseError> {
        let rows = sqlx::query_as::<_, (Uuid,)>(
            "SELECT user_id FROM study_group_participants WHERE group_id = $1 ORDER BY joined_at ASC",
        )
        .bind(group_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    pub async fn participants(
        pool: &PgPool,
        group_id: Uuid,
    ) -> Result<Vec<ParticipantInfo>, DatabaseError> {
        let participants = sqlx::query_as::<_, ParticipantInfo>(
            r#"
            SELECT u.id, u.first_name, u.last_name
            FROM study_group_participants p
            JOIN users u ON u.id = p.user_id
            WHERE p.group_id = $1
            ORDER BY p.joined_at ASC
            "#,
        )
        .bind(group_id)
        .fetch_all(pool)
        .await?;

        Ok(participants)
    }

    pub async fn add_participant(
        pool: &PgPool,
        group_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO study_group_participants (group_id, user_id) VALUES ($1, $2)")
            .bind(group_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn remove_participant(
        pool: &PgPool,
        group_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM study_group_participants WHERE group_id = $1 AND user_id = $2")
            .bind(group_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn update(
        pool: &PgPool,
        group_id: Uuid,
        update: &UpdateStudyGroup,
    ) -> Result<StudyGroup, DatabaseError> {
        let updated = sqlx::query_as::<_, StudyGroup>(
            r#"
            UPDATE study_groups
            SET
                title = COALESCE($1, title),
                subject = COALESCE($2, subject),
                description = COALESCE($3, description),
                meeting_date = COALESCE($4, meeting_date),
                meeting_time = COALESCE($5, meeting_time),
                duration_minutes = COALESCE($6, duration_minutes),
                updated_at = NOW()
            WHERE id = $7
            RETURNING id, title, subject, description, meeting_date, meeting_time,
                      duration_minutes, creator_id, created_at, updated_at
            "#,
        )
        .bind(update.title.as_deref())
        .bind(update.subject.as_deref())
        .bind(update.description.as_deref())
        .bind(update.meeting_date)
        .bind(update.meeting_time)
        .bind(update.duration_minutes)
        .bind(group_id)
        .fetch_one(pool)
        .await?;

        Ok(updated)
    }

    /// Participant rows go with the group via ON DELETE CASCADE.
    pub async fn delete(pool: &PgPool, group_id: Uuid) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM study_groups WHERE id = $1")
            .bind(group_id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
