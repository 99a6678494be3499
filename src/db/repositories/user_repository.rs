use sqlx::PgPool;
use uuid::Uuid;

use crate::db::error::DatabaseError;
use crate::db::models::{User, UserRole};

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Resolve an opaque bearer token to the authenticated user's id and
    /// role. Token issuance lives elsewhere; this only looks sessions up.
    pub async fn find_by_session_token(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<(Uuid, UserRole)>, DatabaseError> {
        let row = sqlx::query_as::<_, (Uuid, UserRole)>(
            r#"
            SELECT u.id, u.role
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }
}
