use crate::domain::user::{Role, User};
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::UserRecord;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Creates a user.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the insert fails, including a duplicate email.
    #[tracing::instrument(level = "debug", skip(self, name, email), err)]
    pub async fn create(&self, name: &str, email: &str, role: Role) -> Result<User> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, email, role)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, role, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(role.as_str())
        .fetch_one(&self.pool)
        .await?;

        record.try_into()
    }

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        record.map(TryInto::try_into).transpose()
    }

    /// Attaches a driver profile to an existing user.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the user does not exist or already has a profile.
    #[tracing::instrument(level = "debug", skip(self, photo), err)]
    pub async fn create_driver_profile(&self, user_id: Uuid, photo: Option<&str>) -> Result<()> {
        sqlx::query("INSERT INTO drivers (user_id, photo) VALUES ($1, $2)")
            .bind(user_id)
            .bind(photo)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
