use crate::domain::user::User;
use crate::error::AppError;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct UserRecord {
    pub(crate) id: Uuid,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) role: String,
    pub(crate) created_at: OffsetDateTime,
}

impl TryFrom<UserRecord> for User {
    type Error = AppError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let role = record.role.parse().map_err(|e: String| AppError::Database(sqlx::Error::Decode(e.into())))?;
        Ok(Self { id: record.id, name: record.name, email: record.email, role, created_at: record.created_at })
    }
}
