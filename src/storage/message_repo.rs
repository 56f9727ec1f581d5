use crate::domain::message::{Message, MessageDetails};
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::{MessageDetailsRecord, MessageRecord};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct MessageRepository {
    pool: DbPool,
}

impl MessageRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Records a new, unread message.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the insert fails.
    #[tracing::instrument(level = "debug", skip(self, content), err)]
    pub async fn create(&self, sender_id: Uuid, receiver_id: Uuid, content: &str) -> Result<Message> {
        let record = sqlx::query_as::<_, MessageRecord>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, sender_id, receiver_id, content, read, created_at
            "#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    /// Fetches the messages involving either user, oldest first.
    ///
    /// Sender and receiver are filtered independently: a message matches when its
    /// sender is one of the two users OR its receiver is one of the two users. This
    /// also returns messages exchanged with third parties.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub async fn find_conversation(&self, user_id_1: Uuid, user_id_2: Uuid) -> Result<Vec<MessageDetails>> {
        let records = sqlx::query_as::<_, MessageDetailsRecord>(
            r#"
            SELECT m.id, m.sender_id, m.receiver_id, m.content, m.read, m.created_at,
                   su.name AS sender_name, ru.name AS receiver_name
            FROM messages m
            JOIN users su ON su.id = m.sender_id
            JOIN users ru ON ru.id = m.receiver_id
            WHERE m.sender_id IN ($1, $2)
               OR m.receiver_id IN ($1, $2)
            ORDER BY m.created_at ASC, m.id ASC
            "#,
        )
        .bind(user_id_1)
        .bind(user_id_2)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Flags every unread message from `sender_id` to `receiver_id` as read.
    ///
    /// Returns only the rows that changed, so a repeated call returns nothing.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the update fails.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub async fn mark_as_read(&self, sender_id: Uuid, receiver_id: Uuid) -> Result<Vec<Message>> {
        let records = sqlx::query_as::<_, MessageRecord>(
            r#"
            UPDATE messages
            SET read = TRUE
            WHERE sender_id = $1
              AND receiver_id = $2
              AND read = FALSE
            RETURNING id, sender_id, receiver_id, content, read, created_at
            "#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
