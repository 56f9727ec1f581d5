use crate::domain::message::{Message, MessageDetails};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct MessageRecord {
    pub(crate) id: Uuid,
    pub(crate) sender_id: Uuid,
    pub(crate) receiver_id: Uuid,
    pub(crate) content: String,
    pub(crate) read: bool,
    pub(crate) created_at: OffsetDateTime,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: record.id,
            sender_id: record.sender_id,
            receiver_id: record.receiver_id,
            content: record.content,
            read: record.read,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct MessageDetailsRecord {
    #[sqlx(flatten)]
    pub(crate) message: MessageRecord,
    pub(crate) sender_name: String,
    pub(crate) receiver_name: String,
}

impl From<MessageDetailsRecord> for MessageDetails {
    fn from(record: MessageDetailsRecord) -> Self {
        Self { message: record.message.into(), sender_name: record.sender_name, receiver_name: record.receiver_name }
    }
}
