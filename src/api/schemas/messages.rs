use crate::domain::message::{Message, MessageDetails};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SendMessage {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            content: message.content,
            read: message.read,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDetailsResponse {
    #[serde(flatten)]
    pub message: MessageResponse,
    pub sender_name: String,
    pub receiver_name: String,
}

impl From<MessageDetails> for MessageDetailsResponse {
    fn from(details: MessageDetails) -> Self {
        Self { message: details.message.into(), sender_name: details.sender_name, receiver_name: details.receiver_name }
    }
}
