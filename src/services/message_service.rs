use crate::domain::message::{Message, MessageDetails};
use crate::error::{AppError, Result};
use crate::storage::message_repo::MessageRepository;
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};
use uuid::Uuid;

#[derive(Clone, Debug)]
struct Metrics {
    sent_total: Counter<u64>,
    marked_read: Histogram<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("drivehire-server");
        Self {
            sent_total: meter
                .u64_counter("drivehire_messages_sent_total")
                .with_description("Total messages sent between users")
                .build(),
            marked_read: meter
                .u64_histogram("drivehire_messages_marked_read")
                .with_description("Number of messages flipped to read in a single call")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageService {
    repo: MessageRepository,
    metrics: Metrics,
}

impl MessageService {
    #[must_use]
    pub fn new(repo: MessageRepository) -> Self {
        Self { repo, metrics: Metrics::new() }
    }

    /// Sends a message to a receiver.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` if the content is blank.
    /// Returns `AppError::Database` if the message cannot be stored.
    #[tracing::instrument(err(level = "warn"), skip(self, content, sender_id), fields(receiver_id = %receiver_id))]
    pub async fn send_message(&self, sender_id: Uuid, receiver_id: Uuid, content: &str) -> Result<Message> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest("Message content must not be empty".into()));
        }

        match self.repo.create(sender_id, receiver_id, content).await {
            Ok(message) => {
                tracing::debug!("Message stored");
                self.metrics.sent_total.add(1, &[KeyValue::new("status", "success")]);
                Ok(message)
            }
            Err(e) => {
                self.metrics.sent_total.add(1, &[KeyValue::new("status", "failure")]);
                Err(e)
            }
        }
    }

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn conversation(&self, user_id: Uuid, other_user_id: Uuid) -> Result<Vec<MessageDetails>> {
        self.repo.find_conversation(user_id, other_user_id).await
    }

    /// # Errors
    /// Returns `AppError::Database` if the update fails.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn mark_as_read(&self, sender_id: Uuid, receiver_id: Uuid) -> Result<Vec<Message>> {
        let updated = self.repo.mark_as_read(sender_id, receiver_id).await?;
        self.metrics.marked_read.record(updated.len() as u64, &[]);
        Ok(updated)
    }
}
