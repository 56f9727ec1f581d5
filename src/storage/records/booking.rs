use crate::domain::booking::{Booking, BookingDetails, BookingParty};
use serde_json::Value;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct BookingRecord {
    pub(crate) id: Uuid,
    pub(crate) driver_id: Uuid,
    pub(crate) client_id: Uuid,
    pub(crate) start_date: Date,
    pub(crate) end_date: Date,
    pub(crate) route: Value,
    pub(crate) requirements: Value,
    pub(crate) status: String,
    pub(crate) created_at: OffsetDateTime,
}

impl From<BookingRecord> for Booking {
    fn from(record: BookingRecord) -> Self {
        Self {
            id: record.id,
            driver_id: record.driver_id,
            client_id: record.client_id,
            start_date: record.start_date,
            end_date: record.end_date,
            route: record.route,
            requirements: record.requirements,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct BookingDetailsRecord {
    #[sqlx(flatten)]
    pub(crate) booking: BookingRecord,
    pub(crate) driver_name: String,
    pub(crate) driver_email: String,
    pub(crate) driver_photo: Option<String>,
    pub(crate) client_name: String,
    pub(crate) client_email: String,
}

impl From<BookingDetailsRecord> for BookingDetails {
    fn from(record: BookingDetailsRecord) -> Self {
        Self {
            booking: record.booking.into(),
            driver: BookingParty { name: record.driver_name, email: record.driver_email },
            driver_photo: record.driver_photo,
            client: BookingParty { name: record.client_name, email: record.client_email },
        }
    }
}
