use crate::domain::booking::{Booking, BookingDetails, BookingParty};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub driver_id: Uuid,
    #[serde(with = "calendar_date")]
    pub start_date: Date,
    #[serde(with = "calendar_date")]
    pub end_date: Date,
    #[serde(default = "empty_object")]
    pub route: Value,
    #[serde(default = "empty_object")]
    pub requirements: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Debug, Deserialize)]
pub struct ListBookings {
    #[serde(rename = "as")]
    pub user_type: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub client_id: Uuid,
    #[serde(with = "calendar_date")]
    pub start_date: Date,
    #[serde(with = "calendar_date")]
    pub end_date: Date,
    pub route: Value,
    pub requirements: Value,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            driver_id: booking.driver_id,
            client_id: booking.client_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            route: booking.route,
            requirements: booking.requirements,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photo: Option<String>,
}

impl Party {
    fn new(party: BookingParty, photo: Option<String>) -> Self {
        Self { name: party.name, email: party.email, photo }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetailsResponse {
    #[serde(flatten)]
    pub booking: BookingResponse,
    pub driver: Party,
    pub client: Party,
}

impl From<BookingDetails> for BookingDetailsResponse {
    fn from(details: BookingDetails) -> Self {
        Self {
            booking: details.booking.into(),
            driver: Party::new(details.driver, details.driver_photo),
            client: Party::new(details.client, None),
        }
    }
}
