use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Status the store assigns to newly created bookings.
pub const DEFAULT_STATUS: &str = "pending";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub client_id: Uuid,
    pub start_date: Date,
    pub end_date: Date,
    pub route: Value,
    pub requirements: Value,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl Booking {
    /// True when the user is this booking's driver or client.
    #[must_use]
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.driver_id == user_id || self.client_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingParty {
    pub name: String,
    pub email: String,
}

/// A booking with the display fields of both parties attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub driver: BookingParty,
    pub driver_photo: Option<String>,
    pub client: BookingParty,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub driver_id: Uuid,
    pub client_id: Uuid,
    pub start_date: Date,
    pub end_date: Date,
    pub route: Value,
    pub requirements: Value,
}

/// Which side of a booking a user is looking from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Driver,
    Client,
}

impl UserType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driver" => Ok(Self::Driver),
            "client" => Ok(Self::Client),
            other => Err(format!("Unknown user type: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_parse() {
        assert_eq!("driver".parse::<UserType>().unwrap(), UserType::Driver);
        assert_eq!("client".parse::<UserType>().unwrap(), UserType::Client);
        assert!("admin".parse::<UserType>().is_err());
    }

    #[test]
    fn test_involves_only_parties() {
        let booking = Booking {
            id: Uuid::new_v4(),
            driver_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            start_date: time::macros::date!(2024 - 01 - 01),
            end_date: time::macros::date!(2024 - 01 - 05),
            route: Value::Null,
            requirements: Value::Null,
            status: DEFAULT_STATUS.to_string(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };

        assert!(booking.involves(booking.driver_id));
        assert!(booking.involves(booking.client_id));
        assert!(!booking.involves(Uuid::new_v4()));
    }
}
