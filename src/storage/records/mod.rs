pub mod booking;
pub mod message;
pub mod user;

pub use booking::{BookingDetailsRecord, BookingRecord};
pub use message::{MessageDetailsRecord, MessageRecord};
pub use user::UserRecord;
