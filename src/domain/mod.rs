pub mod booking;
pub mod driver;
pub mod message;
pub mod user;
