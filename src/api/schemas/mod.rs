pub mod bookings;
pub mod drivers;
pub mod health;
pub mod messages;
pub mod session;
pub mod users;
