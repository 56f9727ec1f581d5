use crate::domain::booking::{Booking, BookingDetails, NewBooking, UserType};
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::{BookingDetailsRecord, BookingRecord};
use uuid::Uuid;

const DETAILS_BY_DRIVER: &str = r#"
    SELECT b.id, b.driver_id, b.client_id, b.start_date, b.end_date, b.route, b.requirements,
           b.status, b.created_at,
           du.name AS driver_name, du.email AS driver_email, d.photo AS driver_photo,
           cu.name AS client_name, cu.email AS client_email
    FROM bookings b
    JOIN users du ON du.id = b.driver_id
    JOIN users cu ON cu.id = b.client_id
    LEFT JOIN drivers d ON d.user_id = b.driver_id
    WHERE b.driver_id = $1
    ORDER BY b.created_at DESC, b.id DESC
"#;

const DETAILS_BY_CLIENT: &str = r#"
    SELECT b.id, b.driver_id, b.client_id, b.start_date, b.end_date, b.route, b.requirements,
           b.status, b.created_at,
           du.name AS driver_name, du.email AS driver_email, d.photo AS driver_photo,
           cu.name AS client_name, cu.email AS client_email
    FROM bookings b
    JOIN users du ON du.id = b.driver_id
    JOIN users cu ON cu.id = b.client_id
    LEFT JOIN drivers d ON d.user_id = b.driver_id
    WHERE b.client_id = $1
    ORDER BY b.created_at DESC, b.id DESC
"#;

/// Data access for the `bookings` relation.
#[derive(Clone, Debug)]
pub struct BookingRepository {
    pool: DbPool,
}

impl BookingRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts a booking and returns the stored row, including the generated id,
    /// creation time and default status.
    ///
    /// # Errors
    /// Returns `AppError::Database` unchanged if the store rejects the insert
    /// (for example an unknown driver or client id).
    #[tracing::instrument(level = "debug", skip(self, booking), fields(driver_id = %booking.driver_id), err)]
    pub async fn create(&self, booking: NewBooking) -> Result<Booking> {
        let record = sqlx::query_as::<_, BookingRecord>(
            r#"
            INSERT INTO bookings (driver_id, client_id, start_date, end_date, route, requirements)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, driver_id, client_id, start_date, end_date, route, requirements, status, created_at
            "#,
        )
        .bind(booking.driver_id)
        .bind(booking.client_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.route)
        .bind(booking.requirements)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    /// Lists every booking where the user is the driver or the client, newest first.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub async fn find_by_user_id(&self, user_id: Uuid, user_type: UserType) -> Result<Vec<BookingDetails>> {
        let query = match user_type {
            UserType::Driver => DETAILS_BY_DRIVER,
            UserType::Client => DETAILS_BY_CLIENT,
        };

        let records = sqlx::query_as::<_, BookingDetailsRecord>(query).bind(user_id).fetch_all(&self.pool).await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>> {
        let record = sqlx::query_as::<_, BookingRecord>(
            r#"
            SELECT id, driver_id, client_id, start_date, end_date, route, requirements, status, created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }

    /// Sets the status of one booking and returns the updated row.
    ///
    /// The value is forwarded without validation.
    ///
    /// # Errors
    /// Returns `AppError::Database(sqlx::Error::RowNotFound)` if no booking has this id,
    /// or `AppError::Database` if the store rejects the value.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Booking> {
        let record = sqlx::query_as::<_, BookingRecord>(
            r#"
            UPDATE bookings
            SET status = $2
            WHERE id = $1
            RETURNING id, driver_id, client_id, start_date, end_date, route, requirements, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }
}
