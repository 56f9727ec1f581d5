use crate::domain::booking::{Booking, BookingDetails, NewBooking, UserType};
use crate::error::{AppError, Result};
use crate::storage::booking_repo::BookingRepository;
use opentelemetry::{KeyValue, global, metrics::Counter};
use uuid::Uuid;

#[derive(Clone, Debug)]
struct Metrics {
    created_total: Counter<u64>,
    status_updates_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("drivehire-server");
        Self {
            created_total: meter
                .u64_counter("drivehire_bookings_created_total")
                .with_description("Total booking requests submitted")
                .build(),
            status_updates_total: meter
                .u64_counter("drivehire_booking_status_updates_total")
                .with_description("Total booking status changes")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BookingService {
    repo: BookingRepository,
    metrics: Metrics,
}

impl BookingService {
    #[must_use]
    pub fn new(repo: BookingRepository) -> Self {
        Self { repo, metrics: Metrics::new() }
    }

    /// Submits a booking request.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` if the end date precedes the start date.
    /// Returns `AppError::Database` if the store rejects the row.
    #[tracing::instrument(err(level = "warn"), skip(self, booking), fields(client_id = %booking.client_id))]
    pub async fn request_booking(&self, booking: NewBooking) -> Result<Booking> {
        if booking.end_date < booking.start_date {
            return Err(AppError::BadRequest("endDate must not be before startDate".into()));
        }

        match self.repo.create(booking).await {
            Ok(created) => {
                self.metrics.created_total.add(1, &[KeyValue::new("status", "success")]);
                tracing::debug!(booking_id = %created.id, "Booking stored");
                Ok(created)
            }
            Err(e) => {
                self.metrics.created_total.add(1, &[KeyValue::new("status", "failure")]);
                Err(e)
            }
        }
    }

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn list_for_user(&self, user_id: Uuid, user_type: UserType) -> Result<Vec<BookingDetails>> {
        self.repo.find_by_user_id(user_id, user_type).await
    }

    /// Sets a booking's status on behalf of one of its parties.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if the booking does not exist or `caller_id` is
    /// neither its driver nor its client.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn update_status(&self, caller_id: Uuid, id: Uuid, status: &str) -> Result<Booking> {
        let existing = self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        if !existing.involves(caller_id) {
            return Err(AppError::NotFound);
        }

        let booking = self.repo.update_status(id, status).await?;
        self.metrics.status_updates_total.add(1, &[]);
        Ok(booking)
    }
}
