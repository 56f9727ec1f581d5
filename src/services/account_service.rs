use crate::domain::user::{Role, User};
use crate::error::{AppError, Result};
use crate::storage::user_repo::UserRepository;
use opentelemetry::{KeyValue, global, metrics::Counter};

#[derive(Clone, Debug)]
struct Metrics {
    users_registered_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("drivehire-server");
        Self {
            users_registered_total: meter
                .u64_counter("drivehire_users_registered_total")
                .with_description("Total number of successful signups")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AccountService {
    user_repo: UserRepository,
    metrics: Metrics,
}

impl AccountService {
    #[must_use]
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo, metrics: Metrics::new() }
    }

    /// Registers a client or driver. Drivers also get an (initially photo-only) profile row.
    ///
    /// The two inserts are independent writes; a failed profile insert leaves the user in place.
    ///
    /// # Errors
    /// Returns `AppError::Conflict` if the email is already registered.
    /// Returns `AppError::BadRequest` for blank name or email.
    /// Returns `AppError::Database` if either insert fails otherwise.
    #[tracing::instrument(skip(self, name, email, photo), fields(user_id = tracing::field::Empty), err(level = "warn"))]
    pub async fn signup(&self, name: &str, email: &str, role: Role, photo: Option<&str>) -> Result<User> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(AppError::BadRequest("name and email are required".into()));
        }

        let user = match self.user_repo.create(name.trim(), email.trim(), role).await {
            Ok(user) => user,
            Err(e) if e.is_unique_violation() => {
                return Err(AppError::Conflict("Email already registered".into()));
            }
            Err(e) => return Err(e),
        };
        tracing::Span::current().record("user_id", tracing::field::display(user.id));

        if role == Role::Driver {
            self.user_repo.create_driver_profile(user.id, photo).await?;
        }

        self.metrics.users_registered_total.add(1, &[KeyValue::new("role", role.as_str())]);
        tracing::info!(role = %role, "User registered");
        Ok(user)
    }
}
