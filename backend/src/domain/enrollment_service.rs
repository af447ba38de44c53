//! Enrollment service: registers clients on trips within capacity.
//!
//! The service owns the workflow contract and the clock; the registration
//! repository owns atomicity. Checks happen in a fixed order (client, trip,
//! capacity, duplicate) so callers always see the same error for the same
//! state.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{
    EnrollmentCommand, RegistrationRepository, RegistrationRepositoryError,
};
use crate::domain::{ClientId, EnrollmentError, EnrollmentOutcome, TripId, UnenrollmentOutcome};

fn map_repository_error(error: RegistrationRepositoryError) -> EnrollmentError {
    match error {
        RegistrationRepositoryError::Connection { message } => {
            warn!(%message, "registration repository connection failed");
            EnrollmentError::Unavailable
        }
        RegistrationRepositoryError::Query { message } => EnrollmentError::Internal { message },
    }
}

/// Enrollment service backed by a [`RegistrationRepository`].
#[derive(Clone)]
pub struct EnrollmentService<R> {
    registration_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> EnrollmentService<R> {
    /// Create a new service.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use travel_agency::outbound::persistence::{DbPool, DieselRegistrationRepository, PoolConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/travel")).await?;
    /// let service = travel_agency::domain::EnrollmentService::new(
    ///     Arc::new(DieselRegistrationRepository::new(pool)),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(registration_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            registration_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> EnrollmentCommand for EnrollmentService<R>
where
    R: RegistrationRepository,
{
    async fn enroll_client(
        &self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> Result<(), EnrollmentError> {
        let today = self.clock.utc().date_naive();
        let outcome = self
            .registration_repo
            .enroll(client_id, trip_id, today)
            .await
            .map_err(map_repository_error)?;

        match outcome {
            EnrollmentOutcome::Enrolled { registered_at } => {
                info!(%client_id, %trip_id, %registered_at, "client enrolled");
                Ok(())
            }
            EnrollmentOutcome::ClientNotFound => Err(EnrollmentError::ClientNotFound { client_id }),
            EnrollmentOutcome::TripNotFound => Err(EnrollmentError::TripNotFound { trip_id }),
            EnrollmentOutcome::TripFull { max_people } => {
                warn!(%client_id, %trip_id, max_people, "enrollment rejected, trip is full");
                Err(EnrollmentError::TripFull {
                    trip_id,
                    max_people,
                })
            }
            EnrollmentOutcome::AlreadyRegistered => {
                Err(EnrollmentError::AlreadyRegistered { client_id, trip_id })
            }
        }
    }

    async fn unenroll_client(
        &self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> Result<(), EnrollmentError> {
        let outcome = self
            .registration_repo
            .unenroll(client_id, trip_id)
            .await
            .map_err(map_repository_error)?;

        match outcome {
            UnenrollmentOutcome::Removed => {
                info!(%client_id, %trip_id, "client unenrolled");
                Ok(())
            }
            UnenrollmentOutcome::NotRegistered => {
                Err(EnrollmentError::NotRegistered { client_id, trip_id })
            }
        }
    }
}

#[cfg(test)]
#[path = "enrollment_service_tests.rs"]
mod tests;
