//! Port for the registration store.
//!
//! Implementations must run every enrollment as one atomic unit: the existence
//! checks, the capacity count, the duplicate check and the insert observe and
//! modify the same state, and concurrent enrollments for one trip serialise.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{ClientId, EnrollmentOutcome, TripId, UnenrollmentOutcome};

use super::define_port_error;

define_port_error! {
    /// Errors raised by registration repository adapters.
    pub enum RegistrationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "registration repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "registration repository query failed: {message}",
    }
}

/// Port for creating and removing registrations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Register `client_id` on `trip_id`.
    ///
    /// Checks run in this order: client exists, trip exists, trip has room,
    /// pair not yet registered. The stored date is `today`, or the latest
    /// registration date recorded for any trip when that is later.
    async fn enroll(
        &self,
        client_id: ClientId,
        trip_id: TripId,
        today: NaiveDate,
    ) -> Result<EnrollmentOutcome, RegistrationRepositoryError>;

    /// Remove exactly the registration for the pair, if present.
    async fn unenroll(
        &self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> Result<UnenrollmentOutcome, RegistrationRepositoryError>;
}
