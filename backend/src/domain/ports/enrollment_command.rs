//! Driving port for registering clients on trips.

use async_trait::async_trait;

use crate::domain::{ClientId, EnrollmentError, TripId};

/// Driving port for the enrollment workflow.
///
/// Errors stay typed as [`EnrollmentError`] so adapters can tell capacity
/// failures from duplicates without parsing messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentCommand: Send + Sync {
    /// Register a client on a trip, subject to the trip's capacity.
    async fn enroll_client(
        &self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> Result<(), EnrollmentError>;

    /// Remove a client's registration from a trip.
    async fn unenroll_client(
        &self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> Result<(), EnrollmentError>;
}

/// Fixture implementation used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEnrollmentCommand;

#[async_trait]
impl EnrollmentCommand for FixtureEnrollmentCommand {
    async fn enroll_client(
        &self,
        client_id: ClientId,
        _trip_id: TripId,
    ) -> Result<(), EnrollmentError> {
        Err(EnrollmentError::ClientNotFound { client_id })
    }

    async fn unenroll_client(
        &self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> Result<(), EnrollmentError> {
        Err(EnrollmentError::NotRegistered { client_id, trip_id })
    }
}
