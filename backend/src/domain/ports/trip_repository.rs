//! Port for trip persistence and trip listings.

use async_trait::async_trait;

use crate::domain::{ClientId, ClientTrip, DeletionOutcome, NewTrip, Trip, TripId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by trip repository adapters.
    pub enum TripRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "trip repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "trip repository query failed: {message}",
    }
}

/// Port for writing trips and reading them with their country lists.
///
/// Every returned [`Trip`] carries its countries in insertion order with no
/// duplicates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Insert a validated trip together with its country links.
    async fn insert(&self, trip: &NewTrip) -> Result<Trip, TripRepositoryError>;

    /// Delete a trip unless registrations still reference it.
    async fn delete(&self, trip_id: TripId) -> Result<DeletionOutcome, TripRepositoryError>;

    /// All trips ordered by identifier.
    async fn list(&self) -> Result<Vec<Trip>, TripRepositoryError>;

    /// Find one trip.
    async fn find_by_id(&self, trip_id: TripId) -> Result<Option<Trip>, TripRepositoryError>;

    /// Trips the client is registered for, or `None` when the client does not
    /// exist.
    async fn list_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Option<Vec<ClientTrip>>, TripRepositoryError>;
}
