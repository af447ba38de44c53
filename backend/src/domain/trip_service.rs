//! Trip domain service implementing the trip command and query ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{TripCommand, TripQuery, TripRepository, TripRepositoryError};
use crate::domain::{
    ClientId, ClientTrip, DeletionOutcome, Error, NewTrip, NewTripDraft, Trip, TripId,
};

fn map_repository_error(error: TripRepositoryError) -> Error {
    match error {
        TripRepositoryError::Connection { message } => {
            warn!(%message, "trip repository connection failed");
            Error::service_unavailable("trip repository unavailable")
        }
        TripRepositoryError::Query { message } => {
            Error::internal(format!("trip repository error: {message}"))
        }
    }
}

fn trip_not_found(trip_id: TripId) -> Error {
    Error::not_found(format!("Trip with ID {trip_id} not found."))
}

/// Trip service backed by a [`TripRepository`].
#[derive(Clone)]
pub struct TripService<R> {
    trip_repo: Arc<R>,
}

impl<R> TripService<R> {
    /// Create a new service with the trip repository.
    pub fn new(trip_repo: Arc<R>) -> Self {
        Self { trip_repo }
    }
}

#[async_trait]
impl<R> TripCommand for TripService<R>
where
    R: TripRepository,
{
    async fn create_trip(&self, draft: NewTripDraft) -> Result<Trip, Error> {
        let trip = NewTrip::new(draft)?;
        let stored = self
            .trip_repo
            .insert(&trip)
            .await
            .map_err(map_repository_error)?;
        info!(trip_id = %stored.id, countries = stored.countries.len(), "trip created");
        Ok(stored)
    }

    async fn delete_trip(&self, trip_id: TripId) -> Result<(), Error> {
        let outcome = self
            .trip_repo
            .delete(trip_id)
            .await
            .map_err(map_repository_error)?;

        match outcome {
            DeletionOutcome::Deleted => {
                info!(%trip_id, "trip deleted");
                Ok(())
            }
            DeletionOutcome::NotFound => Err(trip_not_found(trip_id)),
            DeletionOutcome::HasRegistrations { count } => Err(Error::conflict(format!(
                "Trip with ID {trip_id} has {count} registered client(s) and cannot be deleted."
            ))),
        }
    }
}

#[async_trait]
impl<R> TripQuery for TripService<R>
where
    R: TripRepository,
{
    async fn list_trips(&self) -> Result<Vec<Trip>, Error> {
        self.trip_repo.list().await.map_err(map_repository_error)
    }

    async fn get_trip(&self, trip_id: TripId) -> Result<Trip, Error> {
        self.trip_repo
            .find_by_id(trip_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| trip_not_found(trip_id))
    }

    async fn list_client_trips(&self, client_id: ClientId) -> Result<Vec<ClientTrip>, Error> {
        self.trip_repo
            .list_for_client(client_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("Client with ID {client_id} not found.")))
    }
}

#[cfg(test)]
#[path = "trip_service_tests.rs"]
mod tests;
