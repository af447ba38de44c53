//! Driving port for trip reads.

use async_trait::async_trait;

use crate::domain::{ClientId, ClientTrip, Error, Trip, TripId};

/// Driving port for reading trips.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripQuery: Send + Sync {
    /// Every trip with its ordered country list.
    async fn list_trips(&self) -> Result<Vec<Trip>, Error>;

    /// One trip. Fails with `NotFound` when absent.
    async fn get_trip(&self, trip_id: TripId) -> Result<Trip, Error>;

    /// Trips the client is registered for. Fails with `NotFound` when the
    /// client does not exist.
    async fn list_client_trips(&self, client_id: ClientId) -> Result<Vec<ClientTrip>, Error>;
}

/// Fixture implementation used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTripQuery;

#[async_trait]
impl TripQuery for FixtureTripQuery {
    async fn list_trips(&self) -> Result<Vec<Trip>, Error> {
        Ok(Vec::new())
    }

    async fn get_trip(&self, trip_id: TripId) -> Result<Trip, Error> {
        Err(Error::not_found(format!("Trip with ID {trip_id} not found.")))
    }

    async fn list_client_trips(&self, client_id: ClientId) -> Result<Vec<ClientTrip>, Error> {
        Err(Error::not_found(format!(
            "Client with ID {client_id} not found."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_list_is_empty() {
        let trips = FixtureTripQuery.list_trips().await.expect("fixture list");
        assert!(trips.is_empty());
    }
}
