//! Driving port for trip mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewTrip, NewTripDraft, Trip, TripId};

/// Driving port for creating and deleting trips.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripCommand: Send + Sync {
    /// Validate and store a trip, returning it as stored.
    async fn create_trip(&self, draft: NewTripDraft) -> Result<Trip, Error>;

    /// Delete a trip. Fails with `NotFound` when absent and `Conflict` while
    /// registrations still reference it.
    async fn delete_trip(&self, trip_id: TripId) -> Result<(), Error>;
}

/// Fixture implementation used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTripCommand;

#[async_trait]
impl TripCommand for FixtureTripCommand {
    async fn create_trip(&self, draft: NewTripDraft) -> Result<Trip, Error> {
        let trip = NewTrip::new(draft)?;
        Ok(Trip {
            id: TripId::new(1),
            name: trip.name().to_owned(),
            description: trip.description().map(str::to_owned),
            date_from: trip.date_from(),
            date_to: trip.date_to(),
            max_people: trip.max_people(),
            countries: trip.countries().to_vec(),
        })
    }

    async fn delete_trip(&self, trip_id: TripId) -> Result<(), Error> {
        Err(Error::not_found(format!("Trip with ID {trip_id} not found.")))
    }
}
