//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Repository ports are driven by the services in this crate and implemented
//! by the Diesel adapters. Command and query ports are the driving side used
//! by the HTTP handlers.

mod macros;
pub(crate) use macros::define_port_error;

mod client_command;
mod client_repository;
mod enrollment_command;
mod registration_repository;
mod trip_command;
mod trip_query;
mod trip_repository;

pub use client_command::{ClientCommand, FixtureClientCommand};
#[cfg(test)]
pub use client_command::MockClientCommand;
pub use client_repository::{ClientRepository, ClientRepositoryError};
#[cfg(test)]
pub use client_repository::MockClientRepository;
pub use enrollment_command::{EnrollmentCommand, FixtureEnrollmentCommand};
#[cfg(test)]
pub use enrollment_command::MockEnrollmentCommand;
pub use registration_repository::{RegistrationRepository, RegistrationRepositoryError};
#[cfg(test)]
pub use registration_repository::MockRegistrationRepository;
pub use trip_command::{FixtureTripCommand, TripCommand};
#[cfg(test)]
pub use trip_command::MockTripCommand;
pub use trip_query::{FixtureTripQuery, TripQuery};
#[cfg(test)]
pub use trip_query::MockTripQuery;
pub use trip_repository::{TripRepository, TripRepositoryError};
#[cfg(test)]
pub use trip_repository::MockTripRepository;
