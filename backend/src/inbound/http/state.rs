//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ClientCommand, EnrollmentCommand, FixtureClientCommand, FixtureEnrollmentCommand,
    FixtureTripCommand, FixtureTripQuery, TripCommand, TripQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub clients: Arc<dyn ClientCommand>,
    pub trips: Arc<dyn TripCommand>,
    pub trips_query: Arc<dyn TripQuery>,
    pub enrollments: Arc<dyn EnrollmentCommand>,
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            clients: Arc::new(FixtureClientCommand),
            trips: Arc::new(FixtureTripCommand),
            trips_query: Arc::new(FixtureTripQuery),
            enrollments: Arc::new(FixtureEnrollmentCommand),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub clients: Arc<dyn ClientCommand>,
    pub trips: Arc<dyn TripCommand>,
    pub trips_query: Arc<dyn TripQuery>,
    pub enrollments: Arc<dyn EnrollmentCommand>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use travel_agency::domain::ports::FixtureTripQuery;
    /// use travel_agency::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     trips_query: Arc::new(FixtureTripQuery),
    ///     ..HttpStatePorts::default()
    /// });
    /// let _trips = state.trips_query.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            clients,
            trips,
            trips_query,
            enrollments,
        } = ports;
        Self {
            clients,
            trips,
            trips_query,
            enrollments,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
