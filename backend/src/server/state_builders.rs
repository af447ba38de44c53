//! Builders for HTTP state ports backed by repositories or fixtures.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use travel_agency::domain::{ClientService, EnrollmentService, TripService};
use travel_agency::inbound::http::state::{HttpState, HttpStatePorts};
use travel_agency::outbound::persistence::{
    DbPool, DieselClientRepository, DieselRegistrationRepository, DieselTripRepository,
};

use super::ServerConfig;

/// Build ports with `make_ports` when a pool is available, otherwise fall back
/// to the fixture ports.
fn build_ports_with_pool<Pool, MakePorts>(
    pool: &Option<Pool>,
    make_ports: MakePorts,
) -> HttpStatePorts
where
    MakePorts: FnOnce(&Pool) -> HttpStatePorts,
{
    match pool {
        Some(pool) => make_ports(pool),
        None => HttpStatePorts::default(),
    }
}

fn diesel_ports(pool: &DbPool) -> HttpStatePorts {
    let trips = Arc::new(TripService::new(Arc::new(DieselTripRepository::new(
        pool.clone(),
    ))));
    HttpStatePorts {
        clients: Arc::new(ClientService::new(Arc::new(DieselClientRepository::new(
            pool.clone(),
        )))),
        trips: trips.clone(),
        trips_query: trips,
        enrollments: Arc::new(EnrollmentService::new(
            Arc::new(DieselRegistrationRepository::new(pool.clone())),
            Arc::new(DefaultClock),
        )),
    }
}

/// Build the shared HTTP state from configured ports and fixture fallbacks.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(build_ports_with_pool(
        &config.db_pool,
        diesel_ports,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rstest::rstest;
    use travel_agency::domain::ports::TripQuery;
    use travel_agency::domain::{ClientId, ClientTrip, Error, Trip, TripId};

    #[derive(Clone, Copy)]
    struct StubDbBackedTrips;

    #[async_trait]
    impl TripQuery for StubDbBackedTrips {
        async fn list_trips(&self) -> Result<Vec<Trip>, Error> {
            let date = NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date");
            Ok(vec![Trip {
                id: TripId::new(1),
                name: "Paris Weekend".to_owned(),
                description: None,
                date_from: date,
                date_to: date,
                max_people: 2,
                countries: vec!["France".to_owned()],
            }])
        }

        async fn get_trip(&self, trip_id: TripId) -> Result<Trip, Error> {
            Err(Error::not_found(format!("Trip with ID {trip_id} not found.")))
        }

        async fn list_client_trips(&self, _client_id: ClientId) -> Result<Vec<ClientTrip>, Error> {
            Ok(Vec::new())
        }
    }

    fn stub_ports(_pool: &()) -> HttpStatePorts {
        HttpStatePorts {
            trips_query: Arc::new(StubDbBackedTrips),
            ..HttpStatePorts::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn db_pool_present_selects_repository_backed_ports() {
        let ports = build_ports_with_pool(&Some(()), stub_ports);

        let trips = ports.trips_query.list_trips().await.expect("list trips");
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].name, "Paris Weekend");
    }

    #[rstest]
    #[tokio::test]
    async fn db_pool_absent_keeps_fixture_ports() {
        let ports = build_ports_with_pool::<(), _>(&None, stub_ports);

        let trips = ports.trips_query.list_trips().await.expect("list trips");
        assert!(trips.is_empty());
    }

    #[rstest]
    fn config_without_pool_builds_state() {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("addr"));
        assert!(config.db_pool.is_none());
        assert_eq!(config.bind_addr().port(), 0);
        let _state = build_http_state(&config);
    }
}
