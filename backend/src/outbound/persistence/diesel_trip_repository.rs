//! PostgreSQL-backed `TripRepository` implementation using Diesel ORM.
//!
//! Trips are stored in `trip` with their countries in `country` and the
//! ordered `country_trip` link table. Reads join all three and fold the flat
//! rows back into domain trips.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{TripRepository, TripRepositoryError};
use crate::domain::{ClientId, ClientTrip, DeletionOutcome, NewTrip, Trip, TripId};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{
    NewCountryRow, NewCountryTripRow, NewTripRow, RegistrationRow, TripRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{client, client_trip, country, country_trip, trip};
use super::trip_grouping::{group_trip_rows, trip_from_row};

/// Diesel-backed implementation of the trip repository port.
#[derive(Clone)]
pub struct DieselTripRepository {
    pool: DbPool,
}

impl DieselTripRepository {
    /// Create a new repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use travel_agency::outbound::persistence::{DbPool, DieselTripRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/travel")).await?;
    /// let repository = DieselTripRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TripRepositoryError {
    map_basic_pool_error(error, TripRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TripRepositoryError {
    map_basic_diesel_error(
        error,
        TripRepositoryError::query,
        TripRepositoryError::connection,
    )
}

/// Upsert country names and link them to the trip at their list positions.
async fn link_countries(
    conn: &mut AsyncPgConnection,
    trip_id: i32,
    names: &[String],
) -> QueryResult<()> {
    if names.is_empty() {
        return Ok(());
    }

    let country_rows: Vec<NewCountryRow<'_>> = names
        .iter()
        .map(|name| NewCountryRow { name })
        .collect();
    diesel::insert_into(country::table)
        .values(&country_rows)
        .on_conflict(country::name)
        .do_nothing()
        .execute(conn)
        .await?;

    let known: Vec<(i32, String)> = country::table
        .filter(country::name.eq_any(names))
        .select((country::id_country, country::name))
        .load(conn)
        .await?;

    let links = names
        .iter()
        .enumerate()
        .map(|(position, name)| {
            let id_country = known
                .iter()
                .find(|(_, known_name)| known_name == name)
                .map(|(id, _)| *id)
                .ok_or(diesel::result::Error::NotFound)?;
            let position = i32::try_from(position).map_err(|_| {
                diesel::result::Error::QueryBuilderError("country list too long".into())
            })?;
            Ok(NewCountryTripRow {
                id_country,
                id_trip: trip_id,
                position,
            })
        })
        .collect::<QueryResult<Vec<_>>>()?;

    diesel::insert_into(country_trip::table)
        .values(&links)
        .execute(conn)
        .await?;
    Ok(())
}

/// Load trips with their countries, optionally restricted to one trip.
async fn load_trips(
    conn: &mut AsyncPgConnection,
    only: Option<i32>,
) -> QueryResult<Vec<Trip>> {
    let mut query = trip::table
        .left_join(country_trip::table.left_join(country::table))
        .order((trip::id_trip, country_trip::position.nullable()))
        .select((TripRow::as_select(), country::name.nullable()))
        .into_boxed();
    if let Some(id) = only {
        query = query.filter(trip::id_trip.eq(id));
    }

    let rows: Vec<(TripRow, Option<String>)> = query.load(conn).await?;
    Ok(group_trip_rows(rows.into_iter().map(|(row, name)| (row, (), name)))
        .into_iter()
        .map(|(trip, ())| trip)
        .collect())
}

#[async_trait]
impl TripRepository for DieselTripRepository {
    async fn insert(&self, new_trip: &NewTrip) -> Result<Trip, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewTripRow {
            name: new_trip.name(),
            description: new_trip.description(),
            date_from: new_trip.date_from(),
            date_to: new_trip.date_to(),
            max_people: new_trip.max_people(),
        };
        let countries = new_trip.countries();

        let stored = conn
            .transaction(|conn| {
                async move {
                    let stored: TripRow = diesel::insert_into(trip::table)
                        .values(&row)
                        .returning(TripRow::as_returning())
                        .get_result(conn)
                        .await?;
                    link_countries(conn, stored.id_trip, countries).await?;
                    Ok(stored)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        let mut trip = trip_from_row(stored);
        trip.countries = countries.to_vec();
        Ok(trip)
    }

    async fn delete(&self, trip_id: TripId) -> Result<DeletionOutcome, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = trip_id.get();

        // Enrollment locks the same trip row, so the count below cannot go
        // stale before the delete commits.
        conn.transaction(|conn| {
            async move {
                let locked = trip::table
                    .find(id)
                    .select(trip::id_trip)
                    .for_update()
                    .first::<i32>(conn)
                    .await
                    .optional()?;
                if locked.is_none() {
                    return Ok(DeletionOutcome::NotFound);
                }

                let count: i64 = client_trip::table
                    .filter(client_trip::id_trip.eq(id))
                    .count()
                    .get_result(conn)
                    .await?;
                if count > 0 {
                    return Ok(DeletionOutcome::HasRegistrations { count });
                }

                diesel::delete(country_trip::table.filter(country_trip::id_trip.eq(id)))
                    .execute(conn)
                    .await?;
                diesel::delete(trip::table.find(id)).execute(conn).await?;
                Ok(DeletionOutcome::Deleted)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Trip>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        load_trips(&mut conn, None).await.map_err(map_diesel_error)
    }

    async fn find_by_id(&self, trip_id: TripId) -> Result<Option<Trip>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let trips = load_trips(&mut conn, Some(trip_id.get()))
            .await
            .map_err(map_diesel_error)?;
        Ok(trips.into_iter().next())
    }

    async fn list_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Option<Vec<ClientTrip>>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = client_id.get();

        let rows = conn
            .transaction(|conn| {
                async move {
                    let exists = client::table
                        .find(id)
                        .select(client::id_client)
                        .first::<i32>(conn)
                        .await
                        .optional()?;
                    if exists.is_none() {
                        return Ok(None);
                    }

                    let rows: Vec<(TripRow, RegistrationRow, Option<String>)> = client_trip::table
                        .inner_join(
                            trip::table.left_join(country_trip::table.left_join(country::table)),
                        )
                        .filter(client_trip::id_client.eq(id))
                        .order((trip::id_trip, country_trip::position.nullable()))
                        .select((
                            TripRow::as_select(),
                            RegistrationRow::as_select(),
                            country::name.nullable(),
                        ))
                        .load(conn)
                        .await?;
                    Ok(Some(rows))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.map(|rows| {
            group_trip_rows(rows)
                .into_iter()
                .map(|(trip, registration)| ClientTrip {
                    trip,
                    registered_at: registration.registered_at,
                    payment_date: registration.payment_date,
                })
                .collect()
        }))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for trip repository error mapping.
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let error = map_pool_error(PoolError::build("invalid URL"));

        assert!(matches!(error, TripRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn check_violation_maps_to_query_error() {
        let error = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation,
            Box::new("trip_date_range_check".to_owned()),
        ));

        assert_eq!(
            error,
            TripRepositoryError::query("check constraint violated")
        );
    }
}
