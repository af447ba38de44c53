//! PostgreSQL-backed `RegistrationRepository` implementation using Diesel ORM.
//!
//! Enrollment runs as one transaction that share-locks the client row and
//! exclusively locks the trip row before counting registrations. Concurrent
//! enrollments for the same trip therefore queue on the trip lock, and the
//! capacity check always sees every committed registration.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::dsl::{exists, max};
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{RegistrationRepository, RegistrationRepositoryError};
use crate::domain::{ClientId, EnrollmentOutcome, TripId, UnenrollmentOutcome};

use super::diesel_error_mapping::{
    ConstraintViolation, constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::NewClientTripRow;
use super::pool::{DbPool, PoolError};
use super::schema::{client, client_trip, trip};

/// Diesel-backed implementation of the registration repository port.
#[derive(Clone)]
pub struct DieselRegistrationRepository {
    pool: DbPool,
}

impl DieselRegistrationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RegistrationRepositoryError {
    map_basic_pool_error(error, RegistrationRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RegistrationRepositoryError {
    map_basic_diesel_error(
        error,
        RegistrationRepositoryError::query,
        RegistrationRepositoryError::connection,
    )
}

/// Translate constraint violations raised by the insert into outcomes.
///
/// The locks make these unreachable in normal operation; they remain the
/// last line of defence if another writer bypasses the repository.
fn recover_enrollment(
    result: Result<EnrollmentOutcome, diesel::result::Error>,
) -> Result<EnrollmentOutcome, RegistrationRepositoryError> {
    let error = match result {
        Ok(outcome) => return Ok(outcome),
        Err(error) => error,
    };
    match constraint_violation(&error) {
        Some(ConstraintViolation::Unique { .. }) => Ok(EnrollmentOutcome::AlreadyRegistered),
        Some(ConstraintViolation::ForeignKey { constraint }) => {
            debug!(?constraint, "registration insert hit a missing reference");
            if constraint
                .as_deref()
                .is_some_and(|name| name.contains("id_client"))
            {
                Ok(EnrollmentOutcome::ClientNotFound)
            } else {
                Ok(EnrollmentOutcome::TripNotFound)
            }
        }
        None => Err(map_diesel_error(error)),
    }
}

/// Registration date for a new row: `today`, unless any stored registration
/// already carries a later one.
fn clamp_registration_date(today: NaiveDate, latest: Option<NaiveDate>) -> NaiveDate {
    latest.map_or(today, |latest| latest.max(today))
}

#[async_trait]
impl RegistrationRepository for DieselRegistrationRepository {
    async fn enroll(
        &self,
        client_id: ClientId,
        trip_id: TripId,
        today: NaiveDate,
    ) -> Result<EnrollmentOutcome, RegistrationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (id_client, id_trip) = (client_id.get(), trip_id.get());

        let result = conn
            .transaction(|conn| {
                async move {
                    let client_row = client::table
                        .find(id_client)
                        .select(client::id_client)
                        .for_share()
                        .first::<i32>(conn)
                        .await
                        .optional()?;
                    if client_row.is_none() {
                        return Ok(EnrollmentOutcome::ClientNotFound);
                    }

                    let max_people = trip::table
                        .find(id_trip)
                        .select(trip::max_people)
                        .for_update()
                        .first::<i32>(conn)
                        .await
                        .optional()?;
                    let Some(max_people) = max_people else {
                        return Ok(EnrollmentOutcome::TripNotFound);
                    };

                    let taken: i64 = client_trip::table
                        .filter(client_trip::id_trip.eq(id_trip))
                        .count()
                        .get_result(conn)
                        .await?;
                    if taken >= i64::from(max_people) {
                        return Ok(EnrollmentOutcome::TripFull { max_people });
                    }

                    let registered: bool = diesel::select(exists(
                        client_trip::table.find((id_client, id_trip)),
                    ))
                    .get_result(conn)
                    .await?;
                    if registered {
                        return Ok(EnrollmentOutcome::AlreadyRegistered);
                    }

                    let latest: Option<NaiveDate> = client_trip::table
                        .select(max(client_trip::registered_at))
                        .first(conn)
                        .await?;
                    let registered_at = clamp_registration_date(today, latest);

                    diesel::insert_into(client_trip::table)
                        .values(&NewClientTripRow {
                            id_client,
                            id_trip,
                            registered_at,
                            payment_date: None,
                        })
                        .execute(conn)
                        .await?;

                    Ok(EnrollmentOutcome::Enrolled { registered_at })
                }
                .scope_boxed()
            })
            .await;

        recover_enrollment(result)
    }

    async fn unenroll(
        &self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> Result<UnenrollmentOutcome, RegistrationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(client_trip::table.find((client_id.get(), trip_id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(if removed == 0 {
            UnenrollmentOutcome::NotRegistered
        } else {
            UnenrollmentOutcome::Removed
        })
    }
}
