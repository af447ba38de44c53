//! PostgreSQL-backed `ClientRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{ClientRepository, ClientRepositoryError};
use crate::domain::{ClientId, DeletionOutcome, NewClient};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::NewClientRow;
use super::pool::{DbPool, PoolError};
use super::schema::{client, client_trip};

/// Diesel-backed implementation of the client repository port.
#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ClientRepositoryError {
    map_basic_pool_error(error, ClientRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ClientRepositoryError {
    map_basic_diesel_error(
        error,
        ClientRepositoryError::query,
        ClientRepositoryError::connection,
    )
}

#[async_trait]
impl ClientRepository for DieselClientRepository {
    async fn insert(&self, new_client: &NewClient) -> Result<ClientId, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewClientRow {
            first_name: new_client.first_name(),
            last_name: new_client.last_name(),
            email: new_client.email(),
            telephone: new_client.phone(),
            pesel: new_client.national_id(),
        };

        diesel::insert_into(client::table)
            .values(&row)
            .returning(client::id_client)
            .get_result::<i32>(&mut conn)
            .await
            .map(ClientId::new)
            .map_err(map_diesel_error)
    }

    async fn delete(&self, client_id: ClientId) -> Result<DeletionOutcome, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = client_id.get();

        // The row lock conflicts with the share lock taken by enrollment, so a
        // registration cannot slip in between the count and the delete.
        conn.transaction(|conn| {
            async move {
                let locked = client::table
                    .find(id)
                    .select(client::id_client)
                    .for_update()
                    .first::<i32>(conn)
                    .await
                    .optional()?;
                if locked.is_none() {
                    return Ok(DeletionOutcome::NotFound);
                }

                let count: i64 = client_trip::table
                    .filter(client_trip::id_client.eq(id))
                    .count()
                    .get_result(conn)
                    .await?;
                if count > 0 {
                    return Ok(DeletionOutcome::HasRegistrations { count });
                }

                diesel::delete(client::table.find(id)).execute(conn).await?;
                Ok(DeletionOutcome::Deleted)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
