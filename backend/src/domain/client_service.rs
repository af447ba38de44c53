//! Client domain service implementing the client command port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{ClientCommand, ClientRepository, ClientRepositoryError};
use crate::domain::{ClientId, DeletionOutcome, Error, NewClient, NewClientDraft};

fn map_repository_error(error: ClientRepositoryError) -> Error {
    match error {
        ClientRepositoryError::Connection { message } => {
            warn!(%message, "client repository connection failed");
            Error::service_unavailable("client repository unavailable")
        }
        ClientRepositoryError::Query { message } => {
            Error::internal(format!("client repository error: {message}"))
        }
    }
}

/// Client service backed by a [`ClientRepository`].
#[derive(Clone)]
pub struct ClientService<R> {
    client_repo: Arc<R>,
}

impl<R> ClientService<R> {
    /// Create a new service with the client repository.
    pub fn new(client_repo: Arc<R>) -> Self {
        Self { client_repo }
    }
}

#[async_trait]
impl<R> ClientCommand for ClientService<R>
where
    R: ClientRepository,
{
    async fn create_client(&self, draft: NewClientDraft) -> Result<ClientId, Error> {
        let client = NewClient::new(draft)?;
        let client_id = self
            .client_repo
            .insert(&client)
            .await
            .map_err(map_repository_error)?;
        info!(%client_id, "client created");
        Ok(client_id)
    }

    async fn delete_client(&self, client_id: ClientId) -> Result<(), Error> {
        let outcome = self
            .client_repo
            .delete(client_id)
            .await
            .map_err(map_repository_error)?;

        match outcome {
            DeletionOutcome::Deleted => {
                info!(%client_id, "client deleted");
                Ok(())
            }
            DeletionOutcome::NotFound => Err(Error::not_found(format!(
                "Client with ID {client_id} not found."
            ))),
            DeletionOutcome::HasRegistrations { count } => Err(Error::conflict(format!(
                "Client with ID {client_id} has {count} trip registration(s) and cannot be deleted."
            ))),
        }
    }
}

#[cfg(test)]
#[path = "client_service_tests.rs"]
mod tests;
