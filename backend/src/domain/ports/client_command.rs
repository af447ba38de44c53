//! Driving port for client mutations.

use async_trait::async_trait;

use crate::domain::{ClientId, Error, NewClientDraft};

/// Driving port for creating and deleting clients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientCommand: Send + Sync {
    /// Validate and store a client, returning its identifier.
    ///
    /// Fails with `InvalidRequest` when a required field is blank or the
    /// email is malformed.
    async fn create_client(&self, draft: NewClientDraft) -> Result<ClientId, Error>;

    /// Delete a client. Fails with `NotFound` when absent and `Conflict`
    /// while registrations still reference it.
    async fn delete_client(&self, client_id: ClientId) -> Result<(), Error>;
}

/// Fixture implementation used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClientCommand;

#[async_trait]
impl ClientCommand for FixtureClientCommand {
    async fn create_client(&self, draft: NewClientDraft) -> Result<ClientId, Error> {
        crate::domain::NewClient::new(draft)
            .map(|_| ClientId::new(1))
            .map_err(Error::from)
    }

    async fn delete_client(&self, client_id: ClientId) -> Result<(), Error> {
        Err(Error::not_found(format!(
            "Client with ID {client_id} not found."
        )))
    }
}
